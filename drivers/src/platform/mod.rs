//! Platform-specific drivers.
//!
//! Each supported SoC gets its own module, selected by a Cargo
//! feature. The rest of the system reaches the hardware only through
//! the [`crate::hal`] traits these modules implement.

// Platform selection based on Cargo features
cfg_if::cfg_if! {
    if #[cfg(feature = "mss")] {
        pub mod mss;
        pub use mss::MssGpio;
    } else {
        compile_error!(
            "No platform selected!\n\
            Use: cargo build --features mss"
        );
    }
}
