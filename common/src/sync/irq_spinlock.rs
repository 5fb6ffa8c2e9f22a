use core::{
    cell::UnsafeCell,
    marker::PhantomData,
    sync::atomic::{AtomicBool, Ordering},
};

use super::irq::IrqControl;

/// Spinlock that masks interrupts for the duration of the critical
/// section.
///
/// Interrupts are disabled through `I` before the lock is contended,
/// so a holder in normal context cannot be preempted by an interrupt
/// handler that would spin on the same lock forever. The saved
/// interrupt state travels in the guard and is restored on drop.
///
/// Critical sections must stay short and bounded; nothing taken under
/// this lock may block or wait on another CPU's progress while holding
/// it. Not fair, not reentrant.
pub struct IrqSpinLock<T, I: IrqControl> {
    locked: AtomicBool,
    data: UnsafeCell<T>,
    _irq: PhantomData<I>,
}

unsafe impl<T: Send, I: IrqControl> Send for IrqSpinLock<T, I> {}
unsafe impl<T: Send, I: IrqControl> Sync for IrqSpinLock<T, I> {}

impl<T, I: IrqControl> IrqSpinLock<T, I> {
    /// Create a new unlocked instance wrapping `data`.
    pub const fn new(data: T) -> Self {
        Self {
            locked: AtomicBool::new(false),
            data: UnsafeCell::new(data),
            _irq: PhantomData,
        }
    }

    /// Acquire the lock, spinning with interrupts masked until it is
    /// free.
    pub fn lock(&self) -> IrqSpinLockGuard<'_, T, I> {
        let saved = I::disable();

        while self.locked.swap(true, Ordering::Acquire) {
            // Read-only spin until the holder releases, then race again.
            while self.locked.load(Ordering::Relaxed) {
                core::hint::spin_loop();
            }
        }

        IrqSpinLockGuard { lock: self, saved }
    }

    /// Acquire the lock only if it is immediately free.
    ///
    /// On failure the interrupt state is restored before returning.
    pub fn try_lock(&self) -> Option<IrqSpinLockGuard<'_, T, I>> {
        let saved = I::disable();

        if self
            .locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            Some(IrqSpinLockGuard { lock: self, saved })
        } else {
            I::restore(saved);
            None
        }
    }
}

/// Guard returned by [`IrqSpinLock::lock`].
///
/// Releases the lock and restores the saved interrupt state on drop.
pub struct IrqSpinLockGuard<'a, T, I: IrqControl> {
    lock: &'a IrqSpinLock<T, I>,
    saved: I::State,
}

impl<'a, T, I: IrqControl> core::ops::Deref for IrqSpinLockGuard<'a, T, I> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.data.get() }
    }
}

impl<'a, T, I: IrqControl> core::ops::DerefMut for IrqSpinLockGuard<'a, T, I> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<'a, T, I: IrqControl> Drop for IrqSpinLockGuard<'a, T, I> {
    fn drop(&mut self) {
        // Release before unmasking so a handler that fires immediately
        // can take the lock without spinning on this CPU.
        self.lock.locked.store(false, Ordering::Release);
        I::restore(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoIrq;

    impl IrqControl for NoIrq {
        type State = ();

        fn disable() {}
        fn restore(_state: ()) {}
    }

    #[test]
    fn lock_gives_exclusive_mutable_access() {
        let lock: IrqSpinLock<u32, NoIrq> = IrqSpinLock::new(0);
        {
            let mut guard = lock.lock();
            *guard += 1;
        }
        assert_eq!(*lock.lock(), 1);
    }

    #[test]
    fn try_lock_fails_while_held() {
        let lock: IrqSpinLock<u32, NoIrq> = IrqSpinLock::new(0);
        let guard = lock.lock();
        assert!(lock.try_lock().is_none());
        drop(guard);
        assert!(lock.try_lock().is_some());
    }
}
