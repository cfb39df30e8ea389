//! Menu overlay state machine and the scroll-lock capability it holds.
//!
//! The overlay is the one explicit state machine in the layer:
//! `Closed -> Open` on the open action, `Open -> Closed` on close or on any
//! navigation choice made inside it. While open it holds a page-level
//! scroll lock; the lock is released exactly once per acquisition, on close
//! or on teardown of the owner, whichever comes first.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

/// The shared scroll-disable flag, injected so the overlay owner never
/// reaches for a bare global and so tests can count acquisitions.
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
}

/// Default lock: a shared boolean flag with last-writer-wins semantics.
/// The page view keeps a handle and ignores scroll input while set.
#[derive(Debug, Clone, Default)]
pub struct FlagLock {
    flag: Rc<Cell<bool>>,
}

impl FlagLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Another handle onto the same flag.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    pub fn is_locked(&self) -> bool {
        self.flag.get()
    }
}

impl ScrollLock for FlagLock {
    fn lock(&mut self) {
        self.flag.set(true);
    }

    fn unlock(&mut self) {
        self.flag.set(false);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

pub struct MenuOverlay {
    state: MenuState,
    lock: Box<dyn ScrollLock>,
    holding: bool,
}

impl MenuOverlay {
    pub fn new(lock: Box<dyn ScrollLock>) -> Self {
        Self {
            state: MenuState::default(),
            lock,
            holding: false,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn open(&mut self) {
        if self.state == MenuState::Closed {
            self.state = MenuState::Open;
            self.acquire();
            debug!("menu overlay opened");
        }
    }

    /// Close by any of the closing actions. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.state == MenuState::Open {
            self.state = MenuState::Closed;
            debug!("menu overlay closed");
        }
        self.release();
    }

    pub fn toggle(&mut self) {
        match self.state {
            MenuState::Closed => self.open(),
            MenuState::Open => self.close(),
        }
    }

    fn acquire(&mut self) {
        if !self.holding {
            self.lock.lock();
            self.holding = true;
        }
    }

    fn release(&mut self) {
        if self.holding {
            self.lock.unlock();
            self.holding = false;
        }
    }
}

impl Drop for MenuOverlay {
    /// The lock is a shared resource; teardown restores it to unlocked
    /// regardless of the menu's logical state at that moment.
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct CountingLock {
        locks: Rc<Cell<u32>>,
        unlocks: Rc<Cell<u32>>,
    }

    impl ScrollLock for CountingLock {
        fn lock(&mut self) {
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&mut self) {
            self.unlocks.set(self.unlocks.get() + 1);
        }
    }

    #[test]
    fn starts_closed_and_unlocked() {
        let flag = FlagLock::new();
        let overlay = MenuOverlay::new(Box::new(flag.handle()));
        assert_eq!(overlay.state(), MenuState::Closed);
        assert!(!flag.is_locked());
    }

    #[test]
    fn open_locks_and_close_unlocks() {
        let flag = FlagLock::new();
        let mut overlay = MenuOverlay::new(Box::new(flag.handle()));

        overlay.open();
        assert!(overlay.is_open());
        assert!(flag.is_locked());

        overlay.close();
        assert!(!overlay.is_open());
        assert!(!flag.is_locked());
    }

    #[test]
    fn double_close_unlocks_exactly_once() {
        let counter = CountingLock::default();
        let mut overlay = MenuOverlay::new(Box::new(counter.clone()));

        overlay.open();
        overlay.close();
        overlay.close();

        assert_eq!(counter.locks.get(), 1);
        assert_eq!(counter.unlocks.get(), 1);
    }

    #[test]
    fn rapid_toggles_keep_lock_and_unlock_paired() {
        let counter = CountingLock::default();
        let mut overlay = MenuOverlay::new(Box::new(counter.clone()));

        for _ in 0..5 {
            overlay.toggle();
            overlay.toggle();
        }

        assert_eq!(counter.locks.get(), 5);
        assert_eq!(counter.unlocks.get(), 5);
        assert!(!overlay.is_open());
    }

    #[test]
    fn teardown_while_open_releases_the_lock() {
        let counter = CountingLock::default();
        {
            let mut overlay = MenuOverlay::new(Box::new(counter.clone()));
            overlay.open();
        }
        assert_eq!(counter.unlocks.get(), 1);
    }

    #[test]
    fn teardown_while_closed_does_not_unlock_again() {
        let counter = CountingLock::default();
        {
            let mut overlay = MenuOverlay::new(Box::new(counter.clone()));
            overlay.open();
            overlay.close();
        }
        assert_eq!(counter.unlocks.get(), 1);
    }
}
