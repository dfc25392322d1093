//! Tracking of the at-most-one backdrop behind the popup content.
//!
//! The slot only remembers which backdrop is attached; building and
//! detaching the view is the host's job.

use std::cell::RefCell;

pub struct BackdropSlot<B> {
    current: RefCell<Option<B>>,
}

impl<B> BackdropSlot<B> {
    pub fn new() -> Self {
        Self {
            current: RefCell::new(None),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Track a newly attached backdrop.
    ///
    /// Returns whatever was tracked before so the caller can detach it.
    pub fn attach(&self, backdrop: B) -> Option<B> {
        self.current.borrow_mut().replace(backdrop)
    }

    /// Stop tracking the current backdrop and hand it back for detaching.
    pub fn release(&self) -> Option<B> {
        self.current.borrow_mut().take()
    }
}

impl<B> Default for BackdropSlot<B> {
    fn default() -> Self {
        Self::new()
    }
}
