//! Element types with observable copy, move and drop behavior.

use std::cell::Cell;
use std::rc::Rc;

/// Shared counter of how many times tracked [`CopyCounter`] values were cloned.
#[derive(Clone, Debug, Default)]
pub struct CopyTally(Rc<Cell<usize>>);

impl CopyTally {
    pub fn new() -> CopyTally {
        CopyTally::default()
    }

    /// Creates a value whose clones are recorded in this tally.
    pub fn track(&self, value: i32) -> CopyCounter {
        CopyCounter {
            value,
            tally: Some(self.clone()),
        }
    }

    /// Number of clones recorded so far.
    pub fn copies(&self) -> usize {
        self.0.get()
    }
}

/// An element that reports every clone to its [`CopyTally`].
///
/// Default-constructed values are untracked, so placeholder slots never show
/// up in the count.
#[derive(Debug, Default)]
pub struct CopyCounter {
    value: i32,
    tally: Option<CopyTally>,
}

impl CopyCounter {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for CopyCounter {
    fn clone(&self) -> Self {
        if let Some(tally) = &self.tally {
            tally.0.set(tally.0.get() + 1);
        }
        CopyCounter {
            value: self.value,
            tally: self.tally.clone(),
        }
    }
}

impl PartialEq for CopyCounter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// A move-only element: it has no `Clone` implementation, so any container
/// operation that tried to copy it would not compile.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonCopyable(usize);

impl NonCopyable {
    pub fn new(value: usize) -> NonCopyable {
        NonCopyable(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

/// Shared record of how many tracked [`DropCounter`] values were created and
/// how many of them have been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropTally {
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl DropTally {
    pub fn new() -> DropTally {
        DropTally::default()
    }

    pub fn track(&self, value: i32) -> DropCounter {
        self.created.set(self.created.get() + 1);
        DropCounter {
            value,
            tally: Some(self.clone()),
        }
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Number of tracked values that are still alive.
    pub fn alive(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// An element that reports its drop to a [`DropTally`].
#[derive(Debug, Default)]
pub struct DropCounter {
    value: i32,
    tally: Option<DropTally>,
}

impl DropCounter {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        if let Some(tally) = &self.tally {
            tally.dropped.set(tally.dropped.get() + 1);
        }
    }
}
