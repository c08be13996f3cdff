//! Shared allocation handle behind every container and opaque value.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Reference-counted, lock-protected allocation.
///
/// Cloning a `Shared` clones the handle. Every clone sees the same
/// container, so an entry written or a lock applied through one handle is
/// visible through all of them. Two separately allocated containers are
/// never `ptr_eq`, even when their contents are equal.
pub struct Shared<T>(Arc<RwLock<T>>);

impl<T> Shared<T> {
    #[inline]
    pub(crate) fn new(inner: T) -> Self {
        Shared(Arc::new(RwLock::new(inner)))
    }

    /// Shared read access.
    ///
    /// Re-entrant: a container compared or printed against itself takes the
    /// read lock twice on one thread, which must not wait on a queued writer.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read_recursive()
    }

    /// Exclusive write access.
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Allocation address, used to hash by identity.
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }

    #[inline]
    pub(crate) fn downgrade(&self) -> WeakShared<T> {
        WeakShared(Arc::downgrade(&self.0))
    }
}

impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

/// Non-owning handle to a `Shared` allocation.
pub(crate) struct WeakShared<T>(Weak<RwLock<T>>);

impl<T> WeakShared<T> {
    #[inline]
    pub(crate) fn upgrade(&self) -> Option<Shared<T>> {
        self.0.upgrade().map(Shared)
    }
}

impl<T> Clone for WeakShared<T> {
    fn clone(&self) -> Self {
        WeakShared(Weak::clone(&self.0))
    }
}
