use crate::DescriptorSet;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use sysdefs::constants::Errno;

/// Shared, opaque handle to a [`DescriptorSet`].
///
/// Clones refer to the same set, the way a host value refers to one userdata
/// object. Only the set operations are reachable through the handle; the wait
/// reads and writes the whole set through `snapshot`/`store`.
#[derive(Clone, Default)]
pub struct FdSetHandle(Arc<Mutex<DescriptorSet>>);

impl FdSetHandle {
    pub fn new() -> FdSetHandle {
        FdSetHandle(Arc::new(Mutex::new(DescriptorSet::new())))
    }

    pub fn zero(&self) {
        self.0.lock().zero();
    }

    pub fn set(&self, fd: i32) -> Result<(), Errno> {
        self.0.lock().set(fd)
    }

    pub fn clear(&self, fd: i32) -> Result<(), Errno> {
        self.0.lock().clear(fd)
    }

    pub fn is_set(&self, fd: i32) -> bool {
        self.0.lock().is_set(fd)
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> DescriptorSet {
        *self.0.lock()
    }

    /// Replace the contents, used to write back the result of a wait.
    pub fn store(&self, set: DescriptorSet) {
        *self.0.lock() = set;
    }

    /// Whether both handles refer to the same set.
    pub fn ptr_eq(&self, other: &FdSetHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Stable identity of the underlying set, used when printing host values.
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl fmt::Debug for FdSetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FdSetHandle").field(&*self.0.lock()).finish()
    }
}
