use libc::fd_set;
use std::fmt;
use std::mem;
use sysdefs::constants::{Errno, FD_SETSIZE};

/// A set of descriptor indices, laid out as the native `fd_set` so it can be
/// handed to `select(2)` without translation.
#[derive(Clone, Copy)]
pub struct DescriptorSet {
    raw: fd_set,
}

// Helper to get an empty fd_set. Isolates the unsafe initialisation.
fn init_fd_set() -> fd_set {
    let raw_fd_set: fd_set;
    unsafe {
        let mut this_fd_set = mem::MaybeUninit::<fd_set>::uninit();
        libc::FD_ZERO(this_fd_set.as_mut_ptr());
        raw_fd_set = this_fd_set.assume_init();
    }
    raw_fd_set
}

#[inline]
fn in_range(fd: i32) -> bool {
    (0..FD_SETSIZE).contains(&fd)
}

impl DescriptorSet {
    /// An empty set.
    pub fn new() -> DescriptorSet {
        DescriptorSet { raw: init_fd_set() }
    }

    /// Remove every member.
    pub fn zero(&mut self) {
        unsafe { libc::FD_ZERO(&mut self.raw) }
    }

    /// Add `fd` to the set.
    ///
    /// Indices outside `[0, FD_SETSIZE)` are rejected with `EINVAL` and the
    /// set is left unchanged.
    pub fn set(&mut self, fd: i32) -> Result<(), Errno> {
        if !in_range(fd) {
            return Err(Errno::EINVAL);
        }
        unsafe { libc::FD_SET(fd, &mut self.raw) }
        Ok(())
    }

    /// Remove `fd` from the set. Same range policy as [`DescriptorSet::set`].
    pub fn clear(&mut self, fd: i32) -> Result<(), Errno> {
        if !in_range(fd) {
            return Err(Errno::EINVAL);
        }
        unsafe { libc::FD_CLR(fd, &mut self.raw) }
        Ok(())
    }

    /// Whether `fd` is a member. An out-of-range index is never a member.
    pub fn is_set(&self, fd: i32) -> bool {
        in_range(fd) && unsafe { libc::FD_ISSET(fd, &self.raw) }
    }

    pub fn is_empty(&self) -> bool {
        self.members(FD_SETSIZE).next().is_none()
    }

    /// Members below `nfds`, in ascending order.
    pub fn members(&self, nfds: i32) -> impl Iterator<Item = i32> + '_ {
        (0..nfds.clamp(0, FD_SETSIZE)).filter(move |fd| self.is_set(*fd))
    }

    /// Drop every member at or above `nfds`.
    pub fn truncate(&mut self, nfds: i32) {
        for fd in nfds.max(0)..FD_SETSIZE {
            unsafe { libc::FD_CLR(fd, &mut self.raw) }
        }
    }

    pub(crate) fn as_raw_mut(&mut self) -> *mut fd_set {
        &mut self.raw
    }
}

impl Default for DescriptorSet {
    fn default() -> Self {
        DescriptorSet::new()
    }
}

impl PartialEq for DescriptorSet {
    fn eq(&self, other: &Self) -> bool {
        self.members(FD_SETSIZE).eq(other.members(FD_SETSIZE))
    }
}

impl Eq for DescriptorSet {}

impl fmt::Debug for DescriptorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members(FD_SETSIZE)).finish()
    }
}
