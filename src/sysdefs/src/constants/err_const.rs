//! Errno plumbing shared by every forwarder.
//!
//! Forwarders follow the libc convention with one twist: a failing call returns
//! `-errno` instead of a bare `-1`, so the caller gets the failure indicator and
//! the error code in one value. The code is also stored in a thread-local slot
//! so the host-facing `errno` accessor can report it after the fact.
use once_cell::sync::OnceCell;
use std::cell::Cell;
use std::fmt;

/// Process-wide verbosity, set once by `rawunix_start`. Zero keeps errno
/// reports at debug level, anything above promotes them to warnings.
pub static VERBOSE: OnceCell<isize> = OnceCell::new();

thread_local! {
    static LAST_ERRNO: Cell<i32> = const { Cell::new(0) };
}

/// Error codes the layer names explicitly. Values come straight from libc so
/// they match whatever the host kernel reports.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(i32)]
pub enum Errno {
    EPERM = libc::EPERM,
    ENOENT = libc::ENOENT,
    ESRCH = libc::ESRCH,
    EINTR = libc::EINTR,
    EIO = libc::EIO,
    EBADF = libc::EBADF,
    ECHILD = libc::ECHILD,
    EAGAIN = libc::EAGAIN,
    ENOMEM = libc::ENOMEM,
    EACCES = libc::EACCES,
    EFAULT = libc::EFAULT,
    EBUSY = libc::EBUSY,
    EEXIST = libc::EEXIST,
    EXDEV = libc::EXDEV,
    ENOTDIR = libc::ENOTDIR,
    EISDIR = libc::EISDIR,
    EINVAL = libc::EINVAL,
    EMFILE = libc::EMFILE,
    ENOSPC = libc::ENOSPC,
    EROFS = libc::EROFS,
    ERANGE = libc::ERANGE,
    ENAMETOOLONG = libc::ENAMETOOLONG,
    ENOSYS = libc::ENOSYS,
    ELOOP = libc::ELOOP,
}

impl Errno {
    const ALL: [Errno; 24] = [
        Errno::EPERM,
        Errno::ENOENT,
        Errno::ESRCH,
        Errno::EINTR,
        Errno::EIO,
        Errno::EBADF,
        Errno::ECHILD,
        Errno::EAGAIN,
        Errno::ENOMEM,
        Errno::EACCES,
        Errno::EFAULT,
        Errno::EBUSY,
        Errno::EEXIST,
        Errno::EXDEV,
        Errno::ENOTDIR,
        Errno::EISDIR,
        Errno::EINVAL,
        Errno::EMFILE,
        Errno::ENOSPC,
        Errno::EROFS,
        Errno::ERANGE,
        Errno::ENAMETOOLONG,
        Errno::ENOSYS,
        Errno::ELOOP,
    ];

    /// Map a raw errno value back to a named code, if the layer knows it.
    pub fn from_raw(raw: i32) -> Option<Errno> {
        Self::ALL.iter().copied().find(|e| *e as i32 == raw)
    }

    pub fn raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, *self as i32)
    }
}

/// Read the calling thread's libc errno.
pub fn get_errno() -> i32 {
    cfg_if::cfg_if! {
        if #[cfg(any(target_os = "linux", target_os = "android"))] {
            unsafe { *libc::__errno_location() }
        } else if #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))] {
            unsafe { *libc::__error() }
        } else {
            std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
        }
    }
}

/// Overwrite the calling thread's libc errno, for wrappers that refuse a call
/// before it reaches the OS but keep the libc `-1`/errno convention.
pub fn set_errno(errno: i32) {
    cfg_if::cfg_if! {
        if #[cfg(any(target_os = "linux", target_os = "android"))] {
            unsafe { *libc::__errno_location() = errno }
        } else if #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))] {
            unsafe { *libc::__error() = errno }
        } else {
            let _ = errno;
        }
    }
}

/// Error code recorded by the most recent failing forwarder on this thread.
pub fn last_errno() -> i32 {
    LAST_ERRNO.with(|slot| slot.get())
}

pub fn set_last_errno(errno: i32) {
    LAST_ERRNO.with(|slot| slot.set(errno));
}

fn verbose() -> bool {
    VERBOSE.get().copied().unwrap_or(0) > 0
}

/// Record an errno reported by the OS for `syscall` and turn it into the
/// negative return value of the forwarder.
///
/// The caller must read errno before anything else runs, since logging may
/// overwrite it.
pub fn handle_errno(errno: i32, syscall: &str) -> i32 {
    set_last_errno(errno);
    let name = Errno::from_raw(errno)
        .map(|e| format!("{:?}", e))
        .unwrap_or_else(|| "unknown".to_string());
    if verbose() {
        log::warn!("{}: failed with errno {} ({})", syscall, errno, name);
    } else {
        log::debug!("{}: failed with errno {} ({})", syscall, errno, name);
    }
    -errno
}

/// Report an error detected by the layer itself, before or instead of an OS call.
pub fn syscall_error(e: Errno, syscall: &str, message: &str) -> i32 {
    set_last_errno(e.raw());
    if verbose() {
        log::warn!("{}: {} ({})", syscall, message, e);
    } else {
        log::debug!("{}: {} ({})", syscall, message, e);
    }
    -e.raw()
}
