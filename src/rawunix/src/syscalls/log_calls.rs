//! System logger forwarders.
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::ffi::CString;
use sysdefs::constants::err_const::{syscall_error, Errno};

lazy_static! {
    // openlog(3) keeps the ident pointer, so the string has to outlive the
    // channel. Replaced on every openlog, released on closelog.
    static ref SYSLOG_IDENT: Mutex<Option<CString>> = Mutex::new(None);
}

/// Reference to Linux: https://man7.org/linux/man-pages/man3/openlog.3.html
///
/// Returns 0, or `-EINVAL` if `ident` contains a NUL byte.
pub fn openlog_syscall(ident: &str, option: i32, facility: i32) -> i32 {
    let ident = match CString::new(ident) {
        Ok(s) => s,
        Err(_) => return syscall_error(Errno::EINVAL, "openlog", "ident contains a NUL byte"),
    };
    let mut slot = SYSLOG_IDENT.lock();
    unsafe { libc::openlog(ident.as_ptr(), option, facility) };
    // The old ident is dropped only after libc holds the new pointer.
    *slot = Some(ident);
    0
}

/// Reference to Linux: https://man7.org/linux/man-pages/man3/syslog.3.html
///
/// `message` is logged verbatim; it is never interpreted as a format string.
/// Interior NUL bytes are dropped.
pub fn syslog_syscall(priority: i32, message: &str) -> i32 {
    let message = match CString::new(message) {
        Ok(s) => s,
        Err(e) => {
            let mut bytes = e.into_vec();
            bytes.retain(|&b| b != 0);
            match CString::new(bytes) {
                Ok(s) => s,
                Err(_) => return syscall_error(Errno::EINVAL, "syslog", "bad message"),
            }
        }
    };
    let _guard = SYSLOG_IDENT.lock();
    unsafe {
        libc::syslog(
            priority,
            b"%s\0".as_ptr() as *const libc::c_char,
            message.as_ptr(),
        )
    };
    0
}

/// Reference to Linux: https://man7.org/linux/man-pages/man3/closelog.3.html
pub fn closelog_syscall() {
    let mut slot = SYSLOG_IDENT.lock();
    unsafe { libc::closelog() };
    *slot = None;
}

/// Reference to Linux: https://man7.org/linux/man-pages/man3/setlogmask.3.html
///
/// Returns the previous mask. A mask of 0 only queries.
pub fn setlogmask_syscall(mask: i32) -> i32 {
    unsafe { libc::setlogmask(mask) }
}
