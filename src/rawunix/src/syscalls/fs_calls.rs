//! Filesystem forwarders: working directory, names and permissions.
use libc::c_char;
use std::ffi::CString;
use sysdefs::constants::err_const::{get_errno, handle_errno, syscall_error, Errno};
use sysdefs::constants::PATH_MAX;

/// Convert a path for the OS. A path with an interior NUL is reported as
/// `-EINVAL` without reaching the OS.
fn path_to_host(path: &str, syscall: &str) -> Result<CString, i32> {
    CString::new(path)
        .map_err(|_| syscall_error(Errno::EINVAL, syscall, "path contains a NUL byte"))
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/chdir.2.html
pub fn chdir_syscall(path: &str) -> i32 {
    let path = match path_to_host(path, "chdir") {
        Ok(p) => p,
        Err(e) => return e,
    };
    // Call the kernel chdir function
    let ret = unsafe { libc::chdir(path.as_ptr()) };
    if ret < 0 {
        return handle_errno(get_errno(), "chdir");
    }
    ret
}

/// Reference to Linux: https://man7.org/linux/man-pages/man3/getcwd.3.html
///
/// `None` if the directory cannot be determined, e.g. it was removed or its
/// path is longer than `PATH_MAX`.
pub fn getcwd_syscall() -> Option<String> {
    let mut buf = vec![0u8; PATH_MAX];
    let ret = unsafe { libc::getcwd(buf.as_mut_ptr() as *mut c_char, buf.len()) };
    if ret.is_null() {
        handle_errno(get_errno(), "getcwd");
        return None;
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    buf.truncate(len);
    Some(String::from_utf8_lossy(&buf).into_owned())
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/rename.2.html
pub fn rename_syscall(oldpath: &str, newpath: &str) -> i32 {
    let (oldpath, newpath) = match (
        path_to_host(oldpath, "rename"),
        path_to_host(newpath, "rename"),
    ) {
        (Ok(o), Ok(n)) => (o, n),
        (Err(e), _) | (_, Err(e)) => return e,
    };
    let ret = unsafe { libc::rename(oldpath.as_ptr(), newpath.as_ptr()) };
    if ret < 0 {
        return handle_errno(get_errno(), "rename");
    }
    ret
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/unlink.2.html
pub fn unlink_syscall(path: &str) -> i32 {
    let path = match path_to_host(path, "unlink") {
        Ok(p) => p,
        Err(e) => return e,
    };
    let ret = unsafe { libc::unlink(path.as_ptr()) };
    if ret < 0 {
        return handle_errno(get_errno(), "unlink");
    }
    ret
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/chmod.2.html
///
/// Only the permission and mode bits of `mode` are passed on.
pub fn chmod_syscall(path: &str, mode: u32) -> i32 {
    let path = match path_to_host(path, "chmod") {
        Ok(p) => p,
        Err(e) => return e,
    };
    let ret = unsafe { libc::chmod(path.as_ptr(), (mode & 0o7777) as libc::mode_t) };
    if ret < 0 {
        return handle_errno(get_errno(), "chmod");
    }
    ret
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/chown.2.html
///
/// An id of `u32::MAX` (`(uid_t)-1`) leaves that id unchanged.
pub fn chown_syscall(path: &str, uid: u32, gid: u32) -> i32 {
    let path = match path_to_host(path, "chown") {
        Ok(p) => p,
        Err(e) => return e,
    };
    let ret = unsafe { libc::chown(path.as_ptr(), uid, gid) };
    if ret < 0 {
        return handle_errno(get_errno(), "chown");
    }
    ret
}
