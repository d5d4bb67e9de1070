//! Password hashing and terminal password prompts.
//!
//! `crypt(3)` and `getpass(3)` return pointers into static storage that the
//! next call overwrites, so both copy their result out under `PASS_LOCK`.
use lazy_static::lazy_static;
use libc::c_char;
use parking_lot::Mutex;
use std::ffi::{CStr, CString};
use sysdefs::constants::err_const::{get_errno, handle_errno};

// glibc keeps crypt in libcrypt; the BSDs and macOS keep it in libc.
#[cfg_attr(target_os = "linux", link(name = "crypt"))]
extern "C" {
    fn crypt(key: *const c_char, salt: *const c_char) -> *mut c_char;
    fn getpass(prompt: *const c_char) -> *mut c_char;
}

lazy_static! {
    static ref PASS_LOCK: Mutex<()> = Mutex::new(());
}

unsafe fn copy_static(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Reference to Linux: https://man7.org/linux/man-pages/man3/crypt.3.html
///
/// Hash `key` with the method and salt named by `setting`, e.g. `$6$salt$`
/// for SHA-512 or a full hash to verify against. `None` when the setting is
/// unsupported or malformed, or when either string holds a NUL.
pub fn crypt_syscall(key: &str, setting: &str) -> Option<String> {
    let key = CString::new(key).ok()?;
    let setting = CString::new(setting).ok()?;
    let _guard = PASS_LOCK.lock();
    let hash = unsafe { copy_static(crypt(key.as_ptr(), setting.as_ptr())) };
    match hash {
        // libxcrypt reports failure as a hash starting with '*'.
        Some(h) if !h.starts_with('*') => Some(h),
        _ => {
            handle_errno(get_errno(), "crypt");
            None
        }
    }
}

/// Reference to Linux: https://man7.org/linux/man-pages/man3/getpass.3.html
///
/// Print `prompt` on the controlling terminal and read a line with echo
/// turned off. Blocks until the line is entered. `None` when no terminal
/// can be opened or the read fails.
pub fn getpass_syscall(prompt: &str) -> Option<String> {
    let prompt = CString::new(prompt).ok()?;
    let _guard = PASS_LOCK.lock();
    let line = unsafe { copy_static(getpass(prompt.as_ptr())) };
    if line.is_none() {
        handle_errno(get_errno(), "getpass");
    }
    line
}
