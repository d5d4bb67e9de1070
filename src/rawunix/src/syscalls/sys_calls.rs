//! Process, identity, signal and hostname forwarders.
use libc::c_char;
use sysdefs::constants::err_const::{get_errno, handle_errno, last_errno};
use sysdefs::constants::HOSTNAME_BUFSIZE;
use sysdefs::data::SignalHandler;

/// Reference to Linux: https://man7.org/linux/man-pages/man2/fork.2.html
///
/// Creates a child process. Returns the child's pid in the parent, 0 in the
/// child, and `-errno` if no child was created.
pub fn fork_syscall() -> i32 {
    let ret = unsafe { libc::fork() };
    if ret < 0 {
        return handle_errno(get_errno(), "fork");
    }
    ret
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/kill.2.html
///
/// `pid` follows the kernel's conventions: positive for one process, 0 for the
/// caller's process group, -1 for every process the caller may signal, and
/// `-pgid` for a whole group. A `sig` of 0 only checks for existence.
pub fn kill_syscall(pid: i32, sig: i32) -> i32 {
    let ret = unsafe { libc::kill(pid, sig) };
    if ret < 0 {
        return handle_errno(get_errno(), "kill");
    }
    ret
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/getpgid.2.html
pub fn getpgid_syscall(pid: i32) -> i32 {
    let ret = unsafe { libc::getpgid(pid) };
    if ret < 0 {
        return handle_errno(get_errno(), "getpgid");
    }
    ret
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/setpgid.2.html
pub fn setpgid_syscall(pid: i32, pgid: i32) -> i32 {
    let ret = unsafe { libc::setpgid(pid, pgid) };
    if ret < 0 {
        return handle_errno(get_errno(), "setpgid");
    }
    ret
}

pub fn getpid_syscall() -> i32 {
    unsafe { libc::getpid() }
}

pub fn getuid_syscall() -> u32 {
    unsafe { libc::getuid() }
}

pub fn getgid_syscall() -> u32 {
    unsafe { libc::getgid() }
}

/// Reference to Linux: https://man7.org/linux/man-pages/man3/sleep.3.html
///
/// Returns the number of seconds left to sleep when a signal cut the sleep
/// short, 0 otherwise.
pub fn sleep_syscall(secs: u32) -> u32 {
    unsafe { libc::sleep(secs) }
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/dup2.2.html
pub fn dup2_syscall(oldfd: i32, newfd: i32) -> i32 {
    let ret = unsafe { libc::dup2(oldfd, newfd) };
    if ret < 0 {
        return handle_errno(get_errno(), "dup2");
    }
    ret
}

/// Fill `buf` from `/dev/urandom`. False if the device cannot be read.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) fn fill_from_urandom(buf: &mut [u8]) -> bool {
    use std::io::Read;
    match std::fs::File::open("/dev/urandom").and_then(|mut f| f.read_exact(buf)) {
        Ok(()) => true,
        Err(e) => {
            handle_errno(e.raw_os_error().unwrap_or(libc::EIO), "arc4random");
            false
        }
    }
}

/// A random 32-bit value from the kernel's generator.
///
/// Uses `getrandom(2)` on Linux, falling back to `/dev/urandom` when the
/// call is unavailable, and `arc4random(3)` where libc provides it. If no
/// source can be read the error is logged and recorded for `errno`, and the
/// value returned is 0; callers cannot tell this apart from a random 0.
pub fn arc4random_syscall() -> u32 {
    cfg_if::cfg_if! {
        if #[cfg(any(target_os = "linux", target_os = "android"))] {
            let mut buf = [0u8; 4];
            let mut filled = 0;
            while filled < buf.len() {
                let ret = unsafe {
                    libc::getrandom(
                        buf[filled..].as_mut_ptr() as *mut libc::c_void,
                        buf.len() - filled,
                        0,
                    )
                };
                if ret < 0 {
                    let errno = get_errno();
                    if errno == libc::EINTR {
                        continue;
                    }
                    handle_errno(errno, "getrandom");
                    if !fill_from_urandom(&mut buf) {
                        return 0;
                    }
                    break;
                }
                filled += ret as usize;
            }
            u32::from_ne_bytes(buf)
        } else {
            unsafe { libc::arc4random() }
        }
    }
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/signal.2.html
///
/// Installs `handler` for `signo` and returns the disposition it replaced.
/// `SignalHandler::Ignore` and `SignalHandler::Default` stand in for
/// `SIG_IGN` and `SIG_DFL`.
///
/// Returns `Err(-errno)` when the kernel refuses, e.g. for `SIGKILL`.
///
/// A previous handler installed with `sigaction(2)` and `SA_SIGINFO` comes
/// back as `Custom` too. Reinstalling it through this call loses its
/// `sigaction` flags.
pub fn signal_syscall(signo: i32, handler: SignalHandler) -> Result<SignalHandler, i32> {
    let old = unsafe { libc::signal(signo, handler.to_raw()) };
    // `old` comes straight from signal(2).
    match unsafe { SignalHandler::from_raw(old) } {
        Some(previous) => Ok(previous),
        None => Err(handle_errno(get_errno(), "signal")),
    }
}

/// Error code of the most recent failing forwarder on this thread.
pub fn errno_syscall() -> i32 {
    last_errno()
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/gethostname.2.html
///
/// `None` when the OS reports an error.
pub fn gethostname_syscall() -> Option<String> {
    let mut buf = [0u8; HOSTNAME_BUFSIZE];
    let ret = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut c_char, buf.len()) };
    if ret != 0 {
        handle_errno(get_errno(), "gethostname");
        return None;
    }
    // POSIX leaves termination unspecified on truncation.
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Some(String::from_utf8_lossy(&buf[..len]).into_owned())
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/sethostname.2.html
///
/// Needs privileges; unprivileged callers get `-EPERM`.
pub fn sethostname_syscall(name: &str) -> i32 {
    let ret = unsafe { libc::sethostname(name.as_ptr() as *const c_char, name.len() as _) };
    if ret < 0 {
        return handle_errno(get_errno(), "sethostname");
    }
    ret
}
