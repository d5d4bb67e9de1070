//! Host-facing adapters.
//!
//! Each `unix_*` function takes the host's positional arguments, converts
//! them, calls exactly one forwarder and boxes the result. Argument errors
//! abort the call before the OS is touched.
//!
//! Integer results are passed through unchanged, so a failure reaches the
//! host as `-errno` rather than `-1`.
use crate::syscalls::*;
use fdsets::FdSetHandle;
use sysdefs::constants::err_const::Errno;
use typemap::*;

/// A function exported to the host.
pub type HostFn = fn(&[HostValue]) -> Result<Vec<HostValue>, HostError>;

type HostResult = Result<Vec<HostValue>, HostError>;

fn one(value: impl Into<HostValue>) -> HostResult {
    Ok(vec![value.into()])
}

fn none() -> HostResult {
    Ok(Vec::new())
}

pub fn unix_arc4random(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "arc4random")?;
    one(arc4random_syscall())
}

pub fn unix_chdir(args: &[HostValue]) -> HostResult {
    let path = sc_convert_arg_to_str(args, 1, "chdir")?;
    sc_unusedarg(args, 2, "chdir")?;
    one(chdir_syscall(&path))
}

pub fn unix_dup2(args: &[HostValue]) -> HostResult {
    let oldfd = sc_convert_arg_to_i32(args, 1, "dup2")?;
    let newfd = sc_convert_arg_to_i32(args, 2, "dup2")?;
    sc_unusedarg(args, 3, "dup2")?;
    one(dup2_syscall(oldfd, newfd))
}

pub fn unix_errno(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "errno")?;
    one(errno_syscall())
}

pub fn unix_fork(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "fork")?;
    one(fork_syscall())
}

pub fn unix_kill(args: &[HostValue]) -> HostResult {
    let pid = sc_convert_arg_to_i32(args, 1, "kill")?;
    let sig = sc_convert_arg_to_i32(args, 2, "kill")?;
    sc_unusedarg(args, 3, "kill")?;
    one(kill_syscall(pid, sig))
}

pub fn unix_getcwd(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "getcwd")?;
    one(getcwd_syscall())
}

pub fn unix_getpid(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "getpid")?;
    one(getpid_syscall())
}

pub fn unix_getpgid(args: &[HostValue]) -> HostResult {
    let pid = sc_convert_arg_to_i32(args, 1, "getpgid")?;
    sc_unusedarg(args, 2, "getpgid")?;
    one(getpgid_syscall(pid))
}

pub fn unix_setpgid(args: &[HostValue]) -> HostResult {
    let pid = sc_convert_arg_to_i32(args, 1, "setpgid")?;
    let pgid = sc_convert_arg_to_i32(args, 2, "setpgid")?;
    sc_unusedarg(args, 3, "setpgid")?;
    one(setpgid_syscall(pid, pgid))
}

pub fn unix_sleep(args: &[HostValue]) -> HostResult {
    let secs = sc_convert_arg_to_u32(args, 1, "sleep")?;
    sc_unusedarg(args, 2, "sleep")?;
    one(sleep_syscall(secs))
}

pub fn unix_unlink(args: &[HostValue]) -> HostResult {
    let path = sc_convert_arg_to_str(args, 1, "unlink")?;
    sc_unusedarg(args, 2, "unlink")?;
    one(unlink_syscall(&path))
}

pub fn unix_getuid(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "getuid")?;
    one(getuid_syscall())
}

pub fn unix_getgid(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "getgid")?;
    one(getgid_syscall())
}

pub fn unix_chown(args: &[HostValue]) -> HostResult {
    let path = sc_convert_arg_to_str(args, 1, "chown")?;
    let uid = sc_convert_arg_to_id(args, 2, "chown")?;
    let gid = sc_convert_arg_to_id(args, 3, "chown")?;
    sc_unusedarg(args, 4, "chown")?;
    one(chown_syscall(&path, uid, gid))
}

pub fn unix_chmod(args: &[HostValue]) -> HostResult {
    let path = sc_convert_arg_to_str(args, 1, "chmod")?;
    let mode = sc_convert_arg_to_u32(args, 2, "chmod")?;
    sc_unusedarg(args, 3, "chmod")?;
    one(chmod_syscall(&path, mode))
}

pub fn unix_rename(args: &[HostValue]) -> HostResult {
    let oldpath = sc_convert_arg_to_str(args, 1, "rename")?;
    let newpath = sc_convert_arg_to_str(args, 2, "rename")?;
    sc_unusedarg(args, 3, "rename")?;
    one(rename_syscall(&oldpath, &newpath))
}

/// `signal(signo, handler)` returns the previous handler, or nil if the
/// kernel refused the change.
pub fn unix_signal(args: &[HostValue]) -> HostResult {
    let signo = sc_convert_arg_to_i32(args, 1, "signal")?;
    let handler = sc_convert_arg_to_handler(args, 2, "signal")?;
    sc_unusedarg(args, 3, "signal")?;
    one(signal_syscall(signo, handler).ok())
}

pub fn unix_setpwent(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "setpwent")?;
    setpwent_syscall();
    none()
}

pub fn unix_endpwent(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "endpwent")?;
    endpwent_syscall();
    none()
}

pub fn unix_getpwent(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "getpwent")?;
    Ok(vec![opt_record_to_host(getpwent_syscall(), passwd_to_host)])
}

pub fn unix_getpwnam(args: &[HostValue]) -> HostResult {
    let name = sc_convert_arg_to_str(args, 1, "getpwnam")?;
    sc_unusedarg(args, 2, "getpwnam")?;
    Ok(vec![opt_record_to_host(getpwnam_syscall(&name), passwd_to_host)])
}

pub fn unix_getpwuid(args: &[HostValue]) -> HostResult {
    let uid = sc_convert_arg_to_u32(args, 1, "getpwuid")?;
    sc_unusedarg(args, 2, "getpwuid")?;
    Ok(vec![opt_record_to_host(getpwuid_syscall(uid), passwd_to_host)])
}

#[cfg(target_os = "linux")]
pub fn unix_getspnam(args: &[HostValue]) -> HostResult {
    let name = sc_convert_arg_to_str(args, 1, "getspnam")?;
    sc_unusedarg(args, 2, "getspnam")?;
    Ok(vec![opt_record_to_host(getspnam_syscall(&name), shadow_to_host)])
}

pub fn unix_getgrnam(args: &[HostValue]) -> HostResult {
    let name = sc_convert_arg_to_str(args, 1, "getgrnam")?;
    sc_unusedarg(args, 2, "getgrnam")?;
    Ok(vec![opt_record_to_host(getgrnam_syscall(&name), group_to_host)])
}

pub fn unix_getgrgid(args: &[HostValue]) -> HostResult {
    let gid = sc_convert_arg_to_u32(args, 1, "getgrgid")?;
    sc_unusedarg(args, 2, "getgrgid")?;
    Ok(vec![opt_record_to_host(getgrgid_syscall(gid), group_to_host)])
}

/// The hash, or nil when the setting is rejected.
pub fn unix_crypt(args: &[HostValue]) -> HostResult {
    let key = sc_convert_arg_to_str(args, 1, "crypt")?;
    let setting = sc_convert_arg_to_str(args, 2, "crypt")?;
    sc_unusedarg(args, 3, "crypt")?;
    one(crypt_syscall(&key, &setting))
}

pub fn unix_getpass(args: &[HostValue]) -> HostResult {
    let prompt = sc_convert_arg_to_str(args, 1, "getpass")?;
    sc_unusedarg(args, 2, "getpass")?;
    one(getpass_syscall(&prompt))
}

pub fn unix_gethostname(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "gethostname")?;
    one(gethostname_syscall())
}

/// `true` on success, nil on failure.
pub fn unix_sethostname(args: &[HostValue]) -> HostResult {
    let name = sc_convert_arg_to_str(args, 1, "sethostname")?;
    sc_unusedarg(args, 2, "sethostname")?;
    let ok = sethostname_syscall(&name) == 0;
    one(ok.then_some(true))
}

pub fn unix_openlog(args: &[HostValue]) -> HostResult {
    let ident = sc_convert_arg_to_str(args, 1, "openlog")?;
    let option = sc_convert_arg_to_i32(args, 2, "openlog")?;
    let facility = sc_convert_arg_to_i32(args, 3, "openlog")?;
    sc_unusedarg(args, 4, "openlog")?;
    if openlog_syscall(&ident, option, facility) < 0 {
        return Err(HostError::bad_argument("openlog", 1, "ident contains a NUL byte"));
    }
    none()
}

pub fn unix_syslog(args: &[HostValue]) -> HostResult {
    let priority = sc_convert_arg_to_i32(args, 1, "syslog")?;
    let message = sc_convert_arg_to_str(args, 2, "syslog")?;
    sc_unusedarg(args, 3, "syslog")?;
    syslog_syscall(priority, &message);
    none()
}

pub fn unix_closelog(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "closelog")?;
    closelog_syscall();
    none()
}

pub fn unix_setlogmask(args: &[HostValue]) -> HostResult {
    let mask = sc_convert_arg_to_i32(args, 1, "setlogmask")?;
    sc_unusedarg(args, 2, "setlogmask")?;
    one(setlogmask_syscall(mask))
}

/// `select(nfds, readfds, writefds, errorfds, timeout)`. Sets may be nil, a nil
/// timeout waits forever.
pub fn unix_select(args: &[HostValue]) -> HostResult {
    let nfds = sc_convert_arg_to_i32(args, 1, "select")?;
    let readfds = sc_convert_arg_to_opt_fdset(args, 2, "select")?;
    let writefds = sc_convert_arg_to_opt_fdset(args, 3, "select")?;
    let errorfds = sc_convert_arg_to_opt_fdset(args, 4, "select")?;
    let timeout = sc_convert_arg_to_timeout(args, 5, "select")?;
    sc_unusedarg(args, 6, "select")?;
    one(select_syscall(nfds, readfds, writefds, errorfds, timeout))
}

/// `fd_set()` allocates a new empty set.
pub fn unix_fd_set(args: &[HostValue]) -> HostResult {
    sc_unusedarg(args, 1, "fd_set")?;
    one(FdSetHandle::new())
}

// Methods receive the set as argument #1, the way the host passes `self`.

fn fd_index(args: &[HostValue], func: &str) -> Result<i32, HostError> {
    sc_convert_arg_to_i32(args, 2, func)
}

fn range_error(func: &str, e: Errno) -> HostError {
    HostError::bad_argument(func, 2, format!("descriptor out of range ({})", e))
}

pub fn fd_set_clr(args: &[HostValue]) -> HostResult {
    let set = sc_convert_arg_to_fdset(args, 1, "clr")?;
    let fd = fd_index(args, "clr")?;
    sc_unusedarg(args, 3, "clr")?;
    set.clear(fd).map_err(|e| range_error("clr", e))?;
    none()
}

pub fn fd_set_isset(args: &[HostValue]) -> HostResult {
    let set = sc_convert_arg_to_fdset(args, 1, "isset")?;
    let fd = fd_index(args, "isset")?;
    sc_unusedarg(args, 3, "isset")?;
    one(set.is_set(fd))
}

pub fn fd_set_set(args: &[HostValue]) -> HostResult {
    let set = sc_convert_arg_to_fdset(args, 1, "set")?;
    let fd = fd_index(args, "set")?;
    sc_unusedarg(args, 3, "set")?;
    set.set(fd).map_err(|e| range_error("set", e))?;
    none()
}

pub fn fd_set_zero(args: &[HostValue]) -> HostResult {
    let set = sc_convert_arg_to_fdset(args, 1, "zero")?;
    sc_unusedarg(args, 2, "zero")?;
    set.zero();
    none()
}
