//! Name tables mapping host-visible names to their adapters.
use crate::dispatcher::*;

/// Every function the module exports, in registration order.
pub static UNIX_TABLE: &[(&str, HostFn)] = &[
    ("arc4random", unix_arc4random),
    ("chdir", unix_chdir),
    ("dup2", unix_dup2),
    ("errno", unix_errno),
    ("fork", unix_fork),
    ("kill", unix_kill),
    ("getcwd", unix_getcwd),
    ("getpid", unix_getpid),
    ("getpgid", unix_getpgid),
    ("setpgid", unix_setpgid),
    ("sleep", unix_sleep),
    ("unlink", unix_unlink),
    ("getuid", unix_getuid),
    ("getgid", unix_getgid),
    ("chown", unix_chown),
    ("chmod", unix_chmod),
    ("rename", unix_rename),
    ("signal", unix_signal),
    ("setpwent", unix_setpwent),
    ("endpwent", unix_endpwent),
    ("getpwent", unix_getpwent),
    ("getpwnam", unix_getpwnam),
    ("getpwuid", unix_getpwuid),
    #[cfg(target_os = "linux")]
    ("getspnam", unix_getspnam),
    ("getgrnam", unix_getgrnam),
    ("getgrgid", unix_getgrgid),
    ("crypt", unix_crypt),
    ("getpass", unix_getpass),
    ("gethostname", unix_gethostname),
    ("sethostname", unix_sethostname),
    ("openlog", unix_openlog),
    ("syslog", unix_syslog),
    ("closelog", unix_closelog),
    ("setlogmask", unix_setlogmask),
    ("select", unix_select),
    ("fd_set", unix_fd_set),
];

/// Methods callable on an fd_set handle.
pub static FDSET_METHODS: &[(&str, HostFn)] = &[
    ("clr", fd_set_clr),
    ("isset", fd_set_isset),
    ("set", fd_set_set),
    ("zero", fd_set_zero),
];
