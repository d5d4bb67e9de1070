//! The named integer constants published to the host, so scripts can refer to
//! permission bits, signals and syslog values symbolically.
use super::fs_const::*;
use super::log_const::*;
use super::sys_const::*;

macro_rules! constant {
    ($name:ident) => {
        (stringify!($name), $name)
    };
}

/// Every published constant, in the order the host module registers them.
pub static UNIX_CONSTANTS: &[(&str, i32)] = &[
    // file modes
    constant!(S_IRUSR),
    constant!(S_IWUSR),
    constant!(S_IXUSR),
    constant!(S_IRGRP),
    constant!(S_IWGRP),
    constant!(S_IXGRP),
    constant!(S_IROTH),
    constant!(S_IWOTH),
    constant!(S_IXOTH),
    // signals
    constant!(SIGHUP),
    constant!(SIGINT),
    constant!(SIGQUIT),
    constant!(SIGILL),
    constant!(SIGTRAP),
    constant!(SIGABRT),
    constant!(SIGIOT),
    constant!(SIGBUS),
    constant!(SIGFPE),
    constant!(SIGKILL),
    constant!(SIGUSR1),
    constant!(SIGSEGV),
    constant!(SIGUSR2),
    constant!(SIGPIPE),
    constant!(SIGALRM),
    constant!(SIGTERM),
    #[cfg(target_os = "linux")]
    ("SIGSTKFLT", SIGSTKFLT),
    constant!(SIGCHLD),
    constant!(SIGCONT),
    constant!(SIGSTOP),
    constant!(SIGTSTP),
    constant!(SIGTTIN),
    constant!(SIGTTOU),
    constant!(SIGURG),
    constant!(SIGXCPU),
    constant!(SIGXFSZ),
    constant!(SIGVTALRM),
    constant!(SIGPROF),
    constant!(SIGWINCH),
    #[cfg(target_os = "linux")]
    ("SIGPOLL", SIGPOLL),
    constant!(SIGIO),
    #[cfg(target_os = "linux")]
    ("SIGPWR", SIGPWR),
    constant!(SIGSYS),
    // syslog options
    constant!(LOG_CONS),
    constant!(LOG_NDELAY),
    constant!(LOG_NOWAIT),
    constant!(LOG_ODELAY),
    constant!(LOG_PERROR),
    constant!(LOG_PID),
    // syslog facilities
    constant!(LOG_AUTH),
    constant!(LOG_AUTHPRIV),
    constant!(LOG_CRON),
    constant!(LOG_DAEMON),
    constant!(LOG_FTP),
    constant!(LOG_KERN),
    constant!(LOG_LOCAL0),
    constant!(LOG_LOCAL1),
    constant!(LOG_LOCAL2),
    constant!(LOG_LOCAL3),
    constant!(LOG_LOCAL4),
    constant!(LOG_LOCAL5),
    constant!(LOG_LOCAL6),
    constant!(LOG_LOCAL7),
    constant!(LOG_LPR),
    constant!(LOG_MAIL),
    constant!(LOG_NEWS),
    constant!(LOG_SYSLOG),
    constant!(LOG_USER),
    constant!(LOG_UUCP),
    // syslog levels
    constant!(LOG_EMERG),
    constant!(LOG_ALERT),
    constant!(LOG_CRIT),
    constant!(LOG_ERR),
    constant!(LOG_WARNING),
    constant!(LOG_NOTICE),
    constant!(LOG_INFO),
    constant!(LOG_DEBUG),
];

/// Look a published constant up by name.
pub fn lookup_constant(name: &str) -> Option<i32> {
    UNIX_CONSTANTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, v)| v)
}
