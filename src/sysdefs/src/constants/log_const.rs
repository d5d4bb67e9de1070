//! syslog option, facility and level constants plus the mask helpers that
//! libc only offers as C macros.

// ===== openlog options =====
pub const LOG_CONS: i32 = libc::LOG_CONS;
pub const LOG_NDELAY: i32 = libc::LOG_NDELAY;
pub const LOG_NOWAIT: i32 = libc::LOG_NOWAIT;
pub const LOG_ODELAY: i32 = libc::LOG_ODELAY;
pub const LOG_PERROR: i32 = libc::LOG_PERROR;
pub const LOG_PID: i32 = libc::LOG_PID;

// ===== Facilities =====
pub const LOG_AUTH: i32 = libc::LOG_AUTH;
pub const LOG_AUTHPRIV: i32 = libc::LOG_AUTHPRIV;
pub const LOG_CRON: i32 = libc::LOG_CRON;
pub const LOG_DAEMON: i32 = libc::LOG_DAEMON;
pub const LOG_FTP: i32 = libc::LOG_FTP;
pub const LOG_KERN: i32 = libc::LOG_KERN;
pub const LOG_LOCAL0: i32 = libc::LOG_LOCAL0;
pub const LOG_LOCAL1: i32 = libc::LOG_LOCAL1;
pub const LOG_LOCAL2: i32 = libc::LOG_LOCAL2;
pub const LOG_LOCAL3: i32 = libc::LOG_LOCAL3;
pub const LOG_LOCAL4: i32 = libc::LOG_LOCAL4;
pub const LOG_LOCAL5: i32 = libc::LOG_LOCAL5;
pub const LOG_LOCAL6: i32 = libc::LOG_LOCAL6;
pub const LOG_LOCAL7: i32 = libc::LOG_LOCAL7;
pub const LOG_LPR: i32 = libc::LOG_LPR;
pub const LOG_MAIL: i32 = libc::LOG_MAIL;
pub const LOG_NEWS: i32 = libc::LOG_NEWS;
pub const LOG_SYSLOG: i32 = libc::LOG_SYSLOG;
pub const LOG_USER: i32 = libc::LOG_USER;
pub const LOG_UUCP: i32 = libc::LOG_UUCP;

// ===== Levels =====
pub const LOG_EMERG: i32 = libc::LOG_EMERG;
pub const LOG_ALERT: i32 = libc::LOG_ALERT;
pub const LOG_CRIT: i32 = libc::LOG_CRIT;
pub const LOG_ERR: i32 = libc::LOG_ERR;
pub const LOG_WARNING: i32 = libc::LOG_WARNING;
pub const LOG_NOTICE: i32 = libc::LOG_NOTICE;
pub const LOG_INFO: i32 = libc::LOG_INFO;
pub const LOG_DEBUG: i32 = libc::LOG_DEBUG;

/// Mask bit for a single priority, as `LOG_MASK(pri)`.
pub const fn log_mask(pri: i32) -> i32 {
    1 << pri
}

/// Mask covering every priority up to and including `pri`, as `LOG_UPTO(pri)`.
pub const fn log_upto(pri: i32) -> i32 {
    (1 << (pri + 1)) - 1
}
