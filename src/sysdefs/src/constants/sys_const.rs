//! Process and signal constants.
//!
//! Signal numbers vary between architectures and systems, so every value is
//! taken from libc. Linux-only signals are gated on the target.

// Terminal control signals
pub const SIGHUP: i32 = libc::SIGHUP; // Hangup
pub const SIGINT: i32 = libc::SIGINT; // Interrupt (Ctrl+C)
pub const SIGQUIT: i32 = libc::SIGQUIT; // Quit (Ctrl+\)
pub const SIGTERM: i32 = libc::SIGTERM; // Termination request

// Error signals
pub const SIGILL: i32 = libc::SIGILL; // Illegal instruction
pub const SIGTRAP: i32 = libc::SIGTRAP; // Trace/breakpoint trap
pub const SIGABRT: i32 = libc::SIGABRT; // Abort program
pub const SIGIOT: i32 = libc::SIGABRT; // Alias for SIGABRT
pub const SIGBUS: i32 = libc::SIGBUS; // Bus error (bad memory access)
pub const SIGFPE: i32 = libc::SIGFPE; // Floating point exception
pub const SIGSEGV: i32 = libc::SIGSEGV; // Segmentation violation
pub const SIGSYS: i32 = libc::SIGSYS; // Bad system call
#[cfg(target_os = "linux")]
pub const SIGSTKFLT: i32 = libc::SIGSTKFLT; // Stack fault on coprocessor

// Termination that cannot be caught
pub const SIGKILL: i32 = libc::SIGKILL;

// User-defined signals
pub const SIGUSR1: i32 = libc::SIGUSR1;
pub const SIGUSR2: i32 = libc::SIGUSR2;

// Process control signals
pub const SIGCHLD: i32 = libc::SIGCHLD; // Child stopped or terminated
pub const SIGCONT: i32 = libc::SIGCONT; // Continue if stopped
pub const SIGSTOP: i32 = libc::SIGSTOP; // Stop process
pub const SIGTSTP: i32 = libc::SIGTSTP; // Stop typed at terminal
pub const SIGTTIN: i32 = libc::SIGTTIN; // Terminal input for background process
pub const SIGTTOU: i32 = libc::SIGTTOU; // Terminal output for background process

// Resource limit signals
pub const SIGXCPU: i32 = libc::SIGXCPU;
pub const SIGXFSZ: i32 = libc::SIGXFSZ;

// Alarm signals
pub const SIGALRM: i32 = libc::SIGALRM; // Timer signal from alarm(2)
pub const SIGVTALRM: i32 = libc::SIGVTALRM; // Virtual timer expired
pub const SIGPROF: i32 = libc::SIGPROF; // Profiling timer expired

// I/O signals
pub const SIGPIPE: i32 = libc::SIGPIPE; // Broken pipe
pub const SIGURG: i32 = libc::SIGURG; // Urgent condition on socket
pub const SIGWINCH: i32 = libc::SIGWINCH; // Window resize signal
pub const SIGIO: i32 = libc::SIGIO; // I/O now possible
#[cfg(target_os = "linux")]
pub const SIGPOLL: i32 = libc::SIGPOLL; // Pollable event (same as SIGIO)
#[cfg(target_os = "linux")]
pub const SIGPWR: i32 = libc::SIGPWR; // Power failure
