//! The typed forwarders, one module per OS facility.
//!
//! Integer-returning forwarders return the OS result on success and `-errno`
//! on failure; the errno is also recorded for `errno_syscall`.
pub mod fs_calls;
pub mod log_calls;
pub mod net_calls;
pub mod pass_calls;
pub mod pwd_calls;
pub mod sys_calls;

pub use fs_calls::*;
pub use log_calls::*;
pub use net_calls::*;
pub use pass_calls::*;
pub use pwd_calls::*;
pub use sys_calls::*;
