//! POSIX facilities for an embedded scripting host.
//!
//! `syscalls` holds the typed forwarders, one OS call each. `dispatcher`
//! adapts them to the host calling convention and `UnixModule` is what a host
//! loads: the function table, the fd_set methods and the published constants.
//!
//! Functions that return an integer give a failure as `-errno`, not as the
//! `-1` libc returns: `unlink` on a missing file yields `-ENOENT`. Scripts
//! should test for a negative result and may read the code from either the
//! result or `errno()`.

pub mod dispatcher;
pub mod init;
pub mod module;
pub mod syscall_table;
pub mod syscalls;

#[cfg(test)]
mod tests;

pub use dispatcher::HostFn;
pub use init::{open_unix, rawunix_shutdown, rawunix_start};
pub use module::UnixModule;
pub use syscall_table::{FDSET_METHODS, UNIX_TABLE};

pub use fdsets::{DescriptorSet, FdSetHandle, SelectTimeout};
pub use sysdefs::data::SignalHandler;
pub use typemap::{HostError, HostValue};
