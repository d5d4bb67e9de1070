//! Descriptor sets for `select(2)`.
//!
//! A [`DescriptorSet`] is a fixed-capacity set of descriptor indices in
//! `[0, FD_SETSIZE)` backed by the native `fd_set`. Its representation is
//! private: callers only get the operations below, so an index outside the
//! native capacity can never reach the `FD_*` macros.
//!
//! Hosts that need reference semantics (the readiness wait rewrites the sets
//! it is given) hold a [`FdSetHandle`] instead, which shares one set between
//! clones of the handle.
//!
//! [`kernel_select`] is the raw forwarder to `select(2)`. It does no errno
//! handling of its own; `rawunix::select_syscall` layers validation and error
//! reporting on top.
mod fdset;
mod handle;
mod select;

pub use fdset::DescriptorSet;
pub use handle::FdSetHandle;
pub use select::{kernel_select, SelectTimeout};
pub use sysdefs::constants::FD_SETSIZE;
