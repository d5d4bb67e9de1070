//! Limits and capability flags that depend on the host platform.

/// Capacity of a native `fd_set`: descriptor indices live in `[0, FD_SETSIZE)`.
pub const FD_SETSIZE: i32 = 1024;

/// Buffer handed to `gethostname`. Longer names are truncated by the OS.
pub const HOSTNAME_BUFSIZE: usize = 256;

/// Whether the shadow-password database can be queried on this target.
pub const SHADOW_SUPPORTED: bool = cfg!(target_os = "linux");

/// Published as `_DESCRIPTION` in the host module.
pub const MODULE_DESCRIPTION: &str = "POSIX binding for embedded hosts";

/// Published as `_COPYRIGHT` in the host module.
pub const MODULE_COPYRIGHT: &str = "Copyright (C) the rawunix authors";

/// Published as `_VERSION` in the host module.
pub const MODULE_VERSION: &str = concat!("rawunix ", env!("CARGO_PKG_VERSION"));
