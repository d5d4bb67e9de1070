//! Filesystem constants.
//!
//! Permission bits are published to the host as plain integers, so they are
//! normalised to `i32` here whatever width `mode_t` has on the target.

// ===== Permission bits =====
// Source: <sys/stat.h>
pub const S_IRUSR: i32 = libc::S_IRUSR as i32; // Owner read
pub const S_IWUSR: i32 = libc::S_IWUSR as i32; // Owner write
pub const S_IXUSR: i32 = libc::S_IXUSR as i32; // Owner execute
pub const S_IRGRP: i32 = libc::S_IRGRP as i32; // Group read
pub const S_IWGRP: i32 = libc::S_IWGRP as i32; // Group write
pub const S_IXGRP: i32 = libc::S_IXGRP as i32; // Group execute
pub const S_IROTH: i32 = libc::S_IROTH as i32; // Others read
pub const S_IWOTH: i32 = libc::S_IWOTH as i32; // Others write
pub const S_IXOTH: i32 = libc::S_IXOTH as i32; // Others execute

/// Size of the buffer handed to `getcwd`.
pub const PATH_MAX: usize = 4096;
