//! Owned copies of the records returned by the credential databases.
//!
//! libc hands these back in static buffers that the next lookup overwrites,
//! so every field is copied out before the lookup lock is released.

/// A user account, as `struct passwd`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswdRecord {
    pub pw_name: String,
    pub pw_passwd: String,
    pub pw_uid: u32,
    pub pw_gid: u32,
    pub pw_gecos: String,
    pub pw_dir: String,
    pub pw_shell: String,
}

/// A shadow-password entry, as `struct spwd`. Only queried on Linux.
///
/// The numeric fields use `-1` for "not set", exactly as libc reports them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShadowRecord {
    pub sp_namp: String,
    pub sp_pwdp: String,
    pub sp_lstchg: i64,
    pub sp_min: i64,
    pub sp_max: i64,
    pub sp_warn: i64,
    pub sp_inact: i64,
    pub sp_expire: i64,
}

/// A group, as `struct group`. `gr_mem` keeps the order libc lists members in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupRecord {
    pub gr_name: String,
    pub gr_passwd: String,
    pub gr_gid: u32,
    pub gr_mem: Vec<String>,
}
