//! Boxing of credential records into host tables.
//!
//! Field names are the C structure member names, so scripts written against
//! the C API read the same keys.
use crate::{HostTable, HostValue};
use sysdefs::data::{GroupRecord, PasswdRecord, ShadowRecord};

pub fn passwd_to_host(pwd: &PasswdRecord) -> HostValue {
    let mut table = HostTable::new();
    table.insert("pw_name".into(), pwd.pw_name.as_str().into());
    table.insert("pw_passwd".into(), pwd.pw_passwd.as_str().into());
    table.insert("pw_uid".into(), pwd.pw_uid.into());
    table.insert("pw_gid".into(), pwd.pw_gid.into());
    table.insert("pw_gecos".into(), pwd.pw_gecos.as_str().into());
    table.insert("pw_dir".into(), pwd.pw_dir.as_str().into());
    table.insert("pw_shell".into(), pwd.pw_shell.as_str().into());
    HostValue::Table(table)
}

pub fn shadow_to_host(spwd: &ShadowRecord) -> HostValue {
    let mut table = HostTable::new();
    table.insert("sp_namp".into(), spwd.sp_namp.as_str().into());
    table.insert("sp_pwdp".into(), spwd.sp_pwdp.as_str().into());
    table.insert("sp_lstchg".into(), spwd.sp_lstchg.into());
    table.insert("sp_min".into(), spwd.sp_min.into());
    table.insert("sp_max".into(), spwd.sp_max.into());
    table.insert("sp_warn".into(), spwd.sp_warn.into());
    table.insert("sp_inact".into(), spwd.sp_inact.into());
    table.insert("sp_expire".into(), spwd.sp_expire.into());
    HostValue::Table(table)
}

pub fn group_to_host(grp: &GroupRecord) -> HostValue {
    let mut table = HostTable::new();
    table.insert("gr_name".into(), grp.gr_name.as_str().into());
    table.insert("gr_passwd".into(), grp.gr_passwd.as_str().into());
    table.insert("gr_gid".into(), grp.gr_gid.into());
    table.insert("gr_mem".into(), grp.gr_mem.clone().into());
    HostValue::Table(table)
}

/// Box an optional lookup result: a missing record becomes nil.
pub fn opt_record_to_host<T>(record: Option<T>, boxer: fn(&T) -> HostValue) -> HostValue {
    record.as_ref().map_or(HostValue::Nil, boxer)
}
