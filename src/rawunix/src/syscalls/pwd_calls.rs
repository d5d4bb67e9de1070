//! User, group and shadow password database lookups.
//!
//! The libc lookups hand back pointers into static storage that the next
//! lookup overwrites. Each call copies the entry into an owned record while
//! holding `PWDB_LOCK`. A lookup that finds nothing is `None`, not an error.
use lazy_static::lazy_static;
use libc::c_char;
use parking_lot::Mutex;
use std::ffi::{CStr, CString};
use sysdefs::data::{GroupRecord, PasswdRecord};

#[cfg(target_os = "linux")]
use sysdefs::data::ShadowRecord;

lazy_static! {
    static ref PWDB_LOCK: Mutex<()> = Mutex::new(());
}

unsafe fn cstr_to_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

unsafe fn copy_passwd(pwd: *const libc::passwd) -> Option<PasswdRecord> {
    let pwd = pwd.as_ref()?;
    Some(PasswdRecord {
        pw_name: cstr_to_string(pwd.pw_name),
        pw_passwd: cstr_to_string(pwd.pw_passwd),
        pw_uid: pwd.pw_uid,
        pw_gid: pwd.pw_gid,
        pw_gecos: cstr_to_string(pwd.pw_gecos),
        pw_dir: cstr_to_string(pwd.pw_dir),
        pw_shell: cstr_to_string(pwd.pw_shell),
    })
}

unsafe fn copy_group(grp: *const libc::group) -> Option<GroupRecord> {
    let grp = grp.as_ref()?;
    let mut gr_mem = Vec::new();
    if !grp.gr_mem.is_null() {
        let mut member = grp.gr_mem;
        while !(*member).is_null() {
            gr_mem.push(cstr_to_string(*member));
            member = member.add(1);
        }
    }
    Some(GroupRecord {
        gr_name: cstr_to_string(grp.gr_name),
        gr_passwd: cstr_to_string(grp.gr_passwd),
        gr_gid: grp.gr_gid,
        gr_mem,
    })
}

#[cfg(target_os = "linux")]
unsafe fn copy_shadow(spwd: *const libc::spwd) -> Option<ShadowRecord> {
    let spwd = spwd.as_ref()?;
    Some(ShadowRecord {
        sp_namp: cstr_to_string(spwd.sp_namp),
        sp_pwdp: cstr_to_string(spwd.sp_pwdp),
        sp_lstchg: spwd.sp_lstchg as i64,
        sp_min: spwd.sp_min as i64,
        sp_max: spwd.sp_max as i64,
        sp_warn: spwd.sp_warn as i64,
        sp_inact: spwd.sp_inact as i64,
        sp_expire: spwd.sp_expire as i64,
    })
}

// A name with an interior NUL cannot match any entry.
fn name_to_host(name: &str) -> Option<CString> {
    CString::new(name).ok()
}

/// Rewind the password database enumeration.
pub fn setpwent_syscall() {
    let _guard = PWDB_LOCK.lock();
    unsafe { libc::setpwent() }
}

/// Close the password database enumeration.
pub fn endpwent_syscall() {
    let _guard = PWDB_LOCK.lock();
    unsafe { libc::endpwent() }
}

/// Next entry of the password database, `None` at the end.
pub fn getpwent_syscall() -> Option<PasswdRecord> {
    let _guard = PWDB_LOCK.lock();
    unsafe { copy_passwd(libc::getpwent()) }
}

pub fn getpwnam_syscall(name: &str) -> Option<PasswdRecord> {
    let name = name_to_host(name)?;
    let _guard = PWDB_LOCK.lock();
    unsafe { copy_passwd(libc::getpwnam(name.as_ptr())) }
}

pub fn getpwuid_syscall(uid: u32) -> Option<PasswdRecord> {
    let _guard = PWDB_LOCK.lock();
    unsafe { copy_passwd(libc::getpwuid(uid)) }
}

/// Shadow entry for `name`. Reading the shadow database normally needs
/// root; without it every lookup is `None`.
#[cfg(target_os = "linux")]
pub fn getspnam_syscall(name: &str) -> Option<ShadowRecord> {
    let name = name_to_host(name)?;
    let _guard = PWDB_LOCK.lock();
    unsafe { copy_shadow(libc::getspnam(name.as_ptr())) }
}

pub fn getgrnam_syscall(name: &str) -> Option<GroupRecord> {
    let name = name_to_host(name)?;
    let _guard = PWDB_LOCK.lock();
    unsafe { copy_group(libc::getgrnam(name.as_ptr())) }
}

pub fn getgrgid_syscall(gid: u32) -> Option<GroupRecord> {
    let _guard = PWDB_LOCK.lock();
    unsafe { copy_group(libc::getgrgid(gid)) }
}
