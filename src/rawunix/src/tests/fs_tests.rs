// Filesystem forwarders, exercised inside temporary directories.

use crate::syscalls::*;
use crate::tests::*;
use std::fs;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use tempfile::tempdir;

/// Test: chmod changes the permission bits of a file
#[test]
fn test_chmod() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mode");
    fs::write(&path, b"data").unwrap();
    let path_str = path.to_str().unwrap();

    assert_eq!(chmod_syscall(path_str, 0o640), 0);
    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o640);
    assert_eq!(chmod_syscall(path_str, 0o600), 0);
    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o600);
}

/// Test: chown with -1 ids leaves ownership as it was
#[test]
fn test_chown_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("owned");
    fs::write(&path, b"").unwrap();
    let before = fs::metadata(&path).unwrap();

    assert_eq!(chown_syscall(path.to_str().unwrap(), u32::MAX, u32::MAX), 0);
    let after = fs::metadata(&path).unwrap();
    assert_eq!((before.uid(), before.gid()), (after.uid(), after.gid()));
}

/// Test: rename moves a file and unlink removes it
#[test]
fn test_rename_then_unlink() {
    let dir = tempdir().unwrap();
    let from = dir.path().join("from");
    let to = dir.path().join("to");
    fs::write(&from, b"payload").unwrap();

    assert_eq!(rename_syscall(from.to_str().unwrap(), to.to_str().unwrap()), 0);
    assert!(!from.exists());
    assert_eq!(fs::read(&to).unwrap(), b"payload");

    assert_eq!(unlink_syscall(to.to_str().unwrap()), 0);
    assert!(!to.exists());
}

/// Test: failures return -errno and update the errno accessor
#[test]
fn test_missing_paths() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    let missing = missing.to_str().unwrap();

    assert_eq!(unlink_syscall(missing), -libc::ENOENT);
    assert_eq!(errno_syscall(), libc::ENOENT);
    assert_eq!(chmod_syscall(missing, 0o600), -libc::ENOENT);
    assert_eq!(rename_syscall(missing, "/nonexistent/target"), -libc::ENOENT);
}

/// Test: a path with an interior NUL never reaches the OS
#[test]
fn test_nul_in_path() {
    assert_eq!(unlink_syscall("bad\0path"), -libc::EINVAL);
    assert_eq!(errno_syscall(), libc::EINVAL);
    assert_eq!(rename_syscall("ok", "bad\0path"), -libc::EINVAL);
    assert_eq!(chdir_syscall("\0"), -libc::EINVAL);
}

/// Test: chdir changes what getcwd reports
#[test]
fn test_chdir_getcwd() {
    let _guard = test_setup();
    let dir = tempdir().unwrap();
    let target = fs::canonicalize(dir.path()).unwrap();
    let original = getcwd_syscall().unwrap();

    assert_eq!(chdir_syscall(target.to_str().unwrap()), 0);
    assert_eq!(getcwd_syscall().as_deref(), target.to_str());

    assert_eq!(chdir_syscall(target.join("missing").to_str().unwrap()), -libc::ENOENT);
    assert_eq!(getcwd_syscall().as_deref(), target.to_str());

    assert_eq!(chdir_syscall(&original), 0);
}
