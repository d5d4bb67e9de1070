// These tests drive the module the way an embedding host would, through
// names and host values only. They change the process cwd and the syslog
// channel, so `serial_test` runs them one at a time.
use rawunix::{open_unix, rawunix_shutdown, HostError, HostValue};
use serial_test::serial;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

fn int(v: i64) -> HostValue {
    HostValue::Integer(v)
}

#[test]
#[serial]
fn file_workflow_through_host_values() {
    let unix = open_unix();
    let dir = tempdir().unwrap();
    let dir_path = fs::canonicalize(dir.path()).unwrap();
    let dir_str = dir_path.to_str().unwrap();

    let original = unix.call("getcwd", &[]).unwrap().remove(0);
    assert_eq!(unix.call("chdir", &[HostValue::from(dir_str)]), Ok(vec![int(0)]));
    assert_eq!(unix.call("getcwd", &[]), Ok(vec![HostValue::from(dir_str)]));

    fs::write(dir_path.join("a"), b"").unwrap();
    let mode = unix.field("S_IRUSR").unwrap().as_integer().unwrap()
        | unix.field("S_IWUSR").unwrap().as_integer().unwrap();
    assert_eq!(unix.call("chmod", &[HostValue::from("a"), int(mode)]), Ok(vec![int(0)]));
    assert_eq!(
        fs::metadata(dir_path.join("a")).unwrap().permissions().mode() & 0o777,
        0o600
    );

    assert_eq!(unix.call("rename", &[HostValue::from("a"), HostValue::from("b")]), Ok(vec![int(0)]));
    assert_eq!(unix.call("chown", &[HostValue::from("b"), int(-1), int(-1)]), Ok(vec![int(0)]));
    assert_eq!(unix.call("unlink", &[HostValue::from("b")]), Ok(vec![int(0)]));
    assert_eq!(
        unix.call("unlink", &[HostValue::from("b")]),
        Ok(vec![int(-(libc::ENOENT as i64))])
    );
    assert_eq!(unix.call("errno", &[]), Ok(vec![int(libc::ENOENT as i64)]));

    unix.call("chdir", &[original]).unwrap();
}

#[test]
#[serial]
fn readiness_wait_reports_piped_data() {
    let unix = open_unix();
    let mut fds = [0i32; 2];
    assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
    let (rfd, wfd) = (fds[0], fds[1]);

    let readfds = unix.call("fd_set", &[]).unwrap().remove(0);
    unix.call_method(&readfds, "set", &[HostValue::from(rfd)]).unwrap();

    // nothing written yet: an immediate poll finds nothing
    let polled = unix
        .call("select", &[HostValue::from(rfd + 1), readfds.clone(), HostValue::Nil, HostValue::Nil, int(0)])
        .unwrap();
    assert_eq!(polled, vec![int(0)]);

    unix.call_method(&readfds, "set", &[HostValue::from(rfd)]).unwrap();
    assert_eq!(unsafe { libc::write(wfd, b"!".as_ptr() as *const _, 1) }, 1);
    let ready = unix
        .call("select", &[HostValue::from(rfd + 1), readfds.clone()])
        .unwrap();
    assert_eq!(ready, vec![int(1)]);
    assert_eq!(
        unix.call_method(&readfds, "isset", &[HostValue::from(rfd)]),
        Ok(vec![HostValue::from(true)])
    );

    unsafe {
        libc::close(rfd);
        libc::close(wfd);
    }
}

#[test]
#[serial]
fn missing_credentials_are_nil() {
    let unix = open_unix();
    for func in ["getpwnam", "getgrnam"] {
        assert_eq!(
            unix.call(func, &[HostValue::from("no-such-user-rawunix")]),
            Ok(vec![HostValue::Nil])
        );
    }
    if unix.field("HAS_SHADOW") == Some(&HostValue::from(true)) {
        assert_eq!(
            unix.call("getspnam", &[HostValue::from("no-such-user-rawunix")]),
            Ok(vec![HostValue::Nil])
        );
    } else {
        assert_eq!(
            unix.call("getspnam", &[]),
            Err(HostError::NoSuchFunction("getspnam".to_string()))
        );
    }
}

#[test]
#[serial]
fn syslog_channel_opens_and_closes() {
    let unix = open_unix();
    let facility = unix.field("LOG_USER").cloned().unwrap();
    let info = unix.field("LOG_INFO").cloned().unwrap();
    unix.call("openlog", &[HostValue::from("rawunix"), int(0), facility]).unwrap();
    unix.call("syslog", &[info, HostValue::from("integration test")]).unwrap();
    rawunix_shutdown();
}
