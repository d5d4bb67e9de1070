// The host module: tables, fields and the calling convention.

use crate::tests::*;
use fdsets::FD_SETSIZE;
use sysdefs::constants::{SHADOW_SUPPORTED, SIGUSR1, UNIX_CONSTANTS};
use sysdefs::data::SignalHandler;
use typemap::{HostError, HostValue};

#[test]
fn test_exported_function_names() {
    let module = test_module();
    for name in [
        "arc4random", "chdir", "dup2", "errno", "fork", "kill", "getcwd", "getpid",
        "getpgid", "setpgid", "sleep", "unlink", "getuid", "getgid", "chown", "chmod",
        "rename", "signal", "setpwent", "endpwent", "getpwent", "getpwnam", "getpwuid",
        "getgrnam", "getgrgid", "crypt", "getpass", "gethostname", "sethostname", "openlog", "syslog",
        "closelog", "setlogmask", "select", "fd_set",
    ] {
        assert!(module.has_function(name), "missing {}", name);
    }
    assert_eq!(module.has_function("getspnam"), SHADOW_SUPPORTED);
    assert!(!module.has_function("getlogin"));
    assert_eq!(
        module.method_names().collect::<Vec<_>>(),
        vec!["clr", "isset", "set", "zero"]
    );
}

#[test]
fn test_published_fields() {
    let module = test_module();
    for &(name, value) in UNIX_CONSTANTS {
        assert_eq!(module.field(name), Some(&HostValue::Integer(value as i64)));
    }
    assert_eq!(module.field("S_IRUSR"), Some(&HostValue::from(libc::S_IRUSR as i32)));
    assert_eq!(module.field("LOG_LOCAL3"), Some(&HostValue::from(libc::LOG_LOCAL3)));
    assert_eq!(
        module.field("SIG_IGN"),
        Some(&HostValue::Handler(SignalHandler::Ignore))
    );
    assert_eq!(
        module.field("SIG_DFL"),
        Some(&HostValue::Handler(SignalHandler::Default))
    );
    assert_eq!(module.field("HAS_SHADOW"), Some(&HostValue::Boolean(SHADOW_SUPPORTED)));
    let version = module.field("_VERSION").and_then(HostValue::as_str).unwrap();
    assert!(version.starts_with("rawunix "));
    assert!(module.field("_DESCRIPTION").is_some());
    assert!(module.field("_COPYRIGHT").and_then(HostValue::as_str).is_some());
    assert_eq!(module.field("FD_SETSIZE_UNKNOWN"), None);
}

#[test]
fn test_unknown_function() {
    let module = test_module();
    assert_eq!(
        module.call("getlogin", &[]),
        Err(HostError::NoSuchFunction("getlogin".to_string()))
    );
}

#[test]
fn test_bad_arguments_abort_the_call() {
    let module = test_module();
    let err = module.call("kill", &[HostValue::from("x")]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #1 to 'kill' (integer expected, got string)");

    let err = module.call("chmod", &[HostValue::from("/tmp")]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #2 to 'chmod' (integer expected, got no value)");

    let err = module
        .call("select", &[HostValue::from(1), HostValue::from(true)])
        .unwrap_err();
    assert!(matches!(err, HostError::BadArgument { position: 2, .. }));
}

#[test]
fn test_integer_results() {
    let module = test_module();
    assert_eq!(
        module.call("getpid", &[]),
        Ok(vec![HostValue::from(std::process::id() as i64)])
    );
    assert_eq!(
        module.call("unlink", &[HostValue::from("/nonexistent/rawunix")]),
        Ok(vec![HostValue::from(-libc::ENOENT)])
    );
    assert_eq!(module.call("errno", &[]), Ok(vec![HostValue::from(libc::ENOENT)]));
}

#[test]
fn test_crypt_through_module() {
    let module = test_module();
    let hash = module
        .call("crypt", &[HostValue::from("secret"), HostValue::from("$6$saltsalt$")])
        .unwrap();
    assert!(hash[0].as_str().unwrap().starts_with("$6$saltsalt$"));
    assert_eq!(
        module.call("crypt", &[HostValue::from("secret"), HostValue::from("!!")]),
        Ok(vec![HostValue::Nil])
    );

    let err = module.call("crypt", &[HostValue::from("secret")]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #2 to 'crypt' (string expected, got no value)");
    let err = module.call("getpass", &[HostValue::from(true)]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #1 to 'getpass' (string expected, got boolean)");
}

#[test]
fn test_lookup_results() {
    let module = test_module();
    assert_eq!(
        module.call("getpwnam", &[HostValue::from("no-such-user-rawunix")]),
        Ok(vec![HostValue::Nil])
    );
    let root = module.call("getpwuid", &[HostValue::from(0)]).unwrap();
    assert_eq!(root[0].get("pw_name"), Some(&HostValue::from("root")));
    assert_eq!(root[0].get("pw_uid"), Some(&HostValue::from(0)));

    let group = module.call("getgrgid", &[HostValue::from(0)]).unwrap();
    assert!(matches!(group[0].get("gr_mem"), Some(HostValue::List(_))));
}

#[test]
fn test_hostname_results() {
    let module = test_module();
    let name = module.call("gethostname", &[]).unwrap();
    assert!(name[0].as_str().is_some());
    assert_eq!(
        module.call("sethostname", &[HostValue::from("h".repeat(300))]),
        Ok(vec![HostValue::Nil])
    );
}

#[test]
fn test_signal_through_module() {
    let _guard = test_setup();
    let module = test_module();
    let ignore = module.field("SIG_IGN").cloned().unwrap();

    let previous = module
        .call("signal", &[HostValue::from(SIGUSR1), ignore.clone()])
        .unwrap();
    // nil restores the default disposition
    assert_eq!(
        module.call("signal", &[HostValue::from(SIGUSR1), HostValue::Nil]),
        Ok(vec![ignore])
    );
    module
        .call("signal", &[HostValue::from(SIGUSR1), previous[0].clone()])
        .unwrap();
}

#[test]
fn test_syslog_calls_return_nothing() {
    let _guard = test_setup();
    let module = test_module();
    let user = module.field("LOG_USER").cloned().unwrap();
    let debug = module.field("LOG_DEBUG").cloned().unwrap();

    assert_eq!(
        module.call("openlog", &[HostValue::from("rawunix-test"), HostValue::from(0), user]),
        Ok(vec![])
    );
    assert_eq!(
        module.call("syslog", &[debug, HostValue::from("100% %s %n literal")]),
        Ok(vec![])
    );
    assert_eq!(module.call("closelog", &[]), Ok(vec![]));

    let current = module.call("setlogmask", &[HostValue::from(0)]).unwrap();
    assert!(current[0].as_integer().is_some());
}

#[test]
fn test_fd_set_methods() {
    let module = test_module();
    let set = module.call("fd_set", &[]).unwrap().remove(0);
    assert_eq!(set.type_name(), "fd_set");

    let isset = |fd: i32| module.call_method(&set, "isset", &[HostValue::from(fd)]);
    assert_eq!(isset(5), Ok(vec![HostValue::Boolean(false)]));

    assert_eq!(module.call_method(&set, "set", &[HostValue::from(5)]), Ok(vec![]));
    assert_eq!(isset(5), Ok(vec![HostValue::Boolean(true)]));
    assert_eq!(isset(6), Ok(vec![HostValue::Boolean(false)]));

    module.call_method(&set, "clr", &[HostValue::from(5)]).unwrap();
    assert_eq!(isset(5), Ok(vec![HostValue::Boolean(false)]));

    module.call_method(&set, "set", &[HostValue::from(9)]).unwrap();
    module.call_method(&set, "zero", &[]).unwrap();
    assert_eq!(isset(9), Ok(vec![HostValue::Boolean(false)]));
}

#[test]
fn test_fd_set_rejects_out_of_range() {
    let module = test_module();
    let set = module.call("fd_set", &[]).unwrap().remove(0);
    module.call_method(&set, "set", &[HostValue::from(1)]).unwrap();

    for fd in [-1, FD_SETSIZE] {
        let err = module
            .call_method(&set, "set", &[HostValue::from(fd)])
            .unwrap_err();
        assert!(matches!(err, HostError::BadArgument { position: 2, .. }));
        assert!(module.call_method(&set, "clr", &[HostValue::from(fd)]).is_err());
        assert_eq!(
            module.call_method(&set, "isset", &[HostValue::from(fd)]),
            Ok(vec![HostValue::Boolean(false)])
        );
    }
    assert_eq!(
        set.as_fdset().unwrap().snapshot().members(FD_SETSIZE).collect::<Vec<_>>(),
        vec![1]
    );
}

#[test]
fn test_fd_set_method_errors() {
    let module = test_module();
    let err = module
        .call_method(&HostValue::from(3), "set", &[HostValue::from(1)])
        .unwrap_err();
    assert_eq!(err.to_string(), "bad argument #1 to 'set' (fd_set expected, got number)");

    let set = module.call("fd_set", &[]).unwrap().remove(0);
    assert_eq!(
        module.call_method(&set, "close", &[]),
        Err(HostError::NoSuchMethod("close".to_string()))
    );
}

#[test]
fn test_select_through_module() {
    let module = test_module();
    let (rfd, wfd) = make_pipe();
    assert_eq!(unsafe { libc::write(wfd, b"go".as_ptr() as *const _, 2) }, 2);

    let readfds = module.call("fd_set", &[]).unwrap().remove(0);
    module.call_method(&readfds, "set", &[HostValue::from(rfd)]).unwrap();

    let ret = module
        .call(
            "select",
            &[
                HostValue::from(rfd + 1),
                readfds.clone(),
                HostValue::Nil,
                HostValue::Nil,
                HostValue::Nil,
            ],
        )
        .unwrap();
    assert_eq!(ret, vec![HostValue::from(1)]);
    assert_eq!(
        module.call_method(&readfds, "isset", &[HostValue::from(rfd)]),
        Ok(vec![HostValue::Boolean(true)])
    );

    let err = module
        .call("select", &[HostValue::from(rfd + 1), readfds, HostValue::Nil, HostValue::Nil, HostValue::from(-1)])
        .unwrap_err();
    assert!(matches!(err, HostError::BadArgument { position: 5, .. }));

    close_fds(&[rfd, wfd]);
}
