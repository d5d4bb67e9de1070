// rawunix test suite
//
// Unit tests for the forwarders and the host module. Tests that touch
// process-wide OS state (cwd, signal dispositions, the syslog channel) take
// the test lock so they never overlap.

mod fs_tests;
mod module_tests;

use crate::init::rawunix_start;
use crate::module::UnixModule;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static TEST_MUTEX: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Setup function for tests.
/// Returns a lock guard that keeps the test serialized.
pub fn test_setup() -> parking_lot::MutexGuard<'static, bool> {
    let guard = TEST_MUTEX.lock();
    // Ignored after the first call; keeps errno reports at debug level.
    let _ = sysdefs::constants::VERBOSE.set(0);
    guard
}

/// A module for tests that go through the host calling convention.
pub fn test_module() -> UnixModule {
    rawunix_start(0)
}

/// A pipe as `(read_end, write_end)`.
pub fn make_pipe() -> (i32, i32) {
    let mut fds = [0i32; 2];
    assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
    (fds[0], fds[1])
}

pub fn close_fds(fds: &[i32]) {
    for &fd in fds {
        unsafe { libc::close(fd) };
    }
}

/// A descriptor index that is not open in this process. Callers hold the
/// `test_setup` guard so no other test claims the same index meanwhile.
pub fn closed_fd() -> i32 {
    (900..1000)
        .find(|&fd| unsafe { libc::fcntl(fd, libc::F_GETFD) } == -1)
        .expect("no free descriptor between 900 and 1000")
}
