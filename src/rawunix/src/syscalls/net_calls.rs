//! Readiness waiting over descriptor sets.
use fdsets::{kernel_select, DescriptorSet, FdSetHandle, SelectTimeout, FD_SETSIZE};
use sysdefs::constants::err_const::{get_errno, handle_errno, syscall_error, Errno};

/// Reference to Linux: https://man7.org/linux/man-pages/man2/select.2.html
///
/// Waits until a descriptor below `nfds` in one of the sets is ready, the
/// timeout elapses or a signal arrives. Absent sets are passed to the kernel
/// as null.
///
/// The kernel works on copies of the sets. On success each set is replaced by
/// its ready members and the ready count is returned (0 on timeout). On
/// failure the sets are left as they were and `-errno` is returned, e.g.
/// `-EBADF` for a closed descriptor or `-EINTR` for a signal.
///
/// `nfds` must lie in `[0, FD_SETSIZE]`; anything else is `-EINVAL` before the
/// kernel is consulted.
pub fn select_syscall(
    nfds: i32,
    readfds: Option<&FdSetHandle>,
    writefds: Option<&FdSetHandle>,
    errorfds: Option<&FdSetHandle>,
    timeout: SelectTimeout,
) -> i32 {
    if !(0..=FD_SETSIZE).contains(&nfds) {
        return syscall_error(Errno::EINVAL, "select", "nfds out of range");
    }

    let mut real_readfds = readfds.map(FdSetHandle::snapshot);
    let mut real_writefds = writefds.map(FdSetHandle::snapshot);
    let mut real_errorfds = errorfds.map(FdSetHandle::snapshot);

    let ret = kernel_select(
        nfds,
        real_readfds.as_mut(),
        real_writefds.as_mut(),
        real_errorfds.as_mut(),
        timeout,
    );
    if ret < 0 {
        return handle_errno(get_errno(), "select");
    }

    // Members at or above nfds were never examined and are not ready.
    let write_back = |handle: Option<&FdSetHandle>, set: Option<DescriptorSet>| {
        if let (Some(handle), Some(mut set)) = (handle, set) {
            set.truncate(nfds);
            handle.store(set);
        }
    };
    write_back(readfds, real_readfds);
    write_back(writefds, real_writefds);
    write_back(errorfds, real_errorfds);
    ret
}
