use crate::DescriptorSet;
use sysdefs::constants::err_const::set_errno;
use sysdefs::constants::FD_SETSIZE;
use std::time::Duration;

/// How long a readiness wait may block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTimeout {
    /// Block until something is ready or a signal arrives.
    Infinite,
    /// Poll and return at once.
    Immediate,
    /// Block for at most this long.
    After(Duration),
}

impl SelectTimeout {
    /// Build a timeout from seconds as a host would pass them: zero polls,
    /// positive values wait, and values too large for a `Duration` wait forever.
    /// Returns `None` for negative or NaN input.
    pub fn from_secs_f64(secs: f64) -> Option<SelectTimeout> {
        if secs.is_nan() || secs < 0.0 {
            return None;
        }
        if secs == 0.0 {
            return Some(SelectTimeout::Immediate);
        }
        Some(match Duration::try_from_secs_f64(secs) {
            Ok(d) => SelectTimeout::After(d),
            Err(_) => SelectTimeout::Infinite,
        })
    }

    fn to_timeval(self) -> Option<libc::timeval> {
        match self {
            SelectTimeout::Infinite => None,
            SelectTimeout::Immediate => Some(libc::timeval {
                tv_sec: 0,
                tv_usec: 0,
            }),
            SelectTimeout::After(d) => Some(libc::timeval {
                tv_sec: d.as_secs().min(libc::time_t::MAX as u64) as libc::time_t,
                tv_usec: d.subsec_micros() as libc::suseconds_t,
            }),
        }
    }
}

// for unwrapping in kernel_select
fn to_fdset_ptr(opt: Option<&mut DescriptorSet>) -> *mut libc::fd_set {
    match opt {
        None => std::ptr::null_mut(),
        Some(set) => set.as_raw_mut(),
    }
}

/// Forward to `select(2)`.
///
/// The sets are rewritten in place by the kernel and the raw result is
/// returned: the ready count, 0 on timeout, or -1 with errno set.
///
/// The kernel scans `nfds` bits of each set, so an `nfds` outside
/// `[0, FD_SETSIZE]` is refused with -1 and `EINVAL` without calling it.
pub fn kernel_select(
    nfds: i32,
    readfds: Option<&mut DescriptorSet>,
    writefds: Option<&mut DescriptorSet>,
    errorfds: Option<&mut DescriptorSet>,
    timeout: SelectTimeout,
) -> i32 {
    if !(0..=FD_SETSIZE).contains(&nfds) {
        set_errno(libc::EINVAL);
        return -1;
    }
    let mut kselect_timeout = timeout.to_timeval();
    let timeout_ptr = match kselect_timeout.as_mut() {
        Some(tv) => tv as *mut libc::timeval,
        None => std::ptr::null_mut(),
    };
    unsafe {
        libc::select(
            nfds,
            to_fdset_ptr(readfds),
            to_fdset_ptr(writefds),
            to_fdset_ptr(errorfds),
            timeout_ptr,
        )
    }
}
