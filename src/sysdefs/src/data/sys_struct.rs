//! Signal handler representation.
use libc::{c_int, sighandler_t};

/// Native handler signature accepted by `signal(2)`.
pub type NativeHandler = extern "C" fn(c_int);

/// A signal disposition without raw function pointers in the API: the two
/// reserved dispositions are variants of their own and only real handlers
/// carry a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalHandler {
    /// Restore the default action (`SIG_DFL`).
    Default,
    /// Ignore the signal (`SIG_IGN`).
    Ignore,
    /// Run a native handler.
    Custom(NativeHandler),
}

impl SignalHandler {
    /// Value to hand to `signal(2)`.
    pub fn to_raw(self) -> sighandler_t {
        match self {
            SignalHandler::Default => libc::SIG_DFL,
            SignalHandler::Ignore => libc::SIG_IGN,
            SignalHandler::Custom(f) => f as sighandler_t,
        }
    }

    /// Interpret the previous disposition returned by `signal(2)`.
    ///
    /// Returns `None` for `SIG_ERR`, which is how `signal` reports failure.
    ///
    /// Any value other than the three sentinels becomes `Custom`, including
    /// handlers installed with `sigaction(2)` and `SA_SIGINFO` (the Rust
    /// runtime installs one for SIGSEGV and SIGBUS). Such a value only carries
    /// the address: installing it again through `signal(2)` drops
    /// `SA_SIGINFO`/`SA_ONSTACK`, and the function then runs with the
    /// one-argument calling convention.
    ///
    /// # Safety
    ///
    /// `raw` must come from `signal(2)` or `sigaction(2)`. The returned
    /// `Custom` value may only be passed back to the kernel, never called,
    /// unless the handler is known to have the `NativeHandler` signature.
    pub unsafe fn from_raw(raw: sighandler_t) -> Option<SignalHandler> {
        if raw == libc::SIG_ERR {
            None
        } else if raw == libc::SIG_DFL {
            Some(SignalHandler::Default)
        } else if raw == libc::SIG_IGN {
            Some(SignalHandler::Ignore)
        } else {
            Some(SignalHandler::Custom(std::mem::transmute::<
                sighandler_t,
                NativeHandler,
            >(raw)))
        }
    }

    /// Name the host sees for the reserved dispositions.
    pub fn sentinel_name(self) -> Option<&'static str> {
        match self {
            SignalHandler::Default => Some("SIG_DFL"),
            SignalHandler::Ignore => Some("SIG_IGN"),
            SignalHandler::Custom(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn noop(_: c_int) {}

    #[test]
    fn sentinels_round_trip_through_raw() {
        for h in [SignalHandler::Default, SignalHandler::Ignore] {
            assert_eq!(unsafe { SignalHandler::from_raw(h.to_raw()) }, Some(h));
        }
        assert_eq!(unsafe { SignalHandler::from_raw(libc::SIG_ERR) }, None);
    }

    #[test]
    fn custom_handler_keeps_its_address() {
        let h = SignalHandler::Custom(noop);
        assert_eq!(h.to_raw(), noop as sighandler_t);
        assert_eq!(h.sentinel_name(), None);
        assert_eq!(SignalHandler::Ignore.sentinel_name(), Some("SIG_IGN"));
    }
}
