use crate::module::UnixModule;
use crate::syscalls::closelog_syscall;
use sysdefs::constants::{MODULE_VERSION, SHADOW_SUPPORTED, VERBOSE};

/// Start the layer and build the host module.
///
/// `verbosity` controls how failing OS calls are reported: at 0 they are
/// logged at debug level, above 0 as warnings. Verbosity is process-wide and
/// only the first call sets it.
///
/// Parameters:
/// - `verbosity`: requested verbosity level.
///
/// Returns the loaded module.
pub fn rawunix_start(verbosity: isize) -> UnixModule {
    if VERBOSE.set(verbosity).is_err() {
        log::debug!(
            "rawunix_start: verbosity already set to {:?}, ignoring {}",
            VERBOSE.get(),
            verbosity
        );
    }
    let module = UnixModule::new();
    log::info!(
        "{} started: {} functions, shadow lookups {}",
        MODULE_VERSION,
        module.function_names().count(),
        if SHADOW_SUPPORTED { "enabled" } else { "unavailable" }
    );
    module
}

/// Open the module with default verbosity.
pub fn open_unix() -> UnixModule {
    rawunix_start(0)
}

/// Release layer state held across calls. Currently the syslog channel.
pub fn rawunix_shutdown() {
    closelog_syscall();
    log::debug!("rawunix shut down");
}
