//! Positional argument conversion.
//!
//! Each `sc_convert_arg_*` function checks argument `pos` (1-based, as the host
//! numbers them) of the call to `func` and either returns the native value or a
//! [`HostError::BadArgument`]. A missing trailing argument behaves like nil.
//! Nothing here touches the OS, so a bad argument always aborts the call before
//! the forwarded function runs.
use crate::{HostError, HostValue};
use fdsets::{FdSetHandle, SelectTimeout};
use std::borrow::Cow;
use sysdefs::data::SignalHandler;

static NIL: HostValue = HostValue::Nil;

fn arg_at(args: &[HostValue], pos: usize) -> Option<&HostValue> {
    args.get(pos.wrapping_sub(1))
}

fn got_name(args: &[HostValue], pos: usize) -> &'static str {
    arg_at(args, pos).map_or("no value", HostValue::type_name)
}

/// `sc_unusedarg()` checks the arguments past the last one `func` uses.
///
/// ## Arguments:
/// args: the call arguments
/// first_unused: 1-based position of the first argument `func` does not take
///
/// ## Returns:
/// Always Ok in default mode.
/// In `secure` mode, a bad argument error for the first surplus non-nil value.
pub fn sc_unusedarg(args: &[HostValue], first_unused: usize, func: &str) -> Result<(), HostError> {
    if cfg!(feature = "secure") {
        let start = first_unused.saturating_sub(1);
        if let Some((offset, _)) = args
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, v)| !v.is_nil())
        {
            return Err(HostError::bad_argument(func, offset + 1, "no value expected"));
        }
    }
    Ok(())
}

/// Integer argument. Numbers with no fractional part are accepted.
pub fn sc_convert_arg_to_i64(args: &[HostValue], pos: usize, func: &str) -> Result<i64, HostError> {
    let value = arg_at(args, pos).unwrap_or(&NIL);
    match value {
        HostValue::Integer(_) | HostValue::Number(_) => value.as_integer().ok_or_else(|| {
            HostError::bad_argument(func, pos, "number has no integer representation")
        }),
        _ => Err(HostError::expected(func, pos, "integer", got_name(args, pos))),
    }
}

/// Integer argument that must fit a C `int`.
pub fn sc_convert_arg_to_i32(args: &[HostValue], pos: usize, func: &str) -> Result<i32, HostError> {
    let value = sc_convert_arg_to_i64(args, pos, func)?;
    i32::try_from(value).map_err(|_| HostError::bad_argument(func, pos, "integer out of range"))
}

/// Integer argument that must fit an unsigned 32-bit value.
pub fn sc_convert_arg_to_u32(args: &[HostValue], pos: usize, func: &str) -> Result<u32, HostError> {
    let value = sc_convert_arg_to_i64(args, pos, func)?;
    u32::try_from(value).map_err(|_| HostError::bad_argument(func, pos, "integer out of range"))
}

/// User or group id. `-1` is passed through as `(uid_t)-1`, which `chown`
/// reads as "leave unchanged".
pub fn sc_convert_arg_to_id(args: &[HostValue], pos: usize, func: &str) -> Result<u32, HostError> {
    match sc_convert_arg_to_i64(args, pos, func)? {
        -1 => Ok(u32::MAX),
        value => u32::try_from(value)
            .map_err(|_| HostError::bad_argument(func, pos, "id out of range")),
    }
}

/// String argument. Numbers are converted to their decimal text, as hosts
/// usually do for string parameters.
pub fn sc_convert_arg_to_str<'a>(
    args: &'a [HostValue],
    pos: usize,
    func: &str,
) -> Result<Cow<'a, str>, HostError> {
    match arg_at(args, pos) {
        Some(HostValue::String(s)) => Ok(Cow::Borrowed(s.as_str())),
        Some(HostValue::Integer(i)) => Ok(Cow::Owned(i.to_string())),
        Some(HostValue::Number(n)) => Ok(Cow::Owned(n.to_string())),
        _ => Err(HostError::expected(func, pos, "string", got_name(args, pos))),
    }
}

/// Descriptor-set handle argument.
pub fn sc_convert_arg_to_fdset<'a>(
    args: &'a [HostValue],
    pos: usize,
    func: &str,
) -> Result<&'a FdSetHandle, HostError> {
    arg_at(args, pos)
        .and_then(HostValue::as_fdset)
        .ok_or_else(|| HostError::expected(func, pos, "fd_set", got_name(args, pos)))
}

/// Optional descriptor-set handle: nil or a missing argument mean "no set".
pub fn sc_convert_arg_to_opt_fdset<'a>(
    args: &'a [HostValue],
    pos: usize,
    func: &str,
) -> Result<Option<&'a FdSetHandle>, HostError> {
    match arg_at(args, pos) {
        None | Some(HostValue::Nil) => Ok(None),
        Some(HostValue::FdSet(h)) => Ok(Some(h)),
        Some(other) => Err(HostError::expected(
            func,
            pos,
            "fd_set or nil",
            other.type_name(),
        )),
    }
}

/// Signal handler argument. Nil or a missing argument select the default
/// disposition, matching a null handler pointer.
pub fn sc_convert_arg_to_handler(
    args: &[HostValue],
    pos: usize,
    func: &str,
) -> Result<SignalHandler, HostError> {
    match arg_at(args, pos) {
        None | Some(HostValue::Nil) => Ok(SignalHandler::Default),
        Some(HostValue::Handler(h)) => Ok(*h),
        Some(other) => Err(HostError::expected(func, pos, "handler", other.type_name())),
    }
}

/// Wait timeout in seconds. Nil or a missing argument wait forever, zero polls.
pub fn sc_convert_arg_to_timeout(
    args: &[HostValue],
    pos: usize,
    func: &str,
) -> Result<SelectTimeout, HostError> {
    let secs = match arg_at(args, pos) {
        None | Some(HostValue::Nil) => return Ok(SelectTimeout::Infinite),
        Some(HostValue::Integer(i)) => *i as f64,
        Some(HostValue::Number(n)) => *n,
        Some(other) => {
            return Err(HostError::expected(func, pos, "number or nil", other.type_name()))
        }
    };
    SelectTimeout::from_secs_f64(secs)
        .ok_or_else(|| HostError::bad_argument(func, pos, "timeout must not be negative"))
}
