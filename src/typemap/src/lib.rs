//! Host-side type mapping for the rawunix binding.
//!
//! The host runtime hands every exported function a slice of [`HostValue`]s and
//! expects a list of values back. This crate defines that value model, the
//! argument checks performed before any OS call (`sc_convert_arg_*`), and the
//! boxing of credential records into host tables.
//!
//! Function naming convention:
//! - functions starting with `sc_` check and convert one positional argument
//! - functions ending in `_to_host` box a native result into a host value
pub mod datatype_conversion;
pub mod error;
pub mod record_conversion;
pub mod value;

pub use datatype_conversion::*;
pub use error::*;
pub use record_conversion::*;
pub use value::*;
