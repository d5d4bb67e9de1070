use crate::dispatcher::HostFn;
use crate::syscall_table::{FDSET_METHODS, UNIX_TABLE};
use std::collections::BTreeMap;
use std::fmt;
use sysdefs::constants::{
    MODULE_COPYRIGHT, MODULE_DESCRIPTION, MODULE_VERSION, SHADOW_SUPPORTED, UNIX_CONSTANTS,
};
use sysdefs::data::SignalHandler;
use typemap::{HostError, HostValue};

/// The loaded `unix` module as the host sees it: exported functions, fd_set
/// methods and published fields.
pub struct UnixModule {
    functions: BTreeMap<&'static str, HostFn>,
    methods: BTreeMap<&'static str, HostFn>,
    fields: BTreeMap<&'static str, HostValue>,
}

impl UnixModule {
    pub(crate) fn new() -> UnixModule {
        let functions = UNIX_TABLE.iter().copied().collect();
        let methods = FDSET_METHODS.iter().copied().collect();

        let mut fields: BTreeMap<&'static str, HostValue> = UNIX_CONSTANTS
            .iter()
            .map(|&(name, value)| (name, HostValue::from(value)))
            .collect();
        fields.insert("SIG_IGN", SignalHandler::Ignore.into());
        fields.insert("SIG_DFL", SignalHandler::Default.into());
        fields.insert("HAS_SHADOW", SHADOW_SUPPORTED.into());
        fields.insert("_COPYRIGHT", MODULE_COPYRIGHT.into());
        fields.insert("_DESCRIPTION", MODULE_DESCRIPTION.into());
        fields.insert("_VERSION", MODULE_VERSION.into());

        UnixModule {
            functions,
            methods,
            fields,
        }
    }

    /// Call the exported function `name`.
    pub fn call(&self, name: &str, args: &[HostValue]) -> Result<Vec<HostValue>, HostError> {
        let func = self
            .functions
            .get(name)
            .ok_or_else(|| HostError::NoSuchFunction(name.to_string()))?;
        log::trace!("unix.{}({} args)", name, args.len());
        func(args)
    }

    /// Call method `name` on `receiver`, which must be an fd_set handle. The
    /// receiver is argument #1, as in the host's method-call syntax.
    pub fn call_method(
        &self,
        receiver: &HostValue,
        name: &str,
        args: &[HostValue],
    ) -> Result<Vec<HostValue>, HostError> {
        if receiver.as_fdset().is_none() {
            return Err(HostError::expected(name, 1, "fd_set", receiver.type_name()));
        }
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| HostError::NoSuchMethod(name.to_string()))?;
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(receiver.clone());
        full.extend_from_slice(args);
        method(&full)
    }

    /// A published constant or informational field.
    pub fn field(&self, name: &str) -> Option<&HostValue> {
        self.fields.get(name)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Exported function names, sorted.
    pub fn function_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied()
    }
}

impl fmt::Debug for UnixModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnixModule")
            .field("functions", &self.functions.len())
            .field("methods", &self.methods.len())
            .field("fields", &self.fields.len())
            .finish()
    }
}
