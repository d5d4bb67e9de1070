//! The host value model.
use fdsets::FdSetHandle;
use std::collections::BTreeMap;
use std::fmt;
use sysdefs::data::SignalHandler;

/// String-keyed host table. Ordered so printing is deterministic.
pub type HostTable = BTreeMap<String, HostValue>;

/// A value as the scripting host sees it.
#[derive(Debug, Clone)]
pub enum HostValue {
    Nil,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
    /// Sequence, indexed from 1 by the host.
    List(Vec<HostValue>),
    Table(HostTable),
    /// Opaque descriptor-set handle.
    FdSet(FdSetHandle),
    /// Signal disposition, including the `SIG_IGN` / `SIG_DFL` sentinels.
    Handler(SignalHandler),
}

impl HostValue {
    /// Type name used in argument errors, following the host's own vocabulary.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Nil => "nil",
            HostValue::Boolean(_) => "boolean",
            HostValue::Integer(_) | HostValue::Number(_) => "number",
            HostValue::String(_) => "string",
            HostValue::List(_) | HostValue::Table(_) => "table",
            HostValue::FdSet(_) => "fd_set",
            HostValue::Handler(_) => "function",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, HostValue::Nil)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            HostValue::Integer(i) => Some(*i),
            HostValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.2e18 => Some(*n as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_fdset(&self) -> Option<&FdSetHandle> {
        match self {
            HostValue::FdSet(h) => Some(h),
            _ => None,
        }
    }

    /// Field of a table value.
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        match self {
            HostValue::Table(t) => t.get(key),
            _ => None,
        }
    }
}

impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        use HostValue::*;
        match (self, other) {
            (Nil, Nil) => true,
            (Boolean(a), Boolean(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (Integer(a), Number(b)) | (Number(b), Integer(a)) => (*a as f64) == *b,
            (String(a), String(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Table(a), Table(b)) => a == b,
            (FdSet(a), FdSet(b)) => a.ptr_eq(b),
            (Handler(a), Handler(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Nil => write!(f, "nil"),
            HostValue::Boolean(b) => write!(f, "{}", b),
            HostValue::Integer(i) => write!(f, "{}", i),
            HostValue::Number(n) => write!(f, "{}", n),
            HostValue::String(s) => write!(f, "{}", s),
            HostValue::List(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            HostValue::Table(table) => {
                write!(f, "{{")?;
                for (i, (k, v)) in table.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = {}", k, v)?;
                }
                write!(f, "}}")
            }
            HostValue::FdSet(h) => write!(f, "fd_set: {:#x}", h.id()),
            HostValue::Handler(h) => match h.sentinel_name() {
                Some(name) => write!(f, "function: {}", name),
                None => write!(f, "function: {:#x}", h.to_raw()),
            },
        }
    }
}

impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        HostValue::Boolean(b)
    }
}

impl From<i32> for HostValue {
    fn from(i: i32) -> Self {
        HostValue::Integer(i as i64)
    }
}

impl From<u32> for HostValue {
    fn from(i: u32) -> Self {
        HostValue::Integer(i as i64)
    }
}

impl From<i64> for HostValue {
    fn from(i: i64) -> Self {
        HostValue::Integer(i)
    }
}

impl From<f64> for HostValue {
    fn from(n: f64) -> Self {
        HostValue::Number(n)
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        HostValue::String(s.to_string())
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        HostValue::String(s)
    }
}

impl From<FdSetHandle> for HostValue {
    fn from(h: FdSetHandle) -> Self {
        HostValue::FdSet(h)
    }
}

impl From<SignalHandler> for HostValue {
    fn from(h: SignalHandler) -> Self {
        HostValue::Handler(h)
    }
}

impl<T: Into<HostValue>> From<Option<T>> for HostValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(HostValue::Nil, Into::into)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(v: Vec<T>) -> Self {
        HostValue::List(v.into_iter().map(Into::into).collect())
    }
}
