use indexmap::IndexMap;
use kata_value::{FromValue, Value};
use tracing::warn;

use crate::{HarnessError, InvokeError};

pub type SolutionFn = fn(&[Value]) -> Result<Value, InvokeError>;

/// A solution under test: a plain function over positional [`Value`]
/// arguments plus the parameter names it declares.
#[derive(Debug, Clone, Copy)]
pub struct SolutionHandle {
    pub name: &'static str,
    /// Fixture directory the solution is checked against by `sweep`.
    pub fixture: &'static str,
    pub params: &'static [&'static str],
    pub call: SolutionFn,
}

impl SolutionHandle {
    pub const fn new(
        name: &'static str,
        fixture: &'static str,
        params: &'static [&'static str],
        call: SolutionFn,
    ) -> Self {
        Self {
            name,
            fixture,
            params,
            call,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn invoke(&self, args: &[Value]) -> Result<Value, InvokeError> {
        if args.len() != self.arity() {
            return Err(InvokeError::BadArity {
                name: self.name.to_string(),
                expected: self.arity(),
                got: args.len(),
            });
        }
        (self.call)(args)
    }
}

/// Decodes the argument at `position` into a typed value.
pub fn arg<T: FromValue>(args: &[Value], position: usize) -> Result<T, InvokeError> {
    let value = args
        .get(position)
        .ok_or_else(|| InvokeError::Rejected(format!("missing argument {position}")))?;
    T::from_value(value).map_err(|reason| InvokeError::Argument { position, reason })
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    handles: IndexMap<&'static str, SolutionHandle>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering a name twice keeps the later handle.
    pub fn register(&mut self, handle: SolutionHandle) {
        if self.handles.insert(handle.name, handle).is_some() {
            warn!(solution = handle.name, "solution registered twice, keeping the last one");
        }
    }

    pub fn resolve(&self, name: &str) -> Result<&SolutionHandle, HarnessError> {
        self.handles
            .get(name)
            .ok_or_else(|| HarnessError::SolutionLoad {
                name: name.to_string(),
                known: self.names().map(str::to_string).collect(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handles.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SolutionHandle> {
        self.handles.values()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
