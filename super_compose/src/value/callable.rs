//! Opaque function values.

use std::fmt;
use std::sync::Arc;

use super::Value;

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared handle to a function stored in a descriptor.
///
/// Cloning copies the handle, never the function. Two callables compare
/// equal only when they share the same underlying function.
///
/// # Examples
///
/// ```
/// use super_compose::{Callable, Value};
///
/// let greet = Callable::named("greet", |args| {
///     let name = args.first().and_then(Value::as_str).unwrap_or("world");
///     Value::from(format!("hello, {name}"))
/// });
/// assert_eq!(greet.call(&[Value::from("there")]), Value::from("hello, there"));
/// assert_eq!(greet.clone(), greet);
/// ```
#[derive(Clone)]
pub struct Callable {
    name: Option<Arc<str>>,
    func: Arc<CallableFn>,
}

impl Callable {
    /// Wrap an anonymous function.
    #[must_use]
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Wrap a named function.
    #[must_use]
    pub fn named<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// Wrap a zero-argument accessor. Any arguments passed are ignored.
    #[must_use]
    pub fn accessor<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::named(name, move |_| func())
    }

    /// Name given at construction, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the function with `args`.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Invoke the function without arguments.
    #[must_use]
    pub fn invoke(&self) -> Value {
        self.call(&[])
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
