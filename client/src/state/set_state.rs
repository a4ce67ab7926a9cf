//! Replace-or-update argument shared by the control surfaces.

#[cfg(test)]
#[path = "set_state_test.rs"]
mod set_state_test;

/// Either a full replacement value or a function from the current value to
/// the next one.
pub enum SetState<T> {
    Value(T),
    Update(Box<dyn FnOnce(&T) -> T + Send>),
}

impl<T> SetState<T> {
    /// Build an updater variant from a closure.
    pub fn update(f: impl FnOnce(&T) -> T + Send + 'static) -> Self {
        Self::Update(Box::new(f))
    }

    /// Resolve against `current`.
    pub fn apply(self, current: &T) -> T {
        match self {
            Self::Value(next) => next,
            Self::Update(f) => f(current),
        }
    }
}

impl<T> From<T> for SetState<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SetState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Update(_) => f.write_str("Update(..)"),
        }
    }
}
