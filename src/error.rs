use std::fmt;

/// Errors that can occur when querying or extracting from an `AnyBox`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    /// The box holds no value
    Empty,
    /// Attempted to access the held value with a type that doesn't match what was stored
    TypeMismatch {
        /// Name of the type actually held by the box
        actual: &'static str,
        /// Name of the type the caller asked for
        requested: &'static str,
    },
}

impl BoxError {
    pub(crate) fn mismatch<T: 'static>(actual: &'static str) -> Self {
        BoxError::TypeMismatch {
            actual,
            requested: std::any::type_name::<T>(),
        }
    }
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoxError::Empty => write!(f, "Box is empty"),
            BoxError::TypeMismatch { actual, requested } => {
                write!(
                    f,
                    "Cast error: held type - {}, required type - {}",
                    actual, requested
                )
            }
        }
    }
}

impl std::error::Error for BoxError {}
