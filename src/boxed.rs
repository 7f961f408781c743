use crate::any_value::AnyValue;
use crate::error::BoxError;
use std::any::TypeId;
use std::fmt;
use std::mem;

/// A type-erased container holding a single value of any clonable type
///
/// `AnyBox` owns at most one value, whose concrete type is fixed at the
/// moment it is stored. The held type can be queried at runtime, the box can
/// be deep-copied or moved without knowing what it holds, and the value can
/// be extracted only with the exact type it was stored under.
///
/// # Examples
///
/// ```
/// use anybox::{AnyBox, BoxError};
///
/// let mut slot = AnyBox::new(42i32);
/// assert_eq!(slot.get::<i32>()?, &42);
///
/// // Wrong type is refused, not converted
/// assert!(slot.get::<f64>().is_err());
///
/// // The held type can change over the box's lifetime
/// slot.replace("forty-two".to_string());
/// assert_eq!(slot.get::<String>()?, "forty-two");
/// # Ok::<(), BoxError>(())
/// ```
#[derive(Clone, Default)]
pub struct AnyBox {
    slot: Option<AnyValue>,
}

impl AnyBox {
    /// Creates an empty box holding no value
    ///
    /// # Examples
    ///
    /// ```
    /// use anybox::AnyBox;
    ///
    /// let slot = AnyBox::empty();
    /// assert!(slot.is_empty());
    /// ```
    pub fn empty() -> Self {
        Self { slot: None }
    }

    /// Creates a box holding `value`
    ///
    /// The value is moved into a newly allocated holder; the box takes sole
    /// ownership. Any `Clone + 'static` type is storable, including `AnyBox`
    /// itself, so boxes can nest.
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            slot: Some(AnyValue::new(value)),
        }
    }

    /// Returns true if the box holds no value
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns true if the box holds a value of exactly type `T`
    ///
    /// An empty box is not of any type.
    ///
    /// # Examples
    ///
    /// ```
    /// use anybox::AnyBox;
    ///
    /// let slot = AnyBox::new(3.14f64);
    /// assert!(slot.is::<f64>());
    /// assert!(!slot.is::<f32>());
    /// assert!(!AnyBox::empty().is::<f64>());
    /// ```
    pub fn is<T: 'static>(&self) -> bool {
        self.slot
            .as_ref()
            .map(AnyValue::is_type::<T>)
            .unwrap_or(false)
    }

    /// Returns the identifier of the held value's concrete type
    ///
    /// # Errors
    ///
    /// Returns `BoxError::Empty` if the box holds no value.
    pub fn type_id(&self) -> Result<TypeId, BoxError> {
        self.slot
            .as_ref()
            .map(AnyValue::type_id)
            .ok_or(BoxError::Empty)
    }

    /// Returns a readable name for the held value's concrete type
    ///
    /// The name is for diagnostics only; type checks compare identifiers,
    /// never names.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::Empty` if the box holds no value.
    pub fn type_name(&self) -> Result<&'static str, BoxError> {
        self.slot
            .as_ref()
            .map(AnyValue::type_name)
            .ok_or(BoxError::Empty)
    }

    /// Releases the held value, if any; the box becomes empty
    ///
    /// Idempotent: clearing an empty box is a no-op.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Moves the held value out into a new box, leaving this one empty
    ///
    /// No allocation and no copy of the contained value take place; only
    /// the ownership handle moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use anybox::{AnyBox, BoxError};
    ///
    /// let mut a = AnyBox::new("hello".to_string());
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.get::<String>()?, "hello");
    /// # Ok::<(), BoxError>(())
    /// ```
    pub fn take(&mut self) -> AnyBox {
        AnyBox {
            slot: self.slot.take(),
        }
    }

    /// Stores `value` in the box, returning the previously held state
    ///
    /// The returned box is empty if nothing was held before.
    pub fn replace<T: Clone + 'static>(&mut self, value: T) -> AnyBox {
        AnyBox {
            slot: self.slot.replace(AnyValue::new(value)),
        }
    }

    /// Exchanges the held values of two boxes in constant time
    ///
    /// Only the ownership handles move; the contained values are neither
    /// copied nor reallocated, however large they are.
    pub fn swap(&mut self, other: &mut AnyBox) {
        mem::swap(&mut self.slot, &mut other.slot);
    }

    /// Returns a reference to the held value
    ///
    /// # Errors
    ///
    /// - Returns `BoxError::Empty` if the box holds no value
    /// - Returns `BoxError::TypeMismatch` if the held type is not exactly `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use anybox::{AnyBox, BoxError};
    ///
    /// let slot = AnyBox::new(vec![1, 2, 3]);
    /// assert_eq!(slot.get::<Vec<i32>>()?, &[1, 2, 3]);
    ///
    /// match slot.get::<Vec<f64>>() {
    ///     Err(BoxError::TypeMismatch { actual, requested }) => {
    ///         println!("held {}, asked for {}", actual, requested);
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// # Ok::<(), BoxError>(())
    /// ```
    pub fn get<T: 'static>(&self) -> Result<&T, BoxError> {
        let held = self.slot.as_ref().ok_or(BoxError::Empty)?;
        let actual = held.type_name();
        held.downcast_ref::<T>()
            .ok_or_else(|| BoxError::mismatch::<T>(actual))
    }

    /// Returns a mutable reference to the held value
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](Self::get).
    pub fn get_mut<T: 'static>(&mut self) -> Result<&mut T, BoxError> {
        let held = self.slot.as_mut().ok_or(BoxError::Empty)?;
        let actual = held.type_name();
        held.downcast_mut::<T>()
            .ok_or_else(|| BoxError::mismatch::<T>(actual))
    }

    /// Returns a reference to the held value, or `None` on empty or mismatch
    ///
    /// The non-failing counterpart of [`get`](Self::get); never panics.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.slot.as_ref()?.downcast_ref::<T>()
    }

    /// Returns a mutable reference to the held value, or `None` on empty or
    /// mismatch
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.slot.as_mut()?.downcast_mut::<T>()
    }

    /// Returns a deep copy of the held value
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](Self::get).
    pub fn get_cloned<T: Clone + 'static>(&self) -> Result<T, BoxError> {
        self.get::<T>().cloned()
    }

    /// Moves the held value out of the box, leaving it empty
    ///
    /// On any failure the box is left exactly as it was: the slot is only
    /// vacated once the type match is confirmed.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](Self::get).
    ///
    /// # Examples
    ///
    /// ```
    /// use anybox::{AnyBox, BoxError};
    ///
    /// let mut slot = AnyBox::new("payload".to_string());
    ///
    /// // A miss leaves the value in place
    /// assert!(slot.take_value::<i32>().is_err());
    /// assert!(!slot.is_empty());
    ///
    /// let payload: String = slot.take_value()?;
    /// assert_eq!(payload, "payload");
    /// assert!(slot.is_empty());
    /// # Ok::<(), BoxError>(())
    /// ```
    pub fn take_value<T: 'static>(&mut self) -> Result<T, BoxError> {
        match &self.slot {
            Some(held) if held.is_type::<T>() => self.take().into_value(),
            Some(held) => Err(BoxError::mismatch::<T>(held.type_name())),
            None => Err(BoxError::Empty),
        }
    }

    /// Consumes the box, yielding the held value
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](Self::get). The error carries both the
    /// held and the requested type names; the value is dropped with the box.
    pub fn into_value<T: 'static>(self) -> Result<T, BoxError> {
        let held = self.slot.ok_or(BoxError::Empty)?;
        let actual = held.type_name();
        held.into_value::<T>()
            .ok_or_else(|| BoxError::mismatch::<T>(actual))
    }
}

impl fmt::Debug for AnyBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.slot {
            Some(held) => write!(f, "AnyBox<{}>", held.type_name()),
            None => write!(f, "AnyBox<empty>"),
        }
    }
}
