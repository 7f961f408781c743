use std::any::{type_name, Any, TypeId};

/// Trait for type-erased values that can be cloned.
///
/// Combines `Any` with a clone capability, allowing a held value to be
/// deep-copied without knowing its concrete type at compile time.
pub(crate) trait CloneableAny: Any {
    /// Clone the value into a new boxed trait object.
    fn clone_box(&self) -> Box<dyn CloneableAny>;

    /// View as `Any` for downcasting by reference.
    fn as_any(&self) -> &dyn Any;

    /// View as mutable `Any` for downcasting by mutable reference.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Convert into a boxed `Any` for consuming downcasts.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> CloneableAny for T
where
    T: Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn CloneableAny> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A container for one type-erased value that preserves type information
pub(crate) struct AnyValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn CloneableAny>,
}

impl AnyValue {
    /// Create a new AnyValue from a value of any clonable type
    pub(crate) fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// Check if the contained value is of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Identifier of the contained value's concrete type
    pub(crate) fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Readable name of the contained value's concrete type, for diagnostics
    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Get a reference to the contained value if it is of type T
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    /// Get a mutable reference to the contained value if it is of type T
    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.as_any_mut().downcast_mut::<T>()
    }

    /// Consume the holder, yielding the contained value if it is of type T
    pub(crate) fn into_value<T: 'static>(self) -> Option<T> {
        self.value.into_any().downcast::<T>().ok().map(|value| *value)
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            type_id: self.type_id,
            type_name: self.type_name,
            value: self.value.clone_box(),
        }
    }
}

impl std::fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AnyValue")
            .field("type", &self.type_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_box_creates_independent_copy() {
        let original: Box<dyn CloneableAny> = Box::new(String::from("test"));
        let cloned = original.clone_box();

        let original_value = original
            .into_any()
            .downcast::<String>()
            .expect("downcast to String");
        let cloned_value = cloned
            .into_any()
            .downcast::<String>()
            .expect("downcast to String");

        assert_eq!(*original_value, "test");
        assert_eq!(*cloned_value, "test");
        assert_ne!(original_value.as_ptr(), cloned_value.as_ptr());
    }

    #[test]
    fn into_any_refuses_wrong_type() {
        let boxed: Box<dyn CloneableAny> = Box::new(42_i32);
        assert!(boxed.into_any().downcast::<String>().is_err());
    }

    #[test]
    fn holder_caches_type_identity() {
        let held = AnyValue::new(42_i32);
        assert!(held.is_type::<i32>());
        assert!(!held.is_type::<u32>());
        assert_eq!(held.type_id(), TypeId::of::<i32>());
        assert_eq!(held.type_name(), type_name::<i32>());
    }

    #[test]
    fn into_value_requires_exact_type() {
        let held = AnyValue::new(vec![1, 2, 3]);
        assert!(held.clone().into_value::<Vec<f64>>().is_none());
        assert_eq!(held.into_value::<Vec<i32>>(), Some(vec![1, 2, 3]));
    }
}
