//! # anybox
//!
//! A type-safe, single-value type-erased container library.
//!
//! `anybox` provides a way to hold a value of any clonable type behind one
//! concrete container type while maintaining type-safety through runtime
//! checks. This is particularly useful for APIs that must pass values around
//! without requiring every component to know every concrete type involved.
//!
//! ## Key Features
//!
//! - **Type-safe**: Extraction is checked at runtime against the exact stored type
//! - **Value semantics**: Copying a box deep-copies the held value; no aliased storage
//! - **Ergonomic API**: Simple methods for storing, inspecting, and extracting values
//! - **Flexible**: Supports any type that implements `Clone`, including nested boxes
//! - **No macros**: Pure runtime solution without complex macro magic
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use anybox::{AnyBox, BoxError};
//!
//! fn main() -> Result<(), BoxError> {
//!     // Store a value of any clonable type
//!     let mut slot = AnyBox::new(42i32);
//!
//!     // Retrieve it in a type-safe way
//!     let num = slot.get::<i32>()?;
//!     println!("Number: {}", num);
//!
//!     // The held type can change over the box's lifetime
//!     slot.replace("Hello, world!".to_string());
//!     println!("Text: {}", slot.get::<String>()?);
//!
//!     // Handle errors properly
//!     match slot.get::<bool>() {
//!         Ok(value) => println!("Value: {}", value),
//!         Err(BoxError::Empty) => println!("Nothing stored"),
//!         Err(BoxError::TypeMismatch { actual, requested }) => {
//!             println!("Holds {}, not {}", actual, requested)
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Copies Are Independent
//!
//! ```rust
//! use anybox::{AnyBox, BoxError};
//!
//! fn main() -> Result<(), BoxError> {
//!     let original = AnyBox::new(vec![1, 2, 3]);
//!
//!     // Cloning a box deep-copies the held value
//!     let mut copy = original.clone();
//!     copy.get_mut::<Vec<i32>>()?.push(4);
//!
//!     // The original is unaffected
//!     assert_eq!(original.get::<Vec<i32>>()?, &vec![1, 2, 3]);
//!     assert_eq!(copy.get::<Vec<i32>>()?, &vec![1, 2, 3, 4]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Moving Values In and Out
//!
//! ```rust
//! use anybox::{AnyBox, BoxError};
//!
//! fn main() -> Result<(), BoxError> {
//!     let mut a = AnyBox::new("payload".to_string());
//!
//!     // take() moves the holder, leaving the source empty
//!     let mut b = a.take();
//!     assert!(a.is_empty());
//!
//!     // take_value() moves the value itself out of the box
//!     let payload: String = b.take_value()?;
//!     assert_eq!(payload, "payload");
//!     assert!(b.is_empty());
//!
//!     // swap() exchanges ownership handles in constant time
//!     let mut big = AnyBox::new("x".repeat(1_000_000));
//!     let mut small = AnyBox::new(1u8);
//!     big.swap(&mut small);
//!     assert!(small.is::<String>());
//!     assert!(big.is::<u8>());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Inspecting the Held Type
//!
//! ```rust
//! use anybox::{AnyBox, BoxError};
//!
//! let slot = AnyBox::new(3.14f64);
//!
//! // Exact-match checks, no conversions
//! assert!(slot.is::<f64>());
//! assert!(!slot.is::<f32>());
//!
//! // The nullable forms never fail
//! assert_eq!(slot.downcast_ref::<f64>(), Some(&3.14));
//! assert_eq!(slot.downcast_ref::<i32>(), None);
//!
//! // type_name() is for diagnostics only
//! match slot.type_name() {
//!     Ok(name) => println!("Holding a {}", name),
//!     Err(BoxError::Empty) => println!("Holding nothing"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

mod any_value;
mod boxed;
mod error;

pub use boxed::AnyBox;
pub use error::BoxError;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
