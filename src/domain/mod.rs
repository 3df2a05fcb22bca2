//! Domain types for MindRep.
//!
//! The domain layer provides the error hierarchy ([`MindRepError`]) and the
//! [`Result`] alias used by every fallible library operation.
//!
//! ```rust
//! use mindrep::domain::{MindRepError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(MindRepError::Configuration("empty batch".to_string()))
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::MindRepError;
pub use result::Result;
