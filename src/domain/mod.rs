//! Domain types shared across Wordmask.
//!
//! All fallible operations return [`Result<T, MaskError>`]:
//!
//! ```rust
//! use wordmask::domain::{MaskError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(MaskError::Configuration("missing language".to_string()))
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::MaskError;
pub use result::Result;
