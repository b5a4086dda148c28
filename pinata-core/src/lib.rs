//! # Pinata Core
//!
//! Core types, errors, and traits for the Pinata pinning client.
//!
//! - **Types**: requests, file parts, metadata, and responses
//! - **Errors**: one error enum for every pinning operation
//! - **Constants**: API location and endpoint paths
//! - **Traits**: the [`HttpSession`] transport seam
//!
//! ## Example
//!
//! ```rust
//! use pinata_core::{PinRequest, HttpMethod};
//!
//! let request = PinRequest::unpin("Qm123").unwrap();
//! assert_eq!(request.method(), HttpMethod::Delete);
//! assert_eq!(request.endpoint(), "pinning/unpin/Qm123");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{PinataError, Result};
pub use traits::*;
pub use types::*;
