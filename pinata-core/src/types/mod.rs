//! Domain types for the Pinata client.
//!
//! - [`FilePart`]: one file of a multipart upload
//! - [`PinMetadata`]: name and tags attached to a pin
//! - [`PinRequest`]: a single request, built per call
//! - [`PinataResponse`]: status and parsed body of a reply
//! - [`UnpinOutcome`]: whether an unpin removed anything

mod request;
mod response;

pub use request::*;
pub use response::*;
