//! Client for the Pinata IPFS pinning service.
//!
//! Pins files, whole directories, JSON documents, and existing content
//! hashes, and removes pins. Every operation is one request to the service.
//!
//! ```no_run
//! use pinata_client::{PinataConfig, PinningClient};
//!
//! # async fn run() -> pinata_client::Result<()> {
//! let client = PinningClient::with_config(PinataConfig::with_jwt("<jwt>"))?;
//! let response = client.pin_file("site").await?;
//! println!("{}", response.body);
//!
//! let outcome = client.unpin("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG").await?;
//! println!("was pinned: {}", outcome.was_pinned());
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod pinning;
mod session;

pub use collector::DirectoryCollector;
pub use config::PinataConfig;
pub use pinning::PinningClient;
pub use session::ReqwestSession;

pub use pinata_core::{
    FilePart, HttpSession, PinByHashResult, PinFileResult, PinMetadata, PinRequest, PinataError,
    PinataResponse, Result, UnpinOutcome,
};
