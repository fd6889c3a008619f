//! Core services: cascade transitions, option catalog and hostname derivation.
//!
//! All services are pure and synchronous; none of them touch the network,
//! the file system or the clipboard.

mod cascade;
mod catalog;
mod hostname;

use std::time::Duration;

pub use cascade::CascadeController;
pub use catalog::{Catalog, SelectOption};
pub use hostname::{derive_url, HOSTNAME_SUFFIX};

/// How long the "copied" confirmation stays up after a clipboard write
pub const COPIED_FLASH: Duration = Duration::from_millis(1200);
