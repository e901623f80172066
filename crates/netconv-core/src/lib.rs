//! netconv core
//!
//! Converts `ManagedControlPlane` records between the hub (`v1beta1`) and the
//! legacy spoke (`v1alpha4`) without losing data on a round trip.
//!
//! # Components
//!
//! - [`mapper`]: pure, total field mapping. Lossy where the legacy schema is
//!   narrower: only the first CIDR block and first subnet survive.
//! - [`snapshot`]: stores the full hub record in the legacy record's
//!   annotations on the way down and reads it back on the way up.
//! - [`convert`]: the [`Converter`] entry points and the reconciliation that
//!   recovers absent-versus-empty lists from the snapshot.
//!
//! # Example
//!
//! ```rust
//! use netconv_api::v1beta1;
//! use netconv_core::{convert_down, convert_up};
//!
//! # fn main() -> Result<(), netconv_core::ConversionError> {
//! let mut hub = v1beta1::ManagedControlPlane::new("cp-1");
//! hub.spec.virtual_network.cidr_blocks =
//!     Some(vec!["10.0.0.0/16".to_string(), "10.1.0.0/16".to_string()]);
//!
//! let legacy = convert_down(&hub)?;
//! assert_eq!(legacy.spec.virtual_network.cidr_block.as_deref(), Some("10.0.0.0/16"));
//!
//! let back = convert_up(&legacy)?;
//! assert_eq!(back.spec.virtual_network.cidr_blocks, Some(vec!["10.0.0.0/16".to_string()]));
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod convert;
pub mod error;
pub mod mapper;
pub mod snapshot;

pub use config::{ConversionConfig, DEFAULT_SNAPSHOT_KEY};
pub use convert::{convert_down, convert_up, Convertible, Converter, Hub};
pub use error::{ConversionError, Result};
pub use snapshot::{HubSnapshot, SnapshotCodec};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for converting records
    pub use crate::{ConversionConfig, ConversionError, Convertible, Converter, Hub};
    pub use netconv_api::{v1alpha4, v1beta1, ObjectMeta, SideChannel};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
