//! netconv API types
//!
//! Versioned `ManagedControlPlane` records and the metadata they share.
//!
//! # Versions
//!
//! - [`v1beta1`]: the hub. Every other version converts through it.
//! - [`v1alpha4`]: the legacy spoke. Its virtual network can only hold a
//!   single CIDR block and a single subnet.
//!
//! # Side-channel
//!
//! [`ObjectMeta`] implements [`SideChannel`] over its annotations. The
//! conversion layer stores a snapshot of the hub record there so data the
//! legacy schema cannot express survives a down/up round trip.
//!
//! # Example
//!
//! ```rust
//! use netconv_api::{v1beta1, SideChannel};
//!
//! let mut cp = v1beta1::ManagedControlPlane::new("cp-1");
//! cp.spec.virtual_network.cidr_blocks = Some(vec!["10.0.0.0/16".to_string()]);
//! cp.metadata.set("team", "network".to_string());
//!
//! assert_eq!(cp.metadata.get("team"), Some("network"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod common;
mod meta;

pub mod v1alpha4;
pub mod v1beta1;

pub use common::ApiEndpoint;
pub use meta::{ObjectMeta, SideChannel, TypeMeta};

/// API group shared by every version
pub const GROUP: &str = "netconv.x-k8s.io";

/// Kind of the record converted by this workspace
pub const KIND: &str = "ManagedControlPlane";

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
