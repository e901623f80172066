//! Conversion orchestrator
//!
//! Sequences field mapping and snapshot handling into the two entry points,
//! and owns the reconciliation policy used on the way back to the hub.
//!
//! # Reconciliation
//!
//! The legacy schema cannot tell "never set" (`None`) from "explicitly
//! cleared" (`Some(vec![])`). After an up-conversion maps the legacy record,
//! each list field is compared against the restored snapshot:
//!
//! | restored list | legacy scalar | result            |
//! |---------------|---------------|-------------------|
//! | `None`        | absent        | `None`            |
//! | `Some([])`    | absent        | `Some([])`        |
//! | anything else | any           | freshly mapped    |
//!
//! A present legacy scalar always wins over history: it is what the caller
//! edited most recently.

use netconv_api::{v1alpha4, v1beta1, SideChannel};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::ConversionConfig;
use crate::error::Result;
use crate::mapper;
use crate::snapshot::{HubSnapshot, SnapshotCodec};

/// Canonical version every spoke converts through
pub trait Hub: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// `apiVersion` of the hub schema
    const API_VERSION: &'static str;
}

/// A spoke version that knows how to reach the hub and come back
///
/// Spokes never convert to each other directly.
pub trait Convertible<H: Hub>: Sized {
    /// Up-convert this record into the hub
    ///
    /// # Errors
    /// Fails if data stored for round-tripping is corrupt.
    fn convert_to(&self) -> Result<H>;

    /// Down-convert a hub record into this version
    ///
    /// # Errors
    /// Fails if data needed for round-tripping cannot be stored.
    fn convert_from(hub: &H) -> Result<Self>;
}

impl Hub for v1beta1::ManagedControlPlane {
    const API_VERSION: &'static str = v1beta1::API_VERSION;
}

impl Convertible<v1beta1::ManagedControlPlane> for v1alpha4::ManagedControlPlane {
    #[inline]
    fn convert_to(&self) -> Result<v1beta1::ManagedControlPlane> {
        convert_up(self)
    }

    #[inline]
    fn convert_from(hub: &v1beta1::ManagedControlPlane) -> Result<Self> {
        convert_down(hub)
    }
}

/// Converts `ManagedControlPlane` records between hub and legacy versions
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    #[inline]
    #[must_use]
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    #[inline]
    fn codec(&self) -> SnapshotCodec<'_> {
        SnapshotCodec::new(&self.config.snapshot_key)
    }

    /// Hub to legacy
    ///
    /// Only the first CIDR block and first subnet are visible in the result's
    /// typed fields; the full hub record rides along in its annotations.
    ///
    /// # Errors
    /// Returns [`crate::ConversionError::Encoding`] if the snapshot cannot be
    /// serialized. No record is returned in that case.
    pub fn convert_down(&self, hub: &v1beta1::ManagedControlPlane) -> Result<v1alpha4::ManagedControlPlane> {
        tracing::info!(name = %hub.metadata.name, "converting hub record to {}", v1alpha4::API_VERSION);

        let mut legacy = mapper::hub_record_to_legacy(hub);

        if self.config.preserve_hub_data {
            self.codec().capture_hub(hub, &mut legacy.metadata)?;
        } else {
            // never leave a snapshot that no longer matches the hub
            legacy.metadata.remove(&self.config.snapshot_key);
        }

        Ok(legacy)
    }

    /// Legacy to hub
    ///
    /// # Errors
    /// Returns [`crate::ConversionError::Decoding`] if the record carries a
    /// snapshot that cannot be read. The unreconciled mapping is never
    /// returned in that case.
    pub fn convert_up(&self, legacy: &v1alpha4::ManagedControlPlane) -> Result<v1beta1::ManagedControlPlane> {
        tracing::info!(name = %legacy.metadata.name, "converting {} record to hub", v1alpha4::API_VERSION);

        let mut hub = mapper::legacy_record_to_hub(legacy);
        hub.metadata.remove(&self.config.snapshot_key);

        let Some(restored) = self.codec().restore_hub(&legacy.metadata)? else {
            tracing::debug!(name = %legacy.metadata.name, "no snapshot, keeping mapped values");
            return Ok(hub);
        };

        reconcile(&mut hub, &restored, &legacy.spec.virtual_network);
        Ok(hub)
    }
}

/// Down-convert with the default configuration
///
/// # Errors
/// See [`Converter::convert_down`].
#[inline]
pub fn convert_down(hub: &v1beta1::ManagedControlPlane) -> Result<v1alpha4::ManagedControlPlane> {
    Converter::default().convert_down(hub)
}

/// Up-convert with the default configuration
///
/// # Errors
/// See [`Converter::convert_up`].
#[inline]
pub fn convert_up(legacy: &v1alpha4::ManagedControlPlane) -> Result<v1beta1::ManagedControlPlane> {
    Converter::default().convert_up(legacy)
}

/// Patch list fields of a freshly mapped hub record from its snapshot
fn reconcile(
    mapped: &mut v1beta1::ManagedControlPlane,
    restored: &HubSnapshot,
    legacy: &v1alpha4::ManagedControlPlaneVirtualNetwork,
) {
    let vnet = &mut mapped.spec.virtual_network;
    let restored_vnet = &restored.spec.virtual_network;

    reconcile_list(
        &mut vnet.cidr_blocks,
        restored_vnet.cidr_blocks.as_deref(),
        legacy.cidr_block.is_some(),
    );
    reconcile_list(
        &mut vnet.subnets,
        restored_vnet.subnets.as_deref(),
        legacy.subnet.is_some(),
    );

    let (Some(subnets), Some(legacy_subnet)) = (vnet.subnets.as_mut(), legacy.subnet.as_ref()) else {
        return;
    };
    let restored_subnets = restored_vnet.subnets.as_deref().unwrap_or_default();

    // Mapped subnets come from the single legacy subnet, so at most one entry here.
    for (subnet, restored_subnet) in subnets.iter_mut().zip(restored_subnets) {
        reconcile_list(
            &mut subnet.cidr_blocks,
            restored_subnet.cidr_blocks.as_deref(),
            legacy_subnet.cidr_block.is_some(),
        );
    }
}

/// Apply the three-way policy to one list field
fn reconcile_list<T>(mapped: &mut Option<Vec<T>>, restored: Option<&[T]>, legacy_present: bool) {
    if legacy_present {
        return;
    }
    match restored {
        None => *mapped = None,
        Some([]) => *mapped = Some(Vec::new()),
        Some(_) => {}
    }
}
