//! Snapshot codec
//!
//! Persists a full hub record in a legacy record's side-channel so the next
//! up-conversion can recover what the legacy schema could not hold.
//!
//! The payload is JSON. Object metadata is left out of it: the payload lives
//! inside that metadata, and nesting would drag every previous snapshot along.

use netconv_api::{v1beta1, SideChannel, TypeMeta, KIND};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{ConversionError, Result};

/// Hub record as stored in the side-channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubSnapshot {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub spec: v1beta1::ManagedControlPlaneSpec,

    #[serde(default)]
    pub status: v1beta1::ManagedControlPlaneStatus,
}

impl From<&v1beta1::ManagedControlPlane> for HubSnapshot {
    fn from(hub: &v1beta1::ManagedControlPlane) -> Self {
        Self {
            type_meta: v1beta1::ManagedControlPlane::type_meta(),
            spec: hub.spec.clone(),
            status: hub.status,
        }
    }
}

/// Reads and writes snapshots under a single reserved key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotCodec<'a> {
    key: &'a str,
}

impl<'a> SnapshotCodec<'a> {
    #[inline]
    #[must_use]
    pub fn new(key: &'a str) -> Self {
        Self { key }
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Serialize `value` into the side-channel, replacing any prior payload
    ///
    /// # Errors
    /// Returns [`ConversionError::Encoding`] if serialization fails; the
    /// channel is left untouched in that case.
    pub fn capture<T, S>(&self, value: &T, channel: &mut S) -> Result<()>
    where
        T: Serialize + ?Sized,
        S: SideChannel + ?Sized,
    {
        let payload =
            serde_json::to_string(value).map_err(|e| ConversionError::Encoding(e.to_string()))?;
        tracing::debug!(key = self.key, bytes = payload.len(), "captured conversion snapshot");
        channel.set(self.key, payload);
        Ok(())
    }

    /// Read a value back from the side-channel
    ///
    /// `Ok(None)` means no payload was ever stored.
    ///
    /// # Errors
    /// Returns [`ConversionError::Decoding`] if a payload is present but
    /// malformed.
    pub fn restore<T, S>(&self, channel: &S) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        S: SideChannel + ?Sized,
    {
        let Some(payload) = channel.get(self.key) else {
            return Ok(None);
        };

        serde_json::from_str(payload)
            .map(Some)
            .map_err(|e| ConversionError::decoding(self.key, e))
    }

    /// Capture a hub record
    ///
    /// # Errors
    /// See [`SnapshotCodec::capture`].
    pub fn capture_hub<S>(&self, hub: &v1beta1::ManagedControlPlane, channel: &mut S) -> Result<()>
    where
        S: SideChannel + ?Sized,
    {
        self.capture(&HubSnapshot::from(hub), channel)
    }

    /// Restore a hub record, checking that the payload describes our kind
    ///
    /// # Errors
    /// See [`SnapshotCodec::restore`]. A payload of another kind is malformed.
    pub fn restore_hub<S>(&self, channel: &S) -> Result<Option<HubSnapshot>>
    where
        S: SideChannel + ?Sized,
    {
        let Some(snapshot) = self.restore::<HubSnapshot, _>(channel)? else {
            return Ok(None);
        };

        if snapshot.type_meta.kind != KIND {
            return Err(ConversionError::decoding(
                self.key,
                format!("expected kind {KIND:?}, found {:?}", snapshot.type_meta.kind),
            ));
        }
        if snapshot.type_meta.api_version != v1beta1::API_VERSION {
            tracing::warn!(
                key = self.key,
                api_version = %snapshot.type_meta.api_version,
                "snapshot was written by a different hub version"
            );
        }

        Ok(Some(snapshot))
    }
}
