//! Object metadata and the key/value side-channel

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// API version and kind of a serialized record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    /// `<group>/<version>`
    #[serde(default)]
    pub api_version: String,

    #[serde(default)]
    pub kind: String,
}

impl TypeMeta {
    #[inline]
    #[must_use]
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
        }
    }

    /// Version segment of `api_version` (`v1beta1` for `group/v1beta1`)
    #[must_use]
    pub fn version(&self) -> &str {
        self.api_version
            .rsplit_once('/')
            .map_or(self.api_version.as_str(), |(_, version)| version)
    }
}

/// Object metadata carried unchanged across versions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Free-form annotations; also the conversion side-channel
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Create metadata with a name and nothing else
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// With namespace
    #[inline]
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Key/value storage scoped to a single record
///
/// Persisted alongside the record by whatever hosts it. Setting a key fully
/// replaces its previous value.
pub trait SideChannel {
    /// Look up a value
    fn get(&self, key: &str) -> Option<&str>;

    /// Store a value, replacing any previous one
    fn set(&mut self, key: &str, value: String);

    /// Remove a value, returning it if it was present
    fn remove(&mut self, key: &str) -> Option<String>;
}

impl SideChannel for BTreeMap<String, String> {
    #[inline]
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }

    #[inline]
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }

    #[inline]
    fn remove(&mut self, key: &str) -> Option<String> {
        BTreeMap::remove(self, key)
    }
}

impl SideChannel for ObjectMeta {
    #[inline]
    fn get(&self, key: &str) -> Option<&str> {
        SideChannel::get(&self.annotations, key)
    }

    #[inline]
    fn set(&mut self, key: &str, value: String) {
        SideChannel::set(&mut self.annotations, key, value);
    }

    #[inline]
    fn remove(&mut self, key: &str) -> Option<String> {
        SideChannel::remove(&mut self.annotations, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_meta_version_segment() {
        let tm = TypeMeta::new("netconv.x-k8s.io/v1alpha4", "ManagedControlPlane");
        assert_eq!(tm.version(), "v1alpha4");

        let bare = TypeMeta::new("v1", "ConfigMap");
        assert_eq!(bare.version(), "v1");
    }

    #[test]
    fn side_channel_set_replaces() {
        let mut meta = ObjectMeta::named("cp");
        meta.set("k", "first".to_string());
        meta.set("k", "second".to_string());

        assert_eq!(meta.get("k"), Some("second"));
        assert_eq!(meta.annotations.len(), 1);
    }

    #[test]
    fn side_channel_remove() {
        let mut meta = ObjectMeta::named("cp");
        meta.set("k", "v".to_string());

        assert_eq!(meta.remove("k"), Some("v".to_string()));
        assert_eq!(meta.get("k"), None);
        assert_eq!(meta.remove("k"), None);
    }

    #[test]
    fn empty_maps_are_omitted() {
        let meta = ObjectMeta::named("cp").with_namespace("default");
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json, serde_json::json!({"name": "cp", "namespace": "default"}));
    }
}
