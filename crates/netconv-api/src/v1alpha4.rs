//! Legacy version (`v1alpha4`)
//!
//! Same record as [`crate::v1beta1`] except for the virtual network: it holds
//! at most one CIDR block and at most one subnet, and that subnet holds at
//! most one CIDR block.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ApiEndpoint, ObjectMeta, TypeMeta, KIND};

/// `apiVersion` of this schema
pub const API_VERSION: &str = "netconv.x-k8s.io/v1alpha4";

/// Managed Kubernetes control plane, legacy representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedControlPlane {
    #[serde(flatten)]
    pub type_meta: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: ManagedControlPlaneSpec,

    #[serde(default)]
    pub status: ManagedControlPlaneStatus,
}

impl ManagedControlPlane {
    /// Create an empty record of this version
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            type_meta: Self::type_meta(),
            metadata: ObjectMeta::named(name),
            spec: ManagedControlPlaneSpec::default(),
            status: ManagedControlPlaneStatus::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn type_meta() -> TypeMeta {
        TypeMeta::new(API_VERSION, KIND)
    }
}

impl Default for ManagedControlPlane {
    fn default() -> Self {
        Self::new("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedControlPlaneSpec {
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub resource_group_name: String,

    #[serde(default)]
    pub node_resource_group_name: String,

    #[serde(default)]
    pub virtual_network: ManagedControlPlaneVirtualNetwork,

    #[serde(default)]
    pub subscription_id: String,

    #[serde(default)]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_endpoint: Option<ApiEndpoint>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_tags: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_plugin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<String>,

    #[serde(default)]
    pub ssh_public_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_service_ip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_sku: Option<String>,
}

/// Virtual network with a single address block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedControlPlaneVirtualNetwork {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<ManagedControlPlaneSubnet>,
}

impl ManagedControlPlaneVirtualNetwork {
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedControlPlaneSubnet {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
}

impl ManagedControlPlaneSubnet {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, cidr_block: Option<String>) -> Self {
        Self {
            name: name.into(),
            cidr_block,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedControlPlaneStatus {
    #[serde(default)]
    pub ready: bool,

    #[serde(default)]
    pub initialized: bool,
}
