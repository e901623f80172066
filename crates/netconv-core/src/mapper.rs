//! Field mapping between hub and legacy records
//!
//! Every function here is total and never looks at conversion history. The
//! lossy policy lives in one place: when a hub list has to become a legacy
//! scalar, the first element wins and the rest is dropped. Fidelity recovery
//! is layered on top by [`crate::convert`].

use netconv_api::{v1alpha4, v1beta1};

/// Reduce an address-block list to its first element
#[inline]
#[must_use]
pub fn cidr_blocks_to_cidr_block(blocks: Option<&[String]>) -> Option<String> {
    blocks.and_then(<[String]>::first).cloned()
}

/// Lift an optional address block into a list
///
/// Never returns `None`: an absent block becomes an empty list.
#[inline]
#[must_use]
pub fn cidr_block_to_cidr_blocks(block: Option<&str>) -> Option<Vec<String>> {
    Some(block.map(str::to_string).into_iter().collect())
}

#[must_use]
pub fn subnet_to_legacy(subnet: &v1beta1::ManagedControlPlaneSubnet) -> v1alpha4::ManagedControlPlaneSubnet {
    v1alpha4::ManagedControlPlaneSubnet {
        name: subnet.name.clone(),
        cidr_block: cidr_blocks_to_cidr_block(subnet.cidr_blocks.as_deref()),
    }
}

#[must_use]
pub fn subnet_to_hub(subnet: &v1alpha4::ManagedControlPlaneSubnet) -> v1beta1::ManagedControlPlaneSubnet {
    v1beta1::ManagedControlPlaneSubnet {
        name: subnet.name.clone(),
        cidr_blocks: cidr_block_to_cidr_blocks(subnet.cidr_block.as_deref()),
    }
}

/// Hub virtual network to legacy
///
/// Keeps only the first address block and the first subnet.
#[must_use]
pub fn virtual_network_to_legacy(
    vnet: &v1beta1::ManagedControlPlaneVirtualNetwork,
) -> v1alpha4::ManagedControlPlaneVirtualNetwork {
    v1alpha4::ManagedControlPlaneVirtualNetwork {
        name: vnet.name.clone(),
        cidr_block: cidr_blocks_to_cidr_block(vnet.cidr_blocks.as_deref()),
        subnet: vnet
            .subnets
            .as_deref()
            .and_then(<[_]>::first)
            .map(subnet_to_legacy),
    }
}

/// Legacy virtual network to hub
///
/// Both lists come back present with at most one element.
#[must_use]
pub fn virtual_network_to_hub(
    vnet: &v1alpha4::ManagedControlPlaneVirtualNetwork,
) -> v1beta1::ManagedControlPlaneVirtualNetwork {
    v1beta1::ManagedControlPlaneVirtualNetwork {
        name: vnet.name.clone(),
        cidr_blocks: cidr_block_to_cidr_blocks(vnet.cidr_block.as_deref()),
        subnets: Some(vnet.subnet.iter().map(subnet_to_hub).collect()),
    }
}

#[must_use]
pub fn spec_to_legacy(spec: &v1beta1::ManagedControlPlaneSpec) -> v1alpha4::ManagedControlPlaneSpec {
    v1alpha4::ManagedControlPlaneSpec {
        version: spec.version.clone(),
        resource_group_name: spec.resource_group_name.clone(),
        node_resource_group_name: spec.node_resource_group_name.clone(),
        virtual_network: virtual_network_to_legacy(&spec.virtual_network),
        subscription_id: spec.subscription_id.clone(),
        location: spec.location.clone(),
        control_plane_endpoint: spec.control_plane_endpoint.clone(),
        additional_tags: spec.additional_tags.clone(),
        network_plugin: spec.network_plugin.clone(),
        network_policy: spec.network_policy.clone(),
        ssh_public_key: spec.ssh_public_key.clone(),
        dns_service_ip: spec.dns_service_ip.clone(),
        load_balancer_sku: spec.load_balancer_sku.clone(),
    }
}

#[must_use]
pub fn spec_to_hub(spec: &v1alpha4::ManagedControlPlaneSpec) -> v1beta1::ManagedControlPlaneSpec {
    v1beta1::ManagedControlPlaneSpec {
        version: spec.version.clone(),
        resource_group_name: spec.resource_group_name.clone(),
        node_resource_group_name: spec.node_resource_group_name.clone(),
        virtual_network: virtual_network_to_hub(&spec.virtual_network),
        subscription_id: spec.subscription_id.clone(),
        location: spec.location.clone(),
        control_plane_endpoint: spec.control_plane_endpoint.clone(),
        additional_tags: spec.additional_tags.clone(),
        network_plugin: spec.network_plugin.clone(),
        network_policy: spec.network_policy.clone(),
        ssh_public_key: spec.ssh_public_key.clone(),
        dns_service_ip: spec.dns_service_ip.clone(),
        load_balancer_sku: spec.load_balancer_sku.clone(),
    }
}

/// Whole hub record to legacy, metadata and status included
#[must_use]
pub fn hub_record_to_legacy(hub: &v1beta1::ManagedControlPlane) -> v1alpha4::ManagedControlPlane {
    v1alpha4::ManagedControlPlane {
        type_meta: v1alpha4::ManagedControlPlane::type_meta(),
        metadata: hub.metadata.clone(),
        spec: spec_to_legacy(&hub.spec),
        status: v1alpha4::ManagedControlPlaneStatus {
            ready: hub.status.ready,
            initialized: hub.status.initialized,
        },
    }
}

/// Whole legacy record to hub, metadata and status included
#[must_use]
pub fn legacy_record_to_hub(legacy: &v1alpha4::ManagedControlPlane) -> v1beta1::ManagedControlPlane {
    v1beta1::ManagedControlPlane {
        type_meta: v1beta1::ManagedControlPlane::type_meta(),
        metadata: legacy.metadata.clone(),
        spec: spec_to_hub(&legacy.spec),
        status: v1beta1::ManagedControlPlaneStatus {
            ready: legacy.status.ready,
            initialized: legacy.status.initialized,
        },
    }
}
