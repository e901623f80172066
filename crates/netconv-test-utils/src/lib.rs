//! Testing utilities for netconv workspace
//!
//! Shared record fixtures and proptest strategies.

#![allow(missing_docs)]

use netconv_api::{v1alpha4, v1beta1, ApiEndpoint};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

pub fn cidrs(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| (*s).to_string()).collect())
}

/// Hub record with every scalar populated and the given virtual network
pub fn hub_with_network(vnet: v1beta1::ManagedControlPlaneVirtualNetwork) -> v1beta1::ManagedControlPlane {
    let mut cp = v1beta1::ManagedControlPlane::new("cp-1");
    cp.metadata.namespace = Some("default".to_string());
    cp.metadata.labels.insert("cluster.x-k8s.io/cluster-name".to_string(), "cluster-1".to_string());
    cp.spec.version = "v1.22.4".to_string();
    cp.spec.resource_group_name = "rg-cluster-1".to_string();
    cp.spec.node_resource_group_name = "rg-cluster-1-nodes".to_string();
    cp.spec.subscription_id = "00000000-0000-0000-0000-000000000000".to_string();
    cp.spec.location = "westeurope".to_string();
    cp.spec.control_plane_endpoint = Some(ApiEndpoint::new("cluster-1.hcp.westeurope.example", 443));
    cp.spec.additional_tags.insert("owner".to_string(), "platform".to_string());
    cp.spec.network_plugin = Some("azure".to_string());
    cp.spec.network_policy = Some("calico".to_string());
    cp.spec.ssh_public_key = "ssh-rsa AAAAB3NzaC1yc2E".to_string();
    cp.spec.dns_service_ip = Some("10.0.0.10".to_string());
    cp.spec.load_balancer_sku = Some("Standard".to_string());
    cp.spec.virtual_network = vnet;
    cp.status.ready = true;
    cp.status.initialized = true;
    cp
}

/// Hub record whose virtual network fits the legacy schema exactly
pub fn single_block_hub() -> v1beta1::ManagedControlPlane {
    hub_with_network(v1beta1::ManagedControlPlaneVirtualNetwork {
        name: "cp-1-vnet".to_string(),
        cidr_blocks: cidrs(&["10.0.0.0/16"]),
        subnets: Some(vec![v1beta1::ManagedControlPlaneSubnet::new(
            "cp-1-subnet",
            cidrs(&["10.0.0.0/24"]),
        )]),
    })
}

/// Hub record with more blocks and subnets than the legacy schema can hold
pub fn multi_block_hub() -> v1beta1::ManagedControlPlane {
    hub_with_network(v1beta1::ManagedControlPlaneVirtualNetwork {
        name: "cp-1-vnet".to_string(),
        cidr_blocks: cidrs(&["10.0.0.0/16", "10.1.0.0/16"]),
        subnets: Some(vec![
            v1beta1::ManagedControlPlaneSubnet::new("cp-1-subnet", cidrs(&["10.0.0.0/24", "10.0.1.0/24"])),
            v1beta1::ManagedControlPlaneSubnet::new("cp-1-extra", cidrs(&["10.1.0.0/24"])),
        ]),
    })
}

/// Legacy record as a user of the old API would create it: no snapshot
pub fn fresh_legacy(cidr_block: Option<&str>) -> v1alpha4::ManagedControlPlane {
    let mut cp = v1alpha4::ManagedControlPlane::new("cp-1");
    cp.spec.virtual_network = v1alpha4::ManagedControlPlaneVirtualNetwork {
        name: "cp-1-vnet".to_string(),
        cidr_block: cidr_block.map(str::to_string),
        subnet: None,
    };
    cp
}

/// Strategy for a CIDR-looking string
pub fn cidr_strategy() -> impl Strategy<Value = String> {
    (0u8..=255, 0u8..=255, 8u8..=28).prop_map(|(a, b, prefix)| format!("10.{a}.{b}.0/{prefix}"))
}

/// Strategy for an address-block list: absent, empty or populated
pub fn cidr_list_strategy(max_len: usize) -> impl Strategy<Value = Option<Vec<String>>> {
    option::of(vec(cidr_strategy(), 0..=max_len))
}

/// Strategy for arbitrary hub virtual networks
pub fn virtual_network_strategy() -> impl Strategy<Value = v1beta1::ManagedControlPlaneVirtualNetwork> {
    let subnet = ("[a-z][a-z0-9-]{0,11}", cidr_list_strategy(3))
        .prop_map(|(name, cidr_blocks)| v1beta1::ManagedControlPlaneSubnet { name, cidr_blocks });

    ("[a-z][a-z0-9-]{0,11}", cidr_list_strategy(4), option::of(vec(subnet, 0..=3)))
        .prop_map(|(name, cidr_blocks, subnets)| v1beta1::ManagedControlPlaneVirtualNetwork {
            name,
            cidr_blocks,
            subnets,
        })
}

/// Strategy for virtual networks the legacy schema can hold without loss
///
/// Exactly one address block; zero or one subnet with zero or one block.
pub fn single_block_network_strategy() -> impl Strategy<Value = v1beta1::ManagedControlPlaneVirtualNetwork> {
    let subnet = ("[a-z][a-z0-9-]{0,11}", option::of(vec(cidr_strategy(), 0..=1)))
        .prop_map(|(name, cidr_blocks)| v1beta1::ManagedControlPlaneSubnet { name, cidr_blocks });

    ("[a-z][a-z0-9-]{0,11}", cidr_strategy(), option::of(vec(subnet, 0..=1)))
        .prop_map(|(name, cidr, subnets)| v1beta1::ManagedControlPlaneVirtualNetwork {
            name,
            cidr_blocks: Some(vec![cidr]),
            subnets,
        })
}
