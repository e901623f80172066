//! Round-trip behavior of hub/legacy conversion.
//!
//! Each test drives the public entry points end to end: field mapping,
//! snapshot capture into annotations, snapshot restore and reconciliation.

use netconv_api::{v1alpha4, v1beta1, SideChannel};
use netconv_core::{convert_down, convert_up, ConversionError, DEFAULT_SNAPSHOT_KEY};
use netconv_test_utils::{cidrs, fresh_legacy, hub_with_network, multi_block_hub, single_block_hub};
use pretty_assertions::assert_eq;

fn round_trip(hub: &v1beta1::ManagedControlPlane) -> v1beta1::ManagedControlPlane {
    let legacy = convert_down(hub).expect("down-conversion should not fail");
    convert_up(&legacy).expect("up-conversion should not fail")
}

/// A hub record the legacy schema can hold comes back unchanged.
#[test]
fn single_block_record_round_trips() {
    let hub = single_block_hub();
    assert_eq!(round_trip(&hub), hub);
}

/// Extra blocks and subnets disappear from the legacy view, at most one of
/// each remains, and the full record is stored alongside.
#[test]
fn down_conversion_keeps_first_entries_only() {
    let hub = multi_block_hub();
    let legacy = convert_down(&hub).unwrap();
    let vnet = &legacy.spec.virtual_network;

    assert_eq!(vnet.cidr_block.as_deref(), Some("10.0.0.0/16"));
    assert_eq!(
        vnet.subnet,
        Some(v1alpha4::ManagedControlPlaneSubnet::new(
            "cp-1-subnet",
            Some("10.0.0.0/24".to_string())
        ))
    );

    let payload: serde_json::Value =
        serde_json::from_str(legacy.metadata.get(DEFAULT_SNAPSHOT_KEY).unwrap()).unwrap();
    assert_eq!(
        payload["spec"]["virtualNetwork"]["cidrBlocks"],
        serde_json::json!(["10.0.0.0/16", "10.1.0.0/16"])
    );
    assert_eq!(
        payload["spec"]["virtualNetwork"]["subnets"][1]["name"],
        "cp-1-extra"
    );
}

/// Absent lists stay absent.
#[test]
fn absent_lists_survive_round_trip() {
    let hub = hub_with_network(v1beta1::ManagedControlPlaneVirtualNetwork::named("net1"));

    let back = round_trip(&hub);

    assert_eq!(back.spec.virtual_network.cidr_blocks, None);
    assert_eq!(back.spec.virtual_network.subnets, None);
    assert_eq!(back, hub);
}

/// Explicitly empty lists stay empty rather than collapsing to absent.
#[test]
fn empty_lists_survive_round_trip() {
    let hub = hub_with_network(v1beta1::ManagedControlPlaneVirtualNetwork {
        name: "net1".to_string(),
        cidr_blocks: Some(Vec::new()),
        subnets: Some(Vec::new()),
    });

    let back = round_trip(&hub);

    assert_eq!(back.spec.virtual_network.cidr_blocks, Some(Vec::new()));
    assert_eq!(back.spec.virtual_network.subnets, Some(Vec::new()));
    assert_eq!(back, hub);
}

/// The absent/empty distinction is also recovered inside the subnet.
#[test]
fn subnet_block_lists_survive_round_trip() {
    for cidr_blocks in [None, Some(Vec::new())] {
        let hub = hub_with_network(v1beta1::ManagedControlPlaneVirtualNetwork {
            name: "net1".to_string(),
            cidr_blocks: cidrs(&["10.0.0.0/16"]),
            subnets: Some(vec![v1beta1::ManagedControlPlaneSubnet::new(
                "subnet1",
                cidr_blocks.clone(),
            )]),
        });

        let back = round_trip(&hub);

        let subnets = back.spec.virtual_network.subnets.as_deref().unwrap();
        assert_eq!(subnets[0].cidr_blocks, cidr_blocks);
        assert_eq!(back, hub);
    }
}

/// Without a snapshot the mapped value is the answer.
#[test]
fn legacy_without_snapshot_maps_directly() {
    let legacy = fresh_legacy(Some("10.0.0.0/16"));

    let hub = convert_up(&legacy).unwrap();

    assert_eq!(hub.spec.virtual_network.cidr_blocks, cidrs(&["10.0.0.0/16"]));
    assert_eq!(hub.spec.virtual_network.subnets, Some(Vec::new()));
}

/// Without a snapshot, missing scalars become empty lists, never absent ones.
#[test]
fn legacy_without_snapshot_yields_empty_lists() {
    let hub = convert_up(&fresh_legacy(None)).unwrap();

    assert_eq!(hub.spec.virtual_network.cidr_blocks, Some(Vec::new()));
    assert_eq!(hub.spec.virtual_network.subnets, Some(Vec::new()));
}

/// A block edited through the legacy API replaces the stored list.
#[test]
fn legacy_edit_overrides_snapshot() {
    let hub = hub_with_network(v1beta1::ManagedControlPlaneVirtualNetwork {
        name: "net1".to_string(),
        cidr_blocks: cidrs(&["10.0.0.0/16", "10.1.0.0/16"]),
        subnets: None,
    });
    let mut legacy = convert_down(&hub).unwrap();
    assert_eq!(legacy.spec.virtual_network.cidr_block.as_deref(), Some("10.0.0.0/16"));

    legacy.spec.virtual_network.cidr_block = Some("10.2.0.0/16".to_string());
    let back = convert_up(&legacy).unwrap();

    assert_eq!(back.spec.virtual_network.cidr_blocks, cidrs(&["10.2.0.0/16"]));
}

/// Clearing the block through the legacy API clears the list.
#[test]
fn legacy_clear_overrides_populated_snapshot() {
    let mut legacy = convert_down(&multi_block_hub()).unwrap();
    legacy.spec.virtual_network.cidr_block = None;

    let back = convert_up(&legacy).unwrap();

    assert_eq!(back.spec.virtual_network.cidr_blocks, Some(Vec::new()));
}

/// A subnet added through the legacy API shows up even though the snapshot
/// had none.
#[test]
fn legacy_added_subnet_overrides_absent_snapshot() {
    let hub = hub_with_network(v1beta1::ManagedControlPlaneVirtualNetwork::named("net1"));
    let mut legacy = convert_down(&hub).unwrap();
    legacy.spec.virtual_network.subnet = Some(v1alpha4::ManagedControlPlaneSubnet::new(
        "subnet1",
        Some("10.0.0.0/24".to_string()),
    ));

    let back = convert_up(&legacy).unwrap();

    assert_eq!(
        back.spec.virtual_network.subnets,
        Some(vec![v1beta1::ManagedControlPlaneSubnet::new(
            "subnet1",
            cidrs(&["10.0.0.0/24"])
        )])
    );
}

/// A corrupt snapshot fails the conversion instead of being ignored.
#[test]
fn corrupt_snapshot_is_fatal() {
    let mut legacy = fresh_legacy(Some("10.0.0.0/16"));
    legacy.metadata.set(DEFAULT_SNAPSHOT_KEY, "not a snapshot".to_string());

    let err = convert_up(&legacy).unwrap_err();

    assert!(matches!(err, ConversionError::Decoding { .. }));
    assert!(err.is_corrupt_snapshot());
}

/// Conversion reads its input and nothing else.
#[test]
fn inputs_are_not_mutated() {
    let hub = multi_block_hub();
    let hub_before = hub.clone();
    let legacy = convert_down(&hub).unwrap();
    assert_eq!(hub, hub_before);

    let legacy_before = legacy.clone();
    let _ = convert_up(&legacy).unwrap();
    assert_eq!(legacy, legacy_before);
    assert!(legacy.metadata.get(DEFAULT_SNAPSHOT_KEY).is_some());
}

/// The snapshot annotation never leaks into hub records, and other
/// annotations pass through both ways.
#[test]
fn snapshot_annotation_is_stripped_on_up_conversion() {
    let mut hub = single_block_hub();
    hub.metadata.set("example.com/owner", "team-net".to_string());

    let legacy = convert_down(&hub).unwrap();
    assert_eq!(legacy.metadata.get("example.com/owner"), Some("team-net"));

    let back = convert_up(&legacy).unwrap();
    assert_eq!(back.metadata.get(DEFAULT_SNAPSHOT_KEY), None);
    assert_eq!(back.metadata.get("example.com/owner"), Some("team-net"));
}

/// Converting down again replaces the snapshot from the previous round.
#[test]
fn repeated_down_conversion_supersedes_snapshot() {
    let legacy = convert_down(&multi_block_hub()).unwrap();
    let mut hub = convert_up(&legacy).unwrap();
    hub.spec.virtual_network.cidr_blocks = None;
    hub.spec.virtual_network.subnets = None;

    let second = convert_down(&hub).unwrap();
    assert_eq!(second.metadata.annotations.len(), 1);

    let back = convert_up(&second).unwrap();
    assert_eq!(back.spec.virtual_network.cidr_blocks, None);
    assert_eq!(back.spec.virtual_network.subnets, None);
}

/// Scalars outside the virtual network copy verbatim in both directions.
#[test]
fn scalar_fields_copy_verbatim() {
    let hub = single_block_hub();
    let legacy = convert_down(&hub).unwrap();

    assert_eq!(legacy.type_meta.api_version, v1alpha4::API_VERSION);
    assert_eq!(legacy.spec.version, hub.spec.version);
    assert_eq!(legacy.spec.location, hub.spec.location);
    assert_eq!(legacy.spec.control_plane_endpoint, hub.spec.control_plane_endpoint);
    assert_eq!(legacy.spec.additional_tags, hub.spec.additional_tags);
    assert_eq!(legacy.spec.load_balancer_sku, hub.spec.load_balancer_sku);
    assert_eq!(legacy.status.ready, hub.status.ready);
    assert_eq!(legacy.metadata.labels, hub.metadata.labels);
}

/// A legacy document written by hand in YAML converts up like any other.
#[test]
fn yaml_legacy_document_converts_up() {
    let yaml = r"
apiVersion: netconv.x-k8s.io/v1alpha4
kind: ManagedControlPlane
metadata:
  name: cp-yaml
spec:
  version: v1.21.2
  virtualNetwork:
    name: vnet
    cidrBlock: 10.0.0.0/8
    subnet:
      name: subnet
";
    let legacy: v1alpha4::ManagedControlPlane = serde_yaml::from_str(yaml).unwrap();

    let hub = convert_up(&legacy).unwrap();

    assert_eq!(hub.type_meta.api_version, v1beta1::API_VERSION);
    assert_eq!(hub.spec.virtual_network.cidr_blocks, cidrs(&["10.0.0.0/8"]));
    assert_eq!(
        hub.spec.virtual_network.subnets,
        Some(vec![v1beta1::ManagedControlPlaneSubnet::new("subnet", Some(Vec::new()))])
    );
}
