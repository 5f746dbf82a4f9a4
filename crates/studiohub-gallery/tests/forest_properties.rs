//! Property-style integration tests over whole asset forests.

use studiohub_core::error::ErrorKind;
use studiohub_core::types::AssetId;
use studiohub_entity::{AssetKind, AssetNode, AssetRecord, normalize};
use studiohub_gallery::navigate::{asset_path_with_ids, parent_chain};
use studiohub_gallery::search::{all_descendants, search_assets, folder_item_count, total_item_count};
use studiohub_gallery::tree::root_assets;
use studiohub_gallery::validate::{
    asset_depth, check_circular_reference, check_nesting_depth, move_asset,
};
use studiohub_gallery::{MAX_NESTING_DEPTH, find_asset};

fn node(id: &str, name: &str, kind: AssetKind, parent: Option<&str>) -> AssetNode {
    AssetNode {
        id: AssetId::from(id),
        name: name.to_string(),
        kind,
        parent_id: parent.map(AssetId::from),
        preview_url: None,
        external_url: None,
        color_tag: None,
        created_at: None,
    }
}

/// A mixed fixture forest: two trees plus root-level files.
fn fixture() -> Vec<AssetNode> {
    vec![
        node("clients", "Clients", AssetKind::Folder, None),
        node("acme", "Acme", AssetKind::Folder, Some("clients")),
        node("drafts", "Drafts", AssetKind::Folder, Some("acme")),
        node("d1", "sketch_v1.png", AssetKind::File, Some("drafts")),
        node("d2", "sketch_v2.png", AssetKind::File, Some("drafts")),
        node("final", "final_art.psd", AssetKind::File, Some("acme")),
        node("trip", "Trip", AssetKind::Folder, None),
        node("beach", "beach_sunset.jpg", AssetKind::File, Some("trip")),
        node("logo", "logo.svg", AssetKind::File, None),
    ]
}

/// Folder ladder F1..F9, F1 root, depths 0 through 8.
fn ladder() -> Vec<AssetNode> {
    (1..=9)
        .map(|i| {
            let parent = (i > 1).then(|| format!("f{}", i - 1));
            node(
                &format!("f{i}"),
                &format!("F{i}"),
                AssetKind::Folder,
                parent.as_deref(),
            )
        })
        .collect()
}

#[test]
fn root_detection_invariant() {
    let nodes = fixture();
    let roots = root_assets(&nodes);
    for candidate in &nodes {
        let listed = roots.iter().any(|root| root.id == candidate.id);
        assert_eq!(listed, candidate.parent_id.is_none(), "node {}", candidate.id);
    }
}

#[test]
fn depth_monotonicity() {
    let nodes = fixture();
    for candidate in &nodes {
        if let Some(parent_id) = &candidate.parent_id {
            let child_depth = asset_depth(&nodes, &candidate.id).unwrap();
            let parent_depth = asset_depth(&nodes, parent_id).unwrap();
            assert_eq!(parent_depth, child_depth - 1, "node {}", candidate.id);
        } else {
            assert_eq!(asset_depth(&nodes, &candidate.id).unwrap(), 0);
        }
    }
}

#[test]
fn no_false_cycles_accepted() {
    let nodes = fixture();
    for a in &nodes {
        let descendants = all_descendants(&nodes, &a.id).unwrap();
        for b in &nodes {
            let verdict = check_circular_reference(&nodes, &a.id, Some(&b.id));
            let must_reject =
                b.id == a.id || descendants.iter().any(|descendant| descendant.id == b.id);
            assert_eq!(verdict.is_err(), must_reject, "A={} B={}", a.id, b.id);
        }
    }
}

#[test]
fn depth_boundary_exact() {
    let nodes = ladder();

    // Placing F10 under F9 lands at depth 9, strictly below the limit.
    assert_eq!(
        check_nesting_depth(&nodes, Some(&"f9".into())).unwrap(),
        MAX_NESTING_DEPTH - 1
    );

    // With F10 in place, a child of F10 would sit at depth 10, rejected.
    let mut deeper = nodes.clone();
    deeper.push(node("f10", "F10", AssetKind::Folder, Some("f9")));
    let err = check_nesting_depth(&deeper, Some(&"f10".into())).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("Maximum nesting depth (10 levels)"));
}

#[test]
fn breadcrumb_roundtrip() {
    let nodes = fixture();
    for candidate in &nodes {
        let segments = asset_path_with_ids(&nodes, &candidate.id).unwrap();
        let last = segments.last().unwrap();
        assert_eq!(last.id, candidate.id);
        assert_eq!(last.name, candidate.name);

        let chain = parent_chain(&nodes, &candidate.id).unwrap();
        assert_eq!(segments.len(), chain.len() + 1);
        for (segment, ancestor) in segments.iter().zip(&chain) {
            assert_eq!(segment.id, ancestor.id);
            assert_eq!(segment.name, ancestor.name);
        }
    }
}

#[test]
fn search_superset_property() {
    let nodes = fixture();
    for target in nodes.iter().filter(|n| !n.is_folder()) {
        let results = search_assets(&nodes, &target.name).unwrap();
        assert!(results.iter().any(|hit| hit.id == target.id));
        // Every ancestor folder of the hit must surface too.
        for ancestor in parent_chain(&nodes, &target.id).unwrap() {
            assert!(
                results.iter().any(|hit| hit.id == ancestor.id),
                "ancestor {} missing for query {}",
                ancestor.id,
                target.name
            );
        }
    }
}

#[test]
fn aggregation_consistency() {
    let nodes = fixture();
    for folder in nodes.iter().filter(|n| n.is_folder()) {
        let direct = folder_item_count(&nodes, &folder.id);
        let total = total_item_count(&nodes, &folder.id).unwrap();
        let descendants = all_descendants(&nodes, &folder.id).unwrap();
        assert_eq!(total.total, descendants.len(), "folder {}", folder.id);
        assert!(direct.total <= total.total);
        assert_eq!(total.total, total.files + total.folders);
    }
}

#[test]
fn legacy_normalization_idempotence() {
    let raw = r#"[
        {"id":"x","asset_name":"old"},
        {"id":"clients","asset_name":"Clients","asset_type":"folder","parent_id":null},
        {"id":"f","asset_name":"final.psd","asset_type":"file","parent_id":"clients"}
    ]"#;
    let records: Vec<AssetRecord> = serde_json::from_str(raw).unwrap();
    let once = normalize(records);

    // Legacy row: absent parent becomes root, missing type becomes file.
    let legacy = find_asset(&once, &"x".into()).unwrap();
    assert!(legacy.is_root());
    assert_eq!(legacy.kind, AssetKind::File);

    let twice = normalize(once.iter().cloned().map(AssetRecord::from).collect());
    assert_eq!(once, twice);
}

#[test]
fn scenario_move_root_under_grandchild() {
    // Root(null) -> A(Root) -> B(A); moving Root under B must fail.
    let nodes = vec![
        node("root", "Root", AssetKind::Folder, None),
        node("a", "A", AssetKind::Folder, Some("root")),
        node("b", "B", AssetKind::Folder, Some("a")),
    ];
    assert_eq!(asset_depth(&nodes, &"b".into()).unwrap(), 2);

    let err = move_asset(&nodes, &"root".into(), Some("b".into())).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("circular reference"));
}

#[test]
fn scenario_ladder_accepts_f10_rejects_f11() {
    let mut nodes = ladder();

    // Creating F10 under F9 (depth 9 < 10) is allowed.
    assert!(check_nesting_depth(&nodes, Some(&"f9".into())).is_ok());
    nodes.push(node("f10", "F10", AssetKind::Folder, Some("f9")));

    // Creating F11 under F10 (depth 10) is rejected.
    assert!(check_nesting_depth(&nodes, Some(&"f10".into())).is_err());
}

#[test]
fn scenario_beach_query() {
    let nodes = vec![
        node("trip", "Trip", AssetKind::Folder, None),
        node("beach", "beach_sunset.jpg", AssetKind::File, Some("trip")),
    ];
    let results = search_assets(&nodes, "beach").unwrap();
    let ids: Vec<&str> = results.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["trip", "beach"]);
}
