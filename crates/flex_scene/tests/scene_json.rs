use anyhow::{Context as _, Result};
use flex_scene::{NodeSnapshot, Scene, SceneDescription};
use serde_json::Value;

const TOOLBAR: &str = include_str!("../scenes/toolbar.json");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

fn snapshot_of<'snap>(snapshots: &'snap [NodeSnapshot], name: &str) -> Result<&'snap NodeSnapshot> {
    snapshots
        .iter()
        .find(|snap| snap.name == name)
        .with_context(|| format!("no node named {name}"))
}

#[test]
/// # Errors
/// Returns an error if the bundled scene fails to load.
///
/// # Panics
/// Panics if the loaded scene is not laid out with space-between.
fn toolbar_scene_loads_and_lays_out() -> Result<()> {
    init_logging();
    let mut scene = Scene::from_json(TOOLBAR)?;
    assert_eq!(scene.len(), 5);
    assert_eq!(scene.ensure_layout()?, 1);

    let snapshots = scene.snapshot();
    let names: Vec<&str> = snapshots.iter().map(|snap| snap.name.as_str()).collect();
    assert_eq!(names, ["window", "back", "title", "spacer", "menu"]);

    // 150 leftover over two gaps.
    for (name, centre) in [("back", 25.0), ("title", 150.0), ("menu", 275.0)] {
        let snap = snapshot_of(&snapshots, name)?;
        assert_close(snap.size.x, 50.0);
        assert_close(snap.anchored_position.x, centre);
        assert_close(snap.anchored_position.y, -10.0);
        assert_close(snap.anchor.y, 1.0);
    }
    let spacer = snapshot_of(&snapshots, "spacer")?;
    assert_close(spacer.size.x, 9.0);
    assert_close(spacer.anchor.x, 0.5);
    Ok(())
}

#[test]
/// # Errors
/// Returns an error if the bundled scene fails to load or serialise.
///
/// # Panics
/// Panics if the snapshot JSON does not carry keys and geometry.
fn snapshot_serialises_to_json() -> Result<()> {
    init_logging();
    let mut scene = Scene::from_json(TOOLBAR)?;
    scene.ensure_layout()?;
    let value = serde_json::to_value(scene.snapshot())?;
    let first = value
        .get(1)
        .context("snapshot has fewer than two entries")?;
    assert_eq!(first.get("name").and_then(Value::as_str), Some("back"));
    assert_eq!(first.get("key").and_then(Value::as_u64), Some(2));
    let centre_x = first
        .pointer("/anchored_position/x")
        .and_then(Value::as_f64)
        .context("missing anchored_position.x")?;
    assert!((centre_x - 25.0).abs() < 0.01);
    Ok(())
}

#[test]
/// # Errors
/// Returns an error if a description cannot round-trip through serde.
///
/// # Panics
/// Panics if malformed or misspelled descriptions are accepted.
fn descriptions_are_validated() -> Result<()> {
    init_logging();
    let description: SceneDescription = serde_json::from_str(TOOLBAR)?;
    let reparsed: SceneDescription = serde_json::from_str(&serde_json::to_string(&description)?)?;
    assert_eq!(reparsed, description);

    assert!(Scene::from_json(r#"{ "nodes": [ { "name": "x", "sise": {} } ] }"#).err().is_some());
    assert!(
        Scene::from_json(r#"{ "nodes": [ { "container": { "direction": "sideways" } } ] }"#)
            .err()
            .is_some()
    );
    let empty = Scene::from_json("{}")?;
    assert!(empty.is_empty());
    Ok(())
}
