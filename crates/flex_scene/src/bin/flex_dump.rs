//! Lay out a JSON scene description and print the resulting geometry as JSON.
//!
//! Usage: `flex_dump <scene.json>`. Set `RUST_LOG=flexbox=debug,flex_scene=debug` to trace the
//! layout passes.

use std::env;
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context as _, Result};
use flex_scene::Scene;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    let path = env::args()
        .nth(1)
        .context("usage: flex_dump <scene.json>")?;
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let mut scene = Scene::from_json(&text).with_context(|| format!("loading {path}"))?;
    let passes = scene.ensure_layout()?;
    info!(target: "flex_scene", "laid out {} nodes from {path} in {passes} passes", scene.len());

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &scene.snapshot()).context("writing snapshot")?;
    writeln!(out)?;
    Ok(())
}
