//! Access to the `make -Bnd` trace fixtures in `tests/data`.
//!
//! The fixtures cover GNU Make 4 (`'name'` quoting) and 3.81 (`` `name' ``
//! quoting) plus two traces that must be rejected.

use anyhow::{Context, Result};
use make2graph::graph::Graph;
use make2graph::trace::{ScanOptions, scan};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

/// Absolute path of a trace fixture in `tests/data`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Contents of a trace fixture.
pub fn fixture_text(name: &str) -> Result<String> {
    let path = fixture_path(name);
    fs::read_to_string(&path).with_context(|| format!("read fixture {}", path.display()))
}

/// Scan a trace fixture into a graph.
pub fn scan_fixture(name: &str, show_root: bool) -> Result<Graph> {
    let path = fixture_path(name);
    let file = File::open(&path).with_context(|| format!("open fixture {}", path.display()))?;
    scan(BufReader::new(file), ScanOptions { show_root })
        .with_context(|| format!("scan fixture {name}"))
}
