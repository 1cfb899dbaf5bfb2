//! Rendering scanned traces.
//!
//! The DOT output of the GNU Make 4 fixture is snapshotted with `insta`;
//! the other formats are checked structurally.

mod common;

use anyhow::{Result, ensure};
use common::scan_fixture;
use insta::{Settings, assert_snapshot};
use make2graph::render::{LabelStyle, OutputFormat, RenderOptions, render};
use rstest::rstest;

fn render_to_string(
    fixture: &str,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    let graph = scan_fixture(fixture, options.show_root)?;
    let mut out = Vec::new();
    render(&graph, format, options, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn gnu4_dot_snapshot() -> Result<()> {
    let dot = render_to_string("gnu4.trace", OutputFormat::Dot, RenderOptions::default())?;
    let mut settings = Settings::new();
    settings.set_snapshot_path(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/snapshots/render"
    ));
    settings.bind(|| {
        assert_snapshot!("gnu4_dot", dot);
    });
    Ok(())
}

#[test]
fn simple_scenario_dot() -> Result<()> {
    let dot = render_to_string("simple.trace", OutputFormat::Dot, RenderOptions::default())?;
    let expected = concat!(
        "digraph G {\n",
        "n3[label=\"a.o\", color=\"red\"];\n",
        "n2[label=\"all\", color=\"red\"];\n",
        "n3 -> n2 ;\n",
        "}\n",
    );
    ensure!(dot == expected, "unexpected DOT:\n{dot}");
    Ok(())
}

#[rstest]
#[case::dot(OutputFormat::Dot)]
#[case::gexf(OutputFormat::Gexf)]
#[case::list(OutputFormat::List)]
fn hidden_root_is_never_referenced(#[case] format: OutputFormat) -> Result<()> {
    let out = render_to_string("gnu4.trace", format, RenderOptions::default())?;
    ensure!(!out.contains("ROOT"), "root leaked into {format:?} output");
    ensure!(!out.contains("n1[") && !out.contains("\"n1\""));
    Ok(())
}

#[test]
fn shown_root_appears_once_as_point() -> Result<()> {
    let options = RenderOptions {
        show_root: true,
        ..RenderOptions::default()
    };
    let dot = render_to_string("gnu4.trace", OutputFormat::Dot, options)?;
    ensure!(dot.matches("n1[").count() == 1);
    ensure!(dot.contains("n1[shape=point, label=\"\"];\n"));
    ensure!(dot.contains("n2 -> n1 ;\n"));
    let root_line = dot.lines().find(|l| l.starts_with("n1[")).unwrap_or_default();
    ensure!(!root_line.contains("color"), "root must not be colored");
    Ok(())
}

#[test]
fn gexf_lists_nodes_and_edges() -> Result<()> {
    let xml = render_to_string("gnu4.trace", OutputFormat::Gexf, RenderOptions::default())?;
    ensure!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    ensure!(xml.matches("<node ").count() == 7);
    ensure!(xml.matches("<edge ").count() == 7);
    ensure!(xml.contains(r#"<edge id="E7" type="directed" source="n8" target="n7"/>"#));
    Ok(())
}

#[test]
fn suffix_labels() -> Result<()> {
    let options = RenderOptions {
        labels: LabelStyle {
            basename: false,
            suffix: true,
        },
        ..RenderOptions::default()
    };
    let dot = render_to_string("gnu4.trace", OutputFormat::Dot, options)?;
    ensure!(dot.contains("n4[label=\"o\", color=\"red\"];"));
    ensure!(dot.contains("n3[label=\"hello\", color=\"red\"];"));
    Ok(())
}

#[rstest]
#[case::all_targets(OutputFormat::List, "all\ndefs.h\nhello\nmain.c\nmain.o\nutil.c\nutil.o\n")]
#[case::deep_targets(OutputFormat::Deep, "main.o\nutil.o\n")]
fn listings(#[case] format: OutputFormat, #[case] expected: &str) -> Result<()> {
    let out = render_to_string("gnu4.trace", format, RenderOptions::default())?;
    ensure!(out == expected, "unexpected listing:\n{out}");
    Ok(())
}
