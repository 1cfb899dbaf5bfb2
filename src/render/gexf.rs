//! GEXF 1.2 output for Gephi.

use std::fmt::{self, Display, Formatter};

use super::{RenderOptions, visible};
use crate::graph::Graph;

/// GEXF rendering of a graph.
#[derive(Debug, Clone, Copy)]
pub struct Gexf<'a> {
    graph: &'a Graph,
    options: RenderOptions,
}

impl<'a> Gexf<'a> {
    /// Prepare `graph` for rendering.
    #[must_use]
    pub const fn new(graph: &'a Graph, options: RenderOptions) -> Self {
        Self { graph, options }
    }
}

impl Display for Gexf<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(f, r#"<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">"#)?;
        writeln!(f, "  <meta>")?;
        writeln!(
            f,
            "    <creator>make2graph version:{}</creator>",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(f, "    <description>Creates a graph from a Makefile</description>")?;
        writeln!(f, "  </meta>")?;
        writeln!(f, r#"  <graph mode="static" defaultedgetype="directed">"#)?;
        writeln!(f, r#"    <attributes class="node" mode="static"/>"#)?;
        writeln!(f, "    <nodes>")?;
        for target in visible(self.graph, self.options) {
            writeln!(
                f,
                r#"      <node id="n{}" label="{}"/>"#,
                target.id(),
                Escaped(self.options.labels.apply(target.name())),
            )?;
        }
        writeln!(f, "    </nodes>")?;
        writeln!(f, "    <edges>")?;
        let mut edge = 0usize;
        for target in visible(self.graph, self.options) {
            for child in target.children() {
                edge += 1;
                writeln!(
                    f,
                    r#"      <edge id="E{edge}" type="directed" source="n{child}" target="n{}"/>"#,
                    target.id(),
                )?;
            }
        }
        writeln!(f, "    </edges>")?;
        writeln!(f, "  </graph>")?;
        writeln!(f, "</gexf>")
    }
}

/// XML attribute escaping.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '&' => f.write_str("&amp;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
