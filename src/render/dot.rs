//! Graphviz DOT output.

use std::fmt::{self, Display, Formatter, Write};

use super::{RenderOptions, visible};
use crate::graph::Graph;

/// DOT rendering of a graph. Dirty targets are red, up-to-date ones green.
#[derive(Debug, Clone, Copy)]
pub struct Dot<'a> {
    graph: &'a Graph,
    options: RenderOptions,
}

impl<'a> Dot<'a> {
    /// Prepare `graph` for rendering.
    #[must_use]
    pub const fn new(graph: &'a Graph, options: RenderOptions) -> Self {
        Self { graph, options }
    }
}

impl Display for Dot<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        for target in visible(self.graph, self.options) {
            if self.graph.is_root(target.id()) {
                writeln!(f, "n{}[shape=point, label=\"\"];", target.id())?;
            } else {
                let color = if target.must_remake() { "red" } else { "green" };
                writeln!(
                    f,
                    "n{}[label=\"{}\", color=\"{color}\"];",
                    target.id(),
                    Quoted(self.options.labels.apply(target.name())),
                )?;
            }
        }
        for target in visible(self.graph, self.options) {
            for child in target.children() {
                writeln!(f, "n{child} -> n{} ;", target.id())?;
            }
        }
        writeln!(f, "}}")
    }
}

/// Escapes a label for use inside a DOT double-quoted string.
struct Quoted<'a>(&'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            if matches!(c, '"' | '\\') {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        Ok(())
    }
}
