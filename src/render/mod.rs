//! Output formats for a finished [`Graph`].
//!
//! Every renderer is a thin [`Display`](std::fmt::Display) wrapper over a
//! borrowed graph. Targets are written in name order and edges point from a
//! prerequisite to the target that needs it, so the output is deterministic
//! for snapshot tests.

mod dot;
mod gexf;
mod list;

use std::io::{self, Write};

use crate::graph::{Graph, Target};

pub use dot::Dot;
pub use gexf::Gexf;
pub use list::{DeepList, TargetList};

/// Which representation to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Graphviz DOT.
    #[default]
    Dot,
    /// GEXF 1.2 XML for Gephi.
    Gexf,
    /// Every target name, one per line.
    List,
    /// Names of targets that can be rebuilt immediately, one per line.
    Deep,
}

/// How node labels are shortened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStyle {
    /// Drop everything up to the last `/`.
    pub basename: bool,
    /// Keep only what follows the last `.`.
    pub suffix: bool,
}

impl LabelStyle {
    /// Shorten `name` according to this style.
    ///
    /// The basename is taken first, so combining both flags shows the
    /// extension of the file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use make2graph::render::LabelStyle;
    ///
    /// let both = LabelStyle { basename: true, suffix: true };
    /// assert_eq!(both.apply("src/v1.2/main.o"), "o");
    /// let base = LabelStyle { basename: true, suffix: false };
    /// assert_eq!(base.apply("src/main.o"), "main.o");
    /// ```
    #[must_use]
    pub fn apply(self, name: &str) -> &str {
        let mut label = name;
        if self.basename {
            label = label.rsplit_once('/').map_or(label, |(_, base)| base);
        }
        if self.suffix {
            label = label.rsplit_once('.').map_or(label, |(_, ext)| ext);
        }
        label
    }
}

/// Display settings shared by all renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include the synthetic `<ROOT>` node and its edges.
    pub show_root: bool,
    /// Label shortening for graph formats.
    pub labels: LabelStyle,
}

/// Targets to draw under `options`, in name order.
fn visible(graph: &Graph, options: RenderOptions) -> impl Iterator<Item = &Target> + '_ {
    graph
        .targets()
        .filter(move |target| options.show_root || !graph.is_root(target.id()))
}

/// Write `graph` to `out` in the requested `format`.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn render<W: Write>(
    graph: &Graph,
    format: OutputFormat,
    options: RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Dot => write!(out, "{}", Dot::new(graph, options)),
        OutputFormat::Gexf => write!(out, "{}", Gexf::new(graph, options)),
        OutputFormat::List => write!(out, "{}", TargetList::new(graph, options)),
        OutputFormat::Deep => write!(out, "{}", DeepList::new(graph)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::full(false, false, "lib/util.test.o", "lib/util.test.o")]
    #[case::basename(true, false, "lib/util.test.o", "util.test.o")]
    #[case::suffix(false, true, "lib/util.test.o", "o")]
    #[case::basename_without_slash(true, false, "util.o", "util.o")]
    #[case::suffix_without_dot(false, true, "lib/all", "lib/all")]
    #[case::dot_in_directory_only(true, true, "v1.2/all", "all")]
    fn label_shortening(
        #[case] basename: bool,
        #[case] suffix: bool,
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(LabelStyle { basename, suffix }.apply(name), expected);
    }

    #[test]
    fn root_is_hidden_unless_requested() {
        let mut graph = Graph::new();
        graph.get_or_create("all");
        let hidden: Vec<_> = visible(&graph, RenderOptions::default())
            .map(Target::name)
            .collect();
        assert_eq!(hidden, ["all"]);
        let shown = RenderOptions {
            show_root: true,
            ..RenderOptions::default()
        };
        assert_eq!(visible(&graph, shown).count(), 2);
    }
}
