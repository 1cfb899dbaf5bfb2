//! Plain name listings.

use std::fmt::{self, Display, Formatter};

use super::{RenderOptions, visible};
use crate::graph::{Graph, deep_targets};

/// Every visible target's full name, one per line.
#[derive(Debug, Clone, Copy)]
pub struct TargetList<'a> {
    graph: &'a Graph,
    options: RenderOptions,
}

impl<'a> TargetList<'a> {
    /// Prepare `graph` for listing.
    #[must_use]
    pub const fn new(graph: &'a Graph, options: RenderOptions) -> Self {
        Self { graph, options }
    }
}

impl Display for TargetList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for target in visible(self.graph, self.options) {
            writeln!(f, "{}", target.name())?;
        }
        Ok(())
    }
}

/// Targets that must be remade and wait on nothing else, one per line.
#[derive(Debug, Clone, Copy)]
pub struct DeepList<'a> {
    graph: &'a Graph,
}

impl<'a> DeepList<'a> {
    /// Prepare `graph` for listing.
    #[must_use]
    pub const fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl Display for DeepList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for target in deep_targets(self.graph) {
            writeln!(f, "{}", target.name())?;
        }
        Ok(())
    }
}
