//! Target graph recovered from a `make` debug trace.
//!
//! The graph is an arena of [`Target`] records addressed by [`TargetId`].
//! A name-keyed registry guarantees at most one target per name, so a target
//! mentioned beneath several parents is shared rather than duplicated. Child
//! lists hold identifiers into the arena and stay sorted by target name.
//!
//! # Examples
//!
//! ```
//! use make2graph::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let all = graph.get_or_create("all");
//! let obj = graph.get_or_create("a.o");
//! graph.add_child(graph.root(), all);
//! graph.add_child(all, obj);
//! graph.mark_dirty(obj);
//!
//! assert_eq!(graph.get_or_create("a.o"), obj);
//! assert_eq!(graph.target(all).children(), &[obj]);
//! assert!(graph.target(obj).must_remake());
//! ```

mod deep;

pub use deep::{deep_targets, is_independently_buildable};

use std::collections::BTreeMap;
use std::fmt;

/// Reserved name of the synthetic root target.
pub const ROOT_NAME: &str = "<ROOT>";

/// Stable identifier of a [`Target`].
///
/// Identifiers are assigned from 1 in creation order and never reused; the
/// root is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(usize);

impl TargetId {
    /// Return the numeric identifier.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    const fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named build target and its scanned prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    id: TargetId,
    name: String,
    children: Vec<TargetId>,
    must_remake: bool,
}

impl Target {
    /// Identifier assigned when the target was first mentioned.
    #[must_use]
    pub const fn id(&self) -> TargetId {
        self.id
    }

    /// Target specifier as printed by `make`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prerequisites scanned beneath this target, sorted by name.
    #[must_use]
    pub fn children(&self) -> &[TargetId] {
        &self.children
    }

    /// Whether `make` reported that this target must be remade.
    #[must_use]
    pub const fn must_remake(&self) -> bool {
        self.must_remake
    }
}

/// Arena of targets plus the name registry and the root.
#[derive(Debug, Clone)]
pub struct Graph {
    targets: Vec<Target>,
    by_name: BTreeMap<String, TargetId>,
    root: TargetId,
}

impl Graph {
    /// Create a graph holding only the `<ROOT>` target.
    #[must_use]
    pub fn new() -> Self {
        let mut graph = Self {
            targets: Vec::new(),
            by_name: BTreeMap::new(),
            root: TargetId(1),
        };
        graph.root = graph.get_or_create(ROOT_NAME);
        graph
    }

    /// The synthetic root standing for the goals passed to `make`.
    #[must_use]
    pub const fn root(&self) -> TargetId {
        self.root
    }

    /// Whether `id` is the root target.
    #[must_use]
    pub fn is_root(&self, id: TargetId) -> bool {
        id == self.root
    }

    /// Number of targets, root included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always `false`: the root exists from construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Borrow the target behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different, larger graph.
    #[must_use]
    pub fn target(&self, id: TargetId) -> &Target {
        #[expect(
            clippy::indexing_slicing,
            reason = "ids are minted by `get_or_create` and targets are never removed"
        )]
        &self.targets[id.index()]
    }

    /// Look a target up by name without creating it.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<TargetId> {
        self.by_name.get(name).copied()
    }

    /// Return the target called `name`, creating it on first mention.
    pub fn get_or_create(&mut self, name: &str) -> TargetId {
        if let Some(id) = self.find(name) {
            return id;
        }
        let id = TargetId(self.targets.len() + 1);
        self.targets.push(Target {
            id,
            name: name.to_owned(),
            children: Vec::new(),
            must_remake: false,
        });
        self.by_name.insert(name.to_owned(), id);
        id
    }

    /// Record `child` as a prerequisite of `parent`.
    ///
    /// Adding an edge that already exists, or one whose `parent` is not in
    /// this graph, is a no-op.
    pub fn add_child(&mut self, parent: TargetId, child: TargetId) {
        let name = self.target(child).name.as_str();
        let Some(siblings) = self.targets.get(parent.index()).map(|p| &p.children) else {
            return;
        };
        let slot = siblings.binary_search_by(|id| self.target(*id).name.as_str().cmp(name));
        if let (Err(pos), Some(target)) = (slot, self.targets.get_mut(parent.index())) {
            target.children.insert(pos, child);
        }
    }

    /// Flag `id` as needing a rebuild. The flag is never cleared.
    pub fn mark_dirty(&mut self, id: TargetId) {
        if let Some(target) = self.targets.get_mut(id.index()) {
            target.must_remake = true;
        }
    }

    /// All targets, root included, in name order.
    pub fn targets(&self) -> impl Iterator<Item = &Target> + '_ {
        self.by_name.values().map(|id| self.target(*id))
    }

    /// Prerequisites of `id` in name order.
    pub fn children(&self, id: TargetId) -> impl Iterator<Item = &Target> + '_ {
        self.target(id).children.iter().map(|c| self.target(*c))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
