//! Classification of targets that can be rebuilt straight away.
//!
//! A target is independently buildable when it must be remade and nothing
//! reachable beneath it must be remade. These are the targets a build could
//! start on immediately.

use super::{Graph, Target, TargetId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    Unseen,
    Visiting,
    Done(bool),
}

/// Memoised "is any target strictly below this one dirty" lookup.
///
/// Shared sub-graphs are evaluated once, and the walk uses an explicit stack
/// so deeply nested traces do not exhaust the call stack.
struct DirtyBelow<'a> {
    graph: &'a Graph,
    states: Vec<Visit>,
}

impl<'a> DirtyBelow<'a> {
    fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            states: vec![Visit::Unseen; graph.len()],
        }
    }

    fn state(&self, id: TargetId) -> Visit {
        self.states
            .get(id.index())
            .copied()
            .unwrap_or(Visit::Done(false))
    }

    fn set(&mut self, id: TargetId, visit: Visit) {
        if let Some(state) = self.states.get_mut(id.index()) {
            *state = visit;
        }
    }

    fn dirty_at_or_below(&self, id: TargetId) -> bool {
        self.graph.target(id).must_remake || matches!(self.state(id), Visit::Done(true))
    }

    fn get(&mut self, start: TargetId) -> bool {
        let mut stack = vec![(start, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                let dirty = self
                    .graph
                    .target(id)
                    .children
                    .iter()
                    .any(|child| self.dirty_at_or_below(*child));
                self.set(id, Visit::Done(dirty));
                continue;
            }
            if self.state(id) != Visit::Unseen {
                continue;
            }
            self.set(id, Visit::Visiting);
            stack.push((id, true));
            for child in &self.graph.target(id).children {
                if self.state(*child) == Visit::Unseen {
                    stack.push((*child, false));
                }
            }
        }
        matches!(self.state(start), Visit::Done(true))
    }
}

/// Decide whether `id` is independently buildable.
///
/// At `depth == 0` this answers the question for `id` itself: it must be
/// dirty with no dirty target anywhere beneath it. At any deeper level it
/// answers whether there is dirty work at or below `id`, which is what an
/// ancestor's decision depends on.
///
/// # Examples
///
/// ```
/// use make2graph::graph::{Graph, is_independently_buildable};
///
/// let mut graph = Graph::new();
/// let all = graph.get_or_create("all");
/// let obj = graph.get_or_create("a.o");
/// graph.add_child(all, obj);
/// graph.mark_dirty(all);
/// graph.mark_dirty(obj);
///
/// assert!(is_independently_buildable(&graph, obj, 0));
/// assert!(!is_independently_buildable(&graph, all, 0));
/// assert!(is_independently_buildable(&graph, all, 1));
/// ```
#[must_use]
pub fn is_independently_buildable(graph: &Graph, id: TargetId, depth: usize) -> bool {
    classify(graph, &mut DirtyBelow::new(graph), id, depth)
}

fn classify(graph: &Graph, below: &mut DirtyBelow<'_>, id: TargetId, depth: usize) -> bool {
    let dirty = graph.target(id).must_remake;
    let any_dirty_descendant = below.get(id);
    if depth == 0 {
        dirty && !any_dirty_descendant
    } else {
        dirty || any_dirty_descendant
    }
}

/// Every independently buildable target, in name order.
#[must_use]
pub fn deep_targets(graph: &Graph) -> Vec<&Target> {
    let mut below = DirtyBelow::new(graph);
    graph
        .targets()
        .filter(|target| classify(graph, &mut below, target.id, 0))
        .collect()
}
