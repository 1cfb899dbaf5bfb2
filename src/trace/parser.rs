//! Recursive-descent scan of a `make -d` trace, flattened onto an explicit
//! frame stack.
//!
//! Each frame is a target whose prerequisite block is open together with the
//! indent level the block was entered at. `make` indents nested blocks, but
//! not consistently across releases, so a line is accepted as belonging to
//! the open frame whenever its indent does not exceed `expected_level + 1`.
//! Deeper lines belong to a block that was never entered and are left alone
//! rather than attached to the wrong parent.

use std::io::BufRead;

use tracing::debug;

use super::directive::{Directive, MissingName};
use super::error::TraceError;
use super::lines::{Lines, TraceLine};
use crate::graph::{Graph, TargetId};

/// Parser settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Keep the makefile's own target when `make` re-enters it.
    ///
    /// Off by default: the self-reference is only interesting when the root
    /// is rendered as well.
    pub show_root: bool,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    target: TargetId,
    expected_level: usize,
}

/// Build a [`Graph`] from the trace readable through `reader`.
///
/// # Errors
///
/// Returns [`TraceError`] when a line lacks a quoted target name, when a
/// block is closed under a different name than it was opened with, or when
/// reading fails.
///
/// # Examples
///
/// ```
/// use make2graph::trace::{ScanOptions, scan};
///
/// let trace = "\
/// Considering target file 'all'.
///  Pruning file 'main.c'.
/// Finished prerequisites of target file 'all'.
/// ";
/// let graph = scan(trace.as_bytes(), ScanOptions::default()).unwrap();
/// let all = graph.find("all").unwrap();
/// let names: Vec<_> = graph.children(all).map(|t| t.name()).collect();
/// assert_eq!(names, ["main.c"]);
/// ```
pub fn scan<R: BufRead>(reader: R, options: ScanOptions) -> Result<Graph, TraceError> {
    let graph = Graph::new();
    let root = Frame {
        target: graph.root(),
        expected_level: 0,
    };
    let scanner = Scanner {
        graph,
        lines: Lines::new(reader),
        stack: vec![root],
        makefile: None,
        options,
    };
    scanner.run()
}

struct Scanner<R> {
    graph: Graph,
    lines: Lines<R>,
    stack: Vec<Frame>,
    makefile: Option<String>,
    options: ScanOptions,
}

impl<R: BufRead> Scanner<R> {
    fn run(mut self) -> Result<Graph, TraceError> {
        while let Some(frame) = self.stack.last().copied() {
            let Some(line) = self.next_line()? else {
                break;
            };
            match parse_directive(&line)? {
                Directive::Considering(name) => self.consider(frame, name, line.indent)?,
                Directive::MustRemake(name) => {
                    debug!(dirty = name, "must remake");
                    let id = self.graph.get_or_create(name);
                    self.graph.mark_dirty(id);
                }
                Directive::Pruning(name) => {
                    debug!(pruned = name, "pruned leaf");
                    let id = self.graph.get_or_create(name);
                    self.graph.add_child(frame.target, id);
                }
                Directive::Finished(name) | Directive::ConsideredAlready(name) => {
                    if within(frame, line.indent) {
                        self.close(frame, name, line.number)?;
                    }
                }
                Directive::ReadingMakefile(name) => {
                    debug!(makefile = name, "reading makefile");
                    self.makefile = Some(name.to_owned());
                }
                Directive::Other => {}
            }
        }
        if self.stack.len() > 1 {
            debug!(open = self.stack.len() - 1, "trace ended inside open blocks");
        }
        Ok(self.graph)
    }

    fn next_line(&mut self) -> Result<Option<TraceLine>, TraceError> {
        self.lines
            .next()
            .transpose()
            .map_err(|source| TraceError::Read {
                line_number: self.lines.line_number(),
                source,
            })
    }

    fn consider(&mut self, frame: Frame, name: &str, indent: usize) -> Result<(), TraceError> {
        if !self.options.show_root && self.makefile.as_deref() == Some(name) {
            debug!(makefile = name, "skipping makefile self-reference");
            return self.skip_block(name);
        }
        let child = self.graph.get_or_create(name);
        if within(frame, indent) {
            self.graph.add_child(frame.target, child);
            debug!(considered = name, depth = self.stack.len(), "entering prerequisites");
            self.stack.push(Frame {
                target: child,
                expected_level: indent + 1,
            });
        } else {
            debug!(
                considered = name,
                indent,
                expected = frame.expected_level,
                "not descending into over-indented block"
            );
        }
        Ok(())
    }

    fn close(&mut self, frame: Frame, name: &str, line_number: usize) -> Result<(), TraceError> {
        let open = self.graph.target(frame.target).name();
        if open != name {
            return Err(TraceError::UnexpectedClose {
                line_number,
                expected: open.to_owned(),
                found: name.to_owned(),
            });
        }
        debug!(closed = name, line = line_number, "leaving prerequisites");
        self.stack.pop();
        Ok(())
    }

    /// Discard lines up to the one closing `name`'s block.
    ///
    /// Only closing lines are inspected; everything else inside the block is
    /// dropped unread.
    fn skip_block(&mut self, name: &str) -> Result<(), TraceError> {
        while let Some(line) = self.next_line()? {
            let closed = Directive::closing(&line.text).map_err(|MissingName| malformed(&line))?;
            if closed == Some(name) {
                return Ok(());
            }
        }
        Ok(())
    }
}

const fn within(frame: Frame, indent: usize) -> bool {
    frame.expected_level + 1 >= indent
}

fn parse_directive(line: &TraceLine) -> Result<Directive<'_>, TraceError> {
    Directive::parse(&line.text).map_err(|MissingName| malformed(line))
}

fn malformed(line: &TraceLine) -> TraceError {
    TraceError::MalformedLine {
        line_number: line.number,
        line: line.text.clone(),
    }
}
