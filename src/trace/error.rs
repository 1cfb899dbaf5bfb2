//! Errors raised while scanning a trace.

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Fatal conditions met while turning a trace into a graph.
///
/// None of these are recoverable: once the trace structure is in doubt the
/// graph built so far cannot be trusted.
#[derive(Debug, Error, Diagnostic)]
pub enum TraceError {
    /// A recognised line does not carry a quoted target name.
    #[error("cannot get target name in \"{line}\" (line {line_number})")]
    #[diagnostic(
        code(make2graph::trace::malformed_line),
        help("target names must be quoted as `name' or 'name'")
    )]
    MalformedLine {
        /// One-based line number.
        line_number: usize,
        /// Offending line with leading whitespace removed.
        line: String,
    },

    /// A closing line names a target other than the one being scanned.
    #[error("expected end of prerequisites for '{expected}' but line {line_number} closes '{found}'")]
    #[diagnostic(
        code(make2graph::trace::unexpected_close),
        help("generate the trace with `make -Bnd` and pass it through unmodified")
    )]
    UnexpectedClose {
        /// One-based line number.
        line_number: usize,
        /// Target whose block is open.
        expected: String,
        /// Target named by the closing line.
        found: String,
    },

    /// Reading the trace failed.
    #[error("failed to read trace after line {line_number}")]
    #[diagnostic(code(make2graph::trace::read))]
    Read {
        /// Number of the last line read successfully.
        line_number: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
