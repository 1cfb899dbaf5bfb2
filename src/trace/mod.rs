//! Reading the debug trace printed by `make -Bnd`.
//!
//! The trace is a flat stream of lines such as
//!
//! ```text
//! Considering target file 'all'.
//!  Considering target file 'main.o'.
//!   Pruning file 'main.c'.
//!  Finished prerequisites of target file 'main.o'.
//!  Must remake target 'main.o'.
//! Finished prerequisites of target file 'all'.
//! ```
//!
//! [`scan`] recovers the nesting of those blocks and records it in a
//! [`Graph`](crate::graph::Graph).

mod directive;
mod error;
mod lines;
mod parser;

pub use directive::{Directive, MissingName, target_name};
pub use error::TraceError;
pub use lines::{Lines, TraceLine};
pub use parser::{ScanOptions, scan};
