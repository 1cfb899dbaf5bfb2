//! make2graph core library.
//!
//! This library turns the debug trace printed by `make -Bnd` into a
//! dependency graph and renders it as DOT, GEXF or plain target listings.

pub mod cli;
pub mod graph;
pub mod render;
pub mod runner;
pub mod trace;
