//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and maps it onto the option
//! types the library consumes.

use clap::{Arg, ArgAction, ArgGroup, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::render::{LabelStyle, OutputFormat, RenderOptions};
use crate::trace::ScanOptions;

/// Turn the debug trace of `make -Bnd` into a dependency graph.
///
/// Reads the trace from FILE, or from standard input when no file is given,
/// for example: `make -Bnd | make2graph | dot -Tsvg -o deps.svg`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "make2graph",
    author,
    version,
    disable_version_flag = true,
    group(ArgGroup::new("format").multiple(false))
)]
pub struct Cli {
    /// Write GEXF XML for Gephi instead of DOT.
    #[arg(short = 'x', long = "xml", visible_alias = "gexf", group = "format")]
    pub gexf: bool,

    /// List every target name, one per line.
    #[arg(short, long, group = "format")]
    pub list: bool,

    /// List targets that must be remade and have no prerequisite left to
    /// remake.
    #[arg(short, long, group = "format")]
    pub deep: bool,

    /// Label nodes with the file's base name only.
    #[arg(short, long)]
    pub basename: bool,

    /// Label nodes with the file extension only.
    #[arg(short, long)]
    pub suffix: bool,

    /// Show the synthetic root node standing for the goals given to make.
    #[arg(short, long)]
    pub root: bool,

    /// Enable verbose diagnostic logging on stderr.
    #[arg(long)]
    pub verbose: bool,

    /// Trace file to read instead of standard input.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// The clap command, with `-v` as the short version flag.
    #[must_use]
    pub fn command_with_version() -> clap::Command {
        Self::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
    }

    /// Parse the process arguments, exiting with usage on error.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Parse the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] for unknown flags, conflicting output
    /// formats, more than one input file, or a help or version request.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_with_version().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Selected output format; DOT when no format flag was given.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.gexf {
            OutputFormat::Gexf
        } else if self.list {
            OutputFormat::List
        } else if self.deep {
            OutputFormat::Deep
        } else {
            OutputFormat::Dot
        }
    }

    /// Settings for the trace parser.
    #[must_use]
    pub const fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            show_root: self.root,
        }
    }

    /// Settings for the renderers.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_root: self.root,
            labels: LabelStyle {
                basename: self.basename,
                suffix: self.suffix,
            },
        }
    }
}
