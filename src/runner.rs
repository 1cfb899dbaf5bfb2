//! CLI execution logic.
//!
//! This module keeps `main` minimal: it reads the trace named by the
//! [`Cli`], builds the graph and writes it out in the selected format. The
//! graph is rendered only once the whole trace has been scanned, so a bad
//! trace never produces partial output.

use crate::cli::Cli;
use crate::graph::Graph;
use crate::render;
use crate::trace::{self, TraceError};
use anyhow::{Context, Result};
use miette::Diagnostic;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use tracing::{debug, error, info};

/// Execute the parsed [`Cli`], writing the rendered graph to stdout.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the trace is malformed,
/// or writing the output fails.
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_with(cli, &mut out)
}

/// Execute the parsed [`Cli`], writing the rendered graph to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let graph = load_graph(cli)?;
    render::render(&graph, cli.output_format(), cli.render_options(), out)
        .context("writing graph")?;
    out.flush().context("flushing output")?;
    Ok(())
}

/// Scan the trace selected by `cli` into a [`Graph`].
///
/// # Errors
///
/// Returns an error if the trace file cannot be opened or scanning fails.
pub fn load_graph(cli: &Cli) -> Result<Graph> {
    let options = cli.scan_options();
    let graph = if let Some(path) = &cli.file {
        let file =
            File::open(path).with_context(|| format!("cannot open \"{}\"", path.display()))?;
        info!(path = %path.display(), "reading trace");
        trace::scan(BufReader::new(file), options)
            .with_context(|| format!("scanning {}", path.display()))?
    } else {
        debug!("reading trace from standard input");
        trace::scan(io::stdin().lock(), options).context("scanning standard input")?
    };
    debug!(targets = graph.len() - 1, "trace scanned");
    Ok(graph)
}

/// Log `err` with its full context chain, plus the diagnostic hint when the
/// failure came from the trace itself.
pub fn report(err: &anyhow::Error) {
    error!("{err:#}");
    let diagnostic = err.downcast_ref::<TraceError>();
    if let Some(code) = diagnostic.and_then(|d| d.code()) {
        debug!(%code, "diagnostic code");
    }
    if let Some(help) = diagnostic.and_then(|d| d.help()) {
        error!("help: {help}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn cli_for(file: &NamedTempFile) -> Cli {
        Cli {
            file: Some(file.path().to_path_buf()),
            ..Cli::default()
        }
    }

    fn trace_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write trace");
        file
    }

    #[test]
    fn writes_nothing_when_trace_is_malformed() {
        let file = trace_file("Considering target file 'all'.\nPruning file oops.\n");
        let mut out = Vec::new();
        let err = run_with(&cli_for(&file), &mut out).expect_err("malformed trace");
        assert!(out.is_empty());
        assert!(err.downcast_ref::<TraceError>().is_some());
    }

    #[test]
    fn missing_file_names_the_path() {
        let cli = Cli {
            file: Some("/nonexistent/trace.txt".into()),
            ..Cli::default()
        };
        let err = load_graph(&cli).expect_err("missing file");
        assert!(format!("{err:#}").contains("/nonexistent/trace.txt"));
    }

    #[test]
    fn renders_list_from_file() {
        let file = trace_file(
            "Considering target file 'all'.\n Pruning file 'a.c'.\nFinished prerequisites of target file 'all'.\n",
        );
        let cli = Cli {
            list: true,
            ..cli_for(&file)
        };
        let mut out = Vec::new();
        run_with(&cli, &mut out).expect("run");
        assert_eq!(String::from_utf8(out).expect("utf8"), "a.c\nall\n");
    }
}
