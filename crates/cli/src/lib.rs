#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front end of nsgrep:
//!
//! ```text
//! nsgrep [OPTIONS] TERM ROOT
//! ```
//!
//! It loads `ROOT` from a manifest directory, builds the skip set from the
//! `--skip-*` flags, runs [`walk::search_with_progress`] and prints every
//! match as a dotted access path, or as JSON with `--json`.
//!
//! # Design
//!
//! - Arguments are declared with a clap builder and collected into
//!   [`ParsedArgs`], which maps them onto [`walk::SearchOptions`],
//!   [`filters::SkipSources`] and [`logging::VerbosityConfig`].
//! - [`run`] takes the argument iterator and output handles explicitly so the
//!   whole front end can be exercised in-process by tests.
//! - Diagnostics collected by the logging crate are printed to standard error
//!   after the search, one `[category] message` line each.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | [`EXIT_MATCHES`] | at least one match |
//! | [`EXIT_NO_MATCHES`] | the search succeeded without matches |
//! | [`EXIT_USAGE`] | invalid command line |
//! | [`EXIT_LOAD`] | the root could not be loaded |
//! | [`EXIT_SKIP_SET`] | a skip source could not be read |
//! | [`EXIT_WALK`] | the graph was inconsistent during the walk |
//! | [`EXIT_OUTPUT`] | writing the results failed |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["nsgrep", "--version"], &mut stdout, &mut stderr);
//! assert_eq!(status, cli::EXIT_MATCHES);
//! assert!(String::from_utf8_lossy(&stdout).starts_with("nsgrep "));
//! ```

mod arguments;
mod command;
mod output;

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use graph::ManifestLoader;
use logging::{drain_events, init_tracing, trace_load};
use walk::{SearchError, search_with_progress};

pub use arguments::{ParsedArgs, parse_args};
pub use output::OutputFormat;

use output::{StreamingProgress, write_json, write_text};

/// Name used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "nsgrep";

/// The search found at least one match.
pub const EXIT_MATCHES: i32 = 0;
/// The search finished without matches.
pub const EXIT_NO_MATCHES: i32 = 1;
/// The command line was invalid.
pub const EXIT_USAGE: i32 = 2;
/// The namespace root could not be loaded.
pub const EXIT_LOAD: i32 = 3;
/// The skip set could not be built.
pub const EXIT_SKIP_SET: i32 = 4;
/// Resolution or enumeration failed during the walk.
pub const EXIT_WALK: i32 = 5;
/// Results could not be written.
pub const EXIT_OUTPUT: i32 = 6;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code; see the crate documentation for the table.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(&parsed, stdout, stderr),
        Err(error) => report_usage(&error, stdout, stderr),
    }
}

/// Converts a status returned by [`run`] into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

/// Maps a search failure onto its exit code.
#[must_use]
pub const fn exit_code_for(error: &SearchError) -> i32 {
    match error {
        SearchError::Load(_) => EXIT_LOAD,
        SearchError::SkipSet(_) => EXIT_SKIP_SET,
        SearchError::Resolve(_) | SearchError::Enumeration(_) => EXIT_WALK,
    }
}

fn report_usage<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{error}");
            EXIT_MATCHES
        }
        _ => {
            let _ = write!(stderr, "{error}");
            EXIT_USAGE
        }
    }
}

fn execute<Out: Write, Err: Write>(parsed: &ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32 {
    let config = match parsed.verbosity_config() {
        Ok(config) => config,
        Err(message) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
            return EXIT_USAGE;
        }
    };
    init_tracing(config);

    trace_load!(
        "loading '{}' from {}",
        parsed.root,
        parsed.manifest_dir.display()
    );
    let loader = ManifestLoader::new(parsed.manifest_dir.clone());
    let sources = parsed.skip_sources();
    let options = parsed.search_options();

    let mut progress = StreamingProgress::new(stdout);
    let result = search_with_progress(
        &parsed.term,
        &parsed.root,
        &options,
        &loader,
        &sources,
        &mut progress,
    );
    let streamed = progress.finish();

    print_diagnostics(stderr);

    let matches = match result {
        Ok(matches) => matches,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            return exit_code_for(&error);
        }
    };

    let written = match (parsed.format, options.emits_progress()) {
        (OutputFormat::Json, _) => streamed.and_then(|()| write_json(stdout, &matches)),
        (OutputFormat::Text, true) => streamed,
        (OutputFormat::Text, false) => streamed.and_then(|()| write_text(stdout, &matches)),
    };
    if let Err(error) = written {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: failed to write results: {error}");
        return EXIT_OUTPUT;
    }

    if matches.is_empty() {
        EXIT_NO_MATCHES
    } else {
        EXIT_MATCHES
    }
}

fn print_diagnostics<Err: Write>(stderr: &mut Err) {
    for event in drain_events() {
        let _ = writeln!(stderr, "[{}] {}", event.category(), event.message());
    }
}

#[cfg(test)]
mod tests;
