use std::ffi::OsString;
use std::path::PathBuf;

use filters::{DirectoryListing, NamesFile, SkipSources, StaticNames};
use logging::VerbosityConfig;
use walk::{DEFAULT_MAX_DEPTH, SearchOptions};

use crate::PROGRAM_NAME;
use crate::command::clap_command;
use crate::output::OutputFormat;

/// Command-line arguments after clap validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Substring searched for.
    pub term: String,
    /// Load key of the namespace root.
    pub root: String,
    /// `--ignore-case`.
    pub ignore_case: bool,
    /// `--no-skip`.
    pub no_skip: bool,
    /// `--quiet`.
    pub quiet: bool,
    /// `--max-depth`.
    pub max_depth: usize,
    /// `--unique`.
    pub unique: bool,
    /// `--manifest-dir`.
    pub manifest_dir: PathBuf,
    /// `--skip-name` values in order.
    pub skip_names: Vec<String>,
    /// `--skip-dir` values in order.
    pub skip_dirs: Vec<PathBuf>,
    /// `--skip-package-dir` values in order.
    pub skip_package_dirs: Vec<PathBuf>,
    /// `--skip-file` values in order.
    pub skip_files: Vec<PathBuf>,
    /// Selected output format.
    pub format: OutputFormat,
    /// Number of `-v` flags.
    pub verbosity: u8,
    /// `--info` values in order.
    pub info: Vec<String>,
    /// `--debug` values in order.
    pub debug: Vec<String>,
}

impl ParsedArgs {
    /// Search options implied by the flags.
    ///
    /// Progress is streamed in text mode unless `--quiet` is given; JSON output
    /// is always written once the search has finished.
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::new()
            .case_sensitive(!self.ignore_case)
            .skip_filtering(!self.no_skip)
            .emit_progress(!self.quiet && self.format == OutputFormat::Text)
            .max_depth(self.max_depth)
            .unique_nodes(self.unique)
    }

    /// Skip sources in the order they were given, names first.
    #[must_use]
    pub fn skip_sources(&self) -> SkipSources {
        let mut sources = SkipSources::new();
        if !self.skip_names.is_empty() {
            sources.push(StaticNames::new(self.skip_names.iter().cloned()));
        }
        for dir in &self.skip_dirs {
            sources.push(DirectoryListing::new(dir.clone()));
        }
        for dir in &self.skip_package_dirs {
            sources.push(DirectoryListing::new(dir.clone()).skip_distribution_entries(true));
        }
        for file in &self.skip_files {
            sources.push(NamesFile::new(file.clone()));
        }
        sources
    }

    /// Builds the verbosity configuration from `-v`, `--info` and `--debug`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending flag token.
    pub fn verbosity_config(&self) -> Result<VerbosityConfig, String> {
        let mut config = VerbosityConfig::from_verbose_level(self.verbosity);
        for tokens in &self.info {
            config
                .apply_info_flags(tokens)
                .map_err(|error| format!("--info: {error}"))?;
        }
        for tokens in &self.debug {
            config
                .apply_debug_flags(tokens)
                .map_err(|error| format!("--debug: {error}"))?;
        }
        Ok(config)
    }
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
///
/// The first item is the program name, as in [`std::env::args_os`].
///
/// # Errors
///
/// Returns the clap error for invalid usage, and also for `--help` and
/// `--version`, whose rendered text is carried by the error.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let matches = clap_command(PROGRAM_NAME).try_get_matches_from(args)?;

    let strings = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };
    let paths = |id: &str| -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };

    let format = if matches.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    Ok(ParsedArgs {
        term: matches.get_one::<String>("term").cloned().unwrap_or_default(),
        root: matches.get_one::<String>("root").cloned().unwrap_or_default(),
        ignore_case: matches.get_flag("ignore-case"),
        no_skip: matches.get_flag("no-skip"),
        quiet: matches.get_flag("quiet"),
        max_depth: matches
            .get_one::<usize>("max-depth")
            .copied()
            .unwrap_or(DEFAULT_MAX_DEPTH),
        unique: matches.get_flag("unique"),
        manifest_dir: matches
            .get_one::<PathBuf>("manifest-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        skip_names: strings("skip-name"),
        skip_dirs: paths("skip-dir"),
        skip_package_dirs: paths("skip-package-dir"),
        skip_files: paths("skip-file"),
        format,
        verbosity: matches.get_count("verbose"),
        info: strings("info"),
        debug: strings("debug"),
    })
}
