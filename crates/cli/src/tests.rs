use super::*;
use std::path::PathBuf;
use walk::DEFAULT_MAX_DEPTH;

fn parse(args: &[&str]) -> ParsedArgs {
    parse_args(args.iter().copied()).expect("arguments parse")
}

#[test]
fn positional_arguments_are_required() {
    let error = parse_args(["nsgrep", "token"]).expect_err("root is missing");
    assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn defaults_follow_search_defaults() {
    let parsed = parse(&["nsgrep", "token", "spacy"]);
    assert_eq!(parsed.term, "token");
    assert_eq!(parsed.root, "spacy");
    assert_eq!(parsed.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(parsed.manifest_dir, PathBuf::from("."));
    assert_eq!(parsed.format, OutputFormat::Text);
    assert_eq!(parsed.search_options(), walk::SearchOptions::new());
    assert!(parsed.skip_sources().is_empty());
}

#[test]
fn max_depth_help_names_the_default() {
    let help = command::clap_command(PROGRAM_NAME).render_help().to_string();
    assert!(help.contains(&format!("[default: {DEFAULT_MAX_DEPTH}]")));
}

#[test]
fn flags_map_onto_search_options() {
    let parsed = parse(&[
        "nsgrep", "-i", "--no-skip", "-q", "-d", "3", "--unique", "tok", "lib",
    ]);
    let options = parsed.search_options();
    assert!(!options.is_case_sensitive());
    assert!(!options.skips());
    assert!(!options.emits_progress());
    assert_eq!(options.depth_limit(), 3);
    assert!(options.tracks_identity());
}

#[test]
fn json_output_disables_streaming() {
    let parsed = parse(&["nsgrep", "--json", "tok", "lib"]);
    assert_eq!(parsed.format, OutputFormat::Json);
    assert!(!parsed.search_options().emits_progress());
}

#[test]
fn non_numeric_depth_is_rejected() {
    let error = parse_args(["nsgrep", "-d", "deep", "tok", "lib"]).expect_err("bad depth");
    assert_eq!(error.kind(), ErrorKind::ValueValidation);
}

#[test]
fn skip_flags_accumulate_in_order() {
    let parsed = parse(&[
        "nsgrep",
        "--skip-name",
        "os",
        "--skip-name",
        "sys",
        "--skip-dir",
        "/usr/lib/python3",
        "--skip-package-dir",
        "/site",
        "--skip-file",
        "builtins.txt",
        "tok",
        "lib",
    ]);
    assert_eq!(parsed.skip_names, ["os", "sys"]);
    assert_eq!(parsed.skip_dirs, [PathBuf::from("/usr/lib/python3")]);
    assert_eq!(parsed.skip_package_dirs, [PathBuf::from("/site")]);
    assert_eq!(parsed.skip_files, [PathBuf::from("builtins.txt")]);
    assert_eq!(parsed.skip_sources().len(), 4);
}

#[test]
fn verbosity_combines_count_and_flag_tokens() {
    let parsed = parse(&["nsgrep", "-v", "--debug", "walk2,resolve", "tok", "lib"]);
    let config = parsed.verbosity_config().expect("valid flags");
    assert_eq!(config.info.stats, 1);
    assert_eq!(config.debug.walk, 2);
    assert_eq!(config.debug.resolve, 1);
}

#[test]
fn unknown_flag_token_is_reported() {
    let parsed = parse(&["nsgrep", "--info", "bogus", "tok", "lib"]);
    let message = parsed.verbosity_config().expect_err("unknown token");
    assert!(message.starts_with("--info: "), "{message}");
}

#[test]
fn help_goes_to_stdout() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = run(["nsgrep", "--help"], &mut stdout, &mut stderr);
    assert_eq!(status, EXIT_MATCHES);
    let help = String::from_utf8(stdout).expect("utf8");
    assert!(help.contains("--skip-package-dir"));
    assert!(stderr.is_empty());
}

#[test]
fn usage_errors_go_to_stderr() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = run(["nsgrep", "--frobnicate", "tok", "lib"], &mut stdout, &mut stderr);
    assert_eq!(status, EXIT_USAGE);
    assert!(stdout.is_empty());
    assert!(!stderr.is_empty());
}

#[test]
fn exit_code_from_clamps_out_of_range_values() {
    assert_eq!(exit_code_from(-1), std::process::ExitCode::from(0));
    assert_eq!(exit_code_from(300), std::process::ExitCode::from(255));
    assert_eq!(exit_code_from(EXIT_LOAD), std::process::ExitCode::from(3));
}
