use std::path::PathBuf;

use clap::{Arg, ArgAction, Command as ClapCommand, value_parser};

const MAX_DEPTH_HELP: &str = "Number of descents allowed below the root [default: 7].";

pub(crate) fn clap_command(program_name: &'static str) -> ClapCommand {
    let command = ClapCommand::new(program_name)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search the member graph of a namespace for names containing TERM.")
        .arg_required_else_help(true);
    let command = search_arguments(command);
    let command = skip_arguments(command);
    diagnostic_arguments(command)
}

fn search_arguments(command: ClapCommand) -> ClapCommand {
    command
        .arg(
            Arg::new("term")
                .value_name("TERM")
                .help("Substring to look for in member names.")
                .required(true),
        )
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .help("Load key of the namespace root to search.")
                .required(true),
        )
        .arg(
            Arg::new("ignore-case")
                .long("ignore-case")
                .short('i')
                .help("Match TERM regardless of case.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .short('d')
                .value_name("N")
                .help(MAX_DEPTH_HELP)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("unique")
                .long("unique")
                .help("Enter each namespace at most once, even when it is linked from several places.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("manifest-dir")
                .long("manifest-dir")
                .short('m')
                .value_name("DIR")
                .help("Directory holding ROOT.json manifests.")
                .default_value(".")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Print matches only once the search has finished.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print matches as a JSON array of name arrays.")
                .action(ArgAction::SetTrue),
        )
}

fn skip_arguments(command: ClapCommand) -> ClapCommand {
    command
        .arg(
            Arg::new("no-skip")
                .long("no-skip")
                .help("Do not exclude any names from the search.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("skip-name")
                .long("skip-name")
                .value_name("NAME")
                .help("Exclude members called NAME (repeatable).")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("skip-dir")
                .long("skip-dir")
                .value_name("DIR")
                .help("Exclude the names of every entry in DIR (repeatable).")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("skip-package-dir")
                .long("skip-package-dir")
                .value_name("DIR")
                .help("Like --skip-dir, ignoring distribution metadata entries (repeatable).")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("skip-file")
                .long("skip-file")
                .value_name("FILE")
                .help("Exclude the names listed in FILE, one per line (repeatable).")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf)),
        )
}

fn diagnostic_arguments(command: ClapCommand) -> ClapCommand {
    command
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output (repeatable).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Fine-grained informational output: match, skip, stats, all.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Fine-grained debug output: filter, load, resolve, walk, all.")
                .action(ArgAction::Append),
        )
}
