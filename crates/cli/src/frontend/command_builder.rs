//! crates/cli/src/frontend/command_builder.rs
//!
//! The clap command definition and its translation into an [`Invocation`].

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command as ClapCommand, value_parser};
use logging::VerbosityConfig;

use super::input::TrimPolicy;
use super::output::{HexCase, OutputFormat, Rendering};

/// Program name used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "md5check";

/// Where the reference digest for `verify` comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ReferenceSource {
    /// Given on the command line with `--expected`.
    Inline(String),
    /// Read from a file with `--hash-file`.
    HashFile(PathBuf),
}

/// The selected subcommand and its operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Text {
        text: Option<String>,
        trim: TrimPolicy,
    },
    File {
        paths: Vec<PathBuf>,
        trim: TrimPolicy,
    },
    Verify {
        path: PathBuf,
        reference: ReferenceSource,
        trim: TrimPolicy,
        strict_case: bool,
    },
}

/// Everything parsed from one command line.
#[derive(Clone, Debug)]
pub(crate) struct Invocation {
    pub(crate) action: Action,
    pub(crate) rendering: Rendering,
    pub(crate) verbosity: VerbosityConfig,
}

fn no_trim_arg() -> Arg {
    Arg::new("no-trim")
        .long("no-trim")
        .help("Hash file contents exactly as stored instead of stripping surrounding whitespace.")
        .action(ArgAction::SetTrue)
}

pub(crate) fn clap_command() -> ClapCommand {
    ClapCommand::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute and verify MD5 digests of text and files.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; may be supplied multiple times.")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors on stderr.")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit one JSON object per result line.")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("upper")
                .long("upper")
                .help("Print digests in uppercase hexadecimal.")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("text")
                .about("Hash TEXT, or standard input when TEXT is omitted.")
                .arg(
                    Arg::new("text")
                        .value_name("TEXT")
                        .help("Text to hash as UTF-8.")
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("trim")
                        .long("trim")
                        .help("Strip leading and trailing whitespace before hashing.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("file")
                .about("Hash the contents of each PATH ('-' reads standard input).")
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(no_trim_arg()),
        )
        .subcommand(
            ClapCommand::new("verify")
                .about("Check PATH against a reference digest.")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("expected")
                        .long("expected")
                        .value_name("HEX")
                        .help("Reference digest as 32 hexadecimal characters.")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("hash-file")
                        .long("hash-file")
                        .value_name("FILE")
                        .help("Read the reference digest from FILE (first word, md5sum layout accepted).")
                        .value_parser(value_parser!(PathBuf)),
                )
                .group(
                    ArgGroup::new("reference")
                        .args(["expected", "hash-file"])
                        .required(true),
                )
                .arg(no_trim_arg())
                .arg(
                    Arg::new("strict-case")
                        .long("strict-case")
                        .help("Require the reference to be spelled in lowercase.")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn verbosity_from(matches: &ArgMatches) -> VerbosityConfig {
    if matches.get_flag("quiet") {
        VerbosityConfig::quiet()
    } else {
        VerbosityConfig::from_verbose_level(matches.get_count("verbose"))
    }
}

fn rendering_from(matches: &ArgMatches) -> Rendering {
    Rendering {
        format: if matches.get_flag("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        },
        case: if matches.get_flag("upper") {
            HexCase::Upper
        } else {
            HexCase::Lower
        },
    }
}

fn reference_from(matches: &ArgMatches) -> Option<ReferenceSource> {
    if let Some(expected) = matches.get_one::<String>("expected") {
        return Some(ReferenceSource::Inline(expected.clone()));
    }
    matches
        .get_one::<PathBuf>("hash-file")
        .map(|path| ReferenceSource::HashFile(path.clone()))
}

/// Translates parsed arguments; `None` when no subcommand was selected.
pub(crate) fn parse_invocation(matches: &ArgMatches) -> Option<Invocation> {
    let (name, sub) = matches.subcommand()?;
    let action = match name {
        "text" => Action::Text {
            text: sub.get_one::<String>("text").cloned(),
            trim: TrimPolicy::from_flag(sub.get_flag("trim")),
        },
        "file" => Action::File {
            paths: sub
                .get_many::<PathBuf>("paths")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            trim: TrimPolicy::from_flag(!sub.get_flag("no-trim")),
        },
        "verify" => Action::Verify {
            path: sub.get_one::<PathBuf>("path")?.clone(),
            reference: reference_from(sub)?,
            trim: TrimPolicy::from_flag(!sub.get_flag("no-trim")),
            strict_case: sub.get_flag("strict-case"),
        },
        _ => return None,
    };

    Some(Invocation {
        action,
        rendering: rendering_from(sub),
        verbosity: verbosity_from(sub),
    })
}
