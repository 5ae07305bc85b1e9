//! crates/cli/src/frontend/mod.rs
//!
//! Entry points that parse a command line, execute it, and translate the
//! outcome into an exit status.

mod command_builder;
mod error;
mod execution;
pub mod exit;
mod input;
mod output;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;

pub use command_builder::PROGRAM_NAME;
pub use error::CliError;
pub use input::TrimPolicy;
pub use output::{HexCase, OutputFormat, Rendering};

use command_builder::{clap_command, parse_invocation};
use exit::MAX_EXIT_CODE;

/// Runs `md5check` with the process's standard input.
///
/// `arguments` includes the program name. Output and diagnostics go to the
/// provided handles and the returned value is the exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let stdin = io::stdin();
    let mut locked = stdin.lock();
    run_with_input(arguments, &mut locked, stdout, stderr)
}

/// Same as [`run`] but reads `-` operands and omitted text from `stdin`.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: Read,
    Out: Write,
    Err: Write,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut command = clap_command();
    let matches = match command.try_get_matches_from_mut(args) {
        Ok(matches) => matches,
        Err(error) => return report_clap_error(&error, stdout, stderr),
    };

    let Some(invocation) = parse_invocation(&matches) else {
        let error = command.error(ErrorKind::MissingSubcommand, "a subcommand is required");
        return report_clap_error(&error, stdout, stderr);
    };

    logging::init_tracing(&invocation.verbosity);
    tracing::debug!(target: "md5check", action = ?invocation.action, "starting");

    match execution::execute(&invocation, stdin, stdout, stderr) {
        Ok(status) => status,
        Err(error) => {
            tracing::debug!(target: "md5check", %error, "command failed");
            // Nothing more can be reported if stderr is gone as well.
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            error.exit_code()
        }
    }
}

fn report_clap_error<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    let rendered = error.render();
    let written = if error.use_stderr() {
        write!(stderr, "{rendered}")
    } else {
        write!(stdout, "{rendered}")
    };
    match written {
        Ok(()) => error.exit_code(),
        Err(_) if error.use_stderr() => error.exit_code(),
        Err(_) => exit::OUTPUT_FAILURE,
    }
}

/// Converts a status from [`run`] into a [`std::process::ExitCode`],
/// clamping it to the range the platform can represent.
#[must_use]
pub fn exit_code_from(status: i32) -> ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    ExitCode::from(clamped as u8)
}
