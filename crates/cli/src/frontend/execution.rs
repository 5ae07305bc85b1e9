//! crates/cli/src/frontend/execution.rs
//!
//! Runs a parsed [`Invocation`] against the digest engine.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use checksums::Md5Digest;

use super::command_builder::{Action, Invocation, PROGRAM_NAME, ReferenceSource};
use super::error::CliError;
use super::exit;
use super::input::{self, STDIN_OPERAND, TrimPolicy};
use super::output::Rendering;

/// Executes `invocation`, returning the exit status on completion.
pub(crate) fn execute<In, Out, Err>(
    invocation: &Invocation,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<i32, CliError>
where
    In: Read,
    Out: Write,
    Err: Write,
{
    let rendering = invocation.rendering;
    match &invocation.action {
        Action::Text { text, trim } => hash_text(text.as_deref(), *trim, rendering, stdin, stdout),
        Action::File { paths, trim } => {
            hash_files(paths, *trim, rendering, stdin, stdout, stderr)
        }
        Action::Verify {
            path,
            reference,
            trim,
            strict_case,
        } => verify_file(path, reference, *trim, *strict_case, rendering, stdin, stdout),
    }
}

fn hash_text<In: Read, Out: Write>(
    text: Option<&str>,
    trim: TrimPolicy,
    rendering: Rendering,
    stdin: &mut In,
    stdout: &mut Out,
) -> Result<i32, CliError> {
    let owned;
    let data = match text {
        Some(text) => text.as_bytes(),
        None => {
            owned = input::read_stdin(stdin)?;
            owned.as_slice()
        }
    };

    let digest = checksums::digest(input::prepare(data, trim));
    rendering.write_text_digest(stdout, &digest)?;
    Ok(exit::SUCCESS)
}

fn hash_files<In, Out, Err>(
    paths: &[PathBuf],
    trim: TrimPolicy,
    rendering: Rendering,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<i32, CliError>
where
    In: Read,
    Out: Write,
    Err: Write,
{
    let mut status = exit::SUCCESS;
    let mut readable: Vec<(&Path, Vec<u8>)> = Vec::with_capacity(paths.len());

    for path in paths {
        match input::read_operand(path, stdin) {
            Ok(data) => readable.push((path.as_path(), data)),
            Err(error) => {
                writeln!(stderr, "{PROGRAM_NAME}: {error}")?;
                status = error.exit_code();
            }
        }
    }

    let prepared: Vec<&[u8]> = readable
        .iter()
        .map(|(_, data)| input::prepare(data, trim))
        .collect();
    tracing::debug!(
        target: "md5check::input",
        count = prepared.len(),
        parallel = checksums::parallel_batches_enabled(),
        "digesting batch"
    );
    let digests = checksums::digest_batch(&prepared);

    for ((path, _), digest) in readable.iter().zip(&digests) {
        rendering.write_file_digest(stdout, path, digest)?;
    }
    Ok(status)
}

/// Extracts the reference digest text: surrounding whitespace is dropped and
/// only the first word is kept, so `md5sum` output files are accepted.
fn reference_text<In: Read>(
    reference: &ReferenceSource,
    stdin: &mut In,
) -> Result<String, CliError> {
    let (raw, origin) = match reference {
        ReferenceSource::Inline(text) => (text.clone(), "--expected".to_owned()),
        ReferenceSource::HashFile(path) => {
            let data = input::read_operand(path, stdin)?;
            (
                String::from_utf8_lossy(&data).into_owned(),
                path.display().to_string(),
            )
        }
    };

    raw.split_whitespace()
        .next()
        .map(str::to_owned)
        .ok_or(CliError::MissingReference { origin })
}

fn verify_file<In: Read, Out: Write>(
    path: &Path,
    reference: &ReferenceSource,
    trim: TrimPolicy,
    strict_case: bool,
    rendering: Rendering,
    stdin: &mut In,
    stdout: &mut Out,
) -> Result<i32, CliError> {
    if let ReferenceSource::HashFile(hash_file) = reference
        && path.as_os_str() == STDIN_OPERAND
        && hash_file.as_os_str() == STDIN_OPERAND
    {
        return Err(CliError::StdinReused);
    }

    let data = input::read_operand(path, stdin)?;
    let computed = checksums::digest(input::prepare(&data, trim));

    let expected_text = reference_text(reference, stdin)?;
    let expected: Md5Digest =
        expected_text
            .parse()
            .map_err(|source| CliError::MalformedReference {
                reference: expected_text.clone(),
                source,
            })?;

    let matches = if strict_case {
        computed.to_hex() == expected_text
    } else {
        computed == expected
    };
    tracing::info!(
        target: "md5check::verify",
        path = %path.display(),
        computed = %computed,
        expected = %expected_text,
        matches,
        "verified"
    );

    rendering.write_verdict(stdout, matches, &computed, &expected_text)?;
    Ok(if matches {
        exit::SUCCESS
    } else {
        exit::MISMATCH
    })
}
