use super::*;
use std::io::Cursor;
use std::path::Path;

const ABC: &str = "900150983cd24fb0d6963f7d28e17f72";
const EMPTY: &str = "d41d8cd98f00b204e9800998ecf8427e";

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> (i32, String, String) {
    let mut input = Cursor::new(stdin.to_vec());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut input, &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout utf8"),
        String::from_utf8(stderr).expect("stderr utf8"),
    )
}

fn run_args(args: &[&str]) -> (i32, String, String) {
    run_with_stdin(args, b"")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf8 temp path")
}

#[test]
fn text_operand_prints_digest() {
    let (code, stdout, stderr) = run_args(&[PROGRAM_NAME, "text", "abc"]);
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, format!("{ABC}\n"));
    assert!(stderr.is_empty());
}

#[test]
fn empty_text_operand_hashes_empty_input() {
    let (code, stdout, _) = run_args(&[PROGRAM_NAME, "text", ""]);
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, format!("{EMPTY}\n"));
}

#[test]
fn text_without_operand_reads_stdin_verbatim() {
    let (code, stdout, _) = run_with_stdin(&[PROGRAM_NAME, "text"], b"Hello\n");
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, "09f7e02f1290be211da707a266f153b3\n");
}

#[test]
fn text_trim_flag_strips_stdin_newline() {
    let (_, stdout, _) = run_with_stdin(&[PROGRAM_NAME, "text", "--trim"], b"Hello\n");
    assert_eq!(stdout, "8b1a9953c4611296a827abf8c47804d7\n");
}

#[test]
fn upper_flag_changes_plain_case() {
    let (_, stdout, _) = run_args(&[PROGRAM_NAME, "--upper", "text", "abc"]);
    assert_eq!(stdout, format!("{}\n", ABC.to_ascii_uppercase()));
}

#[test]
fn json_text_output_is_single_object() {
    let (_, stdout, _) = run_args(&[PROGRAM_NAME, "--json", "text", "abc"]);
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).expect("json");
    assert_eq!(value["hash"], ABC);
    assert!(value.get("path").is_none());
}

#[test]
fn file_digests_are_trimmed_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "abc\n").expect("write");

    let (code, stdout, _) = run_args(&[PROGRAM_NAME, "file", path_arg(&path)]);
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, format!("{ABC}  {}\n", path.display()));

    let (_, stdout, _) = run_args(&[PROGRAM_NAME, "file", "--no-trim", path_arg(&path)]);
    assert!(stdout.starts_with("0bee89b07a248e27c83fc3d5951213c1  "));
}

#[test]
fn file_operands_keep_command_line_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("first");
    let second = dir.path().join("second");
    std::fs::write(&first, "abc").expect("write");
    std::fs::write(&second, "").expect("write");

    let (code, stdout, _) = run_args(&[
        PROGRAM_NAME,
        "file",
        path_arg(&second),
        path_arg(&first),
    ]);
    assert_eq!(code, exit::SUCCESS);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(EMPTY));
    assert!(lines[1].starts_with(ABC));
}

#[test]
fn dash_file_operand_reads_stdin() {
    let (code, stdout, _) = run_with_stdin(&[PROGRAM_NAME, "file", "-"], b"  abc  ");
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, format!("{ABC}  -\n"));
}

#[test]
fn unreadable_file_is_reported_and_others_still_hashed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let present = dir.path().join("present");
    let missing = dir.path().join("missing");
    std::fs::write(&present, "abc").expect("write");

    let (code, stdout, stderr) = run_args(&[
        PROGRAM_NAME,
        "file",
        path_arg(&missing),
        path_arg(&present),
    ]);
    assert_eq!(code, exit::INPUT_FAILURE);
    assert_eq!(stdout, format!("{ABC}  {}\n", present.display()));
    assert!(stderr.starts_with("md5check: failed to read"));
    assert!(stderr.contains("missing"));
}

#[test]
fn verify_reports_match() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "abc\n").expect("write");

    let (code, stdout, _) = run_args(&[
        PROGRAM_NAME,
        "verify",
        path_arg(&path),
        "--expected",
        ABC,
    ]);
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, "File checksum matches!\n");
}

#[test]
fn verify_reports_corruption() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "abd").expect("write");

    let (code, stdout, _) = run_args(&[
        PROGRAM_NAME,
        "verify",
        path_arg(&path),
        "--expected",
        ABC,
    ]);
    assert_eq!(code, exit::MISMATCH);
    assert_eq!(stdout, "File content is corrupted!\n");
}

#[test]
fn verify_case_sensitivity_is_opt_in() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "abc").expect("write");
    let upper = ABC.to_ascii_uppercase();

    let (code, _, _) = run_args(&[
        PROGRAM_NAME,
        "verify",
        path_arg(&path),
        "--expected",
        &upper,
    ]);
    assert_eq!(code, exit::SUCCESS);

    let (code, stdout, _) = run_args(&[
        PROGRAM_NAME,
        "verify",
        path_arg(&path),
        "--expected",
        &upper,
        "--strict-case",
    ]);
    assert_eq!(code, exit::MISMATCH);
    assert_eq!(stdout, "File content is corrupted!\n");
}

#[test]
fn verify_reads_hash_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    let hash_file = dir.path().join("data.txt.md5");
    std::fs::write(&path, "abc").expect("write");
    std::fs::write(&hash_file, format!("{ABC}  data.txt\n")).expect("write");

    let (code, stdout, _) = run_args(&[
        PROGRAM_NAME,
        "verify",
        path_arg(&path),
        "--hash-file",
        path_arg(&hash_file),
    ]);
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, "File checksum matches!\n");
}

#[test]
fn verify_rejects_malformed_reference() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "abc").expect("write");

    let (code, stdout, stderr) = run_args(&[
        PROGRAM_NAME,
        "verify",
        path_arg(&path),
        "--expected",
        "not-a-digest",
    ]);
    assert_eq!(code, exit::INPUT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("malformed"));
}

#[test]
fn verify_json_verdict() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "abc").expect("write");

    let (code, stdout, _) = run_args(&[
        PROGRAM_NAME,
        "verify",
        "--json",
        path_arg(&path),
        "--expected",
        EMPTY,
    ]);
    assert_eq!(code, exit::MISMATCH);
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).expect("json");
    assert_eq!(value["matches"], false);
    assert_eq!(value["computed"], ABC);
    assert_eq!(value["expected"], EMPTY);
}

#[test]
fn missing_subcommand_is_usage_error() {
    let (code, stdout, stderr) = run_args(&[PROGRAM_NAME]);
    assert_eq!(code, exit::USAGE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let (code, _, stderr) = run_args(&[PROGRAM_NAME, "text", "abc", "--bogus"]);
    assert_eq!(code, exit::USAGE);
    assert!(stderr.contains("--bogus"));
}

#[test]
fn help_goes_to_stdout() {
    let (code, stdout, stderr) = run_args(&[PROGRAM_NAME, "--help"]);
    assert_eq!(code, exit::SUCCESS);
    assert!(stdout.contains("verify"));
    assert!(stderr.is_empty());
}

#[test]
fn version_reports_package_version() {
    let (code, stdout, _) = run_args(&[PROGRAM_NAME, "--version"]);
    assert_eq!(code, exit::SUCCESS);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn empty_argument_list_uses_program_name() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run_with_input(
        Vec::<OsString>::new(),
        &mut Cursor::new(Vec::new()),
        &mut stdout,
        &mut stderr,
    );
    assert_eq!(code, exit::USAGE);
    assert!(String::from_utf8_lossy(&stderr).contains(PROGRAM_NAME));
}

#[test]
fn exit_code_from_clamps() {
    let same = |left: ExitCode, right: ExitCode| format!("{left:?}") == format!("{right:?}");
    assert!(same(exit_code_from(0), ExitCode::SUCCESS));
    assert!(same(exit_code_from(-4), ExitCode::from(0)));
    assert!(same(exit_code_from(300), ExitCode::from(255)));
    assert!(same(exit_code_from(exit::MISMATCH), ExitCode::from(1)));
}

#[test]
fn byte_order_mark_is_trimmed_from_stdin_file() {
    let (code, stdout, _) =
        run_with_stdin(&[PROGRAM_NAME, "file", "-"], "\u{feff}abc".as_bytes());
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, format!("{ABC}  -\n"));
}

#[test]
fn verify_matches_file_saved_with_byte_order_mark() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notepad.txt");
    std::fs::write(&path, "\u{feff}abc\r\n").expect("write");

    let (code, stdout, _) = run_args(&[
        PROGRAM_NAME,
        "verify",
        path_arg(&path),
        "--expected",
        ABC,
    ]);
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, "File checksum matches!\n");
}

#[test]
fn verify_rejects_stdin_for_both_operands() {
    let (code, stdout, stderr) = run_with_stdin(
        &[PROGRAM_NAME, "verify", "-", "--hash-file", "-"],
        format!("abc\n{ABC}\n").as_bytes(),
    );
    assert_eq!(code, exit::INPUT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("md5check: standard input cannot supply both"));
    assert!(!stderr.contains("no reference digest"));
}

/// Writer whose every write fails as if the reader had gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

fn run_into_closed_stdout(args: &[&str]) -> (i32, String) {
    let mut stderr = Vec::new();
    let code = run_with_input(
        args.iter().copied(),
        &mut Cursor::new(Vec::new()),
        &mut ClosedPipe,
        &mut stderr,
    );
    (code, String::from_utf8(stderr).expect("stderr utf8"))
}

#[test]
fn closed_stdout_reports_output_failure() {
    let (code, stderr) = run_into_closed_stdout(&[PROGRAM_NAME, "text", "abc"]);
    assert_eq!(code, exit::OUTPUT_FAILURE);
    assert_eq!(stderr, "md5check: failed to write output: closed\n");
}

#[test]
fn closed_stdout_fails_json_verdicts_too() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "abc").expect("write");

    let (code, stderr) = run_into_closed_stdout(&[
        PROGRAM_NAME,
        "--json",
        "verify",
        path_arg(&path),
        "--expected",
        ABC,
    ]);
    assert_eq!(code, exit::OUTPUT_FAILURE);
    assert!(stderr.contains("failed to write output"));
}

#[test]
fn help_into_closed_stdout_is_output_failure() {
    let (code, stderr) = run_into_closed_stdout(&[PROGRAM_NAME, "--help"]);
    assert_eq!(code, exit::OUTPUT_FAILURE);
    assert!(stderr.is_empty());
}

#[test]
fn usage_error_ignores_closed_stdout() {
    let (code, stderr) = run_into_closed_stdout(&[PROGRAM_NAME, "text", "abc", "--bogus"]);
    assert_eq!(code, exit::USAGE);
    assert!(stderr.contains("--bogus"));
}
