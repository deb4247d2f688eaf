//! CLI tests: flags, exit codes and per-file messages.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn blockify(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blockify"))
        .args(args)
        .current_dir(dir)
        .env_remove("BLOCKIFY_LOG")
        .output()
        .expect("spawn blockify")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

#[test]
fn test_help_flag() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["-h", "--help"] {
        let out = blockify(dir.path(), &[flag]);
        assert_eq!(out.status.code(), Some(0));
        assert!(stdout(&out).contains("Usage: blockify [options] <file ...>"));
        assert!(stdout(&out).contains("Converts single-line comments"));
    }
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["-v", "--version"] {
        let out = blockify(dir.path(), &[flag]);
        assert_eq!(out.status.code(), Some(0));
        assert_eq!(stdout(&out).trim(), format!("blockify version {}", PKG_VERSION));
    }
}

#[test]
fn test_help_wins_over_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "// x\n").unwrap();

    let out = blockify(dir.path(), &["a.js", "--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read_to_string(dir.path().join("a.js")).unwrap(), "// x\n");
}

#[test]
fn test_no_files_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = blockify(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("error: No input files specified."));
    assert!(err.contains("Usage: blockify"));
}

#[test]
fn test_converts_relative_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "const x = 1; // set x\n").unwrap();

    let out = blockify(dir.path(), &["a.js"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Converted comments in \"a.js\" successfully."));
    assert_eq!(
        fs::read_to_string(dir.path().join("a.js")).unwrap(),
        "const x = 1; /* set x */\n"
    );
}

#[test]
fn test_preserves_crlf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("win.js");
    fs::write(&path, "a(); // one\r\n\"http://x\"; // two\r\n").unwrap();

    let out = blockify(dir.path(), &["win.js"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        fs::read(&path).unwrap(),
        b"a(); /* one */\r\n\"http://x\"; /* two */\r\n"
    );
}

#[test]
fn test_directory_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();

    let out = blockify(dir.path(), &["src"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stderr(&out).contains("Skipping \"src\": Not a file."));
}

#[test]
fn test_missing_file_does_not_stop_others() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ok.js"), "x(); // ok").unwrap();

    let out = blockify(dir.path(), &["missing.js", "ok.js"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stderr(&out).contains("Error accessing file \"missing.js\""));
    assert!(stdout(&out).contains("Converted comments in \"ok.js\" successfully."));
    assert_eq!(
        fs::read_to_string(dir.path().join("ok.js")).unwrap(),
        "x(); /* ok */"
    );
}

#[test]
fn test_invalid_utf8_is_reported_and_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bin.js");
    fs::write(&path, [b'/', b'/', 0xff, b'\n']).unwrap();

    let out = blockify(dir.path(), &["--pretty", "false", "bin.js"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stderr(&out).contains("Error decoding file \"bin.js\""));
    assert_eq!(fs::read(&path).unwrap(), vec![b'/', b'/', 0xff, b'\n']);
}

#[test]
fn test_verbose_logs_converted_comments() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "a();\n// second line\n").unwrap();

    let out = blockify(dir.path(), &["--verbose", "a.js"]);

    assert_eq!(out.status.code(), Some(0));
    let err = stderr(&out);
    assert!(err.contains("converted comment"));
    assert!(err.contains("line=2"));
}

#[test]
fn test_dash_prefixed_name_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-foo.js"), "f(); // dash\n").unwrap();

    let out = blockify(dir.path(), &["-foo.js"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Converted comments in \"-foo.js\" successfully."));
    assert_eq!(
        fs::read_to_string(dir.path().join("-foo.js")).unwrap(),
        "f(); /* dash */\n"
    );
}

#[test]
fn test_unknown_option_is_treated_as_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let out = blockify(dir.path(), &["--nope"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(stderr(&out).contains("Error accessing file \"--nope\""));
}
