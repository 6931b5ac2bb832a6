//! End-to-end tests driving the `tpie-memgen` binary.

mod common;

use std::error::Error;

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use common::run_memgen;

const GOLDEN: &str = include_str!("fixtures/memory.inl");

type TestResult = Result<(), Box<dyn Error>>;

struct Workdir {
    _guard: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn workdir() -> Workdir {
    let guard = tempfile::tempdir().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(guard.path().to_path_buf()).expect("utf-8 temp path");
    Workdir {
        _guard: guard,
        path,
    }
}

#[rstest]
fn prints_header_to_stdout_without_arguments(workdir: Workdir) -> TestResult {
    let output = run_memgen(&workdir.path, &[])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout)?, GOLDEN);
    Ok(())
}

#[rstest]
fn writes_requested_file(workdir: Workdir) -> TestResult {
    let output = run_memgen(&workdir.path, &["--out", "include/tpie/memory.inl"])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty(), "file mode keeps stdout clean");

    let written = std::fs::read_to_string(workdir.path.join("include/tpie/memory.inl"))?;
    assert_eq!(written, GOLDEN);
    Ok(())
}

#[rstest]
fn check_passes_for_fresh_file(workdir: Workdir) -> TestResult {
    std::fs::write(workdir.path.join("memory.inl"), GOLDEN)?;
    let output = run_memgen(&workdir.path, &["--out", "memory.inl", "--check"])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    Ok(())
}

#[rstest]
#[case::stale(Some("//This file is auto generated, do not edit\n"))]
#[case::missing(None)]
fn check_fails_for_outdated_file(workdir: Workdir, #[case] existing: Option<&str>) -> TestResult {
    let target = workdir.path.join("memory.inl");
    if let Some(content) = existing {
        std::fs::write(&target, content)?;
    }
    let output = run_memgen(&workdir.path, &["--out", "memory.inl", "--check"])?;
    assert!(!output.status.success(), "stale file must fail the check");
    assert!(String::from_utf8_lossy(&output.stderr).contains("is out of date"));
    if let Some(content) = existing {
        assert_eq!(std::fs::read_to_string(&target)?, content, "check never writes");
    } else {
        assert!(!target.exists(), "check never writes");
    }
    Ok(())
}

#[rstest]
fn check_without_out_is_an_error(workdir: Workdir) -> TestResult {
    let output = run_memgen(&workdir.path, &["--check"])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[rstest]
fn omit_pragmas_strips_preprocessor_lines(workdir: Workdir) -> TestResult {
    let output = run_memgen(&workdir.path, &["--omit-pragmas"])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let text = String::from_utf8(output.stdout)?;
    assert!(!text.contains("#pragma"));
    assert!(!text.contains("#ifdef WIN32"));
    assert_eq!(text.matches("T * tpie_new(").count(), 511);
    Ok(())
}

#[rstest]
fn config_file_selects_output(workdir: Workdir) -> TestResult {
    std::fs::write(workdir.path.join(".memgen.toml"), "out = \"from-file.inl\"\n")?;
    let output = run_memgen(&workdir.path, &[])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(std::fs::read_to_string(workdir.path.join("from-file.inl"))?, GOLDEN);
    Ok(())
}

#[rstest]
fn config_file_omits_pragmas(workdir: Workdir) -> TestResult {
    std::fs::write(workdir.path.join(".memgen.toml"), "omit_pragmas = true\n")?;
    let output = run_memgen(&workdir.path, &[])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let text = String::from_utf8(output.stdout)?;
    assert!(!text.contains("#pragma"));
    assert_eq!(text.matches("T * tpie_new(").count(), 511);
    Ok(())
}

#[rstest]
fn config_file_check_mode_never_writes(workdir: Workdir) -> TestResult {
    std::fs::write(
        workdir.path.join(".memgen.toml"),
        "out = \"memory.inl\"\ncheck = true\n",
    )?;
    let output = run_memgen(&workdir.path, &[])?;
    assert!(!output.status.success(), "missing file must fail the check");
    assert!(!workdir.path.join("memory.inl").exists(), "check never writes");
    Ok(())
}

#[rstest]
fn help_exits_successfully(workdir: Workdir) -> TestResult {
    let output = run_memgen(&workdir.path, &["--help"])?;
    assert!(output.status.success());
    Ok(())
}
