#![cfg(all(feature = "cairo-backend", feature = "telemetry"))]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use erlang_charts::api::{
    BLOCKING_VS_LOAD_STEM, BLOCKING_VS_SERVERS_STEM, WAITING_VS_LOAD_STEM,
    WAITING_VS_SERVERS_STEM,
};

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("erlang-charts-bin-{name}-{}", std::process::id()))
}

fn run_report(base_env: Option<&str>, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_render_erlang_charts"));
    command.args(args).env_remove("RUST_LOG");
    match base_env {
        Some(value) => command.env("N", value),
        None => command.env_remove("N"),
    };
    command.output().expect("run report binary")
}

fn combined_output(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn assert_pngs_written(dir: &Path) {
    for stem in [
        BLOCKING_VS_LOAD_STEM,
        BLOCKING_VS_SERVERS_STEM,
        WAITING_VS_LOAD_STEM,
        WAITING_VS_SERVERS_STEM,
    ] {
        let bytes = std::fs::read(dir.join(format!("{stem}.png"))).expect("png written");
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}

#[test]
fn unparsable_base_is_reported_and_report_still_written() {
    let dir = scratch_dir("unparsable");
    let out = dir.join("out");
    let output = run_report(Some("abc"), &["--output-dir", out.to_str().expect("utf-8 path")]);

    assert!(output.status.success());
    let text = combined_output(&output);
    assert!(text.contains("ignoring unparsable base parameter"), "{text}");
    assert!(text.contains("using base parameter n = 5"), "{text}");
    assert_pngs_written(&out);

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn json_flag_writes_series_next_to_images() {
    let dir = scratch_dir("json");
    let output = run_report(
        None,
        &["--base", "3", "--json", "--output-dir", dir.to_str().expect("utf-8 path")],
    );

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_pngs_written(&dir);
    assert!(dir.join(format!("{WAITING_VS_SERVERS_STEM}.json")).is_file());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn oversized_base_fails_without_output() {
    let dir = scratch_dir("oversized");
    let output = run_report(
        None,
        &["--base", "4294967295", "--output-dir", dir.to_str().expect("utf-8 path")],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("base parameter must be in"));
    assert!(!dir.exists());
}

#[test]
fn unknown_argument_fails_with_usage() {
    let output = run_report(None, &["--bogus"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}
