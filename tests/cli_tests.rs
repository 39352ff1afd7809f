use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    catalog_path: PathBuf,
    config_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let catalog_path = dir.path().join("perms.bin");
        let config_path = dir.path().join("config.json");

        fs::write(
            &config_path,
            r#"{ "minimum_tiers": [4, 3, 0, 0, 3, 0], "ignore_affinities": true }"#,
        )
        .unwrap();

        let ctx = Self {
            dir,
            catalog_path,
            config_path,
        };
        let out = ctx.run(&[
            "synth",
            "--count",
            "300",
            "--seed",
            "17",
            "--out",
            ctx.catalog_path.to_str().unwrap(),
        ]);
        assert!(out.status.success(), "synth failed: {:?}", out);
        ctx
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_armorforge"))
            .args(args)
            .output()
            .expect("Failed to execute binary")
    }

    fn scan(&self, extra: &[&str]) -> Output {
        let mut args = vec![
            "scan",
            "--catalog",
            self.catalog_path.to_str().unwrap(),
            "--config",
            self.config_path.to_str().unwrap(),
            "--shard-size",
            "64",
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }
}

fn accepted_count(stdout: &str) -> usize {
    let re = Regex::new(r"\|\s*accepted\s*\|\s*(\d+)\s*\|").unwrap();
    re.captures(stdout)
        .and_then(|c| c[1].parse().ok())
        .expect("accepted row missing from report")
}

#[test]
fn test_synth_writes_catalog() {
    let ctx = TestContext::new();
    let len = fs::metadata(&ctx.catalog_path).unwrap().len();
    assert_eq!(len, 300 * 13 * 4);
}

#[test]
fn test_scan_prints_reports() {
    let ctx = TestContext::new();
    let out = ctx.scan(&[]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Max Tier"));
    assert!(stdout.contains("mod_budget"));
    assert!(accepted_count(&stdout) <= 300);
}

#[test]
fn test_scan_exports_csv_and_json() {
    let ctx = TestContext::new();
    let csv_path = ctx.dir.path().join("results.csv");
    let json_path = ctx.dir.path().join("stats.json");

    let out = ctx.scan(&[
        "--csv",
        csv_path.to_str().unwrap(),
        "--json",
        json_path.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let csv = fs::read_to_string(&csv_path).unwrap();
    let rows = csv.lines().count() - 1;
    assert_eq!(rows, accepted_count(&stdout));

    let json = fs::read_to_string(&json_path).unwrap();
    assert!(json.contains("max_tiers"));
}

#[test]
fn test_stricter_override_accepts_fewer() {
    let ctx = TestContext::new();
    let loose = ctx.scan(&[]);
    let strict = ctx.scan(&["--min-tiers", "7,7,7,0,0,0", "--max-mods", "2"]);
    assert!(loose.status.success() && strict.status.success());

    let loose_n = accepted_count(&String::from_utf8_lossy(&loose.stdout));
    let strict_n = accepted_count(&String::from_utf8_lossy(&strict.stdout));
    assert!(strict_n <= loose_n);
}

#[test]
fn test_invalid_override_fails() {
    let ctx = TestContext::new();
    let out = ctx.scan(&["--max-mods", "9"]);
    assert!(!out.status.success());
}

#[test]
fn test_missing_catalog_fails() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "scan",
        "--catalog",
        ctx.dir.path().join("missing.bin").to_str().unwrap(),
    ]);
    assert!(!out.status.success());
}
