//! End-to-end tests: runs the compiled binary against `fixtures/content`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simple-landing"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run simple-landing")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Build the fixture site once and share the output directory.
fn built_site() -> &'static (TempDir, Output) {
    static BUILT: OnceLock<(TempDir, Output)> = OnceLock::new();
    BUILT.get_or_init(|| {
        let tmp = TempDir::new().unwrap();
        let output = run(&[
            "build",
            "--source",
            path_arg(&fixtures()),
            "--output",
            path_arg(&tmp.path().join("dist")),
            "--temp-dir",
            path_arg(&tmp.path().join("temp")),
        ]);
        assert!(
            output.status.success(),
            "build failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        (tmp, output)
    })
}

fn index_html() -> String {
    let (tmp, _) = built_site();
    std::fs::read_to_string(tmp.path().join("dist/index.html")).unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn build_writes_page_manifest_and_assets() {
    let (tmp, _) = built_site();
    assert!(tmp.path().join("dist/index.html").exists());
    assert!(tmp.path().join("temp/manifest.json").exists());
    assert!(tmp.path().join("dist/logo.png").exists());
    assert!(tmp.path().join("dist/team/Linus.jpeg").exists());
    assert!(tmp.path().join("dist/partners/byte_works.png").exists());
}

#[test]
fn build_prints_both_stages() {
    let (_, output) = built_site();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("==> Stage 1: Scanning"));
    assert!(stdout.contains("001 Ada Lovelace (tier 0)"));
    assert!(stdout.contains("==> Stage 2: Generating HTML"));
    assert!(stdout.contains("==> Build complete"));
}

#[test]
fn orphan_metadata_is_logged_to_stderr() {
    let (_, output) = built_site();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("former_member"), "stderr was: {stderr}");
}

#[test]
fn roster_order_in_page() {
    let html = index_html();
    let ada = html.find("Ada Lovelace</h3>").unwrap();
    let grace = html.find("Grace Hopper</h3>").unwrap();
    let linus = html.find("Linus</h3>").unwrap();
    let ann = html.find("Ann Bee</h3>").unwrap();
    let zed = html.find("Zed Quiet</h3>").unwrap();
    assert!(ada < grace && grace < linus && linus < ann && ann < zed);
}

#[test]
fn configured_brand_color_is_inlined() {
    let html = index_html();
    assert!(html.contains("--color-brand: #0F766E"));
    // untouched keys keep stock values
    assert!(html.contains("--color-whatsapp: #25D366"));
}

#[test]
fn check_validates_without_writing() {
    let tmp = TempDir::new().unwrap();
    let output = run(&[
        "check",
        "--source",
        path_arg(&fixtures()),
        "--output",
        path_arg(&tmp.path().join("dist")),
        "--temp-dir",
        path_arg(&tmp.path().join("temp")),
    ]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("==> Content is valid"));
    assert!(!tmp.path().join("dist").exists());
    assert!(!tmp.path().join("temp").exists());
}

#[test]
fn check_rejects_unknown_content_key() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("content.toml"),
        "[site]\nname = \"X\"\n[team]\nfile = []\n",
    )
    .unwrap();
    let output = run(&["check", "--source", path_arg(tmp.path())]);
    assert!(!output.status.success());
}

#[test]
fn gen_content_round_trips_through_check() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["gen-content"]);
    assert!(output.status.success());
    std::fs::write(tmp.path().join("content.toml"), &output.stdout).unwrap();

    let check = run(&["check", "--source", path_arg(tmp.path())]);
    assert!(check.status.success());
    let stdout = String::from_utf8_lossy(&check.stdout);
    assert!(stdout.contains("001 David Amodu (tier 0)"));
}

#[test]
fn gen_config_is_valid_config() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["gen-config"]);
    assert!(output.status.success());
    std::fs::write(tmp.path().join("config.toml"), &output.stdout).unwrap();

    let check = run(&["check", "--source", path_arg(tmp.path())]);
    assert!(check.status.success());
}

#[test]
fn scan_then_generate_matches_build() {
    let tmp = TempDir::new().unwrap();
    let (source, dist, temp) = (fixtures(), tmp.path().join("dist"), tmp.path().join("temp"));
    let common = [
        "--source",
        path_arg(&source),
        "--output",
        path_arg(&dist),
        "--temp-dir",
        path_arg(&temp),
    ];
    let mut scan_args = vec!["scan"];
    scan_args.extend(common);
    assert!(run(&scan_args).status.success());

    let mut gen_args = vec!["generate"];
    gen_args.extend(common);
    let output = run(&gen_args);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Team: 5 members"));

    let html = std::fs::read_to_string(dist.join("index.html")).unwrap();
    assert_eq!(html, index_html());
}
