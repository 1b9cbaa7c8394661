use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn export() -> assert_cmd::Command {
    cargo_bin_cmd!("aesthetic-export")
}

#[test]
fn writes_one_snapshot_per_tab() {
    let dir = tempfile::tempdir().unwrap();

    export()
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"))
        .stdout(predicate::str::contains("about.html"));

    for (file, slug) in [
        ("index.html", "home"),
        ("features.html", "features"),
        ("pricing.html", "pricing"),
        ("about.html", "about"),
    ] {
        let html = std::fs::read_to_string(dir.path().join(file)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"), "{file}");
        assert!(html.contains(&format!(r#"data-panel="{slug}""#)), "{file}");
        assert!(!html.contains(r#"data-role="mobile-panel""#), "{file}");
    }
}

#[test]
fn single_tab_with_open_menu() {
    let dir = tempfile::tempdir().unwrap();

    export()
        .arg("--out-dir")
        .arg(dir.path())
        .args(["--tab", "pricing", "--menu-open"])
        .assert()
        .success();

    assert!(!dir.path().join("index.html").exists());
    let html = std::fs::read_to_string(dir.path().join("pricing.html")).unwrap();
    assert!(html.contains(r#"data-role="mobile-panel""#));
}

#[test]
fn config_file_overrides_brand() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("site.json");
    std::fs::write(&config, r#"{"brand_name": "Northwind"}"#).unwrap();

    export()
        .arg("--out-dir")
        .arg(dir.path().join("out"))
        .arg("--config")
        .arg(&config)
        .args(["--tab", "home"])
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("out/index.html")).unwrap();
    assert!(html.contains("<title>Northwind</title>"));
}

#[test]
fn unknown_tab_is_rejected() {
    export()
        .args(["--tab", "blog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tab 'blog'"));
}

#[test]
fn broken_config_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("broken.json");
    std::fs::write(&config, "{ not json").unwrap();

    export()
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid site config"));
}
