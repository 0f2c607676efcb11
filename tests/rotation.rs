//! End-to-end rotation behavior over a real directory tree.

use axum::http::StatusCode;
use chartview::cursor::Cursor;
use chartview::serve::next_run_page;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Two runs: runA with two charts and a two-line config, runB with one
/// chart and a one-line config.
fn two_run_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();

    let run_a = tmp.path().join("runA");
    fs::create_dir(&run_a).unwrap();
    fs::write(run_a.join("c1.png"), "fake image").unwrap();
    fs::write(run_a.join("c2.png"), "fake image").unwrap();
    fs::write(run_a.join("test_config"), "x=1\ny=22").unwrap();

    let run_b = tmp.path().join("runB");
    fs::create_dir(&run_b).unwrap();
    fs::write(run_b.join("d1.png"), "fake image").unwrap();
    fs::write(run_b.join("test_config"), "z=9").unwrap();

    tmp
}

fn request(root: &Path, cursor: &Cursor) -> (StatusCode, String) {
    next_run_page(root, cursor)
}

#[test]
fn consecutive_requests_rotate_through_runs_and_wrap() {
    let tmp = two_run_fixture();
    let cursor = Cursor::new();

    // Request 1: runA, two charts, sized textarea.
    let (status, body) = request(tmp.path(), &cursor);
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>runA</h1>"));
    assert_eq!(body.matches("<img").count(), 2);
    assert!(body.contains("/runs/runA/c1.png"));
    assert!(body.contains("/runs/runA/c2.png"));
    assert!(body.contains("x=1\ny=22"));
    assert!(body.contains("cols=\"5\""));
    assert!(body.contains("rows=\"3\""));

    // Request 2: runB, one chart, and the cursor wraps.
    let (status, body) = request(tmp.path(), &cursor);
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>runB</h1>"));
    assert_eq!(body.matches("<img").count(), 1);
    assert!(body.contains("/runs/runB/d1.png"));
    assert!(body.contains("z=9"));
    assert!(body.contains("cols=\"4\""));
    assert!(body.contains("rows=\"2\""));

    // Request 3: back to runA, identical page.
    let (status, body_again) = request(tmp.path(), &cursor);
    assert_eq!(status, StatusCode::OK);
    let (_, body_first) = {
        let fresh = Cursor::new();
        request(tmp.path(), &fresh)
    };
    assert_eq!(body_again, body_first);
}

#[test]
fn charts_appear_in_listing_order() {
    let tmp = two_run_fixture();
    let cursor = Cursor::new();

    let (_, body) = request(tmp.path(), &cursor);
    let first = body.find("/runs/runA/c1.png").unwrap();
    let second = body.find("/runs/runA/c2.png").unwrap();
    assert!(first < second);
}

#[test]
fn empty_root_gets_empty_state_every_time() {
    let tmp = TempDir::new().unwrap();
    let cursor = Cursor::new();

    for _ in 0..3 {
        let (status, body) = request(tmp.path(), &cursor);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("No runs available"));
    }
}

#[test]
fn missing_config_is_a_diagnostic_not_a_crash() {
    let tmp = TempDir::new().unwrap();
    let broken = tmp.path().join("broken");
    fs::create_dir(&broken).unwrap();
    fs::write(broken.join("c1.png"), "fake image").unwrap();

    let ok = tmp.path().join("ok");
    fs::create_dir(&ok).unwrap();
    fs::write(ok.join("test_config"), "x=1").unwrap();

    let cursor = Cursor::new();

    let (status, body) = request(tmp.path(), &cursor);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("test_config"));

    // The rotation moved past the broken run.
    let (status, body) = request(tmp.path(), &cursor);
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>ok</h1>"));
}

#[test]
fn run_without_charts_still_shows_its_config() {
    let tmp = TempDir::new().unwrap();
    let bare = tmp.path().join("bare");
    fs::create_dir(&bare).unwrap();
    fs::write(bare.join("test_config"), "steps=500").unwrap();

    let cursor = Cursor::new();
    let (status, body) = request(tmp.path(), &cursor);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<img").count(), 0);
    assert!(body.contains("steps=500"));
}

#[test]
fn hostile_run_names_and_configs_are_escaped() {
    let tmp = TempDir::new().unwrap();
    let run = tmp.path().join("run<b>bold</b>");
    fs::create_dir(&run).unwrap();
    fs::write(run.join("test_config"), "<script>alert(1)</script>").unwrap();

    let cursor = Cursor::new();
    let (status, body) = request(tmp.path(), &cursor);
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<script>"));
    assert!(!body.contains("<h1>run<b>"));
    assert!(body.contains("&lt;script&gt;"));
}
