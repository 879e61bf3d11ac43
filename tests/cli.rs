use assert_cmd::Command;
use predicates::prelude::*;

fn derivview() -> Command {
    Command::cargo_bin("derivview").unwrap()
}

#[test]
fn headless_surface_prints_a_frame() {
    derivview()
        .args(["sinxy", "--headless", "80x24", "-n", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sin(xy)"));
}

#[test]
fn headless_mixed_demo_prints_colorbar() {
    derivview()
        .args(["poly-mixed", "--headless", "100x30", "-n", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("|x^2 y + 2 y^3 x|"))
        .stdout(predicate::str::contains("█"));
}

#[test]
fn headless_curve_with_custom_bounds() {
    derivview()
        .args(["bumps", "--headless", "80x24", "--xbounds", "-8,8", "--kind", "scatter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bumps"));
}

#[test]
fn surface_kind_on_curve_fails() {
    derivview()
        .args(["bumps", "--headless", "80x24", "--kind", "surface"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("surface"));
}

#[test]
fn unknown_kind_fails() {
    derivview()
        .args(["sinxy", "--headless", "80x24", "--kind", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn palette_is_selectable() {
    derivview()
        .args(["circle-mixed", "--headless", "80x24", "-n", "10", "--palette", "blue-red"])
        .assert()
        .success();

    derivview()
        .args(["sinxy", "--headless", "80x24", "--palette", "jet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("jet"));
}

#[test]
fn inverted_bounds_fail() {
    derivview()
        .args(["sinxy", "--headless", "80x24", "--xbounds", "3,1"])
        .assert()
        .failure();
}

#[test]
fn bad_headless_size_fails() {
    derivview()
        .args(["sinxy", "--headless", "eighty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WIDTHxHEIGHT"));
}

#[test]
fn log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("derivview.log");

    derivview()
        .args(["circle", "--headless", "60x20", "-n", "12"])
        .arg("--log")
        .arg(&log)
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting derivview"));
    assert!(contents.contains("Showing 3D axes"));
}
