use std::fs;
use std::process::Command;

use vecspace::{LayoutSnapshot, PointSet};

fn vecspace() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vecspace"))
}

#[test]
fn layout_writes_snapshot_for_focused_cluster() {
    let output_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = output_dir.path().join("layout.json");

    let status = vecspace()
        .args([
            "--quiet",
            "layout",
            "--input",
            "tests/fixtures/cluster.yaml",
            "--settings",
            "tests/fixtures/settings.yaml",
            "--focus",
            "0",
            "--ticks",
            "120",
            "--output",
            output.to_str().unwrap(),
        ])
        .status()
        .expect("Failed to execute vecspace");

    assert!(status.success(), "vecspace exited with error");

    let json = fs::read_to_string(&output).expect("Failed to read layout.json");
    let snapshot: LayoutSnapshot = serde_json::from_str(&json).expect("Invalid snapshot JSON");

    assert_eq!(snapshot.selected, 0);
    // nearest three are the rest of the first cluster
    let mut nn = snapshot.nn.clone();
    nn.sort();
    assert_eq!(nn, vec![1, 2, 3]);
    assert_eq!(snapshot.positions.len(), 8);
    assert!(
        snapshot
            .positions
            .iter()
            .flatten()
            .all(|v| v.is_finite())
    );
}

#[test]
fn layout_prints_yaml_to_stdout() {
    let out = vecspace()
        .args([
            "--quiet",
            "layout",
            "--input",
            "tests/fixtures/triangle.json",
            "--ticks",
            "10",
            "--format",
            "yaml",
        ])
        .output()
        .expect("Failed to execute vecspace");

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let snapshot: LayoutSnapshot = serde_yaml::from_str(&stdout).expect("Invalid snapshot YAML");
    assert_eq!(snapshot.positions.len(), 3);
    assert!(snapshot.nn.is_empty());
}

#[test]
fn layout_rejects_out_of_range_focus() {
    let out = vecspace()
        .args([
            "--quiet",
            "layout",
            "--input",
            "tests/fixtures/triangle.json",
            "--focus",
            "9",
        ])
        .output()
        .expect("Failed to execute vecspace");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("index 9 out of range for 3 points"));
}

#[test]
fn neighbors_lists_nearest_first_with_index_tie_break() {
    let out = vecspace()
        .args([
            "neighbors",
            "--input",
            "tests/fixtures/triangle.json",
            "--focus",
            "0",
            "-k",
            "2",
        ])
        .output()
        .expect("Failed to execute vecspace");

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "1\t1\t1.000000\n2\t2\t1.000000\n");
}

#[test]
fn neighbors_default_k_fits_small_point_sets() {
    let out = vecspace()
        .args([
            "neighbors",
            "--input",
            "tests/fixtures/triangle.json",
            "--focus",
            "2",
        ])
        .output()
        .expect("Failed to execute vecspace");

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "1\t0\t1.000000\n2\t1\t1.414214\n");
}

#[test]
fn layout_rejects_unknown_settings_keys() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let settings = dir.path().join("settings.yaml");
    fs::write(&settings, "k: 2\nspringConstnat: 9\n").unwrap();

    let out = vecspace()
        .args([
            "--quiet",
            "layout",
            "--input",
            "tests/fixtures/triangle.json",
            "--settings",
            settings.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute vecspace");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("springConstnat"));
}

#[test]
fn random_generates_reproducible_point_sets() {
    let output_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let first = output_dir.path().join("a.json");
    let second = output_dir.path().join("b.json");

    for path in [&first, &second] {
        let status = vecspace()
            .args([
                "--quiet",
                "random",
                "-n",
                "25",
                "--dim",
                "6",
                "--seed",
                "11",
                "--output",
                path.to_str().unwrap(),
            ])
            .status()
            .expect("Failed to execute vecspace");
        assert!(status.success());
    }

    let a = fs::read_to_string(&first).unwrap();
    let b = fs::read_to_string(&second).unwrap();
    assert_eq!(a, b);

    let points: PointSet = serde_json::from_str(&a).expect("Invalid point set JSON");
    assert_eq!(points.len(), 25);
    assert_eq!(points.dim(), 6);
}

#[test]
fn random_rejects_unknown_extension() {
    let output_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = output_dir.path().join("points.csv");

    let status = vecspace()
        .args(["--quiet", "random", "--output", path.to_str().unwrap()])
        .status()
        .expect("Failed to execute vecspace");

    assert!(!status.success());
    assert!(!path.exists());
}
