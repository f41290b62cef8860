mod common;

use common::run;

fn path_str(path: &std::path::Path) -> &str {
    path.to_str().expect("Invalid path")
}

#[test]
fn plot_energy_for_point_source_writes_svg_figure() {
    let test = common::Test::new("plot_energy_for_point_source_writes_svg_figure");
    let output = test.output_path("energy.svg");
    run([
        "plot_energy",
        path_str(&output),
        "--n-samples=1000",
        "--seed=42",
        "--quiet",
        "point",
        "--position=0,0,0",
        "--energy=14.08e6",
    ]);
    common::assert_file_exists(&output);
    assert!(common::read_file(&output).contains("<svg"));
}

#[test]
fn plot_energy_supports_watt_spectrum_with_explicit_range() {
    let test = common::Test::new("plot_energy_supports_watt_spectrum_with_explicit_range");
    let output = test.output_path("watt");
    run([
        "plot_energy",
        path_str(&output),
        "--n-samples=2000",
        "--seed=7",
        "--bins=80",
        "--energy-range=0,15e6",
        "--quiet",
        "point",
        "--watt=0.988e6,2.249e-6",
    ]);
    // The extension is appended automatically when the path has none.
    common::assert_file_exists(test.output_path("watt.svg"));
}

#[test]
fn plot_position_for_ring_source_writes_svg_figure() {
    let test = common::Test::new("plot_position_for_ring_source_writes_svg_figure");
    let output = test.output_path("position.svg");
    run([
        "plot_position",
        path_str(&output),
        "--n-samples=500",
        "--seed=3",
        "--quiet",
        "ring",
        "--radius=10",
        "--height=0",
    ]);
    common::assert_file_exists(&output);
    assert!(common::read_file(&output).contains("<svg"));
}

#[test]
fn plot_direction_for_point_source_writes_svg_figure() {
    let test = common::Test::new("plot_direction_for_point_source_writes_svg_figure");
    let output = test.output_path("direction.svg");
    run([
        "plot_direction",
        path_str(&output),
        "--n-samples=300",
        "--seed=5",
        "--quiet",
        "point",
    ]);
    common::assert_file_exists(&output);
}

#[test]
fn plot_energy_overlays_plasma_ensemble_onto_one_figure() {
    let test = common::Test::new("plot_energy_overlays_plasma_ensemble_onto_one_figure");
    let output = test.output_path("plasma.svg");
    run([
        "plot_energy",
        path_str(&output),
        "--n-samples=200",
        "--seed=11",
        "--quiet",
        "plasma",
        "--sample-size=5",
    ]);
    common::assert_file_exists(&output);
    assert!(common::read_file(&output).contains("<svg"));
}

#[test]
fn sample_exports_particle_records_as_json() {
    let test = common::Test::new("sample_exports_particle_records_as_json");
    let output = test.output_path("particles.json");
    run([
        "sample",
        path_str(&output),
        "--n-samples=50",
        "--seed=19",
        "--quiet",
        "point",
        "--position=1,2,3",
        "--energy=2e6",
    ]);
    common::assert_file_exists(&output);

    let records: serde_json::Value =
        serde_json::from_str(&common::read_file(&output)).expect("Invalid JSON output");
    let records = records.as_array().expect("Expected JSON array");
    assert_eq!(records.len(), 50);
    for record in records {
        assert_eq!(record["energy"], 2e6);
        assert_eq!(record["weight"], 1.0);
        assert_eq!(record["position"].as_array().unwrap().len(), 3);
        assert_eq!(record["direction"].as_array().unwrap().len(), 3);
    }
}

#[test]
fn seeded_sampling_runs_are_reproducible() {
    let test = common::Test::new("seeded_sampling_runs_are_reproducible");
    let output_1 = test.output_path("first.json");
    let output_2 = test.output_path("second.json");
    for output in [&output_1, &output_2] {
        run([
            "sample",
            path_str(output),
            "--n-samples=20",
            "--seed=23",
            "--quiet",
            "ring",
            "--radius=10",
        ]);
    }
    assert_eq!(common::read_file(&output_1), common::read_file(&output_2));
}

#[test]
fn existing_output_is_replaced_with_overwrite_flag() {
    let test = common::Test::new("existing_output_is_replaced_with_overwrite_flag");
    let output = test.output_path("energy.svg");
    for _ in 0..2 {
        run([
            "plot_energy",
            path_str(&output),
            "--n-samples=100",
            "--seed=29",
            "--overwrite",
            "--quiet",
            "point",
        ]);
    }
    common::assert_file_exists(&output);
}
