use approx::assert_relative_eq;
use sourcery::{
    constants::{E_DT_NEUTRON, PI},
    distribution::{discrete::Discrete, muir::Muir, uniform::Uniform, watt::Watt,
        UnivariateDistribution},
    geometry::{
        Dim3::{X, Y, Z},
        Point3,
    },
    plasma::tokamak::TokamakSourceConfig,
    plot::energy::EnergyHistogram,
    random,
    source::{
        angular::Isotropic, sample_batches, spatial::CylindricalIndependent,
        spatial::FixedPoint, IndependentSource,
    },
};

fn point_source_at(x: f64, y: f64, z: f64) -> IndependentSource {
    IndependentSource::new(
        Box::new(FixedPoint::new(Point3::new(x, y, z))),
        Box::new(Isotropic),
        Box::new(Discrete::single(14.08e6)),
    )
}

fn ring_source() -> IndependentSource {
    IndependentSource::new(
        Box::new(CylindricalIndependent::new(
            Box::new(Discrete::single(10.0)),
            Box::new(Uniform::new(0.0, 2.0 * PI)),
            Box::new(Discrete::single(0.0)),
        )),
        Box::new(Isotropic),
        Box::new(Watt::thermal_u235()),
    )
}

#[test]
fn point_source_positions_collapse_to_the_configured_coordinate() {
    let source = point_source_at(1.0, -2.0, 3.5);
    let mut rng = random::new_rng(Some(100));
    for particle in source.sample_batch(1000, &mut rng) {
        assert_eq!(*particle.position(), Point3::new(1.0, -2.0, 3.5));
    }
}

#[test]
fn ring_source_samples_have_fixed_radius_and_height_and_bounded_azimuth() {
    let source = ring_source();
    let mut rng = random::new_rng(Some(101));
    for particle in source.sample_batch(1000, &mut rng) {
        let position = particle.position();
        assert_relative_eq!(position.cylindrical_radius(), 10.0, max_relative = 1e-12);
        assert_eq!(position[Z], 0.0);

        let azimuth = position[Y].atan2(position[X]).rem_euclid(2.0 * PI);
        assert!((0.0..2.0 * PI).contains(&azimuth));
    }
}

#[test]
fn emitted_directions_are_unit_vectors_with_vanishing_mean() {
    let source = point_source_at(0.0, 0.0, 0.0);
    let mut rng = random::new_rng(Some(102));
    let batch = source.sample_batch(20_000, &mut rng);

    let mut mean = [0.0; 3];
    for particle in &batch {
        let direction = particle.direction();
        assert_relative_eq!(direction.length(), 1.0, max_relative = 1e-12);
        mean[0] += direction[X];
        mean[1] += direction[Y];
        mean[2] += direction[Z];
    }
    let n = batch.len() as f64;
    let mean_length = (mean[0] * mean[0] + mean[1] * mean[1] + mean[2] * mean[2]).sqrt() / n;
    assert!(mean_length < 0.05);
}

#[test]
fn plasma_ensemble_has_the_configured_descriptor_count() {
    let config = TokamakSourceConfig {
        sample_size: 50,
        ..TokamakSourceConfig::default()
    };
    let sources = config.make_sources(Some(103));
    assert_eq!(sources.len(), 50);

    let total_strength: f64 = sources.iter().map(|source| source.strength()).sum();
    assert_relative_eq!(total_strength, 1.0, max_relative = 1e-12);
}

#[test]
fn plasma_emitter_energies_cluster_around_the_dt_peak() {
    let config = TokamakSourceConfig {
        sample_size: 10,
        ..TokamakSourceConfig::default()
    };
    let sources = config.make_sources(Some(104));
    let batches = sample_batches(&sources, 100, Some(105));
    for batch in batches {
        let mean: f64 =
            batch.iter().map(|particle| particle.energy()).sum::<f64>() / batch.len() as f64;
        // The Muir spread at ITER-like temperatures stays well below 1 MeV.
        assert!((mean - E_DT_NEUTRON).abs() < 1e6);
    }
}

#[test]
fn overlay_plotting_is_associative() {
    let sources = [point_source_at(0.0, 0.0, 0.0), ring_source()];
    let batches = sample_batches(&sources, 5000, Some(106));
    let energies: Vec<Vec<f64>> = batches
        .iter()
        .map(|batch| batch.iter().map(|particle| particle.energy()).collect())
        .collect();

    let mut forward = EnergyHistogram::new(0.0, 20e6, 40);
    forward.add_samples("first", &energies[0]);
    forward.add_samples("second", &energies[1]);

    let mut reversed = EnergyHistogram::new(0.0, 20e6, 40);
    reversed.add_samples("second", &energies[1]);
    reversed.add_samples("first", &energies[0]);

    let mut merged = EnergyHistogram::new(0.0, 20e6, 40);
    let mut all_energies = energies[0].clone();
    all_energies.extend_from_slice(&energies[1]);
    merged.add_samples("merged", &all_energies);

    assert_eq!(forward.aggregate_counts(), reversed.aggregate_counts());
    assert_eq!(forward.aggregate_counts(), merged.aggregate_counts());
}

#[test]
fn watt_and_muir_sample_means_match_their_parametrizations() {
    let mut rng = random::new_rng(Some(107));

    let watt = Watt::thermal_u235();
    let watt_samples = watt.sample_n(100_000, &mut rng);
    let watt_mean = watt_samples.iter().sum::<f64>() / watt_samples.len() as f64;
    assert_relative_eq!(watt_mean, watt.mean_energy(), max_relative = 0.02);

    let muir = Muir::dt(2e4);
    let muir_samples = muir.sample_n(100_000, &mut rng);
    let muir_mean = muir_samples.iter().sum::<f64>() / muir_samples.len() as f64;
    assert!((muir_mean - E_DT_NEUTRON).abs() < 1e4);
}

#[test]
fn ensemble_batches_are_reproducible_for_equal_seeds() {
    let sources = [point_source_at(0.0, 0.0, 0.0), ring_source()];
    let batches_1 = sample_batches(&sources, 100, Some(108));
    let batches_2 = sample_batches(&sources, 100, Some(108));
    assert_eq!(batches_1, batches_2);
}
