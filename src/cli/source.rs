//! Command line interface for configuring particle sources.

pub mod plasma;
pub mod point;
pub mod ring;

use super::utils;
use crate::{
    distribution::{discrete::Discrete, fdi, muir::Muir, watt::Watt, UnivariateDistribution},
    exit_on_false, exit_with_error,
    source::{sample_batches, IndependentSource, SourceParticle},
};
use clap::{Arg, ArgMatches, Command};

/// Adds the source type subcommands to the given command.
pub fn add_source_subcommands(command: Command<'static>) -> Command<'static> {
    command
        .subcommand_required(true)
        .subcommand(point::create_point_subcommand())
        .subcommand(ring::create_ring_subcommand())
        .subcommand(plasma::create_plasma_subcommand())
}

/// Constructs the sources selected by the given arguments, together with a
/// base label for plot series.
///
/// The seed is only used by source types that sample their own
/// configuration, like the plasma ensemble.
pub fn construct_sources_from_arguments(
    arguments: &ArgMatches,
    seed: Option<u64>,
) -> (String, Vec<IndependentSource>) {
    if let Some(point_arguments) = arguments.subcommand_matches("point") {
        (
            "point".to_string(),
            vec![point::construct_point_source_from_arguments(
                point_arguments,
            )],
        )
    } else if let Some(ring_arguments) = arguments.subcommand_matches("ring") {
        (
            "ring".to_string(),
            vec![ring::construct_ring_source_from_arguments(ring_arguments)],
        )
    } else if let Some(plasma_arguments) = arguments.subcommand_matches("plasma") {
        (
            "plasma emitter".to_string(),
            plasma::construct_plasma_sources_from_arguments(plasma_arguments, seed),
        )
    } else {
        exit_with_error!("Error: No source type specified");
    }
}

/// Adds the arguments controlling batch sampling and file output to the
/// given command.
pub fn add_sampling_arguments(command: Command<'static>) -> Command<'static> {
    command
        .arg(
            Arg::new("output-file")
                .value_name("OUTPUT_FILE")
                .help("Path where the output file should be created")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("n-samples")
                .short('n')
                .long("n-samples")
                .require_equals(true)
                .value_name("NUMBER")
                .help("Number of particles to draw from each source")
                .takes_value(true)
                .default_value("10000"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .require_equals(true)
                .value_name("NUMBER")
                .help("Seed for the random number generator (omit to seed from OS entropy)")
                .takes_value(true),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .help("Automatically overwrite any existing output file"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Do not print status messages"),
        )
}

/// Draws a labeled batch of particles from each source selected by the
/// given arguments.
pub fn construct_labeled_batches_from_arguments(
    arguments: &ArgMatches,
) -> Vec<(String, Vec<SourceParticle>)> {
    let seed = utils::get_value_from_optional_parseable_argument(arguments, "seed");
    let n_samples: usize =
        utils::get_value_from_required_parseable_argument(arguments, "n-samples");
    exit_on_false!(
        n_samples > 0,
        "Error: Number of samples must be larger than zero"
    );

    let (base_label, sources) = construct_sources_from_arguments(arguments, seed);
    let batches = sample_batches(&sources, n_samples, seed);

    if batches.len() == 1 {
        batches
            .into_iter()
            .map(|batch| (base_label.clone(), batch))
            .collect()
    } else {
        batches
            .into_iter()
            .enumerate()
            .map(|(batch_idx, batch)| (format!("{} {}", base_label, batch_idx + 1), batch))
            .collect()
    }
}

/// Adds the arguments selecting the energy distribution of a source to the
/// given command.
pub fn add_energy_distribution_arguments(command: Command<'static>) -> Command<'static> {
    command
        .arg(
            Arg::new("energy")
                .long("energy")
                .require_equals(true)
                .value_name("EV")
                .help("Emit all particles with this fixed energy [eV]")
                .takes_value(true)
                .default_value("14.08e6"),
        )
        .arg(
            Arg::new("energy-values")
                .long("energy-values")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("EV,EV,...")
                .help("Emit particles with energies from this discrete set [eV]")
                .takes_value(true)
                .requires("energy-probabilities"),
        )
        .arg(
            Arg::new("energy-probabilities")
                .long("energy-probabilities")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("P,P,...")
                .help("Relative probability of each value in the discrete energy set")
                .takes_value(true)
                .requires("energy-values"),
        )
        .arg(
            Arg::new("watt")
                .long("watt")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("A,B")
                .help("Emit particles with a Watt fission spectrum with coefficients a [eV] and b [1/eV]")
                .takes_value(true)
                .conflicts_with_all(&["energy-values", "muir"]),
        )
        .arg(
            Arg::new("muir")
                .long("muir")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("E0,M_RAT,KT")
                .help(
                    "Emit particles with a Muir fusion spectrum with mean energy e0 [eV], \
                     mass ratio m_rat and ion temperature kt [eV]",
                )
                .takes_value(true)
                .conflicts_with("energy-values"),
        )
}

/// Constructs the energy distribution selected by the given arguments.
pub fn construct_energy_distribution_from_arguments(
    arguments: &ArgMatches,
) -> Box<dyn UnivariateDistribution> {
    if arguments.is_present("watt") {
        let coefficients: Vec<fdi> =
            utils::get_finite_float_values_from_required_parseable_argument(arguments, "watt");
        utils::verify_argument_value_count("watt", &coefficients, 2);
        Box::new(Watt::new(coefficients[0], coefficients[1]))
    } else if arguments.is_present("muir") {
        let parameters: Vec<fdi> =
            utils::get_finite_float_values_from_required_parseable_argument(arguments, "muir");
        utils::verify_argument_value_count("muir", &parameters, 3);
        Box::new(Muir::new(parameters[0], parameters[1], parameters[2]))
    } else if arguments.is_present("energy-values") {
        let values: Vec<fdi> = utils::get_finite_float_values_from_required_parseable_argument(
            arguments,
            "energy-values",
        );
        let probabilities: Vec<fdi> = utils::get_finite_float_values_from_required_parseable_argument(
            arguments,
            "energy-probabilities",
        );
        utils::verify_argument_value_count("energy-probabilities", &probabilities, values.len());
        Box::new(Discrete::new(values, probabilities))
    } else {
        Box::new(Discrete::single(
            utils::get_finite_float_value_from_required_parseable_argument(arguments, "energy"),
        ))
    }
}
