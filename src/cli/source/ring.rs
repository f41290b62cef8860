//! Command line interface for configuring a ring source.

use super::{
    add_energy_distribution_arguments, construct_energy_distribution_from_arguments,
};
use crate::{
    cli::utils,
    constants::PI,
    distribution::{discrete::Discrete, uniform::Uniform, UnivariateDistribution},
    geometry::Vec3,
    source::{angular::Isotropic, fsr, spatial::CylindricalIndependent, IndependentSource},
};
use clap::{Arg, ArgMatches, Command};

/// Creates a subcommand for using a ring source.
pub fn create_ring_subcommand() -> Command<'static> {
    let command = Command::new("ring")
        .about("Use a ring source")
        .long_about(
            "Use a ring source.\n\
             Particles are emitted isotropically from positions with independent\n\
             distributions over radius, azimuthal angle and height, so a fixed\n\
             radius and height produce a circular ring of emission points.",
        )
        .arg(
            Arg::new("radius")
                .long("radius")
                .require_equals(true)
                .value_name("CM")
                .help("Emit all particles at this distance from the axis [cm]")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::new("radius-range")
                .long("radius-range")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("R0,R1")
                .help("Emit particles with radii drawn uniformly from this interval [cm]")
                .takes_value(true)
                .conflicts_with("radius"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .require_equals(true)
                .value_name("CM")
                .help("Emit all particles at this height above the midplane [cm]")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::new("azimuth-range")
                .long("azimuth-range")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("PHI0,PHI1")
                .help("Emit particles with azimuthal angles drawn uniformly from this interval [rad] (defaults to the full circle)")
                .takes_value(true),
        )
        .arg(
            Arg::new("origin")
                .long("origin")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("X,Y,Z")
                .help("Translate the ring by this offset [cm]")
                .takes_value(true)
                .default_value("0,0,0"),
        );
    add_energy_distribution_arguments(command)
}

/// Constructs a ring source based on the provided arguments.
pub fn construct_ring_source_from_arguments(arguments: &ArgMatches) -> IndependentSource {
    let radius: Box<dyn UnivariateDistribution> = if arguments.is_present("radius-range") {
        let interval: Vec<fsr> = utils::get_finite_float_values_from_required_parseable_argument(
            arguments,
            "radius-range",
        );
        utils::verify_argument_value_count("radius-range", &interval, 2);
        Box::new(Uniform::new(interval[0], interval[1]))
    } else {
        Box::new(Discrete::single(
            utils::get_finite_float_value_from_required_parseable_argument(arguments, "radius"),
        ))
    };

    let azimuth = if arguments.is_present("azimuth-range") {
        let interval: Vec<fsr> = utils::get_finite_float_values_from_required_parseable_argument(
            arguments,
            "azimuth-range",
        );
        utils::verify_argument_value_count("azimuth-range", &interval, 2);
        Uniform::new(interval[0], interval[1])
    } else {
        Uniform::new(0.0, 2.0 * PI)
    };

    let height = Discrete::single(
        utils::get_finite_float_value_from_required_parseable_argument(arguments, "height"),
    );

    let origin: Vec<fsr> =
        utils::get_finite_float_values_from_required_parseable_argument(arguments, "origin");
    utils::verify_argument_value_count("origin", &origin, 3);

    IndependentSource::new(
        Box::new(
            CylindricalIndependent::new(radius, Box::new(azimuth), Box::new(height))
                .with_origin(Vec3::new(origin[0], origin[1], origin[2])),
        ),
        Box::new(Isotropic),
        construct_energy_distribution_from_arguments(arguments),
    )
}
