//! Command line interface for configuring a point source.

use super::{
    add_energy_distribution_arguments, construct_energy_distribution_from_arguments,
};
use crate::{
    cli::utils,
    geometry::Point3,
    source::{angular::Isotropic, fsr, spatial::FixedPoint, IndependentSource},
};
use clap::{Arg, ArgMatches, Command};

/// Creates a subcommand for using a point source.
pub fn create_point_subcommand() -> Command<'static> {
    let command = Command::new("point")
        .about("Use a point source")
        .long_about(
            "Use a point source.\n\
             All particles are emitted isotropically from a single fixed position.",
        )
        .arg(
            Arg::new("position")
                .long("position")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("X,Y,Z")
                .help("Position to emit all particles from [cm]")
                .takes_value(true)
                .default_value("0,0,0"),
        );
    add_energy_distribution_arguments(command)
}

/// Constructs a point source based on the provided arguments.
pub fn construct_point_source_from_arguments(arguments: &ArgMatches) -> IndependentSource {
    let position: Vec<fsr> =
        utils::get_finite_float_values_from_required_parseable_argument(arguments, "position");
    utils::verify_argument_value_count("position", &position, 3);

    IndependentSource::new(
        Box::new(FixedPoint::new(Point3::new(
            position[0],
            position[1],
            position[2],
        ))),
        Box::new(Isotropic),
        construct_energy_distribution_from_arguments(arguments),
    )
}
