//! Command line interface for configuring a tokamak plasma source.

use crate::{
    cli::utils,
    plasma::{
        fpl,
        tokamak::{PlasmaMode, TokamakSourceConfig},
    },
    source::IndependentSource,
};
use clap::{Arg, ArgMatches, Command};

/// Creates a subcommand for using a tokamak plasma source.
pub fn create_plasma_subcommand() -> Command<'static> {
    Command::new("plasma")
        .about("Use a tokamak plasma source")
        .long_about(
            "Use a tokamak plasma source.\n\
             The plasma volume is approximated by a set of point-like emitters\n\
             drawn from a parametric equilibrium cross-section, each with a Muir\n\
             energy spectrum at the local ion temperature and a strength\n\
             proportional to the local D-T neutron emissivity.\n\
             Parameters default to an ITER-like configuration.",
        )
        .arg(create_parameter_arg(
            "major-radius",
            "CM",
            "Major radius of the plasma torus [cm]",
            "906",
        ))
        .arg(create_parameter_arg(
            "minor-radius",
            "CM",
            "Minor radius of the plasma cross-section [cm]",
            "292",
        ))
        .arg(create_parameter_arg(
            "elongation",
            "VALUE",
            "Vertical elongation of the cross-section",
            "1.557",
        ))
        .arg(create_parameter_arg(
            "triangularity",
            "VALUE",
            "Triangularity of the cross-section",
            "0.270",
        ))
        .arg(create_parameter_arg(
            "pedestal-radius",
            "CM",
            "Minor radius where the pedestal region begins [cm]",
            "233.6",
        ))
        .arg(create_parameter_arg(
            "shafranov-factor",
            "CM",
            "Shafranov shift of the innermost flux surfaces [cm]",
            "44.789",
        ))
        .arg(create_parameter_arg(
            "ion-density-centre",
            "PER_M3",
            "Ion density on the magnetic axis [1/m^3]",
            "1.09e20",
        ))
        .arg(create_parameter_arg(
            "ion-density-peaking-factor",
            "VALUE",
            "Peaking factor of the core ion density profile",
            "1",
        ))
        .arg(create_parameter_arg(
            "ion-density-pedestal",
            "PER_M3",
            "Ion density at the pedestal [1/m^3]",
            "1.09e20",
        ))
        .arg(create_parameter_arg(
            "ion-density-separatrix",
            "PER_M3",
            "Ion density at the separatrix [1/m^3]",
            "3e19",
        ))
        .arg(create_parameter_arg(
            "ion-temperature-centre",
            "KEV",
            "Ion temperature on the magnetic axis [keV]",
            "45.9",
        ))
        .arg(create_parameter_arg(
            "ion-temperature-peaking-factor",
            "VALUE",
            "Peaking factor of the core ion temperature profile",
            "8.06",
        ))
        .arg(create_parameter_arg(
            "ion-temperature-beta",
            "VALUE",
            "Exponent shaping the core ion temperature profile",
            "6",
        ))
        .arg(create_parameter_arg(
            "ion-temperature-pedestal",
            "KEV",
            "Ion temperature at the pedestal [keV]",
            "6.09",
        ))
        .arg(create_parameter_arg(
            "ion-temperature-separatrix",
            "KEV",
            "Ion temperature at the separatrix [keV]",
            "0.1",
        ))
        .arg(
            Arg::new("mode")
                .long("mode")
                .require_equals(true)
                .value_name("MODE")
                .help("Operating mode of the plasma")
                .takes_value(true)
                .possible_values(["H", "L", "A"])
                .default_value("H"),
        )
        .arg(
            Arg::new("sample-size")
                .long("sample-size")
                .require_equals(true)
                .value_name("NUMBER")
                .help("Number of point-like emitters to approximate the plasma with")
                .takes_value(true)
                .default_value("50"),
        )
        .arg(
            Arg::new("toroidal-range")
                .long("toroidal-range")
                .require_equals(true)
                .use_value_delimiter(true)
                .value_name("PHI0,PHI1")
                .help("Range of toroidal angles to place emitters in [rad] (defaults to the full torus)")
                .takes_value(true),
        )
}

fn create_parameter_arg(
    name: &'static str,
    value_name: &'static str,
    help: &'static str,
    default_value: &'static str,
) -> Arg<'static> {
    Arg::new(name)
        .long(name)
        .require_equals(true)
        .value_name(value_name)
        .help(help)
        .takes_value(true)
        .default_value(default_value)
}

/// Constructs the plasma source ensemble based on the provided arguments.
pub fn construct_plasma_sources_from_arguments(
    arguments: &ArgMatches,
    seed: Option<u64>,
) -> Vec<IndependentSource> {
    let angles = if arguments.is_present("toroidal-range") {
        let interval: Vec<fpl> = utils::get_finite_float_values_from_required_parseable_argument(
            arguments,
            "toroidal-range",
        );
        utils::verify_argument_value_count("toroidal-range", &interval, 2);
        (interval[0], interval[1])
    } else {
        (0.0, 2.0 * crate::constants::PI)
    };

    let config = TokamakSourceConfig {
        major_radius: get_parameter(arguments, "major-radius"),
        minor_radius: get_parameter(arguments, "minor-radius"),
        elongation: get_parameter(arguments, "elongation"),
        triangularity: get_parameter(arguments, "triangularity"),
        pedestal_radius: get_parameter(arguments, "pedestal-radius"),
        shafranov_factor: get_parameter(arguments, "shafranov-factor"),
        ion_density_centre: get_parameter(arguments, "ion-density-centre"),
        ion_density_peaking_factor: get_parameter(arguments, "ion-density-peaking-factor"),
        ion_density_pedestal: get_parameter(arguments, "ion-density-pedestal"),
        ion_density_separatrix: get_parameter(arguments, "ion-density-separatrix"),
        ion_temperature_centre: get_parameter(arguments, "ion-temperature-centre"),
        ion_temperature_peaking_factor: get_parameter(
            arguments,
            "ion-temperature-peaking-factor",
        ),
        ion_temperature_beta: get_parameter(arguments, "ion-temperature-beta"),
        ion_temperature_pedestal: get_parameter(arguments, "ion-temperature-pedestal"),
        ion_temperature_separatrix: get_parameter(arguments, "ion-temperature-separatrix"),
        mode: utils::get_value_from_required_parseable_argument::<PlasmaMode>(arguments, "mode"),
        sample_size: utils::get_value_from_required_parseable_argument(arguments, "sample-size"),
        angles,
    };
    config.make_sources(seed)
}

fn get_parameter(arguments: &ArgMatches, argument_name: &str) -> fpl {
    utils::get_finite_float_value_from_required_parseable_argument(arguments, argument_name)
}
