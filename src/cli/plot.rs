//! Command line interface for plotting sampled source distributions.

use super::{source, utils};
use crate::{
    exit_on_error,
    plot::{
        direction::DirectionScatter, energy::EnergyHistogram, fvz, padded_range,
        position::PositionScatter, FigureSize,
    },
    source::SourceParticle,
};
use clap::{Arg, ArgMatches, Command};

/// Creates a subcommand for plotting the energy distribution of one or
/// more sources.
pub fn create_plot_energy_subcommand() -> Command<'static> {
    let command = create_common_plot_command(
        "plot_energy",
        "Plot the energy distribution of one or more sources",
        "Plot the energy distribution of one or more sources.\n\
         A fresh batch of particles is drawn from each source and their\n\
         energies are accumulated onto a shared histogram, one series per\n\
         source.",
    )
    .arg(
        Arg::new("bins")
            .long("bins")
            .require_equals(true)
            .value_name("NUMBER")
            .help("Number of energy bins in the histogram")
            .takes_value(true)
            .default_value("50"),
    )
    .arg(
        Arg::new("energy-range")
            .long("energy-range")
            .require_equals(true)
            .use_value_delimiter(true)
            .value_name("LOWER,UPPER")
            .help("Energy range covered by the histogram [eV] (defaults to the sampled range)")
            .takes_value(true),
    );
    source::add_source_subcommands(command)
}

/// Creates a subcommand for plotting the emission positions of one or
/// more sources.
pub fn create_plot_position_subcommand() -> Command<'static> {
    source::add_source_subcommands(create_common_plot_command(
        "plot_position",
        "Plot the emission positions of one or more sources",
        "Plot the emission positions of one or more sources.\n\
         A fresh batch of particles is drawn from each source and their birth\n\
         positions are accumulated onto a shared 3D scatter plot, one series\n\
         per source.",
    ))
}

/// Creates a subcommand for plotting the emission directions of one or
/// more sources.
pub fn create_plot_direction_subcommand() -> Command<'static> {
    source::add_source_subcommands(create_common_plot_command(
        "plot_direction",
        "Plot the emission directions of one or more sources",
        "Plot the emission directions of one or more sources.\n\
         A fresh batch of particles is drawn from each source and their unit\n\
         emission directions are accumulated onto a shared 3D scatter plot,\n\
         one series per source.",
    ))
}

fn create_common_plot_command(
    command_name: &'static str,
    about_text: &'static str,
    long_about_text: &'static str,
) -> Command<'static> {
    source::add_sampling_arguments(
        Command::new(command_name)
            .about(about_text)
            .long_about(long_about_text),
    )
    .arg(
        Arg::new("size")
            .long("size")
            .require_equals(true)
            .use_value_delimiter(true)
            .value_name("WIDTH,HEIGHT")
            .help("Size of the rendered figure [pixels]")
            .takes_value(true)
            .default_value("800,600"),
    )
}

/// Runs the actions for the `plot_energy` subcommand using the given
/// arguments.
pub fn run_plot_energy_subcommand(arguments: &ArgMatches) {
    let labeled_batches = source::construct_labeled_batches_from_arguments(arguments);
    let n_bins: usize = utils::get_value_from_required_parseable_argument(arguments, "bins");
    let (lower_bound, upper_bound) = energy_bounds_from_arguments(arguments, &labeled_batches);

    let mut histogram = EnergyHistogram::new(lower_bound, upper_bound, n_bins);
    accumulate_series(&labeled_batches, |label, batch| {
        let energies: Vec<fvz> = batch.iter().map(|particle| particle.energy()).collect();
        histogram.add_samples(label, &energies);
    });

    render_and_write(arguments, |size| histogram.render_to_string(size));
}

/// Runs the actions for the `plot_position` subcommand using the given
/// arguments.
pub fn run_plot_position_subcommand(arguments: &ArgMatches) {
    let labeled_batches = source::construct_labeled_batches_from_arguments(arguments);

    let mut scatter = PositionScatter::new();
    accumulate_series(&labeled_batches, |label, batch| {
        scatter.add_positions(
            label,
            batch
                .iter()
                .map(|particle| particle.position().clone())
                .collect(),
        );
    });

    render_and_write(arguments, |size| scatter.render_to_string(size));
}

/// Runs the actions for the `plot_direction` subcommand using the given
/// arguments.
pub fn run_plot_direction_subcommand(arguments: &ArgMatches) {
    let labeled_batches = source::construct_labeled_batches_from_arguments(arguments);

    let mut scatter = DirectionScatter::new();
    accumulate_series(&labeled_batches, |label, batch| {
        scatter.add_directions(
            label,
            batch
                .iter()
                .map(|particle| particle.direction().clone())
                .collect(),
        );
    });

    render_and_write(arguments, |size| scatter.render_to_string(size));
}

/// Threads each labeled batch through the given figure accumulator,
/// reporting progress when the figure collects many series.
fn accumulate_series<A>(labeled_batches: &[(String, Vec<SourceParticle>)], mut accumulate: A)
where
    A: FnMut(&str, &[SourceParticle]),
{
    if labeled_batches.len() > 1 {
        let progress_bar = utils::create_progress_bar(labeled_batches.len() as u64);
        for (label, batch) in labeled_batches {
            accumulate(label, batch);
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();
    } else {
        for (label, batch) in labeled_batches {
            accumulate(label, batch);
        }
    }
}

fn energy_bounds_from_arguments(
    arguments: &ArgMatches,
    labeled_batches: &[(String, Vec<SourceParticle>)],
) -> (fvz, fvz) {
    if arguments.is_present("energy-range") {
        let interval: Vec<fvz> = utils::get_finite_float_values_from_required_parseable_argument(
            arguments,
            "energy-range",
        );
        utils::verify_argument_value_count("energy-range", &interval, 2);
        (interval[0], interval[1])
    } else {
        let mut lower = fvz::INFINITY;
        let mut upper = fvz::NEG_INFINITY;
        for (_, batch) in labeled_batches {
            for particle in batch {
                lower = lower.min(particle.energy());
                upper = upper.max(particle.energy());
            }
        }
        padded_range(lower, upper)
    }
}

fn figure_size_from_arguments(arguments: &ArgMatches) -> FigureSize {
    let size: Vec<u32> = utils::get_values_from_required_parseable_argument(arguments, "size");
    utils::verify_argument_value_count("size", &size, 2);
    FigureSize::new(size[0], size[1])
}

fn render_and_write<R>(arguments: &ArgMatches, render: R)
where
    R: FnOnce(FigureSize) -> std::io::Result<String>,
{
    let svg = exit_on_error!(
        render(figure_size_from_arguments(arguments)),
        "Error: Could not render figure: {}"
    );

    let mut output_file = utils::prepare_output_file_from_arguments(arguments, "svg");
    let target_path = output_file.target_path().to_string_lossy().into_owned();
    exit_on_error!(
        output_file.write_text(&svg),
        "Error: Could not write output file: {}"
    );
    exit_on_error!(
        output_file.perform_replace(),
        "Error: Could not move temporary output file to target path: {}"
    );

    if utils::verbosity_from_arguments(arguments).print_messages() {
        println!("Wrote {}", target_path);
    }
}
