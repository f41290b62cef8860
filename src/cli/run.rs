//! Functions for running the command line program.

use super::build;
use clap::ArgMatches;

/// Runs the `sourcery` command line program.
pub fn run() {
    run_with_args(build::build().get_matches());
}

/// Runs the command line program with pre-parsed arguments.
pub fn run_with_args(arguments: ArgMatches) {
    #[cfg(feature = "plotting")]
    {
        if let Some(plot_energy_arguments) = arguments.subcommand_matches("plot_energy") {
            super::plot::run_plot_energy_subcommand(plot_energy_arguments);
        }
        if let Some(plot_position_arguments) = arguments.subcommand_matches("plot_position") {
            super::plot::run_plot_position_subcommand(plot_position_arguments);
        }
        if let Some(plot_direction_arguments) = arguments.subcommand_matches("plot_direction") {
            super::plot::run_plot_direction_subcommand(plot_direction_arguments);
        }
    }

    #[cfg(feature = "json")]
    if let Some(sample_arguments) = arguments.subcommand_matches("sample") {
        super::sample::run_sample_subcommand(sample_arguments);
    }

    if let Some(completions_arguments) = arguments.subcommand_matches("completions") {
        super::completions::run_completions_subcommand(completions_arguments);
    }
}
