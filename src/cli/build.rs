//! Function for building the command line hierarchy.

use super::completions::create_completions_subcommand;
use clap::Command;

/// Builds the `sourcery` command line hierarchy.
pub fn build() -> Command<'static> {
    let mut command = Command::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true);

    #[cfg(feature = "plotting")]
    {
        command = command
            .subcommand(super::plot::create_plot_energy_subcommand())
            .subcommand(super::plot::create_plot_position_subcommand())
            .subcommand(super::plot::create_plot_direction_subcommand());
    }

    #[cfg(feature = "json")]
    {
        command = command.subcommand(super::sample::create_sample_subcommand());
    }

    command.subcommand(create_completions_subcommand())
}
