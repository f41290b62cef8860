//! Command line interface for exporting sampled particle records.

use super::{source, utils};
use crate::{exit_on_error, io::utils as io_utils, source::SourceParticle};
use clap::{ArgMatches, Command};

/// Creates a subcommand for sampling particle records from a source and
/// writing them to a JSON file.
pub fn create_sample_subcommand() -> Command<'static> {
    source::add_source_subcommands(source::add_sampling_arguments(
        Command::new("sample")
            .about("Sample a batch of particles from a source and export the records")
            .long_about(
                "Sample a batch of particles from a source and export the records.\n\
                 A fresh batch of initial particle states (position, direction,\n\
                 energy and weight) is drawn from each selected source and written\n\
                 to a JSON file.",
            ),
    ))
}

/// Runs the actions for the `sample` subcommand using the given arguments.
pub fn run_sample_subcommand(arguments: &ArgMatches) {
    let particles: Vec<SourceParticle> =
        source::construct_labeled_batches_from_arguments(arguments)
            .into_iter()
            .flat_map(|(_, batch)| batch)
            .collect();

    let mut output_file = utils::prepare_output_file_from_arguments(arguments, "json");
    let target_path = output_file.target_path().to_string_lossy().into_owned();
    exit_on_error!(
        io_utils::write_data_as_json(&mut output_file, &particles),
        "Error: Could not write particle records: {}"
    );
    exit_on_error!(
        output_file.perform_replace(),
        "Error: Could not move temporary output file to target path: {}"
    );

    if utils::verbosity_from_arguments(arguments).print_messages() {
        println!("Wrote {} particle records to {}", particles.len(), target_path);
    }
}
