//! Command line interface for generating a command line completion script.

use super::build;
use clap::{Arg, ArgMatches, Command};
use clap_complete::Shell;
use std::io;

/// Creates a subcommand for generating a shell completion script.
pub fn create_completions_subcommand() -> Command<'static> {
    Command::new("completions")
        .about("Generate tab-completion script for your shell")
        .hide(true)
        .arg(
            Arg::new("shell")
                .value_name("SHELL")
                .required(true)
                .possible_values(["bash", "zsh", "fish"])
                .help("The shell to generate the script for"),
        )
        .after_help(
            "DISCUSSION\n\
             The script is output on `stdout`, allowing one to re-direct the\n\
             output to the file of their choosing. Where you place the file\n\
             will depend on which shell and operating system you are using.",
        )
}

/// Runs the actions for the `completions` subcommand using the given
/// arguments.
pub fn run_completions_subcommand(arguments: &ArgMatches) {
    let shell: Shell = arguments
        .value_of("shell")
        .expect("No value for required argument")
        .parse()
        .expect("Invalid value for shell argument");
    clap_complete::generate(
        shell,
        &mut build::build(),
        clap::crate_name!(),
        &mut io::stdout(),
    );
}
