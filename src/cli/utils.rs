//! Utilities for creating the command line interface.

use crate::{
    exit_on_error, exit_on_false,
    io::{
        utils::{AtomicOutputFile, OverwriteMode},
        Verbosity,
    },
    num::BFloat,
};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use lazy_static::lazy_static;
use std::{path::PathBuf, str::FromStr};

lazy_static! {
    static ref DEFAULT_PROGRESS_STYLE: ProgressStyle =
        ProgressStyle::default_bar().template("Progress: {bar:40}  {percent}% | ETA: {eta}");
}

/// Creates a progress bar for the given number of steps.
pub fn create_progress_bar(n_steps: u64) -> ProgressBar {
    let progress_bar = ProgressBar::new(n_steps);
    progress_bar.set_style(DEFAULT_PROGRESS_STYLE.clone());
    progress_bar
}

/// Parses the given value string into the requested type, exiting with an
/// error message if parsing fails.
pub fn parse_value_string<T>(argument_name: &str, value_string: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    exit_on_error!(
        value_string.parse(),
        "Error: Could not parse value for {0}: {1}",
        argument_name
    )
}

fn verify_finite_float_value<F: BFloat>(argument_name: &str, value: F) {
    exit_on_false!(value.is_finite(), "Error: {} must be finite", argument_name);
}

/// Verifies that the given argument has exactly the required number of
/// values.
pub fn verify_argument_value_count<T>(argument_name: &str, values: &[T], required_count: usize) {
    let count = values.len();
    exit_on_false!(
        count == required_count,
        "Error: {} must have {} values, got {}",
        argument_name,
        required_count,
        count
    );
}

pub fn get_value_from_required_parseable_argument<T>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    parse_value_string(
        argument_name,
        arguments
            .value_of(argument_name)
            .expect("No value for required argument"),
    )
}

pub fn get_value_from_optional_parseable_argument<T>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> Option<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    arguments
        .value_of(argument_name)
        .map(|value_string| parse_value_string(argument_name, value_string))
}

pub fn get_finite_float_value_from_required_parseable_argument<F>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> F
where
    F: BFloat + FromStr,
    <F as FromStr>::Err: std::fmt::Display,
{
    let value: F = get_value_from_required_parseable_argument(arguments, argument_name);
    verify_finite_float_value(argument_name, value);
    value
}

pub fn get_values_from_required_parseable_argument<T>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> Vec<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    arguments
        .values_of(argument_name)
        .expect("No values for required argument")
        .filter(|value_string| !value_string.is_empty())
        .map(|value_string| parse_value_string(argument_name, value_string))
        .collect()
}

pub fn get_finite_float_values_from_required_parseable_argument<F>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> Vec<F>
where
    F: BFloat + FromStr,
    <F as FromStr>::Err: std::fmt::Display,
{
    let values = get_values_from_required_parseable_argument(arguments, argument_name);
    values
        .iter()
        .for_each(|&value| verify_finite_float_value(argument_name, value));
    values
}

pub fn get_values_from_optional_parseable_argument<T>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> Option<Vec<T>>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    arguments.values_of(argument_name).map(|value_strings| {
        value_strings
            .filter(|value_string| !value_string.is_empty())
            .map(|value_string| parse_value_string(argument_name, value_string))
            .collect()
    })
}

/// Determines the overwrite mode selected by the given arguments.
pub fn overwrite_mode_from_arguments(arguments: &ArgMatches) -> OverwriteMode {
    if arguments.is_present("overwrite") {
        OverwriteMode::Always
    } else {
        OverwriteMode::Ask
    }
}

/// Determines the verbosity selected by the given arguments.
pub fn verbosity_from_arguments(arguments: &ArgMatches) -> Verbosity {
    if arguments.is_present("quiet") {
        Verbosity::Quiet
    } else {
        Verbosity::Messages
    }
}

/// Creates an atomic output file from the `output-file` argument, exiting
/// if the target exists and overwriting is not allowed.
///
/// The default extension is appended when the given path has none.
pub fn prepare_output_file_from_arguments(
    arguments: &ArgMatches,
    default_extension: &str,
) -> AtomicOutputFile {
    let mut output_file_path = PathBuf::from(
        arguments
            .value_of("output-file")
            .expect("No value for required argument"),
    );
    if output_file_path.extension().is_none() {
        output_file_path.set_extension(default_extension);
    }

    let output_file = exit_on_error!(
        AtomicOutputFile::new(output_file_path),
        "Error: Could not create temporary output file: {}"
    );
    exit_on_false!(
        output_file.check_write_allowed(overwrite_mode_from_arguments(arguments)),
        "Error: File {} already exists",
        output_file.target_path().to_string_lossy()
    );
    output_file
}
