use lazy_static::lazy_static;
use sourcery::cli;
use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

lazy_static! {
    static ref COMMAND: clap::Command<'static> = cli::build::build().no_binary_name(true);
}

/// Runs the command line program with the given arguments.
pub fn run<I, T>(args: I)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    cli::run::run_with_args(COMMAND.clone().get_matches_from(args));
}

pub fn assert_file_exists<P: AsRef<Path>>(file_path: P) {
    let file_path = file_path.as_ref();
    assert!(
        file_path.exists(),
        "File {} does not exist",
        file_path.to_string_lossy()
    );
}

pub fn read_file<P: AsRef<Path>>(file_path: P) -> String {
    let file_path = file_path.as_ref();
    fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!(
            "Could not read file {}: {}",
            file_path.to_string_lossy(),
            err
        )
    })
}

/// Manages a fresh output directory for a single test.
#[derive(Debug, Clone)]
pub struct Test {
    output_dir: PathBuf,
}

impl Test {
    const BASE_OUTPUT_DIR_PATH_COMPONENTS: [&'static str; 3] = ["tests", "data", "output"];

    pub fn new<S: AsRef<str>>(name: S) -> Self {
        let output_dir: PathBuf = Self::BASE_OUTPUT_DIR_PATH_COMPONENTS
            .iter()
            .collect::<PathBuf>()
            .join(name.as_ref());
        Self::prepare_output_dir(&output_dir).unwrap_or_else(|err| {
            panic!(
                "Could not prepare output directory for test {}: {}",
                name.as_ref(),
                err
            )
        });
        Self { output_dir }
    }

    pub fn output_path<S: AsRef<str>>(&self, file_name: S) -> PathBuf {
        self.output_dir.join(file_name.as_ref())
    }

    fn prepare_output_dir(output_dir: &Path) -> io::Result<()> {
        if output_dir.exists() {
            fs::remove_dir_all(output_dir)?;
        }
        fs::create_dir_all(output_dir)
    }
}
