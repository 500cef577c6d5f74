use std::path::PathBuf;

use clap::Parser;
use log::{debug, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::pipeline;
use crate::prelude::*;

/// The languages of the dataset, if neither the command line nor the
/// project config lists any.
const DEFAULT_LANGUAGES: [&str; 3] = ["fr", "en", "es"];

/// Build a labeled and balanced sentence dataset.
#[derive(Debug, Default, Parser)]
pub(crate) struct Build {
    /// Run verbosely. Print additional progress information to the
    /// standard error stream. This option conflicts with the
    /// `--quiet` option.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Operate quietly; do not show progress. This option conflicts
    /// with the `--verbose` option.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Read the corpora from `path` instead of the project's input
    /// directory (default: `input`).
    #[arg(short, long, value_name = "path")]
    input_dir: Option<PathBuf>,

    /// Write the dataset into `filename`. By default the dataset will
    /// be written to `output/export.csv` in the project directory.
    #[arg(short, long, value_name = "filename")]
    output: Option<PathBuf>,

    /// Seed of the random number generator used to shuffle the
    /// dataset. If not set, the generator is seeded by the OS.
    #[arg(short, long, env = "LANGSET_SEED", hide_env_values = true)]
    seed: Option<u64>,

    /// The language codes of the dataset. Each code `<code>` requires
    /// a corpus `<code>.txt` in the input directory.
    #[arg(value_name = "code")]
    languages: Vec<String>,
}

impl Build {
    /// Returns the log level requested by the `--verbose` and
    /// `--quiet` flags.
    pub(crate) fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    pub(crate) async fn execute(self) -> LangsetResult<()> {
        let project = Project::discover()?;
        let config = project.config()?;

        let input_dir = match self.input_dir {
            Some(path) => path,
            None => project.input_dir(&config),
        };

        let output = match self.output {
            Some(path) => path,
            None => project.output(&config),
        };

        let languages = if !self.languages.is_empty() {
            self.languages
        } else if !config.build.languages.is_empty() {
            config.build.languages
        } else {
            DEFAULT_LANGUAGES.map(String::from).to_vec()
        };

        debug!(
            "building dataset of [{}] (project {}) from {} into {}",
            languages.join(", "),
            project.base_dir().display(),
            input_dir.display(),
            output.display()
        );

        let mut rng = match self.seed.or(config.build.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let count =
            pipeline::run(&input_dir, &output, &languages, &mut rng)
                .await?;

        println!("{count}");
        Ok(())
    }
}
