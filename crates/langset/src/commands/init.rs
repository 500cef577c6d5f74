use std::path::PathBuf;
use std::{env, fs};

use clap::Parser;
use log::info;

use crate::prelude::*;

/// Initialize a new or re-initialize an existing project.
#[derive(Debug, Parser)]
pub(crate) struct Init {
    /// The language codes of the dataset.
    #[arg(short, long = "language", value_name = "code")]
    languages: Vec<String>,

    /// Seed of the random number generator used to shuffle the
    /// dataset.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Whether to overwrite config with default values or not.
    #[arg(short, long)]
    force: bool,

    /// The location of the project.
    #[arg(default_value = ".")]
    path: PathBuf,
}

impl Init {
    pub(crate) fn execute(self) -> LangsetResult<()> {
        let root_dir = env::current_dir()?.join(self.path);
        let input_dir = root_dir.join(Project::INPUT_DIR);
        let output_dir = root_dir.join(Project::OUTPUT_DIR);
        let config = root_dir.join(Project::CONFIG);

        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
            info!("Initialize new project in {}", root_dir.display());
        } else {
            info!(
                "Re-Initialize existing project in {}",
                root_dir.display()
            );
        }

        for dir in [&input_dir, &output_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        if !config.exists() || self.force {
            let mut config = Config::create(config)?;
            config.build.languages = self.languages;
            config.build.seed = self.seed;
            config.save()?;
        }

        Ok(())
    }
}
