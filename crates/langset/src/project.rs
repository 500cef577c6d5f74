use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::prelude::*;

pub(crate) struct Project {
    /// The root directory of the project.
    root_dir: PathBuf,

    /// Whether the root directory contains a project [Config].
    has_config: bool,
}

impl Project {
    pub(crate) const CONFIG: &'static str = "langset.toml";
    pub(crate) const INPUT_DIR: &'static str = "input";
    pub(crate) const OUTPUT_DIR: &'static str = "output";
    pub(crate) const EXPORT: &'static str = "export.csv";

    /// Discovers the root of the project, starting at the current
    /// directory.
    pub(crate) fn discover() -> LangsetResult<Self> {
        Ok(Self::discover_from(env::current_dir()?))
    }

    /// Discovers the root of the project.
    ///
    /// The root is the first directory, starting at `start` and
    /// walking up the parents, that contains a project [Config]. If
    /// there is none, `start` is used as the root of a project without
    /// a config.
    pub(crate) fn discover_from<P: AsRef<Path>>(start: P) -> Self {
        let start = start.as_ref().to_path_buf();
        let mut root_dir = start.clone();

        loop {
            if let Ok(metadata) =
                fs::metadata(root_dir.join(Self::CONFIG))
            {
                if metadata.is_file() {
                    return Self {
                        root_dir,
                        has_config: true,
                    };
                }
            }

            if !root_dir.pop() {
                return Self {
                    root_dir: start,
                    has_config: false,
                };
            }
        }
    }

    /// Returns the config associated with the project or a default
    /// config, if the project has none.
    pub(crate) fn config(&self) -> LangsetResult<Config> {
        let path = self.root_dir.join(Self::CONFIG);
        if self.has_config {
            Config::from_path(path)
        } else {
            Config::create(path)
        }
    }

    /// Returns the base directory of the project.
    #[inline]
    pub(crate) fn base_dir(&self) -> &PathBuf {
        &self.root_dir
    }

    /// Returns the directory containing the raw corpora.
    pub(crate) fn input_dir(&self, config: &Config) -> PathBuf {
        match config.build.input_dir {
            Some(ref path) => self.root_dir.join(path),
            None => self.root_dir.join(Self::INPUT_DIR),
        }
    }

    /// Returns the location of the exported dataset.
    pub(crate) fn output(&self, config: &Config) -> PathBuf {
        match config.build.output {
            Some(ref path) => self.root_dir.join(path),
            None => {
                self.root_dir.join(Self::OUTPUT_DIR).join(Self::EXPORT)
            }
        }
    }
}
