use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LangsetError, LangsetResult};

/// Project config (`langset.toml`).
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Config {
    /// The path of the config.
    #[serde(skip)]
    path: PathBuf,

    /// Options of the `build` command.
    #[serde(default)]
    pub(crate) build: BuildConfig,

    /// This structure should always be constructed using a public
    /// constructor or using the update syntax:
    ///
    /// ```ignore
    /// use crate::config::Config;
    ///
    /// let config = Config {
    ///     ..Default::default()
    /// };
    /// ```
    #[doc(hidden)]
    #[serde(skip)]
    __non_exhaustive: (),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct BuildConfig {
    /// The ordered list of language codes. Each code names a corpus
    /// `<input-dir>/<code>.txt` and is used as the label of its
    /// sentences.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub(crate) languages: Vec<String>,

    /// The directory containing the raw corpora, relative to the
    /// project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) input_dir: Option<PathBuf>,

    /// The location of the exported CSV file, relative to the project
    /// root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output: Option<PathBuf>,

    /// Seed of the random number generator used to shuffle the
    /// dataset. If unset, the generator is seeded from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seed: Option<u64>,
}

impl Config {
    /// Creates a new default config and sets the file location.
    pub(crate) fn create<P>(path: P) -> LangsetResult<Self>
    where
        P: AsRef<Path>,
    {
        Ok(Self {
            path: path.as_ref().into(),
            ..Default::default()
        })
    }

    /// Loads an existing config from a path.
    pub(crate) fn from_path<P>(path: P) -> LangsetResult<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().into();
        let content = fs::read_to_string(&path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.path = path;

        Ok(config)
    }

    /// Saves the config.
    pub(crate) fn save(&self) -> LangsetResult<()> {
        let content =
            toml::to_string(self).map_err(LangsetError::other)?;
        let mut out = File::create(&self.path)?;
        out.write_all(content.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn config_from_path() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("langset.toml");
        fs::write(
            &path,
            "[build]\nlanguages = [\"de\", \"nl\"]\nseed = 7\n",
        )?;

        let config = Config::from_path(&path)?;
        assert_eq!(config.build.languages, vec!["de", "nl"]);
        assert_eq!(config.build.seed, Some(7));
        assert_eq!(config.build.input_dir, None);
        assert_eq!(config.build.output, None);
        Ok(())
    }

    #[test]
    fn config_empty_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("langset.toml");
        fs::write(&path, "")?;

        let config = Config::from_path(&path)?;
        assert!(config.build.languages.is_empty());
        assert_eq!(config.build.seed, None);
        Ok(())
    }

    #[test]
    fn config_save() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("langset.toml");

        let mut config = Config::create(&path)?;
        config.build.languages = vec!["fr".into(), "en".into()];
        config.build.input_dir = Some("corpora".into());
        config.save()?;

        let config = Config::from_path(&path)?;
        assert_eq!(config.build.languages, vec!["fr", "en"]);
        assert_eq!(config.build.input_dir, Some("corpora".into()));
        assert!(fs::read_to_string(&path)?.contains("input-dir"));
        Ok(())
    }

    #[test]
    fn config_invalid() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("langset.toml");
        fs::write(&path, "[build]\nseed = \"abc\"\n")?;

        assert!(Config::from_path(&path).is_err());
        Ok(())
    }
}
