use std::path::PathBuf;

use clap::Parser;

use crate::prelude::*;

/// Get and set project config options.
#[derive(Debug, Parser)]
pub(crate) struct Config {
    /// Get the value for the given key.
    #[arg(long, conflicts_with_all = ["value", "unset", "set"])]
    get: bool,

    /// Remove the key from the config.
    #[arg(long, conflicts_with_all = ["value", "get", "set"])]
    unset: bool,

    /// Set the value for the given key.
    #[arg(long, requires = "value", conflicts_with_all = ["get", "unset"])]
    set: bool,

    /// The name of the config option.
    name: String,

    /// The (new) value of the config option. Language codes are given
    /// as a comma-separated list.
    #[arg(conflicts_with_all = ["get", "unset"])]
    value: Option<String>,
}

const OPTIONS: [&str; 4] = [
    "build.languages",
    "build.input-dir",
    "build.output",
    "build.seed",
];

#[inline]
fn print_option<T>(key: &str, value: Option<T>)
where
    T: ToString,
{
    println!(
        "{key} = {}",
        match value {
            Some(value) => value.to_string(),
            None => "None".to_string(),
        }
    );
}

fn set_option(
    config: &mut crate::config::Config,
    name: &str,
    value: String,
) -> LangsetResult<()> {
    match name {
        "build.languages" => {
            config.build.languages = value
                .split(',')
                .map(str::trim)
                .filter(|lang| !lang.is_empty())
                .map(String::from)
                .collect();
        }
        "build.input-dir" => {
            config.build.input_dir = Some(PathBuf::from(value));
        }
        "build.output" => config.build.output = Some(PathBuf::from(value)),
        "build.seed" => match value.parse::<u64>() {
            Ok(seed) => config.build.seed = Some(seed),
            Err(_) => bail!("invalid value `{value}`"),
        },
        _ => unreachable!(),
    }

    Ok(())
}

fn unset_option(config: &mut crate::config::Config, name: &str) {
    match name {
        "build.languages" => config.build.languages.clear(),
        "build.input-dir" => config.build.input_dir = None,
        "build.output" => config.build.output = None,
        "build.seed" => config.build.seed = None,
        _ => unreachable!(),
    }
}

impl Config {
    pub(crate) fn execute(self) -> LangsetResult<()> {
        let project = Project::discover()?;
        let mut config = project.config()?;

        let name = match self.name.as_str() {
            name if OPTIONS.contains(&name) => name,
            name => {
                bail!("unknown config option `{name}`");
            }
        };

        if let Some(value) = self.value {
            set_option(&mut config, name, value)?;
            config.save()?;
        } else if self.unset {
            unset_option(&mut config, name);
            config.save()?;
        } else if self.get || !self.set {
            let build = config.build;
            match name {
                "build.languages" => print_option(
                    name,
                    (!build.languages.is_empty())
                        .then(|| build.languages.join(",")),
                ),
                "build.input-dir" => print_option(
                    name,
                    build.input_dir.map(|p| p.display().to_string()),
                ),
                "build.output" => print_option(
                    name,
                    build.output.map(|p| p.display().to_string()),
                ),
                "build.seed" => print_option(name, build.seed),
                _ => unreachable!(),
            }
        } else {
            unreachable!()
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn set_and_unset_options() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut config =
            crate::config::Config::create(dir.path().join("langset.toml"))?;

        set_option(&mut config, "build.languages", "de, nl,,fr".into())?;
        assert_eq!(config.build.languages, vec!["de", "nl", "fr"]);

        set_option(&mut config, "build.seed", "42".into())?;
        assert_eq!(config.build.seed, Some(42));
        assert!(set_option(&mut config, "build.seed", "x".into()).is_err());

        set_option(&mut config, "build.output", "out.csv".into())?;
        assert_eq!(config.build.output, Some("out.csv".into()));

        unset_option(&mut config, "build.output");
        unset_option(&mut config, "build.languages");
        assert_eq!(config.build.output, None);
        assert!(config.build.languages.is_empty());
        Ok(())
    }
}
