use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None, max_term_width = 72)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    Build(Build),
    Completions(Completions),
    Config(Config),
    #[clap(alias = "new")]
    Init(Init),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_build_args() {
        let args = Args::try_parse_from([
            "langset", "build", "--seed", "3", "fr", "en",
        ])
        .unwrap();

        assert!(matches!(args.cmd, Command::Build(_)));
        assert!(
            Args::try_parse_from(["langset", "build", "-v", "-q"])
                .is_err()
        );
    }
}
