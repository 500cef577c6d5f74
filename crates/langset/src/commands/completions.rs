use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Args;
use crate::prelude::*;

/// Generate shell completions for the `langset` command.
#[derive(Debug, clap::Parser)]
pub(crate) struct Completions {
    /// Write the completion script into `filename`. By default the
    /// script is written to the standard output (stdout).
    #[arg(long, short, value_name = "filename")]
    output: Option<PathBuf>,

    /// The target shell.
    #[arg(value_name = "shell")]
    shell: Shell,
}

/// Writes the completion script for `shell` into `wtr`.
fn write_completions<W: Write>(shell: Shell, wtr: &mut W) {
    let mut cmd = Args::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, wtr);
}

impl Completions {
    pub(crate) fn execute(self) -> LangsetResult<()> {
        let mut wtr: BufWriter<Box<dyn Write>> =
            BufWriter::new(match self.output {
                Some(path) => Box::new(File::create(path)?),
                None => Box::new(stdout().lock()),
            });

        write_completions(self.shell, &mut wtr);
        wtr.flush()?;
        Ok(())
    }
}
