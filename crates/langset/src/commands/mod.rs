pub(crate) use build::Build;
pub(crate) use completions::Completions;
pub(crate) use config::Config;
pub(crate) use init::Init;

mod build;
mod completions;
mod config;
mod init;
