pub(crate) use crate::config::Config;
pub(crate) use crate::error::{LangsetError, LangsetResult, bail};
pub(crate) use crate::project::Project;
