use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use log::debug;
use tokio::fs;

use crate::prelude::*;
use crate::sentence::SEPARATOR;

/// Checks that `lang` is usable as a language code.
///
/// The code names the corpus file and is written unquoted as the label
/// of every record. It must not be empty and must not contain path
/// separators, dots, the field separator, whitespace or control
/// characters.
pub(crate) fn check_lang(lang: &str) -> LangsetResult<()> {
    let invalid = |c: char| {
        matches!(c, '/' | '\\' | '.' | SEPARATOR)
            || c.is_whitespace()
            || c.is_control()
    };

    if lang.is_empty() || lang.contains(invalid) {
        bail!("invalid language code '{}'", lang.escape_debug());
    }

    Ok(())
}

/// The raw text of a single language.
#[derive(Debug)]
pub(crate) struct Corpus {
    lang: String,
    content: String,
}

impl Corpus {
    /// Returns the path of the corpus of `lang` below `input_dir`.
    #[inline]
    pub(crate) fn path<P: AsRef<Path>>(input_dir: P, lang: &str) -> PathBuf {
        input_dir.as_ref().join(format!("{lang}.txt"))
    }

    /// Reads the corpus of `lang` from `<input_dir>/<lang>.txt`.
    ///
    /// The file must exist and contain valid UTF-8, otherwise a
    /// [LangsetError::Read] is returned.
    pub(crate) async fn load<P: AsRef<Path>>(
        input_dir: P,
        lang: &str,
    ) -> LangsetResult<Self> {
        let path = Self::path(input_dir, lang);
        let content = fs::read_to_string(&path).await.map_err(|source| {
            LangsetError::Read {
                lang: lang.to_string(),
                path: path.clone(),
                source,
            }
        })?;

        debug!("loaded corpus '{lang}' ({} bytes)", content.len());

        Ok(Self {
            lang: lang.to_string(),
            content,
        })
    }

    /// Reads the corpora of all `langs` concurrently.
    ///
    /// The corpora are returned in the order of `langs`. The first
    /// failing read aborts the whole batch.
    pub(crate) async fn load_all<P, S>(
        input_dir: P,
        langs: &[S],
    ) -> LangsetResult<Vec<Self>>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let input_dir = input_dir.as_ref();
        try_join_all(
            langs
                .iter()
                .map(|lang| Self::load(input_dir, lang.as_ref())),
        )
        .await
    }

    #[inline]
    pub(crate) fn lang(&self) -> &str {
        &self.lang
    }

    #[inline]
    pub(crate) fn content(&self) -> &str {
        &self.content
    }
}
