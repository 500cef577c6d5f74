use std::path::PathBuf;

pub(crate) type LangsetResult<T> = Result<T, LangsetError>;

macro_rules! bail {
    ($($arg:tt)*) => {{
        return Err(LangsetError::Other(format!($($arg)*)));
    }};
}

pub(crate) use bail;

#[derive(Debug, thiserror::Error)]
pub(crate) enum LangsetError {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("unable to read corpus '{lang}' ({}): {source}", path.display())]
    Read {
        lang: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to write dataset ({}): {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl LangsetError {
    #[inline]
    pub(crate) fn other<T: ToString>(s: T) -> Self {
        Self::Other(s.to_string())
    }
}
