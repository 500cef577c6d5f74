use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use crate::dataset::Record;
use crate::prelude::*;

/// The header row of the exported dataset.
pub(crate) const HEADER: [&str; 2] = ["text", "result"];

const CRLF: &[u8] = b"\r\n";

/// Encodes the dataset in CSV format.
///
/// The output starts with the [HEADER] row, followed by one
/// `<text>,<lang>` row per record. Rows are joined by CRLF, the last
/// row has no line ending. Fields are never quoted; sentences and
/// language codes must not contain the separator.
pub(crate) fn encode_dataset(records: &[Record]) -> LangsetResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::CRLF)
        .from_writer(vec![]);

    writer.write_record(HEADER)?;
    for record in records.iter() {
        writer.serialize(record)?;
    }

    let mut data = writer
        .into_inner()
        .map_err(|e| LangsetError::other(e.error()))?;
    if data.ends_with(CRLF) {
        data.truncate(data.len() - CRLF.len());
    }

    Ok(data)
}

/// Exports the dataset to `path`.
///
/// The file is created (or truncated), but missing parent directories
/// are not. Any failure to create or write the file is returned as a
/// [LangsetError::Write]. Returns the number of records written.
pub(crate) fn export<P, S>(
    path: P,
    langs: &[S],
    records: &[Record],
) -> LangsetResult<usize>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let data = encode_dataset(records)?;

    for lang in langs.iter().map(|lang| lang.as_ref()) {
        let count = records.iter().filter(|r| r.lang == lang).count();
        debug!("exporting {count} record(s) labeled '{lang}'");
    }

    File::create(path)
        .and_then(|mut file| {
            file.write_all(&data)?;
            file.flush()
        })
        .map_err(|source| LangsetError::Write {
            path: path.into(),
            source,
        })?;

    Ok(records.len())
}
