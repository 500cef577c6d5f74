use std::path::Path;

use rand::Rng;

use crate::corpus::{check_lang, Corpus};
use crate::dataset::{balance, shuffle};
use crate::export::export;
use crate::prelude::*;
use crate::sentence::split_sentences;

/// Builds the labeled dataset of `langs` and writes it to `output`.
///
/// Reads all corpora from `input_dir`, splits them into sentences,
/// balances and shuffles the labeled sentences and exports them.
/// Returns the number of records written. Nothing is written if any
/// language code is invalid or any corpus can't be read.
pub(crate) async fn run<P1, P2, S, R>(
    input_dir: P1,
    output: P2,
    langs: &[S],
    rng: &mut R,
) -> LangsetResult<usize>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    for lang in langs.iter() {
        check_lang(lang.as_ref())?;
    }

    let corpora = Corpus::load_all(input_dir, langs).await?;
    let groups = corpora
        .iter()
        .map(|corpus| {
            (corpus.lang().to_string(), split_sentences(corpus.content()))
        })
        .collect();

    let mut records = balance(groups);
    shuffle(&mut records, rng);

    export(output, langs, &records)
}
