use log::info;
use rand::Rng;
use serde::Serialize;

/// A sentence labeled with the language of its corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub(crate) struct Record {
    pub(crate) text: String,

    #[serde(rename = "result")]
    pub(crate) lang: String,
}

impl Record {
    pub(crate) fn new<S, L>(text: S, lang: L) -> Self
    where
        S: Into<String>,
        L: Into<String>,
    {
        Self {
            text: text.into(),
            lang: lang.into(),
        }
    }
}

/// Balances the sentences of all languages.
///
/// Every group of sentences is truncated to one less than the size of
/// the smallest group and the sentences are labeled with the language
/// code of their group. The records are returned group by group, in
/// the order of `groups`.
///
/// ## Note
///
/// One sentence more than necessary is dropped from each group; an
/// empty or single-sentence group results in an empty dataset. The
/// size of the dataset is part of the output contract and must not be
/// changed silently.
pub(crate) fn balance(groups: Vec<(String, Vec<String>)>) -> Vec<Record> {
    let min_size = groups
        .iter()
        .map(|(_, sentences)| sentences.len())
        .min()
        .unwrap_or_default();

    info!("Dataset will be truncated to {min_size} entries per language.");

    let size = min_size.saturating_sub(1);
    let mut records = Vec::with_capacity(groups.len() * size);

    for (lang, sentences) in groups.into_iter() {
        records.extend(
            sentences
                .into_iter()
                .take(size)
                .map(|text| Record::new(text, lang.as_str())),
        );
    }

    records
}

/// Shuffles the items in place (Durstenfeld's variant of the
/// Fisher-Yates shuffle).
///
/// Every permutation is equally likely, provided that `rng` is a
/// uniform random source.
pub(crate) fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
