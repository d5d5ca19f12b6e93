//! Document frequencies shared by the tf-idf measures

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Source of the document frequencies used to weight tokens
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum DocumentFrequency {
    /// The two compared bags form a corpus of two documents
    #[default]
    SelfCorpus,
    /// Frequencies precomputed from a fixed corpus
    Corpus {
        documents: Vec<Vec<String>>,
        df: FxHashMap<String, usize>,
    },
}

impl DocumentFrequency {
    pub(crate) fn from_corpus(documents: Option<Vec<Vec<String>>>) -> Self {
        let Some(documents) = documents else {
            return DocumentFrequency::SelfCorpus;
        };

        let mut df: FxHashMap<String, usize> = FxHashMap::default();
        for document in &documents {
            let distinct: FxHashSet<&str> = document.iter().map(String::as_str).collect();
            for token in distinct {
                *df.entry(token.to_owned()).or_insert(0) += 1;
            }
        }
        debug!(
            documents = documents.len(),
            distinct_tokens = df.len(),
            "built document frequency table"
        );

        DocumentFrequency::Corpus { documents, df }
    }

    pub(crate) fn documents(&self) -> Option<&[Vec<String>]> {
        match self {
            DocumentFrequency::SelfCorpus => None,
            DocumentFrequency::Corpus { documents, .. } => Some(documents),
        }
    }

    /// Resolves the frequency table and corpus size for one comparison
    pub(crate) fn resolve<'a>(&'a self, local_df: &'a FxHashMap<&'a str, usize>) -> Frequencies<'a> {
        match self {
            DocumentFrequency::SelfCorpus => Frequencies::Local(local_df),
            DocumentFrequency::Corpus { documents, df } => Frequencies::Corpus {
                df,
                size: documents.len(),
            },
        }
    }
}

pub(crate) enum Frequencies<'a> {
    Local(&'a FxHashMap<&'a str, usize>),
    Corpus {
        df: &'a FxHashMap<String, usize>,
        size: usize,
    },
}

impl Frequencies<'_> {
    pub(crate) fn df(&self, token: &str) -> Option<usize> {
        match self {
            Frequencies::Local(df) => df.get(token).copied(),
            Frequencies::Corpus { df, .. } => df.get(token).copied(),
        }
    }

    pub(crate) fn size(&self) -> usize {
        match self {
            Frequencies::Local(_) => 2,
            Frequencies::Corpus { size, .. } => *size,
        }
    }
}

/// Token counts of a bag, keeping the order in which tokens first appear
#[derive(Debug)]
pub(crate) struct TermFrequency<'a> {
    pub(crate) order: Vec<&'a str>,
    pub(crate) counts: FxHashMap<&'a str, usize>,
}

impl<'a> TermFrequency<'a> {
    pub(crate) fn new(bag: &[&'a str]) -> Self {
        let mut order = Vec::new();
        let mut counts: FxHashMap<&'a str, usize> = FxHashMap::default();
        for &token in bag {
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }
        TermFrequency { order, counts }
    }

    pub(crate) fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }
}

/// Distinct tokens of both bags in first-seen order together with the number
/// of bags (1 or 2) each token occurs in
pub(crate) fn local_document_frequency<'a>(
    tf_x: &TermFrequency<'a>,
    tf_y: &TermFrequency<'a>,
) -> (Vec<&'a str>, FxHashMap<&'a str, usize>) {
    let mut order = Vec::new();
    let mut local_df: FxHashMap<&'a str, usize> = FxHashMap::default();
    for &token in tf_x.order.iter().chain(&tf_y.order) {
        let count = local_df.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }
    (order, local_df)
}
