//! Reading and normalizing curated knowledgebase tables.
//!
//! Each knowledgebase gets its own module with a serde `input` record that
//! mirrors the source table's columns and a corrector that maps gene or
//! fusion names to the current canonical symbols.

use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{common::io::open_read_maybe_gz, err::LoadError};

pub mod cli;
pub mod cosmic;
pub mod oncokb;

/// The supported knowledgebases.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash, strum::Display)]
pub enum Source {
    /// COSMIC curated fusions
    #[strum(serialize = "cosmic")]
    #[serde(rename = "cosmic")]
    Cosmic,
    /// OncoKB annotated variants
    #[strum(serialize = "oncoKb")]
    #[serde(rename = "oncoKb")]
    OncoKb,
}

/// Metadata that every knowledgebase record carries along.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct RecordMetadata {
    /// Knowledgebase the record originates from.
    pub source: Source,
    /// Gene symbol as given by the source.
    pub gene: String,
    /// Transcript, if the source provides one.
    pub transcript: Option<String>,
}

/// A gene fusion given by its 5' (upstream) and 3' (downstream) partner.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Debug)]
pub struct FusionPair {
    /// 5' partner gene symbol
    pub gene_five: String,
    /// 3' partner gene symbol
    pub gene_three: String,
}

impl FusionPair {
    pub fn new(gene_five: impl Into<String>, gene_three: impl Into<String>) -> Self {
        Self {
            gene_five: gene_five.into(),
            gene_three: gene_three.into(),
        }
    }
}

/// Correction of a raw input row.
///
/// Returns the corrected record, or `None` if the record cannot be
/// represented and must be dropped.
pub trait Correct: Sized {
    fn correct(self) -> Option<Self>;
}

/// Deduplicate fusion pairs, keeping the first occurrence of each.
pub fn dedup_fusion_pairs<I>(pairs: I) -> Vec<FusionPair>
where
    I: IntoIterator<Item = FusionPair>,
{
    pairs.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

/// Build a CSV reader with header line for the given `path`.
///
/// Quoting is only honoured for comma-separated input; tab-separated
/// exports carry free text with unbalanced `"`.
pub fn open_table<P>(
    path: P,
    delimiter: u8,
) -> Result<csv::Reader<Box<dyn std::io::BufRead>>, LoadError>
where
    P: AsRef<Path>,
{
    let reader = open_read_maybe_gz(path.as_ref()).map_err(|source| LoadError::Open {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .quoting(delimiter == b',')
        .from_reader(reader))
}

/// Deserialize rows from CSV reader and map each through `correct`.
///
/// The closure returns `None` for rows to drop.
pub fn deserialize_loop<Rec, Out, F>(
    reader: &mut csv::Reader<Box<dyn std::io::BufRead>>,
    mut correct: F,
) -> Result<Vec<Out>, LoadError>
where
    Rec: for<'de> Deserialize<'de>,
    F: FnMut(Rec) -> Option<Out>,
{
    let mut result = Vec::new();

    for (i, record) in reader.deserialize().enumerate() {
        let record: Rec = record.map_err(|source| LoadError::Row { row: i + 1, source })?;
        if let Some(record) = correct(record) {
            result.push(record);
        }
    }

    Ok(result)
}
