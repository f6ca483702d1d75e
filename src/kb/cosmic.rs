//! COSMIC curated fusion pairs.

use std::{collections::HashMap, path::Path, time::Instant};

use thousands::Separable;

use super::{dedup_fusion_pairs, deserialize_loop, open_table, FusionPair};
use crate::err::LoadError;

/// Module with code for parsing the fusion CSV.
pub mod input {
    use serde::Deserialize;

    /// One row of the COSMIC fusion export.
    #[derive(Debug, Deserialize, Clone)]
    pub struct Record {
        /// 5' partner, optionally with `_<transcript>` suffix
        #[serde(rename = "5' Partner")]
        pub five_partner: String,
        /// 3' partner, optionally with `_<transcript>` suffix
        #[serde(rename = "3' Partner")]
        pub three_partner: String,
    }
}

lazy_static::lazy_static! {
    /// Legacy 3' partner symbols and their current HGNC symbol.
    static ref THREE_PRIME_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("DUX4L1", "DUX4");
        m.insert("SIP1", "GEMIN2");
        m.insert("KIAA0284", "CEP170B");
        m.insert("ACCN1", "ASIC2");
        m.insert("FAM22A", "NUTM2A");
        m.insert("ROD1", "PTBP3");
        m
    };
}

/// Strip everything from the first underscore on.
fn strip_transcript(partner: &str) -> &str {
    let end = partner.find('_').unwrap_or(partner.len());
    &partner[..end]
}

/// Correct a raw fusion record into a canonical `FusionPair`.
///
/// Only the 3' partner is mapped through the alias table.
pub fn correct_fusion(record: &input::Record) -> FusionPair {
    let gene_five = strip_transcript(&record.five_partner);
    let gene_three = strip_transcript(&record.three_partner);
    let gene_three = THREE_PRIME_ALIASES
        .get(gene_three)
        .copied()
        .unwrap_or(gene_three);
    FusionPair::new(gene_five, gene_three)
}

/// Load the known fusion pairs from a COSMIC fusion file.
pub fn known_fusion_pairs<P>(path: P, delimiter: u8) -> Result<Vec<FusionPair>, LoadError>
where
    P: AsRef<Path>,
{
    let before_parsing = Instant::now();
    tracing::debug!("reading COSMIC fusions from {:?}", path.as_ref());

    let mut reader = open_table(&path, delimiter)?;
    let pairs = deserialize_loop(&mut reader, |record: input::Record| {
        Some(correct_fusion(&record))
    })?;
    let num_rows = pairs.len();
    let pairs = dedup_fusion_pairs(pairs);

    tracing::info!(
        "read {} fusion rows, kept {} distinct pairs in {:?}",
        num_rows.separate_with_commas(),
        pairs.len().separate_with_commas(),
        before_parsing.elapsed()
    );

    Ok(pairs)
}
