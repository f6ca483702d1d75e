//! OncoKB annotated variants.

use std::{path::Path, time::Instant};

use thousands::Separable;

use super::{deserialize_loop, open_table, Correct, RecordMetadata, Source};
use crate::err::LoadError;

use self::input::KnownInput;

/// Module with code for parsing the OncoKB variants TSV.
pub mod input {
    use serde::{Deserialize, Serialize};

    /// One row of the OncoKB "all annotated variants" table.
    #[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
    pub struct KnownInput {
        /// transcript, empty if not given
        #[serde(rename = "Isoform")]
        pub isoform: Option<String>,
        /// gene symbol
        #[serde(rename = "Gene")]
        pub gene: String,
        /// free-text alteration, e.g., `"V600E"` or `"BCR-ABL1 Fusion"`
        #[serde(rename = "Alteration")]
        pub alteration: String,
        #[serde(rename = "Mutation Effect")]
        pub mutation_effect: String,
        #[serde(rename = "Oncogenicity")]
        pub oncogenicity: String,
    }
}

/// Module with the flattened output representation.
pub mod output {
    use serde::{Deserialize, Serialize};

    use super::input::KnownInput;
    use crate::kb::Source;

    /// A corrected known variant, ready for writing.
    #[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
    pub struct KnownVariant {
        pub source: Source,
        pub gene: String,
        pub transcript: Option<String>,
        pub alteration: String,
        pub reference: String,
        pub mutation_effect: String,
        pub oncogenicity: String,
    }

    impl From<KnownInput> for KnownVariant {
        fn from(record: KnownInput) -> Self {
            let metadata = record.metadata();
            let reference = record.reference();
            KnownVariant {
                source: metadata.source,
                gene: metadata.gene,
                transcript: metadata.transcript,
                alteration: record.alteration,
                reference,
                mutation_effect: record.mutation_effect,
                oncogenicity: record.oncogenicity,
            }
        }
    }
}

/// Legacy fusion names in alterations and their current name.
///
/// Checked in order; the first trigger contained in the alteration wins.
const ALTERATION_ALIASES: &[(&str, &str)] = &[
    ("ROS1-CD74", "CD74-ROS1"),
    ("RET-CCDC6", "CCDC6-RET"),
    ("EP300-MOZ", "KAT6A-EP300"),
    ("EP300-MLL", "KMT2A-EP300"),
    ("BRD4-NUT", "BRD4-NUTM1"),
    ("CEP110-FGFR1", "CNTRL-FGFR1"),
    ("FGFR2-KIAA1967", "FGFR2-CCAR2"),
    ("FIG-ROS1", "GOPC-ROS1"),
    ("GPIAP1-PDGFRB", "CAPRIN1-PDGFRB"),
    ("IGL-MYC", "IGLC6-MYC"),
    ("KIAA1509-PDGFRB", "CCDC88C-PDGFRB"),
    ("MLL-TET1", "KMT2A-TET1"),
    ("NPM-ALK", "NPM1-ALK"),
    ("PAX8-PPAR", "PAX8-PPARA"),
    ("SEC16A1-NOTCH1", "SEC16A-NOTCH1"),
    ("TEL-JAK2", "ETV6-JAK2"),
    ("TRA-NKX2-1", "TRAC-NKX2-1"),
    ("FGFR1OP1-FGFR1", "FGFR1OP-FGFR1"),
    ("ZNF198-FGFR1", "ZMYM2-FGFR1"),
];

/// Alteration rewritten as a whole.
const BRAF_P61: (&str, &str) = ("p61BRAF-V600E", "V600E/V600K");

/// Records whose alteration contains any of these are dropped.
const DROP_CONTAINING: &[&str] = &["IGH", "IGK", "TRB", "Delta"];

/// Records whose alteration equals any of these are dropped.
const DROP_EXACT: &[&str] = &["PVT1-MYC Fusion", "ESR1-CCDC170 Fusion"];

impl KnownInput {
    /// Cross-reference key `"{gene} {alteration}"`.
    pub fn reference(&self) -> String {
        format!("{} {}", self.gene, self.alteration)
    }

    pub fn metadata(&self) -> RecordMetadata {
        RecordMetadata {
            source: Source::OncoKb,
            gene: self.gene.clone(),
            transcript: self.isoform.clone(),
        }
    }
}

impl Correct for KnownInput {
    fn correct(self) -> Option<Self> {
        if let Some((legacy, canonical)) = ALTERATION_ALIASES
            .iter()
            .find(|(legacy, _)| self.alteration.contains(legacy))
        {
            let alteration = self.alteration.replace(legacy, canonical);
            Some(KnownInput { alteration, ..self })
        } else if self.alteration == BRAF_P61.0 {
            Some(KnownInput {
                alteration: BRAF_P61.1.to_string(),
                ..self
            })
        } else if DROP_CONTAINING
            .iter()
            .any(|trigger| self.alteration.contains(trigger))
            || DROP_EXACT.contains(&self.alteration.as_str())
        {
            None
        } else {
            Some(self)
        }
    }
}

/// Load the known variants from an OncoKB variants file, dropping records
/// that cannot be represented.
pub fn known_variants<P>(path: P, delimiter: u8) -> Result<Vec<KnownInput>, LoadError>
where
    P: AsRef<Path>,
{
    let before_parsing = Instant::now();
    tracing::debug!("reading OncoKB variants from {:?}", path.as_ref());

    let mut num_rows = 0usize;
    let mut reader = open_table(&path, delimiter)?;
    let records = deserialize_loop(&mut reader, |record: KnownInput| {
        num_rows += 1;
        let reference = record.reference();
        let corrected = record.correct();
        if corrected.is_none() {
            tracing::debug!("dropping OncoKB record {}", reference);
        }
        corrected
    })?;

    tracing::info!(
        "read {} OncoKB rows, kept {} in {:?}",
        num_rows.separate_with_commas(),
        records.len().separate_with_commas(),
        before_parsing.elapsed()
    );

    Ok(records)
}
