//! Command line interface for "kb correct".

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use thousands::Separable;

use crate::common::io::open_write_maybe_gz;

use super::{cosmic, oncokb};

/// Select the knowledgebase table to read.
#[derive(clap::ValueEnum, Clone, Copy, Debug, strum::Display, PartialEq, Eq, Hash)]
pub enum InputType {
    /// COSMIC curated fusions (CSV).
    CosmicFusions,
    /// OncoKB annotated variants (TSV).
    OncokbKnown,
}

impl InputType {
    /// Column delimiter of the input as distributed.
    pub fn default_delimiter(&self) -> u8 {
        match self {
            InputType::CosmicFusions => b',',
            InputType::OncokbKnown => b'\t',
        }
    }
}

/// Command line arguments for `kb correct` sub command.
#[derive(Parser, Debug)]
#[command(about = "Normalize gene and fusion names of a knowledgebase table", long_about = None)]
pub struct Args {
    /// Knowledgebase table type to read.
    #[arg(long, value_enum)]
    pub source: InputType,
    /// Input file, may be gzip-compressed.
    #[arg(long)]
    pub path_input: PathBuf,
    /// Path to output TSV file, gzip-compressed if ending in `.gz`.
    #[arg(long)]
    pub path_output: PathBuf,
    /// Override the input column delimiter.
    #[arg(long)]
    pub delimiter: Option<char>,
}

/// Write `records` as TSV with header to `path`.
fn write_tsv<P, T>(path: P, records: &[T]) -> Result<(), anyhow::Error>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .from_writer(open_write_maybe_gz(path.as_ref())?);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Main entry point for the `kb correct` command.
pub fn run(common_args: &crate::common::Args, args: &Args) -> Result<(), anyhow::Error> {
    tracing::info!("Starting `kb correct`");
    tracing::info!("  common_args = {:?}", &common_args);
    tracing::info!("  args = {:?}", &args);

    let delimiter = match args.delimiter {
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => anyhow::bail!("delimiter must be an ASCII character, got {:?}", c),
        None => args.source.default_delimiter(),
    };

    let num_written = match args.source {
        InputType::CosmicFusions => {
            let pairs = cosmic::known_fusion_pairs(&args.path_input, delimiter)?;
            write_tsv(&args.path_output, &pairs)?;
            pairs.len()
        }
        InputType::OncokbKnown => {
            let variants = oncokb::known_variants(&args.path_input, delimiter)?
                .into_iter()
                .map(oncokb::output::KnownVariant::from)
                .collect::<Vec<_>>();
            write_tsv(&args.path_output, &variants)?;
            variants.len()
        }
    };

    tracing::info!(
        "wrote {} {} records to {:?}",
        num_written.separate_with_commas(),
        args.source,
        &args.path_output
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Args, InputType};
    use crate::common;

    fn read_output(path: &std::path::Path) -> Result<String, anyhow::Error> {
        let mut buf = String::new();
        std::io::Read::read_to_string(
            &mut crate::common::io::open_read_maybe_gz(path)?,
            &mut buf,
        )?;
        Ok(buf)
    }

    #[test]
    fn run_cosmic_fusions_smoke() -> Result<(), anyhow::Error> {
        let tmp_dir = temp_testdir::TempDir::default();
        let args = Args {
            source: InputType::CosmicFusions,
            path_input: "tests/kb/cosmic/fusions.csv".into(),
            path_output: tmp_dir.join("fusions.tsv"),
            delimiter: None,
        };

        super::run(&common::Args::default(), &args)?;

        assert_eq!(
            read_output(&args.path_output)?,
            "gene_five\tgene_three\n\
             BCR\tABL1\n\
             DUX4L1\tDUX4\n\
             CIC\tCEP170B\n\
             EWSR1\tFLI1\n\
             FOO\tGEMIN2\n"
        );

        Ok(())
    }

    #[test]
    fn run_oncokb_known_smoke() -> Result<(), anyhow::Error> {
        let tmp_dir = temp_testdir::TempDir::default();
        let args = Args {
            source: InputType::OncokbKnown,
            path_input: "tests/kb/oncokb/allAnnotatedVariants.txt".into(),
            path_output: tmp_dir.join("known.tsv.gz"),
            delimiter: None,
        };

        super::run(&common::Args::default(), &args)?;

        let output = read_output(&args.path_output)?;
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "source\tgene\ttranscript\talteration\treference\tmutation_effect\toncogenicity"
        );
        assert_eq!(
            lines[1],
            "oncoKb\tROS1\tENST00000368196\tCD74-ROS1 Fusion\tROS1 CD74-ROS1 Fusion\t\
             Gain-of-function\tOncogenic"
        );
        assert_eq!(
            lines[3],
            "oncoKb\tKRAS\t\tG12C\tKRAS G12C\tGain-of-function\tOncogenic"
        );
        assert_eq!(lines.len(), 6);

        Ok(())
    }

    #[test]
    fn run_with_wrong_delimiter_fails() {
        let tmp_dir = temp_testdir::TempDir::default();
        let args = Args {
            source: InputType::OncokbKnown,
            path_input: "tests/kb/oncokb/allAnnotatedVariants.txt".into(),
            path_output: tmp_dir.join("known.tsv"),
            delimiter: Some(','),
        };

        assert!(super::run(&common::Args::default(), &args).is_err());
    }

    #[test]
    fn run_rejects_non_ascii_delimiter() {
        let tmp_dir = temp_testdir::TempDir::default();
        let args = Args {
            source: InputType::CosmicFusions,
            path_input: "tests/kb/cosmic/fusions.csv".into(),
            path_output: tmp_dir.join("fusions.tsv"),
            delimiter: Some('§'),
        };

        assert!(super::run(&common::Args::default(), &args).is_err());
    }
}
