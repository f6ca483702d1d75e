use std::path::PathBuf;

/// Errors raised while loading knowledgebase tables.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("could not open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse data row {row}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}
