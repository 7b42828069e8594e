//! Recoverable error types. Whole-run failures go through `anyhow`.

/// A reference string that matches none of the known forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    #[error("could not parse reference `{0}`")]
    Unparsable(String),
}

/// Why a schedule row contributed no verses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("row is missing month, day, section or reference")]
    MissingField,

    #[error("no such calendar day {month}-{day}")]
    InvalidDate { month: u32, day: u32 },

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("could not find book `{0}`")]
    UnknownBook(String),

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("corpus has no data for {book} (index {index})")]
    MissingBook { book: String, index: usize },
}

/// Copying failed before any text was produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("no verses selected")]
    NothingSelected,
}
