use std::{error::Error as StdError, fmt::Display, io::ErrorKind};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// the input CSV could not be opened or read
    ReadInput(String, ErrorKind),

    /// the CSV reader rejected the input, usually for invalid UTF-8
    Csv(String),

    /// the input did not even contain a header line
    MissingHeader,

    /// a data record with fewer than six fields. `line` is the 1-based line
    /// number in the input file
    MalformedRow { line: u64, found: usize },

    /// the output header could not be created or written
    WriteOutput(String, ErrorKind),

    /// a write to an unnamed writer failed
    Io(ErrorKind),

    /// the layout file could not be read or deserialized
    Config(String),

    /// a layout name that would not be a valid C identifier
    InvalidIdentifier { field: &'static str, value: String },
}

impl Error {
    /// Returns `true` if the error is [`MalformedRow`].
    ///
    /// [`MalformedRow`]: Error::MalformedRow
    #[must_use]
    pub fn is_malformed_row(&self) -> bool {
        matches!(self, Self::MalformedRow { .. })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReadInput(path, kind) => {
                write!(f, "failed to read {path}: {kind}")
            }
            Error::Csv(e) => write!(f, "invalid CSV input: {e}"),
            Error::MissingHeader => write!(f, "input has no header line"),
            Error::MalformedRow { line, found } => write!(
                f,
                "row on line {line} has {found} fields, expected {}",
                crate::table::NUM_FIELDS
            ),
            Error::WriteOutput(path, kind) => {
                write!(f, "failed to write {path}: {kind}")
            }
            Error::Io(kind) => write!(f, "write failed: {kind}"),
            Error::Config(e) => write!(f, "invalid layout file: {e}"),
            Error::InvalidIdentifier { field, value } => write!(
                f,
                "`{value}` given for {field} is not a valid C identifier"
            ),
        }
    }
}

impl StdError for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.kind())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}
