/// Alias for `Result<T, SaveError>`.
pub type SaveResult<T> = Result<T, SaveError>;

/// Reasons a save could not be written or read back.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The first line is not the expected format tag.
    #[error("unrecognised save header: \"{0}\"")]
    BadHeader(String),

    /// A required `key=` line is missing or out of order.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field is present but its value does not parse.
    #[error("invalid value for `{field}`: \"{value}\"")]
    InvalidValue {
        field: &'static str,
        value: String,
    },

    #[error("invalid world dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// An inventory entry names a tile kind that does not exist.
    #[error("unknown inventory item \"{0}\"")]
    UnknownItem(String),

    #[error("expected {expected} tile rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("tile row {row} has {found} tiles, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}
