use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rule for field `{field}`: {reason}")]
    Config { field: String, reason: String },
    #[error("column `{column}` collides with another column in the rule set")]
    ColumnCollision { column: String },
    #[error("column `{column}` produced {actual} rows, expected {expected}")]
    Shape {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("missing column `{0}`")]
    MissingColumn(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ScrubError>;
