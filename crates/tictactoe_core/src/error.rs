use thiserror::Error;

/// Failures surfaced by board mutation, move selection, and tree evaluation.
///
/// Every variant is a caller-checkable precondition violation; nothing is
/// retried internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid move to ({row}, {col}): cell occupied or out of range")]
    InvalidMove { row: u8, col: u8 },

    #[error("no empty cells available")]
    NoMovesAvailable,

    #[error("internal tree node is missing a child")]
    MissingChild,
}
