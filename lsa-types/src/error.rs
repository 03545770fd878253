use crate::Cost;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("symbol '{}' is not in the alphabet ACGT", .0.escape_ascii())]
    InvalidSymbol(u8),
    #[error("insertion index {index} is out of range for a sequence of length {len}")]
    InvalidInsertionIndex { index: usize, len: usize },
    #[error("invalid cost model: {0}")]
    InvalidCostModel(String),
    #[error("invalid alignment: {0}")]
    InvalidAlignment(String),
    #[error("costs up to {max} per column overflow on an alignment of {columns} columns")]
    CostOverflow { max: Cost, columns: usize },
}
