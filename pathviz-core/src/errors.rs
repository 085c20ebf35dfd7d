use thiserror::Error;

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum GraphError {
    #[error("Node label is empty")]
    EmptyNodeLabel,

    #[error("Edge cost must be a non-negative integer, got {0}")]
    InvalidEdgeCost(i64),
}

pub type Result<T> = std::result::Result<T, GraphError>;
