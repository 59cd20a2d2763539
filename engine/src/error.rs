use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinates should be from 1 to {board_size}")]
    InvalidCoordinate { board_size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("match is already over")]
    MatchOver,
}
