pub mod logger;

mod board;
mod bot;
mod error;
mod game_state;
mod session_rng;
mod types;
mod win_detector;

pub use board::Board;
pub use bot::calculate_move;
pub use error::MoveError;
pub use game_state::Game;
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameStatus, Mark, Participant, Position};
pub use win_detector::{check_win_at, find_completing_cell};
