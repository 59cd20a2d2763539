use crate::board::Board;
use crate::bot::calculate_move;
use crate::error::MoveError;
use crate::session_rng::SessionRng;
use crate::types::{GameStatus, Mark, Participant, Position};
use crate::win_detector::check_win_at;

#[derive(Debug)]
pub struct Game {
    board: Board,
    move_history: Vec<Position>,
    player_x: Participant,
    player_o: Participant,
    current_player: Participant,
    current_mark: Mark,
    status: GameStatus,
}

impl Game {
    pub fn new(board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            move_history: Vec::new(),
            player_x: Participant::Human,
            player_o: Participant::Human,
            current_player: Participant::Human,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn start_match(&mut self, player_x: Participant, player_o: Participant) {
        self.board.clear();
        self.move_history.clear();
        self.player_x = player_x;
        self.player_o = player_o;
        self.current_player = player_x;
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    pub fn submit_human_move(&mut self, row: usize, col: usize) -> Result<Position, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::MatchOver);
        }

        let size = self.board.size();
        if row < 1 || row > size || col < 1 || col > size {
            return Err(MoveError::InvalidCoordinate { board_size: size });
        }

        let pos = Position::new(row - 1, col - 1);
        if !self.board.is_empty(pos.row, pos.col) {
            return Err(MoveError::CellOccupied { row, col });
        }

        self.place_mark(pos);
        Ok(pos)
    }

    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Option<Position> {
        if self.status != GameStatus::InProgress {
            return None;
        }

        let difficulty = match self.current_player {
            Participant::Bot(difficulty) => difficulty,
            Participant::Human => return None,
        };

        let pos = calculate_move(
            difficulty,
            &mut self.board,
            self.current_mark,
            &self.move_history,
            rng,
        )?;
        self.place_mark(pos);
        Some(pos)
    }

    fn place_mark(&mut self, pos: Position) {
        self.board.set(pos.row, pos.col, self.current_mark);
        self.move_history.push(pos);

        self.check_game_over(pos);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
            self.current_player = self.player_o;
        } else {
            self.current_mark = Mark::X;
            self.current_player = self.player_x;
        }
    }

    fn check_game_over(&mut self, last: Position) {
        if let Some(winner_mark) = check_win_at(&self.board, last) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn current_player(&self) -> Participant {
        self.current_player
    }

    pub fn move_history(&self) -> &[Position] {
        &self.move_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    fn human_match(board_size: usize) -> Game {
        let mut game = Game::new(board_size);
        game.start_match(Participant::Human, Participant::Human);
        game
    }

    #[test]
    fn test_top_row_win_scenario() {
        let mut game = human_match(3);
        let moves = [(1, 1), (2, 2), (1, 2), (2, 1)];
        for (row, col) in moves {
            game.submit_human_move(row, col).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        game.submit_human_move(1, 3).unwrap();
        assert_eq!(game.status(), GameStatus::XWon);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut game = human_match(3);
        let moves = [
            (1, 1), (1, 2), (1, 3), (2, 2), (2, 1), (2, 3), (3, 2), (3, 1), (3, 3),
        ];
        for (row, col) in moves {
            game.submit_human_move(row, col).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.board().is_full());
    }

    #[test]
    fn test_marks_and_participants_alternate() {
        let mut game = Game::new(3);
        game.start_match(Participant::Human, Participant::Bot(Difficulty::Easy));
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.current_player(), Participant::Human);

        game.submit_human_move(1, 1).unwrap();
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.current_player(), Participant::Bot(Difficulty::Easy));
    }

    #[test]
    fn test_submitted_coordinates_are_one_indexed() {
        let mut game = human_match(3);
        let pos = game.submit_human_move(1, 1).unwrap();
        assert_eq!(pos, Position::new(0, 0));
        assert_eq!(game.board().get(0, 0), Mark::X);
    }

    #[test]
    fn test_out_of_range_coordinates_are_rejected() {
        let mut game = human_match(3);
        for (row, col) in [(0, 1), (1, 0), (4, 1), (1, 4)] {
            assert_eq!(
                game.submit_human_move(row, col),
                Err(MoveError::InvalidCoordinate { board_size: 3 })
            );
        }
        assert_eq!(game.move_history().len(), 0);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_state_change() {
        let mut game = human_match(3);
        game.submit_human_move(2, 2).unwrap();
        assert_eq!(
            game.submit_human_move(2, 2),
            Err(MoveError::CellOccupied { row: 2, col: 2 })
        );
        assert_eq!(game.board().get(1, 1), Mark::X);
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.move_history().len(), 1);
    }

    #[test]
    fn test_no_moves_accepted_after_the_match_ends() {
        let mut game = human_match(3);
        for (row, col) in [(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)] {
            game.submit_human_move(row, col).unwrap();
        }
        assert_eq!(game.status(), GameStatus::XWon);
        assert_eq!(game.submit_human_move(3, 3), Err(MoveError::MatchOver));
    }

    #[test]
    fn test_history_tracks_board_occupancy() {
        let mut game = Game::new(4);
        game.start_match(
            Participant::Bot(Difficulty::Easy),
            Participant::Bot(Difficulty::Easy),
        );
        let mut rng = SessionRng::new(11);
        let mut plies = 0;
        while game.status() == GameStatus::InProgress {
            game.play_bot_turn(&mut rng).unwrap();
            plies += 1;
            assert_eq!(game.move_history().len(), plies);
            assert!(game.move_history().len() <= 16);
            assert_eq!(game.board().is_full(), game.move_history().len() == 16);
        }
    }

    #[test]
    fn test_hard_vs_hard_always_draws() {
        let mut game = Game::new(3);
        let mut rng = SessionRng::new(1);
        game.start_match(
            Participant::Bot(Difficulty::Hard),
            Participant::Bot(Difficulty::Hard),
        );
        while game.status() == GameStatus::InProgress {
            game.play_bot_turn(&mut rng).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.move_history().len(), 9);
    }

    #[test]
    fn test_start_match_resets_everything() {
        let mut game = human_match(3);
        for (row, col) in [(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)] {
            game.submit_human_move(row, col).unwrap();
        }
        assert_eq!(game.status(), GameStatus::XWon);

        game.start_match(Participant::Bot(Difficulty::Medium), Participant::Human);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.current_player(), Participant::Bot(Difficulty::Medium));
        assert!(game.move_history().is_empty());
        assert_eq!(game.board().available_moves().len(), 9);
    }

    #[test]
    fn test_bot_turn_is_none_when_human_is_active() {
        let mut game = Game::new(3);
        game.start_match(Participant::Human, Participant::Bot(Difficulty::Easy));
        let mut rng = SessionRng::new(5);
        assert_eq!(game.play_bot_turn(&mut rng), None);
    }
}
