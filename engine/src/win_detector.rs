use crate::board::Board;
use crate::types::{Mark, Position};

pub fn check_win_at(board: &Board, last: Position) -> Option<Mark> {
    let mark = board.get(last.row, last.col);
    if mark == Mark::Empty {
        return None;
    }
    let size = board.size();

    if (0..size).all(|col| board.get(last.row, col) == mark) {
        return Some(mark);
    }
    if (0..size).all(|row| board.get(row, last.col) == mark) {
        return Some(mark);
    }
    if last.row == last.col && (0..size).all(|i| board.get(i, i) == mark) {
        return Some(mark);
    }
    if last.row == size - 1 - last.col && (0..size).all(|i| board.get(i, size - 1 - i) == mark) {
        return Some(mark);
    }

    None
}

pub fn find_completing_cell(board: &Board, mark: Mark, through: Position) -> Option<Position> {
    let size = board.size();

    let row_cells = (0..size).map(|col| Position::new(through.row, col));
    if let Some(cell) = completing_cell_in_line(board, mark, row_cells) {
        return Some(cell);
    }

    let col_cells = (0..size).map(|row| Position::new(row, through.col));
    if let Some(cell) = completing_cell_in_line(board, mark, col_cells) {
        return Some(cell);
    }

    if through.row == through.col {
        let diagonal_cells = (0..size).map(|i| Position::new(i, i));
        if let Some(cell) = completing_cell_in_line(board, mark, diagonal_cells) {
            return Some(cell);
        }
    }

    if through.row == size - 1 - through.col {
        let anti_diagonal_cells = (0..size).map(|i| Position::new(i, size - 1 - i));
        if let Some(cell) = completing_cell_in_line(board, mark, anti_diagonal_cells) {
            return Some(cell);
        }
    }

    None
}

fn completing_cell_in_line(
    board: &Board,
    mark: Mark,
    cells: impl Iterator<Item = Position>,
) -> Option<Position> {
    let mut mark_count = 0;
    let mut empty_cell = None;

    for pos in cells {
        let cell = board.get(pos.row, pos.col);
        if cell == mark {
            mark_count += 1;
        } else if cell == Mark::Empty {
            empty_cell = Some(pos);
        }
    }

    if mark_count == board.size() - 1 {
        empty_cell
    } else {
        None
    }
}
