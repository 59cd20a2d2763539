use engine::{Board, Mark};

pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let border = "-".repeat(size * size);

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');

    for row in 0..size {
        out.push_str("| ");
        for col in 0..size {
            let symbol = match board.get(row, col) {
                Mark::X => 'X',
                Mark::O => 'O',
                Mark::Empty => ' ',
            };
            out.push(symbol);
            out.push(' ');
        }
        out.push_str("|\n");
    }

    out.push_str(&border);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(3);
        let expected = "---------\n\
                        |       |\n\
                        |       |\n\
                        |       |\n\
                        ---------";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_render_board_with_marks() {
        let mut board = Board::new(3);
        board.set(0, 0, Mark::X);
        board.set(1, 1, Mark::O);
        board.set(2, 2, Mark::X);
        let expected = "---------\n\
                        | X     |\n\
                        |   O   |\n\
                        |     X |\n\
                        ---------";
        assert_eq!(render_board(&board), expected);
    }
}
