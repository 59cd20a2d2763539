use std::io::{self, BufRead};

use engine::log;
use engine::{Game, GameStatus, MoveError, Participant, Position, SessionRng};

use crate::command::Command;
use crate::render::render_board;

pub fn run<R: BufRead>(input: &mut R, board_size: usize, rng: &mut SessionRng) -> io::Result<()> {
    let mut game = Game::new(board_size);

    loop {
        println!("Input command:");
        let Some(line) = next_line(input)? else {
            break;
        };

        match line.parse::<Command>() {
            Ok(Command::Start { player_x, player_o }) => {
                run_match(&mut game, player_x, player_o, input, rng)?;
            }
            Ok(Command::Exit) => break,
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}

fn run_match<R: BufRead>(
    game: &mut Game,
    player_x: Participant,
    player_o: Participant,
    input: &mut R,
    rng: &mut SessionRng,
) -> io::Result<()> {
    game.start_match(player_x, player_o);
    log!("Match started: {} vs {}", player_x.label(), player_o.label());
    println!("{}", render_board(game.board()));

    while game.status() == GameStatus::InProgress {
        match game.current_player() {
            Participant::Human => {
                if prompt_human_move(game, input)?.is_none() {
                    return Ok(());
                }
            }
            Participant::Bot(difficulty) => {
                println!("Making move level \"{}\"", difficulty.label());
                if game.play_bot_turn(rng).is_none() {
                    break;
                }
            }
        }
        println!("{}", render_board(game.board()));
    }

    let result = match game.status() {
        GameStatus::XWon => "X wins",
        GameStatus::OWon => "O wins",
        GameStatus::Draw => "Draw",
        GameStatus::InProgress => "Game not finished",
    };
    println!("{}", result);
    log!("Match finished: {}", result);
    Ok(())
}

fn prompt_human_move<R: BufRead>(game: &mut Game, input: &mut R) -> io::Result<Option<Position>> {
    loop {
        println!("Enter the coordinates:");
        let Some(line) = next_line(input)? else {
            return Ok(None);
        };

        let mut numbers = line.split_whitespace().map(str::parse::<i64>);
        let (row, col) = match (numbers.next(), numbers.next()) {
            (Some(Ok(row)), Some(Ok(col))) => (row, col),
            _ => {
                println!("You should enter numbers!");
                continue;
            }
        };
        let row = usize::try_from(row).unwrap_or(0);
        let col = usize::try_from(col).unwrap_or(0);

        match game.submit_human_move(row, col) {
            Ok(pos) => return Ok(Some(pos)),
            Err(MoveError::InvalidCoordinate { board_size }) => {
                println!("Coordinates should be from 1 to {}!", board_size);
            }
            Err(MoveError::CellOccupied { .. }) => {
                println!("This cell is occupied! Choose another one!");
            }
            Err(MoveError::MatchOver) => return Ok(None),
        }
    }
}

fn next_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_scripted_human_match_runs_to_a_win() {
        let script = "start user user\n1 1\n2 2\n1 2\n2 1\n1 3\nexit\n";
        let mut input = Cursor::new(script);
        let mut rng = SessionRng::new(42);
        run(&mut input, 3, &mut rng).unwrap();
    }

    #[test]
    fn test_invalid_human_input_is_reprompted() {
        let script = "start user user\n\
                      one two\n\
                      0 1\n\
                      -1 2\n\
                      1 1\n\
                      1 1\n\
                      2 2\n\
                      1 2\n\
                      2 1\n\
                      1 3\n\
                      exit\n";
        let mut input = Cursor::new(script);
        let mut rng = SessionRng::new(42);
        run(&mut input, 3, &mut rng).unwrap();
    }

    #[test]
    fn test_bad_command_reprompts_until_exit() {
        let script = "begin user user\nstart user\nexit\n";
        let mut input = Cursor::new(script);
        let mut rng = SessionRng::new(42);
        run(&mut input, 3, &mut rng).unwrap();
    }

    #[test]
    fn test_bot_match_needs_no_input_and_eof_ends_the_loop() {
        let script = "start easy easy\nstart hard hard\n";
        let mut input = Cursor::new(script);
        let mut rng = SessionRng::new(42);
        run(&mut input, 3, &mut rng).unwrap();
    }
}
