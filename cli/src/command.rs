use std::str::FromStr;

use engine::Participant;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start {
        player_x: Participant,
        player_o: Participant,
    },
    Exit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Bad parameters!")]
    BadParameters,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        match words.next() {
            Some("start") => {
                let player_x = parse_participant(words.next())?;
                let player_o = parse_participant(words.next())?;
                if words.next().is_some() {
                    return Err(CommandError::BadParameters);
                }
                Ok(Command::Start { player_x, player_o })
            }
            Some("exit") => {
                if words.next().is_some() {
                    return Err(CommandError::BadParameters);
                }
                Ok(Command::Exit)
            }
            _ => Err(CommandError::BadParameters),
        }
    }
}

fn parse_participant(word: Option<&str>) -> Result<Participant, CommandError> {
    word.and_then(|w| w.parse().ok())
        .ok_or(CommandError::BadParameters)
}
