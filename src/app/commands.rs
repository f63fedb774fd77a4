use crate::domain::model::Tab;
use crate::utils::error::FelineError;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  next, n              show the next fact
  like <name|number>   like or unlike a breed
  facts                switch to the facts tab
  breeds               switch to the breeds tab
  state                print the page state as JSON
  help                 show this message
  quit, exit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Like(String),
    Show(Tab),
    State,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = FelineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        let command = match (word.to_ascii_lowercase().as_str(), rest.is_empty()) {
            ("next" | "n", true) => Command::Next,
            ("like", false) => Command::Like(rest.to_string()),
            ("facts", true) => Command::Show(Tab::Facts),
            ("breeds", true) => Command::Show(Tab::Breeds),
            ("state", true) => Command::State,
            ("help" | "?", true) => Command::Help,
            ("quit" | "exit" | "q", true) => Command::Quit,
            _ => {
                return Err(FelineError::InvalidCommand {
                    input: input.to_string(),
                })
            }
        };
        Ok(command)
    }
}
