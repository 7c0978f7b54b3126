//! Interactive dashboard commands

use thiserror::Error;

use crate::model::FilterField;

/// One line of input at the dashboard prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the search input and run the search
    Search(String),
    /// Set one filter input; an empty value unsets it
    Set(FilterField, String),
    Apply,
    Clear,
    View(i64),
    Close,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' expects a transaction id")]
    MissingId(&'static str),

    #[error("Invalid transaction id '{0}'")]
    InvalidId(String),
}

pub const HELP: &str = "\
Commands:
  search <term>   search transactions (empty term shows all)
  type <value>    set the type filter
  from <date>     set the start date (YYYY-MM-DD)
  to <date>       set the end date (YYYY-MM-DD)
  min <amount>    set the minimum amount
  max <amount>    set the maximum amount
  apply           apply the filters
  clear           clear filters and search
  view <id>       show transaction details
  close           close the detail view
  reload          reload statistics and transactions
  help            show this help
  quit            exit
";

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "search" | "s" => Command::Search(rest.to_string()),
            "type" => Command::Set(FilterField::Type, rest.to_string()),
            "from" => Command::Set(FilterField::StartDate, rest.to_string()),
            "to" => Command::Set(FilterField::EndDate, rest.to_string()),
            "min" => Command::Set(FilterField::MinAmount, rest.to_string()),
            "max" => Command::Set(FilterField::MaxAmount, rest.to_string()),
            "apply" => Command::Apply,
            "clear" => Command::Clear,
            "view" | "show" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingId("view"));
                }
                let id = rest
                    .parse()
                    .map_err(|_| CommandError::InvalidId(rest.to_string()))?;
                Command::View(id)
            }
            "close" => Command::Close,
            "reload" | "refresh" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}
