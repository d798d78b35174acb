//! Line-oriented user commands for the interactive front end.
//!
//! | Input          | Result                                        |
//! |----------------|-----------------------------------------------|
//! | `/trending/2`  | navigate to a location                        |
//! | `open N`       | open the N-th listed movie                    |
//! | `fav N`        | toggle favorite on the N-th listed movie      |
//! | `fav`          | toggle favorite on the details page           |
//! | `page N`       | jump to page N                                |
//! | `search TEXT`  | search for TEXT from page 1                   |
//! | `back`         | go back                                       |
//! | `dark`         | toggle dark mode                              |
//! | `quit`, `q`    | exit                                          |

use super::handler::Event;
use crate::routes::Route;

/// Outcome of parsing one input line.
#[derive(Debug)]
pub enum Command {
    Event(Event),
    Quit,
    /// Blank line; nothing to do.
    Empty,
    /// Unrecognized input, carrying a hint for the user.
    Unknown(String),
}

/// Parses one line of user input.
///
/// Listing positions are one-based in input and zero-based in the resulting
/// events.
///
/// # Examples
///
/// ```
/// use moviedeck::app::commands::{parse_command, Command};
/// use moviedeck::app::Event;
///
/// assert!(matches!(parse_command("open 2"), Command::Event(Event::OpenListed(1))));
/// assert!(matches!(parse_command("quit"), Command::Quit));
/// ```
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if line.starts_with('/') {
        return Command::Event(Event::Navigate(Route::parse(line)));
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    match (verb.to_ascii_lowercase().as_str(), rest) {
        ("quit" | "q" | "exit", "") => Command::Quit,
        ("back" | "b", "") => Command::Event(Event::GoBack),
        ("dark", "") => Command::Event(Event::ToggleDarkMode),
        ("fav" | "f", "") => Command::Event(Event::ToggleDetailsFavorite),
        ("fav" | "f", position) => {
            listing_index(position).map_or_else(Command::Unknown, |index| {
                Command::Event(Event::ToggleListedFavorite(index))
            })
        }
        ("open" | "o", position) => listing_index(position)
            .map_or_else(Command::Unknown, |index| Command::Event(Event::OpenListed(index))),
        ("page" | "p", input) if !input.is_empty() => {
            Command::Event(Event::PageInput(input.to_string()))
        }
        ("search" | "s", text) if !text.is_empty() => {
            Command::Event(Event::Navigate(Route::search(text)))
        }
        ("home", "") => Command::Event(Event::Navigate(Route::Home)),
        ("trending", "") => Command::Event(Event::Navigate(Route::Trending { page: 1 })),
        ("favorites", "") => Command::Event(Event::Navigate(Route::Favorites)),
        _ => Command::Unknown(format!("unknown command: {line}")),
    }
}

fn listing_index(position: &str) -> Result<usize, String> {
    match position.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("'{position}' is not a listing position")),
    }
}
