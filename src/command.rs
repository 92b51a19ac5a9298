// Parsing of interactive input lines

use crate::app::Event;
use crate::filter::Filter;
use crate::task::Priority;
use clap::{Parser, Subcommand};

/// One line typed at the prompt
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true, disable_version_flag = true)]
#[command(about = "Commands: new, back, filter, toggle, cycle, rm, text, priority, add, dump, help, quit")]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the new-task form
    New,

    /// Return to the task list
    Back,

    /// Switch the filter tab (all, progress, completed)
    Filter { filter: Filter },

    /// Tick or untick the task on a row
    Toggle { row: usize },

    /// Advance the priority badge on a row
    Cycle { row: usize },

    /// Delete the task on a row
    #[command(alias = "delete")]
    Rm { row: usize },

    /// Type the task description
    Text {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Choose the priority (low, medium, high)
    Priority { priority: Priority },

    /// Add the task; words given here replace the description first
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print the visible tasks as JSON
    Dump,

    /// Show available commands
    Help,

    /// Leave the program
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Events to feed the app; empty for commands the front end handles itself
    pub fn into_events(self) -> Vec<Event> {
        match self {
            Command::New => vec![Event::OpenNewTask],
            Command::Back => vec![Event::Back],
            Command::Filter { filter } => vec![Event::SelectFilter(filter)],
            Command::Toggle { row } => vec![Event::ToggleRow(row)],
            Command::Cycle { row } => vec![Event::CycleRow(row)],
            Command::Rm { row } => vec![Event::DeleteRow(row)],
            Command::Text { words } => vec![Event::EditDescription(words.join(" "))],
            Command::Priority { priority } => vec![Event::SelectPriority(priority)],
            Command::Add { words } if words.is_empty() => vec![Event::Submit],
            Command::Add { words } => vec![Event::EditDescription(words.join(" ")), Event::Submit],
            Command::Dump | Command::Help | Command::Quit => Vec::new(),
        }
    }
}

/// Parse a line; `Ok(None)` for blank input
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    let args: Vec<&str> = line.split_whitespace().collect();
    if args.is_empty() {
        return Ok(None);
    }

    let command = Line::try_parse_from(args)?.command;

    // Free text keeps the spacing it was typed with
    let command = match command {
        Command::Text { .. } => Command::Text {
            words: vec![rest_of_line(line).to_string()],
        },
        Command::Add { words } if !words.is_empty() => Command::Add {
            words: vec![rest_of_line(line).to_string()],
        },
        other => other,
    };

    Ok(Some(command))
}

/// Everything after the command word, with outer whitespace trimmed
fn rest_of_line(line: &str) -> &str {
    line.trim()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   \t ").unwrap().is_none());
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse("new"), Command::New);
        assert_eq!(parse("back"), Command::Back);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse("filter progress"),
            Command::Filter {
                filter: Filter::InProgress
            }
        );
        assert_eq!(
            parse("filter completed"),
            Command::Filter {
                filter: Filter::Completed
            }
        );
        assert!(parse_line("filter archived").is_err());
    }

    #[test]
    fn test_parse_row_commands() {
        assert_eq!(parse("toggle 2"), Command::Toggle { row: 2 });
        assert_eq!(parse("cycle 1"), Command::Cycle { row: 1 });
        assert_eq!(parse("delete 3"), Command::Rm { row: 3 });
        assert!(parse_line("toggle two").is_err());
        assert!(parse_line("rm").is_err());
    }

    #[test]
    fn test_parse_text_keeps_spacing() {
        let events = parse("text a  b").into_events();
        assert_eq!(events, vec![Event::EditDescription("a  b".to_string())]);

        let events = parse("  text   Buy  oat\tmilk today  ").into_events();
        assert_eq!(
            events,
            vec![Event::EditDescription("Buy  oat\tmilk today".to_string())]
        );
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(parse("add").into_events(), vec![Event::Submit]);
        assert_eq!(
            parse("add Email boss").into_events(),
            vec![Event::EditDescription("Email boss".to_string()), Event::Submit]
        );
        assert_eq!(
            parse("add Email   boss").into_events(),
            vec![Event::EditDescription("Email   boss".to_string()), Event::Submit]
        );
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(
            parse("priority high").into_events(),
            vec![Event::SelectPriority(Priority::High)]
        );
        assert!(parse_line("priority urgent").is_err());
    }

    #[test]
    fn test_front_end_commands_have_no_events() {
        assert!(parse("dump").into_events().is_empty());
        assert!(parse("quit").into_events().is_empty());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_line("frobnicate").is_err());
    }
}
