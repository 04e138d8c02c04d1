//! Shell command parsing
//!
//! Turns one line of user input into actions for [`AppState`](crate::app::AppState)
//! or a display request.

use crate::app::{Action, FilterKey};
use crate::error::{RollError, RollResult};
use crate::form::Field;
use crate::view::{Direction, SortField};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whitespace-separated tokens; double-quoted runs may contain spaces
    static ref TOKEN: Regex = Regex::new(r#"(?:[^\s"]+|"[^"]*")+"#).unwrap();
}

pub const HELP: &str = "\
Commands:
  add roll=.. name=\"..\" dept=.. year=.. cgpa=..   fill the form and save
  form field=value ...                             fill form fields
  save | clear | show                              save, clear or show the form
  edit <roll> | delete <roll>                      load into the form / remove
  search [text]                                    fuzzy search by roll or name
  filter dept=<CSE|ECE|ME|CE|EE> year=<1-4>        empty value clears a filter
  sort <name|cgpa> [asc|desc]                      no direction toggles
  reset                                            clear search, filters, sort
  list | theme | check | help | quit";

/// What a parsed line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Apply these actions in order
    Apply(Vec<Action>),
    List,
    ShowForm,
    Help,
    Quit,
}

fn tokenize(line: &str) -> Vec<String> {
    TOKEN
        .find_iter(line)
        .map(|m| m.as_str().replace('"', ""))
        .collect()
}

fn field_assignments(args: &[String]) -> RollResult<Vec<Action>> {
    args.iter()
        .map(|arg| {
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| RollError::Command(format!("expected field=value, got '{}'", arg)))?;
            let field = key.parse::<Field>().map_err(RollError::Command)?;
            Ok(Action::SetField(field, value.to_string()))
        })
        .collect()
}

fn filter_assignments(args: &[String]) -> RollResult<Vec<Action>> {
    if args.is_empty() {
        return Err(RollError::Command("usage: filter dept=.. year=..".to_string()));
    }
    args.iter()
        .map(|arg| {
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| RollError::Command(format!("expected key=value, got '{}'", arg)))?;
            let key = match key.to_lowercase().as_str() {
                "dept" | "department" => FilterKey::Dept,
                "year" => FilterKey::Year,
                other => return Err(RollError::Command(format!("cannot filter by '{}'", other))),
            };
            Ok(Action::SetFilter(key, value.to_string()))
        })
        .collect()
}

fn single_arg<'a>(cmd: &str, args: &'a [String]) -> RollResult<&'a str> {
    match args {
        [one] => Ok(one.as_str()),
        _ => Err(RollError::Command(format!("usage: {} <roll>", cmd))),
    }
}

/// Parse one input line; blank lines give `None`
pub fn parse_line(line: &str) -> RollResult<Option<ShellCommand>> {
    let tokens = tokenize(line);
    let Some((cmd, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match cmd.to_lowercase().as_str() {
        "add" => {
            let mut actions = vec![Action::ClearForm];
            actions.extend(field_assignments(args)?);
            actions.push(Action::Save);
            ShellCommand::Apply(actions)
        }
        "form" | "set" => ShellCommand::Apply(field_assignments(args)?),
        "save" => ShellCommand::Apply(vec![Action::Save]),
        "clear" => ShellCommand::Apply(vec![Action::ClearForm]),
        "show" => ShellCommand::ShowForm,
        "edit" => ShellCommand::Apply(vec![Action::Edit(single_arg(cmd, args)?.to_string())]),
        "delete" | "rm" => {
            ShellCommand::Apply(vec![Action::Delete(single_arg(cmd, args)?.to_string())])
        }
        "search" => ShellCommand::Apply(vec![Action::Search(args.join(" "))]),
        "filter" => ShellCommand::Apply(filter_assignments(args)?),
        "sort" => {
            let action = match args {
                [field] => Action::ToggleSort(field.parse::<SortField>().map_err(RollError::Command)?),
                [field, dir] => Action::SetSort(
                    field.parse::<SortField>().map_err(RollError::Command)?,
                    dir.parse::<Direction>().map_err(RollError::Command)?,
                ),
                _ => return Err(RollError::Command("usage: sort <name|cgpa> [asc|desc]".to_string())),
            };
            ShellCommand::Apply(vec![action])
        }
        "reset" => ShellCommand::Apply(vec![Action::ResetFilters]),
        "theme" => ShellCommand::Apply(vec![Action::ToggleTheme]),
        "check" => ShellCommand::Apply(vec![Action::RunChecks]),
        "list" | "ls" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(RollError::Command(format!("unknown command '{}' (try help)", other))),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(
            tokenize(r#"add name="José Díaz" dept=CSE"#),
            ["add", "name=José Díaz", "dept=CSE"]
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn test_add_fills_then_saves() {
        let cmd = parse_line(r#"add roll=CSE2025-001 name="Ravi K" dept=CSE year=1 cgpa=8"#)
            .unwrap()
            .unwrap();
        let ShellCommand::Apply(actions) = cmd else {
            panic!("expected actions");
        };
        assert_eq!(actions.first(), Some(&Action::ClearForm));
        assert_eq!(actions.last(), Some(&Action::Save));
        assert!(actions.contains(&Action::SetField(Field::Name, "Ravi K".to_string())));
    }

    #[test]
    fn test_search_joins_words() {
        assert_eq!(
            parse_line("search josé díaz").unwrap(),
            Some(ShellCommand::Apply(vec![Action::Search("josé díaz".to_string())]))
        );
        assert_eq!(
            parse_line("search").unwrap(),
            Some(ShellCommand::Apply(vec![Action::Search(String::new())]))
        );
    }

    #[test]
    fn test_sort_forms() {
        assert_eq!(
            parse_line("sort name").unwrap(),
            Some(ShellCommand::Apply(vec![Action::ToggleSort(SortField::Name)]))
        );
        assert_eq!(
            parse_line("sort cgpa desc").unwrap(),
            Some(ShellCommand::Apply(vec![Action::SetSort(SortField::Cgpa, Direction::Desc)]))
        );
        assert!(parse_line("sort year").is_err());
    }

    #[test]
    fn test_filter_clear_value() {
        assert_eq!(
            parse_line("filter dept= year=3").unwrap(),
            Some(ShellCommand::Apply(vec![
                Action::SetFilter(FilterKey::Dept, String::new()),
                Action::SetFilter(FilterKey::Year, "3".to_string()),
            ]))
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse_line("launch"), Err(RollError::Command(_))));
        assert!(matches!(parse_line("form gpa=9"), Err(RollError::Command(_))));
        assert!(matches!(parse_line("edit"), Err(RollError::Command(_))));
    }
}
