// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::argument::{ArgType, Argument};
use crate::command::{names_match, Command, HELP_COMMAND_NAME};
use crate::error::*;
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn invalid<T>(message: String) -> Result<T> {
    Err(Error::InvalidDefinition(message))
}

fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return invalid(format!("{} names must not be empty", kind));
    }
    if name.chars().any(char::is_whitespace) {
        return invalid(format!("{} name '{}' contains whitespace", kind, name));
    }
    Ok(())
}

fn validate_arguments(command: &Command) -> Result<()> {
    let mut names: HashSet<String> = HashSet::new();
    let mut short_names: HashSet<&str> = HashSet::new();
    let mut positions: HashSet<usize> = HashSet::new();

    for argument in command.arguments.iter() {
        validate_name("argument", argument.name.as_str())?;
        if !names.insert(argument.name.to_lowercase()) {
            return invalid(format!(
                "'{}' declares argument '{}' more than once",
                command.name, argument.name
            ));
        }
        if let Some(short_name) = argument.short_name.as_deref() {
            validate_name("short", short_name)?;
            if !short_names.insert(short_name) {
                return invalid(format!(
                    "'{}' declares short name '{}' more than once",
                    command.name, short_name
                ));
            }
        }
        if let Some(position) = argument.position {
            if argument.is_switch() {
                return invalid(format!(
                    "switch '{}' can't have a position",
                    argument.name
                ));
            }
            if !positions.insert(position) {
                return invalid(format!(
                    "'{}' declares position {} more than once",
                    command.name, position
                ));
            }
        }
    }

    let remaining: Vec<&Argument> = command
        .arguments
        .iter()
        .filter(|a| a.arg_type == ArgType::RemainingText)
        .collect();
    if remaining.len() > 1 {
        return invalid(format!(
            "'{}' declares more than one {} argument",
            command.name,
            ArgType::RemainingText
        ));
    }
    if let Some(argument) = remaining.first() {
        match argument.position {
            None => {
                return invalid(format!(
                    "{} argument '{}' needs a position",
                    ArgType::RemainingText,
                    argument.name
                ))
            }
            Some(p) if positions.iter().any(|&other| other > p) => {
                return invalid(format!(
                    "{} argument '{}' must have the highest position",
                    ArgType::RemainingText,
                    argument.name
                ))
            }
            _ => {}
        }
    }
    Ok(())
}

fn validate_command(command: &Command, is_root: bool) -> Result<()> {
    validate_name("command", command.name.as_str())?;
    validate_arguments(command)?;

    if command.sub_command_required && command.subcommands.is_empty() {
        return invalid(format!(
            "'{}' requires a sub-command, but has none",
            command.name
        ));
    }

    let mut names: HashSet<String> = HashSet::new();
    for subcommand in command.subcommands.iter() {
        if is_root && names_match(subcommand.name.as_str(), HELP_COMMAND_NAME) {
            return invalid(format!(
                "the '{}' sub-command is reserved",
                HELP_COMMAND_NAME
            ));
        }
        if !names.insert(subcommand.name.to_lowercase()) {
            return invalid(format!(
                "'{}' declares sub-command '{}' more than once",
                command.name, subcommand.name
            ));
        }
        validate_command(subcommand, false)?;
    }
    Ok(())
}

/// Checks that the given definition is structurally sound: names are
/// non-empty single words, names and positions don't collide, at most one
/// remaining-text argument exists per command (at its highest position), and
/// commands which require a sub-command actually have some.
pub fn validate(root: &Command) -> Result<()> {
    validate_command(root, true)
}

/// Parses and validates a definition written in YAML.
pub fn from_yaml(text: &str) -> Result<Command> {
    let root: Command = serde_yaml::from_str(text)?;
    validate(&root)?;
    Ok(root)
}

/// Parses and validates a definition written in JSON.
pub fn from_json(text: &str) -> Result<Command> {
    let root: Command = serde_json::from_str(text)?;
    validate(&root)?;
    Ok(root)
}

/// Reads, parses and validates the definition stored in the given file. Files
/// with a `.json` extension are read as JSON, and anything else as YAML.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Command> {
    let path = path.as_ref();
    debug!("loading slash command definition from {}", path.display());
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("json"));
    if is_json {
        from_json(text.as_str())
    } else {
        from_yaml(text.as_str())
    }
}
