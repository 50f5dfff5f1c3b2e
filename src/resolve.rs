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

use crate::command::{names_match, Command};
use crate::error::*;
use log::debug;
use std::cmp::Reverse;

/// The result of matching a raw slash command string against a definition.
#[derive(Debug)]
pub struct Resolved<'c, 'i> {
    /// The deepest command whose path matched the start of the input.
    pub command: &'c Command,
    /// Everything in the input after the matched path, ready to be tokenized.
    pub remainder: &'i str,
}

impl<'c, 'i> Resolved<'c, 'i> {
    /// The canonical path of the matched command.
    pub fn path(&self) -> &'c str {
        self.command.path()
    }
}

/// Returns the part of `text` which follows `prefix`, if `text` starts with
/// `prefix` when case is ignored.
fn strip_prefix_ignore_case<'i>(text: &'i str, prefix: &str) -> Option<&'i str> {
    let mut rest = text.chars();
    for expected in prefix.chars() {
        let actual = rest.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(rest.as_str())
}

/// Matches the leading text of a raw slash command string (e.g.
/// `/print quote author "Ben Franklin"`) against the canonical paths of the
/// given root command's descendants, case-insensitively. Deeper paths are tried
/// first, and earlier siblings win ties. If no descendant matches, the first
/// word must name the root itself.
///
/// The root must have been prepared by `SlashCommand`, so that canonical paths
/// have been computed. An error is returned if the first word doesn't name the
/// root command, or if the matched command requires a sub-command which wasn't
/// given.
pub fn resolve<'c, 'i>(input: &'i str, root: &'c Command) -> Result<Resolved<'c, 'i>> {
    let trimmed = input.trim_start();
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);

    let mut candidates: Vec<&Command> = root.iter().skip(1).collect();
    candidates.sort_by_key(|c| Reverse(c.depth()));
    let matched = candidates.into_iter().find_map(|command| {
        strip_prefix_ignore_case(trimmed, command.path()).map(|rest| (command, rest))
    });

    let (command, remainder) = match matched {
        Some((command, _)) if command.sub_command_required => {
            return Err(Error::RequiredSubCommand {
                path: command.path().to_owned(),
                options: command.subcommands.iter().map(|s| s.name.clone()).collect(),
                root: root.name.clone(),
            });
        }
        Some(matched) => matched,
        None => {
            let command_word = trimmed.split_whitespace().next().unwrap_or("");
            if !names_match(command_word, root.name.as_str()) {
                return Err(Error::CommandNotFound {
                    command: command_word.to_owned(),
                    root: root.name.clone(),
                });
            }
            if root.sub_command_required {
                return Err(Error::CommandNotFound {
                    command: root.name.clone(),
                    root: root.name.clone(),
                });
            }
            let start = trimmed.len() - trimmed.trim_start().len();
            (root, &trimmed[start + command_word.len()..])
        }
    };

    debug!("resolved {:?} to command path '{}'", input, command.path());
    Ok(Resolved {
        command: command,
        remainder: remainder,
    })
}
