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

use crate::argument::Argument;
use serde::{Deserialize, Serialize};

/// The name of the sub-command appended to every root command, which prints
/// the root command's help.
pub const HELP_COMMAND_NAME: &str = "help";
const HELP_COMMAND_DESCRIPTION: &str = "Display help.";

/// Compares two command or argument names the way user input is matched
/// against a definition: ignoring case.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// A Command is one node of a slash command definition. The root command and
/// all of its (arbitrarily nested) sub-commands share this shape.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// The word which selects this command, matched case-insensitively.
    pub name: String,
    /// A human-readable description, used in help output.
    pub description: String,
    /// The arguments this command accepts. Their order has no effect on
    /// parsing; positions are explicit.
    #[serde(default)]
    pub arguments: Vec<Argument>,
    /// This command's sub-commands, in declaration order.
    #[serde(default)]
    pub subcommands: Vec<Command>,
    /// If true, invoking this command without naming one of its sub-commands
    /// is an error.
    #[serde(default)]
    pub sub_command_required: bool,
    #[serde(skip)]
    paths: Vec<String>,
    #[serde(skip)]
    builtin_help: bool,
}

impl Command {
    /// Constructs a new Command with no arguments and no sub-commands.
    pub fn new(name: &str, description: &str) -> Command {
        Command {
            name: name.to_owned(),
            description: description.to_owned(),
            arguments: vec![],
            subcommands: vec![],
            sub_command_required: false,
            paths: vec![],
            builtin_help: false,
        }
    }

    /// Adds an argument to this command.
    pub fn with_argument(mut self, argument: Argument) -> Command {
        self.arguments.push(argument);
        self
    }

    /// Adds a sub-command to this command.
    pub fn with_subcommand(mut self, subcommand: Command) -> Command {
        self.subcommands.push(subcommand);
        self
    }

    /// Marks whether or not a sub-command must be given.
    pub fn with_sub_command_required(mut self, required: bool) -> Command {
        self.sub_command_required = required;
        self
    }

    /// Returns this command's canonical path: its ancestors' names and its own,
    /// joined by single spaces, with case as declared. Before the definition
    /// has been prepared by `SlashCommand`, this is just the command's name.
    pub fn path(&self) -> &str {
        self.paths.first().map_or(self.name.as_str(), |p| p.as_str())
    }

    /// Returns every precomputed path for this command. Only the first one is
    /// ever matched against input; see `path`.
    pub fn paths(&self) -> &[String] {
        self.paths.as_slice()
    }

    /// Returns how many names make up this command's canonical path; the root
    /// has a depth of one.
    pub fn depth(&self) -> usize {
        self.path().split(' ').count()
    }

    /// Returns true if this is the built-in help sub-command.
    pub fn is_help(&self) -> bool {
        self.builtin_help
    }

    /// Returns an iterator over this command and all of its descendants, in
    /// depth-first declaration order.
    pub fn iter(&self) -> CommandIter<'_> {
        CommandIter { stack: vec![self] }
    }

    /// Locates the command (this one or a descendant) whose canonical path
    /// equals the given path, ignoring case.
    pub fn find(&self, path: &str) -> Option<&Command> {
        self.iter().find(|c| names_match(c.path(), path))
    }

    /// Recursively computes canonical paths for this command and everything
    /// below it. This must be done on the owned tree, so that the results stick.
    pub(crate) fn assign_paths(&mut self, parent: Option<&str>) {
        let path = match parent {
            None => self.name.clone(),
            Some(parent) => format!("{} {}", parent, self.name),
        };
        for subcommand in self.subcommands.iter_mut() {
            subcommand.assign_paths(Some(path.as_str()));
        }
        self.paths = vec![path];
    }

    /// Appends the built-in help sub-command as this command's last child.
    pub(crate) fn push_help(&mut self) {
        let mut help = Command::new(HELP_COMMAND_NAME, HELP_COMMAND_DESCRIPTION);
        help.builtin_help = true;
        help.assign_paths(Some(self.path()));
        self.subcommands.push(help);
    }
}

/// An iterator over a command tree, in depth-first pre-order.
pub struct CommandIter<'a> {
    stack: Vec<&'a Command>,
}

impl<'a> Iterator for CommandIter<'a> {
    type Item = &'a Command;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.subcommands.iter().rev());
        Some(next)
    }
}
