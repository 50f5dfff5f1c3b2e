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

use crate::bind::{bind, Values};
use crate::command::{Command, HELP_COMMAND_NAME};
use crate::definition;
use crate::error::*;
use crate::handler::{CommandCallback, CommandResult, HandlerRegistry, HandlerTable};
use crate::help;
use crate::resolve::resolve;
use crate::tokenize::tokenize;
use log::debug;
use std::marker::PhantomData;
use std::path::Path;

/// A SlashCommand is a prepared slash command definition (with canonical paths
/// computed, and the built-in help sub-command added), together with the
/// handlers which implement its commands.
pub struct SlashCommand<'a, R: HandlerRegistry<'a> = HandlerTable<'a>> {
    root: Command,
    handlers: R,
    _lifetime: PhantomData<&'a ()>,
}

impl<'a> SlashCommand<'a, HandlerTable<'a>> {
    /// Prepares the given definition for parsing, using the default handler
    /// table. The definition is validated first.
    pub fn new(root: Command) -> Result<Self> {
        SlashCommand::with_registry(root, HandlerTable::new())
    }

    /// Parses, validates and prepares a YAML definition.
    pub fn from_yaml(text: &str) -> Result<Self> {
        SlashCommand::new(definition::from_yaml(text)?)
    }

    /// Parses, validates and prepares a JSON definition.
    pub fn from_json(text: &str) -> Result<Self> {
        SlashCommand::new(definition::from_json(text)?)
    }

    /// Reads, validates and prepares the definition stored in the given file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        SlashCommand::new(definition::from_path(path)?)
    }
}

impl<'a, R: HandlerRegistry<'a>> SlashCommand<'a, R> {
    /// Prepares the given definition for parsing, dispatching to handlers
    /// through the given registry. The built-in help handler is registered
    /// immediately.
    pub fn with_registry(mut root: Command, mut handlers: R) -> Result<Self> {
        definition::validate(&root)?;
        root.assign_paths(None);
        root.push_help();

        let help_text = help::render_help(&root)?;
        handlers.insert(
            format!("{} {}", root.path(), HELP_COMMAND_NAME).as_str(),
            Box::new(move |_: &Values| Ok(help_text.clone())),
        );

        Ok(SlashCommand {
            root: root,
            handlers: handlers,
            _lifetime: PhantomData,
        })
    }

    /// Returns the prepared definition, e.g. for rendering custom help.
    pub fn definition(&self) -> &Command {
        &self.root
    }

    /// Returns this command's Markdown help text.
    pub fn help(&self) -> Result<String> {
        help::render_help(&self.root)
    }

    /// Registers the handler for the command with the given canonical path
    /// (e.g. "print quote author"), matched case-insensitively. Any previously
    /// registered handler for that path is replaced.
    pub fn set_handler(&mut self, path: &str, callback: CommandCallback<'a>) -> Result<()> {
        let path = match self.root.find(path) {
            None => return Err(Error::UnknownCommandPath(path.to_owned())),
            Some(command) => command.path(),
        };
        debug!("registering handler for '{}'", path);
        self.handlers.insert(path, callback);
        Ok(())
    }

    /// Parses the given slash command string, returning the canonical path of
    /// the command it invokes and its argument values.
    pub fn parse(&self, input: &str) -> Result<(String, Values)> {
        let resolved = resolve(input, &self.root)?;
        let tokens = tokenize(resolved.remainder);
        let values = bind(
            tokens.as_slice(),
            resolved.command.arguments.as_slice(),
            self.root.name.as_str(),
            resolved.path(),
        )?;
        Ok((resolved.path().to_owned(), values))
    }

    /// Parses the given slash command string, and calls the handler registered
    /// for the command it invokes. Parsing errors are returned as-is; their
    /// messages are suitable for showing to the user.
    pub fn execute(&self, input: &str) -> CommandResult {
        let (path, values) = self.parse(input)?;
        match self.handlers.get(path.as_str()) {
            None => Err(Error::NoHandler(path)),
            Some(callback) => {
                debug!("dispatching '{}' with {:?}", path, values);
                callback(&values)
            }
        }
    }
}
