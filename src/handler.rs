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

use crate::bind::Values;
use crate::error::Result;
use std::collections::HashMap;
use std::fmt;

/// The result of executing a slash command: the text to show the user.
pub type CommandResult = Result<String>;

/// The caller-provided callback which implements a particular command.
pub type CommandCallback<'a> = Box<dyn Fn(&Values) -> CommandResult + 'a>;

/// A HandlerRegistry maps canonical command paths to the callbacks which
/// implement them. Paths are matched case-insensitively.
///
/// Registration needs `&mut self`, so callers which share a registry across
/// threads must provide their own synchronization.
pub trait HandlerRegistry<'a> {
    /// Registers the callback for the given path, returning the previously
    /// registered callback (if any).
    fn insert(
        &mut self,
        path: &str,
        callback: CommandCallback<'a>,
    ) -> Option<CommandCallback<'a>>;

    /// Looks up the callback registered for the given path.
    fn get(&self, path: &str) -> Option<&CommandCallback<'a>>;
}

/// HandlerTable is the default HandlerRegistry, a plain keyed table.
#[derive(Default)]
pub struct HandlerTable<'a> {
    callbacks: HashMap<String, CommandCallback<'a>>,
}

impl<'a> HandlerTable<'a> {
    /// Constructs a new, empty HandlerTable.
    pub fn new() -> Self {
        HandlerTable {
            callbacks: HashMap::new(),
        }
    }
}

impl<'a> HandlerRegistry<'a> for HandlerTable<'a> {
    fn insert(
        &mut self,
        path: &str,
        callback: CommandCallback<'a>,
    ) -> Option<CommandCallback<'a>> {
        self.callbacks.insert(path.to_lowercase(), callback)
    }

    fn get(&self, path: &str) -> Option<&CommandCallback<'a>> {
        self.callbacks.get(&path.to_lowercase())
    }
}

impl<'a> fmt::Debug for HandlerTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut paths: Vec<&String> = self.callbacks.keys().collect();
        paths.sort();
        f.debug_struct("HandlerTable").field("paths", &paths).finish()
    }
}
