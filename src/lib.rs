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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! slashparse parses chat-style slash commands (e.g.
//! `/print quote author "Ben Franklin"`) against a declarative definition of
//! the command, its arguments, and its sub-commands, and dispatches them to
//! caller-provided handlers.

/// argument defines the arguments a command accepts.
pub mod argument;
/// bind maps tokens onto a command's declared arguments.
pub mod bind;
/// command defines the tree of commands and sub-commands.
pub mod command;
/// definition loads and validates slash command definitions.
pub mod definition;
/// error defines the errors slashparse can produce.
pub mod error;
/// handler defines the registry of callbacks which implement commands.
pub mod handler;
/// help renders Markdown help text for a definition.
pub mod help;
/// resolve matches input against a definition's command paths.
pub mod resolve;
/// slash_command ties definitions, parsing and dispatch together.
pub mod slash_command;
/// tokenize splits argument strings into quote-aware tokens.
pub mod tokenize;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::argument::{ArgType, Argument};
pub use self::bind::Values;
pub use self::command::Command;
pub use self::error::{Error, Result};
pub use self::handler::{CommandCallback, CommandResult, HandlerRegistry, HandlerTable};
pub use self::slash_command::SlashCommand;
pub use self::tokenize::tokenize;

#[cfg(test)]
mod tests;
