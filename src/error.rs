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

use thiserror::Error;

/// Join a list of names the way an English sentence would: "a", "a or b",
/// "a, b, and c". `conjunction` is only used between exactly two items.
pub(crate) fn english_list(items: &[String], conjunction: &str) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        2 => format!("{} {} {}", items[0], conjunction, items[1]),
        n => format!("{}, and {}", items[..n - 1].join(", "), items[n - 1]),
    }
}

fn missing_fields_message(fields: &[String]) -> String {
    match fields.len() {
        1 => format!("required field {} is missing", fields[0]),
        _ => format!(
            "required fields {} are missing",
            english_list(fields, "and")
        ),
    }
}

/// Error describes everything which can go wrong while loading a slash
/// command definition, or while parsing and executing a slash command
/// string against it.
#[derive(Debug, Error)]
pub enum Error {
    /// The leading word of the input didn't match any command, or it matched a
    /// root command which can't be invoked without a sub-command.
    #[error("/{command} is not a valid command. Please see /{root} help")]
    CommandNotFound {
        /// The unrecognized command word, with its leading slash removed.
        command: String,
        /// The name of the root command, used to point at its help.
        root: String,
    },
    /// A sub-command which requires a further sub-command was given without
    /// one.
    #[error(
        "/{path} requires an additional command. Try adding {}. Please see /{root} help for more info",
        english_list(.options, "or")
    )]
    RequiredSubCommand {
        /// The canonical path of the matched command.
        path: String,
        /// The names of the sub-commands which would have been accepted.
        options: Vec<String>,
        /// The name of the root command.
        root: String,
    },
    /// One or more required arguments were not provided, either by position or
    /// by name. Fields are listed in declaration order.
    #[error(
        "{}, see /{help_command} help for more details",
        missing_fields_message(.fields)
    )]
    MissingArguments {
        /// The names of the missing arguments.
        fields: Vec<String>,
        /// The lower-cased root command name.
        help_command: String,
    },
    /// A `-x` style parameter didn't match any declared short name.
    #[error("Unknown parameter '-{parameter}', see /{path} help for more details")]
    UnknownParameter {
        /// The short name, without its leading dash.
        parameter: String,
        /// The canonical path of the command the parameter was given to.
        path: String,
    },
    /// The command resolved fine, but nobody registered a handler for it.
    #[error("No handler set for /{0}")]
    NoHandler(String),
    /// A handler was registered for a path which no command has.
    #[error("'{0}' is not the path of any command in this definition")]
    UnknownCommandPath(String),
    /// The definition document is structurally invalid.
    #[error("Slash command definition is not valid: {0}")]
    InvalidDefinition(String),
    /// A failure reported by a caller-provided handler.
    #[error("{0}")]
    Handler(String),
    /// An error writing formatted help text.
    #[error("{0}")]
    Fmt(#[from] std::fmt::Error),
    /// An I/O error, generally encountered when reading a definition file.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// An error deserializing a JSON definition.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// An error deserializing a YAML definition.
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A Result type which uses slashparse's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
