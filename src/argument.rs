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

use serde::{Deserialize, Serialize};
use std::fmt;

/// ArgType is the declared type of an argument. Values are never parsed or
/// checked against it; it only changes how tokens are bound (`RemainingText`
/// and `Switch`) and how the argument is described in help output.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ArgType {
    /// A single word.
    #[serde(rename = "word", alias = "text")]
    Word,
    /// A numeric value.
    #[serde(rename = "number")]
    Number,
    /// Text which may contain spaces, if quoted.
    #[serde(rename = "quoted-text", alias = "quoted text")]
    QuotedText,
    /// A calendar date.
    #[serde(rename = "date")]
    Date,
    /// A time of day.
    #[serde(rename = "time")]
    Time,
    /// Consumes every token from its position to the end of the input.
    #[serde(rename = "remaining-text", alias = "remaining text")]
    RemainingText,
    /// A named flag which takes no value; its presence binds it to "on".
    #[serde(rename = "switch")]
    Switch,
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ArgType::Word => "word",
            ArgType::Number => "number",
            ArgType::QuotedText => "quoted-text",
            ArgType::Date => "date",
            ArgType::Time => "time",
            ArgType::RemainingText => "remaining-text",
            ArgType::Switch => "switch",
        })
    }
}

/// An Argument is a single value a command accepts, either by its position
/// among the tokens following the command path, or by name (`--name value`,
/// `-s value`).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    /// The argument's name, unique within its command. This is both the key
    /// in the parsed values and the long name accepted as `--name`.
    pub name: String,
    /// How the argument binds, and what kind of value it describes.
    #[serde(rename = "argtype")]
    pub arg_type: ArgType,
    /// A human-readable description, used in help output.
    pub description: String,
    /// A literal value used when the argument isn't given. An empty string is
    /// treated the same as no default at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// A custom message describing what a valid value looks like.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
    /// The zero-based token slot this argument binds from. Arguments without a
    /// position can only be given by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Whether the argument must be given.
    #[serde(default)]
    pub required: bool,
    /// An alias accepted with a single dash, as in `-t value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl Argument {
    /// Constructs an optional, named-only Argument with no default value.
    pub fn new(name: &str, arg_type: ArgType, description: &str) -> Argument {
        Argument {
            name: name.to_owned(),
            arg_type: arg_type,
            description: description.to_owned(),
            default: None,
            error_msg: None,
            position: None,
            required: false,
            short_name: None,
        }
    }

    /// Constructs a positional Argument bound from the given token slot.
    pub fn positional(
        name: &str,
        arg_type: ArgType,
        description: &str,
        position: usize,
        required: bool,
    ) -> Argument {
        Argument {
            position: Some(position),
            required: required,
            ..Argument::new(name, arg_type, description)
        }
    }

    /// Constructs a switch, which is only ever given by name and never takes a
    /// value.
    pub fn switch(name: &str, description: &str) -> Argument {
        Argument::new(name, ArgType::Switch, description)
    }

    /// Sets the argument's default value.
    pub fn with_default(mut self, default: &str) -> Argument {
        self.default = Some(default.to_owned());
        self
    }

    /// Sets the argument's short name.
    pub fn with_short_name(mut self, short_name: &str) -> Argument {
        self.short_name = Some(short_name.to_owned());
        self
    }

    /// Sets the argument's custom error message.
    pub fn with_error_msg(mut self, error_msg: &str) -> Argument {
        self.error_msg = Some(error_msg.to_owned());
        self
    }

    /// Returns this argument's default value, if it has a non-empty one.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_ref().map(|d| d.as_str()).filter(|d| !d.is_empty())
    }

    /// Returns true if this argument is a switch.
    pub fn is_switch(&self) -> bool {
        self.arg_type == ArgType::Switch
    }
}
