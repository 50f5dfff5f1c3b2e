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
use crate::command::names_match;
use crate::error::*;
use log::{trace, warn};
use std::collections::{HashMap, HashSet};

/// Values maps argument names to the (always textual) values they were bound
/// to.
pub type Values = HashMap<String, String>;

/// The value a switch is bound to when it is present.
pub const SWITCH_ON: &str = "on";

fn insert(values: &mut Values, missing: &mut HashSet<String>, name: &str, value: String) {
    trace!("binding argument '{}' to {:?}", name, value);
    missing.remove(name);
    values.insert(name.to_owned(), value);
}

/// Binds arguments by their declared positions. This stops for good at the
/// first token which looks like a named argument; required arguments whose
/// slot is simply absent are added to `missing`.
fn bind_positional(
    tokens: &[String],
    arguments: &[Argument],
    values: &mut Values,
    missing: &mut HashSet<String>,
) {
    let mut positional: Vec<(usize, &Argument)> = arguments
        .iter()
        .filter(|a| !a.is_switch())
        .filter_map(|a| a.position.map(|p| (p, a)))
        .collect();
    positional.sort_by_key(|&(p, _)| p);

    for (position, argument) in positional {
        match tokens.get(position) {
            Some(token) if token.starts_with('-') => {
                trace!("positional binding stopped at {:?}", token);
                break;
            }
            Some(token) => {
                let value = match argument.arg_type {
                    ArgType::RemainingText => tokens[position..].join(" "),
                    _ => token.clone(),
                };
                insert(values, missing, argument.name.as_str(), value);
            }
            None => {
                if argument.required {
                    missing.insert(argument.name.clone());
                }
            }
        }
    }
}

/// Binds `--name value`, `--switch` and `-s value` style arguments, scanning
/// the entire token list. Only the long form of a switch leaves the next token
/// alone.
fn bind_named(
    tokens: &[String],
    arguments: &[Argument],
    command_path: &str,
    values: &mut Values,
    missing: &mut HashSet<String>,
) -> Result<()> {
    let mut tokens = tokens.iter();
    while let Some(token) = tokens.next() {
        let (name, argument) = if let Some(long) = token.strip_prefix("--") {
            let argument = arguments.iter().find(|a| names_match(a.name.as_str(), long));
            (argument.map_or(long, |a| a.name.as_str()), argument)
        } else if let Some(short) = token.strip_prefix('-') {
            match arguments
                .iter()
                .find(|a| a.short_name.as_deref() == Some(short))
            {
                None => {
                    return Err(Error::UnknownParameter {
                        parameter: short.to_owned(),
                        path: command_path.to_owned(),
                    })
                }
                Some(a) => (a.name.as_str(), Some(a)),
            }
        } else {
            continue;
        };

        if token.starts_with("--") && argument.map_or(false, |a| a.is_switch()) {
            insert(values, missing, name, SWITCH_ON.to_owned());
            continue;
        }
        match tokens.next() {
            Some(value) => insert(values, missing, name, value.clone()),
            None => warn!("ignoring '{}', which has no value", token),
        }
    }
    Ok(())
}

/// Maps the given tokens onto the given declared arguments. Defaults are
/// applied first, then positional arguments, then named ones; later bindings
/// override earlier ones.
///
/// `root_name` is the name of the root command, which missing argument errors
/// point to for help. `command_path` is the canonical path of the command the
/// arguments belong to, which unknown parameter errors point to instead.
pub fn bind(
    tokens: &[String],
    arguments: &[Argument],
    root_name: &str,
    command_path: &str,
) -> Result<Values> {
    let help_command = root_name.to_lowercase();
    let mut values: Values = arguments
        .iter()
        .filter_map(|a| a.default_value().map(|d| (a.name.clone(), d.to_owned())))
        .collect();

    let mut missing: HashSet<String> = arguments
        .iter()
        .filter(|a| a.required && a.position.is_none())
        .map(|a| a.name.clone())
        .collect();

    bind_positional(tokens, arguments, &mut values, &mut missing);
    bind_named(
        tokens,
        arguments,
        command_path,
        &mut values,
        &mut missing,
    )?;

    if !missing.is_empty() {
        return Err(Error::MissingArguments {
            fields: arguments
                .iter()
                .filter(|a| missing.contains(&a.name))
                .map(|a| a.name.clone())
                .collect(),
            help_command,
        });
    }
    Ok(values)
}
