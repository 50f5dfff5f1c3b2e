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
use crate::command::Command;
use crate::error::*;
use std::fmt::Write;

/// Returns a one-line usage summary for the given command, e.g.
/// `/print quote author [authorName]`.
pub fn usage(command: &Command) -> String {
    let mut usage = format!("/{}", command.path().to_lowercase());

    let mut positional: Vec<&Argument> = command
        .arguments
        .iter()
        .filter(|a| a.position.is_some() && !a.is_switch())
        .collect();
    positional.sort_by_key(|a| a.position);
    for argument in positional {
        let ellipsis = match argument.arg_type {
            ArgType::RemainingText => "...",
            _ => "",
        };
        match argument.required {
            true => usage.push_str(&format!(" <{}{}>", argument.name, ellipsis)),
            false => usage.push_str(&format!(" [{}{}]", argument.name, ellipsis)),
        }
    }

    for argument in command
        .arguments
        .iter()
        .filter(|a| a.position.is_none() || a.is_switch())
    {
        match (argument.is_switch(), argument.required) {
            (true, _) => usage.push_str(&format!(" [--{}]", argument.name)),
            (false, true) => usage.push_str(&format!(" --{} <value>", argument.name)),
            (false, false) => usage.push_str(&format!(" [--{} <value>]", argument.name)),
        }
    }
    usage
}

fn write_arguments<W: Write>(f: &mut W, command: &Command) -> Result<()> {
    if command.arguments.is_empty() {
        return Ok(());
    }

    f.write_str("\n| Argument | Type | Required | Default | Description |\n")?;
    f.write_str("| --- | --- | --- | --- | --- |\n")?;
    for argument in command.arguments.iter() {
        f.write_fmt(format_args!("| `--{}`", argument.name))?;
        if let Some(short_name) = argument.short_name.as_ref() {
            f.write_fmt(format_args!(", `-{}`", short_name))?;
        }
        f.write_fmt(format_args!(
            " | {} | {} | {} | {}",
            argument.arg_type,
            match argument.required {
                true => "yes",
                false => "no",
            },
            argument.default_value().unwrap_or(""),
            argument.description
        ))?;
        if let Some(error_msg) = argument.error_msg.as_ref() {
            f.write_fmt(format_args!(" {}", error_msg))?;
        }
        f.write_str(" |\n")?;
    }
    Ok(())
}

fn write_command<W: Write>(f: &mut W, command: &Command) -> Result<()> {
    f.write_fmt(format_args!("{}\n", command.description))?;
    f.write_fmt(format_args!("\n`{}`\n", usage(command)))?;
    write_arguments(f, command)?;
    Ok(())
}

/// Writes Markdown help for the given root command and every sub-command
/// beneath it.
pub fn write_help<W: Write>(f: &mut W, root: &Command) -> Result<()> {
    f.write_fmt(format_args!("#### /{} Help\n\n", root.name))?;
    write_command(f, root)?;

    for command in root.iter().skip(1) {
        f.write_fmt(format_args!("\n##### /{}\n\n", command.path().to_lowercase()))?;
        write_command(f, command)?;
    }
    Ok(())
}

/// Renders Markdown help for the given root command into a String.
pub fn render_help(root: &Command) -> Result<String> {
    let mut help = String::new();
    write_help(&mut help, root)?;
    Ok(help)
}
