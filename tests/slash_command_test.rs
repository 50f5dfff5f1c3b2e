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

use slashparse::{ArgType, Argument, Command, Error, SlashCommand, Values};
use std::cell::Cell;

fn build_todo_command() -> Command {
    Command::new("todo", "Keeps track of things to do.")
        .with_subcommand(
            Command::new("add", "Adds an item.")
                .with_argument(
                    Argument::positional("item", ArgType::RemainingText, "What to do.", 1, true)
                        .with_error_msg("Describe the item in a few words."),
                )
                .with_argument(Argument::positional(
                    "due",
                    ArgType::Date,
                    "When it is due.",
                    0,
                    true,
                ))
                .with_argument(
                    Argument::new("priority", ArgType::Number, "How important it is.")
                        .with_short_name("p")
                        .with_default("3"),
                ),
        )
        .with_subcommand(
            Command::new("list", "Lists items.")
                .with_sub_command_required(true)
                .with_subcommand(Command::new("open", "Lists open items."))
                .with_subcommand(Command::new("done", "Lists finished items.").with_argument(
                    Argument::switch("all", "Include archived items.").with_short_name("a"),
                ))
                .with_subcommand(Command::new("late", "Lists overdue items.")),
        )
}

#[test]
fn test_parse_and_execute() {
    let calls = Cell::new(0);
    let mut slash = SlashCommand::new(build_todo_command()).unwrap();
    slash
        .set_handler(
            "todo add",
            Box::new(|vs: &Values| {
                calls.set(calls.get() + 1);
                Ok(format!("{} (due {}, priority {})", vs["item"], vs["due"], vs["priority"]))
            }),
        )
        .unwrap();

    assert_eq!(
        "buy \"good\" milk (due 2020-01-01, priority 3)",
        slash
            .execute("/todo add 2020-01-01 buy \\\"good\\\" milk")
            .unwrap()
    );
    assert_eq!(
        "call mom (due today, priority 1)",
        slash
            .execute("/todo add --priority 1 --due today --item \"call mom\"")
            .unwrap()
    );
    assert_eq!(2, calls.get());
}

#[test]
fn test_parse_results() {
    let slash = SlashCommand::new(build_todo_command()).unwrap();

    let (path, values) = slash.parse("/Todo List Done --all").unwrap();
    assert_eq!("todo list done", path);
    assert_eq!(Some(&"on".to_owned()), values.get("all"));

    let (path, values) = slash.parse("/todo add --due tomorrow --item call mom").unwrap();
    assert_eq!("todo add", path);
    assert_eq!(Some(&"tomorrow".to_owned()), values.get("due"));
    assert_eq!(Some(&"call".to_owned()), values.get("item"));
    assert_eq!(Some(&"3".to_owned()), values.get("priority"));
}

#[test]
fn test_errors() {
    let slash = SlashCommand::new(build_todo_command()).unwrap();

    assert_eq!(
        "/todo list requires an additional command. Try adding open, done, and late. Please see /todo help for more info",
        slash.parse("/todo list").unwrap_err().to_string()
    );
    assert_eq!(
        "required fields item and due are missing, see /todo help for more details",
        slash.parse("/todo add").unwrap_err().to_string()
    );
    match slash.parse("/todo add tomorrow call mom -x 1") {
        Err(Error::UnknownParameter { parameter, .. }) => assert_eq!("x", parameter),
        r => panic!("unexpected result {:?}", r),
    }
    match slash.execute("/todo list late") {
        Err(Error::NoHandler(path)) => assert_eq!("todo list late", path),
        r => panic!("unexpected result {:?}", r),
    }
    match slash.parse("/done") {
        Err(Error::CommandNotFound { command, root }) => {
            assert_eq!("done", command);
            assert_eq!("todo", root);
        }
        r => panic!("unexpected result {:?}", r),
    }
}

#[test]
fn test_help_is_built_in() {
    let slash = SlashCommand::new(build_todo_command()).unwrap();
    let help_node = slash.definition().subcommands.last().unwrap();
    assert!(help_node.is_help());
    assert_eq!("todo help", help_node.path());
    assert_eq!("Display help.", help_node.description);

    let help = slash.execute("/todo help").unwrap();
    assert!(help.starts_with("#### /todo Help\n"));
    assert!(help.contains("`/todo add <due> <item...> [--priority <value>]`"));
    assert!(help.contains("Describe the item in a few words."));
}
