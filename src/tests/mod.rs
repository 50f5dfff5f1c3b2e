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

use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;


lazy_static! {
    static ref TEST_LOGGER_INSTALLED: Mutex<bool> = Mutex::new(false);
}

static TEST_LOGGER: TestLogger = TestLogger;

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{} {} {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Install a stdout logger (at most once per test binary), so library log
/// output shows up alongside failing tests.
pub(crate) fn init() {
    let mut installed = TEST_LOGGER_INSTALLED.lock().unwrap();
    if *installed {
        return;
    }
    log::set_max_level(LevelFilter::Trace);
    log::set_logger(&TEST_LOGGER).unwrap();
    *installed = true;
}

pub(crate) const PRINT_DEFINITION: &str = r#"
name: Print
description: Echos back what you type.
arguments:
  - name: text
    argtype: quoted text
    description: text you want to print
    errorMsg: foo is not a valid value for text. Expected format is quoted text.
    position: 0
    shortName: t
subcommands:
  - name: reverse
    description: reverses back what you type.
    arguments:
      - name: text
        argtype: quoted text
        description: text you want to print
        errorMsg: foo is not a valid value for text. Expected format is quoted text.
        position: 0
        required: true
        shortName: t
  - name: quote
    description: helps you stand on the shoulders of giants by using words from history's most articulate people
    subcommands:
      - name: random
        description: print a random quote from a random author
      - name: author
        description: prints a quote from the specified author
        arguments:
          - name: authorName
            argtype: text
            description: Full Name of an author
            errorMsg: Please provide a valid author name, try someone famous
            position: 0
"#;

pub(crate) const SEARCH_DEFINITION: &str = r#"
name: search
description: Searches some text, and replaces a word in it.
arguments:
  - name: text
    argtype: quoted-text
    description: the text to search through
    position: 0
    required: true
    shortName: t
  - name: search
    argtype: word
    description: the word to look for
    position: 1
    required: true
    shortName: s
  - name: replace
    argtype: word
    description: the word to replace it with
    position: 2
    shortName: r
"#;

pub(crate) const WRANGLER_DEFINITION: &str = r#"
name: wrangler
description: Manage messages across teams and channels.
subCommandRequired: true
subcommands:
  - name: move
    description: Move messages to other channels.
    subCommandRequired: true
    subcommands:
      - name: thread
        description: Move a message and the thread it belongs to.
        arguments:
          - name: messageID
            argtype: word
            description: The ID of the message to be moved
            position: 0
            required: true
          - name: channelID
            argtype: word
            description: The ID of the channel to move the message to
            position: 1
            required: true
          - name: show-root-message-in-summary
            argtype: switch
            description: Show the root message in the post-move summary
  - name: list
    description: Lists IDs for channels and messages.
    subCommandRequired: true
    subcommands:
      - name: channels
        description: List the IDs of all channels you have joined.
        arguments:
          - name: channel-filter
            argtype: word
            description: Only list channels whose names contain this value
      - name: messages
        description: List the latest messages in the current channel.
        arguments:
          - name: count
            argtype: number
            description: Number of messages to return
            default: "20"
          - name: trim-length
            argtype: number
            description: The maximum length of message text shown
            default: "50"
"#;

pub(crate) const DORO_DEFINITION: &str = r#"
name: doro
description: A pomodoro timer.
subcommands:
  - name: start
    description: Start a timer.
    arguments:
      - name: length
        argtype: number
        description: Length of the timer, in minutes
        position: 0
        required: true
      - name: log
        argtype: remaining text
        description: What you are working on
        position: 1
"#;
