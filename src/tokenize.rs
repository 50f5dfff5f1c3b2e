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

use log::trace;

const SPACE: char = ' ';
const BACKSLASH: char = '\\';
const DOUBLE_QUOTE: char = '"';

/// Splits the argument portion of a slash command into tokens.
///
/// Tokens are separated by spaces, and runs of spaces never produce empty
/// tokens. A double-quoted section is a single token which may contain spaces;
/// the closing quote ends the token right away, even without a following
/// space, and `""` is an empty token. Outside of quotes, `\"` is a literal
/// quote character. Any other backslash is kept as-is.
///
/// ```
/// assert_eq!(
///     vec!["foo", "man chu", "\\choo", "wow"],
///     slashparse::tokenize::tokenize("foo \"man chu\"  \\choo wow")
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = vec![];
    let mut current = String::new();
    let mut in_quotes = false;
    let mut previous: Option<char> = None;

    for c in text.chars() {
        match c {
            SPACE if in_quotes => current.push(c),
            SPACE => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            DOUBLE_QUOTE if in_quotes => {
                in_quotes = false;
                tokens.push(std::mem::take(&mut current));
            }
            DOUBLE_QUOTE if previous == Some(BACKSLASH) => {
                // The backslash was pushed on the previous iteration.
                current.pop();
                current.push(DOUBLE_QUOTE);
            }
            DOUBLE_QUOTE => in_quotes = true,
            _ => current.push(c),
        }
        previous = Some(c);
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    trace!("tokenized {:?} into {:?}", text, tokens);
    tokens
}
