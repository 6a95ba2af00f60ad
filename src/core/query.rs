//! Filter prefixes, shortcut expansion and backspace handling for the input box.
//!
//! Typing `/tabs ` (or the shortcut `/t`) restricts the result list to one
//! category; whatever follows the prefix is the search text.

use super::candidate::Category;
use super::matcher::fold_case;

/// A category filter command recognized at the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCommand {
    /// Full token including its trailing delimiter, e.g. `"/tabs "`.
    pub token: &'static str,
    /// Abbreviation expanded to `token` when it is the entire input.
    pub shortcut: &'static str,
    pub category: Category,
}

impl FilterCommand {
    /// The token without its trailing delimiter.
    pub fn keyword(&self) -> &'static str {
        self.token.trim_end()
    }
}

/// Built-in filter commands.
pub const FILTER_COMMANDS: &[FilterCommand] = &[
    FilterCommand {
        token: "/tabs ",
        shortcut: "/t",
        category: Category::Tab,
    },
    FilterCommand {
        token: "/bookmarks ",
        shortcut: "/b",
        category: Category::Bookmark,
    },
    FilterCommand {
        token: "/history ",
        shortcut: "/h",
        category: Category::History,
    },
    FilterCommand {
        token: "/actions ",
        shortcut: "/a",
        category: Category::SiteAction,
    },
];

/// A raw query split into its category filter and remaining search text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedQuery {
    pub category: Option<Category>,
    /// Trimmed search text after the prefix, in its original case.
    pub text: String,
}

/// How the input box should react to an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// Search the text as typed.
    Typed,
    /// A shortcut was typed; replace the input with the full token.
    Expanded(&'static str),
    /// The user is deleting a filter prefix; clear the input.
    Cleared,
}

impl InputChange {
    /// The text the input box should hold after this change.
    pub fn apply(self, typed: &str) -> String {
        match self {
            InputChange::Typed => typed.to_string(),
            InputChange::Expanded(token) => token.to_string(),
            InputChange::Cleared => String::new(),
        }
    }
}

/// Recognizes filter commands in raw input.
#[derive(Debug, Clone, Copy)]
pub struct QueryParser {
    commands: &'static [FilterCommand],
}

impl QueryParser {
    pub fn new() -> Self {
        Self::with_commands(FILTER_COMMANDS)
    }

    pub fn with_commands(commands: &'static [FilterCommand]) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &'static [FilterCommand] {
        self.commands
    }

    /// Split `raw` into a category filter and the residual search text.
    ///
    /// The prefix is matched case-insensitively at the start of the trimmed
    /// input. Text directly after the keyword (`/tabsfoo`) still counts as
    /// residual text. Case folding is left to the matcher.
    pub fn parse(&self, raw: &str) -> ParsedQuery {
        let value = raw.trim_start();
        let folded = fold_case(value);

        for command in self.commands {
            let keyword = command.keyword();
            if folded.starts_with(keyword) {
                let rest: String = value.chars().skip(keyword.chars().count()).collect();
                return ParsedQuery {
                    category: Some(command.category),
                    text: rest.trim().to_string(),
                };
            }
        }

        ParsedQuery {
            category: None,
            text: value.trim().to_string(),
        }
    }

    /// Decide how an edit from `previous` to `current` should be handled.
    ///
    /// Deleting the trailing delimiter of a full token clears the input, so a
    /// shortcut is not re-expanded while the user backspaces over it. This
    /// check runs before shortcut expansion.
    pub fn interpret_input(&self, previous: &str, current: &str) -> InputChange {
        let previous = fold_case(previous);
        let current = fold_case(current);

        if current.chars().count() < previous.chars().count()
            && self
                .commands
                .iter()
                .any(|c| previous == c.token && current == c.keyword())
        {
            return InputChange::Cleared;
        }

        match self.commands.iter().find(|c| c.shortcut == current) {
            Some(command) => InputChange::Expanded(command.token),
            None => InputChange::Typed,
        }
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}
