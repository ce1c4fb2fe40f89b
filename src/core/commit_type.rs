//! Conventional commit types and message formatting.

use std::fmt;

/// A conventional commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<9} {}  {}", self.name, self.emoji, self.description)
    }
}

/// The fixed catalog of commit types.
pub const COMMIT_TYPES: &[CommitType] = &[
    CommitType {
        name: "feat",
        description: "A new feature",
        emoji: "✨",
    },
    CommitType {
        name: "fix",
        description: "A bug fix",
        emoji: "🐛",
    },
    CommitType {
        name: "docs",
        description: "Documentation only changes",
        emoji: "📚",
    },
    CommitType {
        name: "style",
        description: "Changes that do not affect the meaning of the code",
        emoji: "💎",
    },
    CommitType {
        name: "refactor",
        description: "A code change that neither fixes a bug nor adds a feature",
        emoji: "📦",
    },
    CommitType {
        name: "perf",
        description: "A code change that improves performance",
        emoji: "🚀",
    },
    CommitType {
        name: "test",
        description: "Adding missing tests or correcting existing tests",
        emoji: "🚨",
    },
    CommitType {
        name: "build",
        description: "Changes that affect the build system or external dependencies",
        emoji: "🛠",
    },
    CommitType {
        name: "ci",
        description: "Changes to CI configuration files and scripts",
        emoji: "⚙️",
    },
    CommitType {
        name: "chore",
        description: "Other changes that don't modify src or test files",
        emoji: "♻️",
    },
    CommitType {
        name: "revert",
        description: "Reverts a previous commit",
        emoji: "🗑",
    },
];

/// Look up a commit type by name.
pub fn lookup(name: &str) -> Option<&'static CommitType> {
    COMMIT_TYPES.iter().find(|t| t.name == name)
}

/// Emoji for a type name, or `""` if the type is unknown.
pub fn emoji_for(name: &str) -> &'static str {
    lookup(name).map(|t| t.emoji).unwrap_or("")
}

/// All type names, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    COMMIT_TYPES.iter().map(|t| t.name)
}

/// Format the final commit message.
///
/// `type(scope): emoji message`, or `type: emoji message` when the scope is
/// empty.
pub fn format_commit(kind: &str, scope: &str, message: &str) -> String {
    let emoji = emoji_for(kind);
    if scope.is_empty() {
        format!("{}: {} {}", kind, emoji, message)
    } else {
        format!("{}({}): {} {}", kind, scope, emoji, message)
    }
}
