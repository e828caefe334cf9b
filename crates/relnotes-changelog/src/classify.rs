//! Conventional Commits classification

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::normalize;

/// A changelog category with its sort rank and display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Conventional Commits type token
    pub name: &'static str,
    /// Sort precedence, lower sorts first
    pub rank: u8,
    /// Display label (emoji + name)
    pub label: &'static str,
}

/// Ordered category table. The order is load-bearing: classification is
/// a strict linear scan, first match wins.
pub const CATEGORIES: &[Category] = &[
    Category { name: "feat", rank: 1, label: "✨ feat" },
    Category { name: "fix", rank: 2, label: "🐛 fix" },
    Category { name: "docs", rank: 3, label: "📚 docs" },
    Category { name: "style", rank: 4, label: "💄 style" },
    Category { name: "refactor", rank: 5, label: "♻️ refactor" },
    Category { name: "perf", rank: 6, label: "⚡ perf" },
    Category { name: "test", rank: 7, label: "✅ test" },
    Category { name: "build", rank: 8, label: "📦 build" },
    Category { name: "ci", rank: 9, label: "👷 ci" },
    Category { name: "chore", rank: 10, label: "🔧 chore" },
    Category { name: "revert", rank: 11, label: "⏪ revert" },
];

/// Fallback for subjects matching no conventional type
pub const OTHER: Category = Category {
    name: "other",
    rank: 99,
    label: "• other",
};

/// Generic `type(scope)?!?: ` prefix on a normalized subject
pub(crate) static TYPE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+)(\([^)]*\))?!?: ").expect("Invalid regex"));

/// Classify a raw commit subject.
///
/// The subject is normalized first; scope and the `!` breaking marker are
/// accepted but do not affect rank or label.
pub fn classify(subject: &str) -> Category {
    let normalized = normalize(subject);
    let Some(caps) = TYPE_PREFIX.captures(&normalized) else {
        return OTHER;
    };
    let token = caps.get(1).map_or("", |m| m.as_str());

    CATEGORIES
        .iter()
        .find(|c| c.name == token)
        .copied()
        .unwrap_or(OTHER)
}
