//! Best-effort ticket extraction
//!
//! Tries an ordered list of pattern families against the raw subject,
//! first match wins. When a branch lookup is available, branch names
//! containing the commit are consulted as a last resort.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// How to turn a pattern match into a ticket string
#[derive(Debug, Clone, Copy)]
enum Extract {
    /// Take capture group 1 (digits only)
    Digits,
    /// Take the whole match verbatim
    Whole,
}

/// Ordered subject patterns. The order encodes precedence and must not
/// be rearranged.
static SUBJECT_PATTERNS: LazyLock<Vec<(Regex, Extract)>> = LazyLock::new(|| {
    vec![
        // [#123] with the closing bracket optional
        (Regex::new(r"\[#(\d+)\]?").expect("Invalid regex"), Extract::Digits),
        // bare #123
        (Regex::new(r"#(\d+)").expect("Invalid regex"), Extract::Digits),
        // tracker style: ABC-123
        (Regex::new(r"[A-Z][A-Z0-9]+-\d+").expect("Invalid regex"), Extract::Whole),
        // leading-digit compound: 12345-something
        (
            Regex::new(r"(?:^|\D)(\d{4,})[-_][0-9A-Za-z]").expect("Invalid regex"),
            Extract::Digits,
        ),
        // trailing-digit compound: something-12345
        (
            Regex::new(r"[0-9A-Za-z][-_](\d{4,})(?:\D|$)").expect("Invalid regex"),
            Extract::Digits,
        ),
    ]
});

/// Patterns tried against branch names in the fallback path
static BRANCH_PATTERNS: LazyLock<Vec<(Regex, Extract)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"[A-Z][A-Z0-9]+-\d+").expect("Invalid regex"), Extract::Whole),
        (
            Regex::new(r"(?:^|\D)(\d{4,})[-_][0-9A-Za-z]").expect("Invalid regex"),
            Extract::Digits,
        ),
        (
            Regex::new(r"[0-9A-Za-z][-_](\d{4,})(?:\D|$)").expect("Invalid regex"),
            Extract::Digits,
        ),
    ]
});

/// A purely numeric ticket, for prefix formatting
static NUMERIC_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Invalid regex"));

/// Source of remote branch names containing a commit.
///
/// Implementations may be slow (cost proportional to the number of
/// remote branches); the pipeline calls this at most once per commit
/// and never caches across commits.
pub trait BranchLookup {
    /// Ordered remote branch names whose tip contains the commit
    fn branches_containing(&self, short_id: &str) -> Vec<String>;
}

/// Extract a ticket identifier from a raw commit subject
pub fn extract_ticket(subject: &str) -> Option<String> {
    first_match(subject, &SUBJECT_PATTERNS)
}

/// Extract a ticket from the branches containing a commit.
///
/// Branches are scanned in the order the lookup returns them; within a
/// branch name the patterns are tried in precedence order. The remote
/// prefix (`origin/`) is stripped before matching.
pub fn ticket_from_branches(short_id: &str, lookup: &dyn BranchLookup) -> Option<String> {
    for branch in lookup.branches_containing(short_id) {
        let name = branch
            .split_once('/')
            .map_or(branch.as_str(), |(_, rest)| rest);
        if let Some(ticket) = first_match(name, &BRANCH_PATTERNS) {
            debug!(short_id, branch = %branch, ticket = %ticket, "ticket derived from branch");
            return Some(ticket);
        }
    }
    None
}

/// Render the ticket prefix placed before the category label
pub fn format_ticket_prefix(ticket: &str) -> String {
    if ticket.is_empty() {
        return String::new();
    }
    if NUMERIC_TICKET.is_match(ticket) {
        format!("[#{}] ", ticket)
    } else {
        format!("[{}] ", ticket)
    }
}

/// Linear scan over (pattern, extraction) pairs, first match wins
fn first_match(text: &str, patterns: &[(Regex, Extract)]) -> Option<String> {
    patterns.iter().find_map(|(regex, extract)| {
        regex.captures(text).map(|caps| match extract {
            Extract::Digits => caps[1].to_string(),
            Extract::Whole => caps[0].to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_numeric() {
        assert_eq!(extract_ticket("[#42] fix: x"), Some("42".to_string()));
        // Closing bracket optional
        assert_eq!(extract_ticket("[#42 fix: x"), Some("42".to_string()));
    }

    #[test]
    fn test_bare_numeric() {
        assert_eq!(extract_ticket("fix: closes #777"), Some("777".to_string()));
    }

    #[test]
    fn test_tracker_style() {
        assert_eq!(
            extract_ticket("fix: see JIRA-007"),
            Some("JIRA-007".to_string())
        );
        assert_eq!(
            extract_ticket("AB2-99 chore: tidy"),
            Some("AB2-99".to_string())
        );
    }

    #[test]
    fn test_leading_digit_compound() {
        assert_eq!(
            extract_ticket("12345-add-login fix: x"),
            Some("12345".to_string())
        );
    }

    #[test]
    fn test_trailing_digit_compound() {
        assert_eq!(
            extract_ticket("feature_9876: done"),
            Some("9876".to_string())
        );
        assert_eq!(extract_ticket("rework-4242"), Some("4242".to_string()));
    }

    #[test]
    fn test_short_digit_runs_ignored() {
        // Compound families need 4+ digits
        assert_eq!(extract_ticket("v2-fix things"), None);
        assert_eq!(extract_ticket("abc-123 only"), None);
    }

    #[test]
    fn test_precedence_bracket_beats_tracker() {
        assert_eq!(
            extract_ticket("[#42] ABC-99 fix: x"),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_precedence_bare_beats_tracker() {
        assert_eq!(
            extract_ticket("fix ABC-99 and #7"),
            Some("7".to_string())
        );
    }

    #[test]
    fn test_no_ticket() {
        assert_eq!(extract_ticket("fix: nothing to see"), None);
        assert_eq!(extract_ticket(""), None);
    }

    #[test]
    fn test_prefix_formatting() {
        assert_eq!(format_ticket_prefix("42"), "[#42] ");
        assert_eq!(format_ticket_prefix("JIRA-007"), "[JIRA-007] ");
        assert_eq!(format_ticket_prefix(""), "");
    }

    struct FixedBranches(Vec<String>);

    impl BranchLookup for FixedBranches {
        fn branches_containing(&self, _short_id: &str) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_branch_fallback_tracker_style() {
        let lookup = FixedBranches(vec!["origin/ABC-123-add-login".to_string()]);
        assert_eq!(
            ticket_from_branches("a1b2c3d", &lookup),
            Some("ABC-123".to_string())
        );
    }

    #[test]
    fn test_branch_fallback_numeric() {
        let lookup = FixedBranches(vec![
            "origin/main".to_string(),
            "origin/12345-add-login".to_string(),
        ]);
        assert_eq!(
            ticket_from_branches("a1b2c3d", &lookup),
            Some("12345".to_string())
        );
    }

    #[test]
    fn test_branch_fallback_first_branch_wins() {
        let lookup = FixedBranches(vec![
            "origin/fix_7777".to_string(),
            "origin/ABC-1-later".to_string(),
        ]);
        // First branch with any match wins, even over a tracker-style
        // match in a later branch
        assert_eq!(
            ticket_from_branches("a1b2c3d", &lookup),
            Some("7777".to_string())
        );
    }

    #[test]
    fn test_branch_fallback_no_match() {
        let lookup = FixedBranches(vec!["origin/main".to_string()]);
        assert_eq!(ticket_from_branches("a1b2c3d", &lookup), None);
    }
}
