//! Keep filter value objects

use std::borrow::Cow;

use super::entity::Keep;

/// Case handling for filter term matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Terms match regardless of letter case
    #[default]
    Insensitive,
    /// Terms match exact case only
    Sensitive,
}

/// Parsed filter query
///
/// Filter strings arrive percent-encoded from a query string as one or
/// more `&`-delimited terms. A keep matches when any term is a substring
/// of its name or description.
#[derive(Debug, Clone, PartialEq)]
pub struct KeepFilter {
    terms: Vec<String>,
    mode: MatchMode,
}

impl KeepFilter {
    /// Parse a raw filter string; `None` when the filter is empty
    pub fn parse(filter: &str, mode: MatchMode) -> Option<Self> {
        if filter.is_empty() {
            return None;
        }
        let terms = filter
            .split('&')
            .map(|term| {
                // Query text is user input; a malformed escape is matched verbatim.
                let decoded = urlencoding::decode(term)
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| term.to_string());
                match mode {
                    MatchMode::Insensitive => decoded.to_lowercase(),
                    MatchMode::Sensitive => decoded,
                }
            })
            .collect();
        Some(Self { terms, mode })
    }

    /// Check whether any term matches the keep's name or description
    pub fn matches(&self, keep: &Keep) -> bool {
        self.terms.iter().any(|term| match self.mode {
            MatchMode::Insensitive => {
                keep.name.to_lowercase().contains(term.as_str())
                    || keep.description.to_lowercase().contains(term.as_str())
            }
            MatchMode::Sensitive => {
                keep.name.contains(term.as_str()) || keep.description.contains(term.as_str())
            }
        })
    }

    /// Parsed search terms
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
