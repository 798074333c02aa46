//! Shortcut lookup by exact name or unique prefix.
//!
//! An exact key always wins, even when it is also a prefix of other names.
//! Otherwise the query must be the prefix of exactly one name.

use crate::error::MajortomError;
use crate::store::ShortcutStore;
use tracing::{Level, debug, span};

/// Outcome of matching a query against the stored shortcut names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Exactly one shortcut matched
    Resolved {
        /// The matched shortcut name
        name: &'a str,
        /// Its stored (possibly home-abbreviated) target
        target: &'a str,
    },
    /// Nothing equals or starts with the query
    NoMatch,
    /// Several names start with the query and none equals it
    Ambiguous(Vec<&'a str>),
}

impl<'a> Resolution<'a> {
    /// Converts the outcome into the stored target or a typed error.
    ///
    /// # Errors
    ///
    /// Returns `NoMatch` or `AmbiguousMatch` for the corresponding outcomes.
    pub fn into_result(self, query: &str) -> Result<&'a str, MajortomError> {
        match self {
            Self::Resolved { target, .. } => Ok(target),
            Self::NoMatch => Err(MajortomError::NoMatch {
                query: query.to_string(),
            }),
            Self::Ambiguous(candidates) => Err(MajortomError::AmbiguousMatch {
                query: query.to_string(),
                candidates: candidates.into_iter().map(str::to_string).collect(),
            }),
        }
    }
}

/// Matches `query` against the store's shortcut names.
///
/// An exact name always wins, even when it is also a prefix of other names.
/// Otherwise the query must be a literal, case-sensitive prefix of exactly one
/// name. Ambiguous candidates come back in lexicographic order.
#[must_use]
pub fn resolve<'a>(store: &'a ShortcutStore, query: &str) -> Resolution<'a> {
    let span = span!(Level::DEBUG, "resolve", query);
    let _guard = span.enter();

    if let Some((name, target)) = store.locations.get_key_value(query) {
        debug!(name = %name, "Exact match");
        return Resolution::Resolved { name, target };
    }

    let mut matches = store.iter().filter(|(name, _)| name.starts_with(query));
    let resolution = match (matches.next(), matches.next()) {
        (None, _) => Resolution::NoMatch,
        (Some((name, target)), None) => Resolution::Resolved { name, target },
        (Some((first, _)), Some((second, _))) => {
            let mut candidates = vec![first, second];
            candidates.extend(matches.map(|(name, _)| name));
            Resolution::Ambiguous(candidates)
        }
    };

    debug!(outcome = ?resolution, "Prefix resolution");
    resolution
}
