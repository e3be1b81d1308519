//! Selector blacklist: rules whose selector matches any entry are exempt
//! from every conversion, including clone insertion.

use regex::Regex;

use super::options::SelectorFilter;
use crate::errors::{ConvertError, Result};

enum BlacklistEntry {
    Substring(String),
    Pattern(Regex),
}

/// Compiled form of the configured selector blacklist.
pub(crate) struct SelectorBlacklist {
    entries: Vec<BlacklistEntry>,
}

impl SelectorBlacklist {
    /// Compiles pattern entries up front so an invalid pattern surfaces as a
    /// construction error instead of failing mid-pass.
    pub(crate) fn new(filters: &[SelectorFilter]) -> Result<Self> {
        let mut entries = Vec::with_capacity(filters.len());
        for filter in filters {
            match filter {
                SelectorFilter::Substring(text) => {
                    entries.push(BlacklistEntry::Substring(text.clone()));
                }
                SelectorFilter::Pattern { regex } => {
                    let compiled = Regex::new(regex).map_err(|source| {
                        ConvertError::InvalidSelectorPattern {
                            pattern: regex.clone(),
                            source,
                        }
                    })?;
                    entries.push(BlacklistEntry::Pattern(compiled));
                }
            }
        }
        Ok(Self { entries })
    }

    /// True when the selector matches any blacklist entry. An absent
    /// selector never matches.
    pub(crate) fn is_blacklisted(&self, selector: Option<&str>) -> bool {
        let Some(selector) = selector else {
            return false;
        };
        self.entries.iter().any(|entry| match entry {
            BlacklistEntry::Substring(text) => selector.contains(text.as_str()),
            BlacklistEntry::Pattern(regex) => regex.is_match(selector),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_entries_match_anywhere_in_the_selector() {
        let blacklist = SelectorBlacklist::new(&[SelectorFilter::substring(".ignore")])
            .expect("blacklist should build");
        assert!(blacklist.is_blacklisted(Some(".ignore")));
        assert!(blacklist.is_blacklisted(Some("body .ignore > span")));
        assert!(!blacklist.is_blacklisted(Some(".keep")));
    }

    #[test]
    fn pattern_entries_match_as_regexes() {
        let blacklist = SelectorBlacklist::new(&[SelectorFilter::pattern("^\\.ad-")])
            .expect("blacklist should build");
        assert!(blacklist.is_blacklisted(Some(".ad-banner")));
        assert!(!blacklist.is_blacklisted(Some(".grid .ad-banner")));
    }

    #[test]
    fn absent_selectors_are_never_blacklisted() {
        let blacklist = SelectorBlacklist::new(&[SelectorFilter::substring("")])
            .expect("blacklist should build");
        assert!(!blacklist.is_blacklisted(None));
    }

    #[test]
    fn invalid_patterns_fail_at_construction() {
        let result = SelectorBlacklist::new(&[SelectorFilter::pattern("(unclosed")]);
        assert!(matches!(
            result,
            Err(ConvertError::InvalidSelectorPattern { .. })
        ));
    }
}
