//! Property-name matching against the configured `propList`.
//!
//! Entries come in four syntactic forms: exact (`font-size`), contains
//! (`*position*`), starts-with (`margin*`) and ends-with (`*-width`). A
//! leading `!` negates an entry; negated entries override positive matches.
//! Properties that match the list are EXEMPT from the rem-duplication path,
//! so [`PropListMatcher::permits`] answers "is this property still eligible".

/// Partitioned form of the raw `propList`, computed once per pass.
#[derive(Debug, Clone, Default)]
pub(crate) struct PropListMatcher {
    match_all: bool,
    exact: Vec<String>,
    contain: Vec<String>,
    start_with: Vec<String>,
    end_with: Vec<String>,
    not_exact: Vec<String>,
    not_contain: Vec<String>,
    not_start_with: Vec<String>,
    not_end_with: Vec<String>,
}

impl PropListMatcher {
    pub(crate) fn new(prop_list: &[String]) -> Self {
        // An empty list, or the single wildcard, exempts nothing.
        if prop_list.is_empty() || (prop_list.len() == 1 && prop_list[0] == "*") {
            return Self {
                match_all: true,
                ..Default::default()
            };
        }

        let mut matcher = Self::default();
        for raw in prop_list {
            let (negated, pattern) = match raw.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, raw.as_str()),
            };
            let inner = pattern.strip_prefix('*');
            let partition = match (inner, pattern.strip_suffix('*')) {
                // `*text*`
                (Some(inner), Some(_)) if inner.len() > 1 => {
                    Some((&inner[..inner.len() - 1], Partition::Contain))
                }
                // `*text`
                (Some(inner), None) if !inner.is_empty() && !inner.contains('*') => {
                    Some((inner, Partition::EndWith))
                }
                // `text*`
                (None, Some(prefix)) if !prefix.is_empty() && !prefix.contains('*') => {
                    Some((prefix, Partition::StartWith))
                }
                // `text`
                (None, None) if !pattern.is_empty() && !pattern.contains('*') => {
                    Some((pattern, Partition::Exact))
                }
                _ => None,
            };
            let Some((text, partition)) = partition else {
                log::debug!("ignoring malformed propList entry '{}'", raw);
                continue;
            };
            let bucket = match (negated, partition) {
                (false, Partition::Exact) => &mut matcher.exact,
                (false, Partition::Contain) => &mut matcher.contain,
                (false, Partition::StartWith) => &mut matcher.start_with,
                (false, Partition::EndWith) => &mut matcher.end_with,
                (true, Partition::Exact) => &mut matcher.not_exact,
                (true, Partition::Contain) => &mut matcher.not_contain,
                (true, Partition::StartWith) => &mut matcher.not_start_with,
                (true, Partition::EndWith) => &mut matcher.not_end_with,
            };
            bucket.push(text.to_string());
        }
        matcher
    }

    /// True when `property` is still eligible for the rem-duplication path,
    /// i.e. it does NOT match the configured list (or a negated entry
    /// overrides the match).
    pub(crate) fn permits(&self, property: &str) -> bool {
        if self.match_all {
            return true;
        }
        let denied = self.not_exact.iter().any(|m| m == property)
            || self.not_contain.iter().any(|m| property.contains(m.as_str()))
            || self.not_start_with.iter().any(|m| property.starts_with(m.as_str()))
            || self.not_end_with.iter().any(|m| property.ends_with(m.as_str()));
        if denied {
            return true;
        }
        let listed = self.exact.iter().any(|m| m == property)
            || self.contain.iter().any(|m| property.contains(m.as_str()))
            || self.start_with.iter().any(|m| property.starts_with(m.as_str()))
            || self.end_with.iter().any(|m| property.ends_with(m.as_str()));
        !listed
    }
}

enum Partition {
    Exact,
    Contain,
    StartWith,
    EndWith,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(entries: &[&str]) -> PropListMatcher {
        let list: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
        PropListMatcher::new(&list)
    }

    #[test]
    fn empty_list_permits_everything() {
        let m = matcher(&[]);
        assert!(m.permits("font-size"));
        assert!(m.permits("width"));
    }

    #[test]
    fn lone_wildcard_permits_everything() {
        let m = matcher(&["*"]);
        assert!(m.permits("font-size"));
        assert!(m.permits("border-width"));
    }

    #[test]
    fn exact_entries_exempt_exactly_that_property() {
        let m = matcher(&["font-size"]);
        assert!(!m.permits("font-size"));
        assert!(m.permits("font-weight"));
        assert!(m.permits("width"));
    }

    #[test]
    fn wildcard_forms_match_by_position() {
        let m = matcher(&["margin*", "*-width", "*position*"]);
        // starts-with
        assert!(!m.permits("margin"));
        assert!(!m.permits("margin-top"));
        assert!(m.permits("padding-top"));
        // ends-with
        assert!(!m.permits("border-width"));
        assert!(m.permits("border-color"));
        // contains
        assert!(!m.permits("background-position-x"));
        assert!(m.permits("background-size"));
    }

    #[test]
    fn negated_entries_override_positive_matches() {
        let m = matcher(&["margin*", "!margin-top"]);
        assert!(!m.permits("margin-bottom"));
        assert!(m.permits("margin-top"));
    }

    #[test]
    fn negated_wildcard_forms_override_too() {
        let m = matcher(&["font-size", "*-width", "!*border*"]);
        assert!(!m.permits("font-size"));
        assert!(!m.permits("outline-width"));
        assert!(m.permits("border-width"));
    }
}
