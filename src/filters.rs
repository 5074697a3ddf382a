//! Named string filters applied to identifiers during shorthand expansion.
//!
//! Filters are looked up by name; names missing from the registry are
//! skipped so directives written for newer filter sets still expand.

use std::collections::BTreeMap;

/// A pure string transform.
pub type Filter = fn(&str) -> String;

/// Read-only table of filters, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    filters: BTreeMap<&'static str, Filter>,
}

impl FilterRegistry {
    /// The built-in filter set.
    ///
    /// | name         | effect                          |
    /// |--------------|---------------------------------|
    /// | `camel`      | `my-prop` → `myProp`            |
    /// | `camel-case` | alias of `camel`                |
    pub fn standard() -> Self {
        let mut filters: BTreeMap<&'static str, Filter> = BTreeMap::new();
        filters.insert("camel", camel_case);
        filters.insert("camel-case", camel_case);
        FilterRegistry { filters }
    }

    pub fn get(&self, name: &str) -> Option<Filter> {
        self.filters.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Registered filter names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.keys().copied()
    }

    /// Applies a single filter; unknown names leave the input unchanged.
    pub fn apply(&self, name: &str, input: &str) -> String {
        match self.get(name) {
            Some(filter) => filter(input),
            None => input.to_string(),
        }
    }

    /// Folds `input` through each named filter in order.
    pub fn apply_chain<S: AsRef<str>>(&self, names: &[S], input: &str) -> String {
        names
            .iter()
            .fold(input.to_string(), |acc, name| self.apply(name.as_ref(), &acc))
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Camel-cases a hyphen-separated string: every `-x` with a lowercase ASCII
/// `x` becomes `X`. Other hyphens are kept.
pub fn camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match (ch, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(ch),
        }
    }
    result
}
