/// An ordered mapping from environment variable name to a type descriptor.
///
/// A descriptor is one of the base types `string`, `number`, `boolean` or
/// `json`, optionally suffixed with a single trailing `?` to mark the
/// variable as optional. Descriptors are not checked when the schema is
/// built; an unrecognized base type surfaces as a validation failure for
/// that key.
///
/// Declaration order is preserved and determines the order in which errors
/// are collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    entries: Vec<(String, String)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variable. Re-declaring a key replaces its descriptor;
    /// the key keeps the position of its first declaration.
    pub fn var(mut self, key: impl Into<String>, descriptor: impl Into<String>) -> Self {
        self.insert(key.into(), descriptor.into());
        self
    }

    fn insert(&mut self, key: String, descriptor: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = descriptor,
            None => self.entries.push((key, descriptor)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, d)| (k.as_str(), d.as_str()))
    }
}

impl<K: Into<String>, D: Into<String>> FromIterator<(K, D)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        let mut schema = Self::new();
        schema.extend(iter);
        schema
    }
}

impl<K: Into<String>, D: Into<String>> Extend<(K, D)> for Schema {
    fn extend<I: IntoIterator<Item = (K, D)>>(&mut self, iter: I) {
        for (key, descriptor) in iter {
            self.insert(key.into(), descriptor.into());
        }
    }
}

/// Splits a type descriptor into its base type and optionality flag.
///
/// Only a single trailing `?` is recognized; no trimming or case-folding.
/// A descriptor of just `?` yields an empty base type, which later fails
/// coercion as an unknown type.
pub(crate) fn split_descriptor(descriptor: &str) -> (&str, bool) {
    match descriptor.strip_suffix('?') {
        Some(base) => (base, true),
        None => (descriptor, false),
    }
}
