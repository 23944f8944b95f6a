//! Form submission: the decoded fields of one HTTP request.

use std::collections::HashMap;

/// Field name → value mapping taken from a form-encoded request.
///
/// Only the first occurrence of a repeated field is kept. Fields submitted
/// with an empty value are dropped, so `name=` reads the same as leaving the
/// field out. Whitespace-only values are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: HashMap<String, String>,
}

impl FormSubmission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field unless its value is empty or one with the same name is
    /// already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.fields.entry(name.into()).or_insert(value);
    }

    /// Whether the field was submitted with a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The submitted value, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The submitted value, ignoring whitespace-only ones.
    #[must_use]
    pub fn get_non_blank(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.trim().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        form.extend(iter);
        form
    }
}

impl<K, V> Extend<(K, V)> for FormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
