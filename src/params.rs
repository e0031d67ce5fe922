//! String-keyed wire parameters for the form-encoded panel protocol.

use std::borrow::Cow;

/// Ordered form parameters for one panel request.
///
/// Typed operations convert their request records into `Params` right at the
/// executor boundary: numbers become decimal strings, booleans become
/// `"true"`/`"false"`, and repeated pushes of the same key become repeated
/// form values. The keys `request_token` and `request_time` are reserved for
/// the signing layer and rejected by the executor.
#[derive(Clone, Debug, Default)]
pub struct Params {
    entries: Vec<(Cow<'static, str>, String)>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `key=value` pair, formatting the value with `ToString`.
    #[must_use]
    pub fn push(mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.entries.push((key.into(), value.to_string()));
        self
    }

    /// Appends one pair per value under the same key.
    #[must_use]
    pub fn push_all<V: ToString>(
        mut self,
        key: impl Into<Cow<'static, str>>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let key = key.into();
        for value in values {
            self.entries.push((key.clone(), value.to_string()));
        }
        self
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub(crate) fn into_form(self) -> Vec<(Cow<'static, str>, String)> {
        self.entries
    }
}
