use serde::{Deserialize, Serialize};

/// Insertion-ordered set of string codes backing the multi-select chips
/// (ages, platforms, audience ages).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ToggleSet(Vec<String>);

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `code`. Returns whether it is present afterwards.
    /// Blank codes are ignored.
    pub fn toggle(&mut self, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() {
            return false;
        }
        if let Some(pos) = self.0.iter().position(|c| c == code) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(code.to_string());
            true
        }
    }

    pub fn insert(&mut self, code: &str) {
        let code = code.trim();
        if !code.is_empty() && !self.contains(code) {
            self.0.push(code.to_string());
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        let code = code.trim();
        self.0.iter().any(|c| c == code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-joined wire form, `None` when empty.
    pub fn joined(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }

    /// Inverse of [`ToggleSet::joined`].
    pub fn from_joined(s: &str) -> Self {
        s.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
            .into()
    }
}

impl From<Vec<String>> for ToggleSet {
    fn from(codes: Vec<String>) -> Self {
        let mut set = ToggleSet::new();
        for c in codes {
            let c = c.trim();
            if !c.is_empty() {
                set.insert(c);
            }
        }
        set
    }
}

impl From<ToggleSet> for Vec<String> {
    fn from(set: ToggleSet) -> Self {
        set.0
    }
}

impl<'a> FromIterator<&'a str> for ToggleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
            .into()
    }
}
