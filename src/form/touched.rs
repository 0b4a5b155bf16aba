use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Touched(IndexMap<String, bool>);

impl Touched {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    /// Returns `true` when the field was not touched before.
    pub fn touch(&mut self, name: impl Into<String>) -> bool {
        let previous = self.0.insert(name.into(), true);
        previous != Some(true)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Touched {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, flag)| (name.into(), flag))
                .collect(),
        )
    }
}
