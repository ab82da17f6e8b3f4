use serde::{Deserialize, Serialize};

use super::Tag;

pub const ALL_KEY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown filter key '{0}'")]
    UnknownKey(String),
}

/// Active filter selector: everything, or one member of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey<T> {
    All,
    Only(T),
}

impl<T> Default for FilterKey<T> {
    fn default() -> Self {
        FilterKey::All
    }
}

impl<T: Tag> FilterKey<T> {
    /// Parses `"all"` or a tag code. An empty key is treated as `"all"`.
    pub fn parse(key: &str) -> Result<Self, FilterError> {
        let key = key.trim();
        if key.is_empty() || key == ALL_KEY {
            return Ok(FilterKey::All);
        }
        T::from_code(key)
            .map(FilterKey::Only)
            .ok_or_else(|| FilterError::UnknownKey(key.to_string()))
    }

    pub fn code(&self) -> &'static str {
        match self {
            FilterKey::All => ALL_KEY,
            FilterKey::Only(tag) => tag.code(),
        }
    }

    pub fn matches(&self, tag: T) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Only(selected) => *selected == tag,
        }
    }

    /// `All` followed by every tag member
    pub fn tabs() -> Vec<Self> {
        std::iter::once(FilterKey::All)
            .chain(T::all().iter().copied().map(FilterKey::Only))
            .collect()
    }
}

/// Record whose list page filters on one tag.
pub trait Filterable {
    type Key: Tag;

    fn filter_key(&self) -> Self::Key;
}

/// Returns the records matching `key`, in store order.
pub fn filter_view<R, T>(records: &[R], key: FilterKey<T>, selector: impl Fn(&R) -> T) -> Vec<R>
where
    R: Clone,
    T: Tag,
{
    records
        .iter()
        .filter(|record| key.matches(selector(record)))
        .cloned()
        .collect()
}

/// Filter tab with its record count, e.g. `pending (1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCount {
    pub key: String,
    pub label: String,
    pub count: usize,
}

/// Counts for every filter tab, computed over the full collection
pub fn tab_counts<R, T>(records: &[R], selector: impl Fn(&R) -> T) -> Vec<TabCount>
where
    T: Tag,
{
    FilterKey::<T>::tabs()
        .into_iter()
        .map(|key| TabCount {
            key: key.code().to_string(),
            label: match key {
                FilterKey::All => "All".to_string(),
                FilterKey::Only(tag) => tag.label().to_string(),
            },
            count: records
                .iter()
                .filter(|record| key.matches(selector(record)))
                .count(),
        })
        .collect()
}
