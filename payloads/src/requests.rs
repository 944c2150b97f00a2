use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Filter values keyed by filter name.
pub type Filters = BTreeMap<String, FilterValue>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort direction {0:?}, expected \"asc\" or \"desc\"")]
pub struct ParseSortDirectionError(pub String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(ParseSortDirectionError(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub key: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u32,
}

/// Inclusive date bounds; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

/// A single filter input.
///
/// Emptiness depends on the kind of filter rather than on how the value
/// happens to look: a blank text box is empty, while a `false` checkbox or
/// a `0` amount are real constraints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterValue {
    #[default]
    Empty,
    Text(String),
    Number(Decimal),
    Flag(bool),
    DateRange(DateRange),
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) | Self::Flag(_) => false,
            Self::DateRange(range) => {
                range.from.is_none() && range.to.is_none()
            }
        }
    }

    /// Query parameters contributed by this filter under `name`. Empty
    /// values contribute nothing.
    pub fn query_pairs(&self, name: &str) -> Vec<(String, String)> {
        if self.is_empty() {
            return Vec::new();
        }
        match self {
            Self::Empty => Vec::new(),
            Self::Text(text) => vec![(name.to_string(), text.clone())],
            Self::Number(number) => {
                vec![(name.to_string(), number.normalize().to_string())]
            }
            Self::Flag(flag) => vec![(name.to_string(), flag.to_string())],
            Self::DateRange(range) => {
                let mut pairs = Vec::with_capacity(2);
                if let Some(from) = range.from {
                    pairs.push((format!("{name}_from"), from.to_string()));
                }
                if let Some(to) = range.to {
                    pairs.push((format!("{name}_to"), to.to_string()));
                }
                pairs
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Decimal> for FilterValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<DateRange> for FilterValue {
    fn from(value: DateRange) -> Self {
        Self::DateRange(value)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Parameters for one call to an entity list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListRequest {
    /// Entity-scoped parameters that are always sent (e.g. `school_id`).
    pub params: BTreeMap<String, String>,
    pub filters: Filters,
    /// Absent when exporting everything.
    pub window: Option<PageWindow>,
    pub sort: Option<Sort>,
    pub export_all: bool,
    pub lang: Option<String>,
}

impl ListRequest {
    /// Flatten into the query string sent to the backend.
    ///
    /// Later sources override earlier ones: entity params, then non-empty
    /// filters, then the universal paging/sorting parameters.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut query: BTreeMap<String, String> = self.params.clone();

        for (name, value) in &self.filters {
            query.extend(value.query_pairs(name));
        }

        if let Some(window) = self.window {
            query.insert("offset".into(), window.offset.to_string());
            query.insert("limit".into(), window.limit.to_string());
        }
        if let Some(sort) = &self.sort {
            query.insert("order_by".into(), sort.key.clone());
            query.insert("order_dir".into(), sort.direction.to_string());
        }
        query.insert("export_all".into(), self.export_all.to_string());
        if let Some(lang) = &self.lang {
            query.insert("lang".into(), lang.clone());
        }

        query.into_iter().collect()
    }
}
