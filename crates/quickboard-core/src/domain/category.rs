use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Feed category a post is filed under.
///
/// Serialized by its exact name; matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Product,
    Research,
    Marketing,
    Team,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Product,
        Category::Research,
        Category::Marketing,
        Category::Team,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Product => "Product",
            Category::Research => "Research",
            Category::Marketing => "Marketing",
            Category::Team => "Team",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
