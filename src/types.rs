use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Category {
    Client,
    Need,
    Challenge,
    Audience,
}

impl Category {
    pub const COUNT: usize = 4;

    /// Fixed draw and display order.
    #[inline]
    pub fn all() -> [Category; Self::COUNT] {
        [
            Category::Client,
            Category::Need,
            Category::Challenge,
            Category::Audience,
        ]
    }

    /// Dense index 0..=3 in [`Category::all`] order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Category::Client => 0,
            Category::Need => 1,
            Category::Challenge => 2,
            Category::Audience => 3,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Client => "Client",
            Category::Need => "Need",
            Category::Challenge => "Challenge",
            Category::Audience => "Audience",
        }
    }

    #[inline]
    pub fn style(self) -> &'static CategoryStyle {
        &CATEGORY_STYLES[self.index()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::InvalidArgument(format!("unknown category '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Presentation hints for a category (icon name and accent colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

// Indexed by Category::index()
static CATEGORY_STYLES: [CategoryStyle; Category::COUNT] = [
    CategoryStyle { icon: "briefcase", color: "#2563eb" },
    CategoryStyle { icon: "lightbulb", color: "#16a34a" },
    CategoryStyle { icon: "mountain", color: "#dc2626" },
    CategoryStyle { icon: "users", color: "#9333ea" },
];
