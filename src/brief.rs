use std::fmt;

use crate::engine::draw::DrawResult;
use crate::types::Category;

/// Text brief assembled from a draw, one line per drawn category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brief {
    lines: Vec<(Category, String)>,
}

impl Brief {
    pub fn from_draw(draw: &DrawResult) -> Self {
        let lines = draw
            .iter()
            .filter_map(|(category, card)| card.map(|c| (category, c.prompt_text.trim().to_string())))
            .collect();
        Self { lines }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn prompt(&self, category: Category) -> Option<&str> {
        self.lines
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, text)| text.as_str())
    }
}

impl fmt::Display for Brief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (category, text)) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{category}: {text}")?;
        }
        Ok(())
    }
}
