//! Page-level types.

use super::Twips;
use serde::{Deserialize, Serialize};

/// Page margins in native units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin
    pub top: Twips,
    /// Bottom margin
    pub bottom: Twips,
    /// Left margin
    pub left: Twips,
    /// Right margin
    pub right: Twips,
}

impl PageMargins {
    /// Same margin on all four sides.
    pub fn uniform(margin: Twips) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

/// Paper size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// A4 (210 x 297 mm)
    #[default]
    A4,
    /// US Letter (8.5 x 11 inches)
    Letter,
}

impl PageSize {
    /// Width in twips.
    pub fn width(self) -> Twips {
        match self {
            PageSize::A4 => Twips(11906),
            PageSize::Letter => Twips(12240),
        }
    }

    /// Height in twips.
    pub fn height(self) -> Twips {
        match self {
            PageSize::A4 => Twips(16838),
            PageSize::Letter => Twips(15840),
        }
    }
}

impl std::str::FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            other => Err(format!("unknown page size: {}", other)),
        }
    }
}

/// Page properties of the single document section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageSetup {
    /// Paper size
    pub size: PageSize,

    /// Page margins
    pub margins: PageMargins,
}

impl PageSetup {
    /// Create a page setup.
    pub fn new(size: PageSize, margins: PageMargins) -> Self {
        Self { size, margins }
    }

    /// Width left for text between the left and right margins.
    pub fn text_width(&self) -> Twips {
        let used = self.margins.left.get().saturating_add(self.margins.right.get());
        Twips(self.size.width().get().saturating_sub(used))
    }

    /// Height left for text between the top and bottom margins.
    pub fn text_height(&self) -> Twips {
        let used = self.margins.top.get().saturating_add(self.margins.bottom.get());
        Twips(self.size.height().get().saturating_sub(used))
    }
}
