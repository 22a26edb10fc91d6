//! Placement keywords: which side of the host the bubble sits on, and how it
//! is aligned along the other axis.
//!
//! Placements are written as `"<side>[-<align>]"`, e.g. `"bottom"` or
//! `"left-top"`. Parsing never fails: an unknown side falls back to
//! [`Side::Top`] and an unknown alignment resolves to [`Align::Center`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::PLACEMENT_SEPARATOR;

/// Side of the host element the tooltip appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Tooltip appears above the element. Also the fallback for unknown keywords.
    #[default]
    Top,
    /// Tooltip appears below the element.
    Bottom,
    /// Tooltip appears to the left of the element.
    Left,
    /// Tooltip appears to the right of the element.
    Right,
}

impl Side {
    /// Parse a primary keyword. Unknown keywords map to `Top`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            other => {
                log::debug!("Unknown placement side '{}', using top", other);
                Side::Top
            }
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Secondary alignment along the axis perpendicular to the side.
///
/// `Left`/`Right` only apply to the horizontal axis and `Top`/`Bottom` only to
/// the vertical one; on the wrong axis they behave like `Center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

impl Align {
    /// Parse a secondary keyword. Unknown keywords map to `Center`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "center" => Align::Center,
            "left" => Align::Left,
            "right" => Align::Right,
            "top" => Align::Top,
            "bottom" => Align::Bottom,
            other => {
                log::warn!("Unknown placement alignment '{}', using center", other);
                Align::Center
            }
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Align::Center => "center",
            Align::Left => "left",
            Align::Right => "right",
            Align::Top => "top",
            Align::Bottom => "bottom",
        }
    }
}

/// A side plus an alignment. Defaults to `bottom` (centered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Placement {
    side: Side,
    align: Align,
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Side::Bottom, Align::Center)
    }
}

impl Placement {
    pub const TOP: Self = Self::new(Side::Top, Align::Center);
    pub const BOTTOM: Self = Self::new(Side::Bottom, Align::Center);
    pub const LEFT: Self = Self::new(Side::Left, Align::Center);
    pub const RIGHT: Self = Self::new(Side::Right, Align::Center);

    pub const fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    /// Parse a `"<side>[-<align>]"` string.
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(PLACEMENT_SEPARATOR);
        let side = Side::from_keyword(parts.next().unwrap_or_default());
        let align = match parts.next() {
            Some(keyword) if !keyword.is_empty() => Align::from_keyword(keyword),
            _ => Align::Center,
        };
        Self { side, align }
    }

    /// Builder: replace the alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// CSS class naming the side, applied next to the base `tooltip` class.
    pub fn class_name(&self) -> &'static str {
        self.side.keyword()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.align {
            Align::Center => f.write_str(self.side.keyword()),
            align => write!(
                f,
                "{}{}{}",
                self.side.keyword(),
                PLACEMENT_SEPARATOR,
                align.keyword()
            ),
        }
    }
}

impl FromStr for Placement {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Placement {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Placement {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.to_string()
    }
}
