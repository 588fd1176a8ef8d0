//! Accent colors for the document header and table head.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const TEXT: Rgb = Rgb::new(33, 37, 41);
    pub const MUTED: Rgb = Rgb::new(108, 117, 125);
    pub const RULE: Rgb = Rgb::new(222, 226, 230);
    pub const STRIPE: Rgb = Rgb::new(248, 249, 250);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`.
    pub fn unit(&self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

/// The ten selectable accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeColor {
    #[default]
    Blue,
    Green,
    Red,
    Purple,
    Orange,
    Teal,
    Pink,
    Yellow,
    Gray,
    Black,
}

impl ThemeColor {
    /// All colors in table order; the first entry is the fallback.
    pub const ALL: [ThemeColor; 10] = [
        ThemeColor::Blue,
        ThemeColor::Green,
        ThemeColor::Red,
        ThemeColor::Purple,
        ThemeColor::Orange,
        ThemeColor::Teal,
        ThemeColor::Pink,
        ThemeColor::Yellow,
        ThemeColor::Gray,
        ThemeColor::Black,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Teal => "teal",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
            Self::Black => "black",
        }
    }

    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        let id = if id.eq_ignore_ascii_case("grey") { "gray" } else { id };
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(id))
            .unwrap_or(Self::ALL[0])
    }
}

impl From<String> for ThemeColor {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.id().to_string()
    }
}

/// Resolved colors for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header band and table head fill.
    pub accent: Rgb,
    /// Text drawn on top of `accent`.
    pub header_text: Rgb,
}

/// Look up the accent and contrasting header text color.
pub fn resolve_theme(color: ThemeColor) -> Theme {
    let (accent, header_text) = match color {
        ThemeColor::Blue => (Rgb::new(37, 99, 235), Rgb::WHITE),
        ThemeColor::Green => (Rgb::new(22, 163, 74), Rgb::WHITE),
        ThemeColor::Red => (Rgb::new(220, 38, 38), Rgb::WHITE),
        ThemeColor::Purple => (Rgb::new(147, 51, 234), Rgb::WHITE),
        ThemeColor::Orange => (Rgb::new(234, 88, 12), Rgb::WHITE),
        ThemeColor::Teal => (Rgb::new(13, 148, 136), Rgb::WHITE),
        ThemeColor::Pink => (Rgb::new(219, 39, 119), Rgb::WHITE),
        ThemeColor::Yellow => (Rgb::new(250, 204, 21), Rgb::BLACK),
        ThemeColor::Gray => (Rgb::new(75, 85, 99), Rgb::WHITE),
        ThemeColor::Black => (Rgb::new(17, 24, 39), Rgb::WHITE),
    };
    Theme {
        accent,
        header_text,
    }
}
