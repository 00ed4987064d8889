//! Value kinds a matching game can be played with.

use std::fmt;
use std::hash::Hash;

use crate::session::ActivityKind;

/// Capabilities a value needs to take part in a matching round
pub trait RoundValue: Clone + fmt::Debug {
    /// Identity used for equality and uniqueness of options
    type Key: Eq + Hash + Clone + fmt::Debug;

    /// Activity reported when a session over this value kind completes
    const KIND: ActivityKind;

    fn key(&self) -> Self::Key;

    /// Text shown on the option button
    fn label(&self) -> String;

    /// Candidate pool used when the host does not supply one
    fn default_pool() -> Vec<Self>;
}

/// An uppercase latin letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(pub char);

impl RoundValue for Letter {
    type Key = char;
    const KIND: ActivityKind = ActivityKind::Letters;

    fn key(&self) -> char {
        self.0
    }

    fn label(&self) -> String {
        self.0.to_string()
    }

    fn default_pool() -> Vec<Self> {
        ('A'..='Z').map(Letter).collect()
    }
}

/// A small counting number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number(pub u8);

impl Number {
    /// One star per unit, shown next to the target as a counting aid
    pub fn stars(&self) -> String {
        "⭐".repeat(self.0 as usize)
    }
}

impl RoundValue for Number {
    type Key = u8;
    const KIND: ActivityKind = ActivityKind::Numbers;

    fn key(&self) -> u8 {
        self.0
    }

    fn label(&self) -> String {
        self.0.to_string()
    }

    fn default_pool() -> Vec<Self> {
        (1..=5).map(Number).collect()
    }
}

/// A named colour with its hex code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const COLOR_SWATCHES: &[ColorSwatch] = &[
    ColorSwatch { name: "Red", hex: "#EF4444" },
    ColorSwatch { name: "Blue", hex: "#3B82F6" },
    ColorSwatch { name: "Green", hex: "#22C55E" },
    ColorSwatch { name: "Yellow", hex: "#FACC15" },
    ColorSwatch { name: "Purple", hex: "#A855F7" },
    ColorSwatch { name: "Orange", hex: "#F97316" },
];

impl ColorSwatch {
    /// Parse `#RRGGBB` into components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

impl RoundValue for ColorSwatch {
    type Key = &'static str;
    const KIND: ActivityKind = ActivityKind::Colors;

    fn key(&self) -> &'static str {
        self.name
    }

    fn label(&self) -> String {
        self.name.to_string()
    }

    fn default_pool() -> Vec<Self> {
        COLOR_SWATCHES.to_vec()
    }
}
