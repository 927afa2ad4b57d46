// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SyntaxDefinition;

/// Highest color pair id that a definition may use. Rules past this get no color.
pub const MAX_COLOR_PAIRS: u16 = 256;

/// Component range of the color space that terminal backends are handed.
pub const RGB1000_MAX: u16 = 1000;

/// A color as written in a syntax file, each component `0..=255`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The same color rescaled to `0..=1000` per component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb1000 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

/// Identifies a registered (foreground) color. Ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorPairId(pub u16);

/// A color pair assignment for one rule of a [`SyntaxDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub id: ColorPairId,
    pub fg: Rgb1000,
}

fn clamp_component(value: i64) -> u8 { u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX) }

fn to_1000(value: u8) -> u16 {
    u16::try_from(u32::from(value) * u32::from(RGB1000_MAX) / 255).unwrap_or(RGB1000_MAX)
}

fn from_1000(value: u16) -> u8 {
    let value = u32::from(value.min(RGB1000_MAX));
    u8::try_from((value * 255 + 500) / 1000).unwrap_or(u8::MAX)
}

impl RgbColor {
    #[must_use]
    pub fn from_clamped(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_component(r),
            g: clamp_component(g),
            b: clamp_component(b),
        }
    }

    /// `v * 1000 / 255`, rounded down.
    #[must_use]
    pub fn to_rgb1000(self) -> Rgb1000 {
        Rgb1000 {
            r: to_1000(self.r),
            g: to_1000(self.g),
            b: to_1000(self.b),
        }
    }
}

impl Rgb1000 {
    /// Inverse of [`RgbColor::to_rgb1000`]. Rounding makes the round trip exact.
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        RgbColor {
            r: from_1000(self.r),
            g: from_1000(self.g),
            b: from_1000(self.b),
        }
    }
}

/// Give each rule of `definition` a color pair, in rule order, starting at id 1. The
/// result has one entry per rule. Rules past [`MAX_COLOR_PAIRS`] get `None` and are
/// rendered plain.
#[must_use]
pub fn assign_color_pairs(definition: &SyntaxDefinition) -> Vec<Option<ColorPair>> {
    let mut it = Vec::with_capacity(definition.rules.len());
    for (index, rule) in definition.rules.iter().enumerate() {
        let id = u16::try_from(index + 1).unwrap_or(u16::MAX);
        if id > MAX_COLOR_PAIRS {
            tracing::warn!(
                message = "out of color pairs, rule will not be colored",
                rule_index = index,
                max = MAX_COLOR_PAIRS
            );
            it.push(None);
            continue;
        }
        it.push(Some(ColorPair {
            id: ColorPairId(id),
            fg: rule.color.to_rgb1000(),
        }));
    }
    it
}
