// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color palettes and small presentation helpers.
//!
//! Front faces draw from the pastel list, back faces from the dark list.
//! Duplicate entries are intentional; a uniform pick over the list simply
//! weights those colors slightly higher.

use alloc::string::String;
use alloc::vec::Vec;

/// Bright pastel backgrounds for front faces.
pub const PASTEL: &[&str] = &[
    "#ffd1dc", "#ffe4b5", "#b5ead7", "#c7ceea", "#fdfd96", "#baffc9", "#bae1ff", "#fff1ba",
    "#ffb7b2", "#e2f0cb", "#ffe0f0", "#ffe5ec", "#e0bbff", "#d0f4de", "#f1f7b5", "#b5ead7",
    "#b5d8ff", "#f7cac9", "#f6eac2", "#e2f0cb", "#f3ffe3", "#e3f6fd", "#fff5e1", "#f9e2ae",
    "#e4f9f5", "#f7f6e7", "#fbe7c6", "#e2ece9", "#f6dfeb",
];

/// Dark backgrounds for back faces.
pub const DARK: &[&str] = &[
    "#22223b", "#4a4e69", "#232946", "#1a1a2e", "#2d3142", "#222831", "#393e46", "#212121",
    "#343a40", "#2c2c54", "#1b1b2f", "#162447", "#1f4068", "#283655", "#3a3a3a", "#232931",
    "#393e46", "#222f3e", "#2d3436", "#353b48", "#2f3640", "#1e272e", "#485460", "#3d3d5c",
    "#2c3e50", "#22313f", "#1a1a40", "#232b2b", "#2e2e38", "#22223b",
];

/// Returns the inverted-RGB complement of a `#rgb` or `#rrggbb` hex color.
///
/// Used by hosts to pick a text color that stays readable on any face
/// background. Returns `None` for strings that are not a 3- or 6-digit hex
/// color.
#[must_use]
pub fn complementary(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        String::from(hex)
    };
    if expanded.len() != 6 || !expanded.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some(alloc::format!(
        "#{:02x}{:02x}{:02x}",
        255 - r,
        255 - g,
        255 - b
    ))
}

/// Converts a `snake_case` dictionary name to `Title Case` for display.
#[must_use]
pub fn title_case_from_snake(name: &str) -> String {
    let lowered = name.to_lowercase();
    let words: Vec<String> = lowered
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    words.join(" ")
}
