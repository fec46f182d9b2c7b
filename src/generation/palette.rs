//! Colors, candidate color sets and the weighted palette picker

use crate::io::configuration::{
    MAIN_COLOR_WEIGHT, MIN_DISTINCT_COLORS, PALETTE_LENGTH, SECONDARY_COLOR_WEIGHT,
};
use crate::io::error::{AvatarError, Result, invalid_argument, invalid_configuration};
use image::Rgba;
use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::str::FromStr;

/// Opaque sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Build a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Fully opaque RGBA pixel of this color
    pub const fn to_rgba(self) -> Rgba<u8> {
        let [r, g, b] = self.0;
        Rgba([r, g, b, u8::MAX])
    }

    /// Six lowercase hex digits without the leading `#`
    pub fn hex_digits(self) -> String {
        let [r, g, b] = self.0;
        format!("{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex_digits())
    }
}

impl FromStr for Color {
    type Err = AvatarError;

    /// Parse `#rrggbb`; the `#` is optional and digits are case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let parse_error = |reason: &str| AvatarError::ColorParse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(parse_error("expected six hex digits, e.g. #8caba1"));
        }
        // `from_str_radix` alone would accept a sign such as "+f"
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(parse_error("contains a non-hex digit"));
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| parse_error("contains a non-hex digit"))
        };

        Ok(Self([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }
}

/// Deduplicated list of candidate palette colors
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSet {
    colors: Vec<Color>,
}

impl ColorSet {
    /// Deduplicate `colors`, keeping first occurrences in order
    ///
    /// # Errors
    ///
    /// Returns [`AvatarError::InvalidConfiguration`] if fewer than three
    /// distinct colors remain
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self> {
        let mut distinct: Vec<Color> = Vec::new();
        let mut supplied = 0;
        for color in colors {
            supplied += 1;
            if !distinct.contains(&color) {
                distinct.push(color);
            }
        }

        if distinct.len() < MIN_DISTINCT_COLORS {
            return Err(invalid_configuration(
                "colors",
                &distinct.len(),
                &format!("at least {MIN_DISTINCT_COLORS} distinct colors are required"),
            ));
        }

        if distinct.len() < supplied {
            warn!(
                "Dropped {} duplicate candidate colors ({} remain)",
                supplied - distinct.len(),
                distinct.len()
            );
        }

        Ok(Self { colors: distinct })
    }

    /// Parse and deduplicate a list of hex color strings
    ///
    /// # Errors
    ///
    /// Returns [`AvatarError::ColorParse`] for a malformed entry, or
    /// [`AvatarError::InvalidConfiguration`] if fewer than three distinct
    /// colors remain
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|s| s.as_ref().parse::<Color>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// Test whether `color` is a candidate
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Number of distinct candidates
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; construction rejects short lists
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Candidates in configuration order
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Color> {
        self.colors
            .choose(rng)
            .copied()
            .ok_or_else(|| invalid_configuration("colors", &0, &"candidate color list is empty"))
    }
}

/// Weighted seven-entry palette: four dominant, two secondary, one tertiary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    main: Color,
    secondary: Color,
    tertiary: Color,
    entries: [Color; PALETTE_LENGTH],
}

impl Palette {
    /// Build the weighted list from three colors
    pub fn new(main: Color, secondary: Color, tertiary: Color) -> Self {
        let entries = std::array::from_fn(|i| {
            if i < MAIN_COLOR_WEIGHT {
                main
            } else if i < MAIN_COLOR_WEIGHT + SECONDARY_COLOR_WEIGHT {
                secondary
            } else {
                tertiary
            }
        });
        Self {
            main,
            secondary,
            tertiary,
            entries,
        }
    }

    /// Dominant color
    pub const fn main(&self) -> Color {
        self.main
    }

    /// First accent color
    pub const fn secondary(&self) -> Color {
        self.secondary
    }

    /// Second accent color
    pub const fn tertiary(&self) -> Color {
        self.tertiary
    }

    /// The weighted list `[main; 4] + [secondary; 2] + [tertiary; 1]`
    pub const fn entries(&self) -> &[Color; PALETTE_LENGTH] {
        &self.entries
    }

    /// Draw one color uniformly from the weighted list
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.entries.choose(rng).copied().unwrap_or(self.main)
    }
}

/// Choose a dominant color and two distinct accents from `colors`
///
/// A pinned `main_color` is used as the dominant color; otherwise it is drawn
/// uniformly. Accents are redrawn until they differ from every earlier pick,
/// which terminates because [`ColorSet`] holds at least three distinct colors.
///
/// # Errors
///
/// Returns [`AvatarError::InvalidArgument`] if `main_color` is not a candidate
pub fn pick_colors<R: Rng + ?Sized>(
    colors: &ColorSet,
    main_color: Option<Color>,
    rng: &mut R,
) -> Result<Palette> {
    let main = match main_color {
        Some(color) if colors.contains(color) => color,
        Some(color) => {
            return Err(invalid_argument(
                "main_color",
                &color,
                &"not one of the candidate colors",
            ));
        }
        None => colors.choose(rng)?,
    };

    let mut secondary = colors.choose(rng)?;
    while secondary == main {
        secondary = colors.choose(rng)?;
    }

    let mut tertiary = colors.choose(rng)?;
    while tertiary == main || tertiary == secondary {
        tertiary = colors.choose(rng)?;
    }

    Ok(Palette::new(main, secondary, tertiary))
}
