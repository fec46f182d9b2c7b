//! Distance metrics that decide the silhouette of a creature
//!
//! Every metric measures how far a cell lies from the grid center. The grid
//! builder turns that distance into a fill probability, so the metric alone
//! decides whether a creature comes out round, pointed or stretched.

use crate::io::error::{AvatarError, invalid_argument};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Silhouette mode, chosen once per avatar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Euclidean falloff with a hard radius cutoff
    Circle,
    /// Manhattan falloff with a hard radius cutoff
    Diamond,
    /// Elliptical falloff whose orientation is redrawn for every cell
    Ellipse,
    /// Elliptical falloff stretched along the horizontal axis
    EllipseX,
    /// Elliptical falloff stretched along the vertical axis
    EllipseY,
}

impl Shape {
    /// Shapes drawn from when the caller does not pin one
    pub const RANDOM_CHOICES: [Self; 3] = [Self::Circle, Self::Diamond, Self::Ellipse];

    /// Every accepted shape, in CLI order
    pub const ALL: [Self; 5] = [
        Self::Circle,
        Self::Diamond,
        Self::Ellipse,
        Self::EllipseX,
        Self::EllipseY,
    ];

    /// Pick uniformly from [`Shape::RANDOM_CHOICES`]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..Self::RANDOM_CHOICES.len()) {
            0 => Self::Circle,
            1 => Self::Diamond,
            _ => Self::Ellipse,
        }
    }

    /// Whether cells beyond `grid_size / 2 + 1` are forced empty
    pub const fn has_radius_cutoff(self) -> bool {
        matches!(self, Self::Circle | Self::Diamond)
    }

    /// Lowercase name accepted by [`Shape::from_str`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Diamond => "diamond",
            Self::Ellipse => "ellipse",
            Self::EllipseX => "ellipse-x",
            Self::EllipseY => "ellipse-y",
        }
    }

    /// Distance from `point` to `center` under this shape's metric
    ///
    /// [`Shape::Ellipse`] consumes one random draw to pick its orientation;
    /// every other shape leaves `rng` untouched.
    pub fn distance<R: Rng + ?Sized>(self, point: [f64; 2], center: [f64; 2], rng: &mut R) -> f64 {
        match self {
            Self::Circle => euclidean(point, center),
            Self::Diamond => manhattan(point, center),
            Self::Ellipse => elliptical(point, center, Orientation::random(rng)),
            Self::EllipseX => elliptical(point, center, Orientation::Horizontal),
            Self::EllipseY => elliptical(point, center, Orientation::Vertical),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == wanted)
            .ok_or_else(|| {
                invalid_argument(
                    "shape",
                    &s,
                    &"expected one of circle, diamond, ellipse, ellipse-x, ellipse-y",
                )
            })
    }
}

/// Axis along which an elliptical silhouette is elongated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Wider than tall
    Horizontal,
    /// Taller than wide
    Vertical,
}

impl Orientation {
    /// Pick either orientation with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Straight-line distance
pub fn euclidean(point: [f64; 2], center: [f64; 2]) -> f64 {
    (point[0] - center[0]).hypot(point[1] - center[1])
}

/// Taxicab distance
pub fn manhattan(point: [f64; 2], center: [f64; 2]) -> f64 {
    (point[0] - center[0]).abs() + (point[1] - center[1]).abs()
}

/// Normalized elliptical distance scaled back to grid units
///
/// The short axis is normalized by half the center coordinate, so distance
/// grows twice as fast along it and the filled region stretches along the
/// other axis. The sum of squares is scaled by `2 * cx` for both orientations.
pub fn elliptical(point: [f64; 2], center: [f64; 2], orientation: Orientation) -> f64 {
    let [cx, cy] = center;
    let (x_radius, y_radius) = match orientation {
        Orientation::Horizontal => (cx, cy / 2.0),
        Orientation::Vertical => (cx / 2.0, cy),
    };
    let nx = (point[0] - cx) / x_radius;
    let ny = (point[1] - cy) / y_radius;
    nx.mul_add(nx, ny * ny) * cx * 2.0
}
