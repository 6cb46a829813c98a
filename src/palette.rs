// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps iteration counts to colors.
//!
//! The smooth palette is a piecewise-linear gradient through five
//! control points, running deep blue, sky blue, near-white, orange,
//! near-black, and back toward the starting blue as the count
//! approaches the cap.  Points that never escaped are painted black.
//! The banded palette paints flat colors keyed on raw counts and
//! exists mostly for quick, high-contrast previews.

use std::str::FromStr;

use escape::MAX_ITER;

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// An opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }
}

/// Painted on points presumed to be inside the set.
pub const INTERIOR: Rgba = Rgba([0, 0, 0, 255]);

struct Stop {
    position: f64,
    rgb: [u8; 3],
}

// The last stop repeats the first so the gradient closes on itself.
const SMOOTH_STOPS: [Stop; 6] = [
    Stop { position: 0.0, rgb: [0, 7, 100] },
    Stop { position: 0.16, rgb: [32, 107, 203] },
    Stop { position: 0.42, rgb: [237, 255, 255] },
    Stop { position: 0.6425, rgb: [255, 170, 0] },
    Stop { position: 0.8575, rgb: [0, 2, 0] },
    Stop { position: 1.0, rgb: [0, 7, 100] },
];

/// Upper bounds (exclusive) of each flat band, and its color.
const BANDS: [(u8, [u8; 3]); 4] = [
    (8, [0, 7, 100]),
    (24, [32, 107, 203]),
    (160, [255, 170, 0]),
    (MAX_ITER, [237, 255, 255]),
];

/// The available color mappings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Piecewise-linear gradient over the normalized count.
    Smooth,
    /// Flat colors keyed on the raw count.
    Banded,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Smooth
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smooth" => Ok(Palette::Smooth),
            "banded" => Ok(Palette::Banded),
            _ => Err(format!("Unknown palette '{}', expected smooth or banded", s)),
        }
    }
}

impl Palette {
    /// Map an iteration count to a color.  Total over `[0, MAX_ITER]`,
    /// and `MAX_ITER` is always `INTERIOR`.
    pub fn color_at(self, iterations: u8) -> Rgba {
        match self {
            Palette::Smooth => smooth(iterations),
            Palette::Banded => banded(iterations),
        }
    }
}

fn smooth(iterations: u8) -> Rgba {
    if iterations == MAX_ITER {
        return INTERIOR;
    }
    let position = f64::from(iterations) / f64::from(MAX_ITER);

    for pair in SMOOTH_STOPS.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        if position >= from.position && position < to.position {
            let offset = (position - from.position) / (to.position - from.position);
            return Rgba::opaque(
                lerp(from.rgb[0], to.rgb[0], offset),
                lerp(from.rgb[1], to.rgb[1], offset),
                lerp(from.rgb[2], to.rgb[2], offset),
            );
        }
    }
    // Unreachable for counts below the cap: position < 1.0.
    INTERIOR
}

fn lerp(from: u8, to: u8, offset: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    // Float-to-int casts saturate, so this also clamps.
    (from + offset * (to - from)) as u8
}

fn banded(iterations: u8) -> Rgba {
    BANDS
        .iter()
        .find(|&&(limit, _)| iterations < limit)
        .map(|&(_, rgb)| Rgba::opaque(rgb[0], rgb[1], rgb[2]))
        .unwrap_or(INTERIOR)
}
