// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A text rendering of an iteration grid, for terminals.

use escape::MAX_ITER;
use fractal::IterationGrid;

/// Preview width, in characters.
pub const PREVIEW_WIDTH: usize = 50;
/// Preview height, in lines.
pub const PREVIEW_HEIGHT: usize = 40;

/// Counts above this are drawn.
pub const THRESHOLD: u8 = MAX_ITER / 10;

/// One line per row, `X` where the count exceeds `THRESHOLD` and a
/// space elsewhere.  Every line, including the last, ends in `\n`.
pub fn text(grid: &IterationGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|&n| if n > THRESHOLD { 'X' } else { ' ' }));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_a_tenth_of_the_cap() {
        assert_eq!(THRESHOLD, 25);
    }

    #[test]
    fn draws_only_above_threshold() {
        let mut grid = IterationGrid::new(4, 2);
        grid.as_mut_raw()
            .copy_from_slice(&[0, 25, 26, MAX_ITER, MAX_ITER, 1, 24, 200]);
        assert_eq!(text(&grid), "  XX\nX  X\n");
    }
}
