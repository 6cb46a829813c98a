// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  Given a point on the complex plane,
//! iterate `z = z² + n` starting from `z = n` and count how many
//! steps it takes before `|z|` reaches the escape radius.  Points
//! that survive `MAX_ITER` steps are presumed to be inside the set.

use num::Complex;

/// The iteration cap.  It fits exactly in a `u8`, and the palette
/// breakpoints are defined relative to it.
pub const MAX_ITER: u8 = 255;

/// `|z| < 4`, compared squared to avoid the square root.
const ESCAPE_RADIUS_SQR: f64 = 16.0;

/// Returns the number of iterations `n` survives, in `[0, MAX_ITER]`.
/// Both comparisons are strict: the count never exceeds `MAX_ITER`,
/// and a point sitting exactly on the radius has escaped.
pub fn iterations(n: Complex<f64>) -> u8 {
    let mut z = n;
    let mut count = 0;
    while z.norm_sqr() < ESCAPE_RADIUS_SQR && count < MAX_ITER {
        z = z * z + n;
        count += 1;
    }
    count
}
