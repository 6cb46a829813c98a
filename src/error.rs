// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The only way a render can fail is by being handed a configuration
//! it cannot honor.  Everything past validation is total.

/// Rejections raised before any worker is dispatched.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum RenderError {
    /// One or both image dimensions were zero.
    #[fail(display = "image dimensions must be positive, got {}x{}", width, height)]
    EmptyImage {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// A render needs at least one worker.
    #[fail(display = "worker count must be at least 1")]
    NoWorkers,

    /// The view window is empty, inverted, or not finite.
    #[fail(
        display = "view window must satisfy x_left < x_right with finite bounds, got [{}, {}] centered on {}",
        x_left, x_right, y_center
    )]
    InvalidWindow {
        /// Left edge on the real axis.
        x_left: f64,
        /// Right edge on the real axis.
        x_right: f64,
        /// Center on the imaginary axis.
        y_center: f64,
    },
}
