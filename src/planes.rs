// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at the
//! upper-left corner, and a window on the complex plane described by
//! its left and right edges on the real axis and its center on the
//! imaginary axis.  Pixels are square, so the window's height is
//! derived from the image's aspect ratio.
use num::Complex;

use error::RenderError;

/// The region of the complex plane projected onto the image.  Only
/// the horizontal extent is given; the vertical extent follows from
/// the image's proportions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewWindow {
    /// Real component of the left edge.
    pub x_left: f64,
    /// Real component of the right edge.
    pub x_right: f64,
    /// Imaginary component of the vertical center.
    pub y_center: f64,
}

impl ViewWindow {
    /// Constructor.  Does not validate; see `validate`.
    pub fn new(x_left: f64, x_right: f64, y_center: f64) -> Self {
        ViewWindow {
            x_left,
            x_right,
            y_center,
        }
    }

    /// The window must have positive width and finite edges.
    pub fn validate(&self) -> Result<(), RenderError> {
        let finite =
            self.x_left.is_finite() && self.x_right.is_finite() && self.y_center.is_finite();
        if !finite || self.x_right <= self.x_left {
            return Err(RenderError::InvalidWindow {
                x_left: self.x_left,
                x_right: self.x_right,
                y_center: self.y_center,
            });
        }
        Ok(())
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        ViewWindow::new(-2.0, 1.0, 0.0)
    }
}

/// Describes the row and column of a pixel.  Rows grow downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel {
    /// Distance from the top edge.
    pub row: usize,
    /// Distance from the left edge.
    pub col: usize,
}

impl Pixel {
    /// Constructor.
    pub fn new(row: usize, col: usize) -> Self {
        Pixel { row, col }
    }
}

/// The distance on the complex plane between two adjacent pixels,
/// horizontally or vertically.
pub fn compute_step(window: &ViewWindow, width: usize) -> f64 {
    (window.x_right - window.x_left) / (width as f64)
}

/// The upper and lower imaginary bounds of the image, in that order.
pub fn compute_y_bounds(window: &ViewWindow, step: f64, height: usize) -> (f64, f64) {
    let half = (step * (height as f64)) / 2.0;
    (window.y_center + half, window.y_center - half)
}

/// Maps a pixel to its point on the complex plane.  The imaginary
/// axis runs upward while rows run downward, hence the subtraction.
pub fn complex_at(pixel: Pixel, x_left: f64, step: f64, y_upper: f64) -> Complex<f64> {
    Complex::new(
        x_left + (pixel.col as f64) * step,
        y_upper - (pixel.row as f64) * step,
    )
}

/// Contains the definitions of two planes: the integral pixel grid
/// and the complex window it views.  The step and vertical bounds are
/// fixed at construction and never recomputed.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
    x_left: f64,
    step: f64,
    y_upper: f64,
    y_lower: f64,
}

impl PlaneMapper {
    /// Constructor.  Takes the dimensions of the image and the
    /// window it views, and derives the pixel spacing and the
    /// vertical bounds once.
    pub fn new(width: usize, height: usize, window: &ViewWindow) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }
        window.validate()?;

        let step = compute_step(window, width);
        let (y_upper, y_lower) = compute_y_bounds(window, step, height);

        Ok(PlaneMapper {
            width,
            height,
            x_left: window.x_left,
            step,
            y_upper,
            y_lower,
        })
    }

    /// Width of the pixel grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the pixel grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false for a constructed mapper; present for symmetry
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spacing between adjacent pixels on the complex plane.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Imaginary bounds of the top and bottom edges.
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y_upper, self.y_lower)
    }

    /// Given a pixel on the integral plane, return the point on the
    /// complex plane it samples.
    pub fn pixel_to_point(&self, pixel: Pixel) -> Complex<f64> {
        complex_at(pixel, self.x_left, self.step, self.y_upper)
    }
}
