// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixel buffers produced by a render.  Both are row-major and fixed
//! in size once allocated; workers fill them through disjoint row
//! slices handed out by the band executor.

use planes::Pixel;
use palette::Rgba;

/// Bytes per pixel in a `FractalImage`.
pub const RGBA_CHANNELS: usize = 4;

/// A `width × height` grid of RGBA colors, stored as packed bytes so
/// it can go straight to an encoder.
#[derive(Clone, Debug, PartialEq)]
pub struct FractalImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl FractalImage {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        FractalImage {
            width,
            height,
            pixels: vec![0 as u8; width * height * RGBA_CHANNELS],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The color at a pixel.  Panics if the pixel is outside the image.
    pub fn get(&self, pixel: Pixel) -> Rgba {
        assert!(pixel.row < self.height && pixel.col < self.width);
        let offset = (pixel.row * self.width + pixel.col) * RGBA_CHANNELS;
        let mut rgba = [0 as u8; RGBA_CHANNELS];
        rgba.copy_from_slice(&self.pixels[offset..offset + RGBA_CHANNELS]);
        Rgba(rgba)
    }

    /// Packed RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_mut_raw(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

/// A `width × height` grid of raw iteration counts.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationGrid {
    width: usize,
    height: usize,
    counts: Vec<u8>,
}

impl IterationGrid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        IterationGrid {
            width,
            height,
            counts: vec![0 as u8; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The iteration count at a pixel.  Panics if the pixel is
    /// outside the grid.
    pub fn get(&self, pixel: Pixel) -> u8 {
        assert!(pixel.row < self.height && pixel.col < self.width);
        self.counts[pixel.row * self.width + pixel.col]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> ::std::slice::Chunks<u8> {
        self.counts.chunks(self.width)
    }

    pub(crate) fn as_mut_raw(&mut self) -> &mut [u8] {
        &mut self.counts
    }
}
