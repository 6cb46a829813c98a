#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `n` on the complex plane
//! for which the recurrence `z = z² + n` stays bounded.  An
//! escape-time render colors each pixel by how many steps its point
//! survives before `|z|` crosses a fixed radius; points that survive
//! the cap are presumed to be inside the set and painted black.
//!
//! Rendering is split into horizontal bands of rows, each computed
//! by its own thread directly into a disjoint slice of the output
//! buffer.  The number of bands is a performance knob only: a render
//! with one band and a render with many produce the same bytes.
//!
//! ```no_run
//! use mandelbrot::{render, ViewWindow};
//!
//! let image = render(2560, 2048, &ViewWindow::default(), 8).unwrap();
//! assert_eq!(image.as_raw().len(), 2560 * 2048 * 4);
//! ```

extern crate crossbeam;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod bands;
pub mod config;
pub mod error;
pub mod escape;
pub mod fractal;
pub mod palette;
pub mod planes;
pub mod preview;

pub use bands::{render, render_iterations, render_with_palette};
pub use config::RenderConfig;
pub use error::RenderError;
pub use escape::{iterations, MAX_ITER};
pub use fractal::{FractalImage, IterationGrid};
pub use palette::{Palette, Rgba};
pub use planes::{Pixel, PlaneMapper, ViewWindow};
