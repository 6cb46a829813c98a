// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything a render needs, gathered in one place, with the
//! defaults used for full-size renders.

use num_cpus;

use bands;
use error::RenderError;
use fractal::{FractalImage, IterationGrid};
use palette::Palette;
use planes::ViewWindow;

/// Default output width.
pub const DEFAULT_WIDTH: usize = 2560;
/// Default output height.
pub const DEFAULT_HEIGHT: usize = 2048;

/// The parameters of a single render.  Once built, a render reads
/// but never changes it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub width: usize,
    /// Output height in pixels.
    pub height: usize,
    /// The region of the complex plane to draw.
    pub window: ViewWindow,
    /// Number of concurrent bands.
    pub workers: usize,
    /// How counts become colors.
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            window: ViewWindow::default(),
            workers: num_cpus::get(),
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Rejects any configuration a render would refuse.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.workers == 0 {
            return Err(RenderError::NoWorkers);
        }
        self.window.validate()
    }

    /// Render a color image.
    pub fn render(&self) -> Result<FractalImage, RenderError> {
        self.validate()?;
        bands::render_with_palette(self.width, self.height, &self.window, self.workers, self.palette)
    }

    /// Render raw iteration counts; the palette is ignored.
    pub fn render_iterations(&self) -> Result<IterationGrid, RenderError> {
        self.validate()?;
        bands::render_iterations(self.width, self.height, &self.window, self.workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_render() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (2560, 2048));
        assert_eq!(config.window, ViewWindow::new(-2.0, 1.0, 0.0));
        assert_eq!(config.palette, Palette::Smooth);
        assert!(config.workers >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_catches_each_field() {
        let good = RenderConfig {
            width: 8,
            height: 8,
            workers: 2,
            ..RenderConfig::default()
        };
        assert!(good.validate().is_ok());
        assert_eq!(
            RenderConfig { height: 0, ..good }.validate(),
            Err(RenderError::EmptyImage {
                width: 8,
                height: 0
            })
        );
        assert_eq!(
            RenderConfig { workers: 0, ..good }.validate(),
            Err(RenderError::NoWorkers)
        );
        let inverted = ViewWindow::new(1.0, 0.0, 0.0);
        assert!(RenderConfig {
            window: inverted,
            ..good
        }
        .validate()
        .is_err());
    }

    #[test]
    fn render_uses_configured_size() {
        let config = RenderConfig {
            width: 12,
            height: 6,
            workers: 2,
            ..RenderConfig::default()
        };
        let image = config.render().unwrap();
        assert_eq!((image.width(), image.height()), (12, 6));
        let grid = config.render_iterations().unwrap();
        assert_eq!((grid.width(), grid.height()), (12, 6));
    }
}
