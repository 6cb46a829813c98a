// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The band executor.  An image's rows are split into contiguous
//! horizontal bands, one per worker, and each worker fills its own
//! slice of the output buffer.  The slices are carved out of the
//! buffer with `split_at_mut`, so no two workers can ever touch the
//! same pixel and no locking is needed.  With a single worker the
//! render is an ordinary sequential pass; the output is identical
//! regardless of the worker count.

use std::mem;
use std::ops::Range;
use std::panic;
use std::time::Instant;

use crossbeam;

use error::RenderError;
use escape::iterations;
use fractal::{FractalImage, IterationGrid, RGBA_CHANNELS};
use palette::Palette;
use planes::{Pixel, PlaneMapper, ViewWindow};

/// Split `height` rows into `workers` half-open bands of
/// `height / workers` rows each, with the last band absorbing the
/// remainder.  The bands cover `[0, height)` exactly once.  When
/// there are more workers than rows the leading bands are empty.
pub fn split(height: usize, workers: usize) -> Vec<Range<usize>> {
    let size = if workers == 0 { 0 } else { height / workers };
    (0..workers)
        .map(|i| {
            let start = i * size;
            let end = if i + 1 == workers { height } else { start + size };
            start..end
        })
        .collect()
}

/// Render the window with the smooth palette.
pub fn render(
    width: usize,
    height: usize,
    window: &ViewWindow,
    workers: usize,
) -> Result<FractalImage, RenderError> {
    render_with_palette(width, height, window, workers, Palette::default())
}

/// Render the window, coloring each pixel with `palette`.
pub fn render_with_palette(
    width: usize,
    height: usize,
    window: &ViewWindow,
    workers: usize,
    palette: Palette,
) -> Result<FractalImage, RenderError> {
    let mapper = prepare(width, height, window, workers)?;
    let mut image = FractalImage::new(width, height);
    execute(&mapper, image.as_mut_raw(), RGBA_CHANNELS, workers, |count, pixel| {
        pixel.copy_from_slice(&palette.color_at(count).0)
    });
    Ok(image)
}

/// Render the window, keeping the raw iteration counts.
pub fn render_iterations(
    width: usize,
    height: usize,
    window: &ViewWindow,
    workers: usize,
) -> Result<IterationGrid, RenderError> {
    let mapper = prepare(width, height, window, workers)?;
    let mut grid = IterationGrid::new(width, height);
    execute(&mapper, grid.as_mut_raw(), 1, workers, |count, pixel| {
        pixel[0] = count
    });
    Ok(grid)
}

// All validation happens here, before anything is allocated or
// spawned.
fn prepare(
    width: usize,
    height: usize,
    window: &ViewWindow,
    workers: usize,
) -> Result<PlaneMapper, RenderError> {
    if workers == 0 {
        return Err(RenderError::NoWorkers);
    }
    let mapper = PlaneMapper::new(width, height, window)?;
    let (y_upper, y_lower) = mapper.y_bounds();
    debug!(
        "{}x{} over {:?}: step {}, imaginary bounds [{}, {}]",
        width,
        height,
        window,
        mapper.step(),
        y_lower,
        y_upper
    );
    Ok(mapper)
}

/// Fill `buffer`, `channels` bytes per pixel, by evaluating every
/// pixel of `mapper` and handing its count to `paint`.
fn execute<F>(mapper: &PlaneMapper, buffer: &mut [u8], channels: usize, workers: usize, paint: F)
where
    F: Fn(u8, &mut [u8]) + Sync,
{
    let started = Instant::now();
    let width = mapper.width();
    let row_len = width * channels;
    assert_eq!(buffer.len(), mapper.height() * row_len);

    // No point spawning workers with nothing to do.
    let workers = workers.min(mapper.height());
    let bands = split(mapper.height(), workers);
    debug!("{} rows in {} bands: {:?}", mapper.height(), bands.len(), bands);

    let mut slices: Vec<(Range<usize>, &mut [u8])> = Vec::with_capacity(bands.len());
    let mut rest = buffer;
    for band in bands {
        let (head, tail) = mem::replace(&mut rest, &mut []).split_at_mut(band.len() * row_len);
        slices.push((band, head));
        rest = tail;
    }
    assert!(rest.is_empty(), "bands do not cover every row");

    let paint = &paint;
    let result = crossbeam::scope(|spawner| {
        for (band, slice) in slices {
            spawner.spawn(move |_| {
                let pixels = slice.chunks_mut(channels);
                for ((row, col), pixel) in iproduct!(band.clone(), 0..width).zip(pixels) {
                    let n = mapper.pixel_to_point(Pixel::new(row, col));
                    paint(iterations(n), pixel);
                }
                trace!("band {:?} done", band);
            });
        }
    });
    if let Err(cause) = result {
        panic::resume_unwind(cause);
    }

    info!(
        "rendered {}x{} with {} workers in {:?}",
        width,
        mapper.height(),
        workers,
        started.elapsed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape::MAX_ITER;

    fn assert_exact_cover(height: usize, workers: usize) {
        let bands = split(height, workers);
        assert_eq!(bands.len(), workers);
        let mut seen = vec![0; height];
        let mut next = 0;
        for band in &bands {
            assert_eq!(band.start, next, "bands must be contiguous");
            for row in band.clone() {
                seen[row] += 1;
            }
            next = band.end;
        }
        assert_eq!(next, height);
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn split_covers_every_row_once() {
        for height in 1..64 {
            for workers in 1..20 {
                assert_exact_cover(height, workers);
            }
        }
    }

    #[test]
    fn split_gives_remainder_to_last_band() {
        assert_eq!(split(10, 3), vec![0..3, 3..6, 6..10]);
        assert_eq!(split(2048, 4), vec![0..512, 512..1024, 1024..1536, 1536..2048]);
        assert_eq!(split(2, 3), vec![0..0, 0..0, 0..2]);
    }

    #[test]
    fn split_with_no_workers_is_empty() {
        assert!(split(10, 0).is_empty());
    }

    #[test]
    fn rejects_bad_configuration() {
        let window = ViewWindow::default();
        assert_eq!(render(10, 10, &window, 0).unwrap_err(), RenderError::NoWorkers);
        assert_eq!(
            render(0, 10, &window, 2).unwrap_err(),
            RenderError::EmptyImage {
                width: 0,
                height: 10
            }
        );
        assert!(render(10, 10, &ViewWindow::new(1.0, -2.0, 0.0), 2).is_err());
    }

    #[test]
    fn counts_match_pointwise_evaluation() {
        let window = ViewWindow::default();
        let grid = render_iterations(30, 20, &window, 3).unwrap();
        let mapper = PlaneMapper::new(30, 20, &window).unwrap();
        for row in 0..20 {
            for col in 0..30 {
                let pixel = Pixel::new(row, col);
                assert_eq!(grid.get(pixel), iterations(mapper.pixel_to_point(pixel)));
            }
        }
    }

    #[test]
    fn more_workers_than_rows() {
        let window = ViewWindow::default();
        let single = render_iterations(16, 3, &window, 1).unwrap();
        let many = render_iterations(16, 3, &window, 8).unwrap();
        assert_eq!(single, many);
    }

    #[test]
    fn colors_come_from_the_palette() {
        let window = ViewWindow::default();
        let image = render_with_palette(20, 16, &window, 2, Palette::Banded).unwrap();
        let grid = render_iterations(20, 16, &window, 1).unwrap();
        for row in 0..16 {
            for col in 0..20 {
                let pixel = Pixel::new(row, col);
                assert_eq!(image.get(pixel), Palette::Banded.color_at(grid.get(pixel)));
            }
        }
    }

    #[test]
    fn center_of_default_view_is_interior() {
        // Pixel (20, 25) of a 50x40 render lands on -0.5 + 0i.
        let grid = render_iterations(50, 40, &ViewWindow::default(), 4).unwrap();
        assert_eq!(grid.get(Pixel::new(20, 25)), MAX_ITER);
        assert!(grid.get(Pixel::new(0, 0)) < 10);
    }
}
