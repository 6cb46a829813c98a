extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgGroup, ArgMatches};
use failure::Error;
use image::png::PNGEncoder;
use image::ColorType;
use mandelbrot::preview::{self, PREVIEW_HEIGHT, PREVIEW_WIDTH};
use mandelbrot::{FractalImage, Palette, RenderConfig, ViewWindow};
use std::fs::File;
use std::io::BufWriter;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const PREVIEW: &str = "preview";
const SIZE: &str = "size";
const WINDOW: &str = "window";
const YCENTER: &str = "ycenter";
const THREADS: &str = "threads";
const PALETTE: &str = "palette";
const VERBOSE: &str = "verbose";

const MAX_THREADS: usize = 1024;

fn args<'a>(default_threads: &'a str) -> ArgMatches<'a> {
    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Banded multi-threaded Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(PREVIEW)
                .long(PREVIEW)
                .help("Print a text preview to stdout"),
        )
        .group(
            ArgGroup::with_name("target")
                .args(&[OUTPUT, PREVIEW])
                .multiple(true)
                .required(true),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("2560x2048")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image (the preview defaults to 50x40)"),
        )
        .arg(
            Arg::with_name(WINDOW)
                .required(false)
                .long(WINDOW)
                .short("w")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,1.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse window edges"))
                .help("Left and right edges of the window on the real axis"),
        )
        .arg(
            Arg::with_name(YCENTER)
                .required(false)
                .long(YCENTER)
                .short("y")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.0")
                .validator(|s| {
                    validate_range(
                        &s,
                        -4.0_f64,
                        4.0_f64,
                        "Could not parse vertical center",
                        "Vertical center must be between -4 and 4",
                    )
                })
                .help("Center of the window on the imaginary axis"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of bands rendered concurrently"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .required(false)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .possible_values(&["smooth", "banded"])
                .default_value("smooth")
                .help("Color palette"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .short("v")
                .multiple(true)
                .help("Log progress; repeat for more detail"),
        )
        .get_matches()
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn write_image(outfile: &str, image: &FractalImage) -> Result<(), Error> {
    let output = BufWriter::new(File::create(outfile)?);
    let encoder = PNGEncoder::new(output);
    encoder.encode(
        image.as_raw(),
        image.width() as u32,
        image.height() as u32,
        ColorType::RGBA(8),
    )?;
    Ok(())
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Error> {
    matches
        .value_of(name)
        .ok_or_else(|| format_err!("Missing value for {}", name))
}

fn config_from(matches: &ArgMatches) -> Result<RenderConfig, Error> {
    let size = value(matches, SIZE)?;
    let (width, height): (usize, usize) = if matches.is_present(PREVIEW)
        && !matches.is_present(OUTPUT)
        && matches.occurrences_of(SIZE) == 0
    {
        (PREVIEW_WIDTH, PREVIEW_HEIGHT)
    } else {
        parse_pair(size, 'x').ok_or_else(|| format_err!("Error parsing image dimensions"))?
    };
    let (x_left, x_right): (f64, f64) = parse_pair(value(matches, WINDOW)?, ',')
        .ok_or_else(|| format_err!("Error parsing window edges"))?;
    let y_center = f64::from_str(value(matches, YCENTER)?)?;
    let workers = usize::from_str(value(matches, THREADS)?)?;
    let palette = Palette::from_str(value(matches, PALETTE)?).map_err(|e| format_err!("{}", e))?;

    Ok(RenderConfig {
        width,
        height,
        window: ViewWindow::new(x_left, x_right, y_center),
        workers,
        palette,
    })
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let config = config_from(matches)?;
    config.validate()?;
    info!("rendering {:?}", config);

    if matches.is_present(PREVIEW) {
        let grid = config.render_iterations()?;
        print!("{}", preview::text(&grid));
    }

    if let Some(outfile) = matches.value_of(OUTPUT) {
        let image = config.render()?;
        write_image(outfile, &image)?;
        info!("wrote {}", outfile);
    }
    Ok(())
}

fn main() {
    let default_threads = num_cpus::get().to_string();
    let matches = args(&default_threads);
    init_logging(matches.occurrences_of(VERBOSE));

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
