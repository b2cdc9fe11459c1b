extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;
extern crate rand;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use mandelbrot::{encode, Bounds, ImageSpec, Palette, Renderer, Viewport};
use num::Complex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;
use std::time::Instant;

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

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

const SIDE: Bounds<usize> = Bounds { min: 1, max: 65_535 };
const ITERATION_BOUNDS: Bounds<usize> = Bounds {
    min: 1,
    max: 200_000,
};

fn parse_size(s: &str) -> Option<(usize, usize)> {
    match parse_pair::<usize>(s, 'x') {
        Some((w, h)) if SIDE.contains(w) && SIDE.contains(h) => Some((w, h)),
        _ => None,
    }
}

fn parse_radius(s: &str) -> Option<f64> {
    match f64::from_str(s) {
        Ok(r) if r > 0.0 && r.is_finite() => Some(r),
        _ => None,
    }
}

fn validate<T>(parsed: Option<T>, err: &str) -> Result<(), String> {
    match parsed {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const CENTER: &str = "center";
const RADIUS: &str = "radius";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const SEED: &str = "seed";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();
    let thread_bounds = Bounds {
        min: 1,
        max: max_threads,
    };

    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1920x1080")
                .validator(|s| {
                    validate(
                        parse_size(&s),
                        "Image size must look like WIDTHxHEIGHT, each between 1 and 65535",
                    )
                })
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.2,0.9")
                .validator(|s| validate(parse_complex(&s), "Could not parse center point"))
                .help("Center of the viewport on the complex plane, as re,im"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .default_value("0.5")
                .validator(|s| validate(parse_radius(&s), "Radius must be a positive number"))
                .help("Half the width of the viewport"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| thread_bounds.parse(&s, "Thread count").map(|_| ()))
                .help("Number of threads to use in the renderer (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("64")
                .validator(|s| ITERATION_BOUNDS.parse(&s, "Iteration count").map(|_| ()))
                .help("Maximum iterations per point; also the palette size"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .takes_value(true)
                .validator(|s| validate(u64::from_str(&s).ok(), "Could not parse seed"))
                .help("Seed for the random palette, for repeatable images"),
        )
        .get_matches()
}

fn value<T>(parsed: Option<T>, name: &str) -> Result<T, Error> {
    parsed.ok_or_else(|| format_err!("Could not parse {}", name))
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let output = value(matches.value_of(OUTPUT), OUTPUT)?;
    let (width, height) = value(matches.value_of(SIZE).and_then(parse_size), SIZE)?;
    let center = value(matches.value_of(CENTER).and_then(parse_complex), CENTER)?;
    let radius = value(matches.value_of(RADIUS).and_then(parse_radius), RADIUS)?;
    let threads = match matches.value_of(THREADS) {
        Some(s) => value(usize::from_str(s).ok(), THREADS)?,
        None => num_cpus::get(),
    };
    let iterations = value(
        matches
            .value_of(ITERATIONS)
            .and_then(|s| usize::from_str(s).ok()),
        ITERATIONS,
    )?;

    let image = ImageSpec::new(width, height)?;
    let viewport = Viewport::new(center, radius)?;
    let mut renderer = Renderer::new(image, viewport, iterations)?;
    if let Some(seed) = matches.value_of(SEED) {
        let seed = value(u64::from_str(seed).ok(), SEED)?;
        let palette = Palette::random(iterations, &mut StdRng::seed_from_u64(seed))?;
        renderer = renderer.with_palette(palette)?;
    }

    info!(
        "rendering {}x{} around {} (radius {}) to {}",
        width, height, center, radius, output
    );
    let start = Instant::now();
    let buffer = renderer.render(threads)?;
    let elapsed = start.elapsed();
    info!("render finished in {:?}", elapsed);
    println!("Time to generate: {:?}", elapsed);

    encode::write_png(output, &buffer)?;
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
