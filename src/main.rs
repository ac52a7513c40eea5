use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use curvekde::run::run;
use curvekde::{Error, Kernel, Parameters, PointSampler, Result};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = try_main() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn app() -> App<'static, 'static> {
    let number = |name: &'static str, long: &'static str, help: &'static str| {
        Arg::with_name(name)
            .long(long)
            .value_name("NUMBER")
            .help(help)
            .takes_value(true)
            .allow_hyphen_values(true)
    };

    App::new("curvekde")
        .about("Scatters random points around a quadratic curve and plots them")
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("CONFIG_FILE")
            .help("Json file with parameters, flags override its values")
            .takes_value(true))
        .arg(number("ax", "ax", "X coordinate of the curve's start A"))
        .arg(number("ay", "ay", "Y coordinate of the curve's start A"))
        .arg(number("bx", "bx", "X coordinate of the curve's end B"))
        .arg(number("by", "by", "Y coordinate of the curve's end B"))
        .arg(number("cx", "cx", "X coordinate of the interior control point C"))
        .arg(number("cy", "cy", "Y coordinate of the interior control point C"))
        .arg(number("points", "points", "Number of points to generate").short("n"))
        .arg(number("max-distance", "max-distance", "Distance of every point from the curve").short("d"))
        .arg(Arg::with_name("kernel")
            .short("k")
            .long("kernel")
            .value_name("KERNEL")
            .help("Kernel handed to the density estimator")
            .takes_value(true)
            .possible_values(&["linear", "epanechnikov", "tophat", "gaussian", "exponential", "cosine"]))
        .arg(number("bandwidth", "bandwidth", "Bandwidth handed to the density estimator").short("b"))
        .arg(number("seed", "seed", "Seed for reproducible output").short("s"))
        .arg(Arg::with_name("svg")
            .short("o")
            .long("svg")
            .value_name("SVG_FILE")
            .help("Where to write the plot, stdout if omitted")
            .takes_value(true))
        .arg(Arg::with_name("json")
            .short("j")
            .long("json")
            .value_name("JSON_FILE")
            .help("Where to write the points and settings for the density estimator")
            .takes_value(true))
}

fn try_main() -> Result<()> {
    let matches = app().get_matches();

    let mut params = match matches.value_of("config") {
        Some(path) => {
            info!(path, "loading parameters");
            Parameters::from_file(path)?
        }
        None => Parameters::default(),
    };
    apply_overrides(&mut params, &matches)?;

    let mut sampler = match params.seed {
        Some(seed) => PointSampler::seeded(seed),
        None => PointSampler::from_entropy(),
    };
    let outcome = run(&params, &mut sampler)?;

    match matches.value_of("svg") {
        Some(path) => {
            fs::write(path, outcome.svg.to_string())?;
            info!(path, "wrote plot");
        }
        None => print!("{}", outcome.svg),
    }

    if let Some(path) = matches.value_of("json") {
        let mut writer = BufWriter::new(File::create(path)?);
        outcome.handover.write_json(&mut writer)?;
        writer.flush()?;
        info!(path, kernel = %params.kernel, bandwidth = params.bandwidth, "wrote handover");
    }

    Ok(())
}

fn apply_overrides(params: &mut Parameters, matches: &ArgMatches) -> Result<()> {
    let [ax, ay] = &mut params.a;
    let [bx, by] = &mut params.b;
    let [cx, cy] = &mut params.c;
    let coordinates = [
        ("ax", ax),
        ("ay", ay),
        ("bx", bx),
        ("by", by),
        ("cx", cx),
        ("cy", cy),
    ];
    for (name, value) in coordinates {
        if let Some(v) = parse(matches, name)? {
            *value = v;
        }
    }

    if let Some(n) = parse(matches, "points")? {
        params.num_points = n;
    }
    if let Some(d) = parse(matches, "max-distance")? {
        params.max_distance = d;
    }
    if let Some(kernel) = parse::<Kernel>(matches, "kernel")? {
        params.kernel = kernel;
    }
    if let Some(b) = parse(matches, "bandwidth")? {
        params.bandwidth = b;
    }
    if let Some(seed) = parse(matches, "seed")? {
        params.seed = Some(seed);
    }
    Ok(())
}

fn parse<T>(matches: &ArgMatches, name: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    matches
        .value_of(name)
        .map(|raw| {
            raw.parse().map_err(|err| Error::InvalidArgument {
                name,
                reason: format!("cannot parse `{}`: {}", raw, err),
            })
        })
        .transpose()
}
