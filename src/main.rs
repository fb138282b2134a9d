// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::env;
use std::process;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use delivery_planner::config::{Config, Format};
use delivery_planner::instance::Instance;
use delivery_planner::{LoadInstance, Solve};

const GENERATOR_ARGS: [&str; 5] = ["width", "height", "trucks", "packages", "seed"];

fn main() {
    env_logger::init();

    let matches = App::new("delivery-planner")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Optimal pickup and delivery plans for trucks on a grid")
        .arg(
            Arg::with_name("width")
                .short("W")
                .long("width")
                .takes_value(true)
                .help("grid width of a generated instance (default 3)"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .takes_value(true)
                .help("grid height of a generated instance (default 2)"),
        )
        .arg(
            Arg::with_name("trucks")
                .short("t")
                .long("trucks")
                .takes_value(true)
                .help("number of trucks of a generated instance (default 2)"),
        )
        .arg(
            Arg::with_name("packages")
                .short("p")
                .long("packages")
                .takes_value(true)
                .help("number of packages of a generated instance (default 2)"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .takes_value(true)
                .help("seed for the generated instance (random if not given)"),
        )
        .arg(
            Arg::with_name("max-states")
                .short("m")
                .long("max-states")
                .takes_value(true)
                .help("give up after creating this many states"),
        )
        .arg(
            Arg::with_name("table")
                .long("table")
                .help("print the plan as a table of rounds"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print stats whenever the search reaches a new depth"),
        )
        .arg(
            Arg::with_name("file")
                .help("instance file, a random instance is generated if missing")
                .conflicts_with_all(&GENERATOR_ARGS),
        )
        .get_matches();

    let format = if matches.is_present("table") {
        Format::Table
    } else {
        Format::Paths
    };
    let max_states = parse_arg(&matches, "max-states");
    let print_status = matches.is_present("status");

    let instance = match matches.value_of("file") {
        Some(path) => path.load_instance().unwrap_or_else(|err| {
            let current_dir = env::current_dir().unwrap_or_default();
            println!("Can't load instance {} in {}: {}", path, current_dir.display(), err);
            process::exit(1);
        }),
        None => generate(&matches),
    };

    print!("{}", instance);
    println!();
    println!("Solving...");

    let solver_ok = instance.solve(max_states, print_status).unwrap_or_else(|err| {
        println!("Failed to solve: {}", err);
        process::exit(1);
    });
    println!("{}", solver_ok.stats);
    match solver_ok.plan {
        Some(plan) => {
            println!("Found solution:");
            print!("{}", plan.format(&instance, format));
        }
        None => println!("No solution"),
    }
}

fn generate(matches: &ArgMatches<'_>) -> Instance {
    let config = Config::new(
        parse_arg(matches, "width").unwrap_or(3),
        parse_arg(matches, "height").unwrap_or(2),
        parse_arg(matches, "trucks").unwrap_or(2),
        parse_arg(matches, "packages").unwrap_or(2),
    )
    .unwrap_or_else(|err| {
        println!("Invalid instance parameters: {}", err);
        process::exit(1);
    });

    match parse_arg(matches, "seed") {
        Some(seed) => {
            debug!("Generating instance with seed {}", seed);
            Instance::with_seed(config, seed)
        }
        None => Instance::random(config, &mut SmallRng::from_entropy()),
    }
}

/// Exits on values that don't parse, `None` if the arg is missing.
fn parse_arg<T: FromStr>(matches: &ArgMatches<'_>, name: &str) -> Option<T> {
    let value = matches.value_of(name)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            println!("Invalid value for --{}: {}", name, value);
            process::exit(1);
        }
    }
}
