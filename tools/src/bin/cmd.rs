// Command line utility for evaluating a polynomial over a set of points

use anyhow::{bail, Error};
use clap::{value_parser, Arg, ArgAction, Command};
use itertools::izip;
use poly_eval::evaluate::{evaluate, Strategy};
use poly_eval::parse::{load_points, parse_reals};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;

pub fn main() -> Result<(), Error> {
    let matches = Command::new("poly-eval-cmd")
        .arg(
            Arg::new("POINTS")
                .help("File of x-values to evaluate, whitespace separated; read from the console when omitted")
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("COEFFS")
                .help("Polynomial coefficients from highest degree to constant term, space separated")
                .short('c')
                .long("coeffs"),
        )
        .arg(
            Arg::new("STRATEGY")
                .help("Evaluation strategy to use")
                .short('s')
                .long("strategy")
                .default_value("threaded")
                .value_parser(["serial", "threaded"]),
        )
        .arg(
            Arg::new("NUM_THREADS")
                .help("Number of worker threads for the threaded strategy, 0 lets the runtime decide")
                .short('t')
                .long("threads")
                .default_value("0")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("TIME")
                .help("Report elapsed evaluation time")
                .long("time")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let strategy: Strategy = matches.get_one::<String>("STRATEGY").unwrap().parse()?;
    let num_threads: usize = *matches.get_one("NUM_THREADS").unwrap();

    let coeffs = match matches.get_one::<String>("COEFFS") {
        Some(input) => parse_reals(input)?,
        None => prompt_reals("Enter polynomial coefficients (from highest degree to constant term), separated by spaces:")?,
    };

    let xs = match matches.get_one::<PathBuf>("POINTS") {
        Some(path) => load_points(path)?,
        None => prompt_reals("Enter x-values to evaluate the polynomial at, separated by spaces:")?,
    };

    let now = Instant::now();
    let ys = evaluate(&coeffs, &xs, strategy, num_threads);
    let elapsed = now.elapsed();

    for (x, y) in izip!(&xs, &ys) {
        println!("f({x}) = {y}");
    }

    if matches.get_flag("TIME") {
        println!("evaluated {} points in {:.3}s", xs.len(), elapsed.as_nanos() as f64 / 1e9);
    }

    Ok(())
}

// Prompt until a non-blank line arrives, then parse it as real numbers.
// A parse failure is terminal, only blank input is retried.
fn prompt_reals(prompt: &str) -> Result<Vec<f64>, Error> {
    let stdin = io::stdin();
    loop {
        println!("{prompt}");
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }
        if line.trim().is_empty() {
            continue;
        }
        return parse_reals(&line);
    }
}
