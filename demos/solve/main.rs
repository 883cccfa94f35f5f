//! Trigon demo: solves a triangle given on the command line and prints the
//! outcome as JSON.
//!
//! Usage:
//! ```text
//! cargo run --example solve -- '{"a": 7, "alpha": 30, "b": 10}'
//! cargo run --example solve -- --points '[-2, -2]' '{"x": 2, "y": 1}' '{"X": 0, "Y": 5}'
//! cargo run --example solve -- --points '[0, 0]' '[4, 0]' '[0, 3]' rad
//! ```
//!
//! Set `RUST_LOG=trigon=debug` to see which case was chosen.

use std::error::Error;

use trigon::{solve, solve_points, AngleUnit, PointInput, TriangleSpec};

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for trigon.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("solve=info".parse().unwrap_or_default())
        .add_directive("trigon=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.as_slice() {
        [flag, a, b, c, rest @ ..] if flag == "--points" => {
            let unit = match rest.first() {
                Some(literal) => literal.parse::<AngleUnit>()?,
                None => AngleUnit::default(),
            };
            let [a, b, c]: [PointInput; 3] = [
                serde_json::from_str(a)?,
                serde_json::from_str(b)?,
                serde_json::from_str(c)?,
            ];
            serde_json::to_string_pretty(&solve_points(a, b, c, unit))?
        }
        [json] => {
            let spec: TriangleSpec = serde_json::from_str(json)?;
            serde_json::to_string_pretty(&solve(&spec))?
        }
        _ => {
            eprintln!("usage: solve '<json spec>' | solve --points <A> <B> <C> [deg|rad]");
            std::process::exit(2);
        }
    };

    println!("{output}");
    Ok(())
}
