use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use std::env;

use amount_filter::{logging, predicates, AmountAccumulator, NestedRecord, Unit, compute_amount, filter};

fn main() {
    logging::init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("amount") => run_amount(&args[1..]),
        Some("filter") => run_filter(args.get(1).map(String::as_str)),
        Some("--version") => {
            println!("amount-filter {}", amount_filter::VERSION);
            Ok(())
        }
        Some(other) => bail!("Unknown command '{}' (expected: amount, filter)", other),
        None => run_demo(),
    }
}

/// Both demos with the literal inputs they were written against
fn run_demo() -> Result<()> {
    let total = AmountAccumulator::new()
        .lacs(15.0)
        .crore(5.0)
        .crore(2.0)
        .lacs(20.0)
        .thousand(45.0)
        .crore(7.0)
        .value();
    println!("{}", total);

    run_filter(None)
}

fn run_amount(args: &[String]) -> Result<()> {
    let calls = parse_calls(args)?;
    println!("{}", compute_amount(calls));
    Ok(())
}

/// Parse `<unit> <value>` argument pairs
fn parse_calls(args: &[String]) -> Result<Vec<(Unit, f64)>> {
    if args.len() % 2 != 0 {
        bail!("Expected <unit> <value> pairs, got {} argument(s)", args.len());
    }

    args.chunks(2)
        .map(|pair| -> Result<(Unit, f64)> {
            let unit: Unit = pair[0].parse()?;
            let value: f64 = pair[1]
                .parse()
                .with_context(|| format!("Invalid magnitude for {}: {:?}", unit, pair[1]))?;
            Ok((unit, value))
        })
        .collect()
}

fn run_filter(input: Option<&str>) -> Result<()> {
    let value: Value = match input {
        Some(text) => serde_json::from_str(text).context("Failed to parse input JSON")?,
        None => demo_object(),
    };

    let filtered = filter(&NestedRecord::from(value), predicates::is_string);
    println!("{}", render_filtered(filtered)?);
    Ok(())
}

/// Pretty JSON for a filtered record, `absent` when nothing qualified
fn render_filtered(filtered: Option<NestedRecord>) -> Result<String> {
    match filtered {
        Some(record) => Ok(serde_json::to_string_pretty(&record)?),
        None => Ok("absent".to_string()),
    }
}

fn demo_object() -> Value {
    json!({
        "a": 1,
        "b": {
            "c": "Hello World",
            "d": 2,
            "e": { "f": { "g": -4 } },
            "h": "Good Night Moon"
        }
    })
}
