//! Solve a Water Jug Problem from the Command Line
//!
//! This example runs the solver on three integers and prints the steps, the
//! search statistics and the JSON body a transport would send back.
//!
//! Key concepts:
//! - Validated input (all broken rules are reported together)
//! - Exhaustive search vs. the pruned `fast` options
//! - Structured logging through `tracing`
//!
//! Run with: cargo run --example solve -- 4 3 2 [--fast]
//! Set RUST_LOG=twojug=trace to see every improved solution.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twojug::problem::Problem;
use twojug::response::Response;
use twojug::{SearchOptions, Solver};

/// Exactly three integers, ignoring `--flags`.
fn parse_numbers(args: &[String]) -> Option<(i64, i64, i64)> {
    let numbers = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(|a| a.parse::<i64>())
        .collect::<Result<Vec<i64>, _>>()
        .ok()?;

    match numbers[..] {
        [x, y, target] => Some((x, y, target)),
        _ => None,
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twojug=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let fast = args.iter().any(|a| a == "--fast");
    let Some((x, y, target)) = parse_numbers(&args) else {
        eprintln!("usage: solve <x-capacity> <y-capacity> <target> [--fast]");
        std::process::exit(2);
    };

    println!("=== Water Jug Solver ===\n");
    println!("Buckets: X = {x}, Y = {y}, target = {target}\n");

    if let Err(errors) = Problem::new(x, y, target) {
        println!("Input rejected:");
        for error in &errors {
            println!("  - {error}");
        }
    }

    let options = if fast {
        SearchOptions::fast()
    } else {
        SearchOptions::exhaustive()
    };
    let solver = Solver::new(options);

    let outcome = solver.solve_with_stats(x, y, target);
    let steps = outcome.as_ref().and_then(|o| o.solution_steps());

    match &steps {
        Some(steps) => {
            println!("Shortest solution ({} steps):", steps.len());
            for (i, step) in steps.iter().enumerate() {
                println!("  {:>2}. {:<30} -> ({}, {})", i + 1, step.title, step.x, step.y);
            }
        }
        None => println!("No solution"),
    }

    if let Some(outcome) = &outcome {
        println!("\n{}", outcome.stats());
    }

    match Response::from_steps(steps).to_json() {
        Ok(body) => println!("Response body:\n{body}"),
        Err(e) => eprintln!("Failed to encode response: {e}"),
    }

    println!("\n=== Example Complete ===");
}
