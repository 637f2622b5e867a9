use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use sumbench_core::{
    markdown_table, point_line, range_line, sanity_line, sum, time_point, time_range,
    ComparisonRow, Strategy, COMPARE_POINT_REPEATS, COMPARE_RANGE_REPEATS, POINT_INPUTS, RANGES,
    REPEATS,
};

const BENCH_AFTER_HELP: &str = "\
Subcommands:
  sumbench compare         Time every summation strategy and print a comparison table.
  sumbench check           Verify that all strategies agree before trusting timings.

See `sumbench <subcommand> --help` for command-specific options.";

#[derive(Parser)]
#[command(
    name = "sumbench",
    version,
    about = "Benchmark the iterative natural-number summation.",
    long_about = "Run the classic summation benchmark: one correctness line, four point benchmarks, and three range benchmarks.",
    after_help = BENCH_AFTER_HELP
)]
struct BenchCli {}

#[derive(Parser)]
#[command(
    name = "sumbench compare",
    version,
    about = "Time every summation strategy over the fixed inputs and ranges."
)]
struct CompareCli {
    /// Strategies to include (defaults to all of them).
    #[arg(long, value_name = "NAME")]
    strategy: Vec<String>,

    /// Emit the comparison as JSON instead of a markdown table.
    #[arg(long)]
    json: bool,

    /// Write the JSON report to a file instead of stdout.
    #[arg(long, value_name = "PATH", requires = "json")]
    output: Option<PathBuf>,
}

#[derive(Parser)]
#[command(
    name = "sumbench check",
    version,
    about = "Verify that every summation strategy agrees with the iterative loop."
)]
struct CheckCli {}

fn main() -> Result<()> {
    let mut raw: Vec<OsString> = std::env::args_os().collect();
    if raw.get(1).map(|arg| arg == "compare").unwrap_or(false) {
        return handle_compare(raw);
    }
    if raw.get(1).map(|arg| arg == "check").unwrap_or(false) {
        return handle_check(raw);
    }
    if raw.get(1).map(|arg| arg == "bench").unwrap_or(false) {
        raw.remove(1);
    }

    let bench_cli = BenchCli::parse_from(raw);
    run_bench(&bench_cli)
}

fn handle_compare(raw: Vec<OsString>) -> Result<()> {
    let mut args = raw.clone();
    if !args.is_empty() {
        args.remove(1); // drop the literal "compare"
    }
    let cli = CompareCli::parse_from(args);
    run_compare(&cli)
}

fn handle_check(raw: Vec<OsString>) -> Result<()> {
    let mut args = raw.clone();
    if !args.is_empty() {
        args.remove(1); // drop the literal "check"
    }
    let cli = CheckCli::parse_from(args);
    run_check(&cli)
}

fn run_bench(_cli: &BenchCli) -> Result<()> {
    println!("{}", sanity_line());

    for n in POINT_INPUTS {
        let nanos = time_point(Strategy::Loop, n, REPEATS);
        println!("{}", point_line(n, nanos));
    }

    for (start, end) in RANGES {
        let nanos = time_range(Strategy::Loop, (start, end), REPEATS);
        println!("{}", range_line(start, end, nanos));
    }

    Ok(())
}

fn run_compare(cli: &CompareCli) -> Result<()> {
    let strategies = selected_strategies(&cli.strategy)?;
    let rows = measure_comparison(&strategies);

    if cli.json {
        let document = comparison_json(&rows)?;
        match &cli.output {
            Some(path) => {
                fs::write(path, document.as_bytes())
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                println!("Report written to {}", path.display());
            }
            None => println!("{document}"),
        }
    } else {
        print!("{}", markdown_table(&rows));
    }

    Ok(())
}

fn run_check(_cli: &CheckCli) -> Result<()> {
    let inputs = agreement_inputs();

    let mut mismatches = 0usize;
    for &n in &inputs {
        let expected = sum(n);
        let mut agreed = true;
        for strategy in Strategy::ALL {
            let actual = strategy.eval(n);
            if actual != expected {
                agreed = false;
                mismatches += 1;
                eprintln!("strategy {strategy} returned {actual} for n = {n}, expected {expected}");
            }
        }
        if agreed {
            println!("  ✓ n = {n}");
        }
    }

    if mismatches > 0 {
        bail!("{mismatches} strategy result(s) disagree with the iterative loop");
    }

    println!(
        "\nAll {} input(s) agree across {} strategies",
        inputs.len(),
        Strategy::ALL.len()
    );
    Ok(())
}

fn agreement_inputs() -> Vec<i64> {
    let mut inputs: Vec<i64> = vec![15, -13, 7, 8, -30, 0];
    for n in POINT_INPUTS {
        if !inputs.contains(&n) {
            inputs.push(n);
        }
    }
    inputs
}

fn selected_strategies(names: &[String]) -> Result<Vec<Strategy>> {
    if names.is_empty() {
        return Ok(Strategy::ALL.to_vec());
    }

    let mut strategies = Vec::with_capacity(names.len());
    for name in names {
        let strategy = name
            .parse::<Strategy>()
            .with_context(|| format!("invalid --strategy value '{name}'"))?;
        if !strategies.contains(&strategy) {
            strategies.push(strategy);
        }
    }
    Ok(strategies)
}

fn measure_comparison(strategies: &[Strategy]) -> Vec<ComparisonRow> {
    strategies
        .iter()
        .map(|&strategy| ComparisonRow {
            strategy,
            point_nanos: POINT_INPUTS
                .iter()
                .map(|&n| time_point(strategy, n, COMPARE_POINT_REPEATS))
                .collect(),
            range_nanos: RANGES
                .iter()
                .map(|&bounds| time_range(strategy, bounds, COMPARE_RANGE_REPEATS))
                .collect(),
        })
        .collect()
}

fn comparison_json(rows: &[ComparisonRow]) -> Result<String> {
    let generated_at = report_timestamp()?;

    let strategies: Vec<_> = rows
        .iter()
        .map(|row| {
            let points: Vec<_> = POINT_INPUTS
                .iter()
                .zip(&row.point_nanos)
                .map(|(&n, &nanos)| json!({ "n": n, "nanos": nanos }))
                .collect();
            let ranges: Vec<_> = RANGES
                .iter()
                .zip(&row.range_nanos)
                .map(|(&(start, end), &nanos)| {
                    json!({ "start": start, "end": end, "nanos": nanos })
                })
                .collect();
            json!({
                "strategy": row.strategy.name(),
                "points": points,
                "ranges": ranges,
            })
        })
        .collect();

    let document = json!({
        "generated_at": generated_at,
        "point_repeats": COMPARE_POINT_REPEATS,
        "range_repeats": COMPARE_RANGE_REPEATS,
        "strategies": strategies,
    });
    serde_json::to_string_pretty(&document).map_err(Into::into)
}

fn report_timestamp() -> Result<String> {
    let epoch = match std::env::var("SOURCE_DATE_EPOCH") {
        Ok(value) => value
            .parse::<i64>()
            .with_context(|| format!("invalid SOURCE_DATE_EPOCH value: {}", value))?,
        Err(_) => OffsetDateTime::now_utc().unix_timestamp(),
    };

    let datetime =
        OffsetDateTime::from_unix_timestamp(epoch).unwrap_or_else(|_| OffsetDateTime::now_utc());
    datetime
        .format(&Rfc3339)
        .context("failed to format report timestamp")
}
