use anyhow::{Context, Result};
use clap::{arg, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_ising::experiment::{
    write_report, write_report_file, Algorithm, ExperimentConfig, ExperimentRunner,
};

fn cli() -> Command {
    Command::new("ising-sweep")
        .about(
            "Runs the solvers over a sweep of random symmetric instances and writes a CSV report",
        )
        .arg(
            arg!(--"min-size" [MIN] "Smallest problem size")
                .value_parser(clap::value_parser!(usize))
                .default_value("5"),
        )
        .arg(
            arg!(--"max-size" [MAX] "Largest problem size (inclusive)")
                .value_parser(clap::value_parser!(usize))
                .default_value("50"),
        )
        .arg(
            arg!(--step [STEP] "Size increment")
                .value_parser(clap::value_parser!(usize))
                .default_value("5"),
        )
        .arg(
            arg!(--instances [COUNT] "Instances per size")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            arg!(--"exhaustive-limit" [N] "Largest size exhaustive search runs on")
                .value_parser(clap::value_parser!(usize))
                .default_value("20"),
        )
        .arg(
            arg!(--algorithms [LIST] "Comma-separated algorithms (default: all)")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(-o --output [PATH] "CSV output file (default: stdout)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--parallel "Run instances in parallel"))
}

fn parse_algorithms(list: &str) -> Result<Vec<Algorithm>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<Algorithm>().map_err(anyhow::Error::from))
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let mut config = ExperimentConfig::default()
        .with_sizes(
            *matches.get_one::<usize>("min-size").unwrap(),
            *matches.get_one::<usize>("max-size").unwrap(),
            *matches.get_one::<usize>("step").unwrap(),
        )
        .with_instances_per_size(*matches.get_one::<usize>("instances").unwrap())
        .with_exhaustive_limit(*matches.get_one::<usize>("exhaustive-limit").unwrap())
        .with_parallel(matches.get_flag("parallel"));

    if let Some(list) = matches.get_one::<String>("algorithms") {
        config = config.with_algorithms(parse_algorithms(list)?);
    }

    let rows = ExperimentRunner::run(&config).context("sweep failed")?;

    match matches.get_one::<PathBuf>("output") {
        Some(path) => write_report_file(path, &rows)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => write_report(std::io::stdout().lock(), &rows)?,
    }

    Ok(())
}
