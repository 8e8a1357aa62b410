//! # CLI execution functions
//!
//! Kept out of `main.rs` so the entry point stays slim: parameter-table
//! loading, subcommand execution, and rayon configuration.

use anyhow::{Context, Result};
use kummer5::{classify, params::ParamTable, table, ParamSet};
use tracing::info;

use super::Cli;

/// Size the global rayon pool when `--threads` is given.
pub fn configure_rayon(threads: Option<usize>) -> Result<()> {
    if let Some(n) = threads {
        if n > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build_global()
                .context("failed to configure rayon thread pool")?;
        }
    }
    Ok(())
}

fn load_selection(cli: &Cli) -> Result<ParamSet> {
    let table = ParamTable::from_path(&cli.params)?;
    Ok(table.get(cli.h, cli.m)?.clone())
}

/// `test`: classify one candidate and print its verdict line.
pub fn run_test(cli: &Cli, n: u32) -> Result<()> {
    anyhow::ensure!(n >= 1, "n must be at least 1 (got {n})");
    let set = load_selection(cli)?;
    let lambda = classify::lambda_mn(set.m, n);
    info!(
        h = set.h,
        m = set.m,
        n,
        lambda_digits = lambda.to_string_radix(10).len(),
        "testing candidate"
    );
    let verdict = classify::test_primality(n, &set)?;
    println!("{verdict}");
    Ok(())
}

/// `table`: classify a range of n and print the table.
pub fn run_table(cli: &Cli, min_n: u32, max_n: u32, include_even: bool, json: bool) -> Result<()> {
    let set = load_selection(cli)?;
    let rows = table::run(&set, min_n, max_n, include_even)?;
    if json {
        print!("{}", table::render_json(&rows));
    } else {
        print!("{}", table::render_text(&rows));
    }
    Ok(())
}

/// `validate`: load a parameter table and report what it provides.
pub fn run_validate(cli: &Cli) -> Result<()> {
    let table = ParamTable::from_path(&cli.params)?;
    for set in table.iter() {
        let term_counts: Vec<usize> = set.map.polys().iter().map(|p| p.terms().len()).collect();
        println!(
            "(h = {}, m = {}): start vector ok, polynomial terms {:?}",
            set.h, set.m, term_counts
        );
    }
    println!(
        "{} parameter set{} OK",
        table.len(),
        if table.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
