use anyhow::{Context, Result};
use clap::Parser;
use nested_ids::{check, id_gen::IdGenerator};
use std::process::ExitCode;

/// Checks that nested records created one after another get consecutive ids.
#[derive(Parser)]
#[clap(version, about)]
struct Arguments {}

fn run(_args: Arguments) -> Result<()> {
    let mut id_gen = IdGenerator::default();
    check::run_self_check(&mut id_gen).context("self-check failed")?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    match run(args) {
        Ok(()) => {
            println!("Success");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR");
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
