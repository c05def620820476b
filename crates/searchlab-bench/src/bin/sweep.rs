//! Run the reference sweep and print the gnuplot report on stdout.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use searchlab_bench::{init_tracing, reference_sweep};
use searchlab_harness::{default_clock, HarnessError, Sweep};
use searchlab_search::SearchSuite;
use tracing::error;

fn run() -> Result<(), HarnessError> {
    let sweep = Sweep::new(reference_sweep(), SearchSuite::standard(), default_clock())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    sweep.run(&mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "sweep failed");
            ExitCode::FAILURE
        }
    }
}
