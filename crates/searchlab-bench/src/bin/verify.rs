//! Check every search variant against the insertion-point contract over
//! the reference sweep's keys and arrays. Exits 1 on any violation.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use searchlab_bench::{init_tracing, reference_sweep};
use searchlab_harness::{default_clock, HarnessError, SizeViolation, Sweep};
use searchlab_search::SearchSuite;
use tracing::{error, info};

fn run() -> Result<Vec<SizeViolation>, HarnessError> {
    let sweep = Sweep::new(reference_sweep(), SearchSuite::standard(), default_clock())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    sweep.verify(&mut out)
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(v) if v.is_empty() => {
            info!("all variants satisfy the contract");
            ExitCode::SUCCESS
        }
        Ok(v) => {
            error!(violations = v.len(), "contract violations found");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "verification failed");
            ExitCode::FAILURE
        }
    }
}
