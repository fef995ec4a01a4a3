use std::io::Write;

use log::{debug, info};

use crate::fib::{fib_iterative, fib_recursive};
use crate::report::{BenchReport, Measurement};
use crate::timing::{DisplayDuration, measure};

/// Input for the recursive run. Kept small: the call tree grows as φⁿ.
pub const RECURSIVE_N: i32 = 35;
/// Input for the iterative run. Overflows i64 and wraps.
pub const ITERATIVE_N: i32 = 1000;

/// Times the recursive computation, then the iterative one, on this thread.
pub fn run() -> BenchReport {
    let recursive = timed("recursive", RECURSIVE_N, fib_recursive);
    let iterative = timed("iterative", ITERATIVE_N, fib_iterative);
    BenchReport {
        recursive,
        iterative,
    }
}

/// Runs the benchmark and writes the report to `out`.
pub fn run_to<W: Write>(out: &mut W) -> Result<BenchReport, String> {
    let report = run();
    write!(out, "{}", report).map_err(|e| format!("Failed to write results: {}", e))?;
    out.flush()
        .map_err(|e| format!("Failed to flush results: {}", e))?;
    Ok(report)
}

fn timed(label: &str, n: i32, f: fn(i32) -> i64) -> Measurement {
    debug!("computing {} F({})", label, n);
    let (value, elapsed) = measure(|| f(n));
    info!("{} F({}) finished in {}", label, n, DisplayDuration(elapsed));
    Measurement { n, value, elapsed }
}
