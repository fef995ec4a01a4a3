use std::fmt;
use std::time::Duration;

use crate::timing::DisplayDuration;

/// One timed computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub n: i32,
    pub value: i64,
    pub elapsed: Duration,
}

/// Outcome of a full benchmark run. `Display` gives the console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchReport {
    pub recursive: Measurement,
    pub iterative: Measurement,
}

impl BenchReport {
    pub const HEADER: &'static str = "Go Fibonacci Results:";
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;
        write_line(f, "Recursive", &self.recursive)?;
        write_line(f, "Iterative", &self.iterative)
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, label: &str, m: &Measurement) -> fmt::Result {
    writeln!(
        f,
        "{} F({}) = {} in {}",
        label,
        m.n,
        m.value,
        DisplayDuration(m.elapsed)
    )
}
