pub mod bench;
pub mod fib;
pub mod report;
pub mod timing;

pub use bench::{run, run_to};
pub use fib::{fib_iterative, fib_recursive};
pub use report::{BenchReport, Measurement};
