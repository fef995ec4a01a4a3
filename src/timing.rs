use std::fmt;
use std::time::{Duration, Instant};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Runs `f` once and returns its output with the wall-clock time it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Renders a duration the way Go's `time.Duration.String` does.
///
/// Sub-second values pick the largest of ns/µs/ms that keeps the integer part
/// non-zero. From one second up the output is `[h][m]s` with up to nine
/// fractional digits on the seconds.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < NANOS_PER_SEC {
        let (unit, prec) = if nanos < NANOS_PER_MICRO {
            ("ns", 0)
        } else if nanos < NANOS_PER_MILLI {
            ("µs", 3)
        } else {
            ("ms", 6)
        };
        return format!("{}{}", fixed_point(nanos, prec), unit);
    }

    let total_secs = nanos / NANOS_PER_SEC;
    let secs = fixed_point(nanos % (60 * NANOS_PER_SEC), 9);
    let minutes = total_secs / 60;

    match minutes {
        0 => format!("{secs}s"),
        m if m < 60 => format!("{m}m{secs}s"),
        m => format!("{}h{}m{secs}s", m / 60, m % 60),
    }
}

// `value / 10^prec` with the remainder as a trimmed decimal fraction.
fn fixed_point(value: u128, prec: u32) -> String {
    let scale = 10u128.pow(prec);
    let int = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return int.to_string();
    }
    let digits = format!("{:0width$}", frac, width = prec as usize);
    format!("{}.{}", int, digits.trim_end_matches('0'))
}

/// `Display` adapter over [`format_duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDuration(pub Duration);

impl fmt::Display for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}
