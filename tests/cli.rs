use std::process::Command;

use pretty_assertions::assert_eq;

fn run_bin(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fibbench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch fibbench")
}

// Accepts the shapes produced by Go's Duration.String: 0s, 12ns, 1.5µs,
// 3.25ms, 1.2s, 1m3s, 1h0m0s.
fn is_go_duration(s: &str) -> bool {
    if s == "0s" {
        return true;
    }
    for unit in ["ns", "µs", "ms"] {
        if let Some(num) = s.strip_suffix(unit) {
            return is_decimal(num);
        }
    }
    let Some(mut rest) = s.strip_suffix('s') else {
        return false;
    };
    for sep in ['h', 'm'] {
        if let Some((whole, tail)) = rest.split_once(sep) {
            if !is_integer(whole) {
                return false;
            }
            rest = tail;
        }
    }
    is_decimal(rest)
}

fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((int, frac)) => is_integer(int) && is_integer(frac) && !frac.ends_with('0'),
        None => is_integer(s),
    }
}

#[test]
fn prints_results_in_fixed_format() {
    let output = run_bin(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{stdout}");
    assert_eq!(lines[0], "Go Fibonacci Results:");

    let (rec, rec_time) = lines[1].split_once(" in ").unwrap();
    assert_eq!(rec, "Recursive F(35) = 9227465");
    assert!(is_go_duration(rec_time), "bad duration {rec_time:?}");

    let (iter, iter_time) = lines[2].split_once(" in ").unwrap();
    assert_eq!(iter, "Iterative F(1000) = 817770325994397771");
    assert!(is_go_duration(iter_time), "bad duration {iter_time:?}");
}

#[test]
fn quiet_by_default_on_stderr() {
    let output = run_bin(&[]);
    assert!(output.stderr.is_empty());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let output = run_bin(&["-vv"]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("computing recursive F(35)"), "{stderr}");
    assert!(stderr.contains("iterative F(1000) finished in"), "{stderr}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn duration_shape_checker_sanity() {
    for ok in ["0s", "87ns", "1.5µs", "12.345678ms", "2.1s", "1m3s", "1h0m0s"] {
        assert!(is_go_duration(ok), "{ok}");
    }
    for bad in ["", "1.50ms", "ms", "1.2", "1,5ms", "xs"] {
        assert!(!is_go_duration(bad), "{bad}");
    }
}
