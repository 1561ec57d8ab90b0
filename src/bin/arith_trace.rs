//! Runs the reference scenarios with every step printed, and exits with a nonzero status if any
//! result differs from the expected one.

use std::{fmt, process};

use shift_add_arith::{
    u16_div_doubling_scan_traced, u16_div_recursive_doubling_traced, u16_mul_shift_add_traced,
    u16_sqrt_bit_search_traced, StdoutTrace, Trace,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Mul(u16, u16),
    Div(u16, u16),
    DivScan(u16, u16),
    Sqrt(u16),
}

impl Op {
    fn section(self) -> &'static str {
        match self {
            Op::Mul(..) => "multiplication",
            Op::Div(..) => "division (recursive)",
            Op::DivScan(..) => "division (loop)",
            Op::Sqrt(_) => "square root",
        }
    }

    fn case(self) -> String {
        match self {
            Op::Mul(x, y) => format!("{} * {}", x, y),
            Op::Div(x, y) | Op::DivScan(x, y) => format!("{} / {}", x, y),
            Op::Sqrt(x) => format!("sqrt({})", x),
        }
    }

    fn eval<T: Trace>(self, trace: &mut T) -> u32 {
        match self {
            Op::Mul(x, y) => u16_mul_shift_add_traced(x, y, trace),
            Op::Div(x, y) => u16_div_recursive_doubling_traced(x, y, trace) as u32,
            Op::DivScan(x, y) => u16_div_doubling_scan_traced(x, y, trace) as u32,
            Op::Sqrt(x) => u16_sqrt_bit_search_traced(x, trace) as u32,
        }
    }
}

const SCENARIOS: &[(Op, u32)] = &[
    (Op::Mul(12, 10), 120),
    (Op::Mul(6, 5), 30),
    (Op::Div(30, 4), 7),
    (Op::DivScan(30, 4), 7),
    (Op::DivScan(1000, 4), 250),
    (Op::Sqrt(25), 5),
    (Op::Sqrt(100), 10),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Mismatch {
    case: String,
    expected: u32,
    found: u32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {}: expected {}, found {}",
            self.case, self.expected, self.found
        )
    }
}

fn section(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{}", title);
    println!("{}", "=".repeat(50));
}

/// Runs `scenarios` in order and stops at the first mismatch. `banners` prints a section header
/// whenever the kind of operation changes.
fn run<T: Trace>(scenarios: &[(Op, u32)], trace: &mut T, banners: bool) -> Result<(), Mismatch> {
    let mut current = None;
    for &(op, expected) in scenarios {
        if banners {
            if current != Some(op.section()) {
                section(op.section());
                current = Some(op.section());
            }
            if let Op::Div(..) | Op::DivScan(..) = op {
                println!("\n--- {} ---", op.case());
            }
        }
        let found = op.eval(trace);
        if found != expected {
            return Err(Mismatch {
                case: op.case(),
                expected,
                found,
            })
        }
    }
    Ok(())
}

fn main() {
    match run(SCENARIOS, &mut StdoutTrace, true) {
        Ok(()) => section("all checks passed"),
        Err(mismatch) => {
            eprintln!("{}", mismatch);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shift_add_arith::NoTrace;

    #[test]
    fn scenarios_pass() {
        assert_eq!(run(SCENARIOS, &mut NoTrace, false), Ok(()));
    }

    #[test]
    fn first_mismatch_is_reported() {
        let scenarios = [
            (Op::Mul(6, 5), 30),
            (Op::Div(30, 4), 8),
            (Op::Sqrt(25), 4),
        ];
        let mismatch = run(&scenarios, &mut NoTrace, false).unwrap_err();
        assert_eq!(
            mismatch,
            Mismatch {
                case: "30 / 4".to_string(),
                expected: 8,
                found: 7
            }
        );
        assert_eq!(mismatch.to_string(), "error: 30 / 4: expected 8, found 7");
    }

    #[test]
    fn every_operation_is_checked() {
        let scenarios = [(Op::DivScan(1000, 4), 250), (Op::Sqrt(100), 11)];
        assert_eq!(
            run(&scenarios, &mut NoTrace, false)
                .unwrap_err()
                .to_string(),
            "error: sqrt(100): expected 11, found 10"
        );
    }
}
