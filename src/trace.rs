//! Step-by-step narration of the algorithms.
//!
//! Every `_traced` function reports each decision it makes to a [`Trace`] sink. The plain
//! functions use [`NoTrace`], which compiles down to nothing, so tracing never changes a result.

use core::fmt;

/// One step of one of the algorithms. Values of every bit width are widened to `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A shift-and-add multiplication of `x` by `y` begins
    MulStart { x: u128, y: u128 },
    /// Bit `bit` of the multiplier was tested. If `set`, `shifted` was added and `sum` is the new
    /// accumulator.
    MulBit {
        bit: u32,
        set: bool,
        shifted: u128,
        sum: u128,
    },
    /// The shifted multiplicand left the operand range after bit `bit`, so the remaining bits are
    /// discarded
    MulTruncated { bit: u32, shifted: u128 },
    MulDone { product: u128 },
    /// A recursive doubling call was entered
    DivCall { x: u128, y: u128 },
    /// The divisor exceeds the dividend and the call returns zero
    DivBase { x: u128, y: u128 },
    /// A recursive doubling call returns after reconstructing one quotient bit
    DivReturn {
        x: u128,
        y: u128,
        q: u128,
        remainder: u128,
        quotient: u128,
    },
    /// The doubling scan raised its divisor to `divisor`
    DivScanDouble { divisor: u128 },
    /// The doubling scan tried to subtract `divisor` (worth `power` times the original divisor)
    DivScanStep {
        divisor: u128,
        power: u128,
        subtracted: bool,
        rest: u128,
    },
    DivScanDone { quotient: u128 },
    SqrtStart { x: u128 },
    /// Bit `bit` of the root of `x` was tried. `kept` tells whether `candidate` became the new `y`.
    SqrtBit {
        x: u128,
        bit: u32,
        candidate: u128,
        square: u128,
        kept: bool,
        y: u128,
    },
    SqrtDone { root: u128 },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TraceEvent::MulStart { x, y } => {
                write!(f, "=== {} x {} === x = {:#b}, y = {:#b}", x, y, x, y)
            }
            TraceEvent::MulBit {
                bit,
                set: true,
                shifted,
                sum,
            } => write!(f, "bit {} = 1: sum += {} -> {}", bit, shifted, sum),
            TraceEvent::MulBit { bit, set: false, .. } => {
                write!(f, "bit {} = 0: nothing added", bit)
            }
            TraceEvent::MulTruncated { bit, shifted } => write!(
                f,
                "shifted x = {} is out of range after bit {}, stopping",
                shifted, bit
            ),
            TraceEvent::MulDone { product } => write!(f, "result: {}", product),
            TraceEvent::DivCall { x, y } => write!(f, "divide({}, {})", x, y),
            TraceEvent::DivBase { x, y } => write!(f, "  {} > {}, returning 0", y, x),
            TraceEvent::DivReturn {
                x,
                y,
                q,
                remainder,
                quotient,
            } => {
                write!(
                    f,
                    "  back: x={}, y={}, q={}, remainder={}; ",
                    x, y, q, remainder
                )?;
                if remainder < y {
                    write!(f, "{} < {}, returning {}", remainder, y, quotient)
                } else {
                    write!(f, "{} >= {}, returning {}", remainder, y, quotient)
                }
            }
            TraceEvent::DivScanDouble { divisor } => write!(f, "divisor raised to {}", divisor),
            TraceEvent::DivScanStep {
                divisor,
                power,
                subtracted: true,
                rest,
            } => write!(
                f,
                "  subtract {} -> {} left, quotient += {}",
                divisor, rest, power
            ),
            TraceEvent::DivScanStep { divisor, .. } => {
                write!(f, "  {} does not fit", divisor)
            }
            TraceEvent::DivScanDone { quotient } => write!(f, "result: {}", quotient),
            TraceEvent::SqrtStart { x } => write!(f, "=== sqrt({}) ===", x),
            TraceEvent::SqrtBit {
                x,
                bit,
                candidate,
                square,
                kept: true,
                y,
            } => write!(
                f,
                "bit {}: ({})^2 = {} <= {} -> y = {}",
                bit, candidate, square, x, y
            ),
            TraceEvent::SqrtBit {
                x,
                bit,
                candidate,
                square,
                kept: false,
                ..
            } => write!(
                f,
                "bit {}: ({})^2 = {} > {} -> not set",
                bit, candidate, square, x
            ),
            TraceEvent::SqrtDone { root } => write!(f, "result: {}", root),
        }
    }
}

/// A sink for [`TraceEvent`]s.
///
/// Any `FnMut(TraceEvent)` closure is a sink, which makes collecting events in tests trivial.
pub trait Trace {
    fn event(&mut self, event: TraceEvent);
}

impl<F: FnMut(TraceEvent)> Trace for F {
    #[inline]
    fn event(&mut self, event: TraceEvent) {
        self(event)
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Trace for NoTrace {
    #[inline(always)]
    fn event(&mut self, _event: TraceEvent) {}
}

/// Prints every event as one line on stdout
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTrace;

#[cfg(feature = "std")]
impl Trace for StdoutTrace {
    fn event(&mut self, event: TraceEvent) {
        println!("{}", event);
    }
}

/// Forwards every event to the `log` facade at `trace` level
#[cfg(feature = "log")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

#[cfg(feature = "log")]
impl Trace for LogTrace {
    fn event(&mut self, event: TraceEvent) {
        log::trace!("{}", event);
    }
}
