//! Multiplication, division, and integer square root for unsigned integer primitives, built from
//! nothing but shifts, comparisons, additions, and subtractions.
//!
//! Every algorithm is implemented for 8, 16, 32, and 64 bit operands. The functions are named
//! after the operand type and the algorithm, e.g. `u16_mul_shift_add`, and each one has a
//! `_traced` twin that narrates its steps to a [`Trace`] sink. [`multiply`], [`divide`],
//! [`divide_iterative`], and [`integer_sqrt`] are the 16 bit versions.
//!
//! The `std` feature (enabled by default) adds [`StdoutTrace`] and the `arith-trace` binary. The
//! `log` feature adds [`LogTrace`].
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod shift_add;

#[macro_use]
mod recursive_doubling;

#[macro_use]
mod doubling_scan;

#[macro_use]
mod bit_sqrt;


pub mod trace;

#[cfg(feature = "log")]
pub use trace::LogTrace;
#[cfg(feature = "std")]
pub use trace::StdoutTrace;
pub use trace::{NoTrace, Trace, TraceEvent};

/// The operand width of [`multiply`], [`divide`], [`divide_iterative`], and [`integer_sqrt`]
pub const OPERAND_BITS: u32 = u16::BITS;

pub(crate) fn zero_div_fn() -> ! {
    panic!("attempt to divide by zero")
}

/// Computes `x * y` with `u16_mul_shift_add`.
///
/// The result is exact whenever the product fits in a `u16`. Beyond that, set bits of `y` that
/// would shift `x` out of the `u16` range are discarded.
#[inline]
pub fn multiply(x: u16, y: u16) -> u32 {
    u16_mul_shift_add(x, y)
}

/// Computes `x / y` with `u16_div_recursive_doubling`.
///
/// # Panics
///
/// When attempting to divide by zero, this function will panic.
#[inline]
pub fn divide(x: u16, y: u16) -> u16 {
    u16_div_recursive_doubling(x, y)
}

/// Computes `x / y` with `u16_div_doubling_scan`.
///
/// # Panics
///
/// When attempting to divide by zero, this function will panic.
#[inline]
pub fn divide_iterative(x: u16, y: u16) -> u16 {
    u16_div_doubling_scan(x, y)
}

/// Computes the floor of the square root of `x` with `u16_sqrt_bit_search`
#[inline]
pub fn integer_sqrt(x: u16) -> u16 {
    u16_sqrt_bit_search(x)
}

// 8 bit
impl_shift_add!(
    u8_mul_shift_add,
    u8_mul_shift_add_traced,
    mul_shift_add_8,
    8,
    u8,
    u16,
    inline
);
impl_recursive_doubling!(
    u8_div_recursive_doubling,
    u8_div_recursive_doubling_traced,
    div_recursive_doubling_8,
    u8_mul_shift_add,
    8,
    u8,
    u16,
    inline
);
impl_doubling_scan!(
    u8_div_doubling_scan,
    u8_div_doubling_scan_traced,
    div_doubling_scan_8,
    8,
    u8,
    u16,
    inline
);
impl_bit_sqrt!(
    u8_sqrt_bit_search,
    u8_sqrt_bit_search_traced,
    sqrt_bit_search_8,
    u8_mul_shift_add,
    8,
    u8,
    u16,
    inline
);

// 16 bit
impl_shift_add!(
    u16_mul_shift_add,
    u16_mul_shift_add_traced,
    mul_shift_add_16,
    16,
    u16,
    u32,
    inline
);
impl_recursive_doubling!(
    u16_div_recursive_doubling,
    u16_div_recursive_doubling_traced,
    div_recursive_doubling_16,
    u16_mul_shift_add,
    16,
    u16,
    u32,
    inline
);
impl_doubling_scan!(
    u16_div_doubling_scan,
    u16_div_doubling_scan_traced,
    div_doubling_scan_16,
    16,
    u16,
    u32,
    inline
);
impl_bit_sqrt!(
    u16_sqrt_bit_search,
    u16_sqrt_bit_search_traced,
    sqrt_bit_search_16,
    u16_mul_shift_add,
    16,
    u16,
    u32,
    inline
);

// 32 bit
impl_shift_add!(
    u32_mul_shift_add,
    u32_mul_shift_add_traced,
    mul_shift_add_32,
    32,
    u32,
    u64,
    inline
);
impl_recursive_doubling!(
    u32_div_recursive_doubling,
    u32_div_recursive_doubling_traced,
    div_recursive_doubling_32,
    u32_mul_shift_add,
    32,
    u32,
    u64,
    inline
);
impl_doubling_scan!(
    u32_div_doubling_scan,
    u32_div_doubling_scan_traced,
    div_doubling_scan_32,
    32,
    u32,
    u64,
    inline
);
impl_bit_sqrt!(
    u32_sqrt_bit_search,
    u32_sqrt_bit_search_traced,
    sqrt_bit_search_32,
    u32_mul_shift_add,
    32,
    u32,
    u64,
    inline
);

// 64 bit
impl_shift_add!(
    u64_mul_shift_add,
    u64_mul_shift_add_traced,
    mul_shift_add_64,
    64,
    u64,
    u128,
    inline
);
impl_recursive_doubling!(
    u64_div_recursive_doubling,
    u64_div_recursive_doubling_traced,
    div_recursive_doubling_64,
    u64_mul_shift_add,
    64,
    u64,
    u128,
    inline
);
impl_doubling_scan!(
    u64_div_doubling_scan,
    u64_div_doubling_scan_traced,
    div_doubling_scan_64,
    64,
    u64,
    u128,
    inline
);
impl_bit_sqrt!(
    u64_sqrt_bit_search,
    u64_sqrt_bit_search_traced,
    sqrt_bit_search_64,
    u64_mul_shift_add,
    64,
    u64,
    u128,
    inline
);
