use rand::random;

#[rustfmt::skip]
use shift_add_arith::{
    test_arith,
    divide,
    divide_iterative,
    integer_sqrt,
    multiply,
    u8_mul_shift_add,
    u8_div_recursive_doubling,
    u8_div_doubling_scan,
    u8_sqrt_bit_search,
    u16_mul_shift_add,
    u16_mul_shift_add_traced,
    u16_div_recursive_doubling,
    u16_div_recursive_doubling_traced,
    u16_div_doubling_scan,
    u16_sqrt_bit_search,
    u16_sqrt_bit_search_traced,
    u32_mul_shift_add,
    u32_div_recursive_doubling,
    u32_div_doubling_scan,
    u32_sqrt_bit_search,
    u64_mul_shift_add,
    u64_div_recursive_doubling,
    u64_div_doubling_scan,
    u64_sqrt_bit_search,
    TraceEvent,
    OPERAND_BITS,
};

test_arith!(
    8,
    u8,
    u16,
    arith_8,
    u8_mul_shift_add,
    u8_div_recursive_doubling,
    u8_div_doubling_scan,
    u8_sqrt_bit_search;
);
test_arith!(
    16,
    u16,
    u32,
    arith_16,
    u16_mul_shift_add,
    u16_div_recursive_doubling,
    u16_div_doubling_scan,
    u16_sqrt_bit_search;
);
test_arith!(
    32,
    u32,
    u64,
    arith_32,
    u32_mul_shift_add,
    u32_div_recursive_doubling,
    u32_div_doubling_scan,
    u32_sqrt_bit_search;
);
test_arith!(
    64,
    u64,
    u128,
    arith_64,
    u64_mul_shift_add,
    u64_div_recursive_doubling,
    u64_div_doubling_scan,
    u64_sqrt_bit_search;
);

#[test]
fn reference_scenarios() {
    assert_eq!(OPERAND_BITS, 16);
    assert_eq!(multiply(12, 10), 120);
    assert_eq!(multiply(6, 5), 30);
    assert_eq!(divide(30, 4), 7);
    assert_eq!(divide_iterative(30, 4), 7);
    assert_eq!(divide_iterative(1000, 4), 250);
    assert_eq!(integer_sqrt(25), 5);
    assert_eq!(integer_sqrt(100), 10);
}

#[test]
fn multiply_small_operands() {
    for x in 0..=255u16 {
        for y in 0..=255u16 {
            assert_eq!(multiply(x, y), (x as u32) * (y as u32));
        }
    }
}

#[test]
fn multiply_truncation() {
    // 3 << 15 leaves the 16 bit range, so bit 15 of `y` is dropped
    assert_eq!(multiply(3, 0xffff), 3 * 0x7fff);
    assert_eq!(multiply(0xffff, 0xffff), 0xffff);
    assert_eq!(multiply(0x8000, 3), 0x8000);
    assert_eq!(multiply(1, 0xffff), 0xffff);
    // a set bit below the truncation point still counts
    assert_eq!(multiply(0x100, 0x81), 0x8100);
}

#[test]
fn divide_exhaustive_8() {
    for x in 0..=u8::MAX {
        for y in 1..=u8::MAX {
            assert_eq!(u8_div_recursive_doubling(x, y), x / y);
            assert_eq!(u8_div_doubling_scan(x, y), x / y);
        }
    }
}

#[test]
fn divide_by_larger() {
    for _ in 0..10_000 {
        let x: u16 = random::<u16>() >> 1;
        let y = x + 1 + (random::<u16>() >> 1);
        assert_eq!(divide(x, y), 0);
        assert_eq!(divide_iterative(x, y), 0);
    }
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn divide_by_zero() {
    divide(7, 0);
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn divide_iterative_by_zero() {
    divide_iterative(7, 0);
}

#[test]
fn sqrt_exhaustive_16() {
    for x in 0..=u16::MAX {
        let root = integer_sqrt(x) as u32;
        let x = x as u32;
        assert!(root * root <= x && x < (root + 1) * (root + 1), "x:{}", x);
    }
}

#[test]
fn deterministic() {
    for _ in 0..1000 {
        let (x, y): (u16, u16) = (random(), random());
        assert_eq!(multiply(x, y), multiply(x, y));
        assert_eq!(integer_sqrt(x), integer_sqrt(x));
        if y != 0 {
            assert_eq!(divide(x, y), divide(x, y));
        }
    }
}

#[test]
fn multiply_trace() {
    let mut events = Vec::new();
    let product = u16_mul_shift_add_traced(12, 10, &mut |event: TraceEvent| events.push(event));
    assert_eq!(product, 120);
    assert_eq!(events.first(), Some(&TraceEvent::MulStart { x: 12, y: 10 }));
    assert_eq!(events.last(), Some(&TraceEvent::MulDone { product: 120 }));
    // 12 << 12 is the last shift that stays in range
    let bits: Vec<(u32, bool)> = events
        .iter()
        .filter_map(|event| match *event {
            TraceEvent::MulBit { bit, set, .. } => Some((bit, set)),
            _ => None,
        })
        .collect();
    assert_eq!(bits.len(), 13);
    assert_eq!(&bits[..4], &[(0, false), (1, true), (2, false), (3, true)]);
    assert!(events.contains(&TraceEvent::MulTruncated {
        bit: 12,
        shifted: 12 << 13
    }));
    assert_eq!(u16_mul_shift_add(12, 10), product);
}

#[test]
fn divide_trace() {
    let mut events = Vec::new();
    let quo = u16_div_recursive_doubling_traced(30, 4, &mut |event: TraceEvent| {
        events.push(event)
    });
    assert_eq!(quo, 7);
    assert_eq!(events[0], TraceEvent::DivCall { x: 30, y: 4 });
    assert_eq!(events[4], TraceEvent::DivBase { x: 30, y: 32 });
    assert_eq!(
        events.last(),
        Some(&TraceEvent::DivReturn {
            x: 30,
            y: 4,
            q: 3,
            remainder: 6,
            quotient: 7
        })
    );
}

#[test]
fn sqrt_trace() {
    let mut kept = Vec::new();
    let root = u16_sqrt_bit_search_traced(100, &mut |event: TraceEvent| {
        if let TraceEvent::SqrtBit {
            bit, kept: true, ..
        } = event
        {
            kept.push(bit);
        }
    });
    assert_eq!(root, 10);
    // 10 == 0b1010
    assert_eq!(kept, vec![3, 1]);
}
