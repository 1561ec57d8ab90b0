macro_rules! impl_recursive_doubling {
    (
        $unsigned_name:ident, // name of the division function
        $traced_name:ident, // name of the traced version of `$unsigned_name`
        $test_name:ident, // name of the test function
        $mul:ident, // shift-and-add multiplication function for a $uX
        $n:expr, // the number of bits in a $uX
        $uX:ident, // unsigned integer type for the inputs and outputs of `$unsigned_name`
        $uD:ident, // unsigned integer with double the bit width of $uX
        $($attr:meta),* // attributes for the division functions
    ) => {
        /// Computes the quotient of `x` divided by `y`.
        ///
        /// This uses recursive doubling: the quotient of `x` by `2 * y` is found first, and the
        /// quotient at this level is twice that plus the one bit that the remainder decides. The
        /// recursion depth is at most one more than the bit width.
        ///
        /// # Panics
        ///
        /// When attempting to divide by zero, this function will panic.
        $(
            #[$attr]
        )*
        pub fn $unsigned_name(x: $uX, y: $uX) -> $uX {
            $traced_name(x, y, &mut $crate::trace::NoTrace)
        }

        /// Same as the untraced version, but reports every call and return to `trace`
        ///
        /// # Panics
        ///
        /// When attempting to divide by zero, this function will panic.
        $(
            #[$attr]
        )*
        pub fn $traced_name<T: $crate::trace::Trace>(x: $uX, y: $uX, trace: &mut T) -> $uX {
            use $crate::trace::TraceEvent;

            // The divisor is carried in a $uD, because doubling it can leave the range of a $uX
            // before it exceeds `x`. It never exceeds `2 * x`.
            fn recurse<T: $crate::trace::Trace>(x: $uX, y: $uD, trace: &mut T) -> $uX {
                trace.event(TraceEvent::DivCall { x: x as u128, y: y as u128 });
                if y > (x as $uD) {
                    trace.event(TraceEvent::DivBase { x: x as u128, y: y as u128 });
                    return 0
                }
                let double = y << 1;
                let q = recurse(x, double, trace);
                // `q * 2 * y <= x`, so the shift-and-add product is exact. When `q != 0`, the
                // doubled divisor fits in a $uX.
                let taken = if q == 0 {
                    0
                } else {
                    $mul(q, double as $uX) as $uX
                };
                let remainder = x - taken;
                let quotient = if (remainder as $uD) < y {
                    q << 1
                } else {
                    (q << 1) | 1
                };
                trace.event(TraceEvent::DivReturn {
                    x: x as u128,
                    y: y as u128,
                    q: q as u128,
                    remainder: remainder as u128,
                    quotient: quotient as u128,
                });
                quotient
            }

            if y == 0 {
                $crate::zero_div_fn()
            }
            recurse(x, y as $uD, trace)
        }

        #[test]
        fn $test_name() {
            use rand::random;

            let mut depth = 0;
            let mut returns = 0;
            let quo = $traced_name(30, 4, &mut |event: $crate::trace::TraceEvent| match event {
                $crate::trace::TraceEvent::DivCall { .. } => depth += 1,
                $crate::trace::TraceEvent::DivReturn { .. } => returns += 1,
                _ => (),
            });
            assert_eq!(quo, 7);
            // 4, 8, 16 are at most 30 and 32 is not
            assert_eq!(depth, 4);
            assert_eq!(returns, 3);

            // the deepest recursion happens when dividing the maximum by one
            let mut depth = 0;
            let quo = $traced_name($uX::MAX, 1, &mut |event: $crate::trace::TraceEvent| {
                if let $crate::trace::TraceEvent::DivCall { .. } = event {
                    depth += 1;
                }
            });
            assert_eq!(quo, $uX::MAX);
            assert_eq!(depth, $n + 1);

            for _ in 0..100_000 {
                let x: $uX = random();
                let y: $uX = random::<$uX>() >> (random::<u32>() % $n);
                if y == 0 {
                    continue
                }
                let quo = $unsigned_name(x, y);
                assert_eq!(quo, x / y, "x:{} y:{}", x, y);
                if y > x {
                    assert_eq!(quo, 0);
                }
            }
        }
    };
}
