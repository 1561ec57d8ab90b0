macro_rules! impl_shift_add {
    (
        $unsigned_name:ident, // name of the multiplication function
        $traced_name:ident, // name of the traced version of `$unsigned_name`
        $test_name:ident, // name of the test function
        $n:expr, // the number of bits in a $uX
        $uX:ident, // unsigned integer type for the operands
        $uD:ident, // unsigned integer with double the bit width of $uX, used for the product
        $($attr:meta),* // attributes for the multiplication functions
    ) => {
        /// Computes the product of `x` and `y` using only shifts and additions.
        ///
        /// The product is returned in a type twice as wide as the operands. The shifted copy of
        /// `x` is never allowed to leave the operand range: once it does, the remaining high bits
        /// of `y` are ignored. This means that the result is exact whenever the true product fits
        /// in the operand type, and is a truncated sum (always less than twice the operand
        /// maximum plus two) otherwise.
        $(
            #[$attr]
        )*
        pub fn $unsigned_name(x: $uX, y: $uX) -> $uD {
            $traced_name(x, y, &mut $crate::trace::NoTrace)
        }

        /// Same as the untraced version, but reports every bit decision to `trace`
        $(
            #[$attr]
        )*
        pub fn $traced_name<T: $crate::trace::Trace>(x: $uX, y: $uX, trace: &mut T) -> $uD {
            use $crate::trace::TraceEvent;

            trace.event(TraceEvent::MulStart { x: x as u128, y: y as u128 });
            let mut sum: $uD = 0;
            // `x << i` for the current bit `i`
            let mut shifted = x as $uD;
            for i in 0..$n {
                let set = ((y >> i) & 1) == 1;
                if set {
                    sum += shifted;
                }
                trace.event(TraceEvent::MulBit {
                    bit: i,
                    set,
                    shifted: shifted as u128,
                    sum: sum as u128,
                });
                shifted <<= 1;
                if shifted > ($uX::MAX as $uD) {
                    if (i + 1) < $n {
                        trace.event(TraceEvent::MulTruncated { bit: i, shifted: shifted as u128 });
                    }
                    break
                }
            }
            trace.event(TraceEvent::MulDone { product: sum as u128 });
            sum
        }

        #[test]
        fn $test_name() {
            use rand::random;

            // a literal model of the loop, with the native shift
            fn model(x: $uX, y: $uX) -> $uD {
                let mut sum: $uD = 0;
                for i in 0..$n {
                    let shifted = (x as $uD) << i;
                    if shifted > ($uX::MAX as $uD) {
                        break
                    }
                    if ((y >> i) & 1) == 1 {
                        sum += shifted;
                    }
                }
                sum
            }

            // all products of continuous strings of ones that fit in a `$uX` are exact
            for x_len in 0..$n {
                for x_shift in 0..=x_len {
                    for y_len in 0..$n {
                        for y_shift in 0..=y_len {
                            let x: $uX = (!0 >> x_len) << x_shift;
                            let y: $uX = (!0 >> y_len) << y_shift;
                            let product = $unsigned_name(x, y);
                            if let Some(expected) = x.checked_mul(y) {
                                assert_eq!(product, expected as $uD, "x:{} y:{}", x, y);
                            }
                            assert_eq!(product, model(x, y), "x:{} y:{}", x, y);
                        }
                    }
                }
            }

            let bound = 2 * ($uX::MAX as $uD) + 2;
            for _ in 0..100_000 {
                let x: $uX = random::<$uX>() >> (random::<u32>() % $n);
                let y: $uX = random();
                let product = $unsigned_name(x, y);
                assert_eq!(product, model(x, y), "x:{} y:{}", x, y);
                assert!(product < bound);
                // the full product never differs from the truncated one by anything but the
                // discarded high terms
                assert!(product <= (x as $uD) * (y as $uD));

                let mut bits = 0;
                let mut done = None;
                let traced = $traced_name(x, y, &mut |event: $crate::trace::TraceEvent| match event {
                    $crate::trace::TraceEvent::MulBit { .. } => bits += 1,
                    $crate::trace::TraceEvent::MulDone { product } => done = Some(product),
                    _ => (),
                });
                assert_eq!(traced, product);
                assert_eq!(done, Some(product as u128));
                assert!(bits >= 1 && bits <= $n);
            }
        }
    };
}
