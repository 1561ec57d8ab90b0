macro_rules! impl_doubling_scan {
    (
        $unsigned_name:ident, // name of the division function
        $traced_name:ident, // name of the traced version of `$unsigned_name`
        $test_name:ident, // name of the test function
        $n:expr, // the number of bits in a $uX
        $uX:ident, // unsigned integer type for the inputs and outputs of `$unsigned_name`
        $uD:ident, // unsigned integer with double the bit width of $uX
        $($attr:meta),* // attributes for the division functions
    ) => {
        /// Computes the quotient of `x` divided by `y`.
        ///
        /// This is the loop form of recursive doubling, the same as schoolbook long division: the
        /// divisor is doubled until it exceeds `x`, then halved back down, subtracting it from `x`
        /// whenever it fits. It needs no stack proportional to the bit width.
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

        /// Same as the untraced version, but reports every doubling and subtraction to `trace`
        ///
        /// # Panics
        ///
        /// When attempting to divide by zero, this function will panic.
        $(
            #[$attr]
        )*
        pub fn $traced_name<T: $crate::trace::Trace>(x: $uX, y: $uX, trace: &mut T) -> $uX {
            use $crate::trace::TraceEvent;

            if y == 0 {
                $crate::zero_div_fn()
            }
            // `divisor == y * power` at all times, and neither exceeds twice the operand range
            let mut divisor = y as $uD;
            let mut power: $uD = 1;
            while divisor <= (x as $uD) {
                divisor <<= 1;
                power <<= 1;
                trace.event(TraceEvent::DivScanDouble { divisor: divisor as u128 });
            }

            let mut rest = x;
            let mut quo: $uX = 0;
            while power > 1 {
                divisor >>= 1;
                power >>= 1;
                quo <<= 1;
                let subtracted = divisor <= (rest as $uD);
                if subtracted {
                    rest -= divisor as $uX;
                    quo |= 1;
                }
                trace.event(TraceEvent::DivScanStep {
                    divisor: divisor as u128,
                    power: power as u128,
                    subtracted,
                    rest: rest as u128,
                });
            }
            debug_assert!((rest as $uD) < (y as $uD));
            trace.event(TraceEvent::DivScanDone { quotient: quo as u128 });
            quo
        }

        #[test]
        fn $test_name() {
            use rand::random;

            assert_eq!($unsigned_name(30, 4), 7);
            assert_eq!($unsigned_name(0, 1), 0);
            assert_eq!($unsigned_name($uX::MAX, 1), $uX::MAX);
            assert_eq!($unsigned_name($uX::MAX, $uX::MAX), 1);
            assert_eq!($unsigned_name(1, $uX::MAX), 0);

            let mut steps = 0;
            $traced_name($uX::MAX, 1, &mut |event: $crate::trace::TraceEvent| {
                if let $crate::trace::TraceEvent::DivScanStep { .. } = event {
                    steps += 1;
                }
            });
            assert_eq!(steps, $n);

            for _ in 0..100_000 {
                let x: $uX = random();
                let y: $uX = random::<$uX>() >> (random::<u32>() % $n);
                if y == 0 {
                    continue
                }
                assert_eq!($unsigned_name(x, y), x / y, "x:{} y:{}", x, y);
            }
        }
    };
}
