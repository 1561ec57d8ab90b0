macro_rules! impl_bit_sqrt {
    (
        $unsigned_name:ident, // name of the square root function
        $traced_name:ident, // name of the traced version of `$unsigned_name`
        $test_name:ident, // name of the test function
        $mul:ident, // shift-and-add multiplication function for a $uX
        $n:expr, // the number of bits in a $uX
        $uX:ident, // unsigned integer type for the input and output
        $uD:ident, // unsigned integer with double the bit width of $uX
        $($attr:meta),* // attributes for the square root functions
    ) => {
        /// Computes the floor of the square root of `x`.
        ///
        /// The root fits in half the bits of `x`. Starting from the most significant of those bits,
        /// each bit is tentatively set and kept only if the square of the candidate does not exceed
        /// `x`. This always takes exactly half the bit width of iterations.
        $(
            #[$attr]
        )*
        pub fn $unsigned_name(x: $uX) -> $uX {
            $traced_name(x, &mut $crate::trace::NoTrace)
        }

        /// Same as the untraced version, but reports every bit decision to `trace`
        $(
            #[$attr]
        )*
        pub fn $traced_name<T: $crate::trace::Trace>(x: $uX, trace: &mut T) -> $uX {
            use $crate::trace::TraceEvent;

            trace.event(TraceEvent::SqrtStart { x: x as u128 });
            let mut root: $uX = 0;
            for j in (0..($n / 2)).rev() {
                let candidate = root + (1 << j);
                // `candidate < 1 << ($n / 2)`, so the square fits and the product is exact
                let square: $uD = $mul(candidate, candidate);
                let kept = square <= (x as $uD);
                if kept {
                    root = candidate;
                }
                trace.event(TraceEvent::SqrtBit {
                    x: x as u128,
                    bit: j,
                    candidate: candidate as u128,
                    square: square as u128,
                    kept,
                    y: root as u128,
                });
            }
            trace.event(TraceEvent::SqrtDone { root: root as u128 });
            root
        }

        #[test]
        fn $test_name() {
            use rand::random;

            fn assert_floor_root(x: $uX) {
                let root = $unsigned_name(x) as $uD;
                let x = x as $uD;
                assert!(root * root <= x, "x:{} root:{}", x, root);
                assert!(x < (root + 1) * (root + 1), "x:{} root:{}", x, root);
            }

            assert_eq!($unsigned_name(0), 0);
            assert_eq!($unsigned_name(1), 1);
            assert_eq!($unsigned_name($uX::MAX), $uX::MAX >> ($n / 2));

            // every perfect square and its neighbors for the small roots
            let max_root: $uX = $uX::MAX >> ($n / 2);
            let limit: $uX = if max_root > 255 { 255 } else { max_root };
            let mut root: $uX = 1;
            while root <= limit {
                let square = root * root;
                assert_eq!($unsigned_name(square), root);
                assert_eq!($unsigned_name(square - 1), root - 1);
                assert_floor_root(square.saturating_add(1));
                root += 1;
            }

            let mut iterations = 0;
            $traced_name($uX::MAX, &mut |event: $crate::trace::TraceEvent| {
                if let $crate::trace::TraceEvent::SqrtBit { .. } = event {
                    iterations += 1;
                }
            });
            assert_eq!(iterations, $n / 2);

            for _ in 0..100_000 {
                assert_floor_root(random::<$uX>() >> (random::<u32>() % $n));
            }
        }
    };
}
