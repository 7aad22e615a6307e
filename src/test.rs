/// Creates intensive test functions that drive a restoring and a non-restoring divider of a
/// certain size through the start/done handshake.
#[macro_export]
macro_rules! test_dividers {
    (
        $n:expr, // the number of bits in a $iX or $uX
        $uX:ident, // unsigned integer that will be shifted
        $iX:ident, // signed version of $uX
        // list of triples of the test name, the restoring divider type, and the non-restoring
        // divider type
        $($test_name:ident, $restoring:ident, $non_restoring:ident);+;
    ) => {
        $(
            #[test]
            fn $test_name() {
                use $crate::{Divider, Inputs, Outputs};
                use rand::random;

                // Pulses `start` and clocks until `done`, returning the outputs of the `done` step
                // and the number of steps taken including the `start` step.
                fn run<D: Divider>(divider: &mut D, lhs: D::Int, rhs: D::Int) -> (Outputs<D::Int>, usize) {
                    let mut outputs = divider.step(&Inputs::start(lhs, rhs));
                    let mut steps = 1;
                    while !outputs.done {
                        outputs = divider.step(&Inputs::idle());
                        steps += 1;
                        if steps > D::LATENCY {
                            panic!("no `done` after {} steps with lhs:{:?} rhs:{:?}", steps, lhs, rhs);
                        }
                    }
                    (outputs, steps)
                }

                // The same two dividers are used for every division, so that state left over from
                // one division cannot affect the next.
                fn assert_invariants(
                    restoring: &mut $restoring,
                    non_restoring: &mut $non_restoring,
                    lhs: $uX,
                    rhs: $uX,
                ) {
                    let (outputs, steps) = run(restoring, lhs, rhs);
                    if rhs == 0 {
                        if !outputs.error || steps != <$restoring as Divider>::ERROR_LATENCY {
                            panic!(
                                "restoring divider missed division by zero with lhs:{} \
                                found error:{} after {} steps",
                                lhs,
                                outputs.error,
                                steps
                            );
                        }
                    } else {
                        let (quo, rem) = (outputs.quotient, outputs.remainder);
                        if outputs.error
                            || steps != <$restoring as Divider>::LATENCY
                            || rhs <= rem
                            || quo != lhs.wrapping_div(rhs)
                            || lhs != rhs.wrapping_mul(quo).wrapping_add(rem)
                        {
                            panic!(
                                "restoring divider failed with lhs:{} rhs:{} \
                                expected:({}, {}) found:({}, {}) error:{} after {} steps",
                                lhs,
                                rhs,
                                lhs.wrapping_div(rhs),
                                lhs.wrapping_rem(rhs),
                                quo,
                                rem,
                                outputs.error,
                                steps
                            );
                        }
                    }

                    // test the non-restoring divider also
                    let lhs = lhs as $iX;
                    let rhs = rhs as $iX;
                    let (outputs, steps) = run(non_restoring, lhs, rhs);
                    if rhs == 0 {
                        if !outputs.error || steps != <$non_restoring as Divider>::ERROR_LATENCY {
                            panic!(
                                "non-restoring divider missed division by zero with lhs:{} \
                                found error:{} after {} steps",
                                lhs,
                                outputs.error,
                                steps
                            );
                        }
                    } else {
                        // Only the congruence is guaranteed. The hardware computes it at the
                        // operand width, so `MIN / -1` wraps instead of overflowing.
                        let (quo, rem) = (outputs.quotient, outputs.remainder);
                        if outputs.error
                            || steps != <$non_restoring as Divider>::LATENCY
                            || lhs != rhs.wrapping_mul(quo).wrapping_add(rem)
                        {
                            panic!(
                                "non-restoring divider failed with lhs:{} rhs:{} \
                                found:({}, {}) error:{} after {} steps",
                                lhs,
                                rhs,
                                quo,
                                rem,
                                outputs.error,
                                steps
                            );
                        }
                    }
                }

                let mut restoring = $restoring::new();
                let mut non_restoring = $non_restoring::new();

                assert_invariants(&mut restoring, &mut non_restoring, 0, 0);
                assert_invariants(&mut restoring, &mut non_restoring, !0, 0);
                assert_invariants(&mut restoring, &mut non_restoring, 0, !0);

                // Brute force fuzzer that checks all possible single continuous strings of ones
                // (e.x. 0b00111000, 0b11110000, 0b01111110). The signed extremes are among these.
                for lhs_len in (0..$n).rev() {
                    for lhs_shift in 0..=lhs_len {
                        for rhs_len in (0..$n).rev() {
                            for rhs_shift in 0..=rhs_len {
                                let lhs = (!0 >> lhs_len) << lhs_shift;
                                let rhs = (!0 >> rhs_len) << rhs_shift;
                                assert_invariants(&mut restoring, &mut non_restoring, lhs, rhs);
                            }
                        }
                    }
                }

                // Randomly OR, AND, and XOR randomly sized and shifted continuous strings of ones
                // with `lhs` and `rhs`. XOR is performed most often because OR and AND tend to be
                // destructive. `rhs` regularly passes through zero this way.
                let mut lhs: $uX = 0;
                let mut rhs: $uX = 0;
                let ones: $uX = !0;
                let bit_indexing_mask = $n - 1;
                for _ in 0..100_000 {
                    let r0: u32 = bit_indexing_mask & random::<u32>();
                    let r1: u32 = bit_indexing_mask & random::<u32>();
                    let mask = ones.wrapping_shr(r0).rotate_left(r1);
                    match (random(), random(), random()) {
                        (false, false, false) => lhs |= mask,
                        (false, false, true) => lhs &= mask,
                        (false, true, _) => lhs ^= mask,
                        (true, false, false) => rhs |= mask,
                        (true, false, true) => rhs &= mask,
                        (true, true, _) => rhs ^= mask,
                    }
                    assert_invariants(&mut restoring, &mut non_restoring, lhs, rhs);
                }
            }
        )+
    }
}
