/// Control states of the non-restoring divider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NonRestoringState {
    #[default]
    Idle,
    StoreQuotientBit,
    AddToRemainder,
    SubtractFromRemainder,
    Error,
    Output,
}

/// Creates a clock-stepped signed non-restoring divider type and a function that runs it to
/// completion.
#[macro_export]
macro_rules! impl_non_restoring {
    (
        $name:ident, // name of the divider type
        $fn_name:ident, // name of the run-to-completion function
        $n:expr, // the number of bits in a $iX or $uX
        $uX:ident, // unsigned integer type holding the quotient digits
        $iX:ident, // signed integer type of the operands and results
        $iD:ident // signed integer with double the bit width of $iX
    ) => {
        /// Signed non-restoring divider, stepped one clock edge at a time.
        ///
        /// Every iteration either adds or subtracts the denominator depending on whether the signs
        /// of the partial remainder and the denominator differ, so the quotient comes out as a
        /// string of digits that are each -1 or +1. `polynomial` packs those digits with a set bit
        /// for +1 and a cleared bit for -1, and is only turned into two's complement once all
        /// digits are known.
        ///
        /// The results are not unique. Only `numerator == denominator * quotient + remainder`
        /// (wrapping at the operand width) is guaranteed, not any sign convention for the
        /// remainder.
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            state: $crate::NonRestoringState,
            // high half of the working register
            remainder: $iD,
            // low half of the working register, starts out as the numerator
            polynomial: $uX,
            denominator: $iX,
            quotient: $iX,
            counter: u32,
            outputs: $crate::Outputs<$iX>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn state(&self) -> $crate::NonRestoringState {
                self.state
            }

            /// Converts a finished digit polynomial to two's complement. Subtracting the
            /// complement weighs every cleared bit as -1, and the result is the same as
            /// `(polynomial << 1) | 1`.
            pub fn polynomial_to_twos_complement(polynomial: $uX) -> $iX {
                polynomial.wrapping_sub(!polynomial) as $iX
            }

            fn finish_iteration(&mut self) -> $crate::NonRestoringState {
                if self.counter == 0 {
                    self.quotient = Self::polynomial_to_twos_complement(self.polynomial);
                    $crate::NonRestoringState::Output
                } else {
                    self.counter -= 1;
                    $crate::NonRestoringState::StoreQuotientBit
                }
            }
        }

        impl $crate::Divider for $name {
            type Int = $iX;
            const BITS: u32 = $n;

            fn step(&mut self, inputs: &$crate::Inputs<$iX>) -> $crate::Outputs<$iX> {
                use $crate::NonRestoringState::*;
                if inputs.reset {
                    *self = Self::default();
                    return self.outputs
                }
                if !inputs.enable {
                    return self.outputs
                }
                let next = match self.state {
                    Idle => {
                        self.outputs.done = false;
                        self.outputs.error = false;
                        if !inputs.start {
                            Idle
                        } else {
                            // FIXME: the extension follows the denominator latched by the previous
                            // division rather than the one loaded on this edge. This looks like a
                            // register timing slip, but it is kept for bit compatibility. The
                            // congruence still holds modulo 2^N.
                            self.remainder = if self.denominator < 0 { -1 } else { 0 };
                            self.polynomial = inputs.numerator as $uX;
                            self.denominator = inputs.denominator;
                            self.counter = $n - 1;
                            if inputs.denominator == 0 {
                                $crate::tracing::debug!(unit = stringify!($name), "division by zero");
                                Error
                            } else {
                                StoreQuotientBit
                            }
                        }
                    }
                    StoreQuotientBit => {
                        // the decision uses the sign from before the shift
                        let signs_differ = (self.remainder < 0) != (self.denominator < 0);
                        self.remainder =
                            (self.remainder << 1) | ((self.polynomial >> ($n - 1)) as $iD);
                        self.polynomial <<= 1;
                        if signs_differ {
                            AddToRemainder
                        } else {
                            self.polynomial |= 1;
                            SubtractFromRemainder
                        }
                    }
                    AddToRemainder => {
                        self.remainder = self.remainder.wrapping_add(self.denominator as $iD);
                        self.finish_iteration()
                    }
                    SubtractFromRemainder => {
                        self.remainder = self.remainder.wrapping_sub(self.denominator as $iD);
                        self.finish_iteration()
                    }
                    Error => {
                        self.outputs.error = true;
                        self.outputs.done = true;
                        Idle
                    }
                    Output => {
                        self.outputs.quotient = self.quotient;
                        self.outputs.remainder = self.remainder as $iX;
                        self.outputs.error = false;
                        self.outputs.done = true;
                        Idle
                    }
                };
                $crate::tracing::trace!(
                    unit = stringify!($name),
                    from = ?self.state,
                    to = ?next,
                    counter = self.counter,
                    "non-restoring step"
                );
                self.state = next;
                self.outputs
            }

            fn outputs(&self) -> $crate::Outputs<$iX> {
                self.outputs
            }

            fn is_idle(&self) -> bool {
                self.state == $crate::NonRestoringState::Idle
            }
        }

        /// Computes a quotient and remainder of `duo` divided by `div` by clocking a fresh
        #[doc = concat!("[`", stringify!($name), "`]")]
        /// through one division. See the type for which pairs can come out.
        pub fn $fn_name(duo: $iX, div: $iX) -> Result<($iX, $iX), $crate::DivError> {
            $crate::Divider::divide(&mut $name::new(), duo, div)
        }
    };
}
