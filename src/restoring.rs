/// Control states of the restoring divider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RestoringState {
    #[default]
    Idle,
    Subtract,
    Restore,
    Error,
    Output,
}

/// Creates a clock-stepped unsigned restoring divider type and a function that runs it to
/// completion.
#[macro_export]
macro_rules! impl_restoring {
    (
        $name:ident, // name of the divider type
        $fn_name:ident, // name of the run-to-completion function
        $n:expr, // the number of bits in a $uX
        $uX:ident, // unsigned integer type of the operands and results
        $uD:ident, // unsigned integer with double the bit width of $uX
        $iD:ident // signed version of $uD
    ) => {
        /// Unsigned restoring divider, stepped one clock edge at a time.
        ///
        /// The working register is kept as two fields. `remainder` is the high half and carries
        /// the one bit of headroom that the partial remainder needs right after a shift.
        /// `quotient` is the low half, which starts out holding the numerator bits and fills up
        /// with quotient bits as the numerator bits are shifted into `remainder`.
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            state: $crate::RestoringState,
            remainder: $uD,
            quotient: $uX,
            denominator: $uX,
            counter: u32,
            outputs: $crate::Outputs<$uX>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn state(&self) -> $crate::RestoringState {
                self.state
            }
        }

        impl $crate::Divider for $name {
            type Int = $uX;
            const BITS: u32 = $n;

            fn step(&mut self, inputs: &$crate::Inputs<$uX>) -> $crate::Outputs<$uX> {
                use $crate::RestoringState::*;
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
                            // The first shift of the working register happens here, so the least
                            // significant bit of `quotient` is always the free slot for the
                            // quotient bit of the current iteration.
                            self.remainder = (inputs.numerator >> ($n - 1)) as $uD;
                            self.quotient = inputs.numerator << 1;
                            self.denominator = inputs.denominator;
                            self.counter = $n - 1;
                            if inputs.denominator == 0 {
                                $crate::tracing::debug!(unit = stringify!($name), "division by zero");
                                Error
                            } else {
                                Subtract
                            }
                        }
                    }
                    Subtract => {
                        self.remainder = self.remainder.wrapping_sub(self.denominator as $uD);
                        Restore
                    }
                    Restore => {
                        if (self.remainder as $iD) < 0 {
                            self.remainder = self.remainder.wrapping_add(self.denominator as $uD);
                        } else {
                            self.quotient |= 1;
                        }
                        // `remainder < denominator` holds here
                        if self.counter == 0 {
                            Output
                        } else {
                            self.counter -= 1;
                            self.remainder =
                                (self.remainder << 1) | ((self.quotient >> ($n - 1)) as $uD);
                            self.quotient <<= 1;
                            Subtract
                        }
                    }
                    Error => {
                        self.outputs.error = true;
                        self.outputs.done = true;
                        Idle
                    }
                    Output => {
                        self.outputs.quotient = self.quotient;
                        self.outputs.remainder = self.remainder as $uX;
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
                    "restoring step"
                );
                self.state = next;
                self.outputs
            }

            fn outputs(&self) -> $crate::Outputs<$uX> {
                self.outputs
            }

            fn is_idle(&self) -> bool {
                self.state == $crate::RestoringState::Idle
            }
        }

        /// Computes the quotient and remainder of `duo` divided by `div` by clocking a fresh
        #[doc = concat!("[`", stringify!($name), "`]")]
        /// through one division.
        pub fn $fn_name(duo: $uX, div: $uX) -> Result<($uX, $uX), $crate::DivError> {
            $crate::Divider::divide(&mut $name::new(), duo, div)
        }
    };
}
