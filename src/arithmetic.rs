use crate::dispatch::Capability;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("attempted to divide {dividend} by zero")]
    DivideByZero { dividend: i64 },

    #[error("{dividend} / {divisor} overflows i64")]
    Overflow { dividend: i64, divisor: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub dividend: i64,
    pub divisor: i64,
}

impl Operands {
    pub fn new(dividend: i64, divisor: i64) -> Self {
        Operands { dividend, divisor }
    }

    fn check(&self) -> Result<(), ArithmeticError> {
        if self.divisor == 0 {
            return Err(ArithmeticError::DivideByZero {
                dividend: self.dividend,
            });
        }
        if self.dividend == i64::MIN && self.divisor == -1 {
            return Err(ArithmeticError::Overflow {
                dividend: self.dividend,
                divisor: self.divisor,
            });
        }
        Ok(())
    }
}

pub trait Division {
    fn divide(&self, operands: Operands) -> Result<i64, ArithmeticError>;
}

/// Rounds toward zero: `-7 / 2 == -3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatingDivision;

impl Division for TruncatingDivision {
    fn divide(&self, operands: Operands) -> Result<i64, ArithmeticError> {
        operands.check()?;
        Ok(operands.dividend / operands.divisor)
    }
}

/// Remainder is never negative: `-7 / 2 == -4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDivision;

impl Division for EuclideanDivision {
    fn divide(&self, operands: Operands) -> Result<i64, ArithmeticError> {
        operands.check()?;
        Ok(operands.dividend.div_euclid(operands.divisor))
    }
}

macro_rules! division_capability {
    ($($division:ty),+ $(,)?) => {
        $(
            impl Capability for $division {
                type Input = Operands;
                type Output = Result<i64, ArithmeticError>;

                fn invoke(&mut self, operands: Operands) -> Result<i64, ArithmeticError> {
                    self.divide(operands)
                }
            }
        )+
    };
}

division_capability!(TruncatingDivision, EuclideanDivision, dyn Division);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Dispatcher;
    use proptest::prelude::*;

    #[test]
    fn test_rounding_differs_between_variants() {
        let operands = Operands::new(-7, 2);
        assert_eq!(Dispatcher::bind(TruncatingDivision).invoke(operands), Ok(-3));
        assert_eq!(Dispatcher::bind(EuclideanDivision).invoke(operands), Ok(-4));
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        let mut dispatcher = Dispatcher::bind(TruncatingDivision);
        let err = dispatcher.invoke(Operands::new(10, 0)).unwrap_err();

        assert_eq!(err, ArithmeticError::DivideByZero { dividend: 10 });
        assert_eq!(err.to_string(), "attempted to divide 10 by zero");
    }

    #[test]
    fn test_divide_by_zero_propagates_through_question_mark() {
        fn halve_then_divide(
            division: &mut dyn Capability<Input = Operands, Output = Result<i64, ArithmeticError>>,
            divisor: i64,
        ) -> Result<i64, ArithmeticError> {
            let half = division.invoke(Operands::new(100, 2))?;
            division.invoke(Operands::new(half, divisor))
        }

        let mut euclid = EuclideanDivision;
        assert_eq!(halve_then_divide(&mut euclid, 5), Ok(10));
        assert!(matches!(
            halve_then_divide(&mut euclid, 0),
            Err(ArithmeticError::DivideByZero { dividend: 50 })
        ));
    }

    #[test]
    fn test_min_over_minus_one_overflows() {
        let result = TruncatingDivision.divide(Operands::new(i64::MIN, -1));
        assert!(matches!(result, Err(ArithmeticError::Overflow { .. })));
    }

    proptest! {
        #[test]
        fn test_boxed_dispatch_matches_direct_division(dividend: i64, divisor: i64) {
            let operands = Operands::new(dividend, divisor);
            let boxed: Box<dyn Division> = Box::new(EuclideanDivision);
            let direct = EuclideanDivision.divide(operands);
            prop_assert_eq!(Dispatcher::bind(boxed).invoke(operands), direct);
        }

        #[test]
        fn test_zero_divisor_never_yields_a_value(dividend: i64) {
            let result = TruncatingDivision.divide(Operands::new(dividend, 0));
            prop_assert_eq!(result, Err(ArithmeticError::DivideByZero { dividend }));
        }

        #[test]
        fn test_euclidean_remainder_is_non_negative(
            dividend in any::<i64>(),
            divisor in 1i64..1_000
        ) {
            let quotient = EuclideanDivision.divide(Operands::new(dividend, divisor)).unwrap();
            let remainder = dividend as i128 - quotient as i128 * divisor as i128;
            prop_assert!((0..divisor as i128).contains(&remainder));
        }
    }
}
