//! Capability contract and the dispatcher that forwards to one bound variant.
//!
//! A `Dispatcher` can only be created through [`Dispatcher::bind`], so an
//! unbound dispatcher never exists. It adds nothing to the call: whatever the
//! variant returns, including an `Err`, comes back unchanged.

use tracing::debug;

/// One operation a variant can perform, described by its input and output.
///
/// The trait is object safe, so `Box<dyn Capability<Input = I, Output = O>>`
/// can be bound when the variant is only known at runtime.
pub trait Capability {
    type Input;
    type Output;

    /// Name used in log events.
    fn capability_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn invoke(&mut self, input: Self::Input) -> Self::Output;
}

// Trait objects and borrowed variants forward to the value behind them.
impl<C: Capability + ?Sized> Capability for Box<C> {
    type Input = C::Input;
    type Output = C::Output;

    fn capability_name(&self) -> &str {
        (**self).capability_name()
    }

    fn invoke(&mut self, input: Self::Input) -> Self::Output {
        (**self).invoke(input)
    }
}

impl<C: Capability + ?Sized> Capability for &mut C {
    type Input = C::Input;
    type Output = C::Output;

    fn capability_name(&self) -> &str {
        (**self).capability_name()
    }

    fn invoke(&mut self, input: Self::Input) -> Self::Output {
        (**self).invoke(input)
    }
}

/// Holds exactly one capability and forwards every call to it.
#[derive(Debug, Clone)]
pub struct Dispatcher<C> {
    capability: C,
}

impl<C: Capability> Dispatcher<C> {
    pub fn bind(capability: C) -> Self {
        debug!(capability = capability.capability_name(), "bound capability");
        Dispatcher { capability }
    }

    pub fn invoke(&mut self, input: C::Input) -> C::Output {
        debug!(capability = self.capability.capability_name(), "invoking capability");
        self.capability.invoke(input)
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub fn capability_mut(&mut self) -> &mut C {
        &mut self.capability
    }

    pub fn into_inner(self) -> C {
        self.capability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Scale {
        factor: i64,
    }

    impl Capability for Scale {
        type Input = i64;
        type Output = i64;

        fn invoke(&mut self, input: i64) -> i64 {
            input.wrapping_mul(self.factor)
        }
    }

    #[derive(Debug, Default)]
    struct Tally {
        total: i64,
    }

    impl Capability for Tally {
        type Input = i64;
        type Output = i64;

        fn capability_name(&self) -> &str {
            "tally"
        }

        fn invoke(&mut self, input: i64) -> i64 {
            self.total = self.total.wrapping_add(input);
            self.total
        }
    }

    struct Checked;

    impl Capability for Checked {
        type Input = u32;
        type Output = Result<u32, String>;

        fn invoke(&mut self, input: u32) -> Result<u32, String> {
            input.checked_sub(1).ok_or_else(|| "underflow".to_string())
        }
    }

    #[test]
    fn test_bind_then_invoke_forwards_input() {
        let mut dispatcher = Dispatcher::bind(Scale { factor: 3 });
        assert_eq!(dispatcher.invoke(14), 42);
    }

    #[test]
    fn test_errors_come_back_unchanged() {
        let mut dispatcher = Dispatcher::bind(Checked);
        assert_eq!(dispatcher.invoke(5), Ok(4));
        assert_eq!(dispatcher.invoke(0), Err("underflow".to_string()));
    }

    #[test]
    fn test_boxed_trait_object_can_be_bound() {
        let variants: Vec<Box<dyn Capability<Input = i64, Output = i64>>> =
            vec![Box::new(Scale { factor: 2 }), Box::new(Tally::default())];

        let results: Vec<i64> = variants
            .into_iter()
            .map(|variant| Dispatcher::bind(variant).invoke(10))
            .collect();

        assert_eq!(results, vec![20, 10]);
    }

    #[test]
    fn test_borrowed_variant_keeps_state_after_dispatcher_drops() {
        let mut tally = Tally::default();
        {
            let mut dispatcher = Dispatcher::bind(&mut tally);
            dispatcher.invoke(4);
            dispatcher.invoke(6);
        }
        assert_eq!(tally.total, 10);
    }

    #[test]
    fn test_dispatchers_do_not_share_state() {
        let mut first = Dispatcher::bind(Tally::default());
        let mut second = Dispatcher::bind(Tally::default());

        first.invoke(100);
        first.invoke(1);
        second.invoke(7);

        assert_eq!(first.capability().total, 101);
        assert_eq!(second.capability().total, 7);
    }

    #[test]
    fn test_capability_name_defaults_to_type_name() {
        let dispatcher = Dispatcher::bind(Scale { factor: 1 });
        assert!(dispatcher.capability().capability_name().ends_with("Scale"));

        let boxed: Box<dyn Capability<Input = i64, Output = i64>> = Box::new(Tally::default());
        assert_eq!(Dispatcher::bind(boxed).capability().capability_name(), "tally");
    }

    #[test]
    fn test_into_inner_returns_bound_variant() {
        let mut dispatcher = Dispatcher::bind(Tally::default());
        dispatcher.capability_mut().total = 5;
        dispatcher.invoke(5);
        assert_eq!(dispatcher.into_inner().total, 10);
    }

    proptest! {
        #[test]
        fn test_dispatch_is_transparent(factor: i64, input: i64) {
            let mut direct = Scale { factor };
            let mut dispatcher = Dispatcher::bind(Scale { factor });
            prop_assert_eq!(dispatcher.invoke(input), direct.invoke(input));
        }

        #[test]
        fn test_stateful_dispatch_matches_direct_calls(
            inputs in proptest::collection::vec(any::<i64>(), 0..32)
        ) {
            let mut direct = Tally::default();
            let mut dispatcher = Dispatcher::bind(Tally::default());
            for input in inputs {
                prop_assert_eq!(dispatcher.invoke(input), direct.invoke(input));
            }
        }
    }
}
