//! Decorator pattern: a base component wrapped by any number of layers, each
//! adding a fixed label fragment and a fixed cost increment.
//!
//! Costs are integer minor units (cents, paise) so chain sums are exact.

use crate::error::Result;
use crate::selector::SelectorTable;

/// Anything that can describe itself and report a cost.
///
/// Both methods are required: a variant that forgets one does not compile.
/// Wrapper costs saturate at `u64::MAX` rather than overflowing.
pub trait CostedComponent {
    fn describe(&self) -> String;
    fn cost(&self) -> u64;
}

impl<C: CostedComponent + ?Sized> CostedComponent for Box<C> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn cost(&self) -> u64 {
        (**self).cost()
    }
}

impl<C: CostedComponent + ?Sized> CostedComponent for &C {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn cost(&self) -> u64 {
        (**self).cost()
    }
}

/// A layer's fixed contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub label: &'static str,
    pub increment: u64,
}

impl Topping {
    pub const fn new(label: &'static str, increment: u64) -> Self {
        Self { label, increment }
    }
}

/// The unwrapped end of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    label: String,
    cost: u64,
}

impl Base {
    pub fn new(label: impl Into<String>, cost: u64) -> Self {
        Self {
            label: label.into(),
            cost,
        }
    }
}

impl CostedComponent for Base {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn cost(&self) -> u64 {
        self.cost
    }
}

/// One layer owning exactly one inner component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped<C> {
    inner: C,
    topping: Topping,
}

impl<C: CostedComponent> Wrapped<C> {
    pub fn new(inner: C, topping: Topping) -> Self {
        tracing::trace!(label = topping.label, increment = topping.increment, "wrap");
        Self { inner, topping }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn topping(&self) -> Topping {
        self.topping
    }

    /// Gives back the inner component, dropping this layer.
    pub fn unwrap_layer(self) -> C {
        self.inner
    }
}

impl<C: CostedComponent> CostedComponent for Wrapped<C> {
    fn describe(&self) -> String {
        let mut label = self.inner.describe();
        label.push_str(self.topping.label);
        label
    }

    fn cost(&self) -> u64 {
        self.inner.cost().saturating_add(self.topping.increment)
    }
}

/// Builder-style wrapping: `Espresso.with(MILK).with(SUGAR)`.
pub trait Decorate: CostedComponent + Sized {
    fn with(self, topping: Topping) -> Wrapped<Self> {
        Wrapped::new(self, topping)
    }
}

impl<C: CostedComponent> Decorate for C {}

/// Wraps a boxed chain with toppings chosen at runtime, in the given order.
pub fn wrap_all(
    base: Box<dyn CostedComponent>,
    toppings: impl IntoIterator<Item = Topping>,
) -> Box<dyn CostedComponent> {
    toppings
        .into_iter()
        .fold(base, |chain, topping| -> Box<dyn CostedComponent> {
            Box::new(Wrapped::new(chain, topping))
        })
}

// =============================================================================
// Coffee shop
// =============================================================================

pub mod coffee {
    use super::*;

    pub const MILK: Topping = Topping::new(", Milk", 50);
    pub const SUGAR: Topping = Topping::new(", Sugar", 20);
    pub const WHIPPED_CREAM: Topping = Topping::new(", Whipped Cream", 70);

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Espresso;

    impl CostedComponent for Espresso {
        fn describe(&self) -> String {
            "Espresso".to_string()
        }

        fn cost(&self) -> u64 {
            300
        }
    }

    fn topping_table() -> SelectorTable<Topping> {
        SelectorTable::new("topping")
            .with("milk", || Box::new(MILK))
            .with("sugar", || Box::new(SUGAR))
            .with("whipped_cream", || Box::new(WHIPPED_CREAM))
    }

    /// Looks up a topping by name (`milk`, `sugar`, `whipped_cream`).
    pub fn topping(name: &str) -> Result<Topping> {
        topping_table().select(name).map(|boxed| *boxed)
    }

    /// An espresso with the named toppings applied in order.
    pub fn from_toppings<S: AsRef<str>>(names: &[S]) -> Result<Box<dyn CostedComponent>> {
        let toppings = names
            .iter()
            .map(|name| topping(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(wrap_all(Box::new(Espresso), toppings))
    }
}

// =============================================================================
// Pizza
// =============================================================================

pub mod pizza {
    use super::*;

    pub const CHEESE: Topping = Topping::new(" + Cheese", 50);
    pub const CHICKEN: Topping = Topping::new(" + Chicken", 60);

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ItalianPizza;

    impl CostedComponent for ItalianPizza {
        fn describe(&self) -> String {
            "Italian Pizza".to_string()
        }

        fn cost(&self) -> u64 {
            300
        }
    }
}

/// Formats minor units as a price, `370` -> `$3.70`.
pub fn format_price(minor_units: u64) -> String {
    format!("${}.{:02}", minor_units / 100, minor_units % 100)
}

#[cfg(test)]
mod tests {
    use super::coffee::{Espresso, MILK, SUGAR, WHIPPED_CREAM};
    use super::pizza::{ItalianPizza, CHEESE, CHICKEN};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bare_base_component() {
        let espresso = Espresso;
        assert_eq!(espresso.describe(), "Espresso");
        assert_eq!(espresso.cost(), 300);
    }

    #[test]
    fn test_pizza_with_two_toppings() {
        let pizza = ItalianPizza.with(CHEESE).with(CHICKEN);
        assert_eq!(pizza.cost(), 410);
        assert_eq!(pizza.describe(), "Italian Pizza + Cheese + Chicken");
    }

    #[test]
    fn test_wrapping_order_changes_label_only() {
        let cheese_first = ItalianPizza.with(CHEESE).with(CHICKEN);
        let chicken_first = ItalianPizza.with(CHICKEN).with(CHEESE);

        assert_ne!(cheese_first.describe(), chicken_first.describe());
        assert_eq!(chicken_first.describe(), "Italian Pizza + Chicken + Cheese");
        assert_eq!(cheese_first.cost(), chicken_first.cost());
    }

    #[test]
    fn test_coffee_description() {
        let coffee = Espresso.with(MILK).with(SUGAR);
        assert_eq!(coffee.describe(), "Espresso, Milk, Sugar");
        assert_eq!(format_price(coffee.cost()), "$3.70");
    }

    #[test]
    fn test_same_topping_twice() {
        let coffee = Espresso.with(SUGAR).with(SUGAR);
        assert_eq!(coffee.cost(), 340);
        assert_eq!(coffee.describe(), "Espresso, Sugar, Sugar");
    }

    #[test]
    fn test_unwrap_layer() {
        let coffee = Espresso.with(MILK).with(WHIPPED_CREAM);
        assert_eq!(coffee.topping(), WHIPPED_CREAM);

        let inner = coffee.unwrap_layer();
        assert_eq!(inner.cost(), 350);
        assert_eq!(inner.inner(), &Espresso);
    }

    #[test]
    fn test_dynamic_chain_from_names() {
        let coffee = coffee::from_toppings(&["sugar", "Whipped_Cream"]).unwrap();
        assert_eq!(coffee.describe(), "Espresso, Sugar, Whipped Cream");
        assert_eq!(coffee.cost(), 390);
    }

    #[test]
    fn test_dynamic_chain_without_toppings() {
        let names: [&str; 0] = [];
        let coffee = coffee::from_toppings(&names).unwrap();
        assert_eq!(coffee.describe(), "Espresso");
        assert_eq!(coffee.cost(), 300);
    }

    #[test]
    fn test_unknown_topping() {
        let err = coffee::from_toppings(&["milk", "caramel"]).err().unwrap();
        assert!(err.is_unsupported_selector());
    }

    #[test]
    fn test_borrowed_component() {
        let pizza = ItalianPizza.with(CHEESE);
        let borrowed = (&pizza).with(CHICKEN);
        assert_eq!(borrowed.cost(), 410);
        assert_eq!(pizza.cost(), 350);
    }

    #[test]
    fn test_cost_saturates_instead_of_overflowing() {
        let chain = wrap_all(
            Box::new(Base::new("b", u64::MAX)),
            [Topping::new("x", 1)],
        );
        assert_eq!(chain.cost(), u64::MAX);
        assert_eq!(chain.describe(), "bx");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(1234), "$12.34");
    }

    fn arb_topping() -> impl Strategy<Value = Topping> {
        prop_oneof![
            Just(MILK),
            Just(SUGAR),
            Just(WHIPPED_CREAM),
            Just(CHEESE),
            Just(CHICKEN),
        ]
    }

    proptest! {
        #[test]
        fn prop_cost_is_base_plus_increments(
            base in 0u64..10_000,
            toppings in prop::collection::vec(arb_topping(), 0..8),
        ) {
            let expected = base + toppings.iter().map(|t| t.increment).sum::<u64>();
            let chain = wrap_all(Box::new(Base::new("base", base)), toppings.clone());
            prop_assert_eq!(chain.cost(), expected);

            let reversed = wrap_all(
                Box::new(Base::new("base", base)),
                toppings.iter().rev().copied(),
            );
            prop_assert_eq!(reversed.cost(), expected);
        }

        #[test]
        fn prop_describe_concatenates_inner_to_outer(
            toppings in prop::collection::vec(arb_topping(), 0..8),
        ) {
            let expected: String = std::iter::once("base")
                .chain(toppings.iter().map(|t| t.label))
                .collect();
            let chain = wrap_all(Box::new(Base::new("base", 0)), toppings);
            prop_assert_eq!(chain.describe(), expected);
        }
    }
}
