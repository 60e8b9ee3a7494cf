//! Strategy pattern: one capability, several interchangeable implementations,
//! picked at runtime by a discriminator.

use crate::error::{PatternError, Result};
use crate::selector::{normalize, SelectorTable};
use std::fmt;

// =============================================================================
// Tax
// =============================================================================

pub trait TaxStrategy {
    fn name(&self) -> &'static str;
    fn rate(&self) -> f64;

    fn calculate(&self, income: f64) -> f64 {
        income * self.rate()
    }
}

/// 18% GST.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndiaTax;

impl TaxStrategy for IndiaTax {
    fn name(&self) -> &'static str {
        "India GST"
    }

    fn rate(&self) -> f64 {
        0.18
    }
}

/// 19% VAT.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanyTax;

impl TaxStrategy for GermanyTax {
    fn name(&self) -> &'static str {
        "Germany VAT"
    }

    fn rate(&self) -> f64 {
        0.19
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsState {
    NewYork,
    California,
}

/// Flat federal rate, or a state rate when a state is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsaTax {
    state: Option<UsState>,
}

impl UsaTax {
    pub fn federal() -> Self {
        Self { state: None }
    }

    pub fn for_state(state: UsState) -> Self {
        Self { state: Some(state) }
    }
}

impl TaxStrategy for UsaTax {
    fn name(&self) -> &'static str {
        match self.state {
            None => "USA federal",
            Some(UsState::NewYork) => "USA (NY)",
            Some(UsState::California) => "USA (CA)",
        }
    }

    fn rate(&self) -> f64 {
        match self.state {
            None => 0.40,
            Some(UsState::NewYork) => 0.08,
            Some(UsState::California) => 0.09,
        }
    }
}

/// Country code -> tax strategy.
pub fn tax_table() -> SelectorTable<dyn TaxStrategy> {
    SelectorTable::<dyn TaxStrategy>::new("country")
        .with("india", || Box::new(IndiaTax))
        .with("germany", || Box::new(GermanyTax))
        .with("usa", || Box::new(UsaTax::federal()))
}

/// Picks a strategy by country, and by state where the country has them.
///
/// Only `usa` accepts a state (`ny`, `ca`); a state for any other country is
/// ignored.
pub fn tax_strategy(country: &str, state: Option<&str>) -> Result<Box<dyn TaxStrategy>> {
    let strategy = tax_table().select(country)?;
    match (normalize(country).as_str(), state) {
        ("usa", Some(code)) => match normalize(code).as_str() {
            "ny" => Ok(Box::new(UsaTax::for_state(UsState::NewYork))),
            "ca" => Ok(Box::new(UsaTax::for_state(UsState::California))),
            _ => Err(PatternError::unsupported("us state", code)),
        },
        _ => Ok(strategy),
    }
}

/// Applies whichever tax strategy it was built with.
pub struct TaxCalculator {
    strategy: Box<dyn TaxStrategy>,
}

impl TaxCalculator {
    pub fn new(strategy: Box<dyn TaxStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn calculate_tax(&self, income: f64) -> f64 {
        let tax = self.strategy.calculate(income);
        tracing::debug!(strategy = self.strategy.name(), income, tax, "tax calculated");
        tax
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn TaxStrategy>) {
        self.strategy = strategy;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxPayer {
    pub name: String,
    pub country: String,
    pub income: f64,
}

impl TaxPayer {
    pub fn new(name: impl Into<String>, country: impl Into<String>, income: f64) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            income,
        }
    }

    pub fn tax_due(&self) -> Result<f64> {
        let calculator = TaxCalculator::new(tax_strategy(&self.country, None)?);
        Ok(calculator.calculate_tax(self.income))
    }
}

// =============================================================================
// Payment
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub provider: &'static str,
    pub amount: f64,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payment of {:.2} done by {}", self.amount, self.provider)
    }
}

pub trait PaymentStrategy {
    fn provider(&self) -> &'static str;

    fn process_payment(&self, amount: f64) -> Result<Receipt> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(PatternError::InvalidAmount { amount });
        }
        Ok(Receipt {
            provider: self.provider(),
            amount,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StripePayment;

impl PaymentStrategy for StripePayment {
    fn provider(&self) -> &'static str {
        "stripe"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RazorpayPayment;

impl PaymentStrategy for RazorpayPayment {
    fn provider(&self) -> &'static str {
        "razorpay"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn provider(&self) -> &'static str {
        "paypal"
    }
}

/// Currency code -> payment gateway.
pub fn payment_table() -> SelectorTable<dyn PaymentStrategy> {
    SelectorTable::<dyn PaymentStrategy>::new("currency")
        .with("usd", || Box::new(StripePayment))
        .with("inr", || Box::new(RazorpayPayment))
        .with("eur", || Box::new(PayPalPayment))
}

pub struct PaymentProcessor {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentProcessor {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    pub fn for_currency(currency: &str) -> Result<Self> {
        Ok(Self::new(payment_table().select(currency)?))
    }

    pub fn process_payment(&self, amount: f64) -> Result<Receipt> {
        self.strategy.process_payment(amount)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub payer: String,
    pub currency: String,
    pub amount: f64,
}

impl Payment {
    pub fn new(payer: impl Into<String>, currency: impl Into<String>, amount: f64) -> Self {
        Self {
            payer: payer.into(),
            currency: currency.into(),
            amount,
        }
    }

    pub fn settle(&self) -> Result<Receipt> {
        PaymentProcessor::for_currency(&self.currency)?.process_payment(self.amount)
    }
}

// =============================================================================
// Fly behaviour (composition over inheritance)
// =============================================================================

pub trait FlyBehavior {
    fn fly(&self, name: &str) -> String;
}

pub struct CanFly;

impl FlyBehavior for CanFly {
    fn fly(&self, name: &str) -> String {
        format!("{name} is flying")
    }
}

pub struct CannotFly;

impl FlyBehavior for CannotFly {
    fn fly(&self, name: &str) -> String {
        format!("{name} cannot fly.")
    }
}

/// A bird that delegates flying to whatever behaviour it was given.
pub struct Bird {
    name: String,
    weight: u32,
    fly_behavior: Box<dyn FlyBehavior>,
}

impl Bird {
    pub fn new(name: impl Into<String>, weight: u32, fly_behavior: Box<dyn FlyBehavior>) -> Self {
        Self {
            name: name.into(),
            weight,
            fly_behavior,
        }
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn move_around(&self) -> String {
        format!("{} is moving", self.name)
    }

    pub fn perform_fly(&self) -> String {
        self.fly_behavior.fly(&self.name)
    }

    /// Swaps the behaviour at runtime, e.g. after an injury.
    pub fn set_fly_behavior(&mut self, fly_behavior: Box<dyn FlyBehavior>) {
        self.fly_behavior = fly_behavior;
    }
}
