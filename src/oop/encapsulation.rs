//! Encapsulation: state that can only change through validated methods.

use crate::error::{PatternError, Result};

#[derive(Debug, PartialEq)]
pub struct BankAccount {
    account_number: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(initial_balance: f64, account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            balance: initial_balance,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        check_positive(amount)?;
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        check_positive(amount)?;
        if amount > self.balance {
            return Err(PatternError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Moves money to `target`. On failure neither balance changes.
    pub fn transfer(&mut self, target: &mut BankAccount, amount: f64) -> Result<()> {
        self.withdraw(amount)?;
        target.deposit(amount)?;
        tracing::debug!(
            from = %self.account_number,
            to = %target.account_number,
            amount,
            "transfer complete"
        );
        Ok(())
    }
}

fn check_positive(amount: f64) -> Result<()> {
    if amount > 0.0 && amount.is_finite() {
        Ok(())
    } else {
        Err(PatternError::InvalidAmount { amount })
    }
}

/// A counter whose value can only move by one step or be reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn decrement(&mut self) {
        self.count -= 1;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
