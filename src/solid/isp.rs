//! Interface segregation: small capability traits, each implemented only by
//! the workers that genuinely have it.
//!
//! A robot has no `eat`: calling it is a compile error, not a runtime one.

use itertools::Itertools;

pub trait Workable {
    fn work(&self) -> String;
}

pub trait Eatable {
    fn eat(&self) -> String;
}

pub trait Sleepable {
    fn sleep(&self) -> String;
}

pub trait Taxable {
    fn pay_taxes(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Capability {
    Work,
    Eat,
    Sleep,
    PayTaxes,
}

/// Declares up front which capability traits a type implements.
pub trait Capabilities {
    fn capabilities(&self) -> &'static [Capability];

    fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    fn describe_capabilities(&self) -> String {
        self.capabilities()
            .iter()
            .map(|c| format!("{c:?}"))
            .join(", ")
    }
}

pub struct Human;

impl Workable for Human {
    fn work(&self) -> String {
        "Human working".to_string()
    }
}

impl Eatable for Human {
    fn eat(&self) -> String {
        "Human eating".to_string()
    }
}

impl Sleepable for Human {
    fn sleep(&self) -> String {
        "Human sleeping".to_string()
    }
}

impl Taxable for Human {
    fn pay_taxes(&self) -> String {
        "Human paying taxes".to_string()
    }
}

impl Capabilities for Human {
    fn capabilities(&self) -> &'static [Capability] {
        &[
            Capability::Work,
            Capability::Eat,
            Capability::Sleep,
            Capability::PayTaxes,
        ]
    }
}

pub struct Robot;

impl Workable for Robot {
    fn work(&self) -> String {
        "Robot working efficiently".to_string()
    }
}

impl Capabilities for Robot {
    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Work]
    }
}

/// Only needs the one capability it uses.
pub fn run_shift(workers: &[&dyn Workable]) -> Vec<String> {
    workers.iter().map(|worker| worker.work()).collect()
}

pub fn lunch_break(eaters: &[&dyn Eatable]) -> Vec<String> {
    eaters.iter().map(|eater| eater.eat()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_uses_only_workable() {
        let lines = run_shift(&[&Human, &Robot]);
        assert_eq!(lines, vec!["Human working", "Robot working efficiently"]);
    }

    #[test]
    fn test_human_has_every_capability() {
        assert_eq!(lunch_break(&[&Human]), vec!["Human eating"]);
        assert_eq!(Human.sleep(), "Human sleeping");
        assert_eq!(Human.pay_taxes(), "Human paying taxes");
        assert_eq!(Human.describe_capabilities(), "Work, Eat, Sleep, PayTaxes");
    }

    #[test]
    fn test_robot_declares_work_only() {
        assert!(Robot.can(Capability::Work));
        assert!(!Robot.can(Capability::Eat));
        assert_eq!(Robot.describe_capabilities(), "Work");
    }
}
