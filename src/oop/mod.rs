//! The four pillars of object orientation, expressed with traits,
//! composition and private fields.

pub mod abstraction;
pub mod encapsulation;
pub mod inheritance;
pub mod polymorphism;
