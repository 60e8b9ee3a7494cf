//! The five SOLID principles, each as the "good" design from its lesson.

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;
