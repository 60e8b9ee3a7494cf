//! # LLD Patterns
//!
//! Small, self-contained illustrations of classic object-oriented design
//! patterns, the four pillars of object orientation and the SOLID principles,
//! each rewritten around Rust traits instead of class hierarchies.
//!
//! ## Modules
//!
//! 1. **decorator** - wrapper chains that add cost and label fragments
//! 2. **observer** - a subject pushing state changes to subscribers
//! 3. **selector** - lookup tables that pick one implementation by key
//! 4. **strategy** - tax and payment strategies chosen at runtime
//! 5. **factory** - shape construction from a type tag
//! 6. **adapter** - legacy services behind a unified interface
//! 7. **oop** - abstraction, encapsulation, inheritance, polymorphism
//! 8. **solid** - the five SOLID principles
//!
//! ## Running the demos
//!
//! ```bash
//! cargo run --bin decorator_demo
//! cargo run --bin observer_demo
//! cargo run --bin strategy_demo
//! cargo run --bin factory_demo
//! cargo run --bin adapter_demo
//! cargo run --bin oop_pillars_demo
//! cargo run --bin solid_demo
//! ```
//!
//! Set `LLD_DEMO_CONFIG=path/to/demo.toml` to change colour output or the
//! log filter, or `RUST_LOG=debug` to see dispatch events.

pub mod adapter;
pub mod config;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod observer;
pub mod oop;
pub mod selector;
pub mod solid;
pub mod strategy;
pub mod telemetry;
pub mod transcript;

pub use error::{PatternError, Result};

/// Loads demo settings, then sets up colour and logging. Every demo binary
/// calls this first.
pub fn init_demo() -> Result<config::DemoConfig> {
    let config = config::DemoConfig::from_env()?;
    transcript::configure(&config);
    telemetry::init(&config);
    Ok(config)
}
