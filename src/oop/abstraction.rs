//! Abstraction: a management system that starts, stops and lists vehicles
//! without knowing which kind each one is.

use crate::error::{PatternError, Result};

/// Data every vehicle carries. Speed is only changed through `set_speed`.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCore {
    make: String,
    model: String,
    year: u16,
    speed: u32,
}

impl VehicleCore {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: u16) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            speed: 0,
        }
    }

    pub fn info(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    fn set_speed(&mut self, speed: i64) -> Result<()> {
        if speed < 0 {
            return Err(PatternError::NegativeSpeed { speed });
        }
        self.speed = u32::try_from(speed).map_err(|_| PatternError::SpeedTooHigh {
            speed,
            max: u32::MAX,
        })?;
        Ok(())
    }
}

pub trait Vehicle {
    fn core(&self) -> &VehicleCore;
    fn start(&mut self) -> Vec<String>;
    fn stop(&mut self) -> Vec<String>;

    fn info(&self) -> String {
        self.core().info()
    }

    fn current_speed(&self) -> u32 {
        self.core().speed()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    core: VehicleCore,
    body: String,
}

impl Car {
    pub fn new(make: &str, model: &str, year: u16, body: &str) -> Self {
        Self {
            core: VehicleCore::new(make, model, year),
            body: body.to_string(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn accelerate(&mut self, amount: u32) -> Result<String> {
        self.core
            .set_speed(i64::from(self.core.speed) + i64::from(amount))?;
        Ok(format!("Accelerating to {} km/h", self.core.speed))
    }

    /// Fails, leaving the speed unchanged, if braking would go below zero.
    pub fn brake(&mut self, amount: u32) -> Result<String> {
        self.core
            .set_speed(i64::from(self.core.speed) - i64::from(amount))?;
        Ok(format!("Braking to {} km/h", self.core.speed))
    }
}

impl Vehicle for Car {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn start(&mut self) -> Vec<String> {
        self.core.speed = 0;
        vec![
            format!("{} is starting...", self.info()),
            "Engine started".to_string(),
        ]
    }

    fn stop(&mut self) -> Vec<String> {
        self.core.speed = 0;
        vec![
            format!("{} is stopping...", self.info()),
            "Engine stopped".to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bicycle {
    core: VehicleCore,
    style: String,
}

impl Bicycle {
    pub fn new(make: &str, model: &str, year: u16, style: &str) -> Self {
        Self {
            core: VehicleCore::new(make, model, year),
            style: style.to_string(),
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// Each effort point adds 2 km/h. Effort must be 1..=10.
    pub fn pedal(&mut self, effort: u8) -> Result<String> {
        if !(1..=10).contains(&effort) {
            return Err(PatternError::EffortOutOfRange { effort });
        }
        let increase = i64::from(effort) * 2;
        self.core.set_speed(i64::from(self.core.speed) + increase)?;
        Ok(format!(
            "Pedaling with effort {effort} - Speed: {} km/h",
            self.core.speed
        ))
    }
}

impl Vehicle for Bicycle {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn start(&mut self) -> Vec<String> {
        self.core.speed = 0;
        vec![
            format!("{} is starting...", self.info()),
            "Pedaling started".to_string(),
        ]
    }

    fn stop(&mut self) -> Vec<String> {
        self.core.speed = 0;
        vec![
            format!("{} is stopping...", self.info()),
            "Pedaling stopped".to_string(),
        ]
    }
}

/// Works with any `Vehicle`; only trait objects that implement it can be added.
#[derive(Default)]
pub struct VehicleManagementSystem {
    vehicles: Vec<Box<dyn Vehicle>>,
}

impl VehicleManagementSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vehicle(&mut self, vehicle: Box<dyn Vehicle>) {
        tracing::debug!(vehicle = %vehicle.info(), "vehicle added");
        self.vehicles.push(vehicle);
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn start_all(&mut self) -> Vec<String> {
        self.vehicles.iter_mut().flat_map(|v| v.start()).collect()
    }

    pub fn stop_all(&mut self) -> Vec<String> {
        self.vehicles.iter_mut().flat_map(|v| v.stop()).collect()
    }

    pub fn vehicle_info(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.info()).collect()
    }
}
