//! Open/closed: adding a shape means adding a type, not editing the
//! calculator.

use std::f64::consts::PI;

pub trait AreaShape {
    fn name(&self) -> &'static str;
    fn calculate_area(&self) -> f64;
}

pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl AreaShape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn calculate_area(&self) -> f64 {
        self.width * self.height
    }
}

pub struct Circle {
    pub radius: f64,
}

impl AreaShape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn calculate_area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl AreaShape for Triangle {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn calculate_area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

pub struct AreaCalculator;

impl AreaCalculator {
    pub fn breakdown(shapes: &[&dyn AreaShape]) -> Vec<(&'static str, f64)> {
        shapes
            .iter()
            .map(|shape| (shape.name(), shape.calculate_area()))
            .collect()
    }

    pub fn total(shapes: &[&dyn AreaShape]) -> f64 {
        shapes.iter().map(|shape| shape.calculate_area()).sum()
    }
}
