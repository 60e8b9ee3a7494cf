//! Factory pattern: callers ask for a shape by tag and get back a trait
//! object, without naming the concrete type.

use crate::error::{PatternError, Result};
use crate::selector::normalize;
use serde::Deserialize;
use std::f64::consts::PI;

pub trait Shape {
    fn kind(&self) -> &'static str;
    fn draw(&self) -> String;
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn draw(&self) -> String {
        "Drawing a Circle.".to_string()
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Shape for Square {
    fn kind(&self) -> &'static str {
        "square"
    }

    fn draw(&self) -> String {
        "Drawing a Square.".to_string()
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Shape for Triangle {
    fn kind(&self) -> &'static str {
        "triangle"
    }

    fn draw(&self) -> String {
        "Drawing a Triangle.".to_string()
    }

    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

/// Construction options. Only the fields a shape needs are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapeOptions {
    pub radius: Option<f64>,
    pub side: Option<f64>,
    pub base: Option<f64>,
    pub height: Option<f64>,
}

impl ShapeOptions {
    pub fn radius(radius: f64) -> Self {
        Self {
            radius: Some(radius),
            ..Self::default()
        }
    }
}

/// Stateless shape factory.
pub struct ShapeFactory;

impl ShapeFactory {
    pub const KINDS: [&'static str; 3] = ["circle", "square", "triangle"];

    /// Builds the shape named by `kind`.
    ///
    /// A circle needs a radius; squares and triangles default missing
    /// dimensions to 1.
    pub fn create(kind: &str, options: &ShapeOptions) -> Result<Box<dyn Shape>> {
        let shape: Box<dyn Shape> = match normalize(kind).as_str() {
            "circle" => {
                let radius = options.radius.ok_or(PatternError::MissingOption {
                    shape: "circle",
                    option: "radius",
                })?;
                Box::new(Circle { radius })
            }
            "square" => Box::new(Square {
                side: options.side.unwrap_or(1.0),
            }),
            "triangle" => Box::new(Triangle {
                base: options.base.unwrap_or(1.0),
                height: options.height.unwrap_or(1.0),
            }),
            _ => return Err(PatternError::unsupported("shape", kind)),
        };
        tracing::debug!(kind = shape.kind(), "shape created");
        Ok(shape)
    }
}
