//! Polymorphism: one `Shape` interface, several implementations, processed
//! through a single loop.

use std::f64::consts::PI;

pub trait Shape {
    fn name(&self) -> &'static str;
    fn color(&self) -> &str;

    fn area(&self) -> f64 {
        0.0
    }

    fn perimeter(&self) -> f64 {
        0.0
    }

    fn draw(&self) -> Vec<String> {
        vec![format!("Drawing a {} shape", self.color())]
    }

    /// Only rectangles have one.
    fn diagonal(&self) -> Option<f64> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlainShape {
    color: String,
}

impl PlainShape {
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }
}

impl Shape for PlainShape {
    fn name(&self) -> &'static str {
        "Shape"
    }

    fn color(&self) -> &str {
        &self.color
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    color: String,
    radius: f64,
}

impl Circle {
    pub fn new(color: &str, radius: f64) -> Self {
        Self {
            color: color.to_string(),
            radius,
        }
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn draw(&self) -> Vec<String> {
        vec![
            format!("Drawing a {} shape", self.color),
            format!("Drawing a circle with radius {}", self.radius),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    color: String,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(color: &str, width: f64, height: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn draw(&self) -> Vec<String> {
        vec![
            format!("Drawing a {} shape", self.color),
            format!(
                "Drawing a rectangle with width {} and height {}",
                self.width, self.height
            ),
        ]
    }

    fn diagonal(&self) -> Option<f64> {
        Some(self.width.hypot(self.height))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeReport {
    pub name: &'static str,
    pub area: f64,
    pub perimeter: f64,
    pub drawing: Vec<String>,
    pub diagonal: Option<f64>,
}

pub fn process_shapes(shapes: &[Box<dyn Shape>]) -> Vec<ShapeReport> {
    shapes
        .iter()
        .map(|shape| ShapeReport {
            name: shape.name(),
            area: shape.area(),
            perimeter: shape.perimeter(),
            drawing: shape.draw(),
            diagonal: shape.diagonal(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.distance(&Point::new(0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_mixed_shapes() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new("red", 5.0)),
            Box::new(Rectangle::new("blue", 4.0, 6.0)),
            Box::new(PlainShape::new("green")),
        ];

        let reports = process_shapes(&shapes);

        assert_eq!(reports[0].name, "Circle");
        assert!((reports[0].area - 78.539_816_339_744_83).abs() < 1e-9);
        assert_eq!(reports[1].area, 24.0);
        assert_eq!(reports[1].perimeter, 20.0);
        assert!((reports[1].diagonal.unwrap() - 7.211_102_550_927_978).abs() < 1e-9);
        assert_eq!(reports[2].area, 0.0);
        assert_eq!(reports[2].drawing, vec!["Drawing a green shape"]);
        assert!(reports[0].diagonal.is_none());
    }

    #[test]
    fn test_circle_draw_extends_base() {
        let circle = Circle::new("red", 5.0);
        assert_eq!(
            circle.draw(),
            vec!["Drawing a red shape", "Drawing a circle with radius 5"]
        );
    }

    #[test]
    fn test_point_distances() {
        let p1 = Point::new(3.0, 4.0);
        let p2 = Point::new(6.0, 8.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-12);
        assert!((p1.distance_from_origin() - 5.0).abs() < 1e-12);
    }
}
