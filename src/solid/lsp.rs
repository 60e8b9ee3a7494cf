//! Liskov substitution: flying is its own capability, so no bird is forced
//! to implement a `fly` it cannot honour.

pub trait Mover {
    fn move_around(&self) -> String;
}

pub trait Flyer: Mover {
    fn fly(&self) -> String {
        "Flapping wings and flying".to_string()
    }
}

pub trait Swimmer: Mover {
    fn swim(&self) -> String;
}

pub struct Sparrow;

impl Mover for Sparrow {
    fn move_around(&self) -> String {
        "Sparrow flying quickly".to_string()
    }
}

impl Flyer for Sparrow {}

pub struct Penguin;

impl Mover for Penguin {
    fn move_around(&self) -> String {
        "Penguin waddling and swimming".to_string()
    }
}

impl Swimmer for Penguin {
    fn swim(&self) -> String {
        "Swimming gracefully underwater".to_string()
    }
}

/// Works for every `Mover`; no subtype can make it fail.
pub fn make_move(mover: &dyn Mover) -> String {
    mover.move_around()
}

pub fn take_off(flyer: &dyn Flyer) -> String {
    flyer.fly()
}
