//! Inheritance, the Rust way: shared data by composition, shared behaviour by
//! trait default methods that a "child" may override.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    age: u32,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> String {
        format!("{} is {} years old", self.name, self.age)
    }
}

pub trait Speak {
    fn speak(&self) -> String {
        "I am an animal".to_string()
    }
}

impl Speak for Animal {}

/// Gives access to the embedded base, like an upcast.
pub trait AsAnimal {
    fn as_animal(&self) -> &Animal;
}

impl AsAnimal for Animal {
    fn as_animal(&self) -> &Animal {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    animal: Animal,
    breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32, breed: impl Into<String>) -> Self {
        Self {
            animal: Animal::new(name, age),
            breed: breed.into(),
        }
    }

    /// Extends the base description with the breed.
    pub fn dog_info(&self) -> String {
        format!("{} and is a {}", self.animal.info(), self.breed)
    }
}

impl Speak for Dog {
    fn speak(&self) -> String {
        "Woof!".to_string()
    }
}

impl AsAnimal for Dog {
    fn as_animal(&self) -> &Animal {
        &self.animal
    }
}

/// Accepts anything that embeds an `Animal`.
pub fn describe_animal(creature: &dyn AsAnimal) -> String {
    creature.as_animal().info()
}
