use lld_patterns::oop::abstraction::{Bicycle, Car, VehicleManagementSystem};
use lld_patterns::oop::encapsulation::{BankAccount, Counter};
use lld_patterns::oop::inheritance::{describe_animal, Animal, Dog, Speak};
use lld_patterns::oop::polymorphism::{process_shapes, Circle, PlainShape, Point, Rectangle, Shape};
use lld_patterns::transcript;

// ============================================================================
// Encapsulation: state only changes through validated methods
// ============================================================================

fn encapsulation() {
    transcript::section("Encapsulation");

    let mut account = BankAccount::new(1000.0, "ACC-001");
    let mut savings = BankAccount::new(0.0, "ACC-002");

    transcript::outcome(&account.deposit(500.0).map(|_| "deposited 500.00"));
    transcript::outcome(&account.withdraw(-20.0).map(|_| "withdrew -20.00"));
    transcript::outcome(&account.withdraw(5000.0).map(|_| "withdrew 5000.00"));
    transcript::outcome(&account.transfer(&mut savings, 300.0).map(|_| "transferred 300.00"));
    transcript::kv(account.account_number(), format!("{:.2}", account.balance()));
    transcript::kv(savings.account_number(), format!("{:.2}", savings.balance()));

    let mut counter = Counter::new();
    counter.increment();
    counter.increment();
    counter.decrement();
    transcript::kv("counter", counter.count());
}

// ============================================================================
// Inheritance: shared base data with overridden behaviour
// ============================================================================

fn inheritance() {
    transcript::section("Inheritance");

    let animal = Animal::new("Generic", 3);
    let dog = Dog::new("Rex", 5, "Labrador");
    transcript::line(animal.speak());
    transcript::line(dog.speak());
    transcript::line(dog.dog_info());
    transcript::line(describe_animal(&animal));
    transcript::line(describe_animal(&dog));
}

// ============================================================================
// Polymorphism: one call, many shapes
// ============================================================================

fn polymorphism() {
    transcript::section("Polymorphism");

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(PlainShape::new("grey")),
        Box::new(Circle::new("red", 5.0)),
        Box::new(Rectangle::new("blue", 4.0, 6.0)),
    ];
    for report in process_shapes(&shapes) {
        for line in &report.drawing {
            transcript::line(line);
        }
        transcript::kv(
            report.name,
            format!("area {:.2}, perimeter {:.2}", report.area, report.perimeter),
        );
        if let Some(diagonal) = report.diagonal {
            transcript::kv("diagonal", format!("{diagonal:.2}"));
        }
    }

    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    transcript::kv("distance", format!("{:.2}", a.distance(&b)));
}

// ============================================================================
// Abstraction: managing vehicles through the trait alone
// ============================================================================

fn abstraction() {
    transcript::section("Abstraction");

    let mut car = Car::new("Toyota", "Camry", 2022, "Sedan");
    transcript::outcome(&car.accelerate(60));
    transcript::outcome(&car.brake(100));

    let mut bike = Bicycle::new("Trek", "FX 3", 2021, "Hybrid");
    transcript::outcome(&bike.pedal(7));
    transcript::outcome(&bike.pedal(11));

    let mut fleet = VehicleManagementSystem::new();
    fleet.add_vehicle(Box::new(car));
    fleet.add_vehicle(Box::new(bike));
    for line in fleet.start_all() {
        transcript::line(line);
    }
    for line in fleet.vehicle_info() {
        transcript::line(line);
    }
    for line in fleet.stop_all() {
        transcript::line(line);
    }
}

fn main() -> lld_patterns::Result<()> {
    lld_patterns::init_demo()?;
    transcript::banner("Four Pillars of OOP");

    encapsulation();
    inheritance();
    polymorphism();
    abstraction();

    Ok(())
}
