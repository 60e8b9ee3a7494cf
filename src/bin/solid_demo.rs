use lld_patterns::solid::dip::{Order, OrderProcessor, SmsSender, SmtpSender, SqlStore};
use lld_patterns::solid::isp::{lunch_break, run_shift, Capabilities, Human, Robot};
use lld_patterns::solid::lsp::{make_move, take_off, Penguin, Sparrow, Swimmer};
use lld_patterns::solid::ocp::{AreaCalculator, AreaShape, Circle, Rectangle, Triangle};
use lld_patterns::solid::srp::{register, User, UserRepository};
use lld_patterns::transcript;

fn single_responsibility() {
    transcript::section("S: single responsibility");

    let mut repository = UserRepository::new();
    for user in [
        User::new("Alice", "alice@example.com"),
        User::new("Mallory", "not-an-email"),
    ] {
        match register(&mut repository, &user) {
            Ok(steps) => steps.iter().for_each(|step| transcript::ok(step)),
            Err(err) => transcript::err(err),
        }
    }
    transcript::kv("stored users", repository.len());
}

fn open_closed() {
    transcript::section("O: open/closed");

    let rectangle = Rectangle { width: 10.0, height: 5.0 };
    let circle = Circle { radius: 7.0 };
    let triangle = Triangle { base: 6.0, height: 4.0 };
    let shapes: [&dyn AreaShape; 3] = [&rectangle, &circle, &triangle];

    for (name, area) in AreaCalculator::breakdown(&shapes) {
        transcript::kv(name, format!("{area:.2}"));
    }
    transcript::kv("total", format!("{:.2}", AreaCalculator::total(&shapes)));
}

fn liskov() {
    transcript::section("L: Liskov substitution");

    transcript::line(make_move(&Sparrow));
    transcript::line(make_move(&Penguin));
    transcript::line(take_off(&Sparrow));
    transcript::line(Penguin.swim());
}

fn interface_segregation() {
    transcript::section("I: interface segregation");

    for line in run_shift(&[&Human, &Robot]) {
        transcript::line(line);
    }
    for line in lunch_break(&[&Human]) {
        transcript::line(line);
    }
    transcript::kv("human", Human.describe_capabilities());
    transcript::kv("robot", Robot.describe_capabilities());
}

fn dependency_inversion() {
    transcript::section("D: dependency inversion");

    let order = Order::new("ORD-42", &["keyboard", "mouse"]);
    let mysql = SqlStore::mysql();
    let postgres = SqlStore::postgres();

    for line in OrderProcessor::new(&mysql, &SmtpSender).process_order(&order) {
        transcript::line(line);
    }
    for line in OrderProcessor::new(&postgres, &SmsSender).process_order(&order) {
        transcript::line(line);
    }
}

fn main() -> lld_patterns::Result<()> {
    lld_patterns::init_demo()?;
    transcript::banner("SOLID Principles");

    single_responsibility();
    open_closed();
    liskov();
    interface_segregation();
    dependency_inversion();

    Ok(())
}
