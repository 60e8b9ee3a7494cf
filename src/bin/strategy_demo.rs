use lld_patterns::strategy::{
    tax_strategy, Bird, CanFly, CannotFly, Payment, TaxCalculator, TaxPayer,
};
use lld_patterns::transcript;

fn taxes() {
    transcript::section("Tax strategies");

    let payers = [
        TaxPayer::new("xyz", "india", 15000.0),
        TaxPayer::new("hans", "germany", 15000.0),
        TaxPayer::new("sam", "usa", 15000.0),
        TaxPayer::new("zork", "mars", 15000.0),
    ];
    for payer in &payers {
        let result = payer
            .tax_due()
            .map(|tax| format!("{} ({}) owes {tax:.2}", payer.name, payer.country));
        transcript::outcome(&result);
    }

    for state in ["ny", "ca", "tx"] {
        match tax_strategy("usa", Some(state)) {
            Ok(strategy) => {
                let calculator = TaxCalculator::new(strategy);
                transcript::ok(format!(
                    "{} on 1000.00 = {:.2}",
                    calculator.strategy_name(),
                    calculator.calculate_tax(1000.0)
                ));
            }
            Err(err) => transcript::err(err),
        }
    }
}

fn payments() {
    transcript::section("Payment strategies");

    for payment in [
        Payment::new("TEST", "inr", 100.0),
        Payment::new("TEST", "usd", 42.5),
        Payment::new("TEST", "eur", 9.99),
        Payment::new("TEST", "btc", 1.0),
    ] {
        transcript::outcome(&payment.settle());
    }
}

fn birds() {
    transcript::section("Composition: fly behaviour");

    let penguin = Bird::new("Penguin", 10, Box::new(CannotFly));
    let eagle = Bird::new("Eagle", 10, Box::new(CanFly));
    transcript::line(penguin.perform_fly());
    transcript::line(eagle.perform_fly());
}

fn main() -> lld_patterns::Result<()> {
    lld_patterns::init_demo()?;
    transcript::banner("Strategy Pattern");

    taxes();
    payments();
    birds();

    Ok(())
}
