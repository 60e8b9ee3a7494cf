use lld_patterns::decorator::coffee::{self, Espresso, MILK, SUGAR, WHIPPED_CREAM};
use lld_patterns::decorator::pizza::{ItalianPizza, CHEESE, CHICKEN};
use lld_patterns::decorator::{format_price, CostedComponent, Decorate};
use lld_patterns::transcript;

/* ============================================================
 * Pizza: toppings stack on a base pizza
 * ============================================================
 */

fn pizza() {
    transcript::section("Pizza toppings");

    let base = ItalianPizza;
    transcript::kv(&base.describe(), format_price(base.cost()));

    let loaded = ItalianPizza.with(CHEESE).with(CHICKEN);
    transcript::kv(&loaded.describe(), format_price(loaded.cost()));

    let reversed = ItalianPizza.with(CHICKEN).with(CHEESE);
    transcript::kv(&reversed.describe(), format_price(reversed.cost()));
}

/* ============================================================
 * Coffee: static chains and chains built from names
 * ============================================================
 */

fn coffee_orders() {
    transcript::section("Coffee orders");

    let order = Espresso.with(SUGAR).with(WHIPPED_CREAM);
    transcript::kv(&order.describe(), format_price(order.cost()));

    let order = Espresso.with(MILK).with(SUGAR);
    transcript::kv(&order.describe(), format_price(order.cost()));

    for names in [vec!["milk", "whipped_cream"], vec!["sugar", "caramel"]] {
        match coffee::from_toppings(&names) {
            Ok(order) => transcript::ok(format!(
                "{} = {}",
                order.describe(),
                format_price(order.cost())
            )),
            Err(err) => transcript::err(err),
        }
    }
}

fn main() -> lld_patterns::Result<()> {
    lld_patterns::init_demo()?;
    transcript::banner("Decorator Pattern");

    pizza();
    coffee_orders();

    tracing::info!("decorator demo finished");
    Ok(())
}
