use lld_patterns::factory::{ShapeFactory, ShapeOptions};
use lld_patterns::transcript;

fn main() -> lld_patterns::Result<()> {
    lld_patterns::init_demo()?;
    transcript::banner("Factory Pattern");

    let shape = ShapeFactory::create("circle", &ShapeOptions::radius(7.0))?;
    transcript::line(shape.draw());
    transcript::kv("area", format!("{:.4}", shape.area()));

    transcript::section("Every registered kind");
    let options = ShapeOptions {
        radius: Some(2.0),
        side: Some(3.0),
        base: Some(4.0),
        height: Some(5.0),
    };
    for kind in ShapeFactory::KINDS {
        let shape = ShapeFactory::create(kind, &options)?;
        transcript::ok(format!("{} area {:.2}", shape.draw(), shape.area()));
    }

    transcript::section("Rejected requests");
    for kind in ["hexagon", "circle"] {
        let result = ShapeFactory::create(kind, &ShapeOptions::default()).map(|s| s.draw());
        transcript::outcome(&result);
    }

    Ok(())
}
