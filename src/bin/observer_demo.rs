use lld_patterns::observer::orders::{Channel, Confirmation, OrderPlaced, OrderService};
use lld_patterns::observer::video::{Delivery, VideoChannel, Viewer};
use lld_patterns::observer::weather::{Display, Temperature, WeatherStation};
use lld_patterns::observer::{Inbox, Subscriber};
use lld_patterns::transcript;
use std::rc::Rc;

fn print_inbox(inbox: &Inbox) {
    for message in inbox.messages() {
        transcript::line(message);
    }
}

/* ============================================================
 * Weather station broadcasting to displays
 * ============================================================
 */

fn weather_station() {
    transcript::section("Weather station");

    let station = WeatherStation::new();
    let mobile = Rc::new(Display::mobile());
    let window = Rc::new(Display::window());
    let mobile_handle: Rc<dyn Subscriber<Temperature>> = mobile.clone();
    let window_handle: Rc<dyn Subscriber<Temperature>> = window.clone();

    station.subscribe(&mobile_handle);
    station.subscribe(&window_handle);
    station.set_temperature(15.0);

    station.unsubscribe(&window_handle);
    station.set_temperature(18.5);

    print_inbox(&mobile.inbox);
    print_inbox(&window.inbox);
}

/* ============================================================
 * Order service fanning out confirmations
 * ============================================================
 */

fn order_service() {
    transcript::section("Order service");

    let service = OrderService::new();
    let confirmations: Vec<Rc<Confirmation>> = [Channel::Email, Channel::Sms, Channel::Push]
        .into_iter()
        .map(|channel| Rc::new(Confirmation::new(channel)))
        .collect();
    let handles: Vec<Rc<dyn Subscriber<OrderPlaced>>> = confirmations
        .iter()
        .map(|c| Rc::clone(c) as Rc<dyn Subscriber<OrderPlaced>>)
        .collect();
    for handle in &handles {
        service.attach(handle);
    }

    let order = service.place_order("Alice", "ORD1234");
    transcript::line(format!("Order {} placed by {}", order.order_id, order.user));
    for confirmation in &confirmations {
        print_inbox(&confirmation.inbox);
    }
}

/* ============================================================
 * Video channel with subscribers coming and going
 * ============================================================
 */

fn video_channel() {
    transcript::section("Video channel");

    let channel = VideoChannel::new("Test Channel");
    let viewers = [
        Rc::new(Viewer::new("Alice", Delivery::Email)),
        Rc::new(Viewer::new("Bob", Delivery::Mobile)),
        Rc::new(Viewer::new("Charlie", Delivery::Email)),
    ];
    let handles: Vec<Rc<dyn Subscriber<String>>> = viewers
        .iter()
        .map(|v| Rc::clone(v) as Rc<dyn Subscriber<String>>)
        .collect();
    for handle in &handles {
        channel.subscribe(handle);
    }

    channel.upload("Test Observers");
    channel.unsubscribe(&handles[2]);
    channel.upload("Unsubscribing Works");

    transcript::kv("subscribers", channel.subscriber_count());
    for viewer in &viewers {
        print_inbox(&viewer.inbox);
    }
}

fn main() -> lld_patterns::Result<()> {
    lld_patterns::init_demo()?;
    transcript::banner("Observer Pattern");

    weather_station();
    order_service();
    video_channel();

    Ok(())
}
