use lld_patterns::adapter::{
    checkout, ConsoleLogAdapter, DocumentStoreLogAdapter, EmailAdapter, LegacyEmailService,
    LegacyPushService, LegacyRazorpay, LegacySmsService, LogManager, NotificationManager,
    PushAdapter, RazorpayAdapter, SmsAdapter, StripeGateway,
};
use lld_patterns::transcript;

fn notifications() {
    transcript::section("Unified notifications");

    let manager = NotificationManager;
    let email = EmailAdapter::new(LegacyEmailService::default());
    let sms = SmsAdapter::new(LegacySmsService::default());
    let push = PushAdapter::new(LegacyPushService::default());

    for delivery in [
        manager.send_notification(&email, "Welcome via Email!"),
        manager.send_notification(&sms, "OTP is 1234"),
        manager.send_notification(&push, "You've got a new follower!"),
    ] {
        transcript::kv(delivery.channel, delivery.rendered);
    }

    transcript::outcome(&manager.send_via("fax", "hello").map(|d| d.rendered));
}

fn payment_gateways() {
    transcript::section("Payment gateways");

    let stripe = StripeGateway;
    let razorpay = RazorpayAdapter::new(LegacyRazorpay::default());
    for line in checkout(&[&stripe, &razorpay], 100.0) {
        transcript::line(line);
    }
}

fn log_sinks() {
    transcript::section("Log sinks");

    let manager = LogManager;
    transcript::line(manager.log(&ConsoleLogAdapter::default(), "console"));
    transcript::line(manager.log(&DocumentStoreLogAdapter::default(), "audit trail"));
}

fn main() -> lld_patterns::Result<()> {
    lld_patterns::init_demo()?;
    transcript::banner("Adapter Pattern");

    notifications();
    payment_gateways();
    log_sinks();

    Ok(())
}
