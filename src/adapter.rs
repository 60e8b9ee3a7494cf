//! Adapter pattern: services with incompatible method names are wrapped so
//! callers see one interface.
//!
//! The "legacy" services below keep a record of what they were asked to do
//! instead of talking to a real provider.

use crate::error::Result;
use crate::selector::SelectorTable;
use std::cell::RefCell;

/// What a delivery produced, as the underlying service rendered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: &'static str,
    pub rendered: String,
}

/// Append-only record of rendered lines.
#[derive(Debug, Default)]
pub struct Outbox {
    sent: RefCell<Vec<String>>,
}

impl Outbox {
    fn record(&self, line: String) -> String {
        self.sent.borrow_mut().push(line.clone());
        line
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

// =============================================================================
// Notifications
// =============================================================================

pub trait Notifier {
    fn send(&self, message: &str) -> Delivery;
}

#[derive(Debug, Default)]
pub struct LegacyEmailService {
    pub outbox: Outbox,
}

impl LegacyEmailService {
    pub fn send_email(&self, msg: &str) -> String {
        self.outbox.record(format!("Sending email: {msg}"))
    }
}

#[derive(Debug, Default)]
pub struct LegacySmsService {
    pub outbox: Outbox,
}

impl LegacySmsService {
    pub fn send_sms(&self, msg: &str) -> String {
        self.outbox.record(format!("Sending SMS: {msg}"))
    }
}

#[derive(Debug, Default)]
pub struct LegacyPushService {
    pub outbox: Outbox,
}

impl LegacyPushService {
    pub fn push_notify(&self, msg: &str) -> String {
        self.outbox.record(format!("Sending Push Notification: {msg}"))
    }
}

#[derive(Debug, Default)]
pub struct EmailAdapter {
    service: LegacyEmailService,
}

impl EmailAdapter {
    pub fn new(service: LegacyEmailService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &LegacyEmailService {
        &self.service
    }
}

impl Notifier for EmailAdapter {
    fn send(&self, message: &str) -> Delivery {
        Delivery {
            channel: "email",
            rendered: self.service.send_email(message),
        }
    }
}

#[derive(Debug, Default)]
pub struct SmsAdapter {
    service: LegacySmsService,
}

impl SmsAdapter {
    pub fn new(service: LegacySmsService) -> Self {
        Self { service }
    }
}

impl Notifier for SmsAdapter {
    fn send(&self, message: &str) -> Delivery {
        Delivery {
            channel: "sms",
            rendered: self.service.send_sms(message),
        }
    }
}

#[derive(Debug, Default)]
pub struct PushAdapter {
    service: LegacyPushService,
}

impl PushAdapter {
    pub fn new(service: LegacyPushService) -> Self {
        Self { service }
    }
}

impl Notifier for PushAdapter {
    fn send(&self, message: &str) -> Delivery {
        Delivery {
            channel: "push",
            rendered: self.service.push_notify(message),
        }
    }
}

/// Channel tag -> adapter around a fresh legacy service.
pub fn notifier_table() -> SelectorTable<dyn Notifier> {
    SelectorTable::<dyn Notifier>::new("channel")
        .with("email", || Box::new(EmailAdapter::default()))
        .with("sms", || Box::new(SmsAdapter::default()))
        .with("push", || Box::new(PushAdapter::default()))
}

#[derive(Debug, Default)]
pub struct NotificationManager;

impl NotificationManager {
    pub fn send_notification(&self, adapter: &dyn Notifier, message: &str) -> Delivery {
        let delivery = adapter.send(message);
        tracing::debug!(channel = delivery.channel, "notification sent");
        delivery
    }

    pub fn send_via(&self, channel: &str, message: &str) -> Result<Delivery> {
        let adapter = notifier_table().select(channel)?;
        Ok(self.send_notification(adapter.as_ref(), message))
    }
}

// =============================================================================
// Payment gateway
// =============================================================================

pub trait PaymentGateway {
    fn pay_now(&self, amount: f64) -> String;
}

#[derive(Debug, Default)]
pub struct StripeGateway;

impl PaymentGateway for StripeGateway {
    fn pay_now(&self, amount: f64) -> String {
        format!("Payment of ${amount} processed via Stripe.")
    }
}

/// Pre-dates the gateway interface and speaks `make_payment(price)`.
#[derive(Debug, Default)]
pub struct LegacyRazorpay {
    pub outbox: Outbox,
}

impl LegacyRazorpay {
    pub fn make_payment(&self, price: f64) -> String {
        self.outbox
            .record(format!("Payment of ${price} processed via Legacy Razorpay"))
    }
}

#[derive(Debug, Default)]
pub struct RazorpayAdapter {
    legacy: LegacyRazorpay,
}

impl RazorpayAdapter {
    pub fn new(legacy: LegacyRazorpay) -> Self {
        Self { legacy }
    }

    pub fn legacy(&self) -> &LegacyRazorpay {
        &self.legacy
    }
}

impl PaymentGateway for RazorpayAdapter {
    fn pay_now(&self, amount: f64) -> String {
        self.legacy.make_payment(amount)
    }
}

/// Charges through every gateway in turn; they are interchangeable.
pub fn checkout(gateways: &[&dyn PaymentGateway], amount: f64) -> Vec<String> {
    gateways.iter().map(|gateway| gateway.pay_now(amount)).collect()
}

// =============================================================================
// Log sinks
// =============================================================================

pub trait LogSink {
    fn log(&self, message: &str) -> String;
}

#[derive(Debug, Default)]
pub struct ConsoleLogService {
    pub outbox: Outbox,
}

impl ConsoleLogService {
    pub fn console_log(&self, message: &str) -> String {
        self.outbox.record(message.to_string())
    }
}

#[derive(Debug, Default)]
pub struct DocumentStoreLogService {
    pub outbox: Outbox,
}

impl DocumentStoreLogService {
    pub fn save(&self, message: &str) -> String {
        self.outbox.record(format!("saved to document store: {message}"))
    }
}

#[derive(Debug, Default)]
pub struct ConsoleLogAdapter {
    service: ConsoleLogService,
}

impl ConsoleLogAdapter {
    pub fn new(service: ConsoleLogService) -> Self {
        Self { service }
    }
}

impl LogSink for ConsoleLogAdapter {
    fn log(&self, message: &str) -> String {
        self.service.console_log(message)
    }
}

#[derive(Debug, Default)]
pub struct DocumentStoreLogAdapter {
    service: DocumentStoreLogService,
}

impl DocumentStoreLogAdapter {
    pub fn new(service: DocumentStoreLogService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &DocumentStoreLogService {
        &self.service
    }
}

impl LogSink for DocumentStoreLogAdapter {
    fn log(&self, message: &str) -> String {
        self.service.save(message)
    }
}

#[derive(Debug, Default)]
pub struct LogManager;

impl LogManager {
    pub fn log(&self, sink: &dyn LogSink, message: &str) -> String {
        sink.log(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_sends_through_any_adapter() {
        let manager = NotificationManager;
        let email = EmailAdapter::new(LegacyEmailService::default());
        let sms = SmsAdapter::new(LegacySmsService::default());
        let push = PushAdapter::new(LegacyPushService::default());

        let deliveries = [
            manager.send_notification(&email, "Welcome via Email!"),
            manager.send_notification(&sms, "OTP is 1234"),
            manager.send_notification(&push, "You've got a new follower!"),
        ];

        assert_eq!(deliveries[0].rendered, "Sending email: Welcome via Email!");
        assert_eq!(deliveries[1].channel, "sms");
        assert_eq!(
            deliveries[2].rendered,
            "Sending Push Notification: You've got a new follower!"
        );
        assert_eq!(email.service().outbox.sent().len(), 1);
    }

    #[test]
    fn test_send_via_channel_tag() {
        let manager = NotificationManager;
        let delivery = manager.send_via("SMS", "code 42").unwrap();
        assert_eq!(delivery.rendered, "Sending SMS: code 42");

        let err = manager.send_via("pigeon", "coo").unwrap_err();
        assert!(err.is_unsupported_selector());
    }

    #[test]
    fn test_razorpay_adapter_translates_call() {
        let adapter = RazorpayAdapter::new(LegacyRazorpay::default());
        assert_eq!(
            adapter.pay_now(100.0),
            "Payment of $100 processed via Legacy Razorpay"
        );
        assert_eq!(adapter.legacy().outbox.sent().len(), 1);
    }

    #[test]
    fn test_gateways_are_interchangeable() {
        let stripe = StripeGateway;
        let razorpay = RazorpayAdapter::default();
        let lines = checkout(&[&stripe, &razorpay], 25.5);
        assert_eq!(
            lines,
            vec![
                "Payment of $25.5 processed via Stripe.",
                "Payment of $25.5 processed via Legacy Razorpay",
            ]
        );
    }

    #[test]
    fn test_log_adapters() {
        let manager = LogManager;
        let console = ConsoleLogAdapter::default();
        let store = DocumentStoreLogAdapter::new(DocumentStoreLogService::default());

        assert_eq!(manager.log(&console, "console"), "console");
        assert_eq!(
            manager.log(&store, "audit"),
            "saved to document store: audit"
        );
        assert_eq!(store.service().outbox.sent(), vec!["saved to document store: audit"]);
    }
}
