//! Observer pattern: a subject that pushes every state change to its
//! subscribers, synchronously and in attachment order.
//!
//! The subject keeps only `Weak` handles, so subscribers live exactly as long
//! as their owners keep them. Each notification pass walks a snapshot of the
//! list taken when the pass starts: a callback may attach or detach (itself
//! included) without disturbing the pass in progress.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Reaction to a subject's state change.
pub trait Subscriber<S> {
    fn name(&self) -> &str;
    fn on_update(&self, state: &S);
}

/// What the subject is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Notifying,
}

pub struct Subject<S> {
    state: RefCell<Option<Rc<S>>>,
    subscribers: RefCell<Vec<Weak<dyn Subscriber<S>>>>,
    depth: Cell<usize>,
}

impl<S> Default for Subject<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Subject<S> {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(None),
            subscribers: RefCell::new(Vec::new()),
            depth: Cell::new(0),
        }
    }

    /// Appends a subscriber. Attaching the same one twice notifies it twice.
    pub fn attach(&self, subscriber: &Rc<dyn Subscriber<S>>) {
        tracing::debug!(subscriber = subscriber.name(), "attach");
        self.subscribers.borrow_mut().push(Rc::downgrade(subscriber));
    }

    /// Removes every occurrence of `subscriber`. Absent subscribers are ignored.
    pub fn detach(&self, subscriber: &Rc<dyn Subscriber<S>>) {
        let target = Rc::downgrade(subscriber);
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|existing| !Weak::ptr_eq(existing, &target));
        tracing::debug!(
            subscriber = subscriber.name(),
            removed = before - subscribers.len(),
            "detach"
        );
    }

    /// Number of attached subscribers that are still alive.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_attached(&self, subscriber: &Rc<dyn Subscriber<S>>) -> bool {
        let target = Rc::downgrade(subscriber);
        self.subscribers
            .borrow()
            .iter()
            .any(|existing| Weak::ptr_eq(existing, &target))
    }

    pub fn phase(&self) -> Phase {
        if self.depth.get() > 0 {
            Phase::Notifying
        } else {
            Phase::Idle
        }
    }

    /// Stores `value` and notifies every subscriber with it.
    pub fn set_state(&self, value: S) {
        *self.state.borrow_mut() = Some(Rc::new(value));
        self.notify();
    }

    /// Re-sends the current state. Does nothing before the first `set_state`.
    pub fn notify(&self) {
        let Some(value) = self.state.borrow().clone() else {
            return;
        };
        let snapshot = self.live_snapshot();

        self.depth.set(self.depth.get() + 1);
        let _phase = PhaseGuard(&self.depth);
        for subscriber in &snapshot {
            tracing::trace!(subscriber = subscriber.name(), "dispatch");
            subscriber.on_update(&value);
        }
        tracing::debug!(delivered = snapshot.len(), "notify pass complete");
    }

    /// Upgrades the live handles and prunes dropped ones.
    fn live_snapshot(&self) -> Vec<Rc<dyn Subscriber<S>>> {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|weak| weak.strong_count() > 0);
        subscribers.iter().filter_map(Weak::upgrade).collect()
    }
}

impl<S: Clone> Subject<S> {
    pub fn state(&self) -> Option<S> {
        self.state.borrow().as_deref().cloned()
    }
}

impl<S> fmt::Debug for Subject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("subscribers", &self.subscriber_count())
            .field("phase", &self.phase())
            .finish()
    }
}

/// Returns the subject to `Idle` even if a callback panics.
struct PhaseGuard<'a>(&'a Cell<usize>);

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

/// Messages a concrete subscriber has rendered, oldest first.
#[derive(Debug, Default)]
pub struct Inbox {
    messages: RefCell<Vec<String>>,
}

impl Inbox {
    pub fn push(&self, message: String) {
        self.messages.borrow_mut().push(message);
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

// =============================================================================
// Weather station
// =============================================================================

pub mod weather {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Temperature(pub f64);

    impl fmt::Display for Temperature {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Debug, Default)]
    pub struct WeatherStation {
        subject: Subject<Temperature>,
    }

    impl WeatherStation {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn subscribe(&self, display: &Rc<dyn Subscriber<Temperature>>) {
            self.subject.attach(display);
        }

        pub fn unsubscribe(&self, display: &Rc<dyn Subscriber<Temperature>>) {
            self.subject.detach(display);
        }

        pub fn set_temperature(&self, celsius: f64) {
            self.subject.set_state(Temperature(celsius));
        }

        pub fn temperature(&self) -> Option<Temperature> {
            self.subject.state()
        }

        pub fn subject(&self) -> &Subject<Temperature> {
            &self.subject
        }
    }

    /// A display surface ("Window", "Mobile") that shows the latest reading.
    #[derive(Debug)]
    pub struct Display {
        surface: String,
        pub inbox: Inbox,
    }

    impl Display {
        pub fn new(surface: impl Into<String>) -> Self {
            Self {
                surface: surface.into(),
                inbox: Inbox::default(),
            }
        }

        pub fn window() -> Self {
            Self::new("Window")
        }

        pub fn mobile() -> Self {
            Self::new("Mobile")
        }
    }

    impl Subscriber<Temperature> for Display {
        fn name(&self) -> &str {
            &self.surface
        }

        fn on_update(&self, state: &Temperature) {
            self.inbox.push(format!(
                "Current weather in {} is {}.",
                self.surface, state
            ));
        }
    }
}

// =============================================================================
// Order service
// =============================================================================

pub mod orders {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct OrderPlaced {
        pub user: String,
        pub order_id: String,
    }

    #[derive(Debug, Default)]
    pub struct OrderService {
        subject: Subject<OrderPlaced>,
    }

    impl OrderService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn attach(&self, channel: &Rc<dyn Subscriber<OrderPlaced>>) {
            self.subject.attach(channel);
        }

        pub fn detach(&self, channel: &Rc<dyn Subscriber<OrderPlaced>>) {
            self.subject.detach(channel);
        }

        pub fn place_order(&self, user: impl Into<String>, order_id: impl Into<String>) -> OrderPlaced {
            let event = OrderPlaced {
                user: user.into(),
                order_id: order_id.into(),
            };
            tracing::info!(user = %event.user, order_id = %event.order_id, "order placed");
            self.subject.set_state(event.clone());
            event
        }

        pub fn subject(&self) -> &Subject<OrderPlaced> {
            &self.subject
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Channel {
        Email,
        Sms,
        Push,
    }

    impl Channel {
        fn label(self) -> &'static str {
            match self {
                Channel::Email => "Email",
                Channel::Sms => "SMS",
                Channel::Push => "Push",
            }
        }
    }

    /// Confirms orders over one delivery channel.
    #[derive(Debug)]
    pub struct Confirmation {
        channel: Channel,
        pub inbox: Inbox,
    }

    impl Confirmation {
        pub fn new(channel: Channel) -> Self {
            Self {
                channel,
                inbox: Inbox::default(),
            }
        }
    }

    impl Subscriber<OrderPlaced> for Confirmation {
        fn name(&self) -> &str {
            self.channel.label()
        }

        fn on_update(&self, state: &OrderPlaced) {
            self.inbox.push(format!(
                "{} sent to {}: Order {} confirmed",
                self.channel.label(),
                state.user,
                state.order_id
            ));
        }
    }
}

// =============================================================================
// Video channel
// =============================================================================

pub mod video {
    use super::*;

    #[derive(Debug)]
    pub struct VideoChannel {
        name: String,
        subject: Subject<String>,
    }

    impl VideoChannel {
        pub fn new(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                subject: Subject::new(),
            }
        }

        pub fn name(&self) -> &str {
            &self.name
        }

        pub fn subscribe(&self, viewer: &Rc<dyn Subscriber<String>>) {
            self.subject.attach(viewer);
        }

        pub fn unsubscribe(&self, viewer: &Rc<dyn Subscriber<String>>) {
            self.subject.detach(viewer);
        }

        pub fn upload(&self, title: impl Into<String>) {
            let title = title.into();
            tracing::info!(channel = %self.name, title = %title, "video uploaded");
            self.subject.set_state(title);
        }

        pub fn latest_upload(&self) -> Option<String> {
            self.subject.state()
        }

        pub fn subscriber_count(&self) -> usize {
            self.subject.subscriber_count()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Delivery {
        Email,
        Mobile,
    }

    #[derive(Debug)]
    pub struct Viewer {
        name: String,
        delivery: Delivery,
        pub inbox: Inbox,
    }

    impl Viewer {
        pub fn new(name: impl Into<String>, delivery: Delivery) -> Self {
            Self {
                name: name.into(),
                delivery,
                inbox: Inbox::default(),
            }
        }
    }

    impl Subscriber<String> for Viewer {
        fn name(&self) -> &str {
            &self.name
        }

        fn on_update(&self, state: &String) {
            let via = match self.delivery {
                Delivery::Email => "Email",
                Delivery::Mobile => "Mobile",
            };
            self.inbox.push(format!(
                "{} ({via}): New video uploaded - \"{state}\"",
                self.name
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::weather::{Display, Temperature, WeatherStation};
    use super::*;

    /// Appends `name:state` to a shared log so ordering across subscribers is visible.
    struct Recorder {
        name: String,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn new(name: &str, log: &Rc<RefCell<Vec<String>>>) -> Rc<dyn Subscriber<i32>> {
            Rc::new(Self {
                name: name.to_string(),
                log: Rc::clone(log),
            })
        }
    }

    impl Subscriber<i32> for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn on_update(&self, state: &i32) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, state));
        }
    }

    fn shared_log() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_each_subscriber_notified_once_in_order() {
        let log = shared_log();
        let subject = Subject::new();
        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        let c = Recorder::new("c", &log);
        subject.attach(&a);
        subject.attach(&b);
        subject.attach(&c);

        subject.set_state(7);

        assert_eq!(*log.borrow(), vec!["a:7", "b:7", "c:7"]);
        assert_eq!(subject.state(), Some(7));
    }

    #[test]
    fn test_detached_subscriber_not_notified() {
        let log = shared_log();
        let subject = Subject::new();
        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        let c = Recorder::new("c", &log);
        subject.attach(&a);
        subject.attach(&b);
        subject.attach(&c);

        subject.detach(&b);
        subject.set_state(1);

        assert_eq!(*log.borrow(), vec!["a:1", "c:1"]);
        assert!(!subject.is_attached(&b));
        assert_eq!(subject.subscriber_count(), 2);
    }

    #[test]
    fn test_no_subscribers_is_noop() {
        let subject: Subject<i32> = Subject::new();
        subject.set_state(3);
        assert_eq!(subject.state(), Some(3));
        assert_eq!(subject.phase(), Phase::Idle);
    }

    #[test]
    fn test_notify_before_state_is_noop() {
        let log = shared_log();
        let subject = Subject::new();
        let a = Recorder::new("a", &log);
        subject.attach(&a);

        subject.notify();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_notify_rebroadcasts_current_state() {
        let log = shared_log();
        let subject = Subject::new();
        let a = Recorder::new("a", &log);
        subject.attach(&a);

        subject.set_state(4);
        subject.notify();

        assert_eq!(*log.borrow(), vec!["a:4", "a:4"]);
    }

    #[test]
    fn test_duplicate_attach_notifies_twice_and_detach_removes_all() {
        let log = shared_log();
        let subject = Subject::new();
        let a = Recorder::new("a", &log);
        subject.attach(&a);
        subject.attach(&a);

        subject.set_state(1);
        assert_eq!(log.borrow().len(), 2);

        subject.detach(&a);
        subject.set_state(2);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_detach_absent_is_noop() {
        let log = shared_log();
        let subject = Subject::new();
        let a = Recorder::new("a", &log);
        let stranger = Recorder::new("stranger", &log);
        subject.attach(&a);

        subject.detach(&stranger);

        assert_eq!(subject.subscriber_count(), 1);
    }

    #[test]
    fn test_dropped_subscriber_is_skipped() {
        let log = shared_log();
        let subject = Subject::new();
        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        subject.attach(&a);
        subject.attach(&b);

        drop(a);
        subject.set_state(9);

        assert_eq!(*log.borrow(), vec!["b:9"]);
        assert_eq!(subject.subscriber_count(), 1);
    }

    /// Detaches itself and attaches a late joiner from inside its callback.
    struct SelfRemover {
        subject: Rc<Subject<i32>>,
        me: RefCell<Option<Weak<dyn Subscriber<i32>>>>,
        late_joiner: Rc<dyn Subscriber<i32>>,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Subscriber<i32> for SelfRemover {
        fn name(&self) -> &str {
            "remover"
        }

        fn on_update(&self, state: &i32) {
            self.log.borrow_mut().push(format!("remover:{state}"));
            assert_eq!(self.subject.phase(), Phase::Notifying);
            let me = self.me.borrow_mut().take().and_then(|weak| weak.upgrade());
            if let Some(me) = me {
                self.subject.detach(&me);
                self.subject.attach(&self.late_joiner);
            }
        }
    }

    #[test]
    fn test_mutation_during_notify_uses_snapshot() {
        let log = shared_log();
        let subject = Rc::new(Subject::new());
        let late = Recorder::new("late", &log);
        let remover = Rc::new(SelfRemover {
            subject: Rc::clone(&subject),
            me: RefCell::new(None),
            late_joiner: Rc::clone(&late),
            log: Rc::clone(&log),
        });
        let remover_handle: Rc<dyn Subscriber<i32>> = remover.clone();
        *remover.me.borrow_mut() = Some(Rc::downgrade(&remover_handle));
        let after = Recorder::new("after", &log);
        subject.attach(&remover_handle);
        subject.attach(&after);

        subject.set_state(1);
        // The pass that removed it still reached "after"; the late joiner waits.
        assert_eq!(*log.borrow(), vec!["remover:1", "after:1"]);
        assert_eq!(subject.phase(), Phase::Idle);

        subject.set_state(2);
        assert_eq!(*log.borrow(), vec!["remover:1", "after:1", "after:2", "late:2"]);
    }

    /// Pushes a follow-up state from inside its callback.
    struct Escalator {
        subject: Rc<Subject<i32>>,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Subscriber<i32> for Escalator {
        fn name(&self) -> &str {
            "escalator"
        }

        fn on_update(&self, state: &i32) {
            self.log.borrow_mut().push(format!("escalator:{state}"));
            if *state < 2 {
                self.subject.set_state(state + 1);
            }
        }
    }

    #[test]
    fn test_nested_set_state_from_callback() {
        let log = shared_log();
        let subject = Rc::new(Subject::new());
        let escalator: Rc<dyn Subscriber<i32>> = Rc::new(Escalator {
            subject: Rc::clone(&subject),
            log: Rc::clone(&log),
        });
        subject.attach(&escalator);

        subject.set_state(0);

        assert_eq!(*log.borrow(), vec!["escalator:0", "escalator:1", "escalator:2"]);
        assert_eq!(subject.state(), Some(2));
        assert_eq!(subject.phase(), Phase::Idle);
    }

    #[test]
    fn test_weather_station_window_before_mobile() {
        let station = WeatherStation::new();
        let window = Rc::new(Display::window());
        let mobile = Rc::new(Display::mobile());
        let window_handle: Rc<dyn Subscriber<Temperature>> = window.clone();
        let mobile_handle: Rc<dyn Subscriber<Temperature>> = mobile.clone();
        station.subscribe(&window_handle);
        station.subscribe(&mobile_handle);

        station.set_temperature(15.0);

        assert_eq!(window.inbox.messages(), vec!["Current weather in Window is 15."]);
        assert_eq!(mobile.inbox.messages(), vec!["Current weather in Mobile is 15."]);
        assert_eq!(station.temperature(), Some(Temperature(15.0)));
    }

    #[test]
    fn test_order_service_confirms_on_every_channel() {
        use super::orders::{Channel, Confirmation, OrderPlaced, OrderService};

        let service = OrderService::new();
        let email = Rc::new(Confirmation::new(Channel::Email));
        let sms = Rc::new(Confirmation::new(Channel::Sms));
        let push = Rc::new(Confirmation::new(Channel::Push));
        let handles: Vec<Rc<dyn Subscriber<OrderPlaced>>> =
            vec![email.clone(), sms.clone(), push.clone()];
        for handle in &handles {
            service.attach(handle);
        }

        service.detach(&handles[2]);
        let event = service.place_order("Alice", "ORD1234");

        assert_eq!(event.order_id, "ORD1234");
        assert_eq!(
            email.inbox.last().unwrap(),
            "Email sent to Alice: Order ORD1234 confirmed"
        );
        assert_eq!(sms.inbox.len(), 1);
        assert!(push.inbox.is_empty());
    }

    #[test]
    fn test_video_channel_unsubscribe() {
        use super::video::{Delivery, VideoChannel, Viewer};

        let channel = VideoChannel::new("Test Channel");
        let alice = Rc::new(Viewer::new("Alice", Delivery::Email));
        let charlie = Rc::new(Viewer::new("Charlie", Delivery::Mobile));
        let alice_handle: Rc<dyn Subscriber<String>> = alice.clone();
        let charlie_handle: Rc<dyn Subscriber<String>> = charlie.clone();
        channel.subscribe(&alice_handle);
        channel.subscribe(&charlie_handle);

        channel.upload("Test Observers");
        channel.unsubscribe(&charlie_handle);
        channel.upload("Second Video");

        assert_eq!(alice.inbox.len(), 2);
        assert_eq!(
            charlie.inbox.messages(),
            vec!["Charlie (Mobile): New video uploaded - \"Test Observers\""]
        );
        assert_eq!(channel.latest_upload().as_deref(), Some("Second Video"));
        assert_eq!(channel.subscriber_count(), 1);
    }
}
