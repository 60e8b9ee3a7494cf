//! Dependency inversion: the order processor depends on `Database` and
//! `MessageSender`, and is handed concrete implementations by its caller.

use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub items: Vec<String>,
}

impl Order {
    pub fn new(id: impl Into<String>, items: &[&str]) -> Self {
        Self {
            id: id.into(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

pub trait Database {
    fn save(&self, order: &Order) -> String;
}

pub trait MessageSender {
    fn send(&self, message: &str) -> String;
}

/// In-memory stand-in for a SQL store; keeps the ids it saved.
#[derive(Debug)]
pub struct SqlStore {
    engine: &'static str,
    saved: RefCell<Vec<String>>,
}

impl SqlStore {
    pub fn mysql() -> Self {
        Self::new("MySQL")
    }

    pub fn postgres() -> Self {
        Self::new("PostgreSQL")
    }

    fn new(engine: &'static str) -> Self {
        Self {
            engine,
            saved: RefCell::new(Vec::new()),
        }
    }

    pub fn saved_ids(&self) -> Vec<String> {
        self.saved.borrow().clone()
    }
}

impl Database for SqlStore {
    fn save(&self, order: &Order) -> String {
        self.saved.borrow_mut().push(order.id.clone());
        format!(
            "Saving to {} database: order {} [{}]",
            self.engine,
            order.id,
            order.items.join(", ")
        )
    }
}

pub struct SmtpSender;

impl MessageSender for SmtpSender {
    fn send(&self, message: &str) -> String {
        format!("Sending email via SMTP: {message}")
    }
}

pub struct SmsSender;

impl MessageSender for SmsSender {
    fn send(&self, message: &str) -> String {
        format!("Sending SMS: {message}")
    }
}

/// High-level policy; knows nothing about MySQL or SMTP.
pub struct OrderProcessor<'a> {
    database: &'a dyn Database,
    notifier: &'a dyn MessageSender,
}

impl<'a> OrderProcessor<'a> {
    pub fn new(database: &'a dyn Database, notifier: &'a dyn MessageSender) -> Self {
        Self { database, notifier }
    }

    pub fn process_order(&self, order: &Order) -> Vec<String> {
        tracing::debug!(order = %order.id, "processing order");
        vec![
            format!("Processing order: {}", order.id),
            self.database.save(order),
            self.notifier.send(&format!("Order {} processed", order.id)),
        ]
    }
}
