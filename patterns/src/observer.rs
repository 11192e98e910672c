//! Observer
//!
//! Delivery is synchronous and in subscription order. Subscribers are not
//! isolated from each other: the first failing subscriber stops delivery
//! of that event and its error is returned to the publisher's caller.

use entity_core::{Error, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Receiver of published events
pub trait Subscriber<E> {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Handle one event
    fn notify(&self, event: &E) -> Result<()>;
}

/// Handle returned by [`Publisher::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Event publisher with ordered subscribers and an event history
pub struct Publisher<E> {
    subscribers: Vec<(SubscriptionId, Box<dyn Subscriber<E>>)>,
    history: Vec<E>,
    next_id: u64,
}

impl<E> Publisher<E> {
    /// Create publisher with no subscribers
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            history: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a subscriber at the end of the delivery order
    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber<E>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        tracing::debug!(%id, subscriber = subscriber.name(), "Subscribed");
        self.subscribers.push((id, subscriber));
        id
    }

    /// Remove a subscriber, returning it
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<Box<dyn Subscriber<E>>> {
        let index = self
            .subscribers
            .iter()
            .position(|(sub_id, _)| *sub_id == id)
            .ok_or_else(|| Error::not_found("subscription", id))?;

        let (_, subscriber) = self.subscribers.remove(index);
        tracing::debug!(%id, subscriber = subscriber.name(), "Unsubscribed");
        Ok(subscriber)
    }

    /// Record the event, then deliver it to every subscriber in order
    ///
    /// Returns the number of subscribers notified.
    pub fn publish(&mut self, event: E) -> Result<usize> {
        self.history.push(event);
        let event = &self.history[self.history.len() - 1];

        for (id, subscriber) in &self.subscribers {
            if let Err(err) = subscriber.notify(event) {
                tracing::warn!(%id, subscriber = subscriber.name(), error = %err, "Delivery aborted");
                return Err(err);
            }
        }

        Ok(self.subscribers.len())
    }

    /// Every event published so far, oldest first
    pub fn history(&self) -> &[E] {
        &self.history
    }

    /// Number of current subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E> Default for Publisher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for Publisher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.subscribers.iter().map(|(_, s)| s.name()).collect();
        f.debug_struct("Publisher")
            .field("subscribers", &names)
            .field("history", &self.history)
            .finish()
    }
}

/// Shared record of received notifications
#[derive(Debug, Clone, Default)]
pub struct Inbox(Rc<RefCell<Vec<String>>>);

impl Inbox {
    /// Create empty inbox
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line
    pub fn push(&self, line: String) {
        self.0.borrow_mut().push(line);
    }

    /// Copy of every line received so far
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Number of lines received
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether nothing was received
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Customer receiving store announcements
#[derive(Debug, Clone)]
pub struct CustomerObserver {
    name: String,
    inbox: Inbox,
}

impl CustomerObserver {
    /// Create observer writing into `inbox`
    pub fn new(name: impl Into<String>, inbox: Inbox) -> Self {
        Self {
            name: name.into(),
            inbox,
        }
    }
}

impl<E: fmt::Display> Subscriber<E> for CustomerObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify(&self, event: &E) -> Result<()> {
        let line = format!("{} received notification: {}", self.name, event);
        tracing::info!("{}", line);
        self.inbox.push(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_core::ErrorKind;

    struct Failing;

    impl Subscriber<String> for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn notify(&self, event: &String) -> Result<()> {
            Err(Error::validation(format!("cannot handle {}", event)))
        }
    }

    fn observer(name: &str, inbox: &Inbox) -> Box<dyn Subscriber<String>> {
        Box::new(CustomerObserver::new(name, inbox.clone()))
    }

    #[test]
    fn test_notifies_all_in_order() {
        let inbox = Inbox::new();
        let mut publisher = Publisher::new();
        publisher.subscribe(observer("Joao", &inbox));
        publisher.subscribe(observer("Maria", &inbox));

        let delivered = publisher.publish("New promotion!".to_string()).unwrap();

        assert_eq!(delivered, 2);
        assert_eq!(
            inbox.messages(),
            vec![
                "Joao received notification: New promotion!",
                "Maria received notification: New promotion!",
            ]
        );
    }

    #[test]
    fn test_unsubscribed_receives_nothing() {
        let joao = Inbox::new();
        let maria = Inbox::new();
        let mut publisher = Publisher::new();
        let joao_id = publisher.subscribe(observer("Joao", &joao));
        publisher.subscribe(observer("Maria", &maria));

        publisher.publish("first".to_string()).unwrap();
        publisher.unsubscribe(joao_id).unwrap();
        publisher.publish("second".to_string()).unwrap();

        assert_eq!(joao.messages(), vec!["Joao received notification: first"]);
        assert_eq!(maria.len(), 2);
        assert_eq!(publisher.subscriber_count(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown() {
        let inbox = Inbox::new();
        let mut publisher = Publisher::new();
        let id = publisher.subscribe(observer("Joao", &inbox));
        publisher.unsubscribe(id).unwrap();

        let err = publisher.unsubscribe(id).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_history_without_subscribers() {
        let mut publisher: Publisher<String> = Publisher::new();
        assert_eq!(publisher.publish("Promotion 1".to_string()).unwrap(), 0);
        assert_eq!(publisher.publish("Promotion 2".to_string()).unwrap(), 0);

        assert_eq!(publisher.history(), &["Promotion 1", "Promotion 2"]);
    }

    #[test]
    fn test_failure_aborts_remaining() {
        let before = Inbox::new();
        let after = Inbox::new();
        let mut publisher = Publisher::new();
        publisher.subscribe(observer("Before", &before));
        publisher.subscribe(Box::new(Failing));
        publisher.subscribe(observer("After", &after));

        let err = publisher.publish("flash sale".to_string()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(before.len(), 1);
        assert!(after.is_empty());
        assert_eq!(publisher.history().len(), 1);
    }
}
