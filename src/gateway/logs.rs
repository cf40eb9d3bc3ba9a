use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event as a structured tracing record
#[derive(Debug, Default)]
pub struct LogPublisher {
    published: usize,
}

impl LogPublisher {
    pub fn new() -> Self {
        Self { published: 0 }
    }

    pub fn published(&self) -> usize {
        self.published
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        let json = serde_json::to_string(event)?;
        info!(event_id = event.event_id.as_str(), name = event.name.as_str(),
            key = event.key.as_str(), kind = ?event.kind, "domain event {}", json);
        self.published += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::LogPublisher;

    #[test]
    fn test_should_publish_to_logs() {
        let event = DomainEvent::added("books", "catalog", "1", &HashMap::new(), &1).expect("build event");
        let mut publisher = LogPublisher::new();
        publisher.publish(&event).expect("should publish");
        publisher.publish(&event).expect("should publish");
        assert_eq!(2, publisher.published());
    }
}
