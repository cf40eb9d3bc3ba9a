use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps events in a shared buffer; clones observe the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(vec![])),
        }
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}
