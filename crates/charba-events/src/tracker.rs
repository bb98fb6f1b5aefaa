//! Live chart handler bookkeeping.
//!
//! [`HandlerActivity`] listens to add/remove notifications and knows, per
//! event type, how many chart handlers are subscribed. The transition callback
//! fires when a type gains its first handler or loses its last one, which is
//! where a chart hooks or unhooks the matching native listener.

use crate::error::HandlerResult;
use crate::event_type::EventType;
use crate::events::{
    AddHandlerEvent, AddHandlerEventHandler, RemoveHandlerEvent, RemoveHandlerEventHandler,
};
use crate::handler::{EventHandler, SharedHandler};
use crate::manager::HandlerManager;
use crate::registration::HandlerRegistration;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Called with `(type, active)` when a type becomes active or inactive
pub type TransitionCallback = Box<dyn Fn(&EventType, bool)>;

/// Counts chart handlers per event type
#[derive(Default)]
pub struct HandlerActivity {
    counts: RefCell<HashMap<EventType, usize>>,
    on_transition: Option<TransitionCallback>,
}

impl HandlerActivity {
    /// Tracker without a transition callback
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker invoking `callback` on 0→1 and 1→0 transitions
    pub fn with_transition(callback: impl Fn(&EventType, bool) + 'static) -> Self {
        Self {
            counts: RefCell::default(),
            on_transition: Some(Box::new(callback)),
        }
    }

    /// Subscribe this tracker to both notifications of `manager`
    pub fn attach(self: &Rc<Self>, manager: &HandlerManager) -> [HandlerRegistration; 2] {
        let handler: SharedHandler = Rc::clone(self) as SharedHandler;
        [
            manager.add_handler(Rc::clone(&handler), AddHandlerEvent::type_key()),
            manager.add_handler(handler, RemoveHandlerEvent::type_key()),
        ]
    }

    /// Live chart handlers for `event_type`
    pub fn count(&self, event_type: &EventType) -> usize {
        self.counts.borrow().get(event_type).copied().unwrap_or(0)
    }

    /// Check if `event_type` has at least one live chart handler
    pub fn is_active(&self, event_type: &EventType) -> bool {
        self.count(event_type) > 0
    }

    fn increment(&self, event_type: &EventType) {
        let count = {
            let mut counts = self.counts.borrow_mut();
            let count = counts.entry(event_type.clone()).or_insert(0);
            *count += 1;
            *count
        };

        if count == 1 {
            debug!(event_type = %event_type, "handler type active");
            self.transition(event_type, true);
        }
    }

    fn decrement(&self, event_type: &EventType) {
        let remaining = {
            let mut counts = self.counts.borrow_mut();
            let Some(count) = counts.get_mut(event_type) else {
                debug!(event_type = %event_type, "removal for untracked type ignored");
                return;
            };
            *count -= 1;
            let remaining = *count;
            if remaining == 0 {
                counts.remove(event_type);
            }
            remaining
        };

        if remaining == 0 {
            debug!(event_type = %event_type, "handler type inactive");
            self.transition(event_type, false);
        }
    }

    fn transition(&self, event_type: &EventType, active: bool) {
        if let Some(callback) = &self.on_transition {
            callback(event_type, active);
        }
    }
}

impl AddHandlerEventHandler for HandlerActivity {
    fn on_add(&self, event: &AddHandlerEvent) -> HandlerResult {
        self.increment(event.handler_type());
        Ok(())
    }
}

impl RemoveHandlerEventHandler for HandlerActivity {
    fn on_remove(&self, event: &RemoveHandlerEvent) -> HandlerResult {
        self.decrement(event.handler_type());
        Ok(())
    }
}

impl EventHandler for HandlerActivity {
    fn as_add_handler(&self) -> Option<&dyn AddHandlerEventHandler> {
        Some(self)
    }

    fn as_remove_handler(&self) -> Option<&dyn RemoveHandlerEventHandler> {
        Some(self)
    }
}

impl fmt::Debug for HandlerActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerActivity")
            .field("counts", &self.counts.borrow())
            .finish_non_exhaustive()
    }
}
