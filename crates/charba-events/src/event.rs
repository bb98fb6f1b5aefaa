//! The `Event` trait and the state shared by every event kind.

use crate::error::HandlerResult;
use crate::event_type::EventType;
use crate::handler::EventHandler;
use crate::source::EventSource;
use std::cell::OnceCell;

/// Outcome of stamping a source onto an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceStamp {
    /// The slot was empty and now holds the source
    Stamped,
    /// The slot already held this same source
    Unchanged,
    /// The slot holds a different source, which was kept
    Conflict,
}

/// Type and source slot embedded in every event.
///
/// The source can only be assigned by [`HandlerManager::fire_event`](crate::HandlerManager::fire_event),
/// and only once.
#[derive(Debug)]
pub struct EventCore {
    event_type: EventType,
    source: OnceCell<EventSource>,
}

impl EventCore {
    /// Create the core for an event of `event_type`
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            source: OnceCell::new(),
        }
    }

    /// Event type
    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    /// Source stamped by the dispatcher, `None` before the first fire
    pub fn source(&self) -> Option<&EventSource> {
        self.source.get()
    }

    pub(crate) fn stamp_source(&self, source: EventSource) -> SourceStamp {
        match self.source.get() {
            None => {
                // cannot fail, the slot is empty
                let _ = self.source.set(source);
                SourceStamp::Stamped
            }
            Some(existing) if existing.same_as(&source) => SourceStamp::Unchanged,
            Some(_) => SourceStamp::Conflict,
        }
    }
}

/// A fireable occurrence.
///
/// Implementors embed an [`EventCore`] and route [`dispatch`](Event::dispatch)
/// to the typed callback of the handler capability they belong to:
///
/// ```rust
/// use charba_events::{Event, EventCore, EventHandler, HandlerResult};
///
/// struct Ping {
///     core: EventCore,
/// }
///
/// impl Event for Ping {
///     fn core(&self) -> &EventCore {
///         &self.core
///     }
///
///     fn dispatch(&self, _handler: &dyn EventHandler) -> HandlerResult {
///         // no handler capability for pings
///         Ok(())
///     }
/// }
/// ```
pub trait Event {
    /// Shared type/source state
    fn core(&self) -> &EventCore;

    /// Invoke the typed callback of `handler` if it has the capability for
    /// this event kind. Handlers without it are skipped silently.
    fn dispatch(&self, handler: &dyn EventHandler) -> HandlerResult;

    /// Event type, used to select handlers
    fn event_type(&self) -> &EventType {
        self.core().event_type()
    }

    /// Source stamped by the dispatcher
    fn source(&self) -> Option<&EventSource> {
        self.core().source()
    }
}
