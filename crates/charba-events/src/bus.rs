//! Handler registry and re-entrant dispatcher.
//!
//! The bus maps each [`EventType`] to the handlers subscribed to it, in
//! subscription order, and fires events synchronously on the caller's thread.
//!
//! ## Re-entrancy
//!
//! Handlers may add or remove handlers (themselves included) and fire further
//! events while being invoked. The bus tracks a firing depth; while it is
//! above zero, every add/remove is queued instead of applied. When the
//! outermost fire returns, the queue is applied in request order. A change
//! may carry a follow-up that runs with its real outcome once applied; the
//! manager sends its add/remove notifications that way.
//!
//! Because the registry cannot change during a fire, dispatch walks the live
//! handler list by index without copying it:
//!
//! - every handler registered before the fire is invoked exactly once
//! - handlers added during the fire are not invoked by it
//! - removals during the fire never skip another handler
//!
//! The depth decrement and queue drain run from a drop guard, so they also
//! happen when a handler fails or panics.

use crate::error::{EventError, EventResult};
use crate::event::Event;
use crate::event_type::EventType;
use crate::handler::{same_handler, SharedHandler};
use charba_config::DispatchConfig;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// A registry mutation; reports whether the registry changed
type RegistryAction = Box<dyn FnOnce(&mut HandlerRegistry) -> bool>;

/// Runs once the mutation it belongs to was applied, with its outcome
pub(crate) type FollowUp = Box<dyn FnOnce(bool)>;

/// A mutation queued while a fire is in progress
struct Deferred {
    action: RegistryAction,
    follow_up: Option<FollowUp>,
}

#[derive(Default)]
struct HandlerRegistry {
    handlers: HashMap<EventType, Vec<SharedHandler>>,
}

impl HandlerRegistry {
    fn add(&mut self, handler: SharedHandler, event_type: EventType) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Remove the first occurrence of `handler`; drops the type once empty
    fn remove(&mut self, handler: &SharedHandler, event_type: &EventType) -> bool {
        let Some(list) = self.handlers.get_mut(event_type) else {
            return false;
        };
        let Some(position) = list.iter().position(|h| same_handler(h, handler)) else {
            return false;
        };

        list.remove(position);
        if list.is_empty() {
            self.handlers.remove(event_type);
        }
        true
    }

    fn get(&self, event_type: &EventType, index: usize) -> Option<SharedHandler> {
        self.handlers
            .get(event_type)
            .and_then(|list| list.get(index))
            .cloned()
    }

    fn count(&self, event_type: &EventType) -> usize {
        self.handlers.get(event_type).map_or(0, Vec::len)
    }
}

/// Registry and dispatcher for one event source.
///
/// Single-threaded: all methods take `&self` so handlers holding a reference
/// to the bus can call back into it during a fire.
pub struct EventBus {
    registry: RefCell<HandlerRegistry>,
    firing_depth: Cell<usize>,
    deferred: RefCell<VecDeque<Deferred>>,
    config: DispatchConfig,
}

impl EventBus {
    /// Create an empty bus with default dispatch settings
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    /// Create an empty bus with the given dispatch settings
    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            registry: RefCell::new(HandlerRegistry::default()),
            firing_depth: Cell::new(0),
            deferred: RefCell::new(VecDeque::new()),
            config,
        }
    }

    /// Subscribe `handler` to events of `event_type`.
    ///
    /// Deferred until the outermost fire completes if called during a fire.
    /// Registering the same handler twice makes it run twice.
    pub fn add_handler(&self, handler: SharedHandler, event_type: &EventType) {
        self.add_handler_then(handler, event_type, None);
    }

    /// Unsubscribe one occurrence of `handler` from `event_type`.
    ///
    /// Removing a handler that is not registered is a no-op. Deferred like
    /// [`add_handler`](Self::add_handler) during a fire.
    pub fn remove_handler(&self, handler: &SharedHandler, event_type: &EventType) {
        self.remove_handler_then(handler, event_type, None);
    }

    pub(crate) fn add_handler_then(
        &self,
        handler: SharedHandler,
        event_type: &EventType,
        follow_up: Option<FollowUp>,
    ) {
        let key = event_type.clone();
        let action: RegistryAction = Box::new(move |registry| {
            registry.add(handler, key);
            true
        });
        self.submit("registration", event_type, action, follow_up);
    }

    pub(crate) fn remove_handler_then(
        &self,
        handler: &SharedHandler,
        event_type: &EventType,
        follow_up: Option<FollowUp>,
    ) {
        let handler = Rc::clone(handler);
        let key = event_type.clone();
        let action: RegistryAction = Box::new(move |registry| registry.remove(&handler, &key));
        self.submit("removal", event_type, action, follow_up);
    }

    /// Fire `event` to every handler registered for its type.
    ///
    /// Handlers run in subscription order on the calling thread. The first
    /// handler error stops the walk and is returned as [`EventError::Handler`].
    /// Firing a type nobody listens to does nothing.
    pub fn fire_event(&self, event: &dyn Event) -> EventResult<()> {
        let event_type = event.event_type();
        let guard = FiringGuard::enter(self);

        if guard.depth == self.config.nested_depth_warning {
            warn!(
                event_type = %event_type,
                depth = guard.depth,
                "nested event fires reached warning depth"
            );
        }

        let mut index = 0;
        loop {
            // the borrow ends here, handlers may query the bus
            let next = self.registry.borrow().get(event_type, index);
            let Some(handler) = next else {
                break;
            };
            if self.config.trace_dispatch {
                trace!(event_type = %event_type, index, depth = guard.depth, "dispatching");
            }

            event
                .dispatch(handler.as_ref())
                .map_err(|source| EventError::Handler {
                    event_type: event_type.to_string(),
                    source,
                })?;
            index += 1;
        }

        Ok(())
    }

    /// Number of handlers currently registered for `event_type`.
    ///
    /// Queued (deferred) changes are not counted until applied.
    pub fn handler_count(&self, event_type: &EventType) -> usize {
        self.registry.borrow().count(event_type)
    }

    /// Check if at least one handler is registered for `event_type`
    pub fn is_event_handled(&self, event_type: &EventType) -> bool {
        self.registry.borrow().handlers.contains_key(event_type)
    }

    /// Types with at least one handler, sorted
    pub fn registered_types(&self) -> Vec<EventType> {
        let mut types: Vec<_> = self.registry.borrow().handlers.keys().cloned().collect();
        types.sort();
        types
    }

    /// Snapshot of every registration as `(type, handler)`, sorted by type
    /// and in subscription order within a type
    pub fn entries(&self) -> Vec<(EventType, SharedHandler)> {
        let registry = self.registry.borrow();
        let mut types: Vec<_> = registry.handlers.keys().collect();
        types.sort();

        types
            .into_iter()
            .flat_map(|event_type| {
                registry.handlers[event_type]
                    .iter()
                    .map(move |handler| (event_type.clone(), Rc::clone(handler)))
            })
            .collect()
    }

    /// Current nesting of fires, 0 when idle
    pub fn firing_depth(&self) -> usize {
        self.firing_depth.get()
    }

    /// Number of queued add/remove actions
    pub fn pending_actions(&self) -> usize {
        self.deferred.borrow().len()
    }

    /// Dispatch settings
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    fn is_firing(&self) -> bool {
        self.firing_depth.get() > 0
    }

    /// Apply `action` now, or queue it while a fire is in progress
    fn submit(
        &self,
        kind: &'static str,
        event_type: &EventType,
        action: RegistryAction,
        follow_up: Option<FollowUp>,
    ) {
        if self.is_firing() {
            debug!(event_type = %event_type, kind, "deferring handler change");
            self.deferred
                .borrow_mut()
                .push_back(Deferred { action, follow_up });
            return;
        }

        let changed = action(&mut self.registry.borrow_mut());
        debug!(event_type = %event_type, kind, changed, "applied handler change");
        if let Some(follow_up) = follow_up {
            follow_up(changed);
        }
    }

    /// Apply queued changes in request order.
    ///
    /// Each follow-up runs right after its own change and outside any borrow,
    /// so it may fire events; changes those fires request join this queue.
    fn drain_deferred(&self) {
        let pending = self.deferred.borrow().len();
        if pending == 0 {
            return;
        }

        debug!(count = pending, "applying deferred handler changes");
        loop {
            let next = self.deferred.borrow_mut().pop_front();
            let Some(Deferred { action, follow_up }) = next else {
                break;
            };

            let changed = action(&mut self.registry.borrow_mut());
            if let Some(follow_up) = follow_up {
                follow_up(changed);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        let counts: HashMap<&str, usize> = registry
            .handlers
            .iter()
            .map(|(event_type, list)| (event_type.value(), list.len()))
            .collect();

        f.debug_struct("EventBus")
            .field("handlers", &counts)
            .field("firing_depth", &self.firing_depth.get())
            .field("pending_actions", &self.deferred.borrow().len())
            .finish()
    }
}

/// Holds one level of firing depth; the last level out drains the queue
struct FiringGuard<'a> {
    bus: &'a EventBus,
    depth: usize,
}

impl<'a> FiringGuard<'a> {
    fn enter(bus: &'a EventBus) -> Self {
        let depth = bus.firing_depth.get() + 1;
        bus.firing_depth.set(depth);
        Self { bus, depth }
    }
}

impl Drop for FiringGuard<'_> {
    fn drop(&mut self) {
        let depth = self.bus.firing_depth.get().saturating_sub(1);
        self.bus.firing_depth.set(depth);
        if depth == 0 {
            self.bus.drain_deferred();
        }
    }
}
