//! Per-source facade over an [`EventBus`].
//!
//! A chart (or any other owner) builds one [`HandlerManager`] bound to itself.
//! The manager stamps the owner as source on every event it fires and tells
//! listeners when consumer-facing handlers come and go, through
//! [`AddHandlerEvent`] and [`RemoveHandlerEvent`]. Notifications follow the
//! registry: a change requested during a fire is announced once it is applied
//! after the outermost fire, and only if it changed something.

use crate::bus::{EventBus, FollowUp};
use crate::error::EventResult;
use crate::event::{Event, SourceStamp};
use crate::event_type::EventType;
use crate::events::{AddHandlerEvent, RemoveHandlerEvent};
use crate::handler::{HandlerCategory, SharedHandler};
use crate::registration::HandlerRegistration;
use crate::source::EventSource;
use charba_config::DispatchConfig;
use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
enum Lifecycle {
    Added,
    Removed,
}

struct ManagerInner {
    bus: EventBus,
    owner: Option<Weak<dyn Any>>,
}

/// Handler registry bound to one event source.
///
/// Clones share the same registry. A handler that calls back into its own
/// manager should capture a [`WeakHandlerManager`] from
/// [`downgrade`](Self::downgrade): the manager owns its handlers, so a strong
/// clone inside one keeps the manager alive forever.
#[derive(Clone)]
pub struct HandlerManager {
    inner: Rc<ManagerInner>,
}

/// Non-owning handle to a [`HandlerManager`]
#[derive(Clone, Default)]
pub struct WeakHandlerManager {
    inner: Weak<ManagerInner>,
}

impl WeakHandlerManager {
    /// The manager, unless every strong handle was dropped
    pub fn upgrade(&self) -> Option<HandlerManager> {
        self.inner.upgrade().map(|inner| HandlerManager { inner })
    }
}

impl fmt::Debug for WeakHandlerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakHandlerManager")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl HandlerManager {
    /// Create a manager whose events are sourced from `owner`
    pub fn new<T: Any>(owner: &Weak<T>) -> Self {
        Self::with_config(owner, DispatchConfig::default())
    }

    /// Create a manager for `owner` with the given dispatch settings
    pub fn with_config<T: Any>(owner: &Weak<T>, config: DispatchConfig) -> Self {
        let owner: Weak<dyn Any> = owner.clone();
        Self::build(Some(owner), config)
    }

    /// Create a manager without a source.
    ///
    /// Handlers can be added and removed, but fires are skipped.
    pub fn detached() -> Self {
        Self::build(None, DispatchConfig::default())
    }

    fn build(owner: Option<Weak<dyn Any>>, config: DispatchConfig) -> Self {
        Self {
            inner: Rc::new(ManagerInner {
                bus: EventBus::with_config(config),
                owner,
            }),
        }
    }

    /// Handle that does not keep the manager alive
    pub fn downgrade(&self) -> WeakHandlerManager {
        WeakHandlerManager {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// The owner, while it is still alive
    pub fn source(&self) -> Option<EventSource> {
        let owner = self.inner.owner.as_ref()?.upgrade()?;
        Some(EventSource::from_any(owner))
    }

    /// Subscribe `handler` to `event_type`.
    ///
    /// Chart handlers also produce an [`AddHandlerEvent`] for `event_type`,
    /// after the outermost fire when called during one.
    pub fn add_handler(&self, handler: SharedHandler, event_type: &EventType) -> HandlerRegistration {
        let follow_up = self.lifecycle_follow_up(&handler, event_type, Lifecycle::Added);
        self.inner
            .bus
            .add_handler_then(Rc::clone(&handler), event_type, follow_up);

        HandlerRegistration::new(self.downgrade(), handler, event_type.clone())
    }

    /// Stamp the source on `event` and fire it.
    ///
    /// Does nothing when the manager has no live source. An event already
    /// stamped by another source keeps its first source.
    pub fn fire_event(&self, event: &dyn Event) -> EventResult<()> {
        let Some(source) = self.source() else {
            debug!(event_type = %event.event_type(), "no event source, fire skipped");
            return Ok(());
        };

        if event.core().stamp_source(source) == SourceStamp::Conflict {
            warn!(
                event_type = %event.event_type(),
                "event already fired by another source, keeping the first"
            );
        }

        self.inner.bus.fire_event(event)
    }

    /// Number of handlers registered for `event_type`
    pub fn handler_count(&self, event_type: &EventType) -> usize {
        self.inner.bus.handler_count(event_type)
    }

    /// Check if at least one handler is registered for `event_type`
    pub fn is_event_handled(&self, event_type: &EventType) -> bool {
        self.inner.bus.is_event_handled(event_type)
    }

    /// Remove every registered handler.
    ///
    /// Goes through the regular removal path, so each chart handler produces
    /// its [`RemoveHandlerEvent`]. Registrations created earlier become no-ops.
    pub fn clear(&self) {
        let entries = self.inner.bus.entries();
        debug!(count = entries.len(), "clearing handlers");

        for (event_type, handler) in entries {
            self.remove_handler(&handler, &event_type);
        }
    }

    /// Dispatch settings of the underlying bus
    pub fn config(&self) -> &DispatchConfig {
        self.inner.bus.config()
    }

    pub(crate) fn remove_handler(&self, handler: &SharedHandler, event_type: &EventType) {
        let follow_up = self.lifecycle_follow_up(handler, event_type, Lifecycle::Removed);
        self.inner
            .bus
            .remove_handler_then(handler, event_type, follow_up);
    }

    /// Notification for a chart handler change, sent only if the change applied
    fn lifecycle_follow_up(
        &self,
        handler: &SharedHandler,
        event_type: &EventType,
        lifecycle: Lifecycle,
    ) -> Option<FollowUp> {
        if handler.category() != HandlerCategory::Chart {
            return None;
        }

        let manager = self.downgrade();
        let event_type = event_type.clone();
        Some(Box::new(move |changed: bool| {
            if !changed {
                debug!(event_type = %event_type, "handler was not registered, no notification");
                return;
            }
            let Some(manager) = manager.upgrade() else {
                return;
            };
            match lifecycle {
                Lifecycle::Added => manager.notify(&AddHandlerEvent::new(event_type)),
                Lifecycle::Removed => manager.notify(&RemoveHandlerEvent::new(event_type)),
            }
        }))
    }

    fn notify(&self, event: &dyn Event) {
        if let Err(err) = self.fire_event(event) {
            warn!(event_type = %event.event_type(), error = %err, "handler notification failed");
        }
    }
}

impl fmt::Debug for HandlerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerManager")
            .field("bus", &self.inner.bus)
            .field("has_source", &self.source().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerError;
    use crate::events::{ChartClickEvent, ChartResizeEvent, NativeEvent, SizeItem};
    use crate::handler_fn::FnHandler;
    use std::cell::{Cell, RefCell};
    use tracing_test::traced_test;

    struct Chart {
        id: &'static str,
    }

    fn click() -> ChartClickEvent {
        ChartClickEvent::new(NativeEvent::new("click").unwrap())
    }

    #[test]
    fn test_fire_stamps_owner_as_source() {
        let chart = Rc::new(Chart { id: "main" });
        let manager = HandlerManager::new(&Rc::downgrade(&chart));
        let seen = Rc::new(RefCell::new(None));

        let seen_clone = Rc::clone(&seen);
        let handler = FnHandler::new(move |event: &ChartClickEvent| {
            let id = event
                .source()
                .and_then(|source| source.downcast_ref::<Chart>())
                .map(|chart| chart.id);
            *seen_clone.borrow_mut() = id;
            Ok(())
        });
        manager.add_handler(handler.into_shared(), ChartClickEvent::type_key());

        manager.fire_event(&click()).unwrap();
        assert_eq!(*seen.borrow(), Some("main"));
    }

    #[test]
    fn test_detached_manager_skips_fire() {
        let manager = HandlerManager::detached();
        let calls = Rc::new(Cell::new(0));
        let calls_clone = Rc::clone(&calls);
        manager.add_handler(
            FnHandler::new(move |_: &ChartClickEvent| {
                calls_clone.set(calls_clone.get() + 1);
                Ok(())
            })
            .into_shared(),
            ChartClickEvent::type_key(),
        );

        let event = click();
        manager.fire_event(&event).unwrap();
        assert_eq!(calls.get(), 0);
        assert!(event.source().is_none());
        assert_eq!(manager.handler_count(ChartClickEvent::type_key()), 1);
    }

    #[test]
    fn test_dropped_owner_skips_fire() {
        let chart = Rc::new(Chart { id: "gone" });
        let manager = HandlerManager::new(&Rc::downgrade(&chart));
        assert!(manager.source().is_some());

        drop(chart);
        assert!(manager.source().is_none());
        manager.fire_event(&click()).unwrap();
    }

    #[test]
    #[traced_test]
    fn test_refire_from_other_manager_keeps_first_source() {
        let first = Rc::new(Chart { id: "first" });
        let second = Rc::new(Chart { id: "second" });
        let first_manager = HandlerManager::new(&Rc::downgrade(&first));
        let second_manager = HandlerManager::new(&Rc::downgrade(&second));

        let event = click();
        first_manager.fire_event(&event).unwrap();
        second_manager.fire_event(&event).unwrap();

        let owner = event.source().and_then(|s| s.downcast_ref::<Chart>()).map(|c| c.id);
        assert_eq!(owner, Some("first"));
        assert!(logs_contain("keeping the first"));
    }

    #[test]
    fn test_handler_error_surfaces() {
        let chart = Rc::new(Chart { id: "main" });
        let manager = HandlerManager::new(&Rc::downgrade(&chart));
        manager.add_handler(
            FnHandler::new(|_: &ChartResizeEvent| Err(HandlerError::new("layout failed")))
                .into_shared(),
            ChartResizeEvent::type_key(),
        );

        let event = ChartResizeEvent::new(
            NativeEvent::new("resize").unwrap(),
            SizeItem::new(100.0, 50.0).unwrap(),
        );
        let err = manager.fire_event(&event).unwrap_err();
        assert!(err.to_string().contains("layout failed"));
    }

    #[test]
    fn test_clones_share_registry() {
        let manager = HandlerManager::detached();
        let clone = manager.clone();
        clone.add_handler(
            FnHandler::new(|_: &ChartClickEvent| Ok(())).into_shared(),
            ChartClickEvent::type_key(),
        );
        assert!(manager.is_event_handled(ChartClickEvent::type_key()));
    }

    #[test]
    fn test_weak_handle_does_not_keep_manager_alive() {
        let chart = Rc::new(Chart { id: "weak" });
        let manager = HandlerManager::new(&Rc::downgrade(&chart));
        let weak = manager.downgrade();

        let calls = Rc::new(Cell::new(0));
        let calls_clone = Rc::clone(&calls);
        let handle = manager.downgrade();
        manager.add_handler(
            FnHandler::new(move |_: &ChartClickEvent| {
                if let Some(manager) = handle.upgrade() {
                    calls_clone.set(manager.handler_count(ChartClickEvent::type_key()));
                }
                Ok(())
            })
            .into_shared(),
            ChartClickEvent::type_key(),
        );

        manager.fire_event(&click()).unwrap();
        assert_eq!(calls.get(), 1);

        drop(manager);
        assert!(weak.upgrade().is_none());
        assert!(WeakHandlerManager::default().upgrade().is_none());
    }
}
