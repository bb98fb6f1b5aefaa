//! Closure-backed handlers.
//!
//! [`FnHandler`] adapts a closure to the capability trait of one event kind,
//! which saves writing a struct for one-off handlers:
//!
//! ```rust
//! use charba_events::events::ChartClickEvent;
//! use charba_events::{EventBus, FnHandler};
//!
//! let bus = EventBus::new();
//! let handler = FnHandler::new(|event: &ChartClickEvent| {
//!     println!("{}", event.native_event().kind());
//!     Ok(())
//! })
//! .into_shared();
//! bus.add_handler(handler, ChartClickEvent::type_key());
//! ```

use crate::error::HandlerResult;
use crate::events::{
    AddHandlerEvent, AddHandlerEventHandler, AnimationProgressEvent,
    AnimationProgressEventHandler, ChartClickEvent, ChartClickEventHandler, ChartHoverEvent,
    ChartHoverEventHandler, ChartResizeEvent, ChartResizeEventHandler, LegendClickEvent,
    LegendClickEventHandler, RemoveHandlerEvent, RemoveHandlerEventHandler,
};
use crate::handler::{EventHandler, HandlerCategory, SharedHandler};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// Handler for events of kind `E` backed by a closure
pub struct FnHandler<E, F> {
    callback: F,
    category: HandlerCategory,
    _event: PhantomData<fn(&E)>,
}

impl<E, F> FnHandler<E, F>
where
    F: Fn(&E) -> HandlerResult,
{
    /// Wrap `callback` as an internal handler
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            category: HandlerCategory::Internal,
            _event: PhantomData,
        }
    }

    /// Wrap `callback` as a chart handler, which triggers add/remove notifications
    pub fn chart(callback: F) -> Self {
        Self {
            callback,
            category: HandlerCategory::Chart,
            _event: PhantomData,
        }
    }

    /// Move into a [`SharedHandler`]
    pub fn into_shared(self) -> SharedHandler
    where
        Self: EventHandler + 'static,
    {
        Rc::new(self)
    }
}

impl<E, F> fmt::Debug for FnHandler<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler")
            .field("event", &std::any::type_name::<E>())
            .field("category", &self.category)
            .finish()
    }
}

macro_rules! fn_handler_capability {
    ($event:ty, $capability:ident, $method:ident, $accessor:ident) => {
        impl<F> $capability for FnHandler<$event, F>
        where
            F: Fn(&$event) -> HandlerResult,
        {
            fn $method(&self, event: &$event) -> HandlerResult {
                (self.callback)(event)
            }
        }

        impl<F> EventHandler for FnHandler<$event, F>
        where
            F: Fn(&$event) -> HandlerResult,
        {
            fn category(&self) -> HandlerCategory {
                self.category
            }

            fn $accessor(&self) -> Option<&dyn $capability> {
                Some(self)
            }
        }
    };
}

fn_handler_capability!(ChartClickEvent, ChartClickEventHandler, on_click, as_chart_click);
fn_handler_capability!(ChartHoverEvent, ChartHoverEventHandler, on_hover, as_chart_hover);
fn_handler_capability!(ChartResizeEvent, ChartResizeEventHandler, on_resize, as_chart_resize);
fn_handler_capability!(
    AnimationProgressEvent,
    AnimationProgressEventHandler,
    on_progress,
    as_animation_progress
);
fn_handler_capability!(LegendClickEvent, LegendClickEventHandler, on_click, as_legend_click);
fn_handler_capability!(AddHandlerEvent, AddHandlerEventHandler, on_add, as_add_handler);
fn_handler_capability!(RemoveHandlerEvent, RemoveHandlerEventHandler, on_remove, as_remove_handler);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::events::NativeEvent;
    use std::cell::Cell;

    #[test]
    fn test_closure_receives_event() {
        let seen = Rc::new(Cell::new(0));
        let seen_clone = Rc::clone(&seen);
        let handler = FnHandler::new(move |_: &ChartHoverEvent| {
            seen_clone.set(seen_clone.get() + 1);
            Ok(())
        });

        let event = ChartHoverEvent::new(NativeEvent::new("mousemove").unwrap());
        event.dispatch(&handler).unwrap();
        assert_eq!(seen.get(), 1);
        assert_eq!(handler.category(), HandlerCategory::Internal);
    }

    #[test]
    fn test_only_own_capability_exposed() {
        let handler = FnHandler::chart(|_: &LegendClickEvent| Ok(()));
        assert!(handler.as_legend_click().is_some());
        assert!(handler.as_chart_click().is_none());
        assert_eq!(handler.category(), HandlerCategory::Chart);
    }
}
