//! Handler capability trait.
//!
//! A handler is any type implementing [`EventHandler`]. The typed callbacks
//! live on per-event capability traits (`ChartClickEventHandler`, ...); a
//! handler advertises a capability by overriding the matching accessor:
//!
//! ```rust
//! use charba_events::events::{ChartClickEvent, ChartClickEventHandler};
//! use charba_events::{EventHandler, HandlerResult};
//!
//! struct Logger;
//!
//! impl ChartClickEventHandler for Logger {
//!     fn on_click(&self, event: &ChartClickEvent) -> HandlerResult {
//!         println!("clicked: {}", event.native_event().kind());
//!         Ok(())
//!     }
//! }
//!
//! impl EventHandler for Logger {
//!     fn as_chart_click(&self) -> Option<&dyn ChartClickEventHandler> {
//!         Some(self)
//!     }
//! }
//! ```
//!
//! Events check the capability on every dispatch, so one bus can hold
//! handlers of unrelated capabilities.

use crate::events::{
    AddHandlerEventHandler, AnimationProgressEventHandler, ChartClickEventHandler,
    ChartHoverEventHandler, ChartResizeEventHandler, LegendClickEventHandler,
    RemoveHandlerEventHandler,
};
use std::rc::Rc;

/// Which part of the system a handler belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandlerCategory {
    /// Plumbing handlers (configuration listeners, notification consumers)
    #[default]
    Internal,
    /// Consumer-facing chart handlers. Adding or removing one fires an
    /// `AddHandlerEvent` / `RemoveHandlerEvent` through the manager.
    Chart,
}

/// Capability set of a handler.
///
/// Every accessor defaults to `None`; override the ones the handler supports.
pub trait EventHandler {
    /// Category of this handler
    fn category(&self) -> HandlerCategory {
        HandlerCategory::Internal
    }

    /// Chart click capability
    fn as_chart_click(&self) -> Option<&dyn ChartClickEventHandler> {
        None
    }

    /// Chart hover capability
    fn as_chart_hover(&self) -> Option<&dyn ChartHoverEventHandler> {
        None
    }

    /// Chart resize capability
    fn as_chart_resize(&self) -> Option<&dyn ChartResizeEventHandler> {
        None
    }

    /// Animation progress capability
    fn as_animation_progress(&self) -> Option<&dyn AnimationProgressEventHandler> {
        None
    }

    /// Legend click capability
    fn as_legend_click(&self) -> Option<&dyn LegendClickEventHandler> {
        None
    }

    /// Handler-added notification capability
    fn as_add_handler(&self) -> Option<&dyn AddHandlerEventHandler> {
        None
    }

    /// Handler-removed notification capability
    fn as_remove_handler(&self) -> Option<&dyn RemoveHandlerEventHandler> {
        None
    }
}

/// Shared, reference-counted handler as stored by the bus
pub type SharedHandler = Rc<dyn EventHandler>;

/// Handler identity: same allocation, regardless of vtable
pub(crate) fn same_handler(a: &SharedHandler, b: &SharedHandler) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
