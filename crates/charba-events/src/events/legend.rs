//! Legend interaction events.

use super::native::{LegendItem, NativeEvent};
use crate::error::HandlerResult;
use crate::event::{Event, EventCore};
use crate::event_type::EventType;
use crate::handler::EventHandler;
use once_cell::sync::Lazy;

static LEGEND_CLICK: Lazy<EventType> = Lazy::new(|| EventType::constant("legend:click"));

/// Capability for [`LegendClickEvent`]
pub trait LegendClickEventHandler {
    /// Invoked when a legend entry is clicked
    fn on_click(&self, event: &LegendClickEvent) -> HandlerResult;
}

/// Click on a legend entry
#[derive(Debug)]
pub struct LegendClickEvent {
    core: EventCore,
    native: NativeEvent,
    item: LegendItem,
}

impl LegendClickEvent {
    /// Event type of legend clicks
    pub fn type_key() -> &'static EventType {
        &LEGEND_CLICK
    }

    /// Create a legend click event
    pub fn new(native: NativeEvent, item: LegendItem) -> Self {
        Self {
            core: EventCore::new(Self::type_key().clone()),
            native,
            item,
        }
    }

    /// The wrapped native event
    pub fn native_event(&self) -> &NativeEvent {
        &self.native
    }

    /// The clicked legend entry
    pub fn item(&self) -> &LegendItem {
        &self.item
    }
}

impl Event for LegendClickEvent {
    fn core(&self) -> &EventCore {
        &self.core
    }

    fn dispatch(&self, handler: &dyn EventHandler) -> HandlerResult {
        match handler.as_legend_click() {
            Some(handler) => handler.on_click(self),
            None => Ok(()),
        }
    }
}
