//! Pointer and resize events raised on the chart canvas.

use super::native::{NativeEvent, SizeItem};
use crate::error::HandlerResult;
use crate::event::{Event, EventCore};
use crate::event_type::EventType;
use crate::handler::EventHandler;
use once_cell::sync::Lazy;

static CHART_CLICK: Lazy<EventType> = Lazy::new(|| EventType::constant("chart:click"));
static CHART_HOVER: Lazy<EventType> = Lazy::new(|| EventType::constant("chart:hover"));
static CHART_RESIZE: Lazy<EventType> = Lazy::new(|| EventType::constant("chart:resize"));

/// Capability for [`ChartClickEvent`]
pub trait ChartClickEventHandler {
    /// Invoked when the chart canvas is clicked
    fn on_click(&self, event: &ChartClickEvent) -> HandlerResult;
}

/// Capability for [`ChartHoverEvent`]
pub trait ChartHoverEventHandler {
    /// Invoked when the pointer moves over the chart
    fn on_hover(&self, event: &ChartHoverEvent) -> HandlerResult;
}

/// Capability for [`ChartResizeEvent`]
pub trait ChartResizeEventHandler {
    /// Invoked after the chart was resized
    fn on_resize(&self, event: &ChartResizeEvent) -> HandlerResult;
}

/// Click on the chart canvas
#[derive(Debug)]
pub struct ChartClickEvent {
    core: EventCore,
    native: NativeEvent,
}

impl ChartClickEvent {
    /// Event type of chart clicks
    pub fn type_key() -> &'static EventType {
        &CHART_CLICK
    }

    /// Create a click event around the native event
    pub fn new(native: NativeEvent) -> Self {
        Self {
            core: EventCore::new(Self::type_key().clone()),
            native,
        }
    }

    /// The wrapped native event
    pub fn native_event(&self) -> &NativeEvent {
        &self.native
    }
}

impl Event for ChartClickEvent {
    fn core(&self) -> &EventCore {
        &self.core
    }

    fn dispatch(&self, handler: &dyn EventHandler) -> HandlerResult {
        match handler.as_chart_click() {
            Some(handler) => handler.on_click(self),
            None => Ok(()),
        }
    }
}

/// Pointer movement over the chart canvas
#[derive(Debug)]
pub struct ChartHoverEvent {
    core: EventCore,
    native: NativeEvent,
}

impl ChartHoverEvent {
    /// Event type of chart hovers
    pub fn type_key() -> &'static EventType {
        &CHART_HOVER
    }

    /// Create a hover event around the native event
    pub fn new(native: NativeEvent) -> Self {
        Self {
            core: EventCore::new(Self::type_key().clone()),
            native,
        }
    }

    /// The wrapped native event
    pub fn native_event(&self) -> &NativeEvent {
        &self.native
    }
}

impl Event for ChartHoverEvent {
    fn core(&self) -> &EventCore {
        &self.core
    }

    fn dispatch(&self, handler: &dyn EventHandler) -> HandlerResult {
        match handler.as_chart_hover() {
            Some(handler) => handler.on_hover(self),
            None => Ok(()),
        }
    }
}

/// Chart resized to a new size
#[derive(Debug)]
pub struct ChartResizeEvent {
    core: EventCore,
    native: NativeEvent,
    size: SizeItem,
}

impl ChartResizeEvent {
    /// Event type of chart resizes
    pub fn type_key() -> &'static EventType {
        &CHART_RESIZE
    }

    /// Create a resize event
    pub fn new(native: NativeEvent, size: SizeItem) -> Self {
        Self {
            core: EventCore::new(Self::type_key().clone()),
            native,
            size,
        }
    }

    /// The wrapped native event
    pub fn native_event(&self) -> &NativeEvent {
        &self.native
    }

    /// The new chart size
    pub fn size(&self) -> SizeItem {
        self.size
    }
}

impl Event for ChartResizeEvent {
    fn core(&self) -> &EventCore {
        &self.core
    }

    fn dispatch(&self, handler: &dyn EventHandler) -> HandlerResult {
        match handler.as_chart_resize() {
            Some(handler) => handler.on_resize(self),
            None => Ok(()),
        }
    }
}
