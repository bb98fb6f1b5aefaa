//! Animation lifecycle events.

use super::native::{AnimationItem, NativeEvent};
use crate::error::HandlerResult;
use crate::event::{Event, EventCore};
use crate::event_type::EventType;
use crate::handler::EventHandler;
use once_cell::sync::Lazy;

static ANIMATION_PROGRESS: Lazy<EventType> =
    Lazy::new(|| EventType::constant("animation:progress"));

/// Capability for [`AnimationProgressEvent`]
pub trait AnimationProgressEventHandler {
    /// Invoked on each step of an animation
    fn on_progress(&self, event: &AnimationProgressEvent) -> HandlerResult;
}

/// One step of a running chart animation
#[derive(Debug)]
pub struct AnimationProgressEvent {
    core: EventCore,
    native: NativeEvent,
    item: AnimationItem,
}

impl AnimationProgressEvent {
    /// Event type of animation progress
    pub fn type_key() -> &'static EventType {
        &ANIMATION_PROGRESS
    }

    /// Create a progress event
    pub fn new(native: NativeEvent, item: AnimationItem) -> Self {
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

    /// Animation progress descriptor
    pub fn item(&self) -> AnimationItem {
        self.item
    }
}

impl Event for AnimationProgressEvent {
    fn core(&self) -> &EventCore {
        &self.core
    }

    fn dispatch(&self, handler: &dyn EventHandler) -> HandlerResult {
        match handler.as_animation_progress() {
            Some(handler) => handler.on_progress(self),
            None => Ok(()),
        }
    }
}
