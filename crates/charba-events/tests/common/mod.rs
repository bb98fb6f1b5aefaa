//! Shared fixtures for the integration tests

#![allow(dead_code)]

use charba_events::events::{
    ChartClickEvent, ChartClickEventHandler, ChartHoverEvent, ChartHoverEventHandler,
    ChartResizeEvent, ChartResizeEventHandler, NativeEvent, SizeItem,
};
use charba_events::{EventHandler, HandlerCategory, HandlerResult, SharedHandler};
use std::cell::RefCell;
use std::rc::Rc;

/// Invocation log shared between handlers of one test
pub type Log = Rc<RefCell<Vec<String>>>;

/// The owner a manager is bound to
#[derive(Debug)]
pub struct Chart {
    pub id: &'static str,
}

/// Appends its name to the log for every chart event it receives
pub struct Recorder {
    name: &'static str,
    log: Log,
    category: HandlerCategory,
}

impl Recorder {
    pub fn internal(name: &'static str, log: &Log) -> SharedHandler {
        Rc::new(Self {
            name,
            log: Rc::clone(log),
            category: HandlerCategory::Internal,
        })
    }

    pub fn chart(name: &'static str, log: &Log) -> SharedHandler {
        Rc::new(Self {
            name,
            log: Rc::clone(log),
            category: HandlerCategory::Chart,
        })
    }

    fn record(&self) -> HandlerResult {
        self.log.borrow_mut().push(self.name.to_string());
        Ok(())
    }
}

impl ChartClickEventHandler for Recorder {
    fn on_click(&self, _event: &ChartClickEvent) -> HandlerResult {
        self.record()
    }
}

impl ChartHoverEventHandler for Recorder {
    fn on_hover(&self, _event: &ChartHoverEvent) -> HandlerResult {
        self.record()
    }
}

impl ChartResizeEventHandler for Recorder {
    fn on_resize(&self, _event: &ChartResizeEvent) -> HandlerResult {
        self.record()
    }
}

impl EventHandler for Recorder {
    fn category(&self) -> HandlerCategory {
        self.category
    }

    fn as_chart_click(&self) -> Option<&dyn ChartClickEventHandler> {
        Some(self)
    }

    fn as_chart_hover(&self) -> Option<&dyn ChartHoverEventHandler> {
        Some(self)
    }

    fn as_chart_resize(&self) -> Option<&dyn ChartResizeEventHandler> {
        Some(self)
    }
}

pub fn click() -> ChartClickEvent {
    ChartClickEvent::new(NativeEvent::new("click").expect("valid kind"))
}

pub fn hover() -> ChartHoverEvent {
    ChartHoverEvent::new(NativeEvent::new("mousemove").expect("valid kind"))
}

pub fn resize() -> ChartResizeEvent {
    ChartResizeEvent::new(
        NativeEvent::new("resize").expect("valid kind"),
        SizeItem::new(640.0, 480.0).expect("valid size"),
    )
}

pub fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}
