//! Concrete event kinds and their handler capabilities.
//!
//! - [`chart`]: canvas click, hover and resize
//! - [`animation`]: animation progress
//! - [`legend`]: legend clicks
//! - [`lifecycle`]: add/remove handler notifications
//! - [`native`]: payload descriptors carried by the events above

pub mod animation;
pub mod chart;
pub mod legend;
pub mod lifecycle;
pub mod native;

pub use animation::{AnimationProgressEvent, AnimationProgressEventHandler};
pub use chart::{
    ChartClickEvent, ChartClickEventHandler, ChartHoverEvent, ChartHoverEventHandler,
    ChartResizeEvent, ChartResizeEventHandler,
};
pub use legend::{LegendClickEvent, LegendClickEventHandler};
pub use lifecycle::{
    AddHandlerEvent, AddHandlerEventHandler, RemoveHandlerEvent, RemoveHandlerEventHandler,
};
pub use native::{AnimationItem, LegendItem, NativeEvent, SizeItem};
