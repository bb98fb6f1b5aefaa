//! # Charba Events
//!
//! Typed chart events, handler registration and synchronous dispatch.
//!
//! ## Architecture
//!
//! - [`EventType`]: validated, cheaply cloned key of an event kind
//! - [`Event`]: a fireable occurrence carrying its type and source
//! - [`EventHandler`]: capability set; typed callbacks live on per-event traits
//!   in [`events`]
//! - [`EventBus`]: registry and re-entrant dispatcher
//! - [`HandlerManager`]: per-source facade that stamps the source and emits
//!   add/remove notifications
//! - [`HandlerRegistration`]: undoes one subscription
//! - [`HandlerActivity`]: tracks which types have live chart handlers
//!
//! ## Quick Start
//!
//! ```rust
//! use charba_events::events::{ChartClickEvent, NativeEvent};
//! use charba_events::{Event, FnHandler, HandlerManager};
//! use std::rc::Rc;
//!
//! struct Chart;
//!
//! # fn main() -> Result<(), charba_events::EventError> {
//! let chart = Rc::new(Chart);
//! let manager = HandlerManager::new(&Rc::downgrade(&chart));
//!
//! let registration = manager.add_handler(
//!     FnHandler::chart(|event: &ChartClickEvent| {
//!         assert!(event.source().is_some());
//!         Ok(())
//!     })
//!     .into_shared(),
//!     ChartClickEvent::type_key(),
//! );
//!
//! manager.fire_event(&ChartClickEvent::new(NativeEvent::new("click")?))?;
//!
//! registration.remove_handler();
//! assert!(!manager.is_event_handled(ChartClickEvent::type_key()));
//! # Ok(())
//! # }
//! ```
//!
//! Everything is single-threaded: handlers are `Rc<dyn EventHandler>` and run
//! on the thread that fires.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bus;
pub mod error;
pub mod event;
pub mod event_type;
pub mod events;
pub mod handler;
pub mod handler_fn;
pub mod manager;
pub mod registration;
pub mod source;
pub mod tracker;

pub use bus::EventBus;
pub use error::{EventError, EventResult, HandlerError, HandlerResult};
pub use event::{Event, EventCore};
pub use event_type::EventType;
pub use handler::{EventHandler, HandlerCategory, SharedHandler};
pub use handler_fn::FnHandler;
pub use manager::{HandlerManager, WeakHandlerManager};
pub use registration::HandlerRegistration;
pub use source::EventSource;
pub use tracker::{HandlerActivity, TransitionCallback};
