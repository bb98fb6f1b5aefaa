//! Dispatch driven by a loaded configuration

mod common;

use charba_config::CharbaConfig;
use charba_events::events::ChartClickEvent;
use charba_events::{EventBus, HandlerManager};
use common::{click, entries, Chart, Log, Recorder};
use std::rc::Rc;

#[test]
fn test_manager_uses_dispatch_settings() -> anyhow::Result<()> {
    let config = CharbaConfig::from_toml_str(
        r#"
[dispatch]
nested_depth_warning = 3
trace_dispatch = true
"#,
    )?;

    let chart = Rc::new(Chart { id: "configured" });
    let manager = HandlerManager::with_config(&Rc::downgrade(&chart), config.dispatch.clone());
    assert_eq!(manager.config().nested_depth_warning, 3);
    assert!(manager.config().trace_dispatch);

    let log = Log::default();
    manager.add_handler(Recorder::internal("h", &log), ChartClickEvent::type_key());
    manager.fire_event(&click())?;
    assert_eq!(entries(&log), vec!["h"]);
    Ok(())
}

#[test]
fn test_default_bus_settings() -> anyhow::Result<()> {
    let defaults = CharbaConfig::default();
    let bus = EventBus::default();
    assert_eq!(bus.config(), &defaults.dispatch);

    bus.fire_event(&click())?;
    Ok(())
}
