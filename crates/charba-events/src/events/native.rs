//! Payload descriptors handed over by the chart and DOM collaborators.
//!
//! The core only validates these at construction; it never interprets them.

use crate::error::{EventError, EventResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Opaque wrapper of a native (browser) event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeEvent {
    kind: String,
    #[serde(default)]
    detail: JsonValue,
}

impl NativeEvent {
    /// Wrap a native event of the given DOM kind (`click`, `mousemove`, ...)
    pub fn new(kind: impl Into<String>) -> EventResult<Self> {
        let kind = kind.into();
        if kind.trim().is_empty() {
            return Err(EventError::invalid_argument(
                "native_event",
                "kind must not be empty",
            ));
        }
        Ok(Self {
            kind,
            detail: JsonValue::Null,
        })
    }

    /// Attach the marshaled native properties
    pub fn with_detail(mut self, detail: JsonValue) -> Self {
        self.detail = detail;
        self
    }

    /// DOM event kind
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Marshaled native properties
    pub fn detail(&self) -> &JsonValue {
        &self.detail
    }

    /// Pointer x coordinate relative to the canvas, when present
    pub fn offset_x(&self) -> Option<f64> {
        self.detail.get("offsetX").and_then(JsonValue::as_f64)
    }

    /// Pointer y coordinate relative to the canvas, when present
    pub fn offset_y(&self) -> Option<f64> {
        self.detail.get("offsetY").and_then(JsonValue::as_f64)
    }
}

/// Progress of a chart animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationItem {
    current_step: f64,
    num_steps: f64,
}

impl AnimationItem {
    /// Create an animation descriptor.
    ///
    /// `num_steps` must be positive and `current_step` within `0..=num_steps`.
    pub fn new(current_step: f64, num_steps: f64) -> EventResult<Self> {
        if !num_steps.is_finite() || num_steps <= 0.0 {
            return Err(EventError::invalid_argument(
                "animation_item",
                format!("num_steps must be positive, got {num_steps}"),
            ));
        }
        if !current_step.is_finite() || current_step < 0.0 || current_step > num_steps {
            return Err(EventError::invalid_argument(
                "animation_item",
                format!("current_step {current_step} outside 0..={num_steps}"),
            ));
        }
        Ok(Self {
            current_step,
            num_steps,
        })
    }

    /// Current animation step
    pub fn current_step(&self) -> f64 {
        self.current_step
    }

    /// Total animation steps
    pub fn num_steps(&self) -> f64 {
        self.num_steps
    }

    /// Completion ratio in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        self.current_step / self.num_steps
    }
}

/// Legend entry that was interacted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendItem {
    dataset_index: usize,
    text: String,
    hidden: bool,
}

impl LegendItem {
    /// Create a legend entry for a dataset
    pub fn new(dataset_index: usize, text: impl Into<String>) -> Self {
        Self {
            dataset_index,
            text: text.into(),
            hidden: false,
        }
    }

    /// Mark the dataset as hidden
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Index of the dataset
    pub fn dataset_index(&self) -> usize {
        self.dataset_index
    }

    /// Label text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the dataset is hidden
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// New size of a resized chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeItem {
    width: f64,
    height: f64,
}

impl SizeItem {
    /// Create a size, rejecting negative or non-finite dimensions
    pub fn new(width: f64, height: f64) -> EventResult<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(EventError::invalid_argument(
                    "size_item",
                    format!("{name} must be a non-negative number, got {value}"),
                ));
            }
        }
        Ok(Self { width, height })
    }

    /// Width in pixels
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> f64 {
        self.height
    }
}
