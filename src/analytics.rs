//! Event tracking for discrete player actions.
//!
//! The game reports what happened; trackers decide where it goes. A tracker
//! never fails the game: write errors are logged and dropped.

use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub const CATEGORY_GAMEPLAY: &str = "gameplay";
pub const CATEGORY_ENGAGEMENT: &str = "engagement";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
            category: None,
            label: None,
            value: None,
        }
    }

    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    #[must_use]
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    #[must_use]
    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

pub trait EventTracker {
    fn track(&mut self, event: &AnalyticsEvent);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullTracker;

impl EventTracker for NullTracker {
    fn track(&mut self, _event: &AnalyticsEvent) {}
}

/// Writes events to the `analytics` log target.
#[derive(Debug, Default)]
pub struct LogTracker;

impl EventTracker for LogTracker {
    fn track(&mut self, event: &AnalyticsEvent) {
        log::info!(
            target: "analytics",
            "action={} category={} label={} value={}",
            event.action,
            event.category.as_deref().unwrap_or("-"),
            event.label.as_deref().unwrap_or("-"),
            event.value.map_or_else(|| "-".to_string(), |v| v.to_string()),
        );
    }
}

/// Appends one JSON object per event to a file.
pub struct JsonLinesTracker<W: Write> {
    writer: W,
}

impl JsonLinesTracker<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> JsonLinesTracker<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &AnalyticsEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> EventTracker for JsonLinesTracker<W> {
    fn track(&mut self, event: &AnalyticsEvent) {
        if let Err(e) = self.write_event(event) {
            log::warn!("Dropping analytics event '{}': {}", event.action, e);
        }
    }
}

/// Keeps events in memory.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    pub events: Vec<AnalyticsEvent>,
}

impl RecordingTracker {
    pub fn actions(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.action.as_str()).collect()
    }
}

impl EventTracker for RecordingTracker {
    fn track(&mut self, event: &AnalyticsEvent) {
        self.events.push(event.clone());
    }
}
