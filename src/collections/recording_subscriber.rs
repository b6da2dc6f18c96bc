//! `tracing` subscriber that records emitted events for assertions in tests.

use std::{
  fmt,
  sync::{Arc, Mutex, PoisonError},
};

use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
};

#[derive(Clone, Default)]
pub(crate) struct RecordingSubscriber {
  events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
  pub(crate) fn events(&self) -> Vec<CapturedEvent> {
    self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _: &Id, _: &Record<'_>) {}

  fn record_follows_from(&self, _: &Id, _: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let metadata = event.metadata();
    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);
    let captured = CapturedEvent {
      level:     *metadata.level(),
      target:    metadata.target().to_owned(),
      message:   visitor.message.unwrap_or_default(),
      operation: visitor.operation,
      len:       visitor.len,
    };
    self.events.lock().unwrap_or_else(PoisonError::into_inner).push(captured);
  }

  fn enter(&self, _: &Id) {}

  fn exit(&self, _: &Id) {}
}

#[derive(Clone, Debug)]
pub(crate) struct CapturedEvent {
  pub(crate) level:     Level,
  pub(crate) target:    String,
  pub(crate) message:   String,
  pub(crate) operation: Option<String>,
  pub(crate) len:       Option<u64>,
}

#[derive(Default)]
struct EventVisitor {
  message:   Option<String>,
  operation: Option<String>,
  len:       Option<u64>,
}

impl Visit for EventVisitor {
  fn record_str(&mut self, field: &Field, value: &str) {
    match field.name() {
      | "message" => self.message = Some(value.to_owned()),
      | "operation" => self.operation = Some(value.to_owned()),
      | _ => {},
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "len" {
      self.len = Some(value);
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
    if field.name() == "message" && self.message.is_none() {
      self.message = Some(format_value(value));
    } else if field.name() == "operation" && self.operation.is_none() {
      self.operation = Some(format_value(value));
    }
  }
}

fn format_value(value: &dyn fmt::Debug) -> String {
  let rendered = format!("{value:?}");
  rendered.trim_matches('"').to_owned()
}
