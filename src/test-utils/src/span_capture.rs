// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Captures the spans created while a test runs.
//!
//! # Example
//! ```
//! use google_apis_test_utils::span_capture::SpanCapture;
//! let (capture, _guard) = SpanCapture::install();
//! tracing::info_span!("http_request", answer = 42).in_scope(|| {});
//! let spans = capture.spans();
//! assert_eq!(spans[0].name, "http_request");
//! assert_eq!(spans[0].attributes.get("answer").map(String::as_str), Some("42"));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Subscriber, field, span};
use tracing_subscriber::{Layer, layer::Context, prelude::*, registry::LookupSpan};

/// A span and its attributes, formatted as strings.
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

struct Visitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for Visitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// A [Layer] recording all the spans, in creation order.
#[derive(Clone, Debug, Default)]
pub struct SpanCapture {
    spans: Arc<Mutex<Vec<(span::Id, CapturedSpan)>>>,
}

impl SpanCapture {
    /// Installs a subscriber with this layer as the default for the current
    /// thread.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    /// The spans captured so far.
    pub fn spans(&self) -> Vec<CapturedSpan> {
        match self.spans.lock() {
            Ok(guard) => guard.iter().map(|(_, s)| s.clone()).collect(),
            Err(poisoned) => poisoned
                .into_inner()
                .iter()
                .map(|(_, s)| s.clone())
                .collect(),
        }
    }

    fn update<F>(&self, id: &span::Id, f: F)
    where
        F: FnOnce(&mut CapturedSpan),
    {
        if let Ok(mut guard) = self.spans.lock() {
            if let Some((_, span)) = guard.iter_mut().rev().find(|(i, _)| i == id) {
                f(span);
            }
        }
    }
}

impl<S> Layer<S> for SpanCapture
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut Visitor(&mut attributes));
        let span = CapturedSpan {
            name: attrs.metadata().name().to_string(),
            attributes,
        };
        if let Ok(mut guard) = self.spans.lock() {
            guard.push((id.clone(), span));
        }
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        self.update(id, |span| values.record(&mut Visitor(&mut span.attributes)));
    }
}
