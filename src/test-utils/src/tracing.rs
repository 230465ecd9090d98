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

//! Human readable logs for tests.
//!
//! The client libraries emit one `http_request` span per request, and one
//! event per upload chunk. Tests that exercise long request sequences
//! install this subscriber so `cargo test -- --nocapture` shows them.

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::format::FmtSpan;

/// The most verbose level printed by [enable_tracing].
///
/// The `log-integration-tests` feature raises it to `DEBUG`, which includes
/// the upload progress events.
pub const MAX_LEVEL: tracing::Level = if cfg!(feature = "log-integration-tests") {
    tracing::Level::DEBUG
} else {
    tracing::Level::WARN
};

/// Installs a formatting subscriber for the current thread.
///
/// The output goes through the test harness writer, so it is only visible
/// for failed tests or with `--nocapture`. Drop the guard to uninstall it.
pub fn enable_tracing() -> DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_max_level(MAX_LEVEL)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installs_fmt_subscriber() {
        let guard = enable_tracing();
        let current = tracing::Dispatch::default();
        assert!(current.is::<tracing_subscriber::FmtSubscriber>(), "{current:?}");
        drop(guard);
        let current = tracing::Dispatch::default();
        assert!(!current.is::<tracing_subscriber::FmtSubscriber>(), "{current:?}");
    }

    #[test]
    fn level() {
        if cfg!(feature = "log-integration-tests") {
            assert_eq!(MAX_LEVEL, tracing::Level::DEBUG);
        } else {
            assert_eq!(MAX_LEVEL, tracing::Level::WARN);
        }
    }
}
