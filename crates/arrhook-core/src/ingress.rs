//! Ingress: one webhook delivery from body to status code.
//!
//! ```text
//! body ──▶ extract_event_type ──▶ Dispatcher::dispatch ──▶ 200
//!   │              │                       │
//!   └──────────────┴───── error ───────────┴──▶ ErrorPolicy ──▶ status
//! ```
//!
//! Reading the body is the host's business; [`Dispatcher::process`] takes the
//! outcome of that read so transport failures go through the same policy as
//! decode failures. The payload travels as an argument through every step.

use std::io::Read;

use tracing::debug;

use crate::foundation::{BoxError, WebhookError, extract_event_type};
use crate::framework::dispatcher::Dispatcher;
use crate::framework::policy::STATUS_OK;

/// Outcome of processing one delivery.
#[derive(Debug)]
pub enum DispatchOutcome<'a> {
    /// The event was routed and, if subscribed, handled.
    Delivered,
    /// Processing failed.
    Failed {
        /// The raw payload, absent when the body could not be read.
        payload: Option<&'a [u8]>,
        /// What went wrong.
        error: WebhookError,
    },
}

impl DispatchOutcome<'_> {
    /// Returns whether the delivery succeeded.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Returns the error of a failed delivery.
    pub fn error(&self) -> Option<&WebhookError> {
        match self {
            Self::Delivered => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

impl Dispatcher {
    /// Processes one delivery without resolving a status.
    pub fn process<'a>(&self, body: Result<&'a [u8], BoxError>) -> DispatchOutcome<'a> {
        let payload = match body {
            Ok(payload) => payload,
            Err(err) => {
                return DispatchOutcome::Failed {
                    payload: None,
                    error: WebhookError::ReadBody(err),
                };
            }
        };

        let event_type = match extract_event_type(payload) {
            Ok(event_type) => event_type,
            Err(error) => {
                return DispatchOutcome::Failed {
                    payload: Some(payload),
                    error,
                };
            }
        };

        match self.dispatch(&event_type, payload) {
            Ok(()) => {
                debug!(event_type = %event_type, len = payload.len(), "Dispatched webhook event");
                DispatchOutcome::Delivered
            }
            Err(source) => DispatchOutcome::Failed {
                payload: Some(payload),
                error: WebhookError::dispatch(event_type, source),
            },
        }
    }

    /// Processes one delivery and returns the HTTP status to respond with.
    ///
    /// Success is always 200; failures are resolved by the [`ErrorPolicy`].
    ///
    /// [`ErrorPolicy`]: crate::ErrorPolicy
    pub fn receive(&self, body: Result<&[u8], BoxError>) -> u16 {
        match self.process(body) {
            DispatchOutcome::Delivered => STATUS_OK,
            DispatchOutcome::Failed { payload, error } => self.policy().resolve(payload, &error),
        }
    }

    /// Reads the whole body from `reader`, then behaves like [`receive`].
    ///
    /// No size limit is applied; bound the reader if one is needed.
    ///
    /// [`receive`]: Dispatcher::receive
    pub fn receive_from<R: Read>(&self, mut reader: R) -> u16 {
        let mut body = Vec::new();
        match reader.read_to_end(&mut body) {
            Ok(_) => self.receive(Ok(&body)),
            Err(err) => self.receive(Err(err.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, WebhookEvent};
    use serde::Deserialize;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct TestEvent {
        event_type: String,
    }

    impl WebhookEvent for TestEvent {
        const EVENT_TYPE: &'static str = "Test";
    }

    #[derive(Debug, Deserialize)]
    struct GrabEvent {
        #[allow(dead_code)]
        episodes: Vec<u32>,
    }

    impl WebhookEvent for GrabEvent {
        const EVENT_TYPE: &'static str = "Grab";
    }

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let buf = self.0.lock().unwrap();
            String::from_utf8_lossy(&buf)
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_captured_errors<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::ERROR)
            .with_ansi(false)
            .with_writer(captured.clone())
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, captured.lines())
    }

    fn read_error() -> BoxError {
        io::Error::new(io::ErrorKind::ConnectionReset, "peer went away").into()
    }

    #[test]
    fn test_test_event_scenario() {
        let names = Arc::new(Mutex::new(Vec::new()));
        let record = Arc::clone(&names);
        let dispatcher = Dispatcher::builder()
            .on(move |event: TestEvent| {
                assert_eq!(event.event_type, "Test");
                record.lock().unwrap().push(event.event_name());
            })
            .build();

        let status = dispatcher.receive(Ok(br#"{"eventType":"Test"}"#));

        assert_eq!(status, 200);
        assert_eq!(*names.lock().unwrap(), ["Test"]);
    }

    #[test]
    fn test_malformed_body_default_and_caller_status() {
        let dispatcher = Dispatcher::builder().known::<TestEvent>().build();
        assert_eq!(dispatcher.receive(Ok(b"not json")), 400);

        let payloads = Arc::new(Mutex::new(Vec::new()));
        let record = Arc::clone(&payloads);
        let dispatcher = Dispatcher::builder()
            .on_error(move |payload, err| {
                assert_eq!(err.kind(), ErrorKind::EventType);
                record.lock().unwrap().push(payload.map(<[u8]>::to_vec));
                422
            })
            .build();

        assert_eq!(dispatcher.receive(Ok(b"not json")), 422);
        assert_eq!(*payloads.lock().unwrap(), [Some(b"not json".to_vec())]);
    }

    #[test]
    fn test_variant_decode_failure_scenario() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let dispatcher = Dispatcher::builder()
            .on(move |_: GrabEvent| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        let body = br#"{"eventType":"Grab","episodes":"not-an-array"}"#;
        let outcome = dispatcher.process(Ok(body));

        let Some(err) = outcome.error() else {
            panic!("expected a failure");
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.event_type(), Some("Grab"));
        assert!(matches!(outcome, DispatchOutcome::Failed { payload: Some(p), .. } if p == body));
        assert_eq!(dispatcher.receive(Ok(body)), 400);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_read_failure_has_no_payload() {
        let saw_payload = Arc::new(Mutex::new(None));
        let record = Arc::clone(&saw_payload);
        let dispatcher = Dispatcher::builder()
            .on_error(move |payload, err| {
                *record.lock().unwrap() = Some(payload.is_some());
                assert_eq!(err.kind(), ErrorKind::Read);
                503
            })
            .build();

        assert_eq!(dispatcher.receive(Err(read_error())), 503);
        assert_eq!(*saw_payload.lock().unwrap(), Some(false));
    }

    #[test]
    fn test_caller_status_overrides_every_error_kind() {
        let dispatcher = Dispatcher::builder()
            .on(|_: GrabEvent| {})
            .on_unknown(|_, _| {})
            .on_error(|_, _| 599)
            .build();

        assert_eq!(dispatcher.receive(Err(read_error())), 599);
        assert_eq!(dispatcher.receive(Ok(b"{")), 599);
        assert_eq!(dispatcher.receive(Ok(br#"{"eventType":"Grab"}"#)), 599);
        // Unknown kinds are still delivered.
        assert_eq!(dispatcher.receive(Ok(br#"{"eventType":"Other"}"#)), 200);
    }

    #[test]
    fn test_logging_emits_one_entry_per_failure() {
        let dispatcher = Dispatcher::builder()
            .on(|_: GrabEvent| {})
            .log_on_error(true)
            .build();

        let (statuses, lines) = with_captured_errors(|| {
            [
                dispatcher.receive(Err(read_error())),
                dispatcher.receive(Ok(b"not json")),
                dispatcher.receive(Ok(br#"{"eventType":"Grab","episodes":"x"}"#)),
                dispatcher.receive(Ok(br#"{"eventType":"Test"}"#)),
            ]
        });

        assert_eq!(statuses, [400, 400, 400, 200]);
        assert_eq!(lines.len(), 3, "{lines:#?}");
        assert!(lines[0].contains("peer went away"));
        assert!(lines[1].contains("not json"));
        assert!(lines[1].contains("failed to parse event type"));
        assert!(lines[2].contains(r#"payload={"eventType":"Grab","episodes":"x"}"#));
        assert!(lines[2].contains("failed to decode 'Grab' event"));
    }

    #[test]
    fn test_logging_disabled_emits_nothing() {
        let dispatcher = Dispatcher::builder()
            .on_error(|_, _| 500)
            .log_on_error(false)
            .build();

        let (status, lines) = with_captured_errors(|| dispatcher.receive(Ok(b"not json")));

        assert_eq!(status, 500);
        assert!(lines.is_empty(), "{lines:#?}");
    }

    #[test]
    fn test_logging_with_caller_status() {
        let dispatcher = Dispatcher::builder()
            .on_error(|_, _| 418)
            .log_on_error(true)
            .build();

        let (status, lines) = with_captured_errors(|| dispatcher.receive(Ok(b"not json")));

        assert_eq!(status, 418);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("status=418"));
    }

    #[test]
    fn test_receive_from_reader() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("broken pipe"))
            }
        }

        let dispatcher = Dispatcher::builder()
            .on_error(|payload, err| {
                if payload.is_none() && err.kind() == ErrorKind::Read {
                    499
                } else {
                    400
                }
            })
            .build();

        assert_eq!(dispatcher.receive_from(&br#"{"eventType":"Test"}"#[..]), 200);
        assert_eq!(dispatcher.receive_from(Broken), 499);
    }

    #[test]
    fn test_concurrent_requests_do_not_share_payloads() {
        #[derive(Debug, Deserialize)]
        struct CountEvent {
            n: usize,
        }

        impl WebhookEvent for CountEvent {
            const EVENT_TYPE: &'static str = "Count";
        }

        let seen = Arc::new(Mutex::new(Vec::new()));
        let record = Arc::clone(&seen);
        let dispatcher = Arc::new(
            Dispatcher::builder()
                .on(move |event: CountEvent| record.lock().unwrap().push(event.n))
                .build(),
        );

        std::thread::scope(|scope| {
            for n in 0..32 {
                let dispatcher = Arc::clone(&dispatcher);
                scope.spawn(move || {
                    let body = format!(r#"{{"eventType":"Count","n":{n}}}"#);
                    assert_eq!(dispatcher.receive(Ok(body.as_bytes())), 200);
                });
            }
        });

        let mut seen = seen.lock().unwrap().clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..32).collect::<Vec<_>>());
    }
}
