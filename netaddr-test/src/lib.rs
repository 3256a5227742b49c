//! Miscellaneous test code for netaddr.
// Standard lints
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]
// Each lazy_static variable uses additional recursion
#![recursion_limit = "256"]

use color_eyre::section::PanicMessage;
use owo_colors::OwoColorize;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use std::sync::Once;

pub mod net;
pub mod prelude;
pub mod vectors;

static INIT: Once = Once::new();

/// Frames from the test runner and panic machinery, hidden from error reports.
const HIDDEN_FRAME_PREFIXES: &[&str] = &[
    "std::panic",
    "core::panicking",
    "core::ops::function::FnOnce::call_once",
    "test::",
    "proptest::",
];

/// Initializes tracing and error reporting for netaddr tests.
///
/// Safe to call from every test: only the first call has any effect.
///
/// Logs at `warn` level unless `RUST_LOG` is set. The truncation warnings
/// from address constructors are expected in tests, so they are hidden.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn")
                .add_directive("netaddr::address=error".parse().expect("valid directive"))
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_test_writer())
            .with(ErrorLayer::default())
            .init();

        color_eyre::config::HookBuilder::default()
            .add_frame_filter(Box::new(|frames| {
                frames.retain(|frame| {
                    frame.name.as_ref().map_or(true, |name| {
                        !HIDDEN_FRAME_PREFIXES
                            .iter()
                            .any(|prefix| name.starts_with(prefix))
                    })
                });
                frames.dedup_by_key(|frame| (frame.filename.clone(), frame.lineno));
            }))
            .panic_message(TestPanicMessage)
            .install()
            .expect("error hooks are only installed once");
    })
}

/// Prints panics, but not the panics for tests that returned an `Err`.
///
/// The test runner has already printed the error in that case.
struct TestPanicMessage;

impl PanicMessage for TestPanicMessage {
    fn display(
        &self,
        info: &std::panic::PanicHookInfo<'_>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("<non string panic payload>");

        if payload.contains("the test returned a termination value with a non-zero status code") {
            return write!(f, "---- end of test output ----");
        }

        writeln!(f, "{}", "\nA netaddr test panicked.".red())?;
        writeln!(f, "Message:  {}", payload.cyan())?;

        match info.location() {
            Some(location) => write!(
                f,
                "Location: {}:{}",
                location.file().purple(),
                location.line().purple()
            ),
            None => write!(f, "Location: <unknown>"),
        }
    }
}
