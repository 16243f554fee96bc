//! Sinks for the diagnostic lines produced by subset checks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Receives one human-readable line per discrepancy.
///
/// Each call carries a whole line, so a sink shared between threads never
/// sees a partial message. Line order across threads is unspecified.
pub trait Report: Sync {
    fn line(&self, message: String);
}

impl<F> Report for F
where
    F: Fn(String) + Sync,
{
    fn line(&self, message: String) {
        self(message)
    }
}

/// Drops every line. For callers that only need the verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Report for Silent {
    fn line(&self, _message: String) {}
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct DiagnosticBuffer {
    lines: Mutex<Vec<String>>,
}

impl DiagnosticBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any collected line contains `fragment`.
    pub fn mentions(&self, fragment: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|line| line.contains(fragment))
    }
}

impl Report for DiagnosticBuffer {
    fn line(&self, message: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}

/// Forwards lines over a channel so a consumer can print them as they arrive.
#[derive(Debug, Clone)]
pub struct ChannelReport {
    sender: Sender<String>,
}

impl ChannelReport {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }

    pub fn channel() -> (Self, Receiver<String>) {
        let (sender, receiver) = unbounded();
        (Self::new(sender), receiver)
    }
}

impl Report for ChannelReport {
    fn line(&self, message: String) {
        // A dropped receiver means nobody is listening any more.
        let _ = self.sender.send(message);
    }
}

/// Prefixes every line with the context it was produced in, e.g.
/// `In fortress #4: ...`.
pub struct Scoped<'a> {
    parent: &'a dyn Report,
    prefix: String,
}

impl<'a> Scoped<'a> {
    pub fn new(parent: &'a dyn Report, prefix: impl Into<String>) -> Self {
        Self {
            parent,
            prefix: prefix.into(),
        }
    }
}

impl Report for Scoped<'_> {
    fn line(&self, message: String) {
        self.parent.line(format!("{}: {}", self.prefix, message));
    }
}

/// Passes lines through while counting them.
pub struct Counted<'a> {
    inner: &'a dyn Report,
    count: AtomicUsize,
}

impl<'a> Counted<'a> {
    pub fn new(inner: &'a dyn Report) -> Self {
        Self {
            inner,
            count: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl Report for Counted<'_> {
    fn line(&self, message: String) {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.inner.line(message);
    }
}
