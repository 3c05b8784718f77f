//! Human-readable move narration.
//!
//! The engine reports every attempt and outcome as ordered text lines
//! through a `Notifier`. Notifiers are purely observational: they never
//! influence engine state, and they are passed explicitly at the call seam
//! rather than registered globally.

/// Sink for ordered human-readable lines.
pub trait Notifier {
    /// Receive one line.
    fn notify(&mut self, line: &str);
}

/// Notifier that writes to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a console notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Notifier that collects lines in memory. Test and replay sink.
#[derive(Clone, Debug, Default)]
pub struct MemoryNotifier {
    lines: Vec<String>,
}

impl MemoryNotifier {
    /// Create an empty memory notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected lines, in arrival order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drop all collected lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Notifier that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl NullNotifier {
    /// Create a null notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for NullNotifier {
    fn notify(&mut self, _line: &str) {}
}
