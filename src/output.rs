//! Report output sinks.
//!
//! The runner writes its report one line at a time through an
//! [`OutputSink`], so tests can capture exact report text instead of
//! scraping stdout.

use std::cell::RefCell;
use std::rc::Rc;

pub trait OutputSink {
    fn emit(&mut self, line: &str);
}

/// Writes report lines to stdout.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Collects report lines into a string for programmatic capture.
#[derive(Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        OutputBuffer::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, line: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
    }
}

/// Cloneable handle to a shared [`OutputBuffer`], for reading captured
/// output back after the runner has taken ownership of the sink.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<OutputBuffer>>);

impl SharedBuffer {
    pub fn new() -> Self {
        SharedBuffer::default()
    }

    pub fn contents(&self) -> String {
        self.0.borrow().as_str().to_string()
    }
}

impl OutputSink for SharedBuffer {
    fn emit(&mut self, line: &str) {
        self.0.borrow_mut().emit(line);
    }
}
