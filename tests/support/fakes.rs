use gsurface::api::PreparedCall;
use gsurface::console::Prompter;
use gsurface::transport::{Transport, TransportError};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::io;

/// Records every call and answers with a fixed response or error.
pub struct RecordingTransport {
    calls: RefCell<Vec<PreparedCall>>,
    response: Result<Value, TransportError>,
}

impl RecordingTransport {
    /// Answers every call with `{}`.
    pub fn new() -> Self {
        Self::responding(json!({}))
    }

    pub fn responding(response: Value) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response: Ok(response),
        }
    }

    pub fn failing(code: u16, message: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response: Err(TransportError::Status {
                code,
                message: message.to_string(),
            }),
        }
    }

    pub fn calls(&self) -> Vec<PreparedCall> {
        self.calls.borrow().clone()
    }

    /// The only call made. Panics unless exactly one was made.
    pub fn single_call(&self) -> PreparedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, call: &PreparedCall) -> Result<Value, TransportError> {
        self.calls.borrow_mut().push(call.clone());
        self.response.clone()
    }
}

/// Gives a fixed answer, or behaves like a missing terminal.
pub struct ScriptedPrompter {
    answer: Option<bool>,
    pub asked: RefCell<Vec<String>>,
    pub defaults: Cell<Option<bool>>,
}

impl ScriptedPrompter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            asked: RefCell::new(Vec::new()),
            defaults: Cell::new(None),
        }
    }

    pub fn unattended() -> Self {
        Self {
            answer: None,
            asked: RefCell::new(Vec::new()),
            defaults: Cell::new(None),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn is_interactive(&self) -> bool {
        self.answer.is_some()
    }

    fn confirm(&self, message: &str, default: bool) -> io::Result<bool> {
        self.asked.borrow_mut().push(message.to_string());
        self.defaults.set(Some(default));
        self.answer
            .ok_or_else(|| io::Error::other("no terminal"))
    }
}
