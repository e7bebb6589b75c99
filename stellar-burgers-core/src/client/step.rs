//! Named steps traced around client calls
//!
//! Every client method describes itself as a [`Step`] (operation name plus
//! arguments) and [`RequestSpec::execute`](super::RequestSpec::execute)
//! runs the call inside the step's span. What happens to the span is up to
//! whichever `tracing` subscriber the process installed.

use std::fmt::{self, Debug, Write as _};
use std::time::Instant;

use tracing::{info, info_span, warn};

use crate::domain::result::Result;

/// Operation name and rendered arguments of one client call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: &'static str,
    args: String,
}

impl Step {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            args: String::new(),
        }
    }

    /// Record an argument using its `Debug` form
    ///
    /// Fixture types redact secrets in `Debug`, so this never leaks a
    /// password into the trace.
    pub fn arg(mut self, key: &str, value: &impl Debug) -> Self {
        if !self.args.is_empty() {
            self.args.push_str(", ");
        }
        let _ = write!(self.args, "{}={:?}", key, value);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn args(&self) -> &str {
        &self.args
    }

    /// Run `call` inside this step's span and log how it ended
    pub fn run<T, F>(&self, call: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
        T: StepOutcome,
    {
        let span = info_span!("step", step = self.name, args = %self.args);
        let _entered = span.enter();
        let started = Instant::now();

        let result = call();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(value) => info!(outcome = %value.describe(), elapsed_ms, "step finished"),
            Err(e) => warn!(error = %e, elapsed_ms, "step failed"),
        }
        result
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.args)
        }
    }
}

/// Short description of a step result for the trace
pub trait StepOutcome {
    fn describe(&self) -> String;
}

impl StepOutcome for super::ResponseHandle {
    fn describe(&self) -> String {
        format!("HTTP {}", self.status_code())
    }
}

impl StepOutcome for Vec<String> {
    fn describe(&self) -> String {
        format!("{} item(s)", self.len())
    }
}
