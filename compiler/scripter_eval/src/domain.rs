//! Per-execution state: call stack, step counter and options.

use crate::diagnostics::CallStack;
use crate::errors::{step_limit_exceeded, EvalError};

/// Call depth used when `EvalOptions` does not say otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Bounds applied to one execution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum nesting of script function calls; `None` is unlimited.
    pub max_call_depth: Option<usize>,
    /// Maximum number of statements executed; `None` is unlimited.
    pub step_limit: Option<u64>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            step_limit: None,
        }
    }
}

impl EvalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn unlimited_call_depth(mut self) -> Self {
        self.max_call_depth = None;
        self
    }

    #[must_use]
    pub fn step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }
}

/// State of one execution of a compiled program.
///
/// Reset at the start of every `CompiledProgram::evaluate`, so a domain can
/// be reused across runs.
#[derive(Debug)]
pub struct RuntimeDomain {
    pub(crate) call_stack: CallStack,
    options: EvalOptions,
    steps: u64,
}

impl Default for RuntimeDomain {
    fn default() -> Self {
        Self::new(EvalOptions::default())
    }
}

impl RuntimeDomain {
    pub fn new(options: EvalOptions) -> Self {
        RuntimeDomain {
            call_stack: CallStack::new(options.max_call_depth),
            options,
            steps: 0,
        }
    }

    pub fn options(&self) -> EvalOptions {
        self.options
    }

    /// Statements executed since the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    pub fn reset(&mut self) {
        self.call_stack.reset(self.options.max_call_depth);
        self.steps = 0;
    }

    /// Count one executed statement.
    #[inline]
    pub(crate) fn tick(&mut self) -> Result<(), EvalError> {
        self.steps = self.steps.saturating_add(1);
        match self.options.step_limit {
            Some(limit) if self.steps > limit => Err(step_limit_exceeded(limit)),
            _ => Ok(()),
        }
    }
}
