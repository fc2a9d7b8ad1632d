//! Scripter Eval - tree-walking evaluator for Scripter programs.
//!
//! # Architecture
//!
//! - `GlobalContext`: host-registered natives and values, module registry,
//!   print handler. Every program runs against one.
//! - `CompiledProgram`: a parsed tree plus its `static var` slots and scope
//!   arena. Evaluate it any number of times with a `RuntimeDomain`.
//! - `RuntimeDomain`: call stack, step counter and `EvalOptions` for one
//!   execution.
//! - `Value`: undefined, booleans, integers, strings and `ObjectRef` handles
//!   to anything implementing `ScriptObject` (lists, functions, host objects).
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch.
//!
//! Errors are `EvalError`s carrying an `EvalErrorKind`, a category, a span
//! and, when raised inside a call, a backtrace. Factories live in `errors`.

mod diagnostics;
mod domain;
mod environment;
pub mod errors;
mod global;
pub mod host;
mod interpreter;
mod object;
mod operators;
mod print_handler;
mod program;
mod unary_operators;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use domain::{EvalOptions, RuntimeDomain, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{ScopeArena, ScopeHandle, ScopeId, ScopeKind};
pub use errors::{
    BacktraceFrame, ControlAction, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use global::{GlobalContext, GlobalContextBuilder, ModuleExports, ModuleStatus};
pub use host::{BoolParam, StringParam};
pub use interpreter::NativeContext;
pub use object::{
    Callable, NativeFn, NativeFunction, ObjectRef, ScriptFunction, ScriptList, ScriptObject,
};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use program::CompiledProgram;
pub use unary_operators::evaluate_unary;
pub use value::Value;
