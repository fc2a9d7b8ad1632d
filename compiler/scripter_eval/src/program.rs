//! Compiled programs.
//!
//! A `CompiledProgram` pairs a parsed tree with the state that outlives a
//! single execution: the `static var` slots and the scope arena. The tree
//! is never mutated, so the same program can be evaluated any number of
//! times.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use scripter_ir::{ExprArena, Program, SharedArena, StaticSlot};

use crate::environment::{ScopeArena, ScopeKind};
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::{GlobalContext, RuntimeDomain, Value};

/// Shared state of one compiled program.
///
/// Owned by its `CompiledProgram` (and by the module registry once declared
/// as a module). Function values hold it weakly.
pub struct Unit {
    pub(crate) arena: SharedArena,
    pub(crate) program: Program,
    statics: RefCell<Vec<Option<Value>>>,
    pub(crate) scopes: RefCell<ScopeArena>,
    /// Number of function values created from this program.
    closures: Cell<u64>,
}

/// Scope arena state at the start of a block, call or execution.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ScopeMark {
    len: usize,
    closures: u64,
    escapes: u64,
}

impl Unit {
    pub(crate) fn new(program: Program, arena: ExprArena) -> Self {
        let statics = vec![None; program.static_count as usize];
        Unit {
            arena: SharedArena::new(arena),
            program,
            statics: RefCell::new(statics),
            scopes: RefCell::new(ScopeArena::new()),
            closures: Cell::new(0),
        }
    }

    /// A unit with no code, used as the caller context for host calls.
    pub(crate) fn detached() -> Self {
        Self::new(Program::default(), ExprArena::new())
    }

    pub(crate) fn read_static(&self, slot: StaticSlot) -> Value {
        self.statics
            .borrow()
            .get(slot.index())
            .cloned()
            .flatten()
            .unwrap_or_default()
    }

    pub(crate) fn write_static(&self, slot: StaticSlot, value: Value) {
        if let Some(cell) = self.statics.borrow_mut().get_mut(slot.index()) {
            *cell = Some(value);
        }
    }

    pub(crate) fn static_initialized(&self, slot: StaticSlot) -> bool {
        matches!(self.statics.borrow().get(slot.index()), Some(Some(_)))
    }

    pub(crate) fn note_closure(&self) {
        self.closures.set(self.closures.get().wrapping_add(1));
    }

    pub(crate) fn scope_mark(&self, global: &GlobalContext) -> ScopeMark {
        ScopeMark {
            len: self.scopes.borrow().len(),
            closures: self.closures.get(),
            escapes: global.escapes(),
        }
    }

    /// Release the scopes pushed since `mark`.
    ///
    /// Kept when a function value was created since the mark and a script
    /// function escaped in the same span: that function may still reach them.
    pub(crate) fn reclaim(&self, mark: ScopeMark, global: &GlobalContext) {
        let captured = self.closures.get() != mark.closures && global.escapes() != mark.escapes;
        if captured {
            tracing::trace!(scopes = self.scopes.borrow().len(), "keeping captured scopes");
            return;
        }
        self.scopes.borrow_mut().truncate(mark.len);
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("statements", &self.program.body.len())
            .field("static_count", &self.program.static_count)
            .field("scopes", &self.scopes.borrow().len())
            .finish_non_exhaustive()
    }
}

/// A parsed program ready to run against a `GlobalContext`.
#[derive(Clone, Debug)]
pub struct CompiledProgram {
    global: GlobalContext,
    pub(crate) unit: Rc<Unit>,
}

impl CompiledProgram {
    /// Wrap a parse result.
    ///
    /// The tree must have been parsed with `global`'s interner.
    pub fn new(global: &GlobalContext, program: Program, arena: ExprArena) -> Self {
        CompiledProgram {
            global: global.clone(),
            unit: Rc::new(Unit::new(program, arena)),
        }
    }

    pub(crate) fn from_unit(global: &GlobalContext, unit: Rc<Unit>) -> Self {
        CompiledProgram {
            global: global.clone(),
            unit,
        }
    }

    pub fn global(&self) -> &GlobalContext {
        &self.global
    }

    pub fn program(&self) -> &Program {
        &self.unit.program
    }

    pub fn arena(&self) -> &ExprArena {
        &self.unit.arena
    }

    /// Run the program once. Statics written by earlier runs are kept.
    ///
    /// The domain is reset first. The result is the value of a top-level
    /// `return`, or `undefined`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&self, domain: &mut RuntimeDomain) -> EvalResult {
        domain.reset();
        let mark = self.unit.scope_mark(&self.global);
        let root = self.unit.scopes.borrow_mut().push(ScopeKind::Module, None);

        let result =
            Interpreter::new(Rc::clone(&self.unit), self.global.clone(), domain, root).run_body();
        if let Ok(value) = &result {
            self.global.note_escape(value);
        }

        self.unit.reclaim(mark, &self.global);
        tracing::debug!(steps = domain.steps(), ok = result.is_ok(), "execution finished");
        result
    }

    /// Evaluate with a fresh default `RuntimeDomain`.
    pub fn run(&self) -> EvalResult {
        self.evaluate(&mut RuntimeDomain::default())
    }
}
