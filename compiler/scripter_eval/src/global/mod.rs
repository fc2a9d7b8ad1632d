//! The global context.
//!
//! Outermost lexical context of every program: holds host-registered values
//! (native functions, host objects) and the module registry. Scripts can
//! read globals but never assign them.
//!
//! `GlobalContext` is a cheap `Rc` handle. Registries are scoped to it, so
//! two contexts never see each other's natives or modules.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use scripter_ir::{Name, SharedInterner, Span, StringInterner};

use crate::environment::{ScopeId, ScopeKind};
use crate::errors::EvalResult;
use crate::interpreter::{Interpreter, NativeContext};
use crate::object::{Callable, NativeFunction};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::program::Unit;
use crate::{CompiledProgram, RuntimeDomain, Value};

/// Exported names of an imported module, read at the end of its body.
pub type ModuleExports = FxHashMap<Name, Value>;

#[derive(Clone)]
pub(crate) enum ModuleState {
    Declared(Rc<Unit>),
    /// Body is running; importing it again is a cycle.
    Importing(Rc<Unit>),
    Imported {
        unit: Rc<Unit>,
        exports: Rc<ModuleExports>,
    },
}

impl ModuleState {
    fn unit(&self) -> &Rc<Unit> {
        match self {
            ModuleState::Declared(unit)
            | ModuleState::Importing(unit)
            | ModuleState::Imported { unit, .. } => unit,
        }
    }

    fn is_importing(&self, unit: &Rc<Unit>) -> bool {
        matches!(self, ModuleState::Importing(current) if Rc::ptr_eq(current, unit))
    }
}

/// Public view of a module's state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ModuleStatus {
    Undeclared,
    Declared,
    Importing,
    Imported,
}

struct GlobalState {
    interner: SharedInterner,
    values: RefCell<FxHashMap<Name, Value>>,
    modules: RefCell<FxHashMap<Name, ModuleState>>,
    print_handler: SharedPrintHandler,
    /// Bumped whenever a script function may outlive the scope it was made in.
    escapes: Cell<u64>,
    /// Caller context for host-initiated calls.
    host_unit: Rc<Unit>,
    host_scope: ScopeId,
}

/// Handle to the global context.
#[derive(Clone)]
pub struct GlobalContext(Rc<GlobalState>);

impl GlobalContext {
    /// A context printing to stdout, with builtins registered.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> GlobalContextBuilder {
        GlobalContextBuilder::default()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.0.interner
    }

    pub fn shared_interner(&self) -> SharedInterner {
        self.0.interner.clone()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.0.print_handler
    }

    /// Output captured by a buffer print handler.
    pub fn print_output(&self) -> String {
        self.0.print_handler.get_output()
    }

    /// Register a native function with no arity check.
    pub fn register_function(
        &self,
        name: &str,
        f: impl Fn(&mut NativeContext<'_, '_>, &[Value]) -> EvalResult + 'static,
    ) {
        self.register_native(NativeFunction::new(name, f));
    }

    /// Register a native function under its own name.
    pub fn register_native(&self, native: NativeFunction) {
        let name = self.interner().intern(native.name());
        self.0
            .values
            .borrow_mut()
            .insert(name, Value::object(native));
    }

    /// Register any value, typically a host object.
    pub fn register_value(&self, name: &str, value: Value) {
        let name = self.interner().intern(name);
        self.0.values.borrow_mut().insert(name, value);
    }

    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.0.values.borrow().get(&name).cloned()
    }

    pub fn get_value(&self, name: &str) -> Option<Value> {
        self.interner().get(name).and_then(|n| self.lookup(n))
    }

    pub fn contains(&self, name: Name) -> bool {
        self.0.values.borrow().contains_key(&name)
    }

    /// Declare (or redeclare) a module.
    ///
    /// Last write wins: redeclaring an imported module makes the next import
    /// run the new program.
    pub fn declare_module(&self, name: &str, program: &CompiledProgram) {
        let key = self.interner().intern(name);
        self.0
            .modules
            .borrow_mut()
            .insert(key, ModuleState::Declared(Rc::clone(&program.unit)));
        tracing::debug!(module = name, "module declared");
    }

    pub fn module_status(&self, name: &str) -> ModuleStatus {
        let state = self
            .interner()
            .get(name)
            .and_then(|key| self.module_state(key));
        match state {
            None => ModuleStatus::Undeclared,
            Some(ModuleState::Declared(_)) => ModuleStatus::Declared,
            Some(ModuleState::Importing(_)) => ModuleStatus::Importing,
            Some(ModuleState::Imported { .. }) => ModuleStatus::Imported,
        }
    }

    /// The program currently declared under `name`, in any state.
    pub fn module_program(&self, name: &str) -> Option<CompiledProgram> {
        let state = self.module_state(self.interner().get(name)?)?;
        Some(CompiledProgram::from_unit(self, Rc::clone(state.unit())))
    }

    /// Call a script or native function from host code.
    ///
    /// Runs in a fresh `RuntimeDomain`; natives called this way see only
    /// global variables.
    pub fn call_function(&self, func: &Value, args: &[Value]) -> EvalResult {
        let mut domain = RuntimeDomain::default();
        let host_unit = Rc::clone(&self.0.host_unit);
        Interpreter::new(host_unit, self.clone(), &mut domain, self.0.host_scope).call_value(
            func,
            args,
            Span::DUMMY,
        )
    }

    pub(crate) fn module_state(&self, name: Name) -> Option<ModuleState> {
        self.0.modules.borrow().get(&name).cloned()
    }

    pub(crate) fn begin_import(&self, name: Name, unit: &Rc<Unit>) {
        self.0
            .modules
            .borrow_mut()
            .insert(name, ModuleState::Importing(Rc::clone(unit)));
    }

    /// Cache the exports, unless the module was redeclared meanwhile.
    pub(crate) fn finish_import(&self, name: Name, unit: &Rc<Unit>, exports: Rc<ModuleExports>) {
        let mut modules = self.0.modules.borrow_mut();
        if let Some(state) = modules.get_mut(&name) {
            if state.is_importing(unit) {
                *state = ModuleState::Imported {
                    unit: Rc::clone(unit),
                    exports,
                };
            }
        }
    }

    /// Return a failed module to `Declared`.
    pub(crate) fn abort_import(&self, name: Name, unit: &Rc<Unit>) {
        let mut modules = self.0.modules.borrow_mut();
        if let Some(state) = modules.get_mut(&name) {
            if state.is_importing(unit) {
                *state = ModuleState::Declared(Rc::clone(unit));
            }
        }
    }

    /// Record that `value` may outlive the scope that produced it.
    ///
    /// Only script functions count: they are the values that hold scopes.
    /// Containers are covered because storing a function into one passes
    /// through here too.
    #[inline]
    pub(crate) fn note_escape(&self, value: &Value) {
        let holds_scope = value
            .as_object()
            .and_then(|obj| obj.callable())
            .is_some_and(|callable| matches!(callable, Callable::Script(_)));
        if holds_scope {
            self.0.escapes.set(self.0.escapes.get().wrapping_add(1));
        }
    }

    pub(crate) fn escapes(&self) -> u64 {
        self.0.escapes.get()
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GlobalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalContext")
            .field("values", &self.0.values.borrow().len())
            .field("modules", &self.0.modules.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Builder for `GlobalContext`.
pub struct GlobalContextBuilder {
    interner: Option<SharedInterner>,
    print_handler: Option<SharedPrintHandler>,
    builtins: bool,
}

impl Default for GlobalContextBuilder {
    fn default() -> Self {
        GlobalContextBuilder {
            interner: None,
            print_handler: None,
            builtins: true,
        }
    }
}

impl GlobalContextBuilder {
    /// Share an existing interner instead of creating one.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Do not register `print`.
    #[must_use]
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    pub fn build(self) -> GlobalContext {
        let host_unit = Rc::new(Unit::detached());
        let host_scope = host_unit.scopes.borrow_mut().push(ScopeKind::Module, None);
        let global = GlobalContext(Rc::new(GlobalState {
            interner: self.interner.unwrap_or_default(),
            values: RefCell::new(FxHashMap::default()),
            modules: RefCell::new(FxHashMap::default()),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            escapes: Cell::new(0),
            host_unit,
            host_scope,
        }));
        if self.builtins {
            register_builtins(&global);
        }
        global
    }
}

/// `print(a, b, ...)`: prints the arguments separated by spaces.
fn register_builtins(global: &GlobalContext) {
    global.register_function("print", |ctx, args| {
        let line = args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        ctx.global().print_handler().println(&line);
        Ok(Value::Undefined)
    });
}
