//! `import { names } from "module";`

use std::rc::Rc;

use scripter_ir::{Name, NameRange};

use super::{body_result, Interpreter};
use crate::environment::{Binding, ScopeKind};
use crate::errors::{import_cycle, missing_export, undeclared_module, EvalError};
use crate::global::{ModuleExports, ModuleState};
use crate::program::Unit;

impl Interpreter<'_> {
    /// Bind the requested exports of `module` in the current scope, running
    /// the module body first if it has not been imported yet.
    pub(crate) fn exec_import(&mut self, names: NameRange, module: Name) -> Result<(), EvalError> {
        let exports = self.module_exports(module)?;
        let interner = self.global.interner();
        let unit = Rc::clone(&self.unit);
        for &name in unit.arena.get_names(names) {
            let value = exports.get(&name).cloned().ok_or_else(|| {
                missing_export(interner.lookup(module), interner.lookup(name))
            })?;
            self.declare(name, value);
        }
        Ok(())
    }

    fn module_exports(&mut self, module: Name) -> Result<Rc<ModuleExports>, EvalError> {
        match self.global.module_state(module) {
            None => Err(undeclared_module(self.global.interner().lookup(module))),
            Some(ModuleState::Importing(_)) => {
                Err(import_cycle(self.global.interner().lookup(module)))
            }
            Some(ModuleState::Imported { exports, .. }) => Ok(exports),
            Some(ModuleState::Declared(unit)) => self.run_module(module, &unit),
        }
    }

    /// Execute a module body in its own root scope and collect its exports.
    ///
    /// A failing body leaves the module `Declared`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(module = self.global.interner().lookup(module))
    )]
    fn run_module(&mut self, module: Name, unit: &Rc<Unit>) -> Result<Rc<ModuleExports>, EvalError> {
        self.global.begin_import(module, unit);
        let mark = unit.scope_mark(&self.global);
        let root = unit.scopes.borrow_mut().push(ScopeKind::Module, None);

        let outcome = Interpreter::new(Rc::clone(unit), self.global.clone(), &mut *self.domain, root)
            .exec_stmts(unit.program.body);
        if let Err(err) = body_result(outcome) {
            unit.reclaim(mark, &self.global);
            self.global.abort_import(module, unit);
            tracing::debug!(error = %err, "module body failed");
            return Err(err);
        }

        let exports: ModuleExports = {
            let scopes = unit.scopes.borrow();
            unit.program
                .exports
                .iter()
                .filter_map(|&name| {
                    let value = match scopes.local(root, name)? {
                        Binding::Value(value) => value.clone(),
                        Binding::Static(slot) => unit.read_static(*slot),
                    };
                    Some((name, value))
                })
                .collect()
        };
        for value in exports.values() {
            self.note_escape(value);
        }
        unit.reclaim(mark, &self.global);

        let exports = Rc::new(exports);
        self.global
            .finish_import(module, unit, Rc::clone(&exports));
        tracing::debug!(exports = exports.len(), "module imported");
        Ok(exports)
    }
}
