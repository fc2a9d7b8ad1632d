//! Lexical scopes.
//!
//! Scopes of one compiled program live in a single `ScopeArena` and link to
//! their parent by index. A scope with no parent is a module root; lookups
//! that fall off the root continue in the `GlobalContext`.
//!
//! Scopes are released by truncating the arena back to a mark when a block,
//! call or execution exits. A function value remembers its declaration scope
//! as a `ScopeHandle`, whose serial number detects a slot that was released
//! and reused.

use rustc_hash::FxHashMap;

use scripter_ir::{Name, StaticSlot};

use crate::Value;

/// Kind of a lexical scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    /// Root scope of a module body or of the main program.
    Module,
    /// Created per call.
    Function,
    /// Created per `{ ... }` block and `for` header.
    Block,
}

/// Index of a scope in its program's `ScopeArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A scope reference that survives arena truncation checks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeHandle {
    id: ScopeId,
    serial: u64,
}

/// Where a name's value lives.
#[derive(Clone, Debug)]
pub(crate) enum Binding {
    Value(Value),
    /// A `static var`: the value lives in the program's static slots.
    Static(StaticSlot),
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    parent: Option<ScopeId>,
    serial: u64,
    bindings: FxHashMap<Name, Binding>,
}

/// Arena of scopes for one compiled program.
#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
    next_serial: u64,
}

impl ScopeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new empty scope.
    pub fn push(&mut self, kind: ScopeKind, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(
            u32::try_from(self.scopes.len())
                .unwrap_or_else(|_| panic!("scope arena exceeded u32::MAX scopes")),
        );
        let serial = self.next_serial;
        self.next_serial = self.next_serial.wrapping_add(1);
        self.scopes.push(Scope {
            kind,
            parent,
            serial,
            bindings: FxHashMap::default(),
        });
        id
    }

    /// Number of live scopes; doubles as a truncation mark.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Drop every scope pushed after `mark`.
    pub fn truncate(&mut self, mark: usize) {
        self.scopes.truncate(mark);
    }

    pub fn kind(&self, id: ScopeId) -> Option<ScopeKind> {
        self.scopes.get(id.index()).map(|s| s.kind)
    }

    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scopes.get(id.index()).and_then(|s| s.parent)
    }

    pub fn handle(&self, id: ScopeId) -> ScopeHandle {
        let serial = self.scopes.get(id.index()).map_or(u64::MAX, |s| s.serial);
        ScopeHandle { id, serial }
    }

    /// The scope behind `handle`, if it is still alive.
    pub fn resolve(&self, handle: ScopeHandle) -> Option<ScopeId> {
        self.scopes
            .get(handle.id.index())
            .filter(|s| s.serial == handle.serial)
            .map(|_| handle.id)
    }

    /// Bind `name` in `scope`, replacing an existing binding of that scope.
    pub(crate) fn declare(&mut self, scope: ScopeId, name: Name, binding: Binding) {
        if let Some(s) = self.scopes.get_mut(scope.index()) {
            s.bindings.insert(name, binding);
        }
    }

    /// Find the innermost scope, starting at `scope`, that binds `name`.
    pub fn find(&self, scope: ScopeId, name: Name) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let s = self.scopes.get(id.index())?;
            if s.bindings.contains_key(&name) {
                return Some(id);
            }
            current = s.parent;
        }
        None
    }

    pub(crate) fn lookup(&self, scope: ScopeId, name: Name) -> Option<Binding> {
        let id = self.find(scope, name)?;
        self.scopes.get(id.index())?.bindings.get(&name).cloned()
    }

    pub(crate) fn binding_mut(&mut self, scope: ScopeId, name: Name) -> Option<&mut Binding> {
        let id = self.find(scope, name)?;
        self.scopes.get_mut(id.index())?.bindings.get_mut(&name)
    }

    /// Binding declared directly in `scope`, without walking parents.
    pub(crate) fn local(&self, scope: ScopeId, name: Name) -> Option<&Binding> {
        self.scopes.get(scope.index())?.bindings.get(&name)
    }
}
