//! The local symbol table.
//! 局部符号表。

use std::collections::HashMap;

use serde::Serialize;

/// Handle to an entry in a [`SymbolTable`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// A named entry and the source lines that mention it.
#[derive(Debug, Clone)]
pub struct SymbolEntry {
    pub name: String,
    pub lines: Vec<u32>,
}

/// One scope of names. Entering a name that is already present returns the
/// existing id, so repeated entries for the same name are stable.
#[derive(Debug, Default)]
pub struct SymbolTable {
    ids: HashMap<String, SymbolId>,
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `name` into the local scope and return its id.
    /// 将 `name` 加入局部作用域并返回其 id。
    pub fn enter_local(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = SymbolId(self.entries.len() as u32);
        self.entries.push(SymbolEntry {
            name: name.to_owned(),
            lines: Vec::new(),
        });
        self.ids.insert(name.to_owned(), id);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.ids.get(name).copied()
    }

    /// Get the name an id was entered with.
    pub fn name(&self, id: SymbolId) -> &str {
        &self.entries[id.0 as usize].name
    }

    pub fn entry(&self, id: SymbolId) -> &SymbolEntry {
        &self.entries[id.0 as usize]
    }

    /// Record that `id` is referenced on `line`.
    pub fn append_line(&mut self, id: SymbolId, line: u32) {
        let lines = &mut self.entries[id.0 as usize].lines;
        if lines.last() != Some(&line) {
            lines.push(line);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were entered, which is id order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &SymbolEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (SymbolId(i as u32), e))
    }

    /// Entries sorted by name, the order cross-reference listings use.
    pub fn sorted_entries(&self) -> Vec<(SymbolId, &SymbolEntry)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        entries
    }
}
