//! Long-lived byte-string arena.
//!
//! String literal payloads outlive the scanner that produced them, so they
//! are interned here and referenced from tokens by [`Symbol`]. Interned bytes
//! are leaked to obtain `'static` slices and are never freed; the arena lives
//! as long as the compilation session.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Handle to bytes interned in a [`StringArena`].
///
/// Symbols from the same arena compare equal iff their bytes are equal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct Symbol(u32);

impl Symbol {
    /// Symbol of the empty byte string, pre-interned in every arena.
    pub const EMPTY: Symbol = Symbol(0);

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Error when interning fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArenaError::Overflow { count } => write!(
                f,
                "string arena exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for ArenaError {}

struct ArenaInner {
    map: FxHashMap<&'static [u8], u32>,
    strings: Vec<&'static [u8]>,
}

/// Interning arena for string literal contents.
///
/// # Thread Safety
/// A single `RwLock` guards the table, so the arena can be shared behind `&`
/// by the driver while a scanner writes into it.
pub struct StringArena {
    inner: RwLock<ArenaInner>,
}

impl StringArena {
    pub fn new() -> Self {
        let empty: &'static [u8] = b"";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringArena {
            inner: RwLock::new(ArenaInner {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Try to intern `bytes`, returning an error on overflow.
    pub fn try_intern(&self, bytes: &[u8]) -> Result<Symbol, ArenaError> {
        if let Some(sym) = self.find(bytes) {
            return Ok(sym);
        }
        self.insert(bytes.to_vec())
    }

    /// Try to intern an owned buffer without copying it again.
    pub fn try_intern_owned(&self, bytes: Vec<u8>) -> Result<Symbol, ArenaError> {
        if let Some(sym) = self.find(&bytes) {
            return Ok(sym);
        }
        self.insert(bytes)
    }

    /// Intern `bytes`.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` strings. Use `try_intern` for
    /// fallible interning.
    #[inline]
    pub fn intern(&self, bytes: &[u8]) -> Symbol {
        self.try_intern(bytes).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Intern an owned buffer.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` strings.
    #[inline]
    pub fn intern_owned(&self, bytes: Vec<u8>) -> Symbol {
        self.try_intern_owned(bytes)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Bytes behind `sym`.
    ///
    /// # Panics
    /// Panics if `sym` was produced by a different arena and is out of range.
    pub fn lookup(&self, sym: Symbol) -> &'static [u8] {
        self.inner.read().strings[sym.0 as usize]
    }

    /// Number of interned strings, the pre-interned empty string included.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Always `false`: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.inner.read().strings.is_empty()
    }

    #[inline]
    fn find(&self, bytes: &[u8]) -> Option<Symbol> {
        self.inner.read().map.get(bytes).copied().map(Symbol)
    }

    fn insert(&self, bytes: Vec<u8>) -> Result<Symbol, ArenaError> {
        let mut guard = self.inner.write();

        // Double-check after acquiring the write lock.
        if let Some(&idx) = guard.map.get(bytes.as_slice()) {
            return Ok(Symbol(idx));
        }

        let idx = u32::try_from(guard.strings.len()).map_err(|_| ArenaError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);
        Ok(Symbol(idx))
    }
}

impl Default for StringArena {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringArena")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
