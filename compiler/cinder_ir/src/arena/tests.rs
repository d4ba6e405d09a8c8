use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_string_is_pre_interned() {
    let arena = StringArena::new();
    assert_eq!(arena.len(), 1);
    assert!(!arena.is_empty());
    assert_eq!(arena.intern(b""), Symbol::EMPTY);
    assert_eq!(arena.lookup(Symbol::EMPTY), b"");
}

#[test]
fn interning_is_idempotent() {
    let arena = StringArena::new();
    let a = arena.intern(b"Hello, world!");
    let b = arena.intern_owned(b"Hello, world!".to_vec());
    assert_eq!(a, b);
    assert_eq!(arena.len(), 2);
}

#[test]
fn distinct_bytes_get_distinct_symbols() {
    let arena = StringArena::new();
    let a = arena.intern(b"a");
    let b = arena.intern(b"b");
    assert_ne!(a, b);
    assert_eq!(arena.lookup(a), b"a");
    assert_eq!(arena.lookup(b), b"b");
}

#[test]
fn lookup_outlives_arena_borrow() {
    let arena = StringArena::new();
    let sym = arena.intern(&[0, 0xFF, b'\n']);
    let bytes: &'static [u8] = arena.lookup(sym);
    drop(arena);
    assert_eq!(bytes, &[0, 0xFF, b'\n']);
}

#[test]
fn arena_is_shareable_across_threads() {
    let arena = StringArena::new();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for i in 0..50u8 {
                    arena.intern(&[i]);
                }
            });
        }
    });
    // 50 distinct one-byte strings plus the empty string.
    assert_eq!(arena.len(), 51);
}

#[test]
fn overflow_error_message() {
    let err = ArenaError::Overflow { count: 7 };
    assert!(err.to_string().starts_with("string arena exceeded capacity: 7 strings"));
}
