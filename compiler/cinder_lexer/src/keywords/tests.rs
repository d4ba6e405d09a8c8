use pretty_assertions::assert_eq;

use super::*;

#[test]
fn every_keyword_resolves_from_its_spelling() {
    for kw in Keyword::ALL {
        assert_eq!(lookup_keyword(kw.as_str().as_bytes()), Some(kw), "{kw}");
    }
}

#[test]
fn every_mode_resolves_from_its_spelling() {
    for mode in Mode::ALL {
        assert_eq!(lookup_mode(mode.as_str().as_bytes()), Some(mode), "{mode}");
    }
}

#[test]
fn tables_are_disjoint() {
    for mode in Mode::ALL {
        assert_eq!(lookup_keyword(mode.as_str().as_bytes()), None);
    }
    for kw in Keyword::ALL {
        assert_eq!(lookup_mode(kw.as_str().as_bytes()), None);
    }
}

#[test]
fn near_misses_are_identifiers() {
    for text in [&b"Let"[..], b"lets", b"l", b"", b"continues", b"mutable", b"_let"] {
        assert_eq!(lookup_keyword(text), None);
        assert_eq!(lookup_mode(text), None);
    }
}
