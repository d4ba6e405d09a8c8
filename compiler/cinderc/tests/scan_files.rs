//! End-to-end scans of files on disk through the public driver API.

use std::fs;

use cinder_diagnostic::emitter::{ColorMode, TerminalEmitter};
use cinder_diagnostic::ErrorCode;
use cinder_ir::{Keyword, TokenKind};
use cinderc::commands::lex;
use cinderc::{CompileError, Compiler, CompilerConfig};
use pretty_assertions::assert_eq;

fn write_source(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Err(e) = fs::write(&path, contents) {
        panic!("write {}: {e}", path.display());
    }
    path
}

fn temp_dir() -> tempfile::TempDir {
    match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("tempdir: {e}"),
    }
}

#[test]
fn multi_line_string_file() {
    let dir = temp_dir();
    let path = write_source(&dir, "greet.cin", "\"|\n | Hello, world!\n |\"\n\n");

    let mut compiler = match Compiler::new(&path, None, CompilerConfig::default()) {
        Ok(c) => c,
        Err(e) => panic!("open: {e}"),
    };
    let output = match compiler.compile() {
        Ok(o) => o,
        Err(e) => panic!("compile: {e}"),
    };

    assert!(!output.has_errors());
    assert_eq!(output.tokens.len(), 2);
    let TokenKind::String(sym) = output.tokens[0].kind else {
        panic!("expected string, got {:?}", output.tokens[0]);
    };
    assert_eq!(compiler.arena().lookup(sym), b"\n Hello, world!\n");
    assert!(output.tokens[1].is_eof());
    assert_eq!(output.tokens[1].position.line, 3);
}

#[test]
fn lex_command_over_file() {
    let dir = temp_dir();
    let path = write_source(&dir, "main.cin", "fn f(mut a) -> a ** 2\n");

    let Ok(mut compiler) = Compiler::new(&path, None, CompilerConfig::default()) else {
        panic!("open failed");
    };
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut err, ColorMode::Never, false);
    assert!(matches!(lex(&mut compiler, &mut out, &mut emitter), Ok(false)));

    let text = String::from_utf8_lossy(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"1:1 keyword fn"));
    assert!(lines.contains(&"1:6 mode mut"));
    assert!(lines.contains(&"1:13 `->`"));
    assert!(lines.contains(&"1:18 `**`"));
    // trailing newline is trimmed on read
    assert_eq!(lines.last(), Some(&"1:22 end of file"));
}

#[test]
fn diagnostics_carry_file_name() {
    let dir = temp_dir();
    let path = write_source(&dir, "broken.cin", "let s = \"open\n");

    let Ok(mut compiler) = Compiler::new(&path, None, CompilerConfig::default()) else {
        panic!("open failed");
    };
    let Ok(output) = compiler.compile() else {
        panic!("compile failed");
    };
    assert_eq!(output.tokens[0].kind, TokenKind::Keyword(Keyword::Let));
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, ErrorCode::E0001);
    assert_eq!(&*output.diagnostics[0].source_name, path.to_string_lossy());
}

#[test]
fn wrong_extension_is_refused_before_reading() {
    let dir = temp_dir();
    let path = write_source(&dir, "notes.md", "# not cinder");
    let err = Compiler::new(&path, None, CompilerConfig::default()).err();
    assert!(matches!(err, Some(CompileError::InvalidExtension { ref found, .. }) if found == "md"));
}
