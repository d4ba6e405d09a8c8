use cinder_diagnostic::emitter::{ColorMode, TerminalEmitter};
use cinder_ir::{Keyword, Mode, StringArena, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

fn plain_emitter(buf: &mut Vec<u8>) -> TerminalEmitter<&mut Vec<u8>> {
    TerminalEmitter::with_color_mode(buf, ColorMode::Never, false)
}

#[test]
fn describe_payloads() {
    let arena = StringArena::new();
    let sym = arena.intern(b"a\tb");
    assert_eq!(describe(&TokenKind::Keyword(Keyword::Let), &arena), "keyword let");
    assert_eq!(describe(&TokenKind::Mode(Mode::Mut), &arena), "mode mut");
    assert_eq!(describe(&TokenKind::Identifier(b"x_1".to_vec()), &arena), "identifier x_1");
    assert_eq!(describe(&TokenKind::String(sym), &arena), "string \"a\\tb\"");
    assert_eq!(describe(&TokenKind::Integer(b"12_000".to_vec()), &arena), "integer 12_000");
    assert_eq!(describe(&TokenKind::Float(b"0.5".to_vec()), &arena), "float 0.5");
    assert_eq!(describe(&TokenKind::Character(b'\n'), &arena), "character '\\n'");
    assert_eq!(describe(&TokenKind::Unknown(0xC3), &arena), "unknown 0xC3");
    assert_eq!(describe(&TokenKind::RangeInclusive, &arena), "`..=`");
    assert_eq!(describe(&TokenKind::Eof, &arena), "end of file");
}

#[test]
fn lex_prints_one_line_per_token() {
    let mut compiler =
        Compiler::from_source("t.cin", "let x = \"hi\\n\"\n", CompilerConfig::default());
    let mut out = Vec::new();
    let mut diags = Vec::new();
    let had_errors = lex(&mut compiler, &mut out, &mut plain_emitter(&mut diags));

    assert!(matches!(had_errors, Ok(false)));
    assert_eq!(
        String::from_utf8_lossy(&out),
        "1:1 keyword let\n\
         1:5 identifier x\n\
         1:7 `=`\n\
         1:9 string \"hi\\n\"\n\
         1:15 newline\n\
         2:1 end of file\n"
    );
    assert!(diags.is_empty());
}

#[test]
fn check_reports_and_summarizes() {
    let mut compiler = Compiler::from_source("bad.cin", "x = 'ab'", CompilerConfig::default());
    let mut diags = Vec::new();
    let had_errors = check(&mut compiler, &mut plain_emitter(&mut diags));

    assert!(matches!(had_errors, Ok(true)));
    let text = String::from_utf8_lossy(&diags);
    assert!(text.starts_with("error[E0004]: "));
    assert!(text.contains("  --> bad.cin:1:5\n"));
    assert!(text.ends_with("error: aborting due to previous error\n"));
}

#[test]
fn check_notes_suppressed_diagnostics() {
    let mut config = CompilerConfig::default();
    config.diagnostics.error_limit = 1;
    config.diagnostics.deduplicate = false;
    let mut compiler = Compiler::from_source("many.cin", "'' ''\n''", config);
    let mut diags = Vec::new();
    let had_errors = check(&mut compiler, &mut plain_emitter(&mut diags));

    assert!(matches!(had_errors, Ok(true)));
    let text = String::from_utf8_lossy(&diags);
    assert_eq!(text.matches("error[E0003]").count(), 1);
    assert!(text.ends_with("note: 2 further diagnostic(s) suppressed (limit or duplicates)\n"));
}

#[test]
fn clean_source_writes_nothing_to_stderr() {
    let mut compiler = Compiler::from_source("ok.cin", "a |> b", CompilerConfig::default());
    let mut diags = Vec::new();
    assert!(matches!(check(&mut compiler, &mut plain_emitter(&mut diags)), Ok(false)));
    assert!(diags.is_empty());
}

#[test]
fn file_commands_reject_bad_paths() {
    let config = CompilerConfig::default();
    assert!(matches!(
        check_file("definitely/not/here.txt", config.clone()),
        Err(CompileError::InvalidExtension { .. })
    ));
    assert!(matches!(
        lex_file("definitely/not/here.cin", config),
        Err(CompileError::Io { .. })
    ));
}
