use glyph_editor::{
    Coordinates, Editor, LanguageDefinition, MemoryClipboard, SelectionMode, SyntaxClass,
};
use pretty_assertions::assert_eq;

fn editor(text: &str) -> Editor {
    let mut editor = Editor::new();
    editor.set_text(text);
    editor.colorize_all();
    editor
}

#[test]
fn test_enter_character_then_undo() {
    let mut e = editor("ab");
    e.set_cursor_position(Coordinates::new(0, 0));

    e.enter_character('x', false);
    assert_eq!(e.text(), "xab");
    assert_eq!(e.cursor_position(), Coordinates::new(0, 1));

    e.undo(1);
    assert_eq!(e.text(), "ab");
    assert_eq!(e.cursor_position(), Coordinates::new(0, 0));
}

#[test]
fn test_delete_merge_and_undo_keep_marker_lines() {
    let mut e = editor("foo\nbar\nbaz");
    e.set_error_markers([(2, "unexpected token".to_string())]);
    e.set_breakpoints([0, 2]);
    e.set_cursor_position(Coordinates::new(0, 3));

    e.delete();
    assert_eq!(e.text_lines(), vec!["foobar", "baz"]);
    assert_eq!(e.error_markers().get(1), Some("unexpected token"));
    assert_eq!(e.breakpoints().iter().collect::<Vec<_>>(), vec![0, 1]);

    e.undo(1);
    assert_eq!(e.text_lines(), vec!["foo", "bar", "baz"]);
    assert_eq!(e.error_markers().get(2), Some("unexpected token"));
    assert_eq!(e.breakpoints().iter().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(e.cursor_position(), Coordinates::new(0, 3));
}

#[test]
fn test_case_insensitive_keyword_tokenization() {
    let lang = LanguageDefinition::new("Test")
        .with_case_sensitive(false)
        .with_keywords(["IF"])
        .with_token_rule(r"[a-zA-Z_][a-zA-Z0-9_]*", SyntaxClass::Identifier)
        .unwrap()
        .with_token_rule(r"[\(\)]", SyntaxClass::Punctuation)
        .unwrap();

    let mut e = Editor::new();
    e.set_language(lang);
    e.set_text("if (x)");
    e.colorize_all();

    let classes: Vec<SyntaxClass> = e.document().lines()[0].iter().map(|g| g.class).collect();
    assert_eq!(
        classes,
        vec![
            SyntaxClass::Keyword,
            SyntaxClass::Keyword,
            SyntaxClass::Default,
            SyntaxClass::Punctuation,
            SyntaxClass::Identifier,
            SyntaxClass::Punctuation,
        ]
    );
}

#[test]
fn test_block_indent_and_outdent_round_trip() {
    let original = "one\ntwo\n  three\n\tfour\nfive";
    let mut e = editor(original);

    e.set_selection(Coordinates::new(1, 0), Coordinates::new(4, 0), SelectionMode::Normal);
    e.enter_character('\t', false);
    assert_eq!(
        e.text_lines(),
        vec!["one", "\ttwo", "\t  three", "\t\tfour", "five"]
    );

    e.enter_character('\t', true);
    assert_eq!(e.text(), original);

    e.undo(2);
    assert_eq!(e.text(), original);
    e.redo(1);
    assert_eq!(e.text_lines()[1], "\ttwo");
}

#[test]
fn test_multibyte_delete_removes_whole_character() {
    let mut e = editor("ab");
    e.set_cursor_position(Coordinates::new(0, 1));
    e.insert_text("€");
    assert_eq!(e.line_character_count(0), 3);
    assert_eq!(e.document().lines()[0].len(), 5);

    e.set_cursor_position(Coordinates::new(0, 1));
    e.delete();
    assert_eq!(e.text(), "ab");
    assert_eq!(e.line_character_count(0), 2);
    assert_eq!(e.document().lines()[0].len(), 2);
}

#[test]
fn test_clipboard_round_trip() {
    let mut e = editor("first\nsecond");
    let mut clipboard = MemoryClipboard::new();

    // Nothing selected: the whole current line is copied.
    e.copy(&mut clipboard);
    assert_eq!(clipboard.text(), Some("first"));

    e.set_selection(Coordinates::new(1, 0), Coordinates::new(1, 3), SelectionMode::Normal);
    e.cut(&mut clipboard);
    assert_eq!(e.text(), "first\nond");

    e.set_cursor_position(Coordinates::new(0, 0));
    e.paste(&mut clipboard);
    assert_eq!(e.text(), "secfirst\nond");
}

#[test]
fn test_read_only_paste_and_cut() {
    let mut e = editor("text");
    e.set_read_only(true);
    e.select_all();

    let mut clipboard = MemoryClipboard::with_text("other");
    e.paste(&mut clipboard);
    e.cut(&mut clipboard);
    assert_eq!(e.text(), "text");
    assert_eq!(clipboard.text(), Some("text"));
    assert!(!e.can_undo());
}

#[test]
#[should_panic(expected = "read-only")]
fn test_direct_edit_on_read_only_panics() {
    let mut e = editor("text");
    e.set_read_only(true);
    e.backspace();
}

#[test]
fn test_newline_keeps_indentation() {
    let mut e = editor("\tif (x)");
    e.set_cursor_position(Coordinates::new(0, 10));
    e.enter_character('\n', false);
    assert_eq!(e.text_lines(), vec!["\tif (x)", "\t"]);
    assert_eq!(e.cursor_position(), Coordinates::new(1, 4));

    e.undo(1);
    e.redo(1);
    assert_eq!(e.text_lines(), vec!["\tif (x)", "\t"]);
}

#[test]
fn test_word_queries() {
    let mut e = editor("float4 color = tex2D(s, uv);");
    e.set_cursor_position(Coordinates::new(0, 9));
    assert_eq!(e.word_under_cursor(), "color");
    assert_eq!(e.word_at(Coordinates::new(0, 16)), "tex2D");
    assert!(e.identifier_description_at(Coordinates::new(0, 16)).is_some());

    e.select_word_under_cursor();
    assert_eq!(e.selected_text(), "color");
}
