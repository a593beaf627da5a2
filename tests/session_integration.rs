//! End-to-end session tests against real files

use std::fs;

use tinted::render::write_styled;
use tinted::syntax::Theme;
use tinted::{
    ColorTag, Config, EditSession, EditSurface, FileStorage, Format, SaveOutcome, Selection, SurfaceEvent,
    TextBuffer,
};

fn new_session() -> EditSession<TextBuffer> {
    EditSession::with_config(TextBuffer::new(), &Config::default()).unwrap()
}

#[test]
fn test_open_edit_save_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"debug": false}"#).unwrap();

    let mut storage = FileStorage::new();
    let mut session = new_session();
    assert!(session.load(&storage, Some(path.clone())));
    assert_eq!(session.format(), Format::Json);

    // Type a new member before the closing brace
    let pos = session.surface().text().len() - 1;
    session.edit(|buffer| buffer.insert(pos, r#", "level": 3"#));

    let styled = session.surface().styled();
    let level = session.surface().text().find("\"level\"").unwrap();
    assert_eq!(styled.tag_at(level), Some(ColorTag::Key));
    assert_eq!(styled.tag_at(session.surface().text().len() - 2), Some(ColorTag::Number));

    assert_eq!(session.save(&mut storage), SaveOutcome::Saved);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"debug": false, "level": 3}"#
    );
}

#[test]
fn test_new_file_and_format_switch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.xml");

    let mut storage = FileStorage::new();
    let mut session = new_session();
    assert!(session.load(&storage, Some(path.clone())));
    assert_eq!(session.surface().text(), "");
    assert_eq!(session.format(), Format::Xml);

    session.edit(|buffer| buffer.set_text("<!-- a\nb --><view id='main'/>"));
    let styled = session.surface().styled();
    assert_eq!(styled.tag_at(0), Some(ColorTag::Comment));
    assert_eq!(styled.tag_at(13), Some(ColorTag::Tag));

    session.surface_mut().set_selection(Selection::new(2, 5));
    session.handle_event(SurfaceEvent::FormatChanged(Format::Plain));
    assert!(session.surface().ranges().is_empty());
    assert_eq!(session.surface().selection(), Selection::new(2, 5));

    assert_eq!(session.save(&mut storage), SaveOutcome::Saved);
    assert!(path.exists());
}

#[test]
fn test_unsaved_document_needs_handle() {
    let mut storage = FileStorage::new();
    let mut session = new_session();
    session.edit(|buffer| buffer.set_text("notes"));

    assert_eq!(
        session.save(&mut storage),
        SaveOutcome::NeedsHandle {
            suggested_name: "document.txt"
        }
    );
}

#[test]
fn test_render_session_output() {
    let mut session = new_session();
    session.on_format_changed(Format::Json);
    session.edit(|buffer| buffer.set_text("[true]"));

    let mut out: Vec<u8> = Vec::new();
    write_styled(&mut out, &session.surface().styled(), &Theme::default()).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("true"));
    assert!(output.contains('\x1b'));
}
