use termion::event::{Event, Key, MouseButton, MouseEvent};
use tethermarks::config::Config;
use tethermarks::editor::marks::Mark;
use tethermarks::editor::mode::{MarkScope, PickerMode};
use tethermarks::editor::picker::Picker;
use tethermarks::editor::registers::RegisterList;
use tethermarks::editor::session::{MessageLevel, Session};
use tethermarks::host::{ExactLeafMatch, HostAction, SessionWorkspace};
use tethermarks::input::handler::handle_picker_event;
use tethermarks::input::keys::{map_key_event, parse_keybind, Keybinds, PickerEvent};

fn key(k: Key) -> Event {
    Event::Key(k)
}

#[test]
fn test_default_navigation_keys() {
    let keybinds = Keybinds::default();
    let registers = RegisterList::parse("abc");

    assert_eq!(map_key_event(key(Key::Up), &keybinds, &registers), PickerEvent::MoveUp);
    assert_eq!(map_key_event(key(Key::Ctrl('p')), &keybinds, &registers), PickerEvent::MoveUp);
    assert_eq!(map_key_event(key(Key::Down), &keybinds, &registers), PickerEvent::MoveDown);
    assert_eq!(map_key_event(key(Key::Ctrl('n')), &keybinds, &registers), PickerEvent::MoveDown);
    assert_eq!(map_key_event(key(Key::Char('\n')), &keybinds, &registers), PickerEvent::Select);
    assert_eq!(map_key_event(key(Key::Esc), &keybinds, &registers), PickerEvent::Cancel);
    assert_eq!(map_key_event(key(Key::Ctrl('d')), &keybinds, &registers), PickerEvent::Delete);
    assert_eq!(map_key_event(key(Key::Ctrl('u')), &keybinds, &registers), PickerEvent::Undo);
}

#[test]
fn test_register_keys() {
    let keybinds = Keybinds::default();
    let registers = RegisterList::parse("aB1");

    assert_eq!(
        map_key_event(key(Key::Char('B')), &keybinds, &registers),
        PickerEvent::Register("B".to_string())
    );
    assert_eq!(
        map_key_event(key(Key::Char('1')), &keybinds, &registers),
        PickerEvent::Register("1".to_string())
    );
    assert_eq!(
        map_key_event(key(Key::Char('b')), &keybinds, &registers),
        PickerEvent::Unknown
    );
}

#[test]
fn test_non_key_events_are_unknown() {
    let event = Event::Mouse(MouseEvent::Press(MouseButton::Left, 1, 1));
    assert_eq!(
        map_key_event(event, &Keybinds::default(), &RegisterList::parse("a")),
        PickerEvent::Unknown
    );
}

#[test]
fn test_keybind_wins_over_register() {
    let config = Config {
        list_delete: "x".to_string(),
        ..Config::default()
    };
    let keybinds = Keybinds::from_config(&config);
    let registers = RegisterList::parse("xyz");

    assert_eq!(map_key_event(key(Key::Char('x')), &keybinds, &registers), PickerEvent::Delete);
    assert_eq!(
        map_key_event(key(Key::Char('y')), &keybinds, &registers),
        PickerEvent::Register("y".to_string())
    );
}

#[test]
fn test_config_override_replaces_binding() {
    let config = Config {
        list_up: "ctrl+e".to_string(),
        list_undo: "alt+z".to_string(),
        ..Config::default()
    };
    let keybinds = Keybinds::from_config(&config);

    assert_eq!(keybinds.up, vec![Key::Ctrl('e')]);
    assert_eq!(keybinds.undo, vec![Key::Alt('z')]);
    assert_eq!(keybinds.down, Keybinds::default().down);
}

#[test]
fn test_invalid_override_is_ignored() {
    let config = Config {
        list_cancel: "hyper+q".to_string(),
        ..Config::default()
    };
    assert_eq!(Keybinds::from_config(&config), Keybinds::default());
}

#[test]
fn test_enter_aliases() {
    assert_eq!(parse_keybind("ctrl+m"), Ok(Key::Char('\n')));
    assert_eq!(parse_keybind("return"), Ok(Key::Char('\n')));
    assert_eq!(parse_keybind("ctrl+i"), Ok(Key::Char('\t')));
}

fn session_with(marks: Vec<Mark>) -> Session {
    let config = Config {
        register_list: "abc".to_string(),
        harpoon_register_list: "hjkl".to_string(),
        ..Config::default()
    };
    Session::new(config, marks, None)
}

#[test]
fn test_navigation_wraps() {
    let mut session = session_with(vec![Mark::new("a", "1"), Mark::new("b", "2")]);
    let mut workspace = SessionWorkspace::new(".");
    let mut picker = Picker::new(PickerMode::Goto, MarkScope::General, &session);

    let closed = handle_picker_event(
        PickerEvent::MoveUp,
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );
    assert!(!closed);
    assert_eq!(picker.selected().unwrap().symbol, "b");

    handle_picker_event(
        PickerEvent::MoveDown,
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );
    assert_eq!(picker.selected().unwrap().symbol, "a");
}

#[test]
fn test_set_by_register_closes() {
    let mut session = session_with(Vec::new());
    let mut workspace = SessionWorkspace::new(".").with_active("todo.md");
    let mut picker = Picker::new(PickerMode::Set, MarkScope::General, &session);

    let closed = handle_picker_event(
        PickerEvent::Register("c".to_string()),
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );

    assert!(closed);
    assert_eq!(session.mark("c").unwrap().file_path, "todo.md");
}

#[test]
fn test_set_without_active_file_stays_open() {
    let mut session = session_with(Vec::new());
    let mut workspace = SessionWorkspace::new(".");
    let mut picker = Picker::new(PickerMode::Set, MarkScope::General, &session);

    let closed = handle_picker_event(
        PickerEvent::Register("a".to_string()),
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );

    assert!(!closed);
    let message = session.message().unwrap();
    assert_eq!(message.text, "No active file to mark.");
    assert_eq!(message.level, MessageLevel::Warning);
}

#[test]
fn test_goto_unbound_register_is_ignored() {
    let mut session = session_with(vec![Mark::new("a", "1")]);
    let mut workspace = SessionWorkspace::new(".");
    let mut picker = Picker::new(PickerMode::Goto, MarkScope::General, &session);

    let closed = handle_picker_event(
        PickerEvent::Register("b".to_string()),
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );

    assert!(!closed);
    assert!(session.message().is_none());
}

#[test]
fn test_select_goes_to_highlighted_mark() {
    let mut session = session_with(vec![Mark::new("a", "one.md"), Mark::new("b", "two.md")]);
    let mut workspace = SessionWorkspace::new(".");
    let leaf = workspace.push_leaf("two.md", true);
    let mut picker = Picker::new(PickerMode::Goto, MarkScope::General, &session);
    picker.move_selection(1);

    let closed = handle_picker_event(
        PickerEvent::Select,
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );

    assert!(closed);
    assert_eq!(
        workspace.actions(),
        &[HostAction::Focus {
            leaf,
            path: "two.md".to_string()
        }]
    );
}

#[test]
fn test_goto_missing_file_reports_and_closes() {
    let mut session = session_with(vec![Mark::new("a", "does-not-exist.md")]);
    let dir = tempfile::TempDir::new().unwrap();
    let mut workspace = SessionWorkspace::new(dir.path());
    let mut picker = Picker::new(PickerMode::Goto, MarkScope::General, &session);

    let closed = handle_picker_event(
        PickerEvent::Select,
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );

    assert!(closed);
    assert_eq!(session.message().unwrap().level, MessageLevel::Warning);
    assert!(workspace.actions().is_empty());
}

#[test]
fn test_delete_then_undo_refreshes_list() {
    let mut session = session_with(vec![Mark::new("a", "1"), Mark::new("b", "2")]);
    let mut workspace = SessionWorkspace::new(".");
    let mut picker = Picker::new(PickerMode::Goto, MarkScope::General, &session);

    let closed = handle_picker_event(
        PickerEvent::Delete,
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );
    assert!(!closed);
    assert_eq!(picker.items(), &[Mark::new("b", "2")]);

    handle_picker_event(
        PickerEvent::Undo,
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );
    assert_eq!(picker.items().len(), 2);
    assert!(session.is_dirty());
}

#[test]
fn test_undo_with_nothing_to_restore() {
    let mut session = session_with(Vec::new());
    let mut workspace = SessionWorkspace::new(".");
    let mut picker = Picker::new(PickerMode::Goto, MarkScope::General, &session);

    let closed = handle_picker_event(
        PickerEvent::Undo,
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );

    assert!(!closed);
    assert_eq!(session.message().unwrap().level, MessageLevel::Info);
}

#[test]
fn test_harpoon_delete_compacts_visible_list() {
    let mut session = session_with(vec![
        Mark::new("h", "1"),
        Mark::new("j", "2"),
        Mark::new("k", "3"),
    ]);
    let mut workspace = SessionWorkspace::new(".");
    let mut picker = Picker::new(PickerMode::Delete, MarkScope::Harpoon, &session);

    let closed = handle_picker_event(
        PickerEvent::Register("h".to_string()),
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );

    assert!(closed);
    let visible: Vec<_> = session
        .visible_marks(MarkScope::Harpoon)
        .into_iter()
        .map(|m| (m.symbol, m.file_path))
        .collect();
    assert_eq!(
        visible,
        vec![
            ("h".to_string(), "2".to_string()),
            ("j".to_string(), "3".to_string())
        ]
    );
}

#[test]
fn test_cancel_closes_without_changes() {
    let mut session = session_with(vec![Mark::new("a", "1")]);
    let mut workspace = SessionWorkspace::new(".");
    let mut picker = Picker::new(PickerMode::Delete, MarkScope::General, &session);

    let closed = handle_picker_event(
        PickerEvent::Cancel,
        &mut picker,
        &mut session,
        &mut workspace,
        &ExactLeafMatch,
    );

    assert!(closed);
    assert!(!session.is_dirty());
}
