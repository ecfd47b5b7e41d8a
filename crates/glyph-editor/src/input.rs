//! Keyboard and mouse input.
//!
//! The host polls its windowing system and hands the editor one [`KeyInput`] per key press,
//! the queued text characters, and one [`MouseInput`] per frame.

use crate::clipboard::Clipboard;
use crate::editor::{Editor, SelectionMode};
use crate::render::{Point, TextMeasure};

/// A non-text key, or a character key used as a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Forward delete.
    Delete,
    /// Backspace.
    Backspace,
    /// Insert.
    Insert,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// A character key (`Z`, `C`, ...), matched case-insensitively.
    Character(char),
}

/// Modifier keys held during an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Control.
    pub ctrl: bool,
    /// Alt / Option.
    pub alt: bool,
    /// Shift.
    pub shift: bool,
    /// Command / Windows key.
    pub super_key: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        super_key: false,
    };

    /// Only Control held.
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Only Shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Only Alt held.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };
}

/// One key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// The key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// Use macOS conventions: Command for shortcuts, Option for word moves.
    pub macos_behaviors: bool,
}

impl KeyInput {
    /// A key press with modifiers and platform-default behaviors.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            macos_behaviors: false,
        }
    }
}

/// Left mouse button state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseInput {
    /// Pointer position in content space.
    pub position: Point,
    /// The button went down this frame.
    pub clicked: bool,
    /// The press completes a double click.
    pub double_clicked: bool,
    /// The button is held and the pointer moved past the drag threshold.
    pub dragging: bool,
    /// Current time in seconds.
    pub time: f64,
    /// Maximum delay between clicks of a multi-click, in seconds.
    pub double_click_time: f64,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// Use macOS conventions: Command in place of Control.
    pub macos_behaviors: bool,
}

impl Default for MouseInput {
    fn default() -> Self {
        Self {
            position: Point::default(),
            clicked: false,
            double_clicked: false,
            dragging: false,
            time: 0.0,
            double_click_time: 0.3,
            modifiers: Modifiers::NONE,
            macos_behaviors: false,
        }
    }
}

fn is_char(key: Key, expected: char) -> bool {
    matches!(key, Key::Character(c) if c.eq_ignore_ascii_case(&expected))
}

impl Editor {
    /// Apply one key press. Returns `true` if the key was bound to an action.
    ///
    /// `page_size` is the number of visible lines, see [`Editor::page_size`]; page moves jump
    /// four lines less.
    pub fn handle_key(
        &mut self,
        input: &KeyInput,
        clipboard: &mut dyn Clipboard,
        page_size: usize,
    ) -> bool {
        if !self.config.handle_keyboard_inputs {
            return false;
        }

        let Modifiers {
            ctrl,
            alt,
            shift,
            super_key,
        } = input.modifiers;
        let osx = input.macos_behaviors;
        let key = input.key;
        let writable = !self.config.read_only;

        let command = if osx { super_key && !ctrl } else { ctrl && !super_key };
        let shortcut = command && !alt && !shift;
        let shift_shortcut = command && shift && !alt;
        let word_move = if osx { alt } else { ctrl };
        let alt_only = alt && !ctrl && !shift && !super_key;
        let ctrl_only = ctrl && !alt && !shift && !super_key;
        let shift_only = shift && !alt && !ctrl && !super_key;
        let plain = !alt && !ctrl && !super_key;
        let bare = plain && !shift;
        let page = page_size.saturating_sub(4);

        if writable && shortcut && is_char(key, 'z') {
            self.undo(1);
        } else if writable && alt_only && key == Key::Backspace {
            self.undo(1);
        } else if writable && shortcut && is_char(key, 'y') {
            self.redo(1);
        } else if writable && shift_shortcut && is_char(key, 'z') {
            self.redo(1);
        } else if plain && key == Key::Up {
            self.move_up(1, shift);
        } else if plain && key == Key::Down {
            self.move_down(1, shift);
        } else if (if osx { !ctrl } else { !alt }) && !super_key && key == Key::Left {
            self.move_left(1, shift, word_move);
        } else if (if osx { !ctrl } else { !alt }) && !super_key && key == Key::Right {
            self.move_right(1, shift, word_move);
        } else if plain && key == Key::PageUp {
            self.move_up(page, shift);
        } else if plain && key == Key::PageDown {
            self.move_down(page, shift);
        } else if ctrl && !alt && !super_key && key == Key::Home {
            self.move_top(shift);
        } else if ctrl && !alt && !super_key && key == Key::End {
            self.move_bottom(shift);
        } else if plain && key == Key::Home {
            self.move_home(shift);
        } else if plain && key == Key::End {
            self.move_end(shift);
        } else if writable && bare && key == Key::Delete {
            self.delete();
        } else if writable && bare && key == Key::Backspace {
            self.backspace();
        } else if bare && key == Key::Insert {
            self.config.overwrite = !self.config.overwrite;
        } else if (ctrl_only && key == Key::Insert) || (shortcut && is_char(key, 'c')) {
            self.copy(clipboard);
        } else if writable
            && ((shift_only && key == Key::Insert) || (shortcut && is_char(key, 'v')))
        {
            self.paste(clipboard);
        } else if (shortcut && is_char(key, 'x')) || (shift_only && key == Key::Delete) {
            self.cut(clipboard);
        } else if shortcut && is_char(key, 'a') {
            self.select_all();
        } else if writable && bare && key == Key::Enter {
            self.enter_character('\n', false);
        } else if writable && plain && key == Key::Tab {
            self.enter_character('\t', shift);
        } else {
            return false;
        }
        true
    }

    /// Enter queued text characters. Control characters other than `\n` are dropped, and nothing
    /// is entered while Control or Command is held. Returns `true` if any character was entered.
    pub fn handle_text_input(&mut self, chars: &str, modifiers: Modifiers) -> bool {
        if !self.config.handle_keyboard_inputs
            || self.config.read_only
            || modifiers.ctrl
            || modifiers.super_key
        {
            return false;
        }

        let mut entered = false;
        for ch in chars.chars() {
            if ch == '\n' || u32::from(ch) >= 32 {
                self.enter_character(ch, modifiers.shift);
                entered = true;
            }
        }
        entered
    }

    /// Apply one frame of left-button state: click places the cursor (Control selects words),
    /// double click selects a word, triple click selects a line, and dragging extends the
    /// selection. Returns `true` if the selection changed hands to the mouse.
    pub fn handle_mouse(&mut self, input: &MouseInput, measure: &dyn TextMeasure) -> bool {
        if !self.config.handle_mouse_inputs {
            return false;
        }

        let modifiers = input.modifiers;
        let shift = modifiers.shift;
        let ctrl = if input.macos_behaviors { modifiers.super_key } else { modifiers.ctrl };
        let alt = if input.macos_behaviors { modifiers.ctrl } else { modifiers.alt };
        if shift || alt {
            return false;
        }

        let click = input.clicked;
        let double_click = input.double_clicked;
        let triple_click = click
            && !double_click
            && self
                .last_click
                .is_some_and(|last| input.time - last < input.double_click_time);

        if triple_click {
            if !ctrl {
                self.place_interactive_cursor(input.position, measure);
                self.selection_mode = SelectionMode::Line;
                self.set_selection(
                    self.interactive_start,
                    self.interactive_end,
                    SelectionMode::Line,
                );
            }
            self.last_click = None;
        } else if double_click {
            if !ctrl {
                self.place_interactive_cursor(input.position, measure);
                self.selection_mode = if self.selection_mode == SelectionMode::Line {
                    SelectionMode::Normal
                } else {
                    SelectionMode::Word
                };
                self.set_selection(
                    self.interactive_start,
                    self.interactive_end,
                    self.selection_mode,
                );
            }
            self.last_click = Some(input.time);
        } else if click {
            self.place_interactive_cursor(input.position, measure);
            self.selection_mode = if ctrl {
                SelectionMode::Word
            } else {
                SelectionMode::Normal
            };
            self.set_selection(self.interactive_start, self.interactive_end, self.selection_mode);
            self.last_click = Some(input.time);
        } else if input.dragging {
            let at = self.screen_pos_to_coordinates(input.position, measure);
            self.move_cursor_to(at);
            self.interactive_end = at;
            self.set_selection(self.interactive_start, self.interactive_end, self.selection_mode);
        } else {
            return false;
        }
        true
    }

    fn place_interactive_cursor(&mut self, position: Point, measure: &dyn TextMeasure) {
        let at = self.screen_pos_to_coordinates(position, measure);
        self.move_cursor_to(at);
        self.interactive_start = at;
        self.interactive_end = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::coordinates::Coordinates;
    use crate::render::MonospaceMeasure;

    const MEASURE: MonospaceMeasure = MonospaceMeasure {
        cell_width: 10.0,
        line_height: 20.0,
    };

    fn editor(text: &str) -> Editor {
        let mut editor = Editor::new();
        editor.set_text(text);
        editor.colorize_all();
        editor
    }

    fn press(e: &mut Editor, key: Key, modifiers: Modifiers) -> bool {
        let mut clipboard = MemoryClipboard::new();
        e.handle_key(&KeyInput::new(key, modifiers), &mut clipboard, 30)
    }

    #[test]
    fn test_typing_and_undo_shortcuts() {
        let mut e = editor("");
        assert!(e.handle_text_input("hi\u{1}", Modifiers::NONE));
        assert_eq!(e.text(), "hi");

        assert!(press(&mut e, Key::Character('Z'), Modifiers::CTRL));
        assert_eq!(e.text(), "h");
        assert!(press(&mut e, Key::Backspace, Modifiers::ALT));
        assert_eq!(e.text(), "");

        let ctrl_shift = Modifiers {
            shift: true,
            ..Modifiers::CTRL
        };
        assert!(press(&mut e, Key::Character('z'), ctrl_shift));
        assert_eq!(e.text(), "h");
        assert!(press(&mut e, Key::Character('y'), Modifiers::CTRL));
        assert_eq!(e.text(), "hi");
    }

    #[test]
    fn test_text_input_ignored_with_ctrl_or_read_only() {
        let mut e = editor("");
        assert!(!e.handle_text_input("a", Modifiers::CTRL));
        e.set_read_only(true);
        assert!(!e.handle_text_input("a", Modifiers::NONE));
        assert_eq!(e.text(), "");
    }

    #[test]
    fn test_navigation_keys() {
        let text = (0..40).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let mut e = editor(&text);

        press(&mut e, Key::PageDown, Modifiers::NONE);
        assert_eq!(e.cursor_position().line, 26);
        press(&mut e, Key::End, Modifiers::SHIFT);
        assert_eq!(e.selected_text(), "line 26");
        press(&mut e, Key::End, Modifiers::CTRL);
        assert_eq!(e.cursor_position(), Coordinates::new(39, 0));
        press(&mut e, Key::Home, Modifiers::CTRL);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 0));
        press(&mut e, Key::Right, Modifiers::CTRL);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 5));
    }

    #[test]
    fn test_macos_word_move_uses_option() {
        let mut e = editor("foo bar");
        let mut clipboard = MemoryClipboard::new();
        let input = KeyInput {
            key: Key::Right,
            modifiers: Modifiers::ALT,
            macos_behaviors: true,
        };
        assert!(e.handle_key(&input, &mut clipboard, 30));
        assert_eq!(e.cursor_position(), Coordinates::new(0, 4));
    }

    #[test]
    fn test_clipboard_shortcuts() {
        let mut e = editor("abc");
        let mut clipboard = MemoryClipboard::new();
        e.select_all();
        assert!(e.handle_key(&KeyInput::new(Key::Insert, Modifiers::CTRL), &mut clipboard, 30));
        assert_eq!(clipboard.text(), Some("abc"));

        assert!(e.handle_key(&KeyInput::new(Key::Delete, Modifiers::SHIFT), &mut clipboard, 30));
        assert_eq!(e.text(), "");

        assert!(e.handle_key(
            &KeyInput::new(Key::Character('v'), Modifiers::CTRL),
            &mut clipboard,
            30
        ));
        assert_eq!(e.text(), "abc");
    }

    #[test]
    fn test_insert_toggles_overwrite_and_unbound_keys() {
        let mut e = editor("abc");
        assert!(press(&mut e, Key::Insert, Modifiers::NONE));
        assert!(e.is_overwrite());
        assert!(!press(&mut e, Key::Character('q'), Modifiers::CTRL));

        e.set_handle_keyboard_inputs(false);
        assert!(!press(&mut e, Key::Insert, Modifiers::NONE));
        assert!(e.is_overwrite());
    }

    #[test]
    fn test_read_only_blocks_editing_keys() {
        let mut e = editor("abc");
        e.set_cursor_position(Coordinates::new(0, 3));
        e.set_read_only(true);
        assert!(!press(&mut e, Key::Backspace, Modifiers::NONE));
        assert!(!press(&mut e, Key::Enter, Modifiers::NONE));
        assert!(press(&mut e, Key::Left, Modifiers::NONE));
        assert_eq!(e.text(), "abc");
    }

    #[test]
    fn test_mouse_click_double_and_triple() {
        let mut e = editor("float alpha = 1;\nnext");
        let start = e.text_start(&MEASURE);
        let position = Point::new(start + 81.0, 5.0);

        let mut input = MouseInput {
            position,
            clicked: true,
            time: 1.0,
            ..MouseInput::default()
        };
        assert!(e.handle_mouse(&input, &MEASURE));
        assert_eq!(e.cursor_position(), Coordinates::new(0, 8));
        assert!(!e.has_selection());

        input.double_clicked = true;
        input.time = 1.1;
        e.handle_mouse(&input, &MEASURE);
        assert_eq!(e.selection_mode(), SelectionMode::Word);
        assert_eq!(e.selected_text(), "alpha");

        input.double_clicked = false;
        input.time = 1.2;
        e.handle_mouse(&input, &MEASURE);
        assert_eq!(e.selection_mode(), SelectionMode::Line);
        assert_eq!(e.selected_text(), "float alpha = 1;");
    }

    #[test]
    fn test_mouse_drag_extends_selection() {
        let mut e = editor("hello world");
        let start = e.text_start(&MEASURE);

        let click = MouseInput {
            position: Point::new(start + 1.0, 5.0),
            clicked: true,
            ..MouseInput::default()
        };
        e.handle_mouse(&click, &MEASURE);

        let drag = MouseInput {
            position: Point::new(start + 49.0, 5.0),
            dragging: true,
            ..MouseInput::default()
        };
        assert!(e.handle_mouse(&drag, &MEASURE));
        assert_eq!(e.selected_text(), "hello");
        assert_eq!(e.cursor_position(), Coordinates::new(0, 5));
    }

    #[test]
    fn test_mouse_ignored_with_shift() {
        let mut e = editor("abc");
        let input = MouseInput {
            clicked: true,
            modifiers: Modifiers::SHIFT,
            ..MouseInput::default()
        };
        assert!(!e.handle_mouse(&input, &MEASURE));
    }
}
