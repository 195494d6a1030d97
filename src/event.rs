use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{self, Mode};

/// What the main loop should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Redraw,
    Quit,
}

fn handle_keys_calculator(keycode: KeyCode, app: &mut app::App) {
    match keycode {
        KeyCode::Enter => {
            app.calculate();
        }
        KeyCode::Char(c) => {
            app.calculator.add_char(c);
        }
        KeyCode::Backspace => {
            app.calculator.del_char();
        }
        KeyCode::Down | KeyCode::Tab => {
            app.calculator.selection_down();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.calculator.selection_up();
        }
        KeyCode::Esc => {
            app.calculator.clear();
        }
        _ => {}
    }
}

pub fn handle_key_bindings(mode: Mode, key_event: KeyEvent, app: &mut app::App) -> Action {
    match (mode, key_event.modifiers, key_event.code) {
        (_, KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return Action::Quit;
        }
        (Mode::Help, modifiers, keycode) => {
            if modifiers.is_empty()
                && (matches!(
                    keycode,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                ))
            {
                app.mode = app.previous_mode;
            }
        }
        (_, KeyModifiers::NONE, KeyCode::Char('q')) => {
            return Action::Quit;
        }
        (_, _, KeyCode::Char('?')) => {
            app.previous_mode = app.mode;
            app.mode = Mode::Help;
        }
        (Mode::Calculator, modifiers, keycode) => {
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT {
                handle_keys_calculator(keycode, app)
            }
        }
    }

    Action::Redraw
}
