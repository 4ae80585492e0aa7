use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::page::Section;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    JumpToTop,
    JumpToBottom,
    JumpTo(Section),
    CycleFilter,
    NextProject,
    PrevProject,
    OpenModal,
    /// Esc: closes the modal, else the menu
    CloseModal,
    OpenLink,
    DragLeft,
    DragRight,
    DragUp,
    DragDown,
    ToggleMenu,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.modal.is_open() {
        return handle_modal_mode(key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Page scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::HalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::HalfPageUp,
        (KeyCode::PageDown, _) => Action::HalfPageDown,
        (KeyCode::PageUp, _) => Action::HalfPageUp,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::Char('G'), _) => Action::JumpToBottom,

        // Nav links
        (KeyCode::Char(c @ '1'..='5'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            Section::ALL
                .get(index)
                .copied()
                .map(Action::JumpTo)
                .unwrap_or(Action::None)
        }
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,

        // Projects
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::CycleFilter,
        (KeyCode::Tab, _) => Action::NextProject,
        (KeyCode::BackTab, _) => Action::PrevProject,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::OpenModal,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenLink,

        // Globe
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::DragLeft,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::DragRight,
        (KeyCode::Left, KeyModifiers::NONE) => Action::DragLeft,
        (KeyCode::Right, KeyModifiers::NONE) => Action::DragRight,
        (KeyCode::Char('H'), _) => Action::DragUp,
        (KeyCode::Char('L'), _) => Action::DragDown,

        (KeyCode::Esc, _) => Action::CloseModal,

        _ => Action::None,
    }
}

/// Handle key events while the project modal is shown
fn handle_modal_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::CloseModal,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::CloseModal,
        (KeyCode::Enter, _) => Action::CloseModal,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenLink,
        _ => Action::None,
    }
}
