pub mod choose_mood;
pub mod imagine;
pub mod main_menu;
pub mod pre_reveal;
pub mod reveal;
pub mod shuffler;
pub mod stack_select;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use cardtrick_core::TrickSession;

use crate::app::ScreenAction;

/// Trait for the trick-flow screens
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, session: &Option<TrickSession>);
    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction>;
}
