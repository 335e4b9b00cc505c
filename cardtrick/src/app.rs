use std::time::Duration;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;

use cardtrick_core::{Mood, ShufflerSession, Stage, TrickSession};

use crate::effects::{self, FxManager};
use crate::screens::choose_mood::ChooseMoodScreen;
use crate::screens::imagine::ImagineScreen;
use crate::screens::main_menu::MainMenuScreen;
use crate::screens::pre_reveal::PreRevealScreen;
use crate::screens::reveal::RevealScreen;
use crate::screens::shuffler::ShufflerScreen;
use crate::screens::stack_select::StackSelectScreen;
use crate::screens::Screen;

/// Duration of one tick of the app loop (~30fps)
pub const FRAME: Duration = Duration::from_millis(33);

/// Top-level view: the menu, the guided trick, or the shuffler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    MainMenu,
    Trick,
    Shuffler,
}

/// Which screen is on stage; derived from view + trick stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenId {
    MainMenu,
    ChooseMood,
    Imagine,
    StackSelect,
    PreReveal,
    Reveal,
    Shuffler,
}

/// Main application state
pub struct App {
    pub view: View,
    pub trick: Option<TrickSession>,
    pub shuffler: Option<ShufflerSession>,
    pub tick: u64,
    pub fx: FxManager,
    prev_screen: Option<ScreenId>,

    // Screens
    pub main_menu: MainMenuScreen,
    pub choose_mood: ChooseMoodScreen,
    pub imagine: ImagineScreen,
    pub stack_select: StackSelectScreen,
    pub pre_reveal: PreRevealScreen,
    pub reveal: RevealScreen,
    pub shuffler_screen: ShufflerScreen,
}

impl App {
    pub fn new() -> Self {
        let mut fx = FxManager::default();
        // Title shimmer runs forever on main menu
        fx.add_unique_effect("title_shimmer", effects::title_shimmer());

        Self {
            view: View::MainMenu,
            trick: None,
            shuffler: None,
            tick: 0,
            fx,
            prev_screen: None,
            main_menu: MainMenuScreen::new(),
            choose_mood: ChooseMoodScreen::new(),
            imagine: ImagineScreen::new(),
            stack_select: StackSelectScreen::new(),
            pre_reveal: PreRevealScreen::new(),
            reveal: RevealScreen::new(),
            shuffler_screen: ShufflerScreen::new(),
        }
    }

    fn current_screen(&self) -> ScreenId {
        match self.view {
            View::MainMenu => ScreenId::MainMenu,
            View::Shuffler => ScreenId::Shuffler,
            View::Trick => match self.trick.as_ref().map(TrickSession::stage) {
                Some(Stage::ImagineCards) => ScreenId::Imagine,
                Some(Stage::StackSelection) => ScreenId::StackSelect,
                Some(Stage::PreReveal) => ScreenId::PreReveal,
                Some(Stage::RevealCard) => ScreenId::Reveal,
                Some(Stage::ChooseMood) | None => ScreenId::ChooseMood,
            },
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Animated backdrop for all screens
        let bg = cardtrick_widgets::background::BackgroundWidget::new(self.tick);
        frame.render_widget(bg, area);

        let frame_border = cardtrick_widgets::background::FrameWidget::new(self.tick);
        frame.render_widget(frame_border, area);

        match self.current_screen() {
            ScreenId::MainMenu => self.main_menu.render(frame, &self.trick),
            ScreenId::ChooseMood => self.choose_mood.render(frame, &self.trick),
            ScreenId::Imagine => self.imagine.render(frame, &self.trick),
            ScreenId::StackSelect => self.stack_select.render(frame, &self.trick),
            ScreenId::PreReveal => self.pre_reveal.render(frame, &self.trick),
            ScreenId::Reveal => self.reveal.render(frame, &self.trick),
            ScreenId::Shuffler => self.shuffler_screen.render(frame, &self.shuffler),
        }

        // Apply all tachyonfx effects on top of rendered content
        let buf = frame.buffer_mut();
        self.fx
            .process_effects(tachyonfx::Duration::from_millis(33), buf, area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = match self.current_screen() {
            ScreenId::MainMenu => self.main_menu.handle_key(key),
            ScreenId::ChooseMood => self.choose_mood.handle_key(key),
            ScreenId::Imagine => self.imagine.handle_key(key),
            ScreenId::StackSelect => self.stack_select.handle_key(key),
            ScreenId::PreReveal => self.pre_reveal.handle_key(key),
            ScreenId::Reveal => self.reveal.handle_key(key),
            ScreenId::Shuffler => self.shuffler_screen.handle_key(key),
        };

        self.process_action(action)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.current_screen() == ScreenId::StackSelect {
            let action = self.stack_select.handle_mouse(mouse);
            self.process_action(action);
        }
    }

    pub fn handle_resize(&mut self, _w: u16, _h: u16) {
        // Ratatui handles resize automatically
    }

    pub fn tick(&mut self) {
        self.tick += 1;

        // Drive the cosmetic reveal timer
        if let Some(session) = &mut self.trick {
            session.tick(FRAME);
        }

        // Detect screen changes and trigger transition effects
        let screen = self.current_screen();
        if self.prev_screen != Some(screen) {
            self.fx
                .add_unique_effect("screen_transition", effects::screen_transition());

            match screen {
                ScreenId::MainMenu => {
                    self.fx
                        .add_unique_effect("title_shimmer", effects::title_shimmer());
                }
                ScreenId::Imagine => {
                    self.fx
                        .add_unique_effect("imagine_coalesce", effects::coalesce_in());
                }
                ScreenId::StackSelect => {
                    self.fx
                        .add_unique_effect("deal_slide", effects::card_deal_slide());
                }
                ScreenId::Reveal => {
                    self.fx
                        .add_unique_effect("reveal_glow", effects::reveal_glow());
                }
                _ => {}
            }

            self.prev_screen = Some(screen);
        }
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => return true,
            Some(ScreenAction::OpenTrick) => {
                self.trick = Some(TrickSession::new());
                self.choose_mood.cursor = 0;
                self.view = View::Trick;
            }
            Some(ScreenAction::OpenShuffler) => {
                self.shuffler = Some(ShufflerSession::new());
                self.view = View::Shuffler;
            }
            Some(ScreenAction::BackToMenu) => {
                // Dropping the sessions also cancels any pending reveal
                self.trick = None;
                self.shuffler = None;
                self.view = View::MainMenu;
            }
            Some(ScreenAction::SelectMood(mood)) => {
                if let Some(session) = &mut self.trick {
                    session.select_mood(mood);
                }
            }
            Some(ScreenAction::StartTrick) => {
                if let Some(session) = &mut self.trick {
                    session.start_trick();
                    self.stack_select.reset();
                }
            }
            Some(ScreenAction::SelectStack(index)) => {
                if let Some(session) = &mut self.trick {
                    session.select_stack(index);
                }
            }
            Some(ScreenAction::ConfirmSelection) => {
                if let Some(session) = &mut self.trick {
                    session.confirm_selection();
                }
            }
            Some(ScreenAction::TriggerReveal) => {
                if let Some(session) = &mut self.trick {
                    let was_idle = !session.is_animating_shuffle();
                    session.trigger_reveal();
                    if was_idle && session.is_animating_shuffle() {
                        self.fx
                            .add_unique_effect("shuffle_frenzy", effects::shuffle_frenzy());
                    }
                }
            }
            Some(ScreenAction::RestartTrick) => {
                if let Some(session) = &mut self.trick {
                    session.restart();
                    self.choose_mood.cursor = 0;
                    self.stack_select.reset();
                }
            }
            Some(ScreenAction::Reshuffle) => {
                if let Some(session) = &mut self.shuffler {
                    session.reshuffle();
                }
            }
            None => {}
        }

        false
    }
}

/// Actions that screens can return
#[derive(Debug, Clone)]
pub enum ScreenAction {
    Quit,
    /// Start a trick session and enter the mood choice
    OpenTrick,
    OpenShuffler,
    BackToMenu,
    SelectMood(Mood),
    /// Deal the deck into stacks and begin the selection rounds
    StartTrick,
    SelectStack(usize),
    ConfirmSelection,
    /// Run the cosmetic shuffle, then reveal
    TriggerReveal,
    /// New trick with a fresh deck
    RestartTrick,
    /// Re-shuffle the standalone shuffler deck
    Reshuffle,
}
