//! Screen routing
//!
//! Maps `(current screen, event)` pairs to the next screen and keeps an
//! explicit back stack. Pairs without a rule are ignored.

/// The screens a player can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Title,
    Question,
    Won,
    Lost,
    Rules,
    About,
}

/// Opaque key for a screen's display title, resolved by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleKey {
    AppName,
    QuestionProgress,
    Congratulations,
    GameOver,
    Rules,
    About,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Title,
        Screen::Question,
        Screen::Won,
        Screen::Lost,
        Screen::Rules,
        Screen::About,
    ];

    pub fn title_key(self) -> TitleKey {
        match self {
            Screen::Title => TitleKey::AppName,
            Screen::Question => TitleKey::QuestionProgress,
            Screen::Won => TitleKey::Congratulations,
            Screen::Lost => TitleKey::GameOver,
            Screen::Rules => TitleKey::Rules,
            Screen::About => TitleKey::About,
        }
    }

    /// Static pages that return to wherever they were opened from
    pub fn is_info_page(self) -> bool {
        matches!(self, Screen::Rules | Screen::About)
    }
}

/// Player actions the router understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterEvent {
    /// Play pressed on the title screen
    Play,
    /// An answer was submitted and checked
    Submitted { correct: bool },
    /// Continue pressed on the won screen
    Continue,
    /// Try again pressed on the lost screen
    TryAgain,
    OpenRules,
    OpenAbout,
    /// Pop back to the previous screen
    Back,
    /// Top-bar up arrow: straight back to the title screen
    Home,
}

/// A screen change produced by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

/// Navigation stack rooted at the title screen
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<Screen>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Title],
        }
    }

    pub fn current(&self) -> Screen {
        // The root is never popped
        self.stack.last().copied().unwrap_or(Screen::Title)
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Screens from the root to the current one
    pub fn history(&self) -> &[Screen] {
        &self.stack
    }

    /// Apply an event; returns the transition, or `None` if the event does
    /// not apply to the current screen.
    pub fn handle(&mut self, event: RouterEvent) -> Option<Transition> {
        let from = self.current();

        match (from, event) {
            (Screen::Title, RouterEvent::Play) => self.stack.push(Screen::Question),
            (Screen::Question, RouterEvent::Submitted { correct: true }) => {
                self.stack.push(Screen::Won)
            }
            (Screen::Question, RouterEvent::Submitted { correct: false }) => {
                self.stack.push(Screen::Lost)
            }
            (Screen::Won, RouterEvent::Continue) | (Screen::Lost, RouterEvent::TryAgain) => {
                self.stack.truncate(1)
            }
            (current, RouterEvent::OpenRules) if current != Screen::Rules => {
                self.stack.push(Screen::Rules)
            }
            (current, RouterEvent::OpenAbout) if current != Screen::About => {
                self.stack.push(Screen::About)
            }
            (current, RouterEvent::Back) if current.is_info_page() => {
                self.stack.pop();
            }
            (current, RouterEvent::Home) if current != Screen::Title => self.stack.truncate(1),
            _ => {
                log::trace!("Ignoring {:?} on {:?}", event, from);
                return None;
            }
        }

        let transition = Transition {
            from,
            to: self.current(),
        };
        log::debug!("Navigated {:?} -> {:?}", transition.from, transition.to);
        Some(transition)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EVENTS: [RouterEvent; 9] = [
        RouterEvent::Play,
        RouterEvent::Submitted { correct: true },
        RouterEvent::Submitted { correct: false },
        RouterEvent::Continue,
        RouterEvent::TryAgain,
        RouterEvent::OpenRules,
        RouterEvent::OpenAbout,
        RouterEvent::Back,
        RouterEvent::Home,
    ];

    /// Build a router whose current screen is `screen`
    fn router_on(screen: Screen) -> Router {
        let mut router = Router::new();
        let path: &[RouterEvent] = match screen {
            Screen::Title => &[],
            Screen::Question => &[RouterEvent::Play],
            Screen::Won => &[RouterEvent::Play, RouterEvent::Submitted { correct: true }],
            Screen::Lost => &[RouterEvent::Play, RouterEvent::Submitted { correct: false }],
            Screen::Rules => &[RouterEvent::OpenRules],
            Screen::About => &[RouterEvent::OpenAbout],
        };
        for event in path {
            router.handle(*event).unwrap();
        }
        assert_eq!(router.current(), screen);
        router
    }

    fn expected_next(from: Screen, event: RouterEvent) -> Option<Screen> {
        match (from, event) {
            (Screen::Title, RouterEvent::Play) => Some(Screen::Question),
            (Screen::Question, RouterEvent::Submitted { correct: true }) => Some(Screen::Won),
            (Screen::Question, RouterEvent::Submitted { correct: false }) => Some(Screen::Lost),
            (Screen::Won, RouterEvent::Continue) => Some(Screen::Title),
            (Screen::Lost, RouterEvent::TryAgain) => Some(Screen::Title),
            (s, RouterEvent::OpenRules) if s != Screen::Rules => Some(Screen::Rules),
            (s, RouterEvent::OpenAbout) if s != Screen::About => Some(Screen::About),
            (Screen::Rules | Screen::About, RouterEvent::Back) => Some(Screen::Title),
            (s, RouterEvent::Home) if s != Screen::Title => Some(Screen::Title),
            _ => None,
        }
    }

    #[test]
    fn test_router_starts_on_title() {
        let router = Router::new();
        assert_eq!(router.current(), Screen::Title);
        assert!(!router.can_go_back());
        assert_eq!(router.history(), &[Screen::Title]);
    }

    #[test]
    fn test_transition_table() {
        for screen in Screen::ALL {
            for event in ALL_EVENTS {
                let mut router = router_on(screen);
                let before = router.history().to_vec();
                let result = router.handle(event);

                match expected_next(screen, event) {
                    Some(next) => {
                        let t = result
                            .unwrap_or_else(|| panic!("{:?} on {:?} ignored", event, screen));
                        assert_eq!(t, Transition { from: screen, to: next });
                        assert_eq!(router.current(), next);
                    }
                    None => {
                        assert!(result.is_none(), "{:?} on {:?} should be ignored", event, screen);
                        assert_eq!(router.history(), before.as_slice());
                    }
                }
            }
        }
    }

    #[test]
    fn test_back_returns_to_opener() {
        let mut router = router_on(Screen::Won);
        router.handle(RouterEvent::OpenRules).unwrap();
        assert!(router.can_go_back());

        let t = router.handle(RouterEvent::Back).unwrap();
        assert_eq!(t.to, Screen::Won);
    }

    #[test]
    fn test_info_pages_stack() {
        let mut router = Router::new();
        router.handle(RouterEvent::OpenRules);
        router.handle(RouterEvent::OpenAbout);
        assert_eq!(router.history(), &[Screen::Title, Screen::Rules, Screen::About]);

        router.handle(RouterEvent::Back);
        assert_eq!(router.current(), Screen::Rules);
        router.handle(RouterEvent::Back);
        assert_eq!(router.current(), Screen::Title);

        // Root cannot be popped
        assert!(router.handle(RouterEvent::Back).is_none());
        assert_eq!(router.current(), Screen::Title);
    }

    #[test]
    fn test_continue_clears_history() {
        let mut router = router_on(Screen::Lost);
        router.handle(RouterEvent::OpenAbout);
        router.handle(RouterEvent::Back);
        router.handle(RouterEvent::TryAgain).unwrap();
        assert_eq!(router.history(), &[Screen::Title]);
    }

    #[test]
    fn test_title_keys_are_distinct() {
        let keys: std::collections::HashSet<TitleKey> =
            Screen::ALL.iter().map(|s| s.title_key()).collect();
        assert_eq!(keys.len(), Screen::ALL.len());
        assert_eq!(Screen::Question.title_key(), TitleKey::QuestionProgress);
    }
}
