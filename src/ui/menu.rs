//! Main menu and credits navigation

use super::game_state::GameMode;

/// Entry in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play(GameMode),
    Credits,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Play(GameMode::HumanVsHuman),
        MenuItem::Play(GameMode::RandomVsHuman),
        MenuItem::Play(GameMode::MinimaxVsHuman),
        MenuItem::Credits,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play(mode) => mode.label(),
            MenuItem::Credits => "Credits",
        }
    }
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Credits,
    Playing,
}

/// Main menu cursor. Up/Down wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainMenu {
    cursor: usize,
}

impl MainMenu {
    /// Menu with the cursor on `mode`
    pub fn new(mode: GameMode) -> Self {
        let mut menu = Self { cursor: 0 };
        menu.select(MenuItem::Play(mode));
        menu
    }

    /// Move the cursor straight to `item`
    pub fn select(&mut self, item: MenuItem) {
        if let Some(cursor) = MenuItem::ALL.iter().position(|&i| i == item) {
            self.cursor = cursor;
        }
    }

    #[inline]
    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.cursor]
    }

    pub fn down(&mut self) {
        self.cursor = (self.cursor + 1) % MenuItem::ALL.len();
    }

    pub fn up(&mut self) {
        self.cursor = (self.cursor + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    /// Screen reached by pressing Enter
    pub fn confirm(&self) -> Screen {
        match self.selected() {
            MenuItem::Play(_) => Screen::Playing,
            MenuItem::Credits => Screen::Credits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_on_mode() {
        let menu = MainMenu::new(GameMode::RandomVsHuman);
        assert_eq!(menu.selected(), MenuItem::Play(GameMode::RandomVsHuman));
    }

    #[test]
    fn test_menu_select() {
        let mut menu = MainMenu::new(GameMode::HumanVsHuman);
        menu.select(MenuItem::Credits);
        assert_eq!(menu.selected(), MenuItem::Credits);
        assert_eq!(menu.confirm(), Screen::Credits);
    }

    #[test]
    fn test_menu_down_wraps() {
        let mut menu = MainMenu::new(GameMode::HumanVsHuman);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(menu.selected());
            menu.down();
        }
        assert_eq!(&seen[..4], &MenuItem::ALL);
        assert_eq!(seen[4], MenuItem::ALL[0]);
    }

    #[test]
    fn test_menu_up_wraps_to_credits() {
        let mut menu = MainMenu::new(GameMode::HumanVsHuman);
        menu.up();
        assert_eq!(menu.selected(), MenuItem::Credits);
        assert_eq!(menu.confirm(), Screen::Credits);
        menu.up();
        assert_eq!(menu.selected(), MenuItem::Play(GameMode::MinimaxVsHuman));
        assert_eq!(menu.confirm(), Screen::Playing);
    }
}
