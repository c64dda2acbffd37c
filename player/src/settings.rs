use serde::{Deserialize, Serialize};

/// The settings sub-panels reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubPanel {
    Audio,
    Video,
    Subtitles,
    PlaybackRate,
}

/// Navigation state of the settings overlay.
///
/// `Main` is the only hub: sub-panels are reached from it and return
/// to it via the back action, never to each other. The transition
/// methods enforce the rule; an invalid request leaves the state
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SettingsPanel {
    #[default]
    Closed,
    Main,
    Sub(SubPanel),
}

impl SettingsPanel {
    /// Gear button: open the overlay on the main menu. Valid from any
    /// state; a sub-panel that is already showing resets to the hub.
    pub fn open(&mut self) {
        *self = SettingsPanel::Main;
    }

    /// Explicit close, or a click outside the overlay. Valid anywhere.
    pub fn close(&mut self) {
        *self = SettingsPanel::Closed;
    }

    /// Enter a sub-panel. Only valid from the main menu.
    pub fn navigate(&mut self, panel: SubPanel) {
        if *self == SettingsPanel::Main {
            *self = SettingsPanel::Sub(panel);
        } else {
            log::debug!("ignoring navigation to {:?} from {:?}", panel, self);
        }
    }

    /// Back arrow inside a sub-panel, returning to the main menu.
    pub fn back(&mut self) {
        if let SettingsPanel::Sub(_) = self {
            *self = SettingsPanel::Main;
        }
    }

    pub fn is_open(&self) -> bool {
        *self != SettingsPanel::Closed
    }
}

/// Where caption text is rendered over the video. Purely a rendering
/// concern, no playback effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubtitlePosition {
    Top,
    #[default]
    Bottom,
    BottomLeft,
    BottomRight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_open_from_closed_lands_on_main() {
        let mut panel = SettingsPanel::Closed;
        panel.open();
        assert_eq!(panel, SettingsPanel::Main);
    }

    #[test]
    fn check_open_from_sub_panel_resets_to_main() {
        let mut panel = SettingsPanel::Sub(SubPanel::Audio);
        panel.open();
        assert_eq!(panel, SettingsPanel::Main);
    }

    #[test]
    fn check_navigate_from_main() {
        let mut panel = SettingsPanel::Main;
        panel.navigate(SubPanel::Subtitles);
        assert_eq!(panel, SettingsPanel::Sub(SubPanel::Subtitles));
    }

    #[test]
    fn check_sub_panel_cannot_jump_to_sibling() {
        let mut panel = SettingsPanel::Sub(SubPanel::Subtitles);
        panel.navigate(SubPanel::Audio);
        assert_eq!(panel, SettingsPanel::Sub(SubPanel::Subtitles));
    }

    #[test]
    fn check_back_returns_to_main() {
        let mut panel = SettingsPanel::Sub(SubPanel::Audio);
        panel.back();
        assert_eq!(panel, SettingsPanel::Main);
    }

    #[test]
    fn check_close_works_from_any_state() {
        for mut panel in [
            SettingsPanel::Closed,
            SettingsPanel::Main,
            SettingsPanel::Sub(SubPanel::PlaybackRate),
        ] {
            panel.close();
            assert_eq!(panel, SettingsPanel::Closed);
        }
    }

    #[test]
    fn check_navigate_from_closed_is_ignored() {
        let mut panel = SettingsPanel::Closed;
        panel.navigate(SubPanel::Video);
        assert_eq!(panel, SettingsPanel::Closed);
    }
}
