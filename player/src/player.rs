use std::time::Instant;

use marquee_core::{active_cue, subs, Cue};

use crate::{
    command::{MediaCommand, MediaEvent, MediaSource},
    controls::ControlsVisibility,
    rate::PlaybackRate,
    settings::{SettingsPanel, SubPanel, SubtitlePosition},
};

/// The owned state object behind the video player UI.
///
/// One instance per active player. User intents come in as method
/// calls and return [`MediaCommand`]s for the host to apply; the media
/// element's own lifecycle comes back as [`MediaEvent`]s. The mirrored
/// flags (`is_playing`, `is_fullscreen`, ...) only change when an
/// event confirms them, never when a command is issued.
#[derive(Debug)]
pub struct Player {
    source: Option<MediaSource>,
    current_time: f64,
    duration: f64,
    is_playing: bool,
    is_muted: bool,
    is_fullscreen: bool,
    is_loading: bool,
    volume: f32,
    playback_rate: PlaybackRate,
    cues: Vec<Cue>,
    active_caption: String,
    settings: SettingsPanel,
    subtitle_position: SubtitlePosition,
    controls: ControlsVisibility,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            source: None,
            current_time: 0.0,
            duration: 0.0,
            is_playing: false,
            is_muted: false,
            is_fullscreen: false,
            is_loading: false,
            volume: 1.0,
            playback_rate: PlaybackRate::default(),
            cues: Vec::new(),
            active_caption: String::new(),
            settings: SettingsPanel::default(),
            subtitle_position: SubtitlePosition::default(),
            controls: ControlsVisibility::default(),
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Player::default()
    }

    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }
    pub fn current_time(&self) -> f64 {
        self.current_time
    }
    pub fn duration(&self) -> f64 {
        self.duration
    }
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
    pub fn volume(&self) -> f32 {
        self.volume
    }
    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback_rate
    }
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }
    /// Caption text to render right now, empty when none is active.
    pub fn active_caption(&self) -> &str {
        &self.active_caption
    }
    pub fn settings(&self) -> SettingsPanel {
        self.settings
    }
    pub fn subtitle_position(&self) -> SubtitlePosition {
        self.subtitle_position
    }
    pub fn controls_visible(&self) -> bool {
        self.controls.visible()
    }

    /// Point the player at a new video.
    ///
    /// Per-video state resets in one step: time, duration, cues,
    /// caption, rate back to normal, loading flag, and any pending
    /// controls hide. Volume, mute and subtitle position are user
    /// preferences and survive the swap.
    pub fn attach_source(&mut self, source: MediaSource) {
        log::debug!("attaching source: {}", source.url);
        self.source = Some(source);
        self.current_time = 0.0;
        self.duration = 0.0;
        self.is_playing = false;
        self.is_loading = false;
        self.playback_rate = PlaybackRate::default();
        self.cues.clear();
        self.active_caption.clear();
        self.settings.close();
        self.controls.reset();
    }

    /// Apply a notification from the media element or platform.
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => self.is_playing = true,
            MediaEvent::Pause => {
                self.is_playing = false;
                self.controls.playback_paused();
            }
            MediaEvent::Waiting => self.is_loading = true,
            MediaEvent::Playing => self.is_loading = false,
            MediaEvent::TimeUpdate(time) => {
                self.current_time = time;
                self.active_caption = active_cue(&self.cues, time)
                    .map(|cue| cue.text.clone())
                    .unwrap_or_default();
            }
            MediaEvent::LoadedMetadata(duration) => self.duration = duration,
            MediaEvent::FullscreenChange(fullscreen) => self.is_fullscreen = fullscreen,
        }
    }

    pub fn toggle_play(&self) -> MediaCommand {
        if self.is_playing {
            MediaCommand::Pause
        } else {
            MediaCommand::Play
        }
    }

    fn metadata_loaded(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    /// Timeline scrub: `fraction` in 0..=100 from the range input.
    /// No-op until the duration is known.
    pub fn seek_to_fraction(&self, fraction: f64) -> Option<MediaCommand> {
        if !self.metadata_loaded() {
            log::debug!("ignoring seek before metadata loaded");
            return None;
        }
        Some(MediaCommand::Seek(fraction / 100.0 * self.duration))
    }

    /// Jump forward or back, clamped to the video bounds.
    pub fn skip(&self, delta_seconds: f64) -> Option<MediaCommand> {
        if !self.metadata_loaded() {
            log::debug!("ignoring skip before metadata loaded");
            return None;
        }
        let target = (self.current_time + delta_seconds).clamp(0.0, self.duration);
        Some(MediaCommand::Seek(target))
    }

    /// Volume slider. Dragging to zero counts as muting; when the
    /// mute flag flips, a `SetMuted` follows the `SetVolume` so the
    /// element's muted state stays in step with the mirrored flag.
    pub fn set_volume(&mut self, volume: f32) -> Vec<MediaCommand> {
        let volume = volume.clamp(0.0, 1.0);
        self.volume = volume;
        let muted = volume == 0.0;
        let mut commands = vec![MediaCommand::SetVolume(volume)];
        if muted != self.is_muted {
            self.is_muted = muted;
            commands.push(MediaCommand::SetMuted(muted));
        }
        commands
    }

    /// Mute button. Independent of the slider: the stored volume is
    /// untouched, so unmuting restores the prior level.
    pub fn toggle_mute(&mut self) -> MediaCommand {
        self.is_muted = !self.is_muted;
        MediaCommand::SetMuted(self.is_muted)
    }

    /// Request entering or leaving fullscreen. The flag itself only
    /// flips once the platform confirms via `FullscreenChange`.
    pub fn toggle_fullscreen(&self) -> MediaCommand {
        if self.is_fullscreen {
            MediaCommand::ExitFullscreen
        } else {
            MediaCommand::EnterFullscreen
        }
    }

    /// Select a playback speed. Values outside the fixed set are
    /// ignored.
    pub fn set_playback_rate(&mut self, value: f64) -> Option<MediaCommand> {
        match PlaybackRate::from_value(value) {
            Some(rate) => {
                self.playback_rate = rate;
                Some(MediaCommand::SetRate(rate.value()))
            }
            None => {
                log::debug!("ignoring playback rate outside the fixed set: {}", value);
                None
            }
        }
    }

    /// Load a subtitle file's contents, replacing the current cue
    /// list. A malformed file degrades to fewer (or zero) cues.
    pub fn load_subtitles(&mut self, content: &str) {
        self.cues = subs::parse(content);
        log::debug!("loaded {} subtitle cues", self.cues.len());
        self.active_caption.clear();
    }

    /// The OFF choice in the subtitles panel.
    pub fn clear_subtitles(&mut self) {
        self.cues.clear();
        self.active_caption.clear();
    }

    pub fn set_subtitle_position(&mut self, position: SubtitlePosition) {
        self.subtitle_position = position;
    }

    pub fn open_settings(&mut self) {
        self.settings.open();
    }
    pub fn close_settings(&mut self) {
        self.settings.close();
    }
    pub fn navigate_settings(&mut self, panel: SubPanel) {
        self.settings.navigate(panel);
    }
    pub fn settings_back(&mut self) {
        self.settings.back();
    }
    /// Click on the dimmed backdrop around the overlay.
    pub fn click_outside_settings(&mut self) {
        self.settings.close();
    }

    pub fn pointer_moved(&mut self, now: Instant) {
        self.controls.pointer_moved(now, self.is_playing);
    }

    pub fn pointer_left(&mut self) {
        self.controls.pointer_left(self.is_playing);
    }

    /// Host clock tick; returns true if the controls just auto-hid.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.controls.tick(now)
    }
}
