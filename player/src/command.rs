/// Notifications from the underlying media element and platform.
///
/// These are the only way the mirrored playback flags change: the
/// controller issues a command and waits for the element to confirm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    Play,
    Pause,
    /// Element stalled waiting for data.
    Waiting,
    /// Element resumed rendering after a stall.
    Playing,
    TimeUpdate(f64),
    /// Duration is known.
    LoadedMetadata(f64),
    FullscreenChange(bool),
}

/// Commands for the host to apply to its media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    /// Seek to an absolute time in seconds.
    Seek(f64),
    SetVolume(f32),
    SetMuted(bool),
    SetRate(f64),
    EnterFullscreen,
    ExitFullscreen,
}

/// Everything needed to attach a new video to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub url: String,
    pub poster: Option<String>,
    pub title: Option<String>,
}

impl MediaSource {
    pub fn new(url: impl Into<String>) -> Self {
        MediaSource {
            url: url.into(),
            poster: None,
            title: None,
        }
    }

    pub fn poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
