use serde::{Deserialize, Serialize};

/// The fixed set of playback speeds the player offers.
///
/// A closed enum rather than a raw float: anything outside this set is
/// unrepresentable, so a bad value from a host can only be rejected at
/// the boundary, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackRate {
    Quarter,
    Half,
    ThreeQuarter,
    #[default]
    Normal,
    OneQuarterX,
    OneHalfX,
    OneThreeQuarterX,
    Double,
}

impl PlaybackRate {
    /// Menu order, slowest first.
    pub const ALL: [PlaybackRate; 8] = [
        PlaybackRate::Quarter,
        PlaybackRate::Half,
        PlaybackRate::ThreeQuarter,
        PlaybackRate::Normal,
        PlaybackRate::OneQuarterX,
        PlaybackRate::OneHalfX,
        PlaybackRate::OneThreeQuarterX,
        PlaybackRate::Double,
    ];

    pub fn value(self) -> f64 {
        match self {
            PlaybackRate::Quarter => 0.25,
            PlaybackRate::Half => 0.5,
            PlaybackRate::ThreeQuarter => 0.75,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneQuarterX => 1.25,
            PlaybackRate::OneHalfX => 1.5,
            PlaybackRate::OneThreeQuarterX => 1.75,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Exact match against the fixed set; anything else is not a rate.
    pub fn from_value(value: f64) -> Option<PlaybackRate> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }

    /// Menu label, `Normal` for 1x like the settings panel shows it.
    pub fn label(self) -> String {
        if self == PlaybackRate::Normal {
            "Normal".to_string()
        } else {
            format!("{}x", self.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_from_value_round_trips() {
        for rate in PlaybackRate::ALL {
            assert_eq!(PlaybackRate::from_value(rate.value()), Some(rate));
        }
    }

    #[test]
    fn check_arbitrary_value_is_rejected() {
        assert_eq!(PlaybackRate::from_value(1.33), None);
        assert_eq!(PlaybackRate::from_value(0.0), None);
        assert_eq!(PlaybackRate::from_value(f64::NAN), None);
    }

    #[test]
    fn check_default_is_normal() {
        assert_eq!(PlaybackRate::default().value(), 1.0);
    }

    #[test]
    fn check_labels() {
        assert_eq!(PlaybackRate::Normal.label(), "Normal");
        assert_eq!(PlaybackRate::Half.label(), "0.5x");
        assert_eq!(PlaybackRate::Double.label(), "2x");
    }
}
