use std::fmt;

use crate::Cue;

/// Flatten a run of cues into a single script line.
pub struct CleanCues<'a>(pub &'a [Cue]);

impl<'a> fmt::Display for CleanCues<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, cue) in self.0.iter().enumerate() {
            if idx != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", CleanCue(cue))?;
        }
        Ok(())
    }
}

/// One cue's text with line breaks and leading dialogue dashes removed.
pub struct CleanCue<'a>(pub &'a Cue);

impl<'a> fmt::Display for CleanCue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.0.text.lines().enumerate() {
            if idx != 0 {
                f.write_str(" ")?;
            }
            let text = line.trim().trim_start_matches('-').trim();
            f.write_str(text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(text: &str) -> Cue {
        Cue {
            start: 0.0,
            end: 1.0,
            text: text.to_string(),
        }
    }

    #[test]
    fn check_lines_join_with_spaces() {
        assert_eq!(CleanCue(&cue("two\nlines")).to_string(), "two lines");
    }

    #[test]
    fn check_dialogue_dashes_stripped() {
        assert_eq!(
            CleanCue(&cue("- who?\n- me.")).to_string(),
            "who? me."
        );
    }

    #[test]
    fn check_cues_join_into_script() {
        let cues = vec![cue("first"), cue("second")];
        assert_eq!(CleanCues(&cues).to_string(), "first second");
    }
}
