use super::Cue;

/// Parse a subtitle file's text into cues.
///
/// Accepts SRT (`HH:MM:SS,mmm --> HH:MM:SS,mmm`) and WebVTT style
/// (`MM:SS.mmm`, with or without an hours field) timing lines. The
/// parser is deliberately lenient: a cue block whose timing line does
/// not parse is dropped and the rest of the file is still used. A
/// corrupt subtitle file should degrade to fewer cues, never block
/// playback.
pub fn parse(content: &str) -> Vec<Cue> {
    let mut cues = Vec::new();
    let mut pending: Option<Cue> = None;

    // Handles CRLF as well since lines are trimmed.
    for raw in content.lines() {
        let line = raw.trim();

        if line.is_empty() {
            finalize(&mut pending, &mut cues);
            continue;
        }

        if line.contains("-->") {
            if let Some((start, end)) = parse_timing_line(line) {
                match pending {
                    // A second timing line before any blank separator
                    // updates the window in place rather than
                    // starting a new cue.
                    Some(ref mut cue) => {
                        cue.start = start;
                        cue.end = end;
                    }
                    None => {
                        pending = Some(Cue {
                            start,
                            end,
                            text: String::new(),
                        });
                    }
                }
            } else {
                log::debug!("skipping malformed timing line: {:?}", line);
            }
        } else if let Some(ref mut cue) = pending {
            if !cue.text.is_empty() {
                cue.text.push('\n');
            }
            cue.text.push_str(line);
        }
        // Anything before the first timing line (numeric cue ids, the
        // WEBVTT header, NOTE blocks) falls through and is ignored.
    }

    finalize(&mut pending, &mut cues);
    cues
}

fn finalize(pending: &mut Option<Cue>, cues: &mut Vec<Cue>) {
    if let Some(cue) = pending.take() {
        if !cue.text.is_empty() {
            cues.push(cue);
        }
    }
}

fn parse_timing_line(line: &str) -> Option<(f64, f64)> {
    let re = once_cell_regex::regex!(
        r"((?:\d{1,2}:)?\d{1,2}:\d{1,2}(?:[,.]\d{1,3})?)\s*-->\s*((?:\d{1,2}:)?\d{1,2}:\d{1,2}(?:[,.]\d{1,3})?)"
    );
    let caps = re.captures(line)?;
    let start = parse_timestamp(caps.get(1)?.as_str())?;
    let end = parse_timestamp(caps.get(2)?.as_str())?;
    Some((start, end))
}

/// `HH:MM:SS,mmm`, `HH:MM:SS.mmm`, or the short `MM:SS.mmm` form.
/// Milliseconds are optional and default to zero.
fn parse_timestamp(ts: &str) -> Option<f64> {
    let parts: Vec<&str> = ts.split(':').collect();
    let (hours, minutes, sec_part) = match parts.as_slice() {
        [h, m, s] => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?, *s),
        [m, s] => (0, m.parse::<u32>().ok()?, *s),
        _ => return None,
    };

    let (seconds, millis) = match sec_part.split_once([',', '.']) {
        Some((s, ms)) => (s.parse::<u32>().ok()?, ms.parse::<u32>().ok()?),
        None => (sec_part.parse::<u32>().ok()?, 0),
    };

    Some(f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(millis) / 1000.0)
}
