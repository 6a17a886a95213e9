use std::time::Duration;

/// Mascot expression for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MascotMood {
    Idle,
    Thinking,
    Happy,
    Sad,
}

impl MascotMood {
    pub fn glyph(&self) -> &'static str {
        match self {
            MascotMood::Idle => "🐻",
            MascotMood::Thinking => "🤔",
            MascotMood::Happy => "🥳",
            MascotMood::Sad => "😢",
        }
    }

    /// Speech bubble, if the mood has one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            MascotMood::Happy => Some("Bravo!"),
            MascotMood::Sad => Some("Oh nu!"),
            MascotMood::Idle | MascotMood::Thinking => None,
        }
    }

    pub fn for_outcome(was_correct: bool) -> Self {
        if was_correct {
            MascotMood::Happy
        } else {
            MascotMood::Sad
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// One oscillator note: start `delay` after the cue begins, decay over
/// `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub delay: Duration,
    pub duration: Duration,
    pub gain: f32,
}

impl Tone {
    const fn new(frequency_hz: f32, waveform: Waveform, delay_ms: u64, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            waveform,
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
            gain: TONE_GAIN,
        }
    }
}

/// Gain every tone starts at before its exponential fade.
pub const TONE_GAIN: f32 = 0.1;

const CORRECT_TONES: [Tone; 2] = [
    Tone::new(600.0, Waveform::Sine, 0, 100),
    Tone::new(800.0, Waveform::Sine, 100, 200),
];

const WRONG_TONES: [Tone; 2] = [
    Tone::new(150.0, Waveform::Sawtooth, 0, 300),
    Tone::new(100.0, Waveform::Sawtooth, 200, 400),
];

const WIN_TONES: [Tone; 4] = [
    Tone::new(523.25, Waveform::Square, 0, 300),
    Tone::new(659.25, Waveform::Square, 150, 300),
    Tone::new(783.99, Waveform::Square, 300, 300),
    Tone::new(1046.50, Waveform::Square, 450, 300),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Correct,
    Wrong,
    Win,
}

impl SoundCue {
    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundCue::Correct => &CORRECT_TONES,
            SoundCue::Wrong => &WRONG_TONES,
            SoundCue::Win => &WIN_TONES,
        }
    }

    pub fn for_outcome(was_correct: bool) -> Self {
        if was_correct {
            SoundCue::Correct
        } else {
            SoundCue::Wrong
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fanfare_is_staggered() {
        let delays: Vec<u64> = SoundCue::Win
            .tones()
            .iter()
            .map(|t| t.delay.as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
    }

    #[test]
    fn test_every_tone_starts_quiet() {
        for cue in [SoundCue::Correct, SoundCue::Wrong, SoundCue::Win] {
            assert!(cue.tones().iter().all(|t| t.gain == TONE_GAIN));
        }
    }

    #[test]
    fn test_outcome_mapping() {
        assert_eq!(SoundCue::for_outcome(true), SoundCue::Correct);
        assert_eq!(MascotMood::for_outcome(false).message(), Some("Oh nu!"));
        assert_eq!(MascotMood::Thinking.message(), None);
    }
}
