//! Typing/deleting phrase rotation, independent of any timer or DOM.
//!
//! The cycler only knows how long to wait before its next tick and what a
//! tick does. Whoever owns it (the `Typewriter` component, or a test) is
//! responsible for actually waiting.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TypingError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("invalid typing configuration: {0}")]
    InvalidConfiguration(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Paused,
    Deleting,
}

/// Timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    pub typing_speed: u32,
    pub deleting_speed: u32,
    pub pause_time: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_speed: 80,
            deleting_speed: 50,
            pause_time: 1500,
        }
    }
}

impl TypingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.typing_speed == 0 {
            return Err(TypingError::InvalidConfiguration("typing speed must be positive"));
        }
        if self.deleting_speed == 0 {
            return Err(TypingError::InvalidConfiguration("deleting speed must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingCycler {
    phrases: Vec<String>,
    config: TypingConfig,
    active: usize,
    // number of chars of the active phrase currently shown
    shown: usize,
    mode: Mode,
}

impl TypingCycler {
    pub fn new<I, S>(phrases: I, config: TypingConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypingError::InvalidConfiguration("phrase list is empty"));
        }
        config.validate()?;

        let mut cycler = Self {
            phrases,
            config,
            active: 0,
            shown: 0,
            mode: Mode::Typing,
        };
        cycler.settle();
        Ok(cycler)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn config(&self) -> TypingConfig {
        self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Prefix of the active phrase that is currently visible.
    pub fn displayed(&self) -> &str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Milliseconds to wait before calling [`tick`](Self::tick) again.
    pub fn next_delay(&self) -> u32 {
        match self.mode {
            Mode::Typing => self.config.typing_speed,
            Mode::Paused => self.config.pause_time,
            Mode::Deleting => self.config.deleting_speed,
        }
    }

    /// Runs one tick. Returns `true` when [`displayed`](Self::displayed)
    /// changed.
    pub fn tick(&mut self) -> bool {
        let changed = match self.mode {
            Mode::Typing => {
                self.shown += 1;
                true
            }
            Mode::Paused => {
                self.mode = Mode::Deleting;
                false
            }
            Mode::Deleting => {
                self.shown -= 1;
                true
            }
        };
        self.settle();
        changed
    }

    fn phrase(&self) -> &str {
        &self.phrases[self.active]
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    // Applies the transitions that happen without waiting: a fully typed
    // phrase pauses, a fully deleted one hands over to the next phrase.
    fn settle(&mut self) {
        if self.mode == Mode::Deleting && self.shown == 0 {
            self.active = (self.active + 1) % self.phrases.len();
            self.mode = Mode::Typing;
        }
        if self.mode == Mode::Typing && self.shown >= self.phrase_len() {
            self.mode = Mode::Paused;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(typing: u32, deleting: u32, pause: u32) -> TypingConfig {
        TypingConfig {
            typing_speed: typing,
            deleting_speed: deleting,
            pause_time: pause,
        }
    }

    /// Drives the cycler like a timer would, recording `(time, displayed)`
    /// every time the text changes, up to and including `until`.
    fn trace(cycler: &mut TypingCycler, until: u64) -> Vec<(u64, String)> {
        let mut out = vec![(0, cycler.displayed().to_owned())];
        let mut now = 0u64;
        loop {
            now += u64::from(cycler.next_delay());
            if now > until {
                break;
            }
            if cycler.tick() {
                out.push((now, cycler.displayed().to_owned()));
            }
        }
        out
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let err = TypingCycler::new(Vec::<String>::new(), TypingConfig::default()).unwrap_err();
        assert!(matches!(err, TypingError::InvalidConfiguration(_)));
    }

    #[test]
    fn zero_speeds_are_rejected() {
        assert!(TypingCycler::new(["a"], config(0, 50, 100)).is_err());
        assert!(TypingCycler::new(["a"], config(50, 0, 100)).is_err());
        assert!(TypingCycler::new(["a"], config(50, 50, 0)).is_ok());
    }

    #[test]
    fn starts_typing_first_phrase() {
        let c = TypingCycler::new(["Hi", "Yo"], TypingConfig::default()).unwrap();
        assert_eq!(c.mode(), Mode::Typing);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.displayed(), "");
        assert_eq!(c.next_delay(), 80);
    }

    #[test]
    fn hi_yo_timeline() {
        let mut c = TypingCycler::new(["Hi", "Yo"], config(100, 50, 200)).unwrap();
        let got = trace(&mut c, 1400);
        let expected: Vec<(u64, String)> = [
            (0, ""),
            (100, "H"),
            (200, "Hi"),
            (450, "H"),
            (500, ""),
            (600, "Y"),
            (700, "Yo"),
            (950, "Y"),
            (1000, ""),
            (1100, "H"),
            (1200, "Hi"),
        ]
        .into_iter()
        .map(|(t, s)| (t, s.to_owned()))
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn pause_then_delete_without_changing_text() {
        let mut c = TypingCycler::new(["Hi"], config(100, 50, 200)).unwrap();
        c.tick();
        c.tick();
        assert_eq!(c.mode(), Mode::Paused);
        assert_eq!(c.next_delay(), 200);

        assert!(!c.tick());
        assert_eq!(c.mode(), Mode::Deleting);
        assert_eq!(c.displayed(), "Hi");
        assert_eq!(c.next_delay(), 50);
    }

    #[test]
    fn index_advances_only_after_full_delete() {
        let mut c = TypingCycler::new(["ab", "c"], config(1, 1, 1)).unwrap();
        let mut seen = Vec::new();
        for _ in 0..12 {
            c.tick();
            seen.push((c.active_index(), c.mode(), c.displayed().to_owned()));
            if c.active_index() == 1 && c.mode() == Mode::Typing {
                assert_eq!(c.displayed(), "");
            }
        }
        // wraps back to the first phrase
        assert!(seen.iter().any(|(i, _, _)| *i == 1));
        assert_eq!(seen.last().map(|s| s.0), Some(0));
    }

    #[test]
    fn displayed_is_always_a_prefix() {
        let mut c =
            TypingCycler::new(["Ordena tus Deberes", "Previene desórdenes"], config(1, 1, 1))
                .unwrap();
        for _ in 0..200 {
            let active = &c.phrases()[c.active_index()];
            assert!(active.starts_with(c.displayed()));
            c.tick();
        }
    }

    #[test]
    fn multibyte_chars_are_typed_whole() {
        let mut c = TypingCycler::new(["ñó"], config(1, 1, 1)).unwrap();
        c.tick();
        assert_eq!(c.displayed(), "ñ");
        c.tick();
        assert_eq!(c.displayed(), "ñó");
        assert_eq!(c.mode(), Mode::Paused);
    }

    #[test]
    fn single_empty_phrase_loops_quietly() {
        let mut c = TypingCycler::new([""], config(100, 50, 200)).unwrap();
        assert_eq!(c.mode(), Mode::Paused);
        for _ in 0..10 {
            assert!(!c.tick());
            assert_eq!(c.displayed(), "");
            assert_eq!(c.active_index(), 0);
            assert_eq!(c.mode(), Mode::Paused);
        }
    }

    #[test]
    fn empty_phrase_between_others_is_skipped_after_pause() {
        let mut c = TypingCycler::new(["a", "", "b"], config(10, 10, 30)).unwrap();
        c.tick(); // "a", paused
        c.tick(); // deleting
        c.tick(); // "", next phrase is empty so straight to paused
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.mode(), Mode::Paused);
        c.tick(); // deleting "" completes at once
        assert_eq!(c.active_index(), 2);
        assert_eq!(c.mode(), Mode::Typing);
    }

    #[test]
    fn identical_configs_give_identical_traces() {
        let cfg = config(100, 30, 1500);
        let phrases = ["Mejora Continua", "Acelera tu progreso"];
        let mut a = TypingCycler::new(phrases, cfg).unwrap();
        let mut b = TypingCycler::new(phrases, cfg).unwrap();
        assert_eq!(trace(&mut a, 20_000), trace(&mut b, 20_000));
    }
}
