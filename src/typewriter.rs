use std::time::Duration;

pub const PHRASES: [&str; 2] = ["Software Developer", "Security and Network Engineer"];

pub const DEFAULT_TYPE_DELAY_MS: u64 = 100;
pub const DEFAULT_DELETE_DELAY_MS: u64 = 40;
pub const DEFAULT_HOLD_DELAY_MS: u64 = 1_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_delay: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(DEFAULT_TYPE_DELAY_MS),
            delete_delay: Duration::from_millis(DEFAULT_DELETE_DELAY_MS),
            hold_delay: Duration::from_millis(DEFAULT_HOLD_DELAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausingAtFull,
    Deleting,
    PausingAtEmpty,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::PausingAtFull => "pausing_at_full",
            Self::Deleting => "deleting",
            Self::PausingAtEmpty => "pausing_at_empty",
        }
    }
}

/// Identifies the state a scheduled tick was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
    timings: TypewriterTimings,
    generation: u64,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, timings: TypewriterTimings) -> Result<Self, &'static str>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err("typewriter needs at least one phrase");
        }

        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            timings,
            generation: 0,
        })
    }

    pub fn with_timings(timings: TypewriterTimings) -> Self {
        Self {
            phrases: PHRASES.iter().map(ToString::to_string).collect(),
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            timings,
            generation: 0,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    pub fn token(&self) -> TickToken {
        TickToken(self.generation)
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// The first `char_index` characters of the current phrase.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.char_index) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Delay before the next tick should fire.
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing | Phase::PausingAtEmpty => self.timings.type_delay,
            Phase::PausingAtFull => self.timings.hold_delay,
            Phase::Deleting => self.timings.delete_delay,
        }
    }

    pub fn advance(&mut self) {
        match self.phase {
            Phase::Typing => {
                let len = self.phrase_len();
                if self.char_index < len {
                    self.char_index += 1;
                }
                if self.char_index >= len {
                    self.phase = Phase::PausingAtFull;
                }
            }
            Phase::PausingAtFull => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::PausingAtEmpty;
                }
            }
            Phase::PausingAtEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
            }
        }

        self.generation = self.generation.wrapping_add(1);
    }

    /// Advances only when `token` was issued for the current state.
    pub fn advance_with(&mut self, token: TickToken) -> bool {
        if token != self.token() {
            return false;
        }

        self.advance();
        true
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::with_timings(TypewriterTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until<F>(typewriter: &mut Typewriter, mut done: F) -> usize
    where
        F: FnMut(&Typewriter) -> bool,
    {
        let mut ticks = 0;
        while !done(typewriter) {
            typewriter.advance();
            ticks += 1;
            assert!(ticks < 1_000, "typewriter never reached the expected state");
        }
        ticks
    }

    #[test]
    fn types_first_phrase_then_deletes_and_advances() {
        let mut typewriter = Typewriter::default();
        let first_len = PHRASES[0].chars().count();

        let ticks = run_until(&mut typewriter, |t| t.phase() == Phase::PausingAtFull);
        assert_eq!(ticks, first_len);
        assert_eq!(typewriter.text(), "Software Developer");
        assert!(!typewriter.is_deleting());

        typewriter.advance();
        assert!(typewriter.is_deleting());

        run_until(&mut typewriter, |t| t.phase() == Phase::PausingAtEmpty);
        assert_eq!(typewriter.char_index(), 0);
        assert_eq!(typewriter.text(), "");

        typewriter.advance();
        assert_eq!(typewriter.phrase_index(), 1);
        assert_eq!(typewriter.current_phrase(), "Security and Network Engineer");
        assert_eq!(typewriter.phase(), Phase::Typing);
    }

    #[test]
    fn phrase_index_wraps_after_last_phrase() {
        let mut typewriter = Typewriter::default();

        run_until(&mut typewriter, |t| t.phrase_index() == 1);
        run_until(&mut typewriter, |t| t.phrase_index() == 0);

        assert_eq!(typewriter.phase(), Phase::Typing);
        assert_eq!(typewriter.text(), "");
    }

    #[test]
    fn rendered_text_stays_within_phrase_bounds() {
        let mut typewriter = Typewriter::default();

        for _ in 0..500 {
            let len = typewriter.current_phrase().chars().count();
            assert!(typewriter.char_index() <= len);
            assert!(typewriter.current_phrase().starts_with(typewriter.text()));
            typewriter.advance();
        }
    }

    #[test]
    fn delays_follow_phase() {
        let mut typewriter = Typewriter::default();
        assert_eq!(typewriter.next_delay(), Duration::from_millis(100));

        run_until(&mut typewriter, |t| t.phase() == Phase::PausingAtFull);
        assert_eq!(typewriter.next_delay(), Duration::from_millis(1_500));

        typewriter.advance();
        assert_eq!(typewriter.next_delay(), Duration::from_millis(40));
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut typewriter = Typewriter::default();
        let stale = typewriter.token();

        assert!(typewriter.advance_with(stale));
        assert_eq!(typewriter.char_index(), 1);

        assert!(!typewriter.advance_with(stale));
        assert_eq!(typewriter.char_index(), 1);
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let mut typewriter =
            Typewriter::new(["héllo"], TypewriterTimings::default()).expect("one phrase");

        typewriter.advance();
        typewriter.advance();
        assert_eq!(typewriter.text(), "hé");
    }

    #[test]
    fn empty_phrase_pauses_immediately() {
        let mut typewriter = Typewriter::new([""], TypewriterTimings::default()).expect("one phrase");

        typewriter.advance();
        assert_eq!(typewriter.phase(), Phase::PausingAtFull);
        assert_eq!(typewriter.text(), "");
    }

    #[test]
    fn no_phrases_is_rejected() {
        let result = Typewriter::new(Vec::<String>::new(), TypewriterTimings::default());
        assert!(result.is_err());
    }
}
