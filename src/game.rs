//! Guessing game round engine and session statistics.

use rand::Rng;

pub const DEFAULT_MIN: i32 = 1;
pub const DEFAULT_MAX: i32 = 100;
pub const MAX_ATTEMPTS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Higher,
    Lower,
}

/// One round against a fixed secret. The displayed range narrows only when
/// the guess lies inside it, so wild guesses never widen it back out.
#[derive(Debug)]
pub struct Round {
    secret: i32,
    pub min: i32,
    pub max: i32,
    pub attempts: u32,
}

impl Round {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_secret(rng.gen_range(DEFAULT_MIN..=DEFAULT_MAX))
    }

    pub fn with_secret(secret: i32) -> Self {
        Self {
            secret,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            attempts: 0,
        }
    }

    /// Score one guess. The attempt counter only moves here, so callers can
    /// retry malformed console input for free by not calling this.
    pub fn guess(&mut self, guess: i32) -> Verdict {
        self.attempts += 1;
        if guess == self.secret {
            Verdict::Correct
        } else if guess < self.secret {
            if guess >= self.min {
                self.min = guess + 1;
            }
            Verdict::Higher
        } else {
            if guess <= self.max {
                self.max = guess - 1;
            }
            Verdict::Lower
        }
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    /// Whole-game efficiency in percent: one attempt scores 100, using all
    /// of them scores 1/MAX of that scale.
    pub fn efficiency(&self) -> f64 {
        f64::from(MAX_ATTEMPTS - self.attempts + 1) / f64::from(MAX_ATTEMPTS) * 100.0
    }
}

/// Running totals across the session.
#[derive(Debug, Default)]
pub struct Session {
    pub games: u32,
    pub wins: u32,
    pub attempts: u32,
}

impl Session {
    pub fn record(&mut self, attempts: u32, won: bool) {
        self.games += 1;
        self.attempts += attempts;
        if won {
            self.wins += 1;
        }
    }

    pub fn average_attempts(&self) -> f64 {
        f64::from(self.attempts) / f64::from(self.games)
    }
}
