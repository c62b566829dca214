//! Statistical analysis of free text.
//!
//! Classification is byte oriented: ASCII letters and punctuation are
//! classified, anything else only counts toward the total. A word is a
//! maximal run of ASCII letters, so digits and apostrophes split words.

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

#[derive(Debug, Default, Clone)]
pub struct TextStats {
    pub total_chars: usize,
    pub chars_no_space: usize,
    pub words: usize,
    pub sentences: usize,
    pub lines: usize,
    pub letters: usize,
    pub spaces: usize,
    pub punctuation: usize,
    /// Occurrences of a, e, i, o, u in that order, case folded.
    pub vowel_counts: [usize; 5],
    pub longest_word: String,
    pub shortest_word: String,
    total_word_len: usize,
    alpha_present: [bool; 26],
}

impl TextStats {
    pub fn analyze(text: &str) -> Self {
        let mut stats = TextStats {
            total_chars: text.len(),
            ..Self::default()
        };

        let mut current = String::new();
        // A zero sentinel flushes a word that runs to the end of the text.
        for &b in text.as_bytes().iter().chain(std::iter::once(&0u8)) {
            if b == b'\n' {
                stats.lines += 1;
            }
            if matches!(b, b'.' | b'!' | b'?') {
                stats.sentences += 1;
            }

            if b.is_ascii_alphabetic() {
                stats.letters += 1;
                stats.chars_no_space += 1;
                let lower = b.to_ascii_lowercase();
                stats.alpha_present[(lower - b'a') as usize] = true;
                if let Some(vi) = VOWELS.iter().position(|&v| v as u8 == lower) {
                    stats.vowel_counts[vi] += 1;
                }
                current.push(b as char);
            } else {
                if b.is_ascii_whitespace() && b != b'\n' && b != b'\r' {
                    stats.spaces += 1;
                } else if b.is_ascii_punctuation() {
                    stats.punctuation += 1;
                    stats.chars_no_space += 1;
                }
                if !current.is_empty() {
                    stats.finish_word(&mut current);
                }
            }
        }
        stats
    }

    fn finish_word(&mut self, current: &mut String) {
        self.words += 1;
        self.total_word_len += current.len();
        if self.longest_word.is_empty() || current.len() > self.longest_word.len() {
            self.longest_word = current.clone();
        }
        if self.shortest_word.is_empty() || current.len() < self.shortest_word.len() {
            self.shortest_word = current.clone();
        }
        current.clear();
    }

    pub fn average_word_length(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.total_word_len as f64 / self.words as f64
        }
    }

    /// Share of `count` in the total character count, as a percentage.
    /// Empty text reports 0 rather than dividing by zero.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total_chars == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total_chars as f64
        }
    }

    pub fn is_pangram(&self) -> bool {
        self.alpha_present.iter().all(|&present| present)
    }
}
