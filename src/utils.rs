use crate::services::letter_classifier::{classify_letter, LetterClass};
use std::collections::HashMap;
use rand::seq::SliceRandom;
use rand::Rng;

/// Check if a word can be formed using only the available letters.
/// Each letter may be used as many times as it appears in `letters`.
pub fn can_form(word: &str, letters: &[char]) -> bool {
    let mut letter_counts: HashMap<char, usize> = HashMap::new();
    for ch in letters {
        *letter_counts.entry(ch.to_ascii_uppercase()).or_insert(0) += 1;
    }

    for ch in word.chars().map(|c| c.to_ascii_uppercase()) {
        match letter_counts.get_mut(&ch) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}

/// Count vowels and consonants in a word. Characters outside A-Z count as neither.
pub fn count_vowels_consonants(word: &str) -> (usize, usize) {
    let mut vowel_count = 0;
    let mut consonant_count = 0;

    for ch in word.chars() {
        match classify_letter(ch) {
            Some(LetterClass::Vowel) => vowel_count += 1,
            Some(LetterClass::Consonant) => consonant_count += 1,
            None => {}
        }
    }

    (vowel_count, consonant_count)
}

/// Select random items from a list, with replacement
pub fn select_random_from_list<R: Rng + ?Sized>(rng: &mut R, list: &[char], count: usize) -> Vec<char> {
    (0..count).map(|_| {
        list.choose(&mut *rng).copied().unwrap_or('A')
    }).collect()
}
