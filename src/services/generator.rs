use crate::models::{LetterPool, POOL_SIZE};
use crate::services::letter_classifier::{CONSONANTS, VOWELS};
use crate::utils::{count_vowels_consonants, select_random_from_list};
use rand::seq::SliceRandom;
use rand::Rng;
use log::debug;

/// Deal a fresh pool: 3 or 4 vowels, consonants for the rest, shuffled.
/// Letters are drawn with replacement, so repeats are possible.
pub fn generate_pool<R: Rng + ?Sized>(rng: &mut R) -> LetterPool {
    let vowel_count = rng.gen_range(3..=4);

    let mut letters = [' '; POOL_SIZE];
    let vowels = select_random_from_list(rng, &VOWELS, vowel_count);
    let consonants = select_random_from_list(rng, &CONSONANTS, POOL_SIZE - vowel_count);
    for (slot, ch) in letters.iter_mut().zip(vowels.into_iter().chain(consonants)) {
        *slot = ch;
    }
    letters.shuffle(rng);

    let pool = LetterPool::new(letters);
    debug!("Dealt pool {} ({} vowels)", pool, count_vowels_consonants(&pool.to_string()).0);
    pool
}
