pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

pub const CONSONANTS: [char; 21] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N',
    'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

/// Classify a letter into vowel or consonant. Anything outside A-Z is neither.
pub fn classify_letter(ch: char) -> Option<LetterClass> {
    let ch = ch.to_ascii_uppercase();
    if VOWELS.contains(&ch) {
        Some(LetterClass::Vowel)
    } else if CONSONANTS.contains(&ch) {
        Some(LetterClass::Consonant)
    } else {
        None
    }
}
