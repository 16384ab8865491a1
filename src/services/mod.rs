pub mod generator;
pub mod letter_classifier;
pub mod outcome;
pub mod sound;
pub mod timer;
