pub mod input;
pub mod round;
pub mod validation;
