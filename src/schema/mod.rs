pub mod gender;
pub mod name;
pub mod punctuation;
pub mod style;
pub mod weighted;
