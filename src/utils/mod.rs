pub mod delay;
pub mod formatters;
pub mod validators;
