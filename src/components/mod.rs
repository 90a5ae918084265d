pub mod background;
pub mod greeting;
pub mod multiline;
