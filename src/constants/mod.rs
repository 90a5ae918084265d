pub mod background;
pub mod card;

pub const WIDTH: u16 = 60;
pub const HEIGHT: u16 = 18;
