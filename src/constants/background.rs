pub const SNOW_COUNT: usize = 85;
pub const SNOWFLAKE: char = '.';

// Segments are written verbatim, trailing spaces included, so every row of a
// figure covers the same span.
pub const CHURCH_ROW: u16 = 6;
pub const CHURCH_COLUMN: u16 = 4;
pub const CHURCH: [&str; 8] = [
    "    ++     ",
    "    ||     ",
    "   /  \\    ",
    "  /____\\   ",
    "  | [] |   ",
    "  | [] |   ",
    "  | __ |   ",
    "  |____|   ",
];

pub const TREE_ROW: u16 = 8;
pub const TREE_COLUMN: u16 = 40;
pub const TREE: [&str; 7] = [
    "    *     ",
    "   /_\\    ",
    "  /_/_\\   ",
    " /_/_/_\\  ",
    "/_/_/_/_\\ ",
    "   /_\\    ",
    "   /_\\    ",
];
