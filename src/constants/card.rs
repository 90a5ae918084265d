pub const DEFAULT_YEAR: &str = "2025";
pub const TITLE_PREFIX: &str = "MERRY CHRISTMAS";
pub const FALLBACK_MESSAGE: &str = "Wishing you a warm, cozy Christmas.";

pub const RECIPIENT_PREFIX: &str = "To: ";
pub const SENDER_PREFIX: &str = "From: ";
