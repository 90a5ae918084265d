use derive_builder::Builder;

use crate::constants::{card, WIDTH};

/// The four fields printed on the card.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Greeting {
    #[builder(default)]
    pub recipient: String,
    #[builder(default)]
    pub sender: String,
    #[builder(default)]
    pub message: String,
    #[builder(default = "card::DEFAULT_YEAR.to_string()")]
    pub year: String,
}

impl Greeting {
    pub fn title(&self) -> String {
        format!("{} {}", card::TITLE_PREFIX, self.year)
    }

    pub fn message_or_fallback(&self) -> &str {
        if self.message.is_empty() {
            card::FALLBACK_MESSAGE
        } else {
            &self.message
        }
    }

    /// Lines of the boxed greeting, starting with an empty line.
    pub fn render_lines(&self) -> Vec<String> {
        let border = format!("+{}+", "-".repeat(WIDTH as usize + 2));
        let blank = boxed(&" ".repeat(WIDTH as usize));

        let mut lines = vec![String::new(), border.clone(), boxed(&center_pad(&self.title())), blank.clone()];
        if !self.recipient.is_empty() {
            lines.push(boxed(&center_pad(&format!("{}{}", card::RECIPIENT_PREFIX, self.recipient))));
        }
        lines.push(boxed(&center_pad(self.message_or_fallback())));
        if !self.sender.is_empty() {
            lines.push(boxed(&center_pad(&format!("{}{}", card::SENDER_PREFIX, self.sender))));
        }
        lines.push(blank);
        lines.push(border);
        lines
    }
}

fn boxed(content: &str) -> String {
    format!("| {content} |")
}

/// Centers `text` in a field of `WIDTH` columns.
///
/// Left padding is `(WIDTH - len) / 2` rounded down and never negative; the
/// result is then right-padded up to `WIDTH`. Text longer than `WIDTH` is
/// returned as is.
pub fn center_pad(text: &str) -> String {
    let width = WIDTH as usize;
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(left + len);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn greeting(recipient: &str, sender: &str, message: &str) -> Greeting {
        GreetingBuilder::default().recipient(recipient).sender(sender).message(message).build().unwrap()
    }

    #[test]
    fn test_center_pad_odd_remainder_goes_right() {
        let centered = center_pad("abc");
        assert_eq!(centered, format!("{}abc{}", " ".repeat(28), " ".repeat(29)));
    }

    #[test]
    fn test_center_pad_exact_width_unchanged() {
        let text = "x".repeat(WIDTH as usize);
        assert_eq!(center_pad(&text), text);
    }

    #[test]
    fn test_center_pad_too_long_not_truncated() {
        let text = "y".repeat(WIDTH as usize + 7);
        assert_eq!(center_pad(&text), text);
    }

    #[test]
    fn test_center_pad_empty() {
        assert_eq!(center_pad(""), " ".repeat(WIDTH as usize));
    }

    #[test]
    fn test_builder_defaults() {
        let greeting = GreetingBuilder::default().build().unwrap();
        assert_eq!(greeting.year, "2025");
        assert_eq!(greeting.recipient, "");
        assert_eq!(greeting.message_or_fallback(), "Wishing you a warm, cozy Christmas.");
    }

    #[test]
    fn test_full_card() {
        let lines = greeting("Ada", "Bob", "Peace on earth").render_lines();
        let border = format!("+{}+", "-".repeat(62));

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], border);
        assert_eq!(lines[2], format!("| {} |", center_pad("MERRY CHRISTMAS 2025")));
        assert_eq!(lines[3], format!("| {} |", " ".repeat(60)));
        assert_eq!(lines[4], format!("| {} |", center_pad("To: Ada")));
        assert_eq!(lines[5], format!("| {} |", center_pad("Peace on earth")));
        assert_eq!(lines[6], format!("| {} |", center_pad("From: Bob")));
        assert_eq!(lines[7], lines[3]);
        assert_eq!(lines[8], border);
        assert!(lines[1..].iter().all(|line| line.chars().count() == WIDTH as usize + 4));
    }

    #[test]
    fn test_optional_lines_omitted() {
        let full = greeting("Ada", "Bob", "Hi").render_lines();
        let no_recipient = greeting("", "Bob", "Hi").render_lines();
        let no_sender = greeting("Ada", "", "Hi").render_lines();
        let no_message = greeting("Ada", "Bob", "").render_lines();

        assert_eq!(no_recipient.len(), full.len() - 1);
        assert!(!no_recipient.iter().any(|line| line.contains("To:")));
        assert_eq!(no_sender.len(), full.len() - 1);
        assert!(!no_sender.iter().any(|line| line.contains("From:")));
        assert_eq!(no_message.len(), full.len());
        assert_eq!(no_message[5], format!("| {} |", center_pad("Wishing you a warm, cozy Christmas.")));
    }

    #[test]
    fn test_recipient_only() {
        let lines = greeting("Ada", "", "").render_lines();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], format!("| {}MERRY CHRISTMAS 2025{} |", " ".repeat(20), " ".repeat(20)));
        assert_eq!(lines[4], format!("| {} |", center_pad("To: Ada")));
        assert_eq!(lines[5], format!("| {} |", center_pad("Wishing you a warm, cozy Christmas.")));
        assert!(!lines.iter().any(|line| line.contains("From:")));
    }

    #[test]
    fn test_long_message_widens_line() {
        let message = "z".repeat(70);
        let lines = greeting("", "", &message).render_lines();

        assert_eq!(lines[4], format!("| {message} |"));
    }

    proptest! {
        #[test]
        fn test_center_pad_width(text in "[ -~]{0,60}") {
            let centered = center_pad(&text);
            let left = (WIDTH as usize - text.len()) / 2;

            prop_assert_eq!(centered.chars().count(), WIDTH as usize);
            prop_assert_eq!(&centered[left..left + text.len()], text.as_str());
        }
    }
}
