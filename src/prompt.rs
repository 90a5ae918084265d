use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{info, warn};

use crate::{
    components::greeting::{Greeting, GreetingBuilder},
    constants::card,
};

/// Fields asked for, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Field {
    Recipient,
    Sender,
    Message,
    Year,
}

impl Field {
    pub fn label(&self) -> String {
        match self {
            Field::Recipient => "Recipient name: ".to_string(),
            Field::Sender => "Sender name: ".to_string(),
            Field::Message => "Custom message: ".to_string(),
            Field::Year => format!("Year [{}]: ", card::DEFAULT_YEAR),
        }
    }
}

/// Reads one line without its terminator.
///
/// Bytes that are not valid UTF-8 are kept as replacement characters. End of
/// input and read failures both yield an empty string.
pub fn read_field<R: BufRead>(input: &mut R) -> String {
    let mut bytes = Vec::new();
    match input.read_until(b'\n', &mut bytes) {
        Ok(0) => {
            info!("Input closed");
            String::new()
        },
        Ok(_) => {
            let line = bytes.strip_suffix(b"\n").unwrap_or(&bytes);
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        },
        Err(e) => {
            warn!("Failed to read input, treating it as empty: {e}");
            String::new()
        },
    }
}

/// Prompts for every [`Field`] and builds the greeting from the answers.
///
/// Only writing the prompts can fail.
pub fn collect_greeting<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Greeting> {
    let mut builder = GreetingBuilder::default();
    for field in Field::iter() {
        write!(output, "{}", field.label())?;
        output.flush()?;

        let answer = read_field(input);
        info!("{field}: {}", if answer.is_empty() { "empty" } else { "provided" });
        if answer.is_empty() {
            continue;
        }
        match field {
            Field::Recipient => builder.recipient(answer),
            Field::Sender => builder.sender(answer),
            Field::Message => builder.message(answer),
            Field::Year => builder.year(answer),
        };
    }
    Ok(builder.build()?)
}
