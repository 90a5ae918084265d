use std::{
    io::{self, BufRead, Write},
    time::{SystemTime, UNIX_EPOCH},
};

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::{
    components::background::{generate_snow, Background, BackgroundState},
    constants::background,
    prompt,
};

pub struct App<G: Rng> {
    snow_count: usize,
    rng: G,
}

impl App<StdRng> {
    /// Seeds the generator from the wall clock. Two runs within the same
    /// nanosecond get the same snow.
    pub fn new() -> Self {
        let seed = clock_seed();
        debug!("Snow seed: {seed}");
        Self::with_rng(background::SNOW_COUNT, StdRng::seed_from_u64(seed))
    }
}

impl<G: Rng> App<G> {
    pub fn with_rng(snow_count: usize, rng: G) -> Self {
        Self { snow_count, rng }
    }

    /// Asks for the card fields on `input`, then writes the greeting and the scene to `output`.
    ///
    /// A write failure on `output` ends the run early and is not an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        match self.write_card(input, output) {
            Err(e) if e.downcast_ref::<io::Error>().is_some() => {
                warn!("Output closed, stopping early: {e}");
                Ok(())
            },
            result => result,
        }
    }

    fn write_card<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let greeting = prompt::collect_greeting(input, output)?;
        for line in greeting.render_lines() {
            writeln!(output, "{line}")?;
        }
        info!("Greeting written");

        let mut state = BackgroundState::new(generate_snow(self.snow_count, &mut self.rng));
        debug!("Generated {} snowflakes", state.snowflakes().len());
        for line in Background::new().render_lines(&mut state) {
            writeln!(output, "{line}")?;
        }
        output.flush()?;
        info!("Scene written");

        Ok(())
    }
}

fn clock_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_nanos() as u64).unwrap_or_default()
}
