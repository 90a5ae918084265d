use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
};
use tracing::debug;

use crate::{
    components::multiline::MultiLine,
    constants::{background, HEIGHT, WIDTH},
};

/// A single snow dot on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snowflake {
    pub x: u16,
    pub y: u16,
}

/// Draws `count` snowflakes uniformly over the canvas. Duplicates are allowed.
pub fn generate_snow<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Snowflake> {
    std::iter::repeat_with(|| Snowflake { x: rng.gen_range(0..WIDTH), y: rng.gen_range(0..HEIGHT) })
        .take(count)
        .collect()
}

#[derive(Debug, Default)]
pub struct BackgroundState {
    snowflakes: Vec<Snowflake>,
}

impl BackgroundState {
    pub fn new(snowflakes: Vec<Snowflake>) -> Self {
        Self { snowflakes }
    }

    pub fn snowflakes(&self) -> &[Snowflake] {
        &self.snowflakes
    }
}

/// The snowy scene: snow first, then the church, then the tree.
#[derive(Debug, Default)]
pub struct Background;

impl Background {
    pub fn new() -> Self {
        Self
    }

    /// Renders onto a fresh canvas and returns it as text rows.
    pub fn render_lines(self, state: &mut BackgroundState) -> Vec<String> {
        let area = Rect::new(0, 0, WIDTH, HEIGHT);
        let mut buf = Buffer::empty(area);
        self.render(area, &mut buf, state);
        buffer_lines(&buf)
    }

    fn render_snowflakes(&self, area: Rect, buf: &mut Buffer, state: &BackgroundState) {
        for flake in state.snowflakes.iter() {
            let position = Position::new(area.x.saturating_add(flake.x), area.y.saturating_add(flake.y));
            if !area.contains(position) {
                debug!("Skipping snowflake outside the canvas: {flake:?}");
                continue;
            }
            // First flake on a cell wins
            let cell = &mut buf[position];
            if cell.symbol() == " " {
                cell.set_char(background::SNOWFLAKE);
            }
        }
    }

    fn render_church(&self, area: Rect, buf: &mut Buffer) {
        let church = MultiLine::new(background::CHURCH.to_vec());
        let church_area = church.area_at(area.x + background::CHURCH_COLUMN, area.y + background::CHURCH_ROW);
        church.render(church_area.intersection(area), buf);
    }

    fn render_tree(&self, area: Rect, buf: &mut Buffer) {
        let tree = MultiLine::new(background::TREE.to_vec());
        let tree_area = tree.area_at(area.x + background::TREE_COLUMN, area.y + background::TREE_ROW);
        tree.render(tree_area.intersection(area), buf);
    }
}

impl StatefulWidget for Background {
    type State = BackgroundState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut BackgroundState)
    where
        Self: Sized,
    {
        self.render_snowflakes(area, buf, state);
        self.render_church(area, buf);
        self.render_tree(area, buf);
    }
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect::<String>())
        .collect()
}
