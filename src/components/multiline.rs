use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Block of text lines stamped into a buffer one row per line.
///
/// Every character of every line is written, whitespace included, so a
/// `MultiLine` always replaces whatever was under it.
#[derive(Debug, Default)]
pub struct MultiLine<T: ToString> {
    lines: Vec<T>,
}

impl<T> MultiLine<T>
where
    T: ToString,
{
    pub fn new(lines: Vec<T>) -> Self {
        Self { lines }
    }

    /// Area covered by the lines when drawn with the top-left corner at `(x, y)`.
    pub fn area_at(&self, x: u16, y: u16) -> Rect {
        let width = self.lines.iter().map(|line| line.to_string().chars().count()).max().unwrap_or(0) as u16;
        let height = self.lines.len() as u16;
        Rect { x, y, width, height }
    }
}

impl<T: ToString> Widget for MultiLine<T> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let area = area.intersection(buf.area);
        self.lines
            .into_iter()
            .enumerate()
            .take(area.height as usize)
            .for_each(|(index, line)| {
                buf.set_stringn(area.x, area.y + index as u16, line.to_string(), area.width as usize, Style::default());
            });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right()).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_overwrites_existing_cells() {
        let mut buf = Buffer::filled(Rect::new(0, 0, 6, 2), ratatui::buffer::Cell::new("."));
        let lines = MultiLine::new(vec![" ab ", "c  d"]);
        let area = lines.area_at(1, 0);
        lines.render(area, &mut buf);

        assert_eq!(row(&buf, 0), ". ab .");
        assert_eq!(row(&buf, 1), ".c  d.");
    }

    #[test]
    fn test_clipped_to_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let lines = MultiLine::new(vec!["xyz", "never drawn"]);
        let area = lines.area_at(2, 0);
        lines.render(area, &mut buf);

        assert_eq!(row(&buf, 0), "  xy");
    }

    #[test]
    fn test_area_at() {
        let lines = MultiLine::new(vec!["abc", "abcde"]);
        assert_eq!(lines.area_at(3, 4), Rect::new(3, 4, 5, 2));
    }
}
