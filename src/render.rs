use crate::{
    canvas::{Canvas, Rect},
    config::{CalendarConfig, Rgb},
    date::{row_label, BirthDate},
    error::{CalendarError, RenderError},
    font::FontFace,
    layout::BoxGeometry,
    week::{LifeGrid, WeekKind},
};
use log::{debug, info};

/// What was drawn by [Renderer::render].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    /// Rows drawn, each with its date label.
    pub rows: u32,
    /// Boxes drawn, legend swatches excluded.
    pub cells: usize,
    /// Boxes shaded as birthday weeks.
    pub birthday_weeks: usize,
    /// Boxes shaded as new-year weeks.
    pub new_year_weeks: usize,
}

/// Draws a life calendar onto a [Canvas].
///
/// ```
/// use lifecal::prelude::*;
///
/// let renderer = Renderer::new(CalendarConfig::default()).unwrap();
/// let mut canvas = RecordingCanvas::new(renderer.config().page);
/// let summary = renderer
///     .render(&"15/06/1990".parse().unwrap(), &mut canvas)
///     .unwrap();
/// assert_eq!(summary.cells, 90 * 52);
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    config: CalendarConfig,
    geometry: BoxGeometry,
}

impl Renderer {
    /// Returns a renderer for `config`, or the [LayoutError](crate::LayoutError) explaining why the
    /// grid can't be laid out on its page.
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        let geometry = BoxGeometry::compute(&config)?;
        Ok(Self { config, geometry })
    }

    /// The configuration the renderer was built from.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// The geometry derived from [Renderer::config].
    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    fn colour(&self, kind: WeekKind) -> Rgb {
        let palette = &self.config.palette;
        match kind {
            WeekKind::Birthday => palette.birthday,
            WeekKind::NewYear => palette.new_year,
            WeekKind::Plain => palette.plain,
        }
    }

    /// Draws the whole calendar for `birth` in a single pass and finishes the page.
    ///
    /// # Errors
    ///
    /// - If a week of the grid lies beyond the representable dates, returns
    ///   [RenderError::DateOutOfRange]. Whatever was drawn up to then stays on the canvas.
    /// - If the canvas fails to finish the page, returns its error.
    pub fn render<C: Canvas>(
        &self,
        birth: &BirthDate,
        canvas: &mut C,
    ) -> Result<RenderSummary, RenderError> {
        let page = canvas.page_size();
        canvas.fill_rect(
            Rect::new(0.0, 0.0, page.width, page.height),
            self.config.palette.background,
        );

        self.draw_title(canvas);
        self.draw_legend(canvas);
        self.draw_week_numbers(canvas);

        let grid = LifeGrid::new(*birth, self.config.grid);
        let mut summary = RenderSummary::default();
        canvas.select_font(FontFace::ITALIC, self.config.fonts.tiny);
        for row in 0..self.config.grid.rows {
            self.draw_row(canvas, &grid, row, &mut summary)?;
        }

        canvas.finish()?;
        info!("rendered calendar from {birth}: {summary:?}");
        Ok(summary)
    }

    /// Draws one box, outline first so the fill covers its inner half.
    fn draw_square<C: Canvas>(&self, canvas: &mut C, x: f64, y: f64, fill: Rgb) {
        let square = Rect::square(x, y, self.geometry.box_size);
        canvas.stroke_rect(square, self.config.palette.outline, self.config.stroke_width);
        canvas.fill_rect(square, fill);
    }

    fn draw_title<C: Canvas>(&self, canvas: &mut C) {
        canvas.select_font(FontFace::BOLD, self.config.fonts.heading);
        let extents = canvas.text_extents(&self.config.title);
        let page = canvas.page_size();
        canvas.show_text(
            page.width / 2.0 - extents.width / 2.0,
            self.geometry.y_margin / 2.0 - extents.height / 2.0,
            &self.config.title,
            self.config.palette.text,
        );
    }

    /// Draws a swatch followed by its description and returns where the next entry starts.
    fn draw_legend_entry<C: Canvas>(
        &self,
        canvas: &mut C,
        x: f64,
        y: f64,
        desc: &str,
        colour: Rgb,
    ) -> f64 {
        let box_size = self.geometry.box_size;
        self.draw_square(canvas, x, y, colour);

        let text_x = x + box_size * 2.0;
        let extents = canvas.text_extents(desc);
        canvas.show_text(
            text_x,
            y + box_size / 2.0 + extents.height / 2.0,
            desc,
            self.config.palette.text,
        );
        text_x + extents.width + box_size * 2.0
    }

    fn draw_legend<C: Canvas>(&self, canvas: &mut C) {
        canvas.select_font(FontFace::REGULAR, self.config.fonts.tiny);
        let palette = self.config.palette;
        let y = self.geometry.box_size;
        let x = self.geometry.x_margin / 2.0;

        let x = self.draw_legend_entry(canvas, x, y, &self.config.birthday_desc, palette.birthday);
        self.draw_legend_entry(canvas, x, y, &self.config.new_year_desc, palette.new_year);
    }

    fn draw_week_numbers<C: Canvas>(&self, canvas: &mut C) {
        canvas.select_font(FontFace::REGULAR, self.config.fonts.tiny);
        let y = self.geometry.y_margin - self.geometry.box_size;
        for column in 0..self.config.grid.columns {
            let (x, _) = self.geometry.box_origin(0, column);
            canvas.show_text(x, y, &(column + 1).to_string(), self.config.palette.text);
        }
    }

    fn draw_row<C: Canvas>(
        &self,
        canvas: &mut C,
        grid: &LifeGrid,
        row: u32,
        summary: &mut RenderSummary,
    ) -> Result<(), RenderError> {
        let box_size = self.geometry.box_size;
        let (x, y) = self.geometry.box_origin(row, 0);

        let label = row_label(&grid.row_start(row)?);
        let extents = canvas.text_extents(&label);
        canvas.show_text(
            x - extents.width - box_size,
            y + box_size / 2.0 + extents.height / 2.0,
            &label,
            self.config.palette.text,
        );

        for cell in grid.row(row) {
            let cell = cell?;
            let (x, y) = self.geometry.box_origin(cell.row, cell.column);
            self.draw_square(canvas, x, y, self.colour(cell.kind));

            summary.cells += 1;
            match cell.kind {
                WeekKind::Birthday => summary.birthday_weeks += 1,
                WeekKind::NewYear => summary.new_year_weeks += 1,
                WeekKind::Plain => {}
            }
        }
        summary.rows += 1;
        debug!("drew row {row} ({label})");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, RecordingCanvas};
    use crate::config::PageSize;
    use rstest::{fixture, rstest};

    #[fixture]
    fn renderer() -> Renderer {
        Renderer::new(CalendarConfig::default()).unwrap()
    }

    fn render(renderer: &Renderer, date_str: &str) -> (RenderSummary, RecordingCanvas) {
        let mut canvas = RecordingCanvas::new(renderer.config().page);
        let summary = renderer
            .render(&BirthDate::parse(date_str).unwrap(), &mut canvas)
            .unwrap();
        (summary, canvas)
    }

    /// Fill colours of the grid boxes, in drawing order.
    fn box_fills(canvas: &RecordingCanvas) -> Vec<Rgb> {
        canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { rect, colour } if rect.width == 20.0 => Some(*colour),
                _ => None,
            })
            // the legend swatches come first
            .skip(2)
            .collect()
    }

    #[rstest]
    fn test_full_render(renderer: Renderer) {
        let (summary, canvas) = render(&renderer, "15/06/1990");
        assert_eq!(summary.rows, 90);
        assert_eq!(summary.cells, 4680);
        assert_eq!(canvas.page_size(), PageSize { width: 1872.0, height: 2880.0 });
        assert!(canvas.is_finished());
        assert_eq!(
            canvas.ops().iter().filter(|op| **op == DrawOp::Finish).count(),
            1
        );
        assert_eq!(box_fills(&canvas).len(), 4680);
    }

    #[rstest]
    fn test_drawing_order(renderer: Renderer) {
        let (_, canvas) = render(&renderer, "15/06/1990");
        let ops = canvas.ops();

        assert_eq!(
            ops[0],
            DrawOp::Fill {
                rect: Rect::new(0.0, 0.0, 1872.0, 2880.0),
                colour: Rgb::WHITE
            }
        );
        assert!(matches!(&ops[1], DrawOp::Text { text, face: FontFace::BOLD, .. } if text == "LIFE CALENDAR"));
        assert_eq!(ops.last(), Some(&DrawOp::Finish));

        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts[1], "Week of your birthday");
        assert_eq!(texts[2], "First week of the new year");
        let week_numbers: Vec<String> = (1..=52).map(|n| n.to_string()).collect();
        assert_eq!(texts[3..55], week_numbers[..]);
        assert_eq!(texts[55], "15 Jun, 1990");
        assert_eq!(texts[56], "14 Jun, 1991");
        assert_eq!(texts.len(), 3 + 52 + 90);
    }

    #[rstest]
    fn test_title_is_centered(renderer: Renderer) {
        let (_, canvas) = render(&renderer, "15/06/1990");
        let DrawOp::Text { x, text, face, size, .. } = &canvas.ops()[1] else {
            panic!("title should be drawn right after the background");
        };
        let width = face.text_extents(text, *size).width;
        assert!((x + width / 2.0 - 936.0).abs() < 1e-9);
    }

    #[rstest]
    fn test_legend_layout(renderer: Renderer) {
        let (_, canvas) = render(&renderer, "15/06/1990");
        let texts: Vec<_> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, text, face, size, .. } => Some((*x, text.clone(), *face, *size)),
                _ => None,
            })
            .collect();

        let (birthday_x, birthday_desc, face, size) = &texts[1];
        assert_eq!(*face, FontFace::REGULAR);
        assert_eq!(*size, 12.0);
        // swatch at x_margin / 2, label two boxes to its right
        assert_eq!(*birthday_x, 78.0 + 40.0);

        let width = face.text_extents(birthday_desc, *size).width;
        let (new_year_x, ..) = &texts[2];
        assert!((new_year_x - (birthday_x + width + 40.0 + 40.0)).abs() < 1e-9);
    }

    #[rstest]
    fn test_row_labels_are_right_aligned(renderer: Renderer) {
        let (_, canvas) = render(&renderer, "15/06/1990");
        for op in canvas.ops() {
            if let DrawOp::Text { x, text, face: FontFace::ITALIC, size, .. } = op {
                let width = FontFace::ITALIC.text_extents(text, *size).width;
                assert!((x + width - (156.0 - 20.0)).abs() < 1e-9, "{text}");
            }
        }
    }

    #[rstest]
    fn test_boxes_are_outlined(renderer: Renderer) {
        let (_, canvas) = render(&renderer, "15/06/1990");
        let strokes: Vec<_> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { rect, colour, line_width } => Some((rect, colour, line_width)),
                _ => None,
            })
            .collect();
        assert_eq!(strokes.len(), 2 + 4680);
        assert!(strokes
            .iter()
            .all(|(rect, colour, width)| **colour == Rgb::BLACK && **width == 4.0 && rect.width == 20.0));

        let (first, _, _) = strokes[2];
        assert_eq!(*first, Rect::square(156.0, 144.0, 20.0));
        let (last, _, _) = strokes[strokes.len() - 1];
        assert_eq!(*last, Rect::square(156.0 + 51.0 * 30.0, 144.0 + 89.0 * 30.0, 20.0));
    }

    #[rstest]
    fn test_new_year_birthday(renderer: Renderer) {
        let (summary, canvas) = render(&renderer, "01/01/2000");
        let fills = box_fills(&canvas);
        assert_eq!(fills[0], Rgb::gray(0.5));
        assert_eq!(summary.new_year_weeks, 0);
        assert!(summary.birthday_weeks >= 89);
    }

    #[rstest]
    fn test_midsummer_birthday(renderer: Renderer) {
        let (summary, canvas) = render(&renderer, "15/06/1990");
        let fills = box_fills(&canvas);

        // 15 Jun 1990 starts the first week
        assert_eq!(fills[0], Rgb::gray(0.5));
        // 1 Jan 1991 lies in the week starting 28 Dec 1990, 28 weeks in
        assert_eq!(fills[28], Rgb::gray(0.8));
        assert_eq!(fills[27], Rgb::WHITE);
        assert_eq!(fills[29], Rgb::WHITE);

        assert_eq!(
            fills.iter().filter(|c| **c == Rgb::gray(0.5)).count(),
            summary.birthday_weeks
        );
        assert_eq!(
            fills.iter().filter(|c| **c == Rgb::gray(0.8)).count(),
            summary.new_year_weeks
        );
        assert_eq!(summary.birthday_weeks, 90);
        assert_eq!(summary.new_year_weeks, 90);
    }

    #[test]
    fn test_invalid_layout() {
        let mut config = CalendarConfig::default();
        config.footer_margin = 3000.0;
        assert!(matches!(
            Renderer::new(config),
            Err(CalendarError::Layout(_))
        ));
    }
}
