//! Paints a page document into a character/color grid.
//!
//! Sections are painted in document order onto a blank grid of the page's
//! size. Page markers become bare digits, URL markers become bare text, and
//! each row that carried a page marker ends up with one clickable span.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::link::parser;
use crate::model::{PageFormat, Section, TextAlign};
use crate::text::{pad_center, pad_end, pad_start, rfind_chars, truncate};
use crate::theme::{resolve_color, ColorRole, Rgb, Theme};
use crate::timestamp::format_last_updated;

use super::grid::{Cell, CellColors, CellGrid};
use super::ComposeOptions;

/// Row of the main page that shows the last-updated line.
pub const STATUS_ROW: usize = 5;

/// A clickable page-number span on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Target page number
    pub page_number: u32,
    /// Column range of the digits in the finished row
    pub span: Range<usize>,
}

/// A page painted into a grid.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    page_id: String,
    grid: CellGrid,
    links: BTreeMap<usize, PageLink>,
    default_foreground: String,
    default_background: String,
}

impl ComposedPage {
    /// Id of the composed page.
    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    /// The painted grid.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Clickable spans keyed by row.
    pub fn links(&self) -> &BTreeMap<usize, PageLink> {
        &self.links
    }

    /// Clickable span on `row`.
    pub fn link_at(&self, row: usize) -> Option<&PageLink> {
        self.links.get(&row)
    }

    /// Page number under (`row`, `column`), if that cell is part of a link.
    pub fn hit_test(&self, row: usize, column: usize) -> Option<u32> {
        self.links
            .get(&row)
            .filter(|link| link.span.contains(&column))
            .map(|link| link.page_number)
    }

    /// Characters of one row.
    pub fn row_text(&self, row: usize) -> String {
        self.grid.row_text(row)
    }

    /// All rows joined by newlines.
    pub fn text(&self) -> String {
        (0..self.grid.height())
            .map(|row| self.grid.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Color codes of a cell with unpainted cells and missing backgrounds
    /// falling back to the page defaults.
    pub fn cell_codes(&self, row: usize, column: usize) -> (&str, &str) {
        match self.grid.get(row, column).and_then(|c| c.colors.as_ref()) {
            Some(colors) => (
                colors.foreground.as_str(),
                colors
                    .background
                    .as_deref()
                    .unwrap_or(&self.default_background),
            ),
            None => (&self.default_foreground, &self.default_background),
        }
    }

    /// Resolved foreground and background of a cell.
    pub fn cell_colors(&self, row: usize, column: usize, theme: &dyn Theme) -> (Rgb, Rgb) {
        let (fg, bg) = self.cell_codes(row, column);
        (resolve_color(fg, theme), resolve_color(bg, theme))
    }
}

/// Paint `page` into a grid.
pub fn compose(page: &PageFormat, options: &ComposeOptions) -> ComposedPage {
    let width = page.columns();
    let height = page.rows();
    let mut grid = CellGrid::new(width, height);
    let mut link_rows: BTreeMap<usize, u32> = BTreeMap::new();

    for section in &page.sections {
        paint_section(&mut grid, section, &mut link_rows);
    }

    if page.is_main() {
        if let Some(ref last_updated) = options.last_updated {
            paint_status(&mut grid, last_updated);
        }
    }

    if page.is_index() {
        apply_margins(&mut grid);
    }

    let links = link_rows
        .into_iter()
        .filter_map(|(row, page_number)| {
            let digits = page_number.to_string();
            let text: Vec<char> = grid.row_text(row).chars().collect();
            match rfind_chars(&text, &digits) {
                Some(start) => Some((
                    row,
                    PageLink {
                        page_number,
                        span: start..start + digits.len(),
                    },
                )),
                None => {
                    log::debug!(
                        "Page {}: link digits {} clipped from row {}",
                        page.page_id,
                        digits,
                        row
                    );
                    None
                }
            }
        })
        .collect();

    ComposedPage {
        page_id: page.page_id.clone(),
        grid,
        links,
        default_foreground: page.global_styles.default_foreground.clone(),
        default_background: page.global_styles.default_background.clone(),
    }
}

fn paint_section(
    grid: &mut CellGrid,
    section: &Section,
    link_rows: &mut BTreeMap<usize, u32>,
) {
    let links = parser();
    let styles = &section.styles;
    let effective = styles.max_width.unwrap_or(grid.width());
    let align = styles.text_align.unwrap_or_default();

    for (offset, line) in section.content.lines().iter().enumerate() {
        let row = match section.position.row.checked_add(offset) {
            Some(row) if row < grid.height() => row,
            _ => continue,
        };

        let (display, digits) = match links.inline_page_marker(line) {
            Some((display, digits)) => {
                match digits.parse::<u32>() {
                    Ok(number) => {
                        link_rows.insert(row, number);
                    }
                    Err(_) => log::debug!("Ignoring out-of-range page marker {}", digits),
                }
                (display, Some(digits))
            }
            None => (
                links
                    .inline_url_marker(line)
                    .unwrap_or_else(|| line.clone()),
                None,
            ),
        };

        let aligned = match align {
            TextAlign::Left => pad_end(&display, effective),
            TextAlign::Right => pad_start(&display, effective),
            TextAlign::Center => pad_center(&display, effective),
        };
        let chars: Vec<char> = aligned.chars().collect();

        let number_span = digits
            .as_deref()
            .and_then(|d| rfind_chars(&chars, d).map(|start| start..start + d.chars().count()))
            .unwrap_or(0..0);

        let text_colors = CellColors::new(styles.foreground.clone(), styles.background.clone());
        let number_colors = CellColors::new(ColorRole::PageNumbersFg, styles.background.clone());

        for (i, &ch) in chars.iter().take(effective).enumerate() {
            let column = match section.position.column.checked_add(i) {
                Some(column) if column < grid.width() => column,
                _ => break,
            };
            let colors = if number_span.contains(&i) {
                number_colors.clone()
            } else {
                text_colors.clone()
            };
            grid.set(row, column, Cell::painted(ch, colors));
        }
    }
}

fn paint_status(grid: &mut CellGrid, last_updated: &str) {
    let text = format!(" Last updated: {}", format_last_updated(last_updated));
    let colors = CellColors::new(ColorRole::MainPageFg, Some(ColorRole::MainPageBg.into()));
    for (column, ch) in truncate(&text, grid.width()).chars().enumerate() {
        grid.set(STATUS_ROW, column, Cell::painted(ch, colors.clone()));
    }
}

/// Directory pages get a one-cell margin: every row is shifted right, then
/// left, with a margin cell entering each time.
fn apply_margins(grid: &mut CellGrid) {
    let margin = Cell::painted(
        ' ',
        CellColors::new(ColorRole::MarginFg, Some(ColorRole::MarginBg.into())),
    );
    for row in 0..grid.height() {
        grid.shift_row_right(row, margin.clone());
        grid.shift_row_left(row, margin.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GlobalStyles, Metadata, Position, SectionKind, SectionStyles};

    fn page(id: &str, sections: Vec<Section>) -> PageFormat {
        PageFormat {
            page_id: id.to_string(),
            title: "Test".to_string(),
            version: "1.0".to_string(),
            published_at: String::new(),
            global_styles: GlobalStyles::standard("DEF_FG", "DEF_BG"),
            sections,
            links: Vec::new(),
            metadata: Metadata::default(),
        }
    }

    fn line(row: usize, column: usize, text: &str, styles: SectionStyles) -> Section {
        Section::text("s", SectionKind::Line, Position::new(row, column), styles, text)
    }

    fn fg_at(composed: &ComposedPage, row: usize, column: usize) -> String {
        composed.cell_codes(row, column).0.to_string()
    }

    #[test]
    fn test_grid_always_page_sized() {
        let composed = compose(&page("110", Vec::new()), &ComposeOptions::default());
        assert_eq!(composed.grid().width(), 40);
        assert_eq!(composed.grid().height(), 25);
        assert_eq!(composed.cell_codes(3, 3), ("DEF_FG", "DEF_BG"));
    }

    #[test]
    fn test_page_marker_becomes_link() {
        let section = line(4, 0, "Sports {{105}} update", SectionStyles::new("FG", "BG"));
        let composed = compose(&page("110", vec![section]), &ComposeOptions::default());

        assert!(composed.row_text(4).starts_with("Sports 105 update"));
        let link = composed.link_at(4).unwrap();
        assert_eq!(link.page_number, 105);
        assert_eq!(link.span, 7..10);
        assert_eq!(fg_at(&composed, 4, 7), "PAGE_NUMBERS_FG");
        assert_eq!(fg_at(&composed, 4, 6), "FG");
        assert_eq!(composed.hit_test(4, 8), Some(105));
        assert_eq!(composed.hit_test(4, 2), None);
    }

    #[test]
    fn test_url_marker_is_not_clickable() {
        let section = line(24, 0, "{{URL:Tagesschau}}", SectionStyles::new("FG", "BG"));
        let composed = compose(&page("110", vec![section]), &ComposeOptions::default());
        assert!(composed.row_text(24).starts_with("Tagesschau "));
        assert!(composed.links().is_empty());
    }

    #[test]
    fn test_overflowing_marker_shows_digits_without_link() {
        let section = line(1, 0, "x {{99999999999}}", SectionStyles::new("FG", "BG"));
        let composed = compose(&page("110", vec![section]), &ComposeOptions::default());
        assert!(composed.row_text(1).starts_with("x 99999999999"));
        assert!(composed.links().is_empty());
        assert_eq!(fg_at(&composed, 1, 2), "PAGE_NUMBERS_FG");
    }

    #[test]
    fn test_alignment() {
        let right = line(0, 0, "ab", SectionStyles::new("FG", "BG").with_max_width(5).with_align(TextAlign::Right));
        let center = line(1, 0, "ab", SectionStyles::new("FG", "BG").with_max_width(5).with_align(TextAlign::Center));
        let left = line(2, 0, "abcdefgh", SectionStyles::new("FG", "BG").with_max_width(5));
        let composed = compose(&page("110", vec![right, center, left]), &ComposeOptions::default());

        assert!(composed.row_text(0).starts_with("   ab "));
        assert!(composed.row_text(1).starts_with(" ab   "));
        assert!(composed.row_text(2).starts_with("abcde "));
        assert_eq!(fg_at(&composed, 2, 5), "DEF_FG");
    }

    #[test]
    fn test_clipping_and_skipped_rows() {
        let wide = line(0, 35, "0123456789", SectionStyles::new("FG", "BG"));
        let below = line(30, 0, "never", SectionStyles::new("FG", "BG"));
        let composed = compose(&page("110", vec![wide, below]), &ComposeOptions::default());
        assert!(composed.row_text(0).ends_with("01234"));
        assert_eq!(composed.grid().height(), 25);
    }

    #[test]
    fn test_far_out_positions_are_skipped() {
        let json = r#"{
            "id": "far",
            "type": "text-block",
            "position": {"row": 18446744073709551615, "column": 0},
            "styles": {"foreground": "FG"},
            "content": ["a", "b"]
        }"#;
        let far_row: Section = serde_json::from_str(json).unwrap();
        let far_column = line(2, usize::MAX, "abc", SectionStyles::new("FG", "BG"));
        let composed = compose(&page("110", vec![far_row, far_column]), &ComposeOptions::default());

        assert_eq!(composed.row_text(0).trim(), "");
        assert_eq!(composed.row_text(2).trim(), "");
        assert_eq!(composed.cell_codes(0, 0), ("DEF_FG", "DEF_BG"));
    }

    #[test]
    fn test_link_span_uses_canonical_number() {
        let section = line(4, 0, "See {{0110}}", SectionStyles::new("FG", "BG"));
        let composed = compose(&page("112", vec![section]), &ComposeOptions::default());

        assert!(composed.row_text(4).starts_with("See 0110"));
        let link = composed.link_at(4).unwrap();
        assert_eq!(link.page_number, 110);
        assert_eq!(link.span, 5..8);
    }

    #[test]
    fn test_block_lines_span_rows() {
        let block = Section::block(
            "b",
            SectionKind::TextBlock,
            Position::row(23),
            SectionStyles::new("FG", "BG"),
            ["one", "two", "three"],
        );
        let composed = compose(&page("110", vec![block]), &ComposeOptions::default());
        assert!(composed.row_text(23).starts_with("one"));
        assert!(composed.row_text(24).starts_with("two"));
    }

    #[test]
    fn test_later_sections_overwrite() {
        let first = line(0, 0, "aaaa", SectionStyles::new("A", "BG"));
        let second = line(0, 2, "bb", SectionStyles::new("B", "BG").with_max_width(2));
        let composed = compose(&page("110", vec![first, second]), &ComposeOptions::default());
        assert!(composed.row_text(0).starts_with("aabb"));
        assert_eq!(fg_at(&composed, 0, 1), "A");
        assert_eq!(fg_at(&composed, 0, 3), "B");
    }

    #[test]
    fn test_last_updated_on_main_page() {
        let options = ComposeOptions::new().with_last_updated("2025-03-01T10:15:00Z");
        let composed = compose(&page("100", Vec::new()), &options);
        assert!(composed.row_text(STATUS_ROW).starts_with(" Last updated: 2025/03/01 10:15"));
        assert_eq!(fg_at(&composed, STATUS_ROW, 1), "MAIN_PAGE_FG");

        let raw = compose(&page("100", Vec::new()), &ComposeOptions::new().with_last_updated("soon"));
        assert!(raw.row_text(STATUS_ROW).starts_with(" Last updated: soon"));

        let article = compose(&page("110", Vec::new()), &options);
        assert_eq!(article.row_text(STATUS_ROW).trim(), "");

        let signed = compose(&page("+100", Vec::new()), &options);
        assert_eq!(signed.row_text(STATUS_ROW).trim(), "");
    }

    #[test]
    fn test_directory_margin() {
        let full = line(3, 0, &"X".repeat(40), SectionStyles::new("FG", "BG"));
        let composed = compose(&page("105", vec![full]), &ComposeOptions::default());

        let text = composed.row_text(3);
        assert_eq!(&text[..39], "X".repeat(39));
        assert_eq!(&text[39..], " ");
        assert_eq!(composed.cell_codes(3, 39), ("MARGIN_FG", "MARGIN_BG"));
        assert_eq!(fg_at(&composed, 3, 0), "FG");
    }

    #[test]
    fn test_directory_link_span_after_margin() {
        let entry = line(2, 0, "Title.....{{110}}", SectionStyles::new("FG", "BG"));
        let composed = compose(&page("101", vec![entry]), &ComposeOptions::default());
        let link = composed.link_at(2).unwrap();
        assert_eq!(link.page_number, 110);
        assert_eq!(&composed.row_text(2)[link.span.clone()], "110");
    }

    #[test]
    fn test_cell_colors_resolve_through_theme() {
        let section = line(0, 0, "x", SectionStyles::new("TITLE_TEXT", "#102030"));
        let composed = compose(&page("110", vec![section]), &ComposeOptions::default());
        let theme = |role: ColorRole| (role == ColorRole::TitleText).then_some(Rgb::BLACK);
        let (fg, bg) = composed.cell_colors(0, 0, &theme);
        assert_eq!(fg, Rgb::BLACK);
        assert_eq!(bg, Rgb::new(0x10, 0x20, 0x30));

        // DEF_FG is neither a role nor a color.
        let (fg, _) = composed.cell_colors(5, 5, &theme);
        assert_eq!(fg, Rgb::WHITE);
    }
}
