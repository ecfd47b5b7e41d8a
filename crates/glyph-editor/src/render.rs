//! Headless rendering.
//!
//! [`Editor::render`] does not draw anything. It lays out the visible lines into a
//! [`RenderFrame`] of positioned, colored runs and rectangles that a host paints with its own
//! drawing primitives. Pixel widths come from a [`TextMeasure`] supplied by the host.
//!
//! All x positions are relative to the left edge of the content area and all y positions to the
//! top of the document, i.e. scrolling is not subtracted.

use crate::coordinates::Coordinates;
use crate::editor::Editor;
use crate::glyph::Line;
use crate::palette::Color;
use crate::text::{bytes_to_string, utf8_char_length};
use glyph_editor_lang::SyntaxClass;
use unicode_width::UnicodeWidthStr;

/// Gap between the line number gutter and the text.
pub const LEFT_MARGIN: f32 = 10.0;

/// Color of tab markers.
pub const TAB_MARKER_COLOR: Color = 0x9090_9090;

/// Color of space markers.
pub const SPACE_MARKER_COLOR: Color = 0x8080_8080;

/// Font metrics provided by the host.
pub trait TextMeasure {
    /// Width in pixels of `text` drawn on one line.
    fn text_width(&self, text: &str) -> f32;

    /// Height in pixels of one line, before line spacing is applied.
    fn line_height(&self) -> f32;
}

/// A fixed-cell font: every character is `cell_width` times its terminal cell width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Width of a single-cell character.
    pub cell_width: f32,
    /// Height of a line.
    pub line_height: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            line_height: 16.0,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str) -> f32 {
        text.width() as f32 * self.cell_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// A point in content space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The host window the editor is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Horizontal scroll offset.
    pub scroll_x: f32,
    /// Vertical scroll offset.
    pub scroll_y: f32,
    /// Visible width.
    pub width: f32,
    /// Visible height.
    pub height: f32,
    /// The window has keyboard focus.
    pub focused: bool,
    /// Mouse position in content space, if the mouse is over the window.
    pub mouse: Option<Point>,
}

/// A piece of text drawn in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Left edge.
    pub x: f32,
    /// The text.
    pub text: String,
    /// Draw color.
    pub color: Color,
}

/// Visible whitespace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WhitespaceMarker {
    /// An arrow across a tab, from `x1` to `x2`.
    Tab {
        /// Arrow tail.
        x1: f32,
        /// Arrow head.
        x2: f32,
    },
    /// A dot centered at `x`.
    Space {
        /// Dot center.
        x: f32,
    },
}

/// The cursor rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caret {
    /// Left edge.
    pub x: f32,
    /// Width: 1 pixel, or the glyph under the cursor in overwrite mode.
    pub width: f32,
    /// Fill color.
    pub color: Color,
}

/// Highlight of the line holding the cursor when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentLine {
    /// Fill color (active or inactive, depending on focus).
    pub fill: Color,
    /// Outline color.
    pub edge: Color,
}

/// One visible line.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLine {
    /// Line index.
    pub line: usize,
    /// Top edge.
    pub y: f32,
    /// Right-aligned line number label.
    pub line_number: String,
    /// Left edge of the line number label.
    pub line_number_x: f32,
    /// Width of the text, for the background fill.
    pub text_width: f32,
    /// Selected span `(start, end)`.
    pub selection: Option<(f32, f32)>,
    /// A breakpoint is set on this line.
    pub breakpoint: bool,
    /// An error marker is set on this line.
    pub error: bool,
    /// Current line highlight.
    pub current_line: Option<CurrentLine>,
    /// Cursor, when the line holds it and the window is focused.
    pub caret: Option<Caret>,
    /// Colored text.
    pub runs: Vec<TextRun>,
    /// Whitespace markers, when enabled.
    pub whitespace: Vec<WhitespaceMarker>,
}

/// Hover information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tooltip {
    /// The mouse is over a line carrying an error marker.
    Error {
        /// Line index.
        line: usize,
        /// Marker message.
        message: String,
    },
    /// The mouse is over a known identifier.
    Identifier {
        /// Declaration text.
        declaration: String,
    },
}

/// Output of one [`Editor::render`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Left edge of the text column.
    pub text_start: f32,
    /// Width of one character and height of one line.
    pub char_advance: Point,
    /// Visible lines, top to bottom.
    pub lines: Vec<RenderLine>,
    /// Width of the scrollable area.
    pub content_width: f32,
    /// Height of the scrollable area.
    pub content_height: f32,
    /// New horizontal scroll offset requested by the editor.
    pub scroll_x: Option<f32>,
    /// New vertical scroll offset requested by the editor.
    pub scroll_y: Option<f32>,
    /// Hover tooltips.
    pub tooltips: Vec<Tooltip>,
}

/// Pixel position after a tab starting at `x`.
fn tab_stop_x(x: f32, tab_size: usize, space_width: f32) -> f32 {
    if tab_size == 0 {
        return x + space_width;
    }
    let stop = tab_size as f32 * space_width;
    (1.0 + ((1.0 + x) / stop).floor()) * stop
}

/// The character starting at `index` and its byte length.
fn char_at(line: &Line, index: usize) -> (String, usize) {
    let len = utf8_char_length(line[index].ch);
    let end = (index + len).min(line.len());
    let bytes = line[index..end].iter().map(|g| g.ch).collect();
    (bytes_to_string(bytes), end - index)
}

impl Editor {
    /// Width of `#` and the spaced line height.
    pub fn char_advance(&self, measure: &dyn TextMeasure) -> Point {
        Point::new(
            measure.text_width("#"),
            measure.line_height() * self.config.line_spacing,
        )
    }

    /// Left edge of the text column: the widest line number plus a margin.
    pub fn text_start(&self, measure: &dyn TextMeasure) -> f32 {
        measure.text_width(&format!(" {} ", self.document.line_count())) + LEFT_MARGIN
    }

    /// Number of whole lines that fit in `height`.
    pub fn page_size(&self, height: f32, measure: &dyn TextMeasure) -> usize {
        let advance = self.char_advance(measure).y;
        if advance <= 0.0 {
            return 0;
        }
        ((height - 20.0) / advance).floor().max(0.0) as usize
    }

    /// Horizontal distance in pixels from the start of the line to `from`.
    pub fn text_distance_to_line_start(&self, from: Coordinates, measure: &dyn TextMeasure) -> f32 {
        let Some(line) = self.document.line(from.line) else {
            return 0.0;
        };
        let space = measure.text_width(" ");
        let end = self.document.index_of(from);

        let mut distance = 0.0;
        let mut index = 0;
        while index < line.len() && index < end {
            if line[index].ch == b'\t' {
                distance = tab_stop_x(distance, self.config.tab_size, space);
                index += 1;
            } else {
                let (text, len) = char_at(line, index);
                distance += measure.text_width(&text);
                index += len;
            }
        }
        distance
    }

    /// Document position under `point`. Clicks snap to the nearest character boundary.
    pub fn screen_pos_to_coordinates(
        &self,
        point: Point,
        measure: &dyn TextMeasure,
    ) -> Coordinates {
        let advance = self.char_advance(measure);
        let text_start = self.text_start(measure);
        let line_no = if advance.y > 0.0 {
            (point.y / advance.y).floor().max(0.0) as usize
        } else {
            0
        };

        let mut column = 0;
        if let Some(line) = self.document.line(line_no) {
            let space = measure.text_width(" ");
            let tab_size = self.config.tab_size;
            let mut x = 0.0;
            let mut index = 0;

            while index < line.len() {
                if line[index].ch == b'\t' {
                    let next_x = tab_stop_x(x, tab_size, space);
                    if text_start + x + (next_x - x) * 0.5 > point.x {
                        break;
                    }
                    x = next_x;
                    column = crate::text::next_tab_stop(column, tab_size);
                    index += 1;
                } else {
                    let (text, len) = char_at(line, index);
                    let width = measure.text_width(&text);
                    if text_start + x + width * 0.5 > point.x {
                        break;
                    }
                    x += width;
                    column += 1;
                    index += len;
                }
            }
        }

        self.document.sanitize(Coordinates::new(line_no, column))
    }

    /// Lay out the visible part of the document.
    ///
    /// Runs one colorizer step first, then honors pending scroll requests: a bulk load scrolls to
    /// the top, and cursor movement scrolls the cursor into view.
    pub fn render(&mut self, viewport: &Viewport, measure: &dyn TextMeasure) -> RenderFrame {
        self.colorize_step();

        let advance = self.char_advance(measure);
        let text_start = self.text_start(measure);
        let space = measure.text_width(" ");

        let mut frame = RenderFrame {
            text_start,
            char_advance: advance,
            lines: Vec::new(),
            content_width: text_start + 2.0,
            content_height: self.document.line_count() as f32 * advance.y,
            scroll_x: None,
            scroll_y: None,
            tooltips: Vec::new(),
        };

        let mut scroll_y = viewport.scroll_y;
        if self.scroll_to_top {
            self.scroll_to_top = false;
            scroll_y = 0.0;
            frame.scroll_y = Some(0.0);
        }

        if advance.y <= 0.0 {
            return frame;
        }

        let first = (scroll_y / advance.y).floor().max(0.0) as usize;
        let visible = ((scroll_y + viewport.height) / advance.y).floor().max(0.0) as usize;
        let last = (first + visible).min(self.document.line_count() - 1);

        let mut longest = text_start;
        for line_no in first..=last {
            let line = self.layout_line(line_no, viewport, measure, text_start, advance, space);
            longest = longest.max(text_start + line.text_width);
            frame.lines.push(line);
        }
        frame.content_width = longest + 2.0;

        if let Some(mouse) = viewport.mouse {
            frame.tooltips = self.tooltips_at(mouse, measure, advance);
        }

        if self.scroll_to_cursor {
            self.scroll_to_cursor = false;
            let view = Viewport {
                scroll_y,
                ..*viewport
            };
            let (x, y) = self.cursor_scroll(&view, measure, text_start, advance);
            frame.scroll_x = x;
            frame.scroll_y = y.or(frame.scroll_y);
        }

        frame
    }

    fn layout_line(
        &self,
        line_no: usize,
        viewport: &Viewport,
        measure: &dyn TextMeasure,
        text_start: f32,
        advance: Point,
        space: f32,
    ) -> RenderLine {
        let line_end = Coordinates::new(line_no, self.document.line_max_column(line_no));
        let line_start = Coordinates::new(line_no, 0);
        let text_width = self.text_distance_to_line_start(line_end, measure);

        let selection = {
            let start = self.state.selection_start;
            let end = self.state.selection_end;
            let from = (start <= line_end).then(|| {
                if start > line_start {
                    self.text_distance_to_line_start(start, measure)
                } else {
                    0.0
                }
            });
            let to = (end > line_start).then(|| {
                let to = self.text_distance_to_line_start(end.min(line_end), measure);
                if end.line > line_no { to + advance.x } else { to }
            });
            match (from, to) {
                (Some(from), Some(to)) if from < to => Some((text_start + from, text_start + to)),
                _ => None,
            }
        };

        let label = format!("{}  ", line_no + 1);
        let line_number_x = text_start - measure.text_width(&label);

        let mut current_line = None;
        let mut caret = None;
        if self.state.cursor.line == line_no {
            if !self.has_selection() {
                let fill = if viewport.focused {
                    SyntaxClass::CurrentLineFill
                } else {
                    SyntaxClass::CurrentLineFillInactive
                };
                current_line = Some(CurrentLine {
                    fill: self.palette.color(fill),
                    edge: self.palette.color(SyntaxClass::CurrentLineEdge),
                });
            }
            if viewport.focused {
                caret = Some(self.caret(measure, text_start, space));
            }
        }

        let (runs, whitespace) = self.layout_runs(line_no, measure, text_start, space);

        RenderLine {
            line: line_no,
            y: line_no as f32 * advance.y,
            line_number: label,
            line_number_x,
            text_width,
            selection,
            breakpoint: self.breakpoints.contains(line_no),
            error: self.error_markers.get(line_no).is_some(),
            current_line,
            caret,
            runs,
            whitespace,
        }
    }

    fn caret(&self, measure: &dyn TextMeasure, text_start: f32, space: f32) -> Caret {
        let cursor = self.cursor_position();
        let x = self.text_distance_to_line_start(cursor, measure);
        let mut width = 1.0;

        if self.config.overwrite
            && let Some(line) = self.document.line(cursor.line)
        {
            let index = self.document.index_of(cursor);
            if index < line.len() {
                width = if line[index].ch == b'\t' {
                    tab_stop_x(x, self.config.tab_size, space) - x
                } else {
                    measure.text_width(&char_at(line, index).0)
                };
            }
        }

        Caret {
            x: text_start + x,
            width,
            color: self.palette.color(SyntaxClass::Cursor),
        }
    }

    /// Split a line into runs of equal color. Tabs and spaces always end a run.
    fn layout_runs(
        &self,
        line_no: usize,
        measure: &dyn TextMeasure,
        text_start: f32,
        space: f32,
    ) -> (Vec<TextRun>, Vec<WhitespaceMarker>) {
        let mut runs = Vec::new();
        let mut whitespace = Vec::new();
        let Some(line) = self.document.line(line_no) else {
            return (runs, whitespace);
        };

        let colorized = self.config.colorizer_enabled;
        let show_whitespaces = self.config.show_whitespaces;
        let mut buffer: Vec<u8> = Vec::new();
        let mut offset = 0.0;
        let mut prev_color = line.first().map_or(self.palette.color(SyntaxClass::Default), |g| {
            self.palette.glyph_color(g, colorized)
        });

        let mut index = 0;
        while index < line.len() {
            let glyph = line[index];
            let color = self.palette.glyph_color(&glyph, colorized);

            let breaks_run = color != prev_color || glyph.ch == b'\t' || glyph.ch == b' ';
            if breaks_run && !buffer.is_empty() {
                let text = bytes_to_string(std::mem::take(&mut buffer));
                let width = measure.text_width(&text);
                runs.push(TextRun {
                    x: text_start + offset,
                    text,
                    color: prev_color,
                });
                offset += width;
            }
            prev_color = color;

            match glyph.ch {
                b'\t' => {
                    let old = offset;
                    offset = tab_stop_x(offset, self.config.tab_size, space);
                    if show_whitespaces {
                        whitespace.push(WhitespaceMarker::Tab {
                            x1: text_start + old + 1.0,
                            x2: text_start + offset - 1.0,
                        });
                    }
                    index += 1;
                }
                b' ' => {
                    if show_whitespaces {
                        whitespace.push(WhitespaceMarker::Space {
                            x: text_start + offset + space * 0.5,
                        });
                    }
                    offset += space;
                    index += 1;
                }
                _ => {
                    let end = (index + utf8_char_length(glyph.ch)).min(line.len());
                    buffer.extend(line[index..end].iter().map(|g| g.ch));
                    index = end;
                }
            }
        }

        if !buffer.is_empty() {
            runs.push(TextRun {
                x: text_start + offset,
                text: bytes_to_string(buffer),
                color: prev_color,
            });
        }

        (runs, whitespace)
    }

    fn tooltips_at(&self, mouse: Point, measure: &dyn TextMeasure, advance: Point) -> Vec<Tooltip> {
        let mut tooltips = Vec::new();

        if mouse.y >= 0.0 {
            let line = (mouse.y / advance.y).floor() as usize;
            if let Some(message) = self.error_markers.get(line) {
                tooltips.push(Tooltip::Error {
                    line,
                    message: message.to_owned(),
                });
            }
        }

        let at = self.screen_pos_to_coordinates(mouse, measure);
        if let Some(declaration) = self.identifier_description_at(at) {
            tooltips.push(Tooltip::Identifier {
                declaration: declaration.to_owned(),
            });
        }

        tooltips
    }

    /// Scroll offsets that bring the cursor into view, keeping a four-line / four-pixel margin.
    fn cursor_scroll(
        &self,
        viewport: &Viewport,
        measure: &dyn TextMeasure,
        text_start: f32,
        advance: Point,
    ) -> (Option<f32>, Option<f32>) {
        let top = 1.0 + (viewport.scroll_y / advance.y).ceil();
        let bottom = ((viewport.scroll_y + viewport.height) / advance.y).ceil();
        let left = viewport.scroll_x;
        let right = viewport.scroll_x + viewport.width;

        let cursor = self.cursor_position();
        let line = cursor.line as f32;
        let x = self.text_distance_to_line_start(cursor, measure) + text_start;

        let mut scroll_y = None;
        if line < top {
            scroll_y = Some(((line - 1.0) * advance.y).max(0.0));
        }
        if line > bottom - 4.0 {
            scroll_y = Some(((line + 4.0) * advance.y - viewport.height).max(0.0));
        }

        let mut scroll_x = None;
        if x < left + 4.0 {
            scroll_x = Some((x - 4.0).max(0.0));
        }
        if x > right - 4.0 {
            scroll_x = Some((x + 4.0 - viewport.width).max(0.0));
        }

        (scroll_x, scroll_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use pretty_assertions::assert_eq;

    const MEASURE: MonospaceMeasure = MonospaceMeasure {
        cell_width: 10.0,
        line_height: 20.0,
    };

    fn viewport() -> Viewport {
        Viewport {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 400.0,
            focused: true,
            mouse: None,
        }
    }

    fn editor(text: &str) -> Editor {
        let mut editor = Editor::new();
        editor.set_text(text);
        editor.colorize_all();
        editor
    }

    #[test]
    fn test_text_start_and_line_numbers() {
        let mut e = editor("a\nb");
        // " 2 " is three cells.
        assert_eq!(e.text_start(&MEASURE), 40.0);

        let frame = e.render(&viewport(), &MEASURE);
        assert_eq!(frame.lines.len(), 2);
        assert_eq!(frame.lines[1].line_number, "2  ");
        assert_eq!(frame.lines[1].line_number_x, 10.0);
        assert_eq!(frame.lines[1].y, 20.0);
    }

    #[test]
    fn test_distance_with_tabs() {
        let mut e = editor("\tx\ty");
        e.set_tab_size(4);
        assert_eq!(e.text_distance_to_line_start(Coordinates::new(0, 4), &MEASURE), 40.0);
        assert_eq!(e.text_distance_to_line_start(Coordinates::new(0, 5), &MEASURE), 50.0);
        assert_eq!(e.text_distance_to_line_start(Coordinates::new(0, 8), &MEASURE), 80.0);

        e.set_tab_size(0);
        assert_eq!(e.text_distance_to_line_start(Coordinates::new(0, 1), &MEASURE), 10.0);
    }

    #[test]
    fn test_screen_pos_round_trip() {
        let e = editor("hello\n\tworld");
        let start = e.text_start(&MEASURE);
        let at = e.screen_pos_to_coordinates(Point::new(start + 26.0, 5.0), &MEASURE);
        assert_eq!(at, Coordinates::new(0, 3));

        let at = e.screen_pos_to_coordinates(Point::new(start + 44.0, 25.0), &MEASURE);
        assert_eq!(at, Coordinates::new(1, 4));

        let at = e.screen_pos_to_coordinates(Point::new(0.0, 500.0), &MEASURE);
        assert_eq!(at, Coordinates::new(1, 9));
    }

    #[test]
    fn test_runs_split_on_color_and_whitespace() {
        let mut e = editor("float x;");
        let frame = e.render(&viewport(), &MEASURE);
        let line = &frame.lines[0];
        let texts: Vec<&str> = line.runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["float", "x", ";"]);

        let palette = Palette::dark();
        assert_eq!(line.runs[0].color, palette.color(SyntaxClass::Keyword));
        assert_eq!(line.runs[1].x, frame.text_start + 60.0);
        assert_eq!(
            line.whitespace,
            vec![WhitespaceMarker::Space {
                x: frame.text_start + 55.0
            }]
        );
    }

    #[test]
    fn test_whitespace_markers_hidden() {
        let mut e = editor("a\tb c");
        e.set_show_whitespaces(false);
        let frame = e.render(&viewport(), &MEASURE);
        assert!(frame.lines[0].whitespace.is_empty());
        assert_eq!(frame.lines[0].runs.len(), 3);
    }

    #[test]
    fn test_selection_span_and_caret() {
        let mut e = editor("abcd\nef");
        e.set_selection(
            Coordinates::new(0, 1),
            Coordinates::new(1, 1),
            crate::SelectionMode::Normal,
        );
        e.set_cursor_position(Coordinates::new(1, 1));
        let frame = e.render(&viewport(), &MEASURE);
        let start = frame.text_start;

        assert_eq!(frame.lines[0].selection, Some((start + 10.0, start + 50.0)));
        assert_eq!(frame.lines[1].selection, Some((start, start + 10.0)));
        assert!(frame.lines[1].current_line.is_none());

        let caret = frame.lines[1].caret.unwrap();
        assert_eq!(caret.x, start + 10.0);
        assert_eq!(caret.width, 1.0);
    }

    #[test]
    fn test_overwrite_caret_covers_glyph() {
        let mut e = editor("ab");
        e.set_overwrite(true);
        let frame = e.render(&viewport(), &MEASURE);
        assert_eq!(frame.lines[0].caret.unwrap().width, 10.0);
        assert!(frame.lines[0].current_line.is_some());
    }

    #[test]
    fn test_scroll_requests() {
        let text = (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut e = editor(&text);
        let frame = e.render(&viewport(), &MEASURE);
        assert_eq!(frame.scroll_y, Some(0.0));

        e.set_cursor_position(Coordinates::new(50, 0));
        let frame = e.render(&viewport(), &MEASURE);
        assert_eq!(frame.scroll_y, Some(54.0 * 20.0 - 400.0));

        let frame = e.render(&viewport(), &MEASURE);
        assert_eq!(frame.scroll_y, None);
    }

    #[test]
    fn test_markers_and_tooltips() {
        let mut e = editor("x = saturate(y);\nbad");
        e.set_error_markers([(1, "syntax error".to_owned())]);
        e.set_breakpoints([0]);

        let start = e.text_start(&MEASURE);
        let mut view = viewport();
        view.mouse = Some(Point::new(start + 61.0, 25.0));
        let frame = e.render(&view, &MEASURE);

        assert!(frame.lines[0].breakpoint);
        assert!(frame.lines[1].error);
        assert_eq!(
            frame.tooltips,
            vec![Tooltip::Error {
                line: 1,
                message: "syntax error".to_owned()
            }]
        );

        view.mouse = Some(Point::new(start + 61.0, 5.0));
        let frame = e.render(&view, &MEASURE);
        assert!(matches!(frame.tooltips.as_slice(), [Tooltip::Identifier { .. }]));
    }

    #[test]
    fn test_page_size() {
        let e = editor("");
        assert_eq!(e.page_size(420.0, &MEASURE), 20);
        assert_eq!(e.page_size(10.0, &MEASURE), 0);
    }
}
