//! Text-bearing fields: labelled text, numbers and static captions.
//!
//! All of them share one redraw routine. The content is measured with an
//! off-screen print, placed according to the alignment, the unused part of
//! the row is cleared so no trace of a longer previous string remains, and
//! the optional underline is erased and redrawn to the new width.

use heapless::String;
use lcd_surface::{font_height, DrawingSurface, Font, PixelNumber, OFFSCREEN_Y};

use crate::dirty;
use crate::field::{Alignment, FieldCore, Widget};
use crate::style::WidgetStyle;

/// Capacity of a field's own text buffer, in bytes.
pub const TEXT_CAPACITY: usize = 64;

/// Owned, fixed-capacity field text.
pub type FieldText = String<TEXT_CAPACITY>;

/// Gap between text rows.
pub(crate) const ROW_GAP: PixelNumber = 2;

/// Copy `text` into a fixed buffer, dropping whole characters that do not fit.
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Number of `'\n'`-separated rows in `text`.
pub(crate) fn row_count(text: &str) -> u16 {
    let breaks = text.bytes().filter(|&b| b == b'\n').count();
    u16::try_from(breaks).unwrap_or(u16::MAX).saturating_add(1)
}

/// Row `row` of a `'\n'`-separated string, empty past the end.
pub(crate) fn text_row(text: &str, row: u16) -> &str {
    text.split('\n').nth(usize::from(row)).unwrap_or("")
}

fn print_nonempty<S: DrawingSurface>(surface: &mut S, text: &str) -> Result<(), S::Error> {
    if text.is_empty() {
        Ok(())
    } else {
        surface.print(text)
    }
}

/// Presentation shared by text fields.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextLook {
    pub(crate) font: Font,
    pub(crate) alignment: Alignment,
    pub(crate) border: bool,
    pub(crate) underlined: bool,
}

impl TextLook {
    fn new(style: &WidgetStyle, alignment: Alignment) -> Self {
        Self {
            font: style.font,
            alignment,
            border: false,
            underlined: false,
        }
    }

    fn height(&self, rows: u16) -> PixelNumber {
        let font_h = font_height(self.font);
        let mut height = font_h
            .saturating_mul(rows)
            .saturating_add(rows.saturating_sub(1).saturating_mul(ROW_GAP));
        if self.underlined {
            height = height.saturating_add(2);
        }
        if self.border {
            height = height.saturating_add(4);
        }
        height
    }
}

/// Shared text redraw. `print_row` prints one row of the content at the
/// current cursor.
#[allow(clippy::too_many_arguments)]
fn refresh_text<S, F>(
    core: &mut FieldCore,
    look: &TextLook,
    rows: u16,
    surface: &mut S,
    full: bool,
    x_offset: PixelNumber,
    y_offset: PixelNumber,
    print_row: F,
) -> Result<(), S::Error>
where
    S: DrawingSurface,
    F: Fn(&mut S, u16) -> Result<(), S::Error>,
{
    if !full && !core.changed {
        return Ok(());
    }
    let mut x = x_offset.saturating_add(core.x);
    let mut y = y_offset.saturating_add(core.y);
    let mut text_width = core.width;
    if look.border {
        if full {
            surface.set_color(core.fcolour);
            surface.draw_rect(
                x,
                y,
                x.saturating_add(core.width).saturating_sub(1),
                y.saturating_add(look.height(rows)).saturating_sub(1),
            )?;
        }
        x = x.saturating_add(2);
        y = y.saturating_add(2);
        text_width = text_width.saturating_sub(4);
    }

    surface.set_font(look.font);
    surface.set_color(core.fcolour);
    surface.set_back_color(core.bcolour);
    let font_h = font_height(look.font);
    let right_margin = x.saturating_add(text_width);
    let mut row_y = y;

    for row in 0..rows {
        surface.set_text_pos(0, OFFSCREEN_Y, text_width);
        print_row(surface, row)?;
        let actual = surface.text_x();
        let underline_y = row_y.saturating_add(font_h).saturating_add(1);
        if look.underlined {
            surface.set_color(core.bcolour);
            surface.draw_line(x, underline_y, right_margin.saturating_sub(1), underline_y)?;
            surface.set_color(core.fcolour);
        }

        let spare = text_width.saturating_sub(actual);
        let text_x = match look.alignment {
            Alignment::Left => x,
            Alignment::Centre => x.saturating_add(spare / 2),
            Alignment::Right => {
                x.saturating_add(if spare <= 3 { 0 } else { spare.saturating_sub(3) })
            }
        };

        surface.set_text_pos(x, row_y, right_margin);
        if look.alignment == Alignment::Left {
            print_row(surface, row)?;
            surface.clear_to_margin()?;
        } else {
            surface.clear_to_margin()?;
            surface.set_text_pos(text_x, row_y, right_margin);
            print_row(surface, row)?;
        }

        if look.underlined && actual > 0 {
            let end = text_x.saturating_add(actual).saturating_sub(1);
            surface.draw_line(text_x, underline_y, end, underline_y)?;
        }
        row_y = row_y.saturating_add(font_h).saturating_add(ROW_GAP);
    }
    core.changed = false;
    Ok(())
}

macro_rules! text_look_builders {
    ($kind:ident) => {
        impl $kind {
            /// Draw a border round the field and inset the text by 2 px.
            #[must_use]
            pub fn with_border(mut self) -> Self {
                self.look.border = true;
                self
            }

            /// Underline the text.
            #[must_use]
            pub fn underlined(mut self) -> Self {
                self.look.underlined = true;
                self
            }

            /// Alignment of the text.
            #[must_use]
            pub fn alignment(&self) -> Alignment {
                self.look.alignment
            }
        }
    };
}

/// A label followed by a changeable string.
#[derive(Debug, Clone)]
pub struct TextField {
    core: FieldCore,
    look: TextLook,
    label: &'static str,
    text: FieldText,
}

impl TextField {
    /// A text field showing `label` then `text`.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        alignment: Alignment,
        label: &'static str,
        text: &str,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            look: TextLook::new(style, alignment),
            label,
            text: truncated(text),
        }
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_value(&mut self, text: &str) -> bool {
        dirty::update(&mut self.text, truncated(text), &mut self.core.changed)
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: &'static str) -> bool {
        dirty::update(&mut self.label, label, &mut self.core.changed)
    }
}

text_look_builders!(TextField);

impl Widget for TextField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn height(&self) -> PixelNumber {
        self.look.height(1)
    }

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        let (label, text) = (self.label, &self.text);
        refresh_text(&mut self.core, &self.look, 1, surface, full, x_offset, y_offset, |s, _| {
            print_nonempty(s, label)?;
            print_nonempty(s, text)
        })
    }
}

/// A label, a float printed to a fixed number of decimals, and units.
#[derive(Debug, Clone)]
pub struct FloatField {
    core: FieldCore,
    look: TextLook,
    label: &'static str,
    units: &'static str,
    value: f32,
    decimals: u8,
}

impl FloatField {
    /// A float field initialised to zero.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        alignment: Alignment,
        decimals: u8,
        label: &'static str,
        units: &'static str,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            look: TextLook::new(style, alignment),
            label,
            units,
            value: 0.0,
            decimals,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Change the value; differences under 0.001 are ignored.
    pub fn set_value(&mut self, value: f32) -> bool {
        dirty::update_f32(&mut self.value, value, &mut self.core.changed)
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: &'static str) -> bool {
        dirty::update(&mut self.label, label, &mut self.core.changed)
    }
}

text_look_builders!(FloatField);

impl Widget for FloatField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn height(&self) -> PixelNumber {
        self.look.height(1)
    }

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        let (label, units, value, decimals) = (self.label, self.units, self.value, self.decimals);
        refresh_text(&mut self.core, &self.look, 1, surface, full, x_offset, y_offset, |s, _| {
            print_nonempty(s, label)?;
            s.print_float(value, decimals)?;
            print_nonempty(s, units)
        })
    }
}

/// A label, an integer and units.
#[derive(Debug, Clone)]
pub struct IntegerField {
    core: FieldCore,
    look: TextLook,
    label: &'static str,
    units: &'static str,
    value: i32,
}

impl IntegerField {
    /// An integer field initialised to zero.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        alignment: Alignment,
        label: &'static str,
        units: &'static str,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            look: TextLook::new(style, alignment),
            label,
            units,
            value: 0,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Change the value.
    pub fn set_value(&mut self, value: i32) -> bool {
        dirty::update(&mut self.value, value, &mut self.core.changed)
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: &'static str) -> bool {
        dirty::update(&mut self.label, label, &mut self.core.changed)
    }
}

text_look_builders!(IntegerField);

impl Widget for IntegerField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn height(&self) -> PixelNumber {
        self.look.height(1)
    }

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        let (label, units, value) = (self.label, self.units, self.value);
        refresh_text(&mut self.core, &self.look, 1, surface, full, x_offset, y_offset, |s, _| {
            print_nonempty(s, label)?;
            s.print_int(value)?;
            print_nonempty(s, units)
        })
    }
}

/// Caption text, possibly several `'\n'`-separated rows.
#[derive(Debug, Clone)]
pub struct StaticTextField {
    core: FieldCore,
    look: TextLook,
    text: FieldText,
    rows: u16,
}

impl StaticTextField {
    /// A caption showing `text`.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        alignment: Alignment,
        text: &str,
    ) -> Self {
        let text: FieldText = truncated(text);
        Self {
            core: FieldCore::new(style, x, y, width),
            look: TextLook::new(style, alignment),
            rows: row_count(&text),
            text,
        }
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Replace the text. With `force` the field is redrawn even when the
    /// text is unchanged.
    pub fn set_value(&mut self, text: &str, force: bool) -> bool {
        let changed = dirty::update(&mut self.text, truncated(text), &mut self.core.changed);
        self.rows = row_count(&self.text);
        if force {
            self.core.changed = true;
        }
        changed || force
    }
}

text_look_builders!(StaticTextField);

impl Widget for StaticTextField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn height(&self) -> PixelNumber {
        self.look.height(self.rows)
    }

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        let text = &self.text;
        refresh_text(
            &mut self.core,
            &self.look,
            self.rows,
            surface,
            full,
            x_offset,
            y_offset,
            |s, row| {
                print_nonempty(s, text_row(text, row))
            },
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use lcd_testing::{DrawCall, RecordingSurface};

    const STYLE: WidgetStyle = WidgetStyle::new(&FONT_6X10);

    fn surface() -> RecordingSurface {
        RecordingSurface::new(480, 272, &FONT_6X10)
    }

    #[test]
    fn test_truncated_keeps_whole_chars() {
        let s: String<4> = truncated("abcdef");
        assert_eq!(s.as_str(), "abcd");
        let s: String<3> = truncated("aé");
        assert_eq!(s.as_str(), "aé");
        let s: String<2> = truncated("aé");
        assert_eq!(s.as_str(), "a");
    }

    #[test]
    fn test_rows() {
        assert_eq!(row_count("one"), 1);
        assert_eq!(row_count("one\ntwo\n"), 3);
        assert_eq!(text_row("one\ntwo", 1), "two");
        assert_eq!(text_row("one", 4), "");
    }

    #[test]
    fn test_heights() {
        let plain = StaticTextField::new(&STYLE, 0, 0, 100, Alignment::Left, "a");
        assert_eq!(plain.height(), 10);
        let two_rows = StaticTextField::new(&STYLE, 0, 0, 100, Alignment::Left, "a\nb");
        assert_eq!(two_rows.height(), 22);
        let decorated = StaticTextField::new(&STYLE, 0, 0, 100, Alignment::Left, "a")
            .with_border()
            .underlined();
        assert_eq!(decorated.height(), 16);
    }

    #[test]
    fn test_left_alignment_prints_at_edge_and_clears() {
        let mut f = StaticTextField::new(&STYLE, 10, 20, 100, Alignment::Left, "abc");
        let mut s = surface();
        f.refresh(&mut s, false, 0, 0).unwrap();
        assert_eq!(s.prints(), vec![(10, 20, "abc")]);
        s.assert_call(&DrawCall::ClearToMargin { x1: 28, x2: 109, y: 20, colour: STYLE.bg })
            .unwrap();
        assert!(!f.has_changed());
    }

    #[test]
    fn test_centre_alignment() {
        // 3 glyphs of 6 px in a 100 px field: spare 82, offset 41.
        let mut f = StaticTextField::new(&STYLE, 10, 0, 100, Alignment::Centre, "abc");
        let mut s = surface();
        f.refresh(&mut s, true, 0, 0).unwrap();
        assert_eq!(s.prints(), vec![(51, 0, "abc")]);
    }

    #[test]
    fn test_right_alignment_keeps_three_pixel_margin() {
        let mut f = StaticTextField::new(&STYLE, 10, 0, 100, Alignment::Right, "abc");
        let mut s = surface();
        f.refresh(&mut s, true, 0, 0).unwrap();
        assert_eq!(s.prints(), vec![(89, 0, "abc")]);
    }

    #[test]
    fn test_right_alignment_snaps_when_tight() {
        // 20 px wide, 3 glyphs = 18 px, spare 2 <= 3 so no margin.
        let mut f = StaticTextField::new(&STYLE, 0, 0, 20, Alignment::Right, "abc");
        let mut s = surface();
        f.refresh(&mut s, true, 0, 0).unwrap();
        assert_eq!(s.prints(), vec![(2, 0, "abc")]);
    }

    #[test]
    fn test_border_insets_text() {
        let mut f = TextField::new(&STYLE, 0, 0, 100, Alignment::Left, "", "x").with_border();
        let mut s = surface();
        f.refresh(&mut s, true, 0, 0).unwrap();
        s.assert_call(&DrawCall::Rect { x1: 0, y1: 0, x2: 99, y2: 13, colour: STYLE.fg })
            .unwrap();
        assert_eq!(s.prints(), vec![(2, 2, "x")]);

        // Incremental redraw leaves the border alone.
        s.clear();
        f.set_value("y");
        f.refresh(&mut s, false, 0, 0).unwrap();
        assert!(!s.calls().iter().any(|c| matches!(c, DrawCall::Rect { .. })));
    }

    #[test]
    fn test_underline_erased_then_drawn_to_width() {
        let mut f = StaticTextField::new(&STYLE, 0, 0, 60, Alignment::Left, "ab").underlined();
        let mut s = surface();
        f.refresh(&mut s, true, 0, 0).unwrap();
        s.assert_call(&DrawCall::Line { x1: 0, y1: 11, x2: 59, y2: 11, colour: STYLE.bg })
            .unwrap();
        s.assert_call(&DrawCall::Line { x1: 0, y1: 11, x2: 11, y2: 11, colour: STYLE.fg })
            .unwrap();
    }

    #[test]
    fn test_multi_row_aligns_each_row() {
        let mut f = StaticTextField::new(&STYLE, 0, 0, 60, Alignment::Centre, "ab\nabcd");
        let mut s = surface();
        f.refresh(&mut s, true, 0, 0).unwrap();
        assert_eq!(s.prints(), vec![(24, 0, "ab"), (18, 12, "abcd")]);
    }

    #[test]
    fn test_float_field_prints_decimals_and_units() {
        let mut f = FloatField::new(&STYLE, 0, 0, 200, Alignment::Left, 1, "Temp ", "C");
        f.set_value(21.46);
        let mut s = surface();
        f.refresh(&mut s, false, 0, 0).unwrap();
        s.assert_printed("Temp 21.5C").unwrap();
        assert!(!f.set_value(21.4605));
    }

    #[test]
    fn test_text_field_value_round_trip() {
        let mut f = TextField::new(&STYLE, 0, 0, 200, Alignment::Left, "File: ", "a.g");
        assert!(!f.set_value("a.g"));
        assert!(f.set_value("b.g"));
        assert_eq!(f.value(), "b.g");
    }

    #[test]
    fn test_static_text_force_update() {
        let mut f = StaticTextField::new(&STYLE, 0, 0, 100, Alignment::Left, "same");
        let mut s = surface();
        f.refresh(&mut s, false, 0, 0).unwrap();
        assert!(!f.set_value("same", false));
        assert!(!f.has_changed());
        assert!(f.set_value("same", true));
        assert!(f.has_changed());
    }
}
