//! Touchable fields.
//!
//! Every button carries an [`Event`] code, an [`EventParam`] and a pressed
//! state. The face is a rounded rectangle filled with the background (or
//! pressed) colour and gradient, outlined in the border colour, with a
//! caption or icon on top.

use heapless::String;
use lcd_surface::{
    font_height, Colour, DrawingSurface, Font, Gradient, Icon, PixelNumber, OFFSCREEN_Y,
};

use crate::dirty;
use crate::field::{axis_miss, FieldCore, Widget};
use crate::style::{WidgetStyle, BUTTON_GRAD_STEP};
use crate::text::{row_count, text_row, truncated, FieldText, ROW_GAP};

/// Capacity of a string event parameter, in bytes.
pub const PARAM_CAPACITY: usize = 32;

/// Owned string event parameter.
pub type ParamText = String<PARAM_CAPACITY>;

/// Horizontal padding each side of a caption.
const CAPTION_PAD: PixelNumber = 3;

/// Application action code carried by a button. Zero means "no action"; a
/// button with no action is never selected by a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event(pub u8);

impl Event {
    /// No action.
    pub const NONE: Self = Self(0);

    /// Whether this is [`Event::NONE`].
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Argument passed along with a button's event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventParam {
    /// No argument
    #[default]
    None,
    /// Integer argument
    Int(i32),
    /// Text argument
    Str(ParamText),
}

/// State shared by all buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonBase {
    event: Event,
    param: EventParam,
    border: Colour,
    grad: Colour,
    pressed_bg: Colour,
    pressed_grad: Colour,
    pub(crate) pressed: bool,
    text_margin: PixelNumber,
    icon_margin: PixelNumber,
}

impl ButtonBase {
    fn new(style: &WidgetStyle, event: Event, param: EventParam) -> Self {
        Self {
            event,
            param,
            border: style.border,
            grad: style.grad,
            pressed_bg: style.pressed_bg,
            pressed_grad: style.pressed_grad,
            pressed: false,
            text_margin: style.text_margin,
            icon_margin: style.icon_margin,
        }
    }

    /// Action code.
    #[must_use]
    pub fn event(&self) -> Event {
        self.event
    }

    /// Action argument.
    #[must_use]
    pub fn param(&self) -> &EventParam {
        &self.param
    }

    /// Integer argument, if the argument is an integer.
    #[must_use]
    pub fn iparam(&self) -> Option<i32> {
        match self.param {
            EventParam::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Text argument, if the argument is text.
    #[must_use]
    pub fn sparam(&self) -> Option<&str> {
        match &self.param {
            EventParam::Str(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Replace action and argument.
    pub fn set_event(&mut self, event: Event, param: EventParam) {
        self.event = event;
        self.param = param;
    }

    /// Replace action, with an integer argument.
    pub fn set_event_int(&mut self, event: Event, param: i32) {
        self.set_event(event, EventParam::Int(param));
    }

    /// Replace action, with a text argument truncated to [`PARAM_CAPACITY`].
    pub fn set_event_str(&mut self, event: Event, param: &str) {
        self.set_event(event, EventParam::Str(truncated(param)));
    }

    /// Whether the button is drawn pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Face colour and gradient for the given state.
    fn face(&self, background: Colour, pressed: bool) -> (Colour, Gradient) {
        if pressed {
            (self.pressed_bg, Gradient::new(self.pressed_grad, BUTTON_GRAD_STEP))
        } else {
            (background, Gradient::new(self.grad, BUTTON_GRAD_STEP))
        }
    }

    /// Draw the face and border. The face is 2 px shorter than the border so
    /// its corners sit inside it.
    fn draw_outline<S: DrawingSurface>(
        &self,
        core: &FieldCore,
        height: PixelNumber,
        surface: &mut S,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
        pressed: bool,
    ) -> Result<(), S::Error> {
        let x = core.x.saturating_add(x_offset);
        let y = core.y.saturating_add(y_offset);
        let right = x.saturating_add(core.width).saturating_sub(1);
        let bottom = y.saturating_add(height).saturating_sub(1);
        let (face, grad) = self.face(core.bcolour, pressed);
        surface.set_color(face);
        surface.fill_round_rect(x, y.saturating_add(1), right, bottom.saturating_sub(1), grad)?;
        surface.set_color(self.border);
        surface.draw_round_rect(x, y, right, bottom)
    }
}

/// Height of a captioned button with `rows` rows of `font`.
fn caption_height(font: Font, rows: u16, text_margin: PixelNumber) -> PixelNumber {
    font_height(font)
        .saturating_add(ROW_GAP)
        .saturating_mul(rows)
        .saturating_sub(ROW_GAP)
        .saturating_add(text_margin.saturating_mul(2))
        .saturating_add(2)
}

/// Shared redraw for captioned buttons: face, then each row centred.
#[allow(clippy::too_many_arguments)]
fn refresh_caption<S, F>(
    core: &mut FieldCore,
    button: &ButtonBase,
    font: Font,
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
    draw_caption(core, button, font, rows, surface, x_offset, y_offset, button.pressed, print_row)?;
    core.changed = false;
    Ok(())
}

/// Draw a captioned face at the field's position translated by the offsets.
#[allow(clippy::too_many_arguments)]
fn draw_caption<S, F>(
    core: &FieldCore,
    button: &ButtonBase,
    font: Font,
    rows: u16,
    surface: &mut S,
    x_offset: PixelNumber,
    y_offset: PixelNumber,
    pressed: bool,
    print_row: F,
) -> Result<(), S::Error>
where
    S: DrawingSurface,
    F: Fn(&mut S, u16) -> Result<(), S::Error>,
{
    let height = caption_height(font, rows, button.text_margin);
    button.draw_outline(core, height, surface, x_offset, y_offset, pressed)?;
    surface.set_transparent_background(true);
    surface.set_color(core.fcolour);
    surface.set_font(font);

    let x = core.x.saturating_add(x_offset);
    let inner = core.width.saturating_sub(CAPTION_PAD.saturating_mul(2));
    let right_margin = x.saturating_add(core.width).saturating_sub(CAPTION_PAD);
    let mut row_y = core
        .y
        .saturating_add(y_offset)
        .saturating_add(button.text_margin)
        .saturating_add(1);
    for row in 0..rows {
        surface.set_text_pos(0, OFFSCREEN_Y, inner);
        print_row(surface, row)?;
        let spare = inner.saturating_sub(surface.text_x());
        let text_x = x.saturating_add(CAPTION_PAD).saturating_add(spare / 2);
        surface.set_text_pos(text_x, row_y, right_margin);
        print_row(surface, row)?;
        row_y = row_y.saturating_add(font_height(font)).saturating_add(ROW_GAP);
    }
    surface.set_transparent_background(false);
    Ok(())
}

/// Event argument carrying a character.
fn char_code(ch: char) -> i32 {
    i32::try_from(u32::from(ch)).unwrap_or(0)
}

macro_rules! button_widget {
    ($kind:ident, |$this:ident| $height:expr) => {
        impl $kind {
            /// Button state.
            #[must_use]
            pub fn base(&self) -> &ButtonBase {
                &self.button
            }

            /// Button state, mutably.
            pub fn base_mut(&mut self) -> &mut ButtonBase {
                &mut self.button
            }
        }

        impl $kind {
            fn computed_height(&self) -> PixelNumber {
                let $this = self;
                $height
            }
        }
    };
}

macro_rules! widget_core {
    () => {
        fn core(&self) -> &FieldCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut FieldCore {
            &mut self.core
        }

        fn height(&self) -> PixelNumber {
            self.computed_height()
        }

        fn button(&self) -> Option<&ButtonBase> {
            Some(&self.button)
        }

        fn button_parts(&mut self) -> Option<(&mut FieldCore, &mut ButtonBase)> {
            Some((&mut self.core, &mut self.button))
        }
    };
}

/// A single-character key, as on an on-screen keyboard. Its event argument
/// is the character code.
#[derive(Debug, Clone)]
pub struct CharButton {
    core: FieldCore,
    button: ButtonBase,
    font: Font,
    ch: char,
}

impl CharButton {
    /// A key for `ch` raising `event`.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        ch: char,
        event: Event,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            button: ButtonBase::new(style, event, EventParam::Int(char_code(ch))),
            font: style.button_font,
            ch,
        }
    }

    /// Character on the key.
    #[must_use]
    pub fn char(&self) -> char {
        self.ch
    }
}

button_widget!(CharButton, |b| caption_height(b.font, 1, b.button.text_margin));

impl Widget for CharButton {
    widget_core!();

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        let mut glyph = [0u8; 4];
        let caption: &str = self.ch.encode_utf8(&mut glyph);
        refresh_caption(
            &mut self.core,
            &self.button,
            self.font,
            1,
            surface,
            full,
            x_offset,
            y_offset,
            |s, _| s.print(caption),
        )
    }
}

/// A row of single-character keys sharing one event, as on an on-screen
/// keyboard.
///
/// Keys are `width` wide and `step` apart. A touch selects one key by index,
/// only that key is drawn pressed, and the key's character code is its
/// integer argument.
#[derive(Debug, Clone)]
pub struct CharButtonRow {
    core: FieldCore,
    button: ButtonBase,
    font: Font,
    keys: FieldText,
    step: PixelNumber,
    which_pressed: Option<u16>,
}

impl CharButtonRow {
    /// One key per character of `keys`, all raising `event`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        step: PixelNumber,
        keys: &str,
        event: Event,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            button: ButtonBase::new(style, event, EventParam::None),
            font: style.button_font,
            keys: truncated(keys),
            step,
            which_pressed: None,
        }
    }

    /// Characters on the keys, left to right.
    #[must_use]
    pub fn keys(&self) -> &str {
        &self.keys
    }

    /// Number of keys.
    #[must_use]
    pub fn key_count(&self) -> u16 {
        u16::try_from(self.keys.chars().count()).unwrap_or(u16::MAX)
    }

    /// Character on key `index`.
    #[must_use]
    pub fn key(&self, index: u16) -> Option<char> {
        self.keys.chars().nth(usize::from(index))
    }

    /// Index of the key drawn pressed.
    #[must_use]
    pub fn pressed_key(&self) -> Option<u16> {
        self.which_pressed
    }

    /// Relabel the keys, for switching keyboard layouts.
    pub fn set_keys(&mut self, keys: &str) -> bool {
        dirty::update(&mut self.keys, truncated(keys), &mut self.core.changed)
    }

    /// Rightmost column of the first key.
    fn first_key_max_x(&self) -> PixelNumber {
        self.core.x.saturating_add(self.core.width).saturating_sub(1)
    }
}

button_widget!(CharButtonRow, |b| caption_height(b.font, 1, b.button.text_margin));

impl Widget for CharButtonRow {
    widget_core!();

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        if !full && !self.core.changed {
            return Ok(());
        }
        let mut key_offset = x_offset;
        for (index, key) in (0u16..).zip(self.keys.chars()) {
            let mut glyph = [0u8; 4];
            let caption: &str = key.encode_utf8(&mut glyph);
            let pressed = self.which_pressed == Some(index);
            draw_caption(
                &self.core,
                &self.button,
                self.font,
                1,
                surface,
                key_offset,
                y_offset,
                pressed,
                |s, _| s.print(caption),
            )?;
            key_offset = key_offset.saturating_add(self.step);
        }
        self.core.changed = false;
        Ok(())
    }

    fn press(&mut self, pressed: bool, index: u16) -> bool {
        self.button.pressed = pressed;
        dirty::update(&mut self.which_pressed, pressed.then_some(index), &mut self.core.changed)
    }

    fn iparam(&self, index: u16) -> Option<i32> {
        self.key(index).map(char_code)
    }

    /// Right edge of the last key.
    fn max_x(&self) -> PixelNumber {
        let span = self.step.saturating_mul(self.key_count().saturating_sub(1));
        self.first_key_max_x().saturating_add(span)
    }

    fn touch_error(
        &self,
        x: PixelNumber,
        y: PixelNumber,
        tolerance: PixelNumber,
    ) -> Option<(PixelNumber, u16)> {
        let y_err = axis_miss(y, self.min_y(), self.max_y());
        if y_err >= tolerance {
            return None;
        }
        let (mut lo, mut hi) = (self.core.x, self.first_key_max_x());
        let mut best: Option<(PixelNumber, u16)> = None;
        for index in 0..self.key_count() {
            let x_err = axis_miss(x, lo, hi);
            let error = x_err.saturating_add(y_err);
            let better = match best {
                Some((best_error, _)) => error < best_error,
                None => true,
            };
            if x_err < tolerance && better {
                best = Some((error, index));
            }
            lo = lo.saturating_add(self.step);
            hi = hi.saturating_add(self.step);
        }
        best
    }
}

/// A button with a text caption, optionally preceded by a label. Rows are
/// separated by `'\n'`. Without label or text the button is hidden.
#[derive(Debug, Clone)]
pub struct TextButton {
    core: FieldCore,
    button: ButtonBase,
    font: Font,
    label: Option<&'static str>,
    text: Option<FieldText>,
    rows: u16,
}

impl TextButton {
    /// A button captioned `text` raising `event` with `param`.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        text: Option<&str>,
        event: Event,
        param: EventParam,
    ) -> Self {
        let text: Option<FieldText> = text.map(truncated);
        Self {
            core: FieldCore::new(style, x, y, width),
            button: ButtonBase::new(style, event, param),
            font: style.button_font,
            label: None,
            rows: text.as_deref().map_or(1, row_count),
            text,
        }
    }

    /// Print `label` in front of the first caption row.
    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Caption text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the caption. `None` hides the button unless it has a label.
    pub fn set_text(&mut self, text: Option<&str>) -> bool {
        let changed = dirty::update(&mut self.text, text.map(truncated), &mut self.core.changed);
        self.rows = self.text.as_deref().map_or(1, row_count);
        changed
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: Option<&'static str>) -> bool {
        dirty::update(&mut self.label, label, &mut self.core.changed)
    }
}

button_widget!(TextButton, |b| caption_height(b.font, b.rows, b.button.text_margin));

impl Widget for TextButton {
    widget_core!();

    fn is_visible(&self) -> bool {
        self.core.visible && (self.text.is_some() || self.label.is_some())
    }

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        let (label, text) = (self.label, self.text.as_deref());
        refresh_caption(
            &mut self.core,
            &self.button,
            self.font,
            self.rows,
            surface,
            full,
            x_offset,
            y_offset,
            |s, row| {
                if let (0, Some(label)) = (row, label) {
                    s.print(label)?;
                }
                match text {
                    Some(text) => s.print(text_row(text, row)),
                    None => Ok(()),
                }
            },
        )
    }
}

/// A button showing an icon centred on its face.
#[derive(Debug, Clone)]
pub struct IconButton {
    core: FieldCore,
    button: ButtonBase,
    icon: Icon,
}

impl IconButton {
    /// An icon button raising `event` with `param`.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        icon: Icon,
        event: Event,
        param: EventParam,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            button: ButtonBase::new(style, event, param),
            icon,
        }
    }

    /// Swap the icon.
    pub fn set_icon(&mut self, icon: Icon) -> bool {
        dirty::update(&mut self.icon, icon, &mut self.core.changed)
    }
}

fn icon_height(icon: &Icon, icon_margin: PixelNumber) -> PixelNumber {
    icon.height
        .saturating_add(icon_margin.saturating_mul(2))
        .saturating_add(2)
}

button_widget!(IconButton, |b| icon_height(&b.icon, b.button.icon_margin));

impl Widget for IconButton {
    widget_core!();

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        if !full && !self.core.changed {
            return Ok(());
        }
        let height = self.computed_height();
        self.button
            .draw_outline(&self.core, height, surface, x_offset, y_offset, self.button.pressed)?;
        let spare = self.core.width.saturating_sub(self.icon.width);
        let x = x_offset.saturating_add(self.core.x).saturating_add(spare / 2);
        let y = y_offset
            .saturating_add(self.core.y)
            .saturating_add(self.button.icon_margin)
            .saturating_add(1);
        surface.draw_bitmap(x, y, &self.icon)?;
        self.core.changed = false;
        Ok(())
    }
}

/// Caption shown next to the icon of an [`IconButtonWithText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconCaption {
    /// Fixed text
    Text(FieldText),
    /// A number printed in decimal
    Int(i32),
}

/// An icon followed by a short caption, the pair centred on the face.
#[derive(Debug, Clone)]
pub struct IconButtonWithText {
    core: FieldCore,
    button: ButtonBase,
    icon: Icon,
    font: Font,
    caption: IconCaption,
    print_text: bool,
}

impl IconButtonWithText {
    /// An icon button with a caption.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        icon: Icon,
        caption: IconCaption,
        event: Event,
        param: EventParam,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            button: ButtonBase::new(style, event, param),
            icon,
            font: style.font,
            caption,
            print_text: true,
        }
    }

    /// Swap the icon.
    pub fn set_icon(&mut self, icon: Icon) -> bool {
        dirty::update(&mut self.icon, icon, &mut self.core.changed)
    }

    /// Show text as the caption.
    pub fn set_text(&mut self, text: &str) -> bool {
        dirty::update(&mut self.caption, IconCaption::Text(truncated(text)), &mut self.core.changed)
    }

    /// Show a number as the caption.
    pub fn set_int_val(&mut self, value: i32) -> bool {
        dirty::update(&mut self.caption, IconCaption::Int(value), &mut self.core.changed)
    }

    /// Show or suppress the caption.
    pub fn set_print_text(&mut self, print_text: bool) -> bool {
        dirty::update(&mut self.print_text, print_text, &mut self.core.changed)
    }

    fn print_caption<S: DrawingSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        if !self.print_text {
            return Ok(());
        }
        match &self.caption {
            IconCaption::Text(text) => surface.print(text),
            IconCaption::Int(value) => surface.print_int(*value),
        }
    }
}

button_widget!(IconButtonWithText, |b| icon_height(&b.icon, b.button.icon_margin));

impl Widget for IconButtonWithText {
    widget_core!();

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        if !full && !self.core.changed {
            return Ok(());
        }
        let height = self.computed_height();
        self.button
            .draw_outline(&self.core, height, surface, x_offset, y_offset, self.button.pressed)?;

        surface.set_font(self.font);
        let inner = self.core.width.saturating_sub(CAPTION_PAD.saturating_mul(2));
        surface.set_text_pos(0, OFFSCREEN_Y, inner);
        self.print_caption(surface)?;
        let text_width = surface.text_x().saturating_add(CAPTION_PAD.saturating_mul(2));

        let spare = self
            .core
            .width
            .saturating_sub(self.icon.width.saturating_add(text_width));
        let icon_x = x_offset.saturating_add(self.core.x).saturating_add(spare / 2);
        let icon_y = y_offset
            .saturating_add(self.core.y)
            .saturating_add(self.button.icon_margin)
            .saturating_add(1);
        surface.set_transparent_background(true);
        surface.draw_bitmap(icon_x, icon_y, &self.icon)?;

        let text_x = icon_x.saturating_add(self.icon.width).saturating_add(CAPTION_PAD);
        let row_y = y_offset
            .saturating_add(self.core.y)
            .saturating_add(self.button.text_margin)
            .saturating_add(1);
        surface.set_text_pos(text_x, row_y, text_x.saturating_add(text_width));
        surface.set_color(self.core.fcolour);
        self.print_caption(surface)?;
        surface.set_transparent_background(false);
        self.core.changed = false;
        Ok(())
    }
}

/// A button showing a label, an integer and units, used for adjustable
/// settings.
#[derive(Debug, Clone)]
pub struct IntegerButton {
    core: FieldCore,
    button: ButtonBase,
    font: Font,
    label: &'static str,
    units: &'static str,
    value: i32,
}

impl IntegerButton {
    /// An integer button initialised to zero.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        label: &'static str,
        units: &'static str,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            button: ButtonBase::new(style, Event::NONE, EventParam::None),
            font: style.button_font,
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

    /// Add `amount` to the value, saturating at the `i32` range.
    pub fn increment(&mut self, amount: i32) -> bool {
        let value = self.value.saturating_add(amount);
        self.set_value(value)
    }
}

button_widget!(IntegerButton, |b| caption_height(b.font, 1, b.button.text_margin));

impl Widget for IntegerButton {
    widget_core!();

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        let (label, units, value) = (self.label, self.units, self.value);
        refresh_caption(
            &mut self.core,
            &self.button,
            self.font,
            1,
            surface,
            full,
            x_offset,
            y_offset,
            |s, _| {
                if !label.is_empty() {
                    s.print(label)?;
                }
                s.print_int(value)?;
                if units.is_empty() {
                    Ok(())
                } else {
                    s.print(units)
                }
            },
        )
    }
}

/// A button showing a float and units.
#[derive(Debug, Clone)]
pub struct FloatButton {
    core: FieldCore,
    button: ButtonBase,
    font: Font,
    units: &'static str,
    value: f32,
    decimals: u8,
}

impl FloatButton {
    /// A float button initialised to zero.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        decimals: u8,
        units: &'static str,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            button: ButtonBase::new(style, Event::NONE, EventParam::None),
            font: style.button_font,
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

    /// Add a whole number to the value.
    #[allow(clippy::cast_precision_loss)]
    pub fn increment(&mut self, amount: i32) -> bool {
        let value = self.value + amount as f32;
        self.set_value(value)
    }
}

button_widget!(FloatButton, |b| caption_height(b.font, 1, b.button.text_margin));

impl Widget for FloatButton {
    widget_core!();

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        let (units, value, decimals) = (self.units, self.value, self.decimals);
        refresh_caption(
            &mut self.core,
            &self.button,
            self.font,
            1,
            surface,
            full,
            x_offset,
            y_offset,
            |s, _| {
                s.print_float(value, decimals)?;
                if units.is_empty() {
                    Ok(())
                } else {
                    s.print(units)
                }
            },
        )
    }
}
