//! The field abstraction shared by every widget.
//!
//! A field owns its bounding box, colours, a dirty flag and a visibility
//! flag. Fields are stored in a [`FieldArena`](crate::arena::FieldArena) and
//! chained into window lists through [`FieldCore::next`].

use lcd_surface::{Colour, DrawingSurface, Gradient, PixelNumber};

use crate::button::{
    ButtonBase, CharButton, CharButtonRow, FloatButton, IconButton, IconButtonWithText,
    IntegerButton, TextButton,
};
use crate::dirty;
use crate::image::{ColourGradientField, StaticImageField};
use crate::progress::ProgressBar;
use crate::style::WidgetStyle;
use crate::text::{FloatField, IntegerField, StaticTextField, TextField};

/// Index of a field in its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldId(u16);

impl FieldId {
    pub(crate) const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Arena slot of this field.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Horizontal placement of text within its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alignment {
    /// Flush with the left edge
    #[default]
    Left,
    /// Centred in the field
    Centre,
    /// Flush with the right edge, less a 3 px margin when there is room
    Right,
}

/// How far `v` lies outside `lo..=hi`.
pub(crate) fn axis_miss(v: PixelNumber, lo: PixelNumber, hi: PixelNumber) -> PixelNumber {
    if v < lo {
        lo.saturating_sub(v)
    } else {
        v.saturating_sub(hi)
    }
}

/// State common to every field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCore {
    pub(crate) x: PixelNumber,
    pub(crate) y: PixelNumber,
    pub(crate) width: PixelNumber,
    pub(crate) fcolour: Colour,
    pub(crate) bcolour: Colour,
    pub(crate) changed: bool,
    pub(crate) visible: bool,
    pub(crate) next: Option<FieldId>,
}

impl FieldCore {
    /// A visible, dirty field at `(x, y)` in the style's colours.
    #[must_use]
    pub fn new(style: &WidgetStyle, x: PixelNumber, y: PixelNumber, width: PixelNumber) -> Self {
        Self {
            x,
            y,
            width,
            fcolour: style.fg,
            bcolour: style.bg,
            changed: true,
            visible: true,
            next: None,
        }
    }

    /// Left edge, relative to the owning window.
    #[must_use]
    pub fn x(&self) -> PixelNumber {
        self.x
    }

    /// Top edge, relative to the owning window.
    #[must_use]
    pub fn y(&self) -> PixelNumber {
        self.y
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> PixelNumber {
        self.width
    }

    /// Foreground colour.
    #[must_use]
    pub fn fcolour(&self) -> Colour {
        self.fcolour
    }

    /// Background colour.
    #[must_use]
    pub fn bcolour(&self) -> Colour {
        self.bcolour
    }

    /// Next field in the owning window's list.
    #[must_use]
    pub fn next(&self) -> Option<FieldId> {
        self.next
    }
}

/// The redraw and geometry contract every widget implements.
///
/// `refresh` must draw when `full` is set or the field is dirty, leave the
/// panel matching the field's state and clear the dirty flag. When neither
/// holds it must not touch the surface.
pub trait Widget {
    /// Shared field state.
    fn core(&self) -> &FieldCore;

    /// Shared field state, mutably.
    fn core_mut(&mut self) -> &mut FieldCore;

    /// Height in pixels, derived from fonts, rows and decorations.
    fn height(&self) -> PixelNumber;

    /// Redraw at the field's position translated by the offsets.
    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error>;

    /// Button state, for widgets that can be touched.
    fn button(&self) -> Option<&ButtonBase> {
        None
    }

    /// Field and button state together, for widgets that can be touched.
    fn button_parts(&mut self) -> Option<(&mut FieldCore, &mut ButtonBase)> {
        None
    }

    /// Whether the field is currently shown.
    fn is_visible(&self) -> bool {
        self.core().visible
    }

    /// Whether the field needs redrawing.
    fn has_changed(&self) -> bool {
        self.core().changed
    }

    /// Force a redraw on the next refresh.
    fn set_changed(&mut self) {
        self.core_mut().changed = true;
    }

    /// Show or hide. Any flip marks the field dirty.
    fn show(&mut self, visible: bool) -> bool {
        let core = self.core_mut();
        dirty::update(&mut core.visible, visible, &mut core.changed)
    }

    /// Change colours, marking the field dirty only on a real change.
    fn set_colours(&mut self, fg: Colour, bg: Colour) -> bool {
        let core = self.core_mut();
        let fg_changed = dirty::update(&mut core.fcolour, fg, &mut core.changed);
        let bg_changed = dirty::update(&mut core.bcolour, bg, &mut core.changed);
        fg_changed || bg_changed
    }

    /// Move the field.
    fn set_position(&mut self, x: PixelNumber, y: PixelNumber) -> bool {
        let core = self.core_mut();
        let x_changed = dirty::update(&mut core.x, x, &mut core.changed);
        let y_changed = dirty::update(&mut core.y, y, &mut core.changed);
        x_changed || y_changed
    }

    /// Move the field horizontally and resize it.
    fn set_position_and_width(&mut self, x: PixelNumber, width: PixelNumber) -> bool {
        let core = self.core_mut();
        let x_changed = dirty::update(&mut core.x, x, &mut core.changed);
        let w_changed = dirty::update(&mut core.width, width, &mut core.changed);
        x_changed || w_changed
    }

    /// Set the pressed state of a button, or of key `index` of a key row.
    /// Other widgets ignore presses. Returns whether the state changed.
    fn press(&mut self, pressed: bool, _index: u16) -> bool {
        match self.button_parts() {
            Some((core, button)) => dirty::update(&mut button.pressed, pressed, &mut core.changed),
            None => false,
        }
    }

    /// Leftmost column.
    fn min_x(&self) -> PixelNumber {
        self.core().x
    }

    /// Rightmost column.
    fn max_x(&self) -> PixelNumber {
        let core = self.core();
        core.x.saturating_add(core.width).saturating_sub(1)
    }

    /// Top row.
    fn min_y(&self) -> PixelNumber {
        self.core().y
    }

    /// Bottom row.
    fn max_y(&self) -> PixelNumber {
        self.core().y.saturating_add(self.height()).saturating_sub(1)
    }

    /// Whether a touch may select this field.
    fn accepts_touch(&self) -> bool {
        self.is_visible() && self.button().is_some_and(|b| !b.event().is_none())
    }

    /// Distance by which `(x, y)` misses the bounding box on each axis,
    /// zero on an axis the point lies within.
    fn miss_distance(&self, x: PixelNumber, y: PixelNumber) -> (PixelNumber, PixelNumber) {
        (
            axis_miss(x, self.min_x(), self.max_x()),
            axis_miss(y, self.min_y(), self.max_y()),
        )
    }

    /// Summed miss of a touch lying under `tolerance` on both axes, with
    /// the index of the key it selects.
    fn touch_error(
        &self,
        x: PixelNumber,
        y: PixelNumber,
        tolerance: PixelNumber,
    ) -> Option<(PixelNumber, u16)> {
        let (x_err, y_err) = self.miss_distance(x, y);
        (x_err < tolerance && y_err < tolerance).then(|| (x_err.saturating_add(y_err), 0))
    }

    /// Integer event argument of key `index`.
    fn iparam(&self, _index: u16) -> Option<i32> {
        self.button().and_then(ButtonBase::iparam)
    }

    /// Fill the bounding box with `colour` and clear the dirty flag. Used to
    /// remove a field that has just been hidden.
    fn erase<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        colour: Colour,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        surface.set_color(colour);
        surface.fill_rect(
            self.min_x().saturating_add(x_offset),
            self.min_y().saturating_add(y_offset),
            self.max_x().saturating_add(x_offset),
            self.max_y().saturating_add(y_offset),
            Gradient::NONE,
        )?;
        self.core_mut().changed = false;
        Ok(())
    }
}

/// Typed access to one widget kind stored in a [`Field`].
pub trait FieldKind: Sized {
    /// Borrow the widget if `field` holds this kind.
    fn from_field(field: &Field) -> Option<&Self>;

    /// Mutably borrow the widget if `field` holds this kind.
    fn from_field_mut(field: &mut Field) -> Option<&mut Self>;
}

macro_rules! field_kinds {
    ($($kind:ident),+ $(,)?) => {
        /// Any widget the window system can hold.
        #[derive(Debug, Clone)]
        pub enum Field {
            $(
                #[allow(missing_docs)]
                $kind($kind),
            )+
        }

        $(
            impl From<$kind> for Field {
                fn from(widget: $kind) -> Self {
                    Self::$kind(widget)
                }
            }

            impl FieldKind for $kind {
                fn from_field(field: &Field) -> Option<&Self> {
                    match field {
                        Field::$kind(widget) => Some(widget),
                        _ => None,
                    }
                }

                fn from_field_mut(field: &mut Field) -> Option<&mut Self> {
                    match field {
                        Field::$kind(widget) => Some(widget),
                        _ => None,
                    }
                }
            }
        )+

        impl Widget for Field {
            fn core(&self) -> &FieldCore {
                match self {
                    $(Self::$kind(widget) => widget.core(),)+
                }
            }

            fn core_mut(&mut self) -> &mut FieldCore {
                match self {
                    $(Self::$kind(widget) => widget.core_mut(),)+
                }
            }

            fn height(&self) -> PixelNumber {
                match self {
                    $(Self::$kind(widget) => widget.height(),)+
                }
            }

            fn refresh<S: DrawingSurface>(
                &mut self,
                surface: &mut S,
                full: bool,
                x_offset: PixelNumber,
                y_offset: PixelNumber,
            ) -> Result<(), S::Error> {
                match self {
                    $(Self::$kind(widget) => widget.refresh(surface, full, x_offset, y_offset),)+
                }
            }

            fn button(&self) -> Option<&ButtonBase> {
                match self {
                    $(Self::$kind(widget) => widget.button(),)+
                }
            }

            fn button_parts(&mut self) -> Option<(&mut FieldCore, &mut ButtonBase)> {
                match self {
                    $(Self::$kind(widget) => widget.button_parts(),)+
                }
            }

            fn is_visible(&self) -> bool {
                match self {
                    $(Self::$kind(widget) => widget.is_visible(),)+
                }
            }

            fn press(&mut self, pressed: bool, index: u16) -> bool {
                match self {
                    $(Self::$kind(widget) => widget.press(pressed, index),)+
                }
            }

            fn max_x(&self) -> PixelNumber {
                match self {
                    $(Self::$kind(widget) => widget.max_x(),)+
                }
            }

            fn touch_error(
                &self,
                x: PixelNumber,
                y: PixelNumber,
                tolerance: PixelNumber,
            ) -> Option<(PixelNumber, u16)> {
                match self {
                    $(Self::$kind(widget) => widget.touch_error(x, y, tolerance),)+
                }
            }

            fn iparam(&self, index: u16) -> Option<i32> {
                match self {
                    $(Self::$kind(widget) => widget.iparam(index),)+
                }
            }
        }
    };
}

field_kinds! {
    TextField,
    FloatField,
    IntegerField,
    StaticTextField,
    ProgressBar,
    StaticImageField,
    ColourGradientField,
    CharButton,
    CharButtonRow,
    TextButton,
    IconButton,
    IconButtonWithText,
    IntegerButton,
    FloatButton,
}

impl Field {
    /// Borrow as a specific widget kind.
    #[must_use]
    pub fn get<K: FieldKind>(&self) -> Option<&K> {
        K::from_field(self)
    }

    /// Mutably borrow as a specific widget kind.
    pub fn get_mut<K: FieldKind>(&mut self) -> Option<&mut K> {
        K::from_field_mut(self)
    }
}
