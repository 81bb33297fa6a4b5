//! Windows, the popup slot and touch resolution.
//!
//! The screen is owned by one [`MainWindow`] whose field list is the current
//! page. At most one [`PopupWindow`] can be attached over it at a time.
//! Field positions inside a popup are relative to the popup's top left.

use heapless::Vec;
use lcd_surface::{Colour, DrawingSurface, Gradient, PixelNumber};

use crate::arena::FieldArena;
use crate::button::ButtonBase;
use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::field::{Field, FieldId, FieldKind, Widget};
use crate::press::ButtonPress;
use crate::{debug, trace, warn};

/// Pass as a popup coordinate to centre the popup on that axis.
pub const AUTO_PLACE: PixelNumber = 0xFFFF;

/// Index of a popup window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PopupId(u8);

impl PopupId {
    /// Position in the popup store.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Which window a field list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowId {
    /// The full-screen window.
    Main,
    /// A popup window.
    Popup(PopupId),
}

/// The full-screen window.
#[derive(Debug, Clone)]
pub struct MainWindow {
    root: Option<FieldId>,
    popup: Option<PopupId>,
    background: Colour,
}

impl MainWindow {
    /// Head of the current page's field list.
    #[must_use]
    pub fn root(&self) -> Option<FieldId> {
        self.root
    }

    /// The attached popup, if any.
    #[must_use]
    pub fn popup(&self) -> Option<PopupId> {
        self.popup
    }

    /// Screen background colour.
    #[must_use]
    pub fn background(&self) -> Colour {
        self.background
    }
}

/// A rectangular window drawn over the main window.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupWindow {
    root: Option<FieldId>,
    x: PixelNumber,
    y: PixelNumber,
    width: PixelNumber,
    height: PixelNumber,
    background: Colour,
    border: Colour,
    rounded: bool,
}

impl PopupWindow {
    /// A popup of the given size. Its position is set when it is attached.
    #[must_use]
    pub const fn new(
        width: PixelNumber,
        height: PixelNumber,
        background: Colour,
        border: Colour,
        rounded: bool,
    ) -> Self {
        Self {
            root: None,
            x: 0,
            y: 0,
            width,
            height,
            background,
            border,
            rounded,
        }
    }

    /// Left column.
    #[must_use]
    pub fn x(&self) -> PixelNumber {
        self.x
    }

    /// Top row.
    #[must_use]
    pub fn y(&self) -> PixelNumber {
        self.y
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> PixelNumber {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> PixelNumber {
        self.height
    }

    /// Background colour.
    #[must_use]
    pub fn background(&self) -> Colour {
        self.background
    }

    /// Head of the popup's field list.
    #[must_use]
    pub fn root(&self) -> Option<FieldId> {
        self.root
    }

    fn right(&self) -> PixelNumber {
        self.x.saturating_add(self.width).saturating_sub(1)
    }

    fn bottom(&self) -> PixelNumber {
        self.y.saturating_add(self.height).saturating_sub(1)
    }

    /// Whether the inclusive box touches the popup.
    fn overlaps(
        &self,
        min_x: PixelNumber,
        min_y: PixelNumber,
        max_x: PixelNumber,
        max_y: PixelNumber,
    ) -> bool {
        max_y >= self.y && min_y <= self.bottom() && max_x >= self.x && min_x <= self.right()
    }

    fn draw_frame<S: DrawingSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let (x1, y1, x2, y2) = (self.x, self.y, self.right(), self.bottom());
        surface.set_color(self.background);
        if self.rounded {
            surface.fill_round_rect(
                x1.saturating_add(1),
                y1.saturating_add(2),
                x2.saturating_sub(1),
                y2.saturating_sub(2),
                Gradient::NONE,
            )?;
        } else {
            surface.fill_rect(x1, y1, x2, y2, Gradient::NONE)?;
        }
        surface.set_color(self.border);
        let inner = (
            x1.saturating_add(1),
            y1.saturating_add(1),
            x2.saturating_sub(1),
            y2.saturating_sub(1),
        );
        if self.rounded {
            surface.draw_round_rect(x1, y1, x2, y2)?;
            surface.draw_round_rect(inner.0, inner.1, inner.2, inner.3)
        } else {
            surface.draw_rect(x1, y1, x2, y2)?;
            surface.draw_rect(inner.0, inner.1, inner.2, inner.3)
        }
    }
}

/// Owns every field and window and keeps the screen in step with them.
///
/// `FIELDS` bounds the total number of fields across all pages and popups,
/// `POPUPS` the number of popup windows that can be created.
#[derive(Debug, Clone)]
pub struct WindowManager<const FIELDS: usize = 128, const POPUPS: usize = 8> {
    fields: FieldArena<FIELDS>,
    popups: Vec<PopupWindow, POPUPS>,
    main: MainWindow,
    config: DisplayConfig,
}

impl<const FIELDS: usize, const POPUPS: usize> WindowManager<FIELDS, POPUPS> {
    /// An empty manager for the given panel.
    #[must_use]
    pub const fn new(config: DisplayConfig, background: Colour) -> Self {
        Self {
            fields: FieldArena::new(),
            popups: Vec::new(),
            main: MainWindow {
                root: None,
                popup: None,
                background,
            },
            config,
        }
    }

    /// Panel configuration.
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The main window.
    #[must_use]
    pub fn main(&self) -> &MainWindow {
        &self.main
    }

    /// Change the static left margin left alone by full-screen clears.
    pub fn set_left_margin(&mut self, left_margin: PixelNumber) {
        self.config.left_margin = left_margin;
    }

    // -----------------------------------------------------------------------
    // Storage
    // -----------------------------------------------------------------------

    /// Store a popup window for later attachment.
    pub fn create_popup(&mut self, popup: PopupWindow) -> Result<PopupId, DisplayError> {
        let index = u8::try_from(self.popups.len()).map_err(|_| DisplayError::PopupArenaFull)?;
        self.popups.push(popup).map_err(|_| {
            warn!("popup store full");
            DisplayError::PopupArenaFull
        })?;
        Ok(PopupId(index))
    }

    /// Borrow a popup window.
    #[must_use]
    pub fn popup(&self, id: PopupId) -> Option<&PopupWindow> {
        self.popups.get(id.index())
    }

    /// Add a field at the head of a window's list.
    ///
    /// Fields added to [`WindowId::Main`] join the current page. Build each
    /// page by calling [`set_root`](Self::set_root) with its saved head.
    pub fn add_field(
        &mut self,
        window: WindowId,
        field: impl Into<Field>,
    ) -> Result<FieldId, DisplayError> {
        let head = match window {
            WindowId::Main => self.main.root,
            WindowId::Popup(id) => self.popup(id).ok_or(DisplayError::UnknownPopup)?.root,
        };
        let mut field = field.into();
        field.core_mut().next = head;
        let id = self.fields.insert(field).map_err(|e| {
            warn!("field arena full");
            e
        })?;
        match window {
            WindowId::Main => self.main.root = Some(id),
            WindowId::Popup(popup) => {
                if let Some(p) = self.popups.get_mut(popup.index()) {
                    p.root = Some(id);
                }
            }
        }
        trace!("field {} added", id.index());
        Ok(id)
    }

    /// Borrow a field.
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id)
    }

    /// Mutably borrow a field. Changes are drawn on the next refresh.
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(id)
    }

    /// Borrow a field as a concrete widget kind.
    #[must_use]
    pub fn get<K: FieldKind>(&self, id: FieldId) -> Option<&K> {
        self.fields.get(id).and_then(Field::get::<K>)
    }

    /// Mutably borrow a field as a concrete widget kind.
    pub fn get_mut<K: FieldKind>(&mut self, id: FieldId) -> Option<&mut K> {
        self.fields.get_mut(id).and_then(Field::get_mut::<K>)
    }

    /// Button state behind a press, for reading its event and parameter.
    #[must_use]
    pub fn button(&self, press: ButtonPress) -> Option<&ButtonBase> {
        press.button().and_then(|id| self.fields.get(id)).and_then(Widget::button)
    }

    /// Integer argument of a press. For a key row this is the code of the
    /// key pressed.
    #[must_use]
    pub fn iparam(&self, press: ButtonPress) -> Option<i32> {
        press
            .button()
            .and_then(|id| self.fields.get(id))
            .and_then(|field| field.iparam(press.index()))
    }

    // -----------------------------------------------------------------------
    // Pages and popups
    // -----------------------------------------------------------------------

    /// Head of the main window's current list.
    #[must_use]
    pub fn root(&self) -> Option<FieldId> {
        self.main.root
    }

    /// Switch the main window to another list. Nothing is drawn; follow with
    /// a full refresh.
    pub fn set_root(&mut self, root: Option<FieldId>) {
        self.main.root = root;
    }

    /// The attached popup, if any.
    #[must_use]
    pub fn attached_popup(&self) -> Option<PopupId> {
        self.main.popup
    }

    /// Attach a popup at `(x, y)`, replacing any other attached popup.
    ///
    /// An `x` or `y` of [`AUTO_PLACE`] centres the popup on that axis.
    /// Attaching the popup that is already shown only redraws it.
    pub fn set_popup<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        id: PopupId,
        x: PixelNumber,
        y: PixelNumber,
        redraw: bool,
    ) -> Result<(), S::Error> {
        let (screen_width, screen_height) = (self.config.width, self.config.height);
        let Some(popup) = self.popups.get_mut(id.index()) else {
            warn!("set_popup: unknown popup {}", id.index());
            return Ok(());
        };
        popup.x = if x == AUTO_PLACE {
            screen_width.saturating_sub(popup.width) / 2
        } else {
            x
        };
        popup.y = if y == AUTO_PLACE {
            screen_height.saturating_sub(popup.height) / 2
        } else {
            y
        };

        if self.main.popup == Some(id) {
            if redraw {
                self.refresh_popup(surface, id, true)?;
            }
            return Ok(());
        }
        if self.main.popup.is_some() {
            self.clear_popup(surface, redraw, None)?;
        }
        self.main.popup = Some(id);
        debug!("popup {} attached", id.index());
        if redraw {
            self.refresh_popup(surface, id, true)?;
        }
        Ok(())
    }

    /// Detach the popup, if `which` is `None` or names the attached one.
    ///
    /// The vacated rectangle is painted in the main background and, when
    /// `redraw` is set, the main fields it covered are drawn again. A popup
    /// lying partly off screen falls back to a full refresh.
    pub fn clear_popup<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        redraw: bool,
        which: Option<PopupId>,
    ) -> Result<(), S::Error> {
        let Some(current) = self.main.popup else {
            return Ok(());
        };
        if which.is_some_and(|w| w != current) {
            return Ok(());
        }
        let Some(popup) = self.popups.get(current.index()).cloned() else {
            self.main.popup = None;
            return Ok(());
        };
        let (x1, y1, x2, y2) = (popup.x, popup.y, popup.right(), popup.bottom());
        let on_screen = self.config.contains(x1, y1, x2, y2);
        if on_screen {
            surface.set_color(self.main.background);
            surface.fill_rect(x1, y1, x2, y2, Gradient::NONE)?;
        }
        self.main.popup = None;
        debug!("popup {} detached", current.index());

        if !redraw {
            return Ok(());
        }
        if !on_screen {
            return self.refresh(surface, true);
        }
        let background = self.main.background;
        let mut cursor = self.main.root;
        while let Some(id) = cursor {
            cursor = self.fields.next_of(id);
            let Some(field) = self.fields.get_mut(id) else {
                break;
            };
            if !popup.overlaps(field.min_x(), field.min_y(), field.max_x(), field.max_y()) {
                continue;
            }
            if field.is_visible() {
                field.refresh(surface, true, 0, 0)?;
            } else {
                field.erase(surface, background, 0, 0)?;
            }
        }
        Ok(())
    }

    /// Detach every popup and redraw what they covered.
    pub fn clear_all_popups<S: DrawingSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        while self.main.popup.is_some() {
            self.clear_popup(surface, true, None)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Touch
    // -----------------------------------------------------------------------

    /// Resolve a touch. With a popup attached only its buttons are
    /// candidates; otherwise the main window's.
    #[must_use]
    pub fn find_event(&self, x: PixelNumber, y: PixelNumber) -> ButtonPress {
        match self.main.popup.and_then(|id| self.popup(id)) {
            Some(popup) => {
                if x < popup.x || y < popup.y {
                    return ButtonPress::NONE;
                }
                self.hit_test(popup.root, x.saturating_sub(popup.x), y.saturating_sub(popup.y))
            }
            None => self.hit_test(self.main.root, x, y),
        }
    }

    /// Resolve a touch against main-window buttons left uncovered by the
    /// attached popup. Without a popup there is nothing to resolve.
    #[must_use]
    pub fn find_event_outside_popup(&self, x: PixelNumber, y: PixelNumber) -> ButtonPress {
        if self.main.popup.is_none() {
            return ButtonPress::NONE;
        }
        let press = self.hit_test(self.main.root, x, y);
        match press.button() {
            Some(id) if !self.obscured_by_popup(id) => press,
            _ => ButtonPress::NONE,
        }
    }

    /// Whether a main-window field overlaps the attached popup.
    #[must_use]
    pub fn obscured_by_popup(&self, id: FieldId) -> bool {
        let Some(popup) = self.main.popup.and_then(|p| self.popup(p)) else {
            return false;
        };
        self.fields
            .get(id)
            .is_some_and(|f| popup.overlaps(f.min_x(), f.min_y(), f.max_x(), f.max_y()))
    }

    /// Best button on a list for a touch. The first button found keeps a
    /// tie.
    fn hit_test(&self, head: Option<FieldId>, x: PixelNumber, y: PixelNumber) -> ButtonPress {
        let tolerance = self.config.touch_tolerance;
        let mut best_error = tolerance.saturating_mul(2);
        let mut best = ButtonPress::NONE;
        for (id, field) in self.fields.list(head) {
            if !field.accepts_touch() {
                continue;
            }
            let Some((error, index)) = field.touch_error(x, y, tolerance) else {
                continue;
            };
            if error < best_error {
                best_error = error;
                best = ButtonPress::new(id, index);
            }
        }
        best
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Draw one field now if it is on screen and not covered. A hidden
    /// field is erased instead.
    pub fn redraw<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        id: FieldId,
    ) -> Result<(), S::Error> {
        if self.fields.contains(self.main.root, id) {
            if self.obscured_by_popup(id) {
                return Ok(());
            }
            let background = self.main.background;
            return match self.fields.get_mut(id) {
                Some(field) => draw_or_erase(field, surface, background, 0, 0),
                None => Ok(()),
            };
        }
        let Some(popup) = self.main.popup.and_then(|p| self.popups.get(p.index())) else {
            return Ok(());
        };
        if !self.fields.contains(popup.root, id) {
            return Ok(());
        }
        let (x, y, background) = (popup.x, popup.y, popup.background);
        match self.fields.get_mut(id) {
            Some(field) => draw_or_erase(field, surface, background, x, y),
            None => Ok(()),
        }
    }

    /// Show or hide a field and draw the result immediately.
    pub fn show<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        id: FieldId,
        visible: bool,
    ) -> Result<(), S::Error> {
        let Some(field) = self.fields.get_mut(id) else {
            return Ok(());
        };
        if field.is_visible() != visible || field.has_changed() {
            field.show(visible);
            self.redraw(surface, id)?;
        }
        Ok(())
    }

    /// Set a button's pressed state and draw it immediately.
    pub fn press<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        press: ButtonPress,
        pressed: bool,
    ) -> Result<(), S::Error> {
        let Some(id) = press.button() else {
            return Ok(());
        };
        let Some(field) = self.fields.get_mut(id) else {
            return Ok(());
        };
        field.press(pressed, press.index());
        if field.is_visible() {
            self.redraw(surface, id)?;
        }
        Ok(())
    }

    /// Bring the screen up to date.
    ///
    /// A full refresh clears the screen right of the left margin and draws
    /// everything. Otherwise only dirty fields are drawn, and fields hidden
    /// since the last refresh are erased. Main fields under the popup are
    /// left alone.
    pub fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
    ) -> Result<(), S::Error> {
        let background = self.main.background;
        if full {
            surface.fill_screen(background, self.config.left_margin)?;
        }
        let mut cursor = self.main.root;
        while let Some(id) = cursor {
            cursor = self.fields.next_of(id);
            let obscured = self.obscured_by_popup(id);
            let Some(field) = self.fields.get_mut(id) else {
                break;
            };
            refresh_one(field, surface, full, obscured, background, 0, 0)?;
        }
        if let Some(popup) = self.main.popup {
            self.refresh_popup(surface, popup, full)?;
        }
        Ok(())
    }

    /// Paint the whole screen in the main background. The current page is
    /// marked dirty so the next refresh draws it again.
    pub fn clear_all<S: DrawingSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_screen(self.main.background, self.config.left_margin)?;
        let mut cursor = self.main.root;
        while let Some(id) = cursor {
            cursor = self.fields.next_of(id);
            if let Some(field) = self.fields.get_mut(id) {
                field.set_changed();
            }
        }
        Ok(())
    }

    fn refresh_popup<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        id: PopupId,
        full: bool,
    ) -> Result<(), S::Error> {
        let Some(popup) = self.popups.get(id.index()).cloned() else {
            return Ok(());
        };
        if full {
            popup.draw_frame(surface)?;
        }
        let mut cursor = popup.root;
        while let Some(field_id) = cursor {
            cursor = self.fields.next_of(field_id);
            let Some(field) = self.fields.get_mut(field_id) else {
                break;
            };
            refresh_one(field, surface, full, false, popup.background, popup.x, popup.y)?;
        }
        Ok(())
    }
}

fn draw_or_erase<S: DrawingSurface>(
    field: &mut Field,
    surface: &mut S,
    background: Colour,
    x: PixelNumber,
    y: PixelNumber,
) -> Result<(), S::Error> {
    if field.is_visible() {
        field.refresh(surface, true, x, y)
    } else {
        field.erase(surface, background, x, y)
    }
}

/// One field's share of a window refresh. Hidden fields have already been
/// painted over by a full refresh, so they only need erasing when dirty on
/// an incremental one.
#[allow(clippy::too_many_arguments)]
fn refresh_one<S: DrawingSurface>(
    field: &mut Field,
    surface: &mut S,
    full: bool,
    obscured: bool,
    background: Colour,
    x: PixelNumber,
    y: PixelNumber,
) -> Result<(), S::Error> {
    if obscured {
        return Ok(());
    }
    if field.is_visible() {
        field.refresh(surface, full, x, y)
    } else if full {
        field.core_mut().changed = false;
        Ok(())
    } else if field.has_changed() {
        field.erase(surface, background, x, y)
    } else {
        Ok(())
    }
}
