#![forbid(unsafe_code)]

//! Pointer events consumed by the gesture tracker.
//!
//! # Design Notes
//!
//! - The host maps its native pointer/drag notifications onto three
//!   [`PointerPhase`]s and delivers one [`PointerEvent`] per notification.
//! - Raw button codes are kept as delivered; what counts as "primary" is
//!   decided by a [`ButtonConvention`] because delivery layers disagree on
//!   the meaning of code `0`.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

/// Lifecycle phase of a pointer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerPhase {
    /// Button pressed on the target surface.
    Start,
    /// Pointer moved.
    Move,
    /// Button released.
    End,
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A raw pointer event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    /// Absolute page X coordinate.
    pub page_x: f64,
    /// Absolute page Y coordinate.
    pub page_y: f64,
    /// Host button code, interpreted through a [`ButtonConvention`].
    pub button_code: i32,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers.
    #[must_use]
    pub const fn new(page_x: f64, page_y: f64, button_code: i32) -> Self {
        Self {
            page_x,
            page_y,
            button_code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if Ctrl was held.
    #[must_use]
    pub const fn ctrl_key(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Page position of the event.
    #[must_use]
    pub const fn page_point(&self) -> crate::geometry::Point {
        crate::geometry::Point::new(self.page_x, self.page_y)
    }
}

/// How a host encodes the pressed button in [`PointerEvent::button_code`].
///
/// The same predicate is applied at press-start and press-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ButtonConvention {
    /// jQuery-style `event.which`: 0 none, 1 left, 2 middle, 3 right.
    ///
    /// Primary is anything that is not none, middle or right, so codes
    /// outside `0..=3` (extra buttons on some drivers) still qualify.
    #[default]
    Which,
    /// DOM `MouseEvent.button`: 0 primary, 1 auxiliary, 2 secondary, 3/4 back/forward.
    DomButton,
    /// DOM `MouseEvent.buttons` bitmask: bit 0 is the primary button.
    ///
    /// A release reports the buttons still held, so hosts must deliver the
    /// press mask on the end event.
    DomButtons,
}

impl ButtonConvention {
    const WHICH_NONE: i32 = 0;
    const WHICH_MIDDLE: i32 = 2;
    const WHICH_RIGHT: i32 = 3;

    /// Whether `code` denotes the primary button under this convention.
    #[must_use]
    pub const fn is_primary(self, code: i32) -> bool {
        match self {
            Self::Which => !matches!(
                code,
                Self::WHICH_NONE | Self::WHICH_MIDDLE | Self::WHICH_RIGHT
            ),
            Self::DomButton => code == 0,
            Self::DomButtons => code & 1 == 1,
        }
    }
}

/// What the host should do with the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EventDisposition {
    /// Suppress the native default action (text selection, native drag).
    pub prevent_default: bool,
    /// Stop the event from reaching other listeners.
    pub stop_propagation: bool,
}

impl EventDisposition {
    /// Prevent the default action only.
    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };

    /// Prevent the default action and stop propagation.
    pub const CONSUME: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}
