//! Mouse events
//!
//! Mouse reporting is enabled by selecting events with [`mousemask`].
//! A window in keypad mode then returns `Key::Mouse` from `getch` whenever
//! an event is queued, and the event itself is read with [`getmouse`].
//!
//! [`mousemask`]: fn.mousemask.html
//! [`getmouse`]: fn.getmouse.html

use std::ptr;

use crate::status::Status;
use crate::sys::ffi::{self, mmask_t, MEVENT, ERR};
use crate::terminal::Pos;

const fn button_mask(button: u32, bits: u32) -> u32 {
    bits << ((button - 1) * 5)
}

const RELEASED: u32        = 0o01;
const PRESSED: u32         = 0o02;
const CLICKED: u32         = 0o04;
const DOUBLE_CLICKED: u32  = 0o10;
const TRIPLE_CLICKED: u32  = 0o20;

bitflags!{
    /// Set of mouse events and modifier keys
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct MouseMask: u32 {
        /// Button 1 released
        const BUTTON1_RELEASED       = button_mask(1, RELEASED);
        /// Button 1 pressed
        const BUTTON1_PRESSED        = button_mask(1, PRESSED);
        /// Button 1 clicked
        const BUTTON1_CLICKED        = button_mask(1, CLICKED);
        /// Button 1 double clicked
        const BUTTON1_DOUBLE_CLICKED = button_mask(1, DOUBLE_CLICKED);
        /// Button 1 triple clicked
        const BUTTON1_TRIPLE_CLICKED = button_mask(1, TRIPLE_CLICKED);

        /// Button 2 released
        const BUTTON2_RELEASED       = button_mask(2, RELEASED);
        /// Button 2 pressed
        const BUTTON2_PRESSED        = button_mask(2, PRESSED);
        /// Button 2 clicked
        const BUTTON2_CLICKED        = button_mask(2, CLICKED);
        /// Button 2 double clicked
        const BUTTON2_DOUBLE_CLICKED = button_mask(2, DOUBLE_CLICKED);
        /// Button 2 triple clicked
        const BUTTON2_TRIPLE_CLICKED = button_mask(2, TRIPLE_CLICKED);

        /// Button 3 released
        const BUTTON3_RELEASED       = button_mask(3, RELEASED);
        /// Button 3 pressed
        const BUTTON3_PRESSED        = button_mask(3, PRESSED);
        /// Button 3 clicked
        const BUTTON3_CLICKED        = button_mask(3, CLICKED);
        /// Button 3 double clicked
        const BUTTON3_DOUBLE_CLICKED = button_mask(3, DOUBLE_CLICKED);
        /// Button 3 triple clicked
        const BUTTON3_TRIPLE_CLICKED = button_mask(3, TRIPLE_CLICKED);

        /// Button 4 released
        const BUTTON4_RELEASED       = button_mask(4, RELEASED);
        /// Button 4 pressed; reported for scrolling up on most terminals
        const BUTTON4_PRESSED        = button_mask(4, PRESSED);
        /// Button 4 clicked
        const BUTTON4_CLICKED        = button_mask(4, CLICKED);
        /// Button 4 double clicked
        const BUTTON4_DOUBLE_CLICKED = button_mask(4, DOUBLE_CLICKED);
        /// Button 4 triple clicked
        const BUTTON4_TRIPLE_CLICKED = button_mask(4, TRIPLE_CLICKED);

        /// Button 5 released
        const BUTTON5_RELEASED       = button_mask(5, RELEASED);
        /// Button 5 pressed; reported for scrolling down on most terminals
        const BUTTON5_PRESSED        = button_mask(5, PRESSED);
        /// Button 5 clicked
        const BUTTON5_CLICKED        = button_mask(5, CLICKED);
        /// Button 5 double clicked
        const BUTTON5_DOUBLE_CLICKED = button_mask(5, DOUBLE_CLICKED);
        /// Button 5 triple clicked
        const BUTTON5_TRIPLE_CLICKED = button_mask(5, TRIPLE_CLICKED);

        /// Ctrl held during the event
        const BUTTON_CTRL            = button_mask(6, 0o01);
        /// Shift held during the event
        const BUTTON_SHIFT           = button_mask(6, 0o02);
        /// Alt held during the event
        const BUTTON_ALT             = button_mask(6, 0o04);
        /// Mouse movement
        const REPORT_MOUSE_POSITION  = button_mask(6, 0o10);

        /// Every event except position reports
        const ALL_MOUSE_EVENTS       = Self::REPORT_MOUSE_POSITION.bits() - 1;
    }
}

/// Represents a mouse event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct MouseEvent {
    /// Identifies the device when several are present
    pub id: i16,
    /// Column on the screen
    pub x: i32,
    /// Line on the screen
    pub y: i32,
    /// Unused
    pub z: i32,
    /// Event that occurred
    pub bstate: MouseMask,
}

impl MouseEvent {
    /// Returns the screen position of the event.
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos{y: self.y, x: self.x}
    }

    fn to_native(&self) -> MEVENT {
        MEVENT{
            id: self.id,
            x: self.x,
            y: self.y,
            z: self.z,
            bstate: self.bstate.bits(),
        }
    }

    fn from_native(ev: &MEVENT) -> MouseEvent {
        MouseEvent{
            id: ev.id,
            x: ev.x,
            y: ev.y,
            z: ev.z,
            bstate: MouseMask::from_bits_retain(ev.bstate),
        }
    }
}

/// Selects the mouse events to report, returning the events that
/// the terminal can actually report.
///
/// An empty mask disables mouse reporting.
pub fn mousemask(mask: MouseMask) -> MouseMask {
    MouseMask::from_bits_retain(unsafe { ffi::mousemask(mask.bits(), ptr::null_mut()) })
}

/// Selects the mouse events to report, returning the events that will be
/// reported and the previous selection.
pub fn swap_mousemask(mask: MouseMask) -> (MouseMask, MouseMask) {
    let mut old: mmask_t = 0;
    let new = unsafe { ffi::mousemask(mask.bits(), &mut old) };

    (MouseMask::from_bits_retain(new), MouseMask::from_bits_retain(old))
}

/// Returns whether a mouse driver was found.
pub fn has_mouse() -> bool {
    unsafe { ffi::has_mouse() }
}

/// Sets the maximum interval in milliseconds between press and release
/// for them to be reported as a click, returning the previous interval.
///
/// A negative value queries the interval without changing it.
pub fn mouseinterval(ms: i32) -> i32 {
    unsafe { ffi::mouseinterval(ms) }
}

/// Removes the next mouse event from the queue.
///
/// Returns `None` if no event is queued.
pub fn getmouse() -> Option<MouseEvent> {
    let mut ev = MEVENT::default();

    if unsafe { ffi::getmouse(&mut ev) } == ERR {
        None
    } else {
        Some(MouseEvent::from_native(&ev))
    }
}

/// Pushes an event onto the mouse event queue and `Key::Mouse` onto the
/// input queue.
pub fn ungetmouse(event: &MouseEvent) -> Status {
    let mut ev = event.to_native();
    Status::from(unsafe { ffi::ungetmouse(&mut ev) })
}

#[cfg(test)]
mod test {
    use super::{MouseEvent, MouseMask};
    use crate::terminal::Pos;

    #[test]
    fn test_mask_values() {
        assert_eq!(MouseMask::BUTTON1_RELEASED.bits(), 0x1);
        assert_eq!(MouseMask::BUTTON1_PRESSED.bits(), 0x2);
        assert_eq!(MouseMask::BUTTON1_TRIPLE_CLICKED.bits(), 0x10);
        assert_eq!(MouseMask::BUTTON2_RELEASED.bits(), 0x20);
        assert_eq!(MouseMask::BUTTON3_RELEASED.bits(), 0x400);
        assert_eq!(MouseMask::BUTTON4_PRESSED.bits(), 0x10000);
        assert_eq!(MouseMask::BUTTON5_RELEASED.bits(), 0x100000);
        assert_eq!(MouseMask::BUTTON_CTRL.bits(), 0x200_0000);
        assert_eq!(MouseMask::BUTTON_SHIFT.bits(), 0x400_0000);
        assert_eq!(MouseMask::BUTTON_ALT.bits(), 0x800_0000);
        assert_eq!(MouseMask::REPORT_MOUSE_POSITION.bits(), 0x1000_0000);
        assert_eq!(MouseMask::ALL_MOUSE_EVENTS.bits(), 0xfff_ffff);

        assert!(MouseMask::ALL_MOUSE_EVENTS.contains(
            MouseMask::BUTTON5_TRIPLE_CLICKED | MouseMask::BUTTON_ALT));
        assert!(!MouseMask::ALL_MOUSE_EVENTS.contains(
            MouseMask::REPORT_MOUSE_POSITION));
    }

    #[test]
    fn test_event_native() {
        let ev = MouseEvent{
            id: 1,
            x: 10,
            y: 20,
            z: 0,
            bstate: MouseMask::BUTTON1_CLICKED | MouseMask::BUTTON_SHIFT,
        };

        assert_eq!(MouseEvent::from_native(&ev.to_native()), ev);
        assert_eq!(ev.pos(), Pos{y: 20, x: 10});
    }
}
