mod common;

use tcurses::mouse::{getmouse, has_mouse, mouseinterval, mousemask, swap_mousemask, ungetmouse};
use tcurses::{Key, MouseEvent, MouseMask, Pos, SessionConfig, Size, Status, Window};

use common::{screen, screen_with};

#[test_log::test]
fn test_mouse_events() {
    let _scr = screen();

    let (mask, old) = swap_mousemask(MouseMask::ALL_MOUSE_EVENTS);
    assert_eq!(mask, MouseMask::ALL_MOUSE_EVENTS);
    assert_eq!(old, MouseMask::empty());
    assert!(has_mouse());

    mouseinterval(150);
    assert_eq!(mouseinterval(-1), 150);
    assert_eq!(mouseinterval(0), 150);
    assert_eq!(mouseinterval(150), 0);

    let event = MouseEvent{
        id: 0,
        x: 10,
        y: 20,
        z: 0,
        bstate: MouseMask::BUTTON1_CLICKED,
    };

    assert_eq!(ungetmouse(&event), Status::Ok);
    assert_eq!(getmouse(), Some(event));
    assert_eq!(getmouse(), None);
}

#[test_log::test]
fn test_mouse_disabled() {
    let _scr = screen();

    assert_eq!(mousemask(MouseMask::empty()), MouseMask::empty());
    assert_eq!(getmouse(), None);
}

#[test_log::test]
fn test_mouse_window() {
    let _scr = screen_with(SessionConfig{
        mouse: MouseMask::ALL_MOUSE_EVENTS,
        .. SessionConfig::default()
    });

    assert!(has_mouse());

    let win = Window::new(Size::default(), Pos::new(1, 1)).unwrap();

    let event = MouseEvent{
        x: 2,
        y: 2,
        bstate: MouseMask::BUTTON1_PRESSED,
        .. MouseEvent::default()
    };

    assert_eq!(ungetmouse(&event), Status::Ok);
    assert_eq!(win.getch(), Some(Key::Mouse));

    let received = getmouse().unwrap();
    let pos = received.pos();

    assert_eq!(pos, Pos::new(2, 2));
    assert!(win.enclose(pos));
    assert_eq!(win.to_window(pos), Some(Pos::new(1, 1)));
    assert_eq!(win.to_screen(Pos::new(1, 1)), Some(pos));

    assert!(!win.enclose(Pos::new(0, 0)));
    assert_eq!(win.to_window(Pos::new(0, 0)), None);
}
