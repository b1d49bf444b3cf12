#[macro_use] extern crate tcurses;

mod common;

use std::ptr;

use tcurses::terminal::{acs, doupdate, Acs};
use tcurses::{
    Attr, BorderCorners, BorderSides, Cell, Pos, ScrollRegion, Size, Status, Window,
};

use common::{line, screen};

#[test_log::test]
fn test_new_window() {
    let _scr = screen();

    let win = Window::new(Size::new(5, 10), Pos::new(2, 3)).unwrap();

    assert!(!win.is_empty());
    assert!(!win.is_subwin());
    assert!(win.parent().is_none());
    assert_eq!(win.getmaxyx(), Size::new(5, 10));
    assert_eq!(win.getbegyx(), Pos::new(2, 3));
    assert_eq!(win.getparyx(), Pos::new(-1, -1));
    assert_eq!(win.getyx(), Pos::new(0, 0));

    let full = Window::new(Size::default(), Pos::default()).unwrap();
    assert_eq!(full.getmaxyx(), Size::screen());

    assert!(Window::new(Size::new(5, 5), Pos::new(-1, 0)).is_err());
}

#[test_log::test]
fn test_take() {
    let _scr = screen();

    let mut win = Window::new(Size::new(3, 3), Pos::new(0, 0)).unwrap();
    let taken = win.take();

    assert!(win.is_empty());
    assert!(!taken.is_empty());

    let empty = win.try_clone().unwrap();
    assert!(empty.is_empty());
}

#[test_log::test]
#[should_panic(expected = "operation on an empty window")]
fn test_empty_window_op() {
    let _scr = screen();

    let win = Window::default();
    win.addstr("x");
}

#[test_log::test]
fn test_clone() {
    let _scr = screen();

    let win = Window::new(Size::new(3, 5), Pos::new(0, 0)).unwrap();
    win.mvaddstr(Pos::new(0, 0), "abc");

    let copy = win.clone();
    win.mvaddstr(Pos::new(0, 0), "xyz");

    assert_eq!(copy.mvinnstr(Pos::new(0, 0), 3), "abc");
    assert_eq!(win.mvinnstr(Pos::new(0, 0), 3), "xyz");
}

#[test_log::test]
fn test_derwin() {
    let _scr = screen();

    let parent = Window::new(Size::new(10, 10), Pos::new(1, 1)).unwrap();
    let child = parent.derwin(Size::new(5, 5), Pos::new(1, 1)).unwrap();

    assert!(ptr::eq(child.parent().unwrap(), &parent));
    assert!(child.is_subwin());
    assert_eq!(child.getparyx(), Pos::new(1, 1));
    assert_eq!(child.getbegyx(), Pos::new(2, 2));

    assert_eq!(child.mvderwin(Pos::new(2, 2)), Status::Ok);
    assert_eq!(child.getparyx(), Pos::new(2, 2));
    assert_eq!(child.getbegyx(), Pos::new(2, 2));
    assert!(ptr::eq(child.parent().unwrap(), &parent));

    child.mvaddch(Pos::new(0, 0), Cell::from(b'Z'));
    assert_eq!(parent.mvinch(Pos::new(2, 2)).ch(), 'Z');

    let copy = child.try_clone().unwrap();
    assert!(ptr::eq(copy.parent().unwrap(), &parent));

    assert!(parent.derwin(Size::new(20, 20), Pos::new(0, 0)).is_err());
}

#[test_log::test]
fn test_subwin() {
    let _scr = screen();

    let parent = Window::new(Size::new(10, 10), Pos::new(1, 1)).unwrap();
    let child = parent.subwin(Size::new(5, 5), Pos::new(2, 2)).unwrap();

    assert!(ptr::eq(child.parent().unwrap(), &parent));
    assert_eq!(child.getparyx(), Pos::new(1, 1));
    assert_eq!(child.getbegyx(), Pos::new(2, 2));

    let grandchild = child.derwin(Size::new(2, 2), Pos::new(1, 1)).unwrap();
    let up = grandchild.parent().unwrap();

    assert!(ptr::eq(up, &child));
    assert!(ptr::eq(up.parent().unwrap(), &parent));
}

#[test_log::test]
fn test_insert_delete_lines() {
    let _scr = screen();

    let win = Window::new(Size::default(), Pos::default()).unwrap();

    win.mvaddstr(Pos::new(0, 0), "ABC");
    win.mvaddstr(Pos::new(1, 0), "DEF");

    win.mv(Pos::new(1, 0));
    assert_eq!(win.insertln(), Status::Ok);
    assert_eq!(win.mvinnstr(Pos::new(0, 0), 3), "ABC");
    assert_eq!(win.mvinnstr(Pos::new(1, 0), 3), "   ");
    assert_eq!(win.mvinnstr(Pos::new(2, 0), 3), "DEF");

    win.mv(Pos::new(1, 0));
    assert_eq!(win.deleteln(), Status::Ok);
    assert_eq!(win.mvinnstr(Pos::new(0, 0), 3), "ABC");
    assert_eq!(win.mvinnstr(Pos::new(1, 0), 3), "DEF");
    assert_eq!(win.mvinnstr(Pos::new(2, 0), 3), "   ");

    win.mv(Pos::new(1, 0));
    win.insdelln(1);
    assert_eq!(win.mvinnstr(Pos::new(1, 0), 3), "   ");
    assert_eq!(win.mvinnstr(Pos::new(2, 0), 3), "DEF");

    win.mv(Pos::new(1, 0));
    win.insdelln(-1);
    assert_eq!(win.mvinnstr(Pos::new(1, 0), 3), "DEF");
    assert_eq!(win.mvinnstr(Pos::new(2, 0), 3), "   ");
}

#[test_log::test]
fn test_insert_after_text() {
    let _scr = screen();

    let win = Window::new(Size::new(10, 10), Pos::new(0, 0)).unwrap();

    win.mvaddstr(Pos::new(0, 0), "AB");
    win.mv(Pos::new(0, 0));
    win.insertln();

    assert_eq!(line(&win, 0), "          ");
    assert_eq!(line(&win, 1), "AB        ");
}

#[test_log::test]
fn test_scroll() {
    let _scr = screen();

    let win = Window::new(Size::new(3, 5), Pos::new(0, 0)).unwrap();
    assert!(!win.is_scrollok());
    assert_eq!(win.scrollok(true), Status::Ok);

    win.mvaddstr(Pos::new(0, 0), "a");
    win.mvaddstr(Pos::new(1, 0), "b");
    win.mvaddstr(Pos::new(2, 0), "c");

    assert_eq!(win.scrl(1), Status::Ok);
    assert_eq!(win.mvinnstr(Pos::new(0, 0), 1), "b");
    assert_eq!(win.mvinnstr(Pos::new(1, 0), 1), "c");

    assert_eq!(win.getscrreg(), ScrollRegion{top: 0, bottom: 2});
    assert_eq!(win.setscrreg(ScrollRegion{top: 1, bottom: 2}), Status::Ok);
    assert_eq!(win.getscrreg(), ScrollRegion{top: 1, bottom: 2});
    assert_eq!(win.setscrreg(ScrollRegion{top: 2, bottom: 1}), Status::Err);
}

#[test_log::test]
fn test_overlay() {
    let _scr = screen();

    let win = Window::new(Size::default(), Pos::default()).unwrap();
    let src = Window::new(Size::default(), Pos::new(1, 1)).unwrap();

    win.mvaddstr(Pos::new(1, 0), "XYZ");
    src.mvaddstr(Pos::new(0, 0), "A ");

    assert_eq!(src.overlay(&win), Status::Ok);
    assert_eq!(win.mvinnstr(Pos::new(1, 0), 3), "XAZ");

    assert_eq!(src.overwrite(&win), Status::Ok);
    assert_eq!(win.mvinnstr(Pos::new(1, 0), 3), "XA ");
}

#[test_log::test]
fn test_overlay_region() {
    let _scr = screen();

    let dst = Window::new(Size::new(1, 10), Pos::new(5, 0)).unwrap();
    let src = Window::new(Size::new(1, 10), Pos::new(6, 0)).unwrap();

    src.mvaddstr(Pos::new(0, 0), "A B");

    // Blank source cells leave the destination as it was
    dst.mvaddstr(Pos::new(0, 0), "0123456789");
    assert_eq!(src.overlay_region(&dst,
        Pos::new(0, 0), Pos::new(0, 2), Pos::new(0, 4)), Status::Ok);
    assert_eq!(line(&dst, 0), "01A3B56789");

    dst.mvaddstr(Pos::new(0, 0), "0123456789");
    assert_eq!(src.overwrite_region(&dst,
        Pos::new(0, 0), Pos::new(0, 2), Pos::new(0, 4)), Status::Ok);
    assert_eq!(line(&dst, 0), "01A B56789");
}

#[test_log::test]
fn test_erase() {
    let _scr = screen();

    let win = Window::new(Size::new(3, 5), Pos::new(0, 0)).unwrap();

    win.mvaddstr(Pos::new(1, 1), "abc");
    assert_eq!(win.erase(), Status::Ok);
    assert_eq!(win.mvinch(Pos::new(1, 1)), Cell::from(b' '));
    assert_eq!(line(&win, 1), "     ");

    win.mvaddstr(Pos::new(0, 0), "hello");
    win.mv(Pos::new(0, 2));
    win.clrtoeol();
    assert_eq!(line(&win, 0), "he   ");
}

#[test_log::test]
fn test_chstr() {
    let _scr = screen();

    let win = Window::new(Size::default(), Pos::default()).unwrap();

    let cells = [
        b'A' | Attr::BOLD,
        b'B' | Attr::REVERSE,
        Cell::from(b'C'),
        b'D' | Attr::color_pair(3),
    ];

    assert_eq!(win.mvaddchstr(Pos::new(0, 0), &cells), Status::Ok);
    assert_eq!(win.getyx(), Pos::new(0, 0));

    let read = win.mvinchstr(Pos::new(0, 0));
    assert_eq!(read.len(), win.getmaxyx().columns as usize);
    assert_eq!(&read[..4], &cells[..]);

    assert_eq!(&win.inchnstr(4)[..], &cells[..]);
    assert_eq!(win.mvinnstr(Pos::new(0, 0), 4), "ABCD");
}

#[test_log::test]
fn test_inch() {
    let _scr = screen();

    let a = Cell::from(b'A');
    let b = b'B' | Attr::REVERSE;
    let c = b'C' | Attr::color_pair(2);

    let win = Window::new(Size::default(), Pos::default()).unwrap();

    win.mvaddch(Pos::new(0, 0), a);
    assert_eq!(win.mvinch(Pos::new(0, 0)), a);
    win.mvaddch(Pos::new(0, 1), b);
    assert_eq!(win.mvinch(Pos::new(0, 1)), b);
    win.mvaddch(Pos::new(0, 2), c);
    assert_eq!(win.mvinch(Pos::new(0, 2)), c);

    win.mvaddch(Pos::new(0, 0), a);
    assert_eq!(win.inch(), b);
    win.addch(b);
    assert_eq!(win.inch(), c);
    assert_eq!(win.inch().pair_number(), 2);

    // Positions outside the window read as a null cell
    let small = Window::new(Size::new(3, 3), Pos::new(0, 0)).unwrap();
    assert_eq!(small.mvinch(Pos::new(10, 10)), Cell::default());
    assert_eq!(small.mvinch(Pos::new(2, 2)), Cell::from(b' '));
}

#[test_log::test]
fn test_insch() {
    let _scr = screen();

    let a = b'A' | Attr::REVERSE;
    let b = b'B' | Attr::DIM;
    let c = b'C' | Attr::BOLD;
    let d = b'D' | Attr::BLINK;

    let win = Window::new(Size::default(), Pos::default()).unwrap();

    win.mvaddch(Pos::new(0, 0), a);
    win.mvaddch(Pos::new(0, 1), b);

    assert_eq!(win.mvinsch(Pos::new(0, 0), c), Status::Ok);
    assert_eq!(win.mvinch(Pos::new(0, 0)), c);
    assert_eq!(win.mvinch(Pos::new(0, 1)), a);
    assert_eq!(win.mvinch(Pos::new(0, 2)), b);

    win.mv(Pos::new(0, 1));
    assert_eq!(win.insch(d), Status::Ok);
    assert_eq!(win.mvinch(Pos::new(0, 0)), c);
    assert_eq!(win.mvinch(Pos::new(0, 1)), d);
    assert_eq!(win.mvinch(Pos::new(0, 2)), a);
    assert_eq!(win.mvinch(Pos::new(0, 3)), b);

    assert_eq!(win.mvdelch(Pos::new(0, 0)), Status::Ok);
    assert_eq!(win.mvinnstr(Pos::new(0, 0), 3), "DAB");

    win.mv(Pos::new(0, 0));
    win.insstr(">> ");
    assert_eq!(win.mvinnstr(Pos::new(0, 0), 6), ">> DAB");
}

#[test_log::test]
fn test_attributes() {
    let _scr = screen();

    let win = Window::new(Size::default(), Pos::default()).unwrap();

    assert_eq!(win.attrget(), Attr::NORMAL);
    assert_eq!(win.attron(Attr::BLINK), Status::Ok);
    assert_eq!(win.attrget(), Attr::BLINK);
    assert_eq!(win.attron(Attr::BOLD | Attr::REVERSE), Status::Ok);
    assert_eq!(win.attrget(), Attr::BLINK | Attr::BOLD | Attr::REVERSE);
    assert_eq!(win.attroff(Attr::BOLD | Attr::DIM), Status::Ok);
    assert_eq!(win.attrget(), Attr::BLINK | Attr::REVERSE);
    assert_eq!(win.attron(Attr::color_pair(3)), Status::Ok);
    assert_eq!(win.attrget(), Attr::BLINK | Attr::REVERSE | Attr::color_pair(3));
    assert_eq!(win.attroff(Attr::color_pair(1)), Status::Ok);
    assert_eq!(win.attrget(), Attr::BLINK | Attr::REVERSE);

    assert_eq!(win.attrset(Attr::REVERSE | Attr::color_pair(5)), Status::Ok);
    assert_eq!(win.attrget(), Attr::REVERSE | Attr::color_pair(5));
}

#[test_log::test]
fn test_chgat() {
    let _scr = screen();

    let win = Window::new(Size::new(2, 10), Pos::new(0, 0)).unwrap();

    win.mvaddstr(Pos::new(0, 0), "abc");
    assert_eq!(win.mvchgat(Pos::new(0, 0), None, Attr::BOLD), Status::Ok);

    assert_eq!(win.getyx(), Pos::new(0, 0));
    assert_eq!(win.mvinnstr(Pos::new(0, 0), 3), "abc");
    assert_eq!(win.mvinch(Pos::new(0, 0)), b'a' | Attr::BOLD);
    assert_eq!(win.mvinch(Pos::new(0, 2)), b'c' | Attr::BOLD);

    win.mvaddstr(Pos::new(1, 0), "xyz");
    win.mv(Pos::new(1, 0));
    assert_eq!(win.chgat(Some(1), Attr::UNDERLINE), Status::Ok);
    assert_eq!(win.mvinch(Pos::new(1, 0)).attr(), Attr::UNDERLINE);
    assert_eq!(win.mvinch(Pos::new(1, 1)).attr(), Attr::NORMAL);
}

#[test_log::test]
fn test_background() {
    let _scr = screen();

    let win = Window::new(Size::new(3, 3), Pos::new(0, 0)).unwrap();
    let bg = b'.' | Attr::BOLD;

    assert_eq!(win.bkgd(bg), Status::Ok);
    assert_eq!(win.getbkgd(), bg);
    assert_eq!(win.mvinch(Pos::new(2, 2)), bg);
}

#[test_log::test]
fn test_border() {
    let _scr = screen();

    let win = Window::new(Size::new(3, 4), Pos::new(0, 0)).unwrap();

    assert_eq!(win.draw_box(Cell::default(), Cell::default()), Status::Ok);

    assert_eq!(win.mvinch(Pos::new(0, 0)), acs(Acs::UlCorner));
    assert_eq!(win.mvinch(Pos::new(0, 1)), acs(Acs::HLine));
    assert_eq!(win.mvinch(Pos::new(1, 0)), acs(Acs::VLine));
    assert_eq!(win.mvinch(Pos::new(2, 3)), acs(Acs::LrCorner));
    assert!(win.mvinch(Pos::new(0, 0)).attr().contains(Attr::ALTCHARSET));

    let sides = BorderSides{
        left: Cell::from(b'|'),
        right: Cell::from(b'!'),
        top: Cell::from(b'-'),
        bottom: Cell::from(b'_'),
    };
    let corners = BorderCorners{
        top_left: Cell::from(b'a'),
        top_right: Cell::from(b'b'),
        bottom_left: Cell::from(b'c'),
        bottom_right: Cell::from(b'd'),
    };

    assert_eq!(win.border(sides, corners), Status::Ok);
    assert_eq!(line(&win, 0), "a--b");
    assert_eq!(line(&win, 1), "|  !");
    assert_eq!(line(&win, 2), "c__d");
}

#[test_log::test]
fn test_lines() {
    let _scr = screen();

    let win = Window::new(Size::new(5, 8), Pos::new(0, 0)).unwrap();

    assert_eq!(win.mvhline(Pos::new(0, 0), Cell::from(b'-'), 5), Status::Ok);
    assert_eq!(line(&win, 0), "-----   ");

    assert_eq!(win.mvvline(Pos::new(1, 0), Cell::from(b'|'), 2), Status::Ok);
    assert_eq!(win.mvinch(Pos::new(1, 0)).ch(), '|');
    assert_eq!(win.mvinch(Pos::new(2, 0)).ch(), '|');
    assert_eq!(win.mvinch(Pos::new(3, 0)).ch(), ' ');
}

#[test_log::test]
fn test_write() {
    let _scr = screen();

    let win = Window::new(Size::new(5, 20), Pos::new(0, 0)).unwrap();

    win.mv(Pos::new(0, 0));
    assert_eq!(write!(win, "one\ntwo"), Status::Ok);
    assert_eq!(win.getyx(), Pos::new(1, 3));
    assert_eq!(win.mvinnstr(Pos::new(1, 0), 3), "two");

    win.mv(Pos::new(2, 0));
    let res = win_writeln!(win, "x = " [bold] (: 42) [reset] " " (? "q"));
    assert_eq!(res, Status::Ok);
    assert_eq!(win.getyx(), Pos::new(3, 0));
    assert_eq!(win.attrget(), Attr::NORMAL);

    assert_eq!(win.mvinnstr(Pos::new(2, 0), 10), "x = 42 \"q\"");
    assert_eq!(win.mvinch(Pos::new(2, 4)), b'4' | Attr::BOLD);
    assert_eq!(win.mvinch(Pos::new(2, 7)).attr(), Attr::NORMAL);
}

#[test_log::test]
fn test_move() {
    let _scr = screen();

    let win = Window::new(Size::new(3, 4), Pos::new(0, 0)).unwrap();

    assert_eq!(win.mv(Pos::new(10, 10)), Status::Err);
    assert_eq!(win.mvwin(Pos::new(2, 2)), Status::Ok);
    assert_eq!(win.getbegyx(), Pos::new(2, 2));
}

#[test_log::test]
fn test_touch() {
    let _scr = screen();

    let win = Window::new(Size::new(3, 4), Pos::new(0, 0)).unwrap();

    assert!(win.is_wintouched());
    assert_eq!(win.refresh(), Status::Ok);
    assert!(!win.is_wintouched());

    win.touchwin();
    assert!(win.is_wintouched());
    assert!(win.is_linetouched(0));

    win.untouchwin();
    assert!(!win.is_wintouched());
}

#[test_log::test]
fn test_touch_lines() {
    let _scr = screen();

    let win = Window::new(Size::new(4, 4), Pos::new(0, 0)).unwrap();
    win.untouchwin();

    assert_eq!(win.touchln(1, 2, true), Status::Ok);
    assert!(!win.is_linetouched(0));
    assert!(win.is_linetouched(1));
    assert!(win.is_linetouched(2));
    assert!(!win.is_linetouched(3));

    assert_eq!(win.touchln(1, 1, false), Status::Ok);
    assert!(!win.is_linetouched(1));
    assert!(win.is_linetouched(2));

    win.untouchwin();
    assert_eq!(win.redrawln(1, 1), Status::Ok);
    assert!(win.is_linetouched(1));
    assert!(!win.is_linetouched(0));
    assert_eq!(win.redrawln(0, 100), Status::Ok);
}

#[test_log::test]
fn test_deferred_refresh() {
    let _scr = screen();

    let win = Window::new(Size::new(2, 2), Pos::new(0, 0)).unwrap();
    win.mvaddstr(Pos::new(0, 0), "x");

    assert!(win.is_wintouched());
    assert_eq!(win.noutrefresh(), Status::Ok);
    assert!(!win.is_wintouched());
    assert_eq!(doupdate(), Status::Ok);
}

#[test_log::test]
fn test_sync() {
    let _scr = screen();

    let parent = Window::new(Size::new(5, 10), Pos::new(0, 0)).unwrap();
    let child = parent.derwin(Size::new(2, 4), Pos::new(1, 1)).unwrap();

    parent.untouchwin();
    child.untouchwin();
    child.mvaddstr(Pos::new(1, 0), "hi");
    assert!(!parent.is_wintouched());

    child.syncup();
    assert!(parent.is_wintouched());
    assert!(parent.is_linetouched(2));
    assert!(!parent.is_linetouched(1));

    child.mv(Pos::new(1, 2));
    child.cursyncup();
    assert_eq!(parent.getyx(), Pos::new(2, 3));

    parent.untouchwin();
    child.untouchwin();
    parent.touchwin();
    assert!(!child.is_wintouched());

    child.syncdown();
    assert!(child.is_wintouched());
}
