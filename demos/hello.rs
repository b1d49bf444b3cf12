//! Example showing windows, attributes and keyboard input

#[macro_use] extern crate tcurses;

use std::cmp::{max, min};
use std::io;

use tcurses::color::init_pair;
use tcurses::terminal::{cols, keyname};
use tcurses::{
    Attr, Color, ColorPairFgBg, Key, Pos, Session, SessionConfig, Size, Window,
};

const GREEN: i16 = 1;

fn main() -> io::Result<()> {
    let session = Session::new(SessionConfig{
        echo: false,
        start_color: true,
        .. SessionConfig::default()
    })?;

    init_pair(GREEN, ColorPairFgBg{fg: Color::Green, bg: Color::Black})
        .into_result("init_pair")?;

    let window = Window::new(Size::new(0, min(79, cols())), Pos::new(0, 0))?;
    window.draw_box(Default::default(), Default::default());

    let Size{lines: height, columns: width} = window.getmaxyx();

    let hello = window.subwin(Size::new(2, 5), Pos::new(height / 7, (width - 5) / 2))?;
    hello.keypad(true);

    win_write!(hello, [bold] "Hello");
    hello.mvaddstr(Pos::new(1, 0), "World");
    hello.attrset(Attr::NORMAL);

    let help = window.subwin(Size::new(3, 0), Pos::new(height - 6, 2))?;
    help.mvaddstr(Pos::new(0, 0), "C : Toggle color");
    help.mvaddstr(Pos::new(1, 0), "U : Toggle underline");
    help.mvaddstr(Pos::new(2, 0), "Q : Quit");

    let debug = window.subwin(Size::new(3, 0), Pos::new(height - 3, 0))?;
    debug.draw_box(Default::default(), Default::default());

    hello.mv(Pos::new(0, 0));
    window.refresh();

    loop {
        let Size{lines: h, columns: w} = hello.getmaxyx();
        let mut pos = hello.getyx();
        let cell = hello.inch();

        let key = match hello.getch() {
            Some(key) => key,
            None => continue
        };

        match key {
            Key::Char('c') | Key::Char('C') => {
                hello.addch(cell ^ Attr::color_pair(GREEN as i32));
            }
            Key::Char('u') | Key::Char('U') => {
                hello.addch(cell ^ Attr::UNDERLINE);
            }
            Key::Char('q') | Key::Char('Q') => break,
            Key::Up => pos.y = max(0, pos.y - 1),
            Key::Down => pos.y = min(h - 1, pos.y + 1),
            Key::Left => pos.x = max(0, pos.x - 1),
            Key::Right => pos.x = min(w - 1, pos.x + 1),
            _ => ()
        }

        hello.mv(pos);

        debug.clear();
        debug.draw_box(Default::default(), Default::default());
        debug.mv(Pos::new(1, 1));
        win_write!(debug, "Key: " (: keyname(key).unwrap_or_default()));
        debug.refresh();
    }

    drop(debug);
    drop(help);
    drop(hello);
    drop(window);

    session.end().into_result("endwin")
}
