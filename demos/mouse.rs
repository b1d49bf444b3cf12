//! Example showing mouse input and moving windows

#[macro_use] extern crate tcurses;

use std::cmp::{max, min};
use std::io::{self, Write};

use tcurses::mouse::{getmouse, has_mouse, mouseinterval};
use tcurses::terminal::doupdate;
use tcurses::{
    CursorVisibility, Key, MouseMask, Pos, Session, SessionConfig, Size, Window,
};

// Asks the terminal to report mouse movement as well as clicks
const TRACK_MOTION: &str = "\x1b[?1003h\n";
const UNTRACK_MOTION: &str = "\x1b[?1003l\n";

struct App<'a> {
    main: &'a Window<'static>,
    stats: Window<'a>,
    quit: Window<'a>,
    pick: Window<'a>,

    events: u32,
    mouse: Option<Pos>,
    picked_up: bool,
    pick_pos: Pos,
}

impl<'a> App<'a> {
    fn new(main: &'a Window<'static>) -> io::Result<App<'a>> {
        let size = main.getmaxyx();

        let stats = main.subwin(Size::new(3, 20), Pos::new(0, 0))?;
        let quit = main.subwin(Size::new(3, 8), Pos::new(size.lines - 3, 0))?;
        let pick = centered(main, Size::new(5, 15))?;
        let pick_pos = pick.getbegyx();

        main.keypad(true);

        Ok(App{
            main,
            stats,
            quit,
            pick,
            events: 0,
            mouse: None,
            picked_up: false,
            pick_pos,
        })
    }

    fn run(&mut self) {
        self.update();

        while self.process_event() {
            self.update();
        }
    }

    fn update(&self) {
        if self.pick.getbegyx() != self.pick_pos {
            self.pick.erase();
            self.pick.noutrefresh();
            self.pick.mvwin(self.pick_pos);
        }

        let (y, x) = match self.mouse {
            Some(pos) => (pos.y.to_string(), pos.x.to_string()),
            None => (String::new(), String::new())
        };

        self.stats.erase();
        self.stats.mv(Pos::new(0, 0));
        win_writeln!(self.stats, "Mouse events: " (: self.events));
        win_writeln!(self.stats, "Mouse y     : " (: y));
        win_write!(self.stats, "Mouse x     : " (: x));
        self.stats.noutrefresh();

        self.quit.erase();
        self.quit.draw_box(Default::default(), Default::default());
        self.quit.mvaddstr(Pos::new(1, 1), " Quit ");
        self.quit.noutrefresh();

        self.pick.mvaddstr(Pos::new(2, 1),
            if self.picked_up { " Put me down " } else { " Pick me up! " });
        self.pick.draw_box(Default::default(), Default::default());
        self.pick.noutrefresh();

        doupdate();
    }

    // Returns false to quit
    fn process_event(&mut self) -> bool {
        match self.main.getch() {
            Some(Key::Char('q')) | Some(Key::Char('Q')) => return false,
            Some(Key::Mouse) => (),
            _ => return true
        }

        // Events not selected by the mouse mask produce `Key::Mouse`
        // without an event to retrieve
        let event = match getmouse() {
            Some(event) => event,
            None => return true
        };

        self.events += 1;

        let pos = event.pos();
        let prev = self.mouse.replace(pos).unwrap_or(pos);
        let pressed = event.bstate.contains(MouseMask::BUTTON1_PRESSED);

        if self.picked_up {
            let Size{lines: h, columns: w} = self.main.getmaxyx();
            let Size{lines: hh, columns: ww} = self.pick.getmaxyx();

            self.pick_pos.y = clamp(self.pick_pos.y + pos.y - prev.y, 0, h - hh);
            self.pick_pos.x = clamp(self.pick_pos.x + pos.x - prev.x, 0, w - ww);
            self.picked_up = !pressed;
        } else if self.pick.enclose(pos) {
            self.picked_up = pressed;
        } else if self.quit.enclose(pos) {
            return !pressed;
        }

        true
    }
}

fn centered<'a>(win: &'a Window, size: Size) -> io::Result<Window<'a>> {
    let outer = win.getmaxyx();

    win.derwin(size, Pos::new(
        (outer.lines - size.lines) / 2,
        (outer.columns - size.columns) / 2))
}

fn clamp(n: i32, lo: i32, hi: i32) -> i32 {
    max(lo, min(n, hi))
}

fn main() -> io::Result<()> {
    let session = Session::new(SessionConfig{
        raw: true,
        echo: false,
        cursor: Some(CursorVisibility::Invisible),
        mouse: MouseMask::BUTTON1_PRESSED | MouseMask::REPORT_MOUSE_POSITION,
        .. SessionConfig::default()
    })?;

    if !has_mouse() {
        drop(session);
        return Err(io::Error::new(io::ErrorKind::Other, "mouse not available"));
    }

    // Reports presses without waiting to detect clicks
    mouseinterval(0);

    let mut stdout = io::stdout();
    stdout.write_all(TRACK_MOTION.as_bytes())?;
    stdout.flush()?;

    let main = session.stdscr();
    App::new(main)?.run();

    stdout.write_all(UNTRACK_MOTION.as_bytes())?;
    stdout.flush()?;

    session.end().into_result("endwin")
}
