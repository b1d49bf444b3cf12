//! Towers of Hanoi, played with the number keys
//!
//! Takes the number of disks as an optional argument.

use std::env;
use std::fmt;
use std::io;

use tcurses::color::init_pair;
use tcurses::terminal::{cols, lines};
use tcurses::{
    Attr, Cell, Color, ColorPairFgBg, CursorVisibility, Key, Pos, Session,
    SessionConfig, Size, Window,
};

const MAX_DISKS: usize = 9;
const MAX_DIAMETER: i32 = 2 * MAX_DISKS as i32 + 1;
const X_PADDING: i32 = 2;

const MIN_LINES: i32 = 40;
const MIN_COLS: i32 = 80;

const PAIR_WHITE: i16 = 1;
const PAIR_RED: i16 = 2;

struct Game {
    stacks: [Vec<usize>; 3],
}

impl Game {
    fn new(disks: usize) -> Game {
        Game{
            stacks: [(1..=disks.min(MAX_DISKS)).rev().collect(), Vec::new(), Vec::new()],
        }
    }

    fn is_done(&self) -> bool {
        self.stacks[0].is_empty() && self.stacks[1].is_empty()
    }

    fn can_move(&self, src: usize, dst: usize) -> bool {
        match (self.stacks[src].last(), self.stacks[dst].last()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(a), Some(b)) => a < b,
        }
    }

    fn try_move(&mut self, m: Move) -> bool {
        if !self.can_move(m.src, m.dst) {
            return false;
        }

        if let Some(disk) = self.stacks[m.src].pop() {
            self.stacks[m.dst].push(disk);
        }

        true
    }
}

/// Move between stacks, numbered from zero
#[derive(Copy, Clone)]
struct Move {
    src: usize,
    dst: usize,
}

impl Move {
    fn reverse(self) -> Move {
        Move{src: self.dst, dst: self.src}
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}->{}", self.src + 1, self.dst + 1)
    }
}

enum Command {
    Move(Move),
    Undo,
    Quit,
}

fn centered<'a>(win: &'a Window, size: Size) -> io::Result<Window<'a>> {
    let outer = win.getmaxyx();

    win.derwin(size, Pos::new(
        (outer.lines - size.lines) / 2,
        (outer.columns - size.columns) / 2))
}

// Returns a full width window of `n` lines below `win`
fn window_below<'a>(win: &Window<'a>, n: i32) -> io::Result<Window<'a>> {
    let height = win.getmaxyx().lines;

    match win.parent() {
        Some(parent) => parent.derwin(Size::new(n, 0),
            Pos::new(win.getparyx().y + height, 0)),
        None => Window::new(Size::new(n, 0),
            Pos::new(win.getbegyx().y + height, 0)),
    }
}

fn draw_rect(win: &Window, pair: i16, size: Size, pos: Pos) {
    let cell = b' ' | Attr::REVERSE | Attr::color_pair(pair as i32);
    let row = vec![cell; size.columns as usize];

    for dy in 0..size.lines {
        win.mvaddchstr(Pos::new(pos.y + dy, pos.x), &row);
    }
}

fn show_game(win: &Window, game: &Game) -> io::Result<()> {
    let height = 2 + MAX_DISKS as i32 + 1;
    let width = 3 * MAX_DIAMETER + 4 * X_PADDING;

    let draw = centered(win, Size::new(height, width))?;
    draw.clear();

    draw_rect(&draw, PAIR_WHITE, Size::new(1, width), Pos::new(height - 2, 0));

    for (i, stack) in game.stacks.iter().enumerate() {
        let n = i as i32 + 1;
        let center = n * X_PADDING + i as i32 * MAX_DIAMETER + MAX_DISKS as i32;

        draw_rect(&draw, PAIR_WHITE, Size::new(height - 1, 1), Pos::new(0, center));
        draw.mvaddch(Pos::new(height - 1, center), (b'0' + n as u8) | Attr::BOLD);

        for (j, &disk) in stack.iter().enumerate() {
            let disk = disk as i32;

            draw_rect(&draw, PAIR_RED, Size::new(1, 2 * disk + 1),
                Pos::new(height - j as i32 - 3, center - disk));
        }
    }

    draw.refresh();
    Ok(())
}

fn show_status(win: &Window, status: &str, wait: bool) -> io::Result<()> {
    let mut status = status.to_owned();

    if wait {
        status.push_str(" (Press any key)");
    }

    win.clear();

    if !status.is_empty() {
        let draw = centered(win, Size::new(1, status.len() as i32))?;
        draw.addstr(&status);
        win.refresh();

        if wait {
            draw.getch();
        }
    } else {
        win.refresh();
    }

    Ok(())
}

fn show_title(win: &Window, title: &str) -> io::Result<()> {
    win.clear();

    let draw = centered(win, Size::new(1, title.len() as i32))?;
    draw.attron(Attr::BOLD);
    draw.addstr(title);
    win.refresh();

    Ok(())
}

fn show_help(win: &Window) -> io::Result<()> {
    win.clear();
    win.draw_box(Cell::default(), Cell::default());

    let width = win.getmaxyx().columns;
    let draw = centered(win, Size::new(5, width - 2))?;

    draw.mvaddstr(Pos::new(0, 0), "1-3      : Enter move");
    draw.mvaddstr(Pos::new(1, 0), "U        : Undo previous move");
    draw.mvaddstr(Pos::new(2, 0), "Q        : Quit");
    draw.mvaddstr(Pos::new(3, 0), "Backspace: Cancel");
    draw.mvaddstr(Pos::new(4, 0), "Enter    : Confirm");
    win.refresh();

    Ok(())
}

fn get_command(win: &Window) -> io::Result<Command> {
    win.clear();
    win.draw_box(Cell::default(), Cell::default());
    win.refresh();

    let width = win.getmaxyx().columns;
    let draw = centered(win, Size::new(1, width - 2))?;
    draw.keypad(true);

    let mut src = None;
    let mut dst = None;
    let mut pending = None;

    loop {
        let key = match draw.mvgetch(Pos::new(0, 0)) {
            Some(key) => key,
            None => continue
        };

        draw.clear();

        match key {
            Key::Char(ch @ '1' ..= '3') => {
                let n = ch as usize - '1' as usize;

                if src.is_none() {
                    src = Some(n);
                } else {
                    dst = Some(n);
                }
            }
            Key::Char('u') | Key::Char('U') => {
                src = None;
                dst = None;
                pending = Some(Command::Undo);
            }
            Key::Char('q') | Key::Char('Q') => {
                src = None;
                dst = None;
                pending = Some(Command::Quit);
            }
            Key::Backspace => {
                if dst.is_some() {
                    dst = None;
                } else {
                    src = None;
                }
            }
            Key::Char('\n') => {
                if let Some(cmd) = pending.take() {
                    return Ok(cmd);
                }
            }
            _ => ()
        }

        match (src, dst) {
            (Some(src), Some(dst)) => {
                let m = Move{src, dst};
                pending = Some(Command::Move(m));
                draw.mvaddstr(Pos::new(0, 0), &m.to_string());
            }
            (Some(src), None) => {
                pending = None;
                draw.mvaddstr(Pos::new(0, 0), &format!("{}->", src + 1));
            }
            (None, _) => match pending {
                Some(Command::Undo) => { draw.mvaddstr(Pos::new(0, 0), "Undo"); }
                Some(Command::Quit) => { draw.mvaddstr(Pos::new(0, 0), "Quit"); }
                _ => pending = None,
            }
        }
    }
}

fn run(status: &Window, disks: usize) -> io::Result<()> {
    let main = Window::new(Size::new(0, MIN_COLS), Pos::new(0, 0))?;
    let title = main.derwin(Size::new(3, 0), Pos::new(0, 0))?;
    let board = window_below(&title, 22)?;
    let help = window_below(&board, 7)?;
    let input = window_below(&help, 3)?;

    show_title(&title, "Towers of Hanoi")?;
    show_help(&help)?;

    let mut game = Game::new(disks);
    let mut moves = Vec::new();

    show_game(&board, &game)?;

    while !game.is_done() {
        let msg = match get_command(&input)? {
            Command::Move(m) => {
                if game.try_move(m) {
                    moves.push(m);
                    String::new()
                } else {
                    format!("Invalid move: {}", m)
                }
            }
            Command::Undo => match moves.pop() {
                Some(m) => {
                    game.try_move(m.reverse());
                    format!("Undid move: {}", m)
                }
                None => "No move to undo".to_owned()
            },
            Command::Quit => return Ok(()),
        };

        show_game(&board, &game)?;
        show_status(status, &msg, false)?;
    }

    show_status(status, "Success!", true)
}

fn main() -> io::Result<()> {
    let disks = match env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or(0),
        None => 7
    };

    let session = Session::new(SessionConfig{
        echo: false,
        start_color: true,
        cursor: Some(CursorVisibility::Invisible),
        .. SessionConfig::default()
    })?;

    init_pair(PAIR_WHITE, ColorPairFgBg{fg: Color::White, bg: Color::White})
        .into_result("init_pair")?;
    init_pair(PAIR_RED, ColorPairFgBg{fg: Color::Red, bg: Color::Red})
        .into_result("init_pair")?;

    let status = Window::new(Size::new(1, MIN_COLS.min(cols())), Pos::new(lines() - 1, 0))?;

    let res = if lines() < MIN_LINES || cols() < MIN_COLS {
        show_status(&status, "Screen too small", true)
    } else if disks < 1 || disks > MAX_DISKS {
        show_status(&status, &format!("Number of disks should be in 1..{}", MAX_DISKS), true)
    } else {
        run(&status, disks)
    };

    drop(status);
    session.end();

    res
}
