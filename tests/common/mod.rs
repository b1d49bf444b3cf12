#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

use tcurses::terminal::isendwin;
use tcurses::{Session, SessionConfig, Window};

// Curses state is global; tests take turns.
static LOCK: Mutex<()> = Mutex::new(());

/// An `xterm` session writing to `/dev/null`
pub struct TestScreen {
    // Declared first so the session ends before the lock is released
    pub session: Session,
    _lock: MutexGuard<'static, ()>,
}

impl TestScreen {
    pub fn stdscr(&self) -> &Window<'static> {
        self.session.stdscr()
    }

    /// Ends the session, returning whether curses mode was left.
    pub fn end(self) -> bool {
        let TestScreen{session, _lock} = self;
        session.end();
        isendwin()
    }
}

/// Waits for other tests to finish with curses.
pub fn lock() -> MutexGuard<'static, ()> {
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn screen() -> TestScreen {
    screen_with(SessionConfig::default())
}

pub fn screen_with(config: SessionConfig) -> TestScreen {
    let lock = lock();

    let session = Session::open("xterm", "/dev/null", config)
        .expect("failed to open test session");

    TestScreen{session, _lock: lock}
}

/// Returns the characters of a whole window line.
pub fn line(win: &Window, y: i32) -> String {
    win.mvinnstr(tcurses::Pos::new(y, 0), win.getmaxyx().columns as usize)
}
