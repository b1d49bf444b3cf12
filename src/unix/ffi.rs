//! Raw declarations of the curses entry points used by this crate
//!
//! Types follow the ncurses 6 ABI: `chtype`, `attr_t` and `mmask_t` are
//! 32 bits wide and `bool` is C99 `_Bool`.

#![allow(non_camel_case_types, non_upper_case_globals)]

use libc::{c_char, c_int, c_short, c_void, FILE};

pub type chtype = u32;
pub type attr_t = chtype;
pub type mmask_t = u32;

pub const OK: c_int = 0;
pub const ERR: c_int = -1;

#[repr(C)]
pub struct WINDOW {
    _private: [u8; 0],
}

#[repr(C)]
pub struct SCREEN {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Copy, Clone, Default)]
pub struct MEVENT {
    pub id: c_short,
    pub x: c_int,
    pub y: c_int,
    pub z: c_int,
    pub bstate: mmask_t,
}

extern "C" {
    pub static mut stdscr: *mut WINDOW;
    pub static mut curscr: *mut WINDOW;
    pub static mut newscr: *mut WINDOW;

    // Written by curses when a screen is set up
    pub static mut LINES: c_int;
    pub static mut COLS: c_int;
    pub static mut COLORS: c_int;
    pub static mut COLOR_PAIRS: c_int;

    pub static mut acs_map: [chtype; 128];

    // Screen lifecycle
    pub fn initscr() -> *mut WINDOW;
    pub fn newterm(term: *const c_char, outfd: *mut FILE, infd: *mut FILE) -> *mut SCREEN;
    pub fn endwin() -> c_int;
    pub fn delscreen(sp: *mut SCREEN);
    pub fn filter();
    pub fn nofilter();
    pub fn isendwin() -> bool;

    // Terminal queries
    pub fn termname() -> *const c_char;
    pub fn longname() -> *const c_char;
    pub fn termattrs() -> chtype;
    pub fn erasechar() -> c_char;
    pub fn killchar() -> c_char;
    pub fn curses_version() -> *const c_char;
    pub fn use_extended_names(enable: bool) -> c_int;

    // Input options
    pub fn cbreak() -> c_int;
    pub fn nocbreak() -> c_int;
    pub fn echo() -> c_int;
    pub fn noecho() -> c_int;
    pub fn nl() -> c_int;
    pub fn nonl() -> c_int;
    pub fn raw() -> c_int;
    pub fn noraw() -> c_int;
    pub fn qiflush();
    pub fn noqiflush();
    pub fn halfdelay(tenths: c_int) -> c_int;
    pub fn typeahead(fd: c_int) -> c_int;
    pub fn meta(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn use_env(enable: bool);
    pub fn use_tioctl(enable: bool);
    pub fn delay_output(ms: c_int) -> c_int;
    pub fn flushinp() -> c_int;

    pub fn unctrl(ch: chtype) -> *const c_char;
    pub fn keyname(key: c_int) -> *const c_char;

    // Terminal modes
    pub fn def_prog_mode() -> c_int;
    pub fn def_shell_mode() -> c_int;
    pub fn reset_prog_mode() -> c_int;
    pub fn reset_shell_mode() -> c_int;
    pub fn savetty() -> c_int;
    pub fn resetty() -> c_int;
    pub fn curs_set(visibility: c_int) -> c_int;
    pub fn napms(ms: c_int) -> c_int;

    // Color
    pub fn has_colors() -> bool;
    pub fn can_change_color() -> bool;
    pub fn start_color() -> c_int;
    pub fn init_pair(pair: c_short, fg: c_short, bg: c_short) -> c_int;
    pub fn pair_content(pair: c_short, fg: *mut c_short, bg: *mut c_short) -> c_int;
    pub fn init_color(color: c_short, r: c_short, g: c_short, b: c_short) -> c_int;
    pub fn color_content(color: c_short,
        r: *mut c_short, g: *mut c_short, b: *mut c_short) -> c_int;

    // Global output and input queue
    pub fn doupdate() -> c_int;
    pub fn ungetch(ch: c_int) -> c_int;
    pub fn has_key(ch: c_int) -> c_int;
    pub fn beep() -> c_int;
    pub fn flash() -> c_int;

    // Mouse
    pub fn has_mouse() -> bool;
    pub fn mousemask(newmask: mmask_t, oldmask: *mut mmask_t) -> mmask_t;
    pub fn mouseinterval(interval: c_int) -> c_int;
    pub fn getmouse(event: *mut MEVENT) -> c_int;
    pub fn ungetmouse(event: *mut MEVENT) -> c_int;

    // Window creation and destruction
    pub fn newwin(lines: c_int, cols: c_int, y: c_int, x: c_int) -> *mut WINDOW;
    pub fn dupwin(win: *mut WINDOW) -> *mut WINDOW;
    pub fn delwin(win: *mut WINDOW) -> c_int;
    pub fn subwin(orig: *mut WINDOW, lines: c_int, cols: c_int, y: c_int, x: c_int) -> *mut WINDOW;
    pub fn derwin(orig: *mut WINDOW, lines: c_int, cols: c_int, y: c_int, x: c_int) -> *mut WINDOW;

    // Window geometry
    pub fn mvwin(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn mvderwin(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn wmove(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn getcury(win: *const WINDOW) -> c_int;
    pub fn getcurx(win: *const WINDOW) -> c_int;
    pub fn getbegy(win: *const WINDOW) -> c_int;
    pub fn getbegx(win: *const WINDOW) -> c_int;
    pub fn getmaxy(win: *const WINDOW) -> c_int;
    pub fn getmaxx(win: *const WINDOW) -> c_int;
    pub fn getpary(win: *const WINDOW) -> c_int;
    pub fn getparx(win: *const WINDOW) -> c_int;

    // Window synchronization
    pub fn syncok(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn wsyncup(win: *mut WINDOW);
    pub fn wcursyncup(win: *mut WINDOW);
    pub fn wsyncdown(win: *mut WINDOW);

    // Window option queries
    pub fn is_cleared(win: *const WINDOW) -> bool;
    pub fn is_idcok(win: *const WINDOW) -> bool;
    pub fn is_idlok(win: *const WINDOW) -> bool;
    pub fn is_immedok(win: *const WINDOW) -> bool;
    pub fn is_keypad(win: *const WINDOW) -> bool;
    pub fn is_leaveok(win: *const WINDOW) -> bool;
    pub fn is_nodelay(win: *const WINDOW) -> bool;
    pub fn is_notimeout(win: *const WINDOW) -> bool;
    pub fn is_pad(win: *const WINDOW) -> bool;
    pub fn is_scrollok(win: *const WINDOW) -> bool;
    pub fn is_subwin(win: *const WINDOW) -> bool;
    pub fn is_syncok(win: *const WINDOW) -> bool;
    pub fn wgetdelay(win: *const WINDOW) -> c_int;
    pub fn wgetscrreg(win: *const WINDOW, top: *mut c_int, bot: *mut c_int) -> c_int;

    // Window options
    pub fn keypad(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn nodelay(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn notimeout(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn wtimeout(win: *mut WINDOW, delay: c_int);
    pub fn clearok(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn idlok(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn idcok(win: *mut WINDOW, enable: bool);
    pub fn immedok(win: *mut WINDOW, enable: bool);
    pub fn leaveok(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn scrollok(win: *mut WINDOW, enable: bool) -> c_int;
    pub fn wsetscrreg(win: *mut WINDOW, top: c_int, bot: c_int) -> c_int;

    // Attributes
    pub fn wattron(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wattroff(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wattrset(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wcolor_set(win: *mut WINDOW, pair: c_short, opts: *mut c_void) -> c_int;
    pub fn wattr_get(win: *mut WINDOW, attrs: *mut attr_t, pair: *mut c_short,
        opts: *mut c_void) -> c_int;
    pub fn wchgat(win: *mut WINDOW, n: c_int, attr: attr_t, pair: c_short,
        opts: *const c_void) -> c_int;
    pub fn mvwchgat(win: *mut WINDOW, y: c_int, x: c_int, n: c_int,
        attr: attr_t, pair: c_short, opts: *const c_void) -> c_int;
    pub fn wbkgd(win: *mut WINDOW, ch: chtype) -> c_int;
    pub fn wbkgdset(win: *mut WINDOW, ch: chtype);
    pub fn getbkgd(win: *mut WINDOW) -> chtype;

    // Clearing
    pub fn werase(win: *mut WINDOW) -> c_int;
    pub fn wclear(win: *mut WINDOW) -> c_int;
    pub fn wclrtobot(win: *mut WINDOW) -> c_int;
    pub fn wclrtoeol(win: *mut WINDOW) -> c_int;

    // Refresh
    pub fn wrefresh(win: *mut WINDOW) -> c_int;
    pub fn wnoutrefresh(win: *mut WINDOW) -> c_int;
    pub fn redrawwin(win: *mut WINDOW) -> c_int;
    pub fn wredrawln(win: *mut WINDOW, beg_line: c_int, num_lines: c_int) -> c_int;
    pub fn touchwin(win: *mut WINDOW) -> c_int;
    pub fn untouchwin(win: *mut WINDOW) -> c_int;
    pub fn is_wintouched(win: *mut WINDOW) -> bool;
    pub fn wtouchln(win: *mut WINDOW, y: c_int, n: c_int, changed: c_int) -> c_int;
    pub fn is_linetouched(win: *mut WINDOW, line: c_int) -> bool;

    // Borders and lines
    pub fn wborder(win: *mut WINDOW,
        ls: chtype, rs: chtype, ts: chtype, bs: chtype,
        tl: chtype, tr: chtype, bl: chtype, br: chtype) -> c_int;
    #[link_name = "box"]
    pub fn box_(win: *mut WINDOW, verch: chtype, horch: chtype) -> c_int;
    pub fn whline(win: *mut WINDOW, ch: chtype, n: c_int) -> c_int;
    pub fn mvwhline(win: *mut WINDOW, y: c_int, x: c_int, ch: chtype, n: c_int) -> c_int;
    pub fn wvline(win: *mut WINDOW, ch: chtype, n: c_int) -> c_int;
    pub fn mvwvline(win: *mut WINDOW, y: c_int, x: c_int, ch: chtype, n: c_int) -> c_int;

    // Compositing
    pub fn overlay(src: *const WINDOW, dst: *mut WINDOW) -> c_int;
    pub fn overwrite(src: *const WINDOW, dst: *mut WINDOW) -> c_int;
    pub fn copywin(src: *const WINDOW, dst: *mut WINDOW,
        sminrow: c_int, smincol: c_int,
        dminrow: c_int, dmincol: c_int,
        dmaxrow: c_int, dmaxcol: c_int,
        overlay: c_int) -> c_int;

    // Input
    pub fn wgetch(win: *mut WINDOW) -> c_int;
    pub fn mvwgetch(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn wgetnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int;
    pub fn mvwgetnstr(win: *mut WINDOW, y: c_int, x: c_int, s: *mut c_char, n: c_int) -> c_int;

    // Output
    pub fn waddch(win: *mut WINDOW, ch: chtype) -> c_int;
    pub fn mvwaddch(win: *mut WINDOW, y: c_int, x: c_int, ch: chtype) -> c_int;
    pub fn wechochar(win: *mut WINDOW, ch: chtype) -> c_int;
    pub fn waddchnstr(win: *mut WINDOW, s: *const chtype, n: c_int) -> c_int;
    pub fn mvwaddchnstr(win: *mut WINDOW, y: c_int, x: c_int, s: *const chtype, n: c_int) -> c_int;
    pub fn waddnstr(win: *mut WINDOW, s: *const c_char, n: c_int) -> c_int;
    pub fn mvwaddnstr(win: *mut WINDOW, y: c_int, x: c_int, s: *const c_char, n: c_int) -> c_int;
    pub fn winsch(win: *mut WINDOW, ch: chtype) -> c_int;
    pub fn mvwinsch(win: *mut WINDOW, y: c_int, x: c_int, ch: chtype) -> c_int;
    pub fn winsnstr(win: *mut WINDOW, s: *const c_char, n: c_int) -> c_int;
    pub fn mvwinsnstr(win: *mut WINDOW, y: c_int, x: c_int, s: *const c_char, n: c_int) -> c_int;
    pub fn wdelch(win: *mut WINDOW) -> c_int;
    pub fn mvwdelch(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;

    // Reading back
    pub fn winch(win: *mut WINDOW) -> chtype;
    pub fn mvwinch(win: *mut WINDOW, y: c_int, x: c_int) -> chtype;
    pub fn winchnstr(win: *mut WINDOW, s: *mut chtype, n: c_int) -> c_int;
    pub fn mvwinchnstr(win: *mut WINDOW, y: c_int, x: c_int, s: *mut chtype, n: c_int) -> c_int;
    pub fn winnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int;
    pub fn mvwinnstr(win: *mut WINDOW, y: c_int, x: c_int, s: *mut c_char, n: c_int) -> c_int;

    // Lines and scrolling
    pub fn wscrl(win: *mut WINDOW, n: c_int) -> c_int;
    pub fn wdeleteln(win: *mut WINDOW) -> c_int;
    pub fn winsertln(win: *mut WINDOW) -> c_int;
    pub fn winsdelln(win: *mut WINDOW, n: c_int) -> c_int;

    // Mouse coordinates
    pub fn wenclose(win: *const WINDOW, y: c_int, x: c_int) -> bool;
    pub fn wmouse_trafo(win: *const WINDOW, y: *mut c_int, x: *mut c_int, to_screen: bool) -> bool;
}
