use std::ffi::CStr;

use libc::{c_char, c_int};
use smallvec::{smallvec, SmallVec};

use crate::cell::Cell;
use crate::sys::ffi::{chtype, ERR, OK};

/// Requests up to this size are served from the stack.
const STACK_BUFFER_SIZE: usize = 1024;

type ByteBuffer = SmallVec<[u8; STACK_BUFFER_SIZE]>;
type CellBuffer = SmallVec<[chtype; STACK_BUFFER_SIZE / 4]>;

/// Converts a length to `c_int`, saturating at `c_int::MAX`.
pub fn c_len(len: usize) -> c_int {
    if len > c_int::MAX as usize {
        c_int::MAX
    } else {
        len as c_int
    }
}

/// Copies a C string returned by curses.
///
/// Returns `None` for a null pointer.
pub fn string_from_ptr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        let s = unsafe { CStr::from_ptr(ptr) };
        Some(s.to_string_lossy().into_owned())
    }
}

/// Fills a buffer of `max` bytes plus a terminator through `f`, which
/// receives the buffer and `max`.
///
/// Returns an empty string if `f` returns `ERR`.
pub fn read_string<F>(max: usize, f: F) -> String
        where F: FnOnce(*mut c_char, c_int) -> c_int {
    let max = max.min(c_int::MAX as usize - 1);
    let mut buf: ByteBuffer = smallvec![0; max + 1];

    if f(buf.as_mut_ptr() as *mut c_char, max as c_int) == ERR {
        return String::new();
    }

    let end = buf.iter().position(|&b| b == 0).unwrap_or(max);
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

/// Reads a line of input through `f`, as `read_string` does.
///
/// Returns an empty string unless `f` returns `OK`; `KEY_RESIZE` in
/// particular interrupts the line.
pub fn read_line<F>(max: usize, f: F) -> String
        where F: FnOnce(*mut c_char, c_int) -> c_int {
    let mut res = OK;

    let s = read_string(max, |buf, n| {
        res = f(buf, n);
        res
    });

    if res == OK { s } else { String::new() }
}

/// Converts a cell returned by `winch`, mapping `ERR` to a null cell.
pub fn read_cell(raw: chtype) -> Cell {
    if raw == ERR as chtype {
        Cell::default()
    } else {
        Cell::from_raw(raw)
    }
}

/// Fills a buffer of `max` cells plus a terminator through `f`.
///
/// Returns an empty vector if `f` returns `ERR`.
pub fn read_cells<F>(max: usize, f: F) -> Vec<Cell>
        where F: FnOnce(*mut chtype, c_int) -> c_int {
    let max = max.min(c_int::MAX as usize - 1);
    let mut buf: CellBuffer = smallvec![0; max + 1];

    if f(buf.as_mut_ptr(), max as c_int) == ERR {
        return Vec::new();
    }

    buf.iter()
        .take_while(|&&c| c != 0)
        .map(|&c| Cell::from_raw(c))
        .collect()
}
