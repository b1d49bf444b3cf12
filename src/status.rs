//! Outcome of curses operations

use std::fmt;
use std::io;

use libc::c_int;

use crate::sys::ffi::{ERR, OK};

/// Outcome of a curses operation that either succeeds or fails
/// without further detail.
///
/// Compares equal to the native integer convention in both directions:
/// `Status::Ok == 0` and `-1 == Status::Err`.
///
/// ```
/// use tcurses::Status;
///
/// assert!(Status::Ok == 0);
/// assert!(-1 == Status::Err);
/// assert!(Status::from(7).is_ok());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum Status {
    /// Operation failed
    Err = ERR,
    /// Operation succeeded
    Ok = OK,
}

impl Status {
    /// Returns whether the operation succeeded.
    #[inline]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Returns whether the operation failed.
    #[inline]
    pub fn is_err(self) -> bool {
        self == Status::Err
    }

    /// Converts the status into an `io::Result`, naming the operation in
    /// the error message.
    ///
    /// ```
    /// use tcurses::Status;
    ///
    /// let err = Status::Err.into_result("wrefresh").unwrap_err();
    /// assert_eq!(err.to_string(), "wrefresh failed");
    /// ```
    pub fn into_result(self, op: &'static str) -> io::Result<()> {
        match self {
            Status::Ok => Ok(()),
            Status::Err => Err(io::Error::new(io::ErrorKind::Other,
                format!("{} failed", op))),
        }
    }
}

impl Default for Status {
    fn default() -> Status {
        Status::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Status::Ok => "OK",
            Status::Err => "ERR",
        })
    }
}

/// Any value other than `ERR` is success; some entry points
/// return a count on success.
impl From<c_int> for Status {
    #[inline]
    fn from(res: c_int) -> Status {
        if res == ERR {
            Status::Err
        } else {
            Status::Ok
        }
    }
}

impl From<Status> for i32 {
    #[inline]
    fn from(status: Status) -> i32 {
        status as i32
    }
}

impl PartialEq<i32> for Status {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        *self as i32 == *other
    }
}

impl PartialEq<Status> for i32 {
    #[inline]
    fn eq(&self, other: &Status) -> bool {
        *self == *other as i32
    }
}

#[cfg(test)]
mod test {
    use super::Status;

    #[test]
    fn test_status_int_eq() {
        assert!(Status::Ok == 0);
        assert!(0 == Status::Ok);
        assert!(Status::Err == -1);
        assert!(-1 == Status::Err);

        assert!(Status::Ok != -1);
        assert!(-1 != Status::Ok);
        assert!(Status::Err != 0);
        assert!(0 != Status::Err);

        assert_eq!(i32::from(Status::Ok), 0);
        assert_eq!(i32::from(Status::Err), -1);
    }

    #[test]
    fn test_status_from_int() {
        assert_eq!(Status::from(0), Status::Ok);
        assert_eq!(Status::from(-1), Status::Err);
        assert_eq!(Status::from(42), Status::Ok);
        assert_eq!(Status::from(-2), Status::Ok);
    }

    #[test]
    fn test_status_result() {
        assert!(Status::Ok.into_result("wmove").is_ok());

        let err = Status::Err.into_result("wmove").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
        assert_eq!(err.to_string(), "wmove failed");

        assert!(Status::Ok.is_ok());
        assert!(Status::Err.is_err());
        assert_eq!(Status::default(), Status::Ok);
        assert_eq!(Status::Err.to_string(), "ERR");
    }
}
