pub mod ffi;
pub mod terminal;
