pub mod date;
pub mod parse;
pub mod password;
pub mod validate;
