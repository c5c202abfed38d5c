//! Request guards and extractors shared by the controllers.

pub mod access;
pub mod payload;

#[cfg(test)]
mod test;
