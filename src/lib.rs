//! Front end of a DarkBASIC compiler: keyword aware scanning, parsing, and the passes that
//! settle what the parser can't know yet.

pub mod fmt;
pub mod keyword;
pub mod semantic;
pub mod symbol;
pub mod syntax;
pub mod term;
#[cfg(test)]
mod tests;
