pub mod cli;
pub mod conversion;
pub mod save;
pub mod session;
pub mod ui;
