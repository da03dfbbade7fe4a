//! Pieces shared by the command-line clients

pub mod constants;
pub mod helpers;
