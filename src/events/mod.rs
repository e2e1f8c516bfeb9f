pub mod chrome;
pub mod pointer;
