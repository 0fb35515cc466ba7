pub mod add;
pub mod board;
pub mod edit;
pub mod export;
pub mod list;
