pub mod environment;
pub mod lunar;
pub mod orbital;
