pub mod scale;
pub mod scroll;
