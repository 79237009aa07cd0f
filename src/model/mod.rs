pub mod card;
pub mod keywords;

pub use card::{Card, Cell, GridSize, Position, MIN_GRID_SIZE};
pub use keywords::KeywordList;
