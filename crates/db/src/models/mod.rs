pub mod item;
pub mod rating;
