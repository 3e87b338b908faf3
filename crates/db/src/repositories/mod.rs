pub mod item_repo;
pub mod rating_repo;

pub use item_repo::ItemRepo;
pub use rating_repo::RatingRepo;
