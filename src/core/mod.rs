pub mod cards;
pub mod controller;
pub mod errors;
pub mod pagination;
pub mod tasks;
pub mod ticker;
pub mod visit;

pub use cards::{
    CardView,
    CardsView,
};
pub use controller::Controller;
pub use errors::AppError;
pub use pagination::{
    PageRequest,
    PaginationState,
};
pub use visit::VisitTracker;
