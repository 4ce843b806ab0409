//! In-memory repository adapters.

mod product_repository;
mod visitor_repository;

pub use product_repository::InMemoryProductRepository;
pub use visitor_repository::InMemoryVisitorRepository;
