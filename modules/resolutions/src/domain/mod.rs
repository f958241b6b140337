pub mod error;
pub mod local_client;
pub mod repo;
pub mod seed;
pub mod service;


pub use error::DomainError;
pub use local_client::ResolutionsLocalClient;
pub use repo::ResolutionRepository;
pub use service::{Service, referenced_policies};
