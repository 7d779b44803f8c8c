pub mod catalog;
pub mod repo;
pub mod repo_types;
pub mod services;
