/// API route modules
pub mod graphql;
pub mod health;
pub mod pages;
