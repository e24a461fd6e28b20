pub mod files;
pub mod graphql;
pub mod users;
