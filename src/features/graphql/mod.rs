//! GraphQL read API over uploaded files.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/graphql` | Execute a query |
//! | GET | `/graphql` | GraphiQL (when `GRAPHQL_PLAYGROUND` is set) |
//! | GET | `/graphql/sdl` | Schema definition language |

pub mod handlers;
pub mod loaders;
pub mod query;
pub mod routes;
pub mod scalars;
pub mod schema;
pub mod types;

pub use routes::routes;
pub use schema::{build_schema, export_sdl, SchemaDeps};
