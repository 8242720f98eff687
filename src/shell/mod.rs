// Composition root for the distribution bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Wire the in memory store and temp storage into the use case handlers.
// - Expose the HTTP router and the GraphQL schema to the binary.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
