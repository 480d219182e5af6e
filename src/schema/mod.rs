/// GraphQL schema for Users and Posts
///
/// Users resolve against the relational store; Posts are passed through from
/// the upstream REST API and joined onto users in memory.

mod builder;
mod mutation;
mod query;
mod types;

pub use builder::{build_schema, sdl, GatewaySchema, SharedPostSource, SharedUserStore};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{Post, User};
