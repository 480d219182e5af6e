/// GraphQL schema assembly
///
/// Wires the Query and Mutation roots together and injects the user store
/// and posts data source as shared schema data.

use crate::posts::PostSource;
use crate::schema::mutation::MutationRoot;
use crate::schema::query::QueryRoot;
use crate::store::UserStore;

use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

/// The executable gateway schema
pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// User store as seen by resolvers
pub type SharedUserStore = Arc<dyn UserStore>;

/// Posts data source as seen by resolvers
pub type SharedPostSource = Arc<dyn PostSource>;

/// Build the schema over the given store and posts data source
pub fn build_schema(store: SharedUserStore, posts: SharedPostSource) -> GatewaySchema {
    tracing::debug!("Building GraphQL schema");

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(posts)
        .finish()
}

/// Schema definition language for the gateway schema
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
