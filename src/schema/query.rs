use crate::error::GatewayError;
use crate::schema::types::{Post, User};
use crate::schema::{SharedPostSource, SharedUserStore};

use async_graphql::{Context, Object, Result, ID};

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn hello(&self, name: String) -> String {
        format!("Hello, {}!", name)
    }

    /// Every user in the store
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let store = ctx.data::<SharedUserStore>()?;
        let users = store.find_many().await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// A single user by id, or null when it does not exist
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let id = parse_user_id(&id)?;
        let store = ctx.data::<SharedUserStore>()?;

        Ok(store.find_unique(id).await?.map(User::from))
    }

    /// The upstream posts collection, unmodified
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let source = ctx.data::<SharedPostSource>()?;
        let posts = source.get_posts().await?;

        Ok(posts.into_iter().map(Post::from).collect())
    }
}

/// User ids travel as `ID` strings but are integers in the store
fn parse_user_id(id: &ID) -> std::result::Result<i32, GatewayError> {
    id.parse::<i32>()
        .map_err(|_| GatewayError::InvalidId(id.as_str().to_owned()))
}
