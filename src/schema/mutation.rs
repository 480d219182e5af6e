use crate::schema::types::User;
use crate::schema::SharedUserStore;

use async_graphql::{Context, Object, Result};

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, name: String, email: String) -> Result<User> {
        let store = ctx.data::<SharedUserStore>()?;
        let user = store.create(&name, &email).await?;

        Ok(user.into())
    }

    async fn update_user(&self, ctx: &Context<'_>, id: i32, name: String) -> Result<User> {
        let store = ctx.data::<SharedUserStore>()?;
        let user = store.update(id, &name).await?;

        Ok(user.into())
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> Result<User> {
        let store = ctx.data::<SharedUserStore>()?;
        let user = store.delete(id).await?;

        Ok(user.into())
    }
}
