use crate::posts::{posts_for_user, PostRecord};
use crate::schema::SharedPostSource;
use crate::store::UserRecord;

use async_graphql::{Context, Object, Result, ID};

/// A user persisted in the relational store
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    /// Posts from the upstream service whose userId matches this user
    async fn my_posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let source = ctx.data::<SharedPostSource>()?;
        let posts = source.get_posts().await?;

        Ok(posts_for_user(posts, self.id)
            .into_iter()
            .map(Post::from)
            .collect())
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

/// A post served by the upstream REST API
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn body(&self) -> &str {
        &self.body
    }

    async fn user_id(&self) -> ID {
        ID(self.user_id.to_string())
    }
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            user_id: record.user_id,
        }
    }
}
