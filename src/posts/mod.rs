mod client;
mod types;

pub use client::PostsApi;
pub use types::PostRecord;

use crate::error::Result;
use async_trait::async_trait;

/// Anything that can produce the full posts collection
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn get_posts(&self) -> Result<Vec<PostRecord>>;
}

/// Posts owned by `user_id`, in upstream order.
///
/// Linear scan over the whole collection; there is no index.
pub fn posts_for_user(posts: Vec<PostRecord>, user_id: i32) -> Vec<PostRecord> {
    let user_id = i64::from(user_id);
    posts.into_iter().filter(|post| post.user_id == user_id).collect()
}
