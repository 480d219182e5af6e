use serde::{Deserialize, Serialize};

/// A post as served by the upstream `/posts` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_post() {
        let json = r#"{
            "userId": 1,
            "id": 2,
            "title": "qui est esse",
            "body": "est rerum tempore vitae"
        }"#;

        let post: PostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 2);
        assert_eq!(post.title, "qui est esse");
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"[{"userId": 3, "id": 21, "title": "t", "body": "b", "tags": ["x"]}]"#;

        let posts: Vec<PostRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, 3);
    }
}
