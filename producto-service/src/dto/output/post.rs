use serde::{Deserialize, Serialize};

///
/// Post returned by the upstream posts API, forwarded as is
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: Option<i32>,
    pub id: Option<i32>,
    pub title: Option<String>,
    pub body: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn post_json_deserialize_upstream_format() {
        let json = r#"{
            "userId": 1,
            "id": 2,
            "title": "qui est esse",
            "body": "est rerum tempore vitae"
        }"#;

        let post = serde_json::from_str::<Post>(json).unwrap();

        assert_eq!(
            post,
            Post {
                user_id: Some(1),
                id: Some(2),
                title: Some("qui est esse".to_string()),
                body: Some("est rerum tempore vitae".to_string()),
            }
        );
    }
}
