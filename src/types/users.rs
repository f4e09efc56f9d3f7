use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Alice")]
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_id_then_name() {
        let user = User::new("1", "Alice");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"Alice"}"#);
    }

    #[test]
    fn test_user_id_stays_a_string() {
        let json = r#"{"id": "42", "name": "Carol"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::new("42", "Carol"));

        let numeric = r#"{"id": 42, "name": "Carol"}"#;
        assert!(serde_json::from_str::<User>(numeric).is_err());
    }
}
