use serde::{Deserialize, Deserializer};

/// 상위 엔티티 참조: `1` 또는 `{ "id": 1 }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ParentRef {
    Id(i32),
    Nested { id: i32 },
}

/// `teamId: 1`과 `team: { "id": 1 }` 형태를 모두 ID로 받기 위한 역직렬화 함수
///
/// 필드에 `alias`와 함께 지정합니다. `null`은 None입니다.
pub fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<ParentRef>::deserialize(deserializer)?.map(|parent| match parent {
            ParentRef::Id(id) | ParentRef::Nested { id } => id,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Child {
        #[serde(default, alias = "team", deserialize_with = "deserialize_parent_id")]
        team_id: Option<i32>,
    }

    #[test]
    fn should_accept_flat_and_nested_parent_references() {
        let flat: Child = serde_json::from_value(json!({ "teamId": 3 })).unwrap();
        let nested: Child = serde_json::from_value(json!({ "team": { "id": 3 } })).unwrap();

        assert_eq!(flat.team_id, Some(3));
        assert_eq!(nested.team_id, Some(3));
    }

    #[test]
    fn missing_or_null_parent_should_be_none() {
        let missing: Child = serde_json::from_value(json!({})).unwrap();
        let null: Child = serde_json::from_value(json!({ "team": null })).unwrap();

        assert_eq!(missing.team_id, None);
        assert_eq!(null.team_id, None);
    }

    #[test]
    fn malformed_parent_should_be_rejected() {
        assert!(serde_json::from_value::<Child>(json!({ "team": { "name": "x" } })).is_err());
        assert!(serde_json::from_value::<Child>(json!({ "team": "uno" })).is_err());
    }
}
