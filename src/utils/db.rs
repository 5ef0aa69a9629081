use sea_orm::{ActiveValue, Value};

/// 요청에 포함된 필드만 반영하기 위한 헬퍼
///
/// `None`은 `NotSet`으로 남겨 INSERT/UPDATE 문에서 제외됩니다.
pub fn set_if_present<V>(value: Option<V>) -> ActiveValue<V>
where
    V: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

/// 빈 문자열 필터는 조건 없음으로 취급
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
