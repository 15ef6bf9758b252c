use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 레지스트리 원본 레코드. 스키마가 우리 통제 밖이라 불투명 맵으로 들고,
/// 필드 접근은 키 후보 목록을 순서대로 시도하는 방식만 허용한다.
/// 정규화기(normalize) 외에는 이 맵을 읽지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// JSON 오브젝트만 레코드로 받는다(배열/스칼라는 버림)
    pub fn from_object(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 후보 키를 순서대로 시도해 비어 있지 않은 문자열 값을 돌려준다.
    /// 레지스트리가 타입을 섞어 보내므로 숫자 값은 문자열로 바꿔서 취급.
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        for key in keys {
            match self.0.get(*key) {
                Some(Value::String(s)) if !s.trim().is_empty() => {
                    return Some(s.trim().to_string());
                }
                Some(Value::Number(n)) => return Some(n.to_string()),
                _ => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_tries_keys_in_order() {
        let record = RawRecord::from_object(json!({
            "title": "구형 필드",
            "pblancNm": "신형 필드",
        }))
        .unwrap();
        assert_eq!(
            record.text(&["pblancNm", "title"]),
            Some("신형 필드".to_string())
        );
        assert_eq!(record.text(&["없는키", "title"]), Some("구형 필드".to_string()));
        assert_eq!(record.text(&["없는키"]), None);
    }

    #[test]
    fn text_skips_blank_and_coerces_numbers() {
        let record = RawRecord::from_object(json!({
            "pblancNm": "   ",
            "title": "대체 제목",
            "pblancId": 12345,
        }))
        .unwrap();
        assert_eq!(record.text(&["pblancNm", "title"]), Some("대체 제목".into()));
        assert_eq!(record.text(&["pblancId"]), Some("12345".into()));
    }

    #[test]
    fn from_object_rejects_non_objects() {
        assert!(RawRecord::from_object(json!(["a", "b"])).is_none());
        assert!(RawRecord::from_object(json!("scalar")).is_none());
    }
}
