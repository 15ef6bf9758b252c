use bf_core::RawRecord;
use serde_json::Value;

use crate::error::RegistryError;

/// 응답 본문을 레코드 목록으로 푼다. JSON 우선, 실패 시 XML(RSS형) 폴백.
/// 레지스트리가 dataType=json을 무시하고 XML을 줄 때가 있다.
pub fn parse_body(body: &str) -> Result<Vec<RawRecord>, RegistryError> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return Ok(parse_json_items(&value));
    }
    parse_xml_items(body)
}

/// 기업마당 JSON 응답. 아이템 배열 위치가 두 가지다:
/// 최상위 "jsonArray" 또는 response.body.items.
pub fn parse_json_items(value: &Value) -> Vec<RawRecord> {
    let items = value
        .get("jsonArray")
        .and_then(Value::as_array)
        .or_else(|| {
            value
                .pointer("/response/body/items")
                .and_then(Value::as_array)
        });

    match items {
        Some(items) => items
            .iter()
            .filter_map(|item| RawRecord::from_object(item.clone()))
            .collect(),
        None => Vec::new(),
    }
}

/// RSS형 XML 응답의 <item> 요소들을 평탄한 레코드로 변환
pub fn parse_xml_items(body: &str) -> Result<Vec<RawRecord>, RegistryError> {
    let doc =
        roxmltree::Document::parse(body).map_err(|err| RegistryError::Payload(err.to_string()))?;

    let mut records = Vec::new();
    for item in doc.descendants().filter(|n| n.has_tag_name("item")) {
        let mut record = RawRecord::new();
        for child in item.children().filter(|n| n.is_element()) {
            if let Some(text) = child.text() {
                let text = text.trim();
                if !text.is_empty() {
                    record.insert(child.tag_name().name(), text);
                }
            }
        }
        if !record.is_empty() {
            records.push(record);
        }
    }
    Ok(records)
}
