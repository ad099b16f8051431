use serde::Deserialize;
use std::collections::HashMap;

/// Skill gem overview as served by the market aggregator.
#[derive(Debug, Deserialize)]
pub struct GemSnapshot {
    pub lines: Vec<GemLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GemLine {
    pub name: String,
    #[serde(default)]
    pub corrupted: Option<bool>,
    #[serde(rename = "gemLevel", default)]
    pub gem_level: Option<u32>,
    #[serde(rename = "gemQuality", default)]
    pub gem_quality: Option<u32>,
    #[serde(rename = "chaosValue", default)]
    pub chaos_value: Option<f64>,
    #[serde(default)]
    pub count: Option<u32>,
    // The high-value price field was renamed between league versions
    // (exaltedValue, divineValue), so it is looked up by name.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl GemLine {
    pub fn high_value(&self, field: &str) -> Option<f64> {
        self.extra.get(field).and_then(serde_json::Value::as_f64)
    }
}

#[derive(Debug, Deserialize)]
pub struct CurrencySnapshot {
    pub lines: Vec<CurrencyLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyLine {
    #[serde(rename = "currencyTypeName", default)]
    pub currency_type_name: Option<String>,
    #[serde(rename = "chaosEquivalent", default)]
    pub chaos_equivalent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gem_line_with_missing_fields() {
        let snapshot: GemSnapshot = serde_json::from_str(
            r#"{"lines": [{"name": "Fireball"}, {"name": "Anomalous Fireball", "gemLevel": 20,
                "gemQuality": 20, "corrupted": true, "chaosValue": 42.5, "divineValue": 0.3,
                "count": 7, "icon": "x.png"}]}"#,
        )
        .unwrap();

        let bare = &snapshot.lines[0];
        assert_eq!(bare.gem_level, None);
        assert_eq!(bare.high_value("divineValue"), None);

        let full = &snapshot.lines[1];
        assert_eq!(full.gem_level, Some(20));
        assert_eq!(full.corrupted, Some(true));
        assert_eq!(full.count, Some(7));
        assert_eq!(full.high_value("divineValue"), Some(0.3));
        assert_eq!(full.high_value("exaltedValue"), None);
    }

    #[test]
    fn test_currency_line_fields_are_optional() {
        let snapshot: CurrencySnapshot = serde_json::from_str(
            r#"{"lines": [{"currencyTypeName": "Divine Orb", "chaosEquivalent": 210.0}, {"detailsId": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.lines.len(), 2);
        assert_eq!(snapshot.lines[0].chaos_equivalent, Some(210.0));
        assert!(snapshot.lines[1].currency_type_name.is_none());
    }
}
