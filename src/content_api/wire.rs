//! Raw response bodies as the API sends them.
//!
//! Every field is optional and malformed values read as missing. A list entry
//! that cannot be read is skipped instead of failing the whole response.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub data: Vec<RawComic>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RawComic {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub href: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DetailResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub synopsis: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub chapters: Vec<RawChapter>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChapterResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub chapters: Vec<RawChapter>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RawChapter {
    #[serde(default, deserialize_with = "lenient_string")]
    pub chapter: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
}

/// Strings pass through, numbers are rendered, anything else (and blank text) is missing.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(render_number(&n)),
        _ => None,
    })
}

/// Whole floats render without a fraction, so `10.0` and `10` name the same chapter.
fn render_number(n: &serde_json::Number) -> String {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
