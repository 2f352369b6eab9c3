use serde::{Deserialize, Deserializer, Serialize};

/// Query parameters for `GET /2.0/vacancies/`.
#[derive(Debug, Clone, Serialize)]
pub struct VacancySearch {
    pub keyword: String,
    /// Town id (4 = Moscow).
    pub town: u32,
    /// Catalogue id (48 = "Development, programming").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogues: Option<u32>,
    pub page: u32,
    pub count: u32,
    /// Unix timestamp; only vacancies published after it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published_from: Option<i64>,
    /// `1` excludes "salary by agreement" vacancies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_agreement: Option<u8>,
}

impl VacancySearch {
    pub fn new(keyword: impl Into<String>, town: u32) -> Self {
        Self {
            keyword: keyword.into(),
            town,
            catalogues: None,
            page: 0,
            count: 20,
            date_published_from: None,
            no_agreement: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VacanciesPage {
    /// Elements that are not vacancy objects are dropped.
    #[serde(default, deserialize_with = "lenient_items")]
    pub objects: Vec<Vacancy>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub more: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub profession: String,
    /// `0` when the bound is not published.
    #[serde(default, deserialize_with = "lenient_number")]
    pub payment_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub payment_to: Option<f64>,
    /// Lowercase code, e.g. "rub", "usd".
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub firm_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub town: Option<Town>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Town {
    pub id: Option<u32>,
    pub title: String,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Malformed values become `None` rather than failing the page.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring malformed vacancy field");
            Ok(None)
        }
    }
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<Vacancy>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Array(items) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value(item)
                .map_err(|e| tracing::debug!(error = %e, "Skipping malformed vacancy"))
                .ok()
        })
        .collect())
}
