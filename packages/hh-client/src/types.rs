use serde::{Deserialize, Deserializer, Serialize};

/// Query parameters for `GET /vacancies`.
#[derive(Debug, Clone, Serialize)]
pub struct VacancySearch {
    pub text: String,
    /// Region id (1 = Moscow).
    pub area: u32,
    pub page: u32,
    pub per_page: u32,
    /// Only vacancies published within the last N days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_with_salary: Option<bool>,
}

impl VacancySearch {
    pub fn new(text: impl Into<String>, area: u32) -> Self {
        Self {
            text: text.into(),
            area,
            page: 0,
            per_page: 20,
            period: None,
            only_with_salary: None,
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct VacanciesPage {
    /// Elements that are not vacancy objects are dropped.
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Vec<Vacancy>,
    /// Total number of vacancies matching the query (not just this page).
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

impl VacanciesPage {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.pages
    }
}

/// A single vacancy from search results.
#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub salary: Option<Salary>,
    #[serde(default, deserialize_with = "lenient")]
    pub alternate_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub employer: Option<NamedRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub area: Option<NamedRef>,
}

/// Salary block. Either bound may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    /// ISO-ish code used by hh.ru, e.g. "RUR", "USD".
    pub currency: Option<String>,
    pub gross: Option<bool>,
}

/// `{ "name": ... }` reference used for employers and areas.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub id: Option<String>,
    pub name: String,
}

/// Decode an optional sub-object, mapping a malformed value to `None`
/// instead of failing the whole page.
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

/// Strings pass through, numbers are stringified, anything else is empty.
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

fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<Vacancy>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(vacancy) => Some(vacancy),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed vacancy");
                None
            }
        })
        .collect())
}
