use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::property::{self, string_value};

/// The canonical record for one qualifying document. Built once during
/// the classification scan and shared read-only between the output
/// collections.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub title: String,
    pub excerpt: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub path: String,
    pub image: Option<String>,
    pub order: Option<f64>,
}

impl Post {
    /// Normalize a document's frontmatter into a record. Missing or
    /// ill-typed fields degrade to their absent forms; nothing here
    /// fails.
    #[must_use]
    pub fn from_frontmatter(frontmatter: &Mapping, path: String, blog_object: &str) -> Self {
        let title = resolve_nonempty_string(frontmatter, "title", "blogTitle", blog_object)
            .or_else(|| resolve_nonempty_string(frontmatter, "blogTitle", "title", blog_object))
            .unwrap_or_default();

        Post {
            title,
            excerpt: resolve_string(frontmatter, "excerpt", blog_object),
            date: parse_date(property::resolve(frontmatter, "date", None, blog_object)),
            author: resolve_string(frontmatter, "author", blog_object),
            path,
            image: resolve_string(frontmatter, "image", blog_object),
            order: property::resolve(frontmatter, "featuredBlogpostOrder", None, blog_object)
                .and_then(Value::as_f64),
        }
    }

    /// Ascending chronological sort key. Records with an unparseable
    /// date sort before every dated record.
    pub(crate) fn date_key(&self) -> i64 {
        self.date.map_or(i64::MIN, |date| date.timestamp_millis())
    }

    /// Featured sort key; an absent or non-numeric order counts as zero.
    pub(crate) fn order_key(&self) -> f64 {
        self.order.unwrap_or(0.0)
    }

    /// UTC calendar year as a four-digit label. Records without a valid
    /// date all land in the `0000` bucket, which sorts after every real
    /// year in the newest-first bucket order.
    pub(crate) fn year_label(&self) -> String {
        self.date
            .map_or_else(|| "0000".to_owned(), |date| format!("{:04}", date.year()))
    }
}

fn resolve_string(frontmatter: &Mapping, name: &str, blog_object: &str) -> Option<String> {
    property::resolve(frontmatter, name, None, blog_object).and_then(string_value)
}

fn resolve_nonempty_string(
    frontmatter: &Mapping,
    primary: &str,
    fallback: &str,
    blog_object: &str,
) -> Option<String> {
    property::resolve(frontmatter, primary, Some(fallback), blog_object)
        .and_then(string_value)
        .filter(|s| !s.is_empty())
}

/// Construct a timestamp from whatever the frontmatter carries. All
/// formats are interpreted as UTC so that builds don't drift with the
/// host timezone. Anything unparseable is `None`.
fn parse_date(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(s, format) {
            return Some(date.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}
