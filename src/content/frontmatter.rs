//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_yaml::Value;

use super::error::FrontMatterError;

/// Front-matter of a post
///
/// Every key is kept in document order and serialized back out unchanged.
/// `title` and `date` are required and must be strings or numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    title: String,
    date: String,
    fields: IndexMap<String, Value>,
}

impl Serialize for FrontMatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if content.starts_with("---") {
            let (yaml, body) = split_yaml(content)?;
            let fields = serde_yaml::from_str(yaml)?;
            return Ok((Self::from_fields(fields)?, body));
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            let (json, body) = split_json(content)?;
            let fields = serde_json::from_str(json)?;
            return Ok((Self::from_fields(fields)?, body));
        }

        Err(FrontMatterError::Missing)
    }

    /// Validate the required keys of an already-parsed mapping
    pub fn from_fields(fields: IndexMap<String, Value>) -> Result<Self, FrontMatterError> {
        let title = required_text(&fields, "title")?;
        let date = required_text(&fields, "date")?;
        Ok(Self {
            title,
            date,
            fields,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Date exactly as written; see [`FrontMatter::parse_date`]
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All keys, in document order
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Parse the date field into a calendar date-time
    pub fn parse_date(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }
}

/// Text of a required key. Bare numbers (e.g. `title: 1984`) count as text.
fn required_text(
    fields: &IndexMap<String, Value>,
    key: &'static str,
) -> Result<String, FrontMatterError> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(FrontMatterError::NotText(key)),
        None => Err(FrontMatterError::MissingField(key)),
    }
}

/// Split `---` fenced YAML from the body. Both fences sit on their own line.
fn split_yaml(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let rest = &content[3..];
    let rest = match rest.find('\n') {
        Some(pos) if rest[..pos].trim().is_empty() => &rest[pos + 1..],
        None if rest.trim().is_empty() => return Err(FrontMatterError::Unterminated("---")),
        _ => return Err(FrontMatterError::Missing),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
            return Ok((yaml, body));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated("---"))
}

/// Split JSON front-matter (`;;;` fenced, or a leading object) from the body
fn split_json(content: &str) -> Result<(&str, &str), FrontMatterError> {
    if let Some(rest) = content.strip_prefix(";;;") {
        let end_pos = rest
            .find(";;;")
            .ok_or(FrontMatterError::Unterminated(";;;"))?;
        let body = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
        return Ok((&rest[..end_pos], body));
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in content.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let body = content[i + 1..].trim_start_matches(['\n', '\r']);
                    return Ok((&content[..=i], body));
                }
            }
            _ => {}
        }
    }

    Err(FrontMatterError::Unterminated("{"))
}

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a date string in various formats.
///
/// Offsets are normalised to UTC; values without an offset are taken as-is
/// and date-only values fall at midnight.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
