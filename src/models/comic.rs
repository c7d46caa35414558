use serde::{de::Error as _, Deserialize, Deserializer};
use std::fmt;

/// A single comic as served by the `info.0.json` endpoints.
///
/// Fields are only ever populated together from one payload; a payload with
/// any required field missing or mistyped fails to decode as a whole.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comic {
    #[serde(rename = "num", deserialize_with = "positive")]
    pub number: u32,
    #[serde(rename = "safe_title")]
    pub title: String,
    #[serde(deserialize_with = "number_or_string")]
    pub month: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub day: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub year: i32,
    #[serde(rename = "alt")]
    pub alt_text: String,
    #[serde(rename = "img")]
    pub image_url: String,
}

impl Comic {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    pub fn posted(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }
}

impl fmt::Display for Comic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "#{}", self.number)?;
        writeln!(f, "POSTED {}", self.posted())?;
        write!(f, "Alt-text: {}", self.alt_text)
    }
}

// Comic numbers start at 1.
fn positive<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match u32::deserialize(deserializer)? {
        0 => Err(D::Error::custom("comic number must be at least 1")),
        n => Ok(n),
    }
}

// Upstream sends dates as strings ("2023", "7") but numbers are accepted too.
fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + TryFrom<i64>,
    <T as std::str::FromStr>::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => {
            T::try_from(n).map_err(|_| D::Error::custom(format!("{n} is out of range")))
        }
        Raw::Text(s) => s.trim().parse().map_err(D::Error::custom),
    }
}
