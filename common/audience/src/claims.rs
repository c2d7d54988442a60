use serde::{Deserialize, Deserializer, Serialize};

/// Decoded token types that expose their `aud` claim.
pub trait HasAudience {
    fn audience(&self) -> &[String];
}

/// Normalized `aud` claim. A single string, an array, or an absent claim all
/// become an ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Audiences(Vec<String>);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AudienceRepr {
    Single(String),
    Many(Vec<String>),
}

impl Audiences {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'de> Deserialize<'de> for Audiences {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = Option::<AudienceRepr>::deserialize(deserializer)?;
        Ok(match repr {
            Some(AudienceRepr::Single(item)) => Self(vec![item]),
            Some(AudienceRepr::Many(items)) => Self(items),
            None => Self::default(),
        })
    }
}

impl From<Vec<String>> for Audiences {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl HasAudience for Audiences {
    fn audience(&self) -> &[String] {
        self.as_slice()
    }
}

/// Already-verified claim set: the audience plus everything else untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedClaims {
    pub audience: Audiences,
    pub raw: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ClaimsRepr {
    #[serde(default)]
    aud: Audiences,
}

impl TryFrom<serde_json::Value> for DecodedClaims {
    type Error = serde_json::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let repr = ClaimsRepr::deserialize(&value)?;
        Ok(Self {
            audience: repr.aud,
            raw: value,
        })
    }
}

impl HasAudience for DecodedClaims {
    fn audience(&self) -> &[String] {
        self.audience.as_slice()
    }
}
