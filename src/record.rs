//! Zone records as understood by the easyDNS API.

use std::fmt::Display;

use serde::{Deserialize, Serialize, Serializer};
use strum_macros::IntoStaticStr;

use crate::DomainError;
use crate::utils::split_domain;

/// Host name easyDNS uses for the apex of a zone.
pub const APEX_HOST: &str = "@";

/// Possible types a zone record can have.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, IntoStaticStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Type {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Txt,
    Srv,
    Caa,
}

impl Type {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A zone record.
///
/// The API encodes `ttl` and `prio` as strings; they are integers here and
/// accepted in either form when decoding. Fields the server only fills in
/// after creation are optional and left out of the encoded payload when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub domain: String,
    pub host: String,
    #[serde(
        serialize_with = "serialize_as_string",
        deserialize_with = "deserialize_to_i64"
    )]
    pub ttl: i64,
    #[serde(
        serialize_with = "serialize_as_string",
        deserialize_with = "deserialize_to_i64"
    )]
    pub prio: i64,
    #[serde(rename = "type")]
    pub type_: Type,
    pub rdata: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_mod: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub revoked: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_host: Option<String>,
}

impl ZoneRecord {
    /// Creates a TXT record for the fully-qualified name given, e.g.
    /// `_acme-challenge.www.example.com`.
    ///
    /// The record's domain is the registrable root of the name and its host is
    /// whatever comes before it, or [`APEX_HOST`] when the name is the root.
    /// A trailing dot is ignored.
    ///
    /// # Errors
    /// - `Empty` if the name is empty
    /// - `MissingRoot` if the name has no registrable root
    ///
    /// # Examples
    ///
    /// ```
    /// use easydns::record::ZoneRecord;
    ///
    /// let record = ZoneRecord::txt("_acme-challenge.www.example.com.", "token", 300).unwrap();
    ///
    /// assert_eq!(record.domain, "example.com");
    /// assert_eq!(record.host, "_acme-challenge.www");
    /// ```
    pub fn txt(fqdn: &str, value: &str, ttl: i64) -> Result<Self, DomainError> {
        let name = fqdn.strip_suffix('.').unwrap_or(fqdn).to_ascii_lowercase();
        let (prefix, root) = split_domain(&name)?;

        Ok(Self {
            id: None,
            domain: root.to_string(),
            host: prefix.unwrap_or(APEX_HOST).to_string(),
            ttl,
            prio: 0,
            type_: Type::Txt,
            rdata: value.to_string(),
            last_mod: None,
            revoked: None,
            new_host: None,
        })
    }
}

fn serialize_as_string<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Helper type for deserializing a string or an i64 to an i64.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrI64 {
    I64(i64),
    String(String),
}

fn deserialize_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = StringOrI64::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        StringOrI64::I64(i) => i,
        StringOrI64::String(s) => s.parse().map_err(D::Error::custom)?,
    })
}

fn deserialize_to_option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = Option::<StringOrI64>::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        Some(StringOrI64::I64(i)) => Some(i),
        Some(StringOrI64::String(s)) if s.is_empty() => None,
        Some(StringOrI64::String(s)) => Some(s.parse().map_err(D::Error::custom)?),
        None => None,
    })
}

#[cfg(test)]
mod tests;
