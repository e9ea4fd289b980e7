//! Field groups shared by several entities, and the strict field
//! deserializers they rely on.

use serde::de::{DeserializeOwned, Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Mint address of the token a record refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mint {
    #[serde(rename = "tokenMint")]
    pub token_mint: String,
}

/// Program-derived address identifying a listing or offer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramAddress {
    #[serde(rename = "pdaAddress")]
    pub pda_address: String,
}

/// Referral account credited on the buyer side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerReferral {
    #[serde(rename = "buyerReferral")]
    pub buyer_referral: Option<String>,
}

/// Display triple shown for collections and launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub symbol: String,
}

/// Quoted price in SOL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub price: f64,
}

/// Symbol of the collection a token belongs to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
    pub collection: Option<String>,
}

// ---- Strict field deserializers ----

pub(crate) fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn from_object<T: DeserializeOwned, E: Error>(value: Value) -> Result<T, E> {
    if !value.is_object() {
        return Err(E::invalid_type(unexpected(&value), &"a JSON object"));
    }
    T::deserialize(value).map_err(E::custom)
}

/// A nested record that must arrive as a JSON object.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    from_object(Value::deserialize(deserializer)?)
}

/// An array of nested records, each a JSON object.
pub(crate) fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .enumerate()
        .map(|(i, value)| from_object(value).map_err(|e: D::Error| D::Error::custom(format!("[{i}]: {e}"))))
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(u8),
}

/// `true`/`false`, or the integers `0`/`1`. Anything else, `null` included,
/// is rejected.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Flag::deserialize(deserializer)
        .map_err(|_| D::Error::custom("expected a boolean or 0/1"))?
    {
        Flag::Bool(b) => Ok(b),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(n) => Err(D::Error::invalid_value(
            Unexpected::Unsigned(u64::from(n)),
            &"0 or 1",
        )),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

/// A string, or a number kept in its JSON text form. `null` is rejected.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)
        .map_err(|_| D::Error::custom("expected a string or a number"))?
    {
        Scalar::Text(s) => Ok(s),
        Scalar::Number(n) => Ok(n.to_string()),
    }
}
