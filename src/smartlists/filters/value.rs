//! Filter value shapes.
//!
//! A filter value is one of three shapes, matching the arity of the
//! operation it is paired with:
//!
//! - a scalar (`"foo"`, `42`, `"2024-01-01T00:00:00Z"`)
//! - a list of scalars (`["foo", "bar"]`)
//! - a range (`{ "from": 1, "to": 10, "inclusive": true }`)
//!
//! Numbers keep their JSON representation so `42` stays `42` rather than
//! becoming `42.0` after a round trip. Dates keep the text they were read
//! from, offset and fraction included.

use super::fields::FieldDomain;
use super::operation::{FilterOperation, ValueArity};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::fmt;

/// An RFC 3339 timestamp together with the exact text it was written as.
///
/// Equality and serialization go by the text, so a value read from JSON is
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValue {
    text: String,
    instant: DateTime<FixedOffset>,
}

impl DateValue {
    pub fn parse(text: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|instant| Self {
                text: text.to_string(),
                instant,
            })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(date: DateTime<Utc>) -> Self {
        Self {
            text: date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            instant: date.fixed_offset(),
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateValue::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("not an RFC 3339 date: {}", text)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(Number),
    Date(DateValue),
    String(String),
}

impl ScalarValue {
    pub fn domain(&self) -> FieldDomain {
        match self {
            ScalarValue::Number(_) => FieldDomain::Number,
            ScalarValue::Date(_) => FieldDomain::Date,
            ScalarValue::String(_) => FieldDomain::String,
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Number(value.into())
    }
}

impl From<DateTime<Utc>> for ScalarValue {
    fn from(value: DateTime<Utc>) -> Self {
        ScalarValue::Date(value.into())
    }
}

/// One end of a range. Both ends of a well-formed range share a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeBound {
    Number(Number),
    Date(DateValue),
}

impl RangeBound {
    pub fn domain(&self) -> FieldDomain {
        match self {
            RangeBound::Number(_) => FieldDomain::Number,
            RangeBound::Date(_) => FieldDomain::Date,
        }
    }
}

impl From<i64> for RangeBound {
    fn from(value: i64) -> Self {
        RangeBound::Number(value.into())
    }
}

impl From<DateTime<Utc>> for RangeBound {
    fn from(value: DateTime<Utc>) -> Self {
        RangeBound::Date(value.into())
    }
}

/// `{ from, to, inclusive? }`. Any other key makes it something else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeValue {
    pub from: RangeBound,
    pub to: RangeBound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
}

impl RangeValue {
    pub fn new(from: RangeBound, to: RangeBound) -> Self {
        Self {
            from,
            to,
            inclusive: None,
        }
    }

    pub fn numbers(from: i64, to: i64) -> Self {
        Self::new(from.into(), to.into())
    }

    pub fn dates(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self::new(from.into(), to.into())
    }

    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = Some(inclusive);
        self
    }

    /// The shared domain of both bounds, or `None` when they disagree.
    pub fn domain(&self) -> Option<FieldDomain> {
        let from = self.from.domain();
        (from == self.to.domain()).then_some(from)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Range(RangeValue),
    List(Vec<ScalarValue>),
    Scalar(ScalarValue),
}

impl FilterValue {
    pub fn arity(&self) -> ValueArity {
        match self {
            FilterValue::Range(_) => ValueArity::Range,
            FilterValue::List(_) => ValueArity::List,
            FilterValue::Scalar(_) => ValueArity::Scalar,
        }
    }

    /// Whether the value has the shape the operation expects.
    pub fn fits(&self, operation: FilterOperation) -> bool {
        self.arity() == operation.arity()
    }

    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ScalarValue>,
    {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<RangeValue> for FilterValue {
    fn from(value: RangeValue) -> Self {
        FilterValue::Range(value)
    }
}

impl From<ScalarValue> for FilterValue {
    fn from(value: ScalarValue) -> Self {
        FilterValue::Scalar(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl From<&ScalarValue> for Value {
    fn from(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Number(n) => Value::Number(n.clone()),
            ScalarValue::Date(d) => Value::String(d.as_str().to_string()),
            ScalarValue::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<&RangeBound> for Value {
    fn from(bound: &RangeBound) -> Self {
        match bound {
            RangeBound::Number(n) => Value::Number(n.clone()),
            RangeBound::Date(d) => Value::String(d.as_str().to_string()),
        }
    }
}

impl From<&RangeValue> for Map<String, Value> {
    fn from(range: &RangeValue) -> Self {
        let mut map = Map::new();
        map.insert("from".to_string(), Value::from(&range.from));
        map.insert("to".to_string(), Value::from(&range.to));
        if let Some(inclusive) = range.inclusive {
            map.insert("inclusive".to_string(), Value::Bool(inclusive));
        }
        map
    }
}

impl From<&FilterValue> for Value {
    fn from(value: &FilterValue) -> Self {
        match value {
            FilterValue::Range(range) => Value::Object(range.into()),
            FilterValue::List(items) => Value::Array(items.iter().map(Value::from).collect()),
            FilterValue::Scalar(scalar) => scalar.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn decodes_each_shape() {
        let scalar: FilterValue = serde_json::from_value(json!("foo")).unwrap();
        assert_eq!(scalar, FilterValue::from("foo"));

        let list: FilterValue = serde_json::from_value(json!(["foo", "shmoo"])).unwrap();
        assert_eq!(list, FilterValue::list(["foo", "shmoo"]));

        let range: FilterValue =
            serde_json::from_value(json!({ "from": 42, "to": 69, "inclusive": true })).unwrap();
        assert_eq!(range, FilterValue::Range(RangeValue::numbers(42, 69).inclusive(true)));
    }

    #[test]
    fn rfc3339_strings_decode_as_dates() {
        let value: ScalarValue = serde_json::from_value(json!("2024-03-01T00:00:00Z")).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(value, ScalarValue::from(expected));

        let plain: ScalarValue = serde_json::from_value(json!("2024 was a year")).unwrap();
        assert_eq!(plain.domain(), FieldDomain::String);
    }

    #[test]
    fn integers_keep_their_json_form() {
        let value: FilterValue = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(42));
    }

    #[test]
    fn inclusive_is_optional_and_not_invented() {
        let range: RangeValue = serde_json::from_value(json!({ "from": 1, "to": 2 })).unwrap();
        assert_eq!(range.inclusive, None);
        assert_eq!(serde_json::to_value(&range).unwrap(), json!({ "from": 1, "to": 2 }));
    }

    #[test]
    fn range_domain_requires_matching_bounds() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(RangeValue::dates(start, end).domain(), Some(FieldDomain::Date));
        assert_eq!(RangeValue::numbers(1, 5).domain(), Some(FieldDomain::Number));
        assert_eq!(RangeValue::new(1i64.into(), end.into()).domain(), None);
    }

    #[test]
    fn fits_checks_arity() {
        assert!(FilterValue::from("x").fits(FilterOperation::Contains));
        assert!(!FilterValue::from("x").fits(FilterOperation::Any));
        assert!(FilterValue::list(["a"]).fits(FilterOperation::None));
        assert!(FilterValue::from(RangeValue::numbers(1, 2)).fits(FilterOperation::Range));
        assert!(!FilterValue::from(RangeValue::numbers(1, 2)).fits(FilterOperation::Gte));
    }

    #[test]
    fn json_conversion_matches_serde() {
        let date = Utc.with_ymd_and_hms(2023, 7, 14, 12, 30, 0).unwrap();
        let values = [
            FilterValue::from("Saga"),
            FilterValue::from(7i64),
            FilterValue::from(date),
            FilterValue::list(["a", "b"]),
            FilterValue::from(RangeValue::dates(date, date).inclusive(false)),
            FilterValue::from(RangeValue::numbers(1, 9)),
        ];
        for value in values {
            assert_eq!(Value::from(&value), serde_json::to_value(&value).unwrap());
        }
    }

    #[test]
    fn objects_that_are_not_ranges_are_rejected() {
        let result: Result<FilterValue, _> = serde_json::from_value(json!({ "nope": 1 }));
        assert!(result.is_err());

        let extra: Result<FilterValue, _> =
            serde_json::from_value(json!({ "from": 1, "to": 2, "gt": 0 }));
        assert!(extra.is_err());
    }

    #[test]
    fn dates_are_written_back_as_read() {
        for text in [
            "2024-01-01T10:00:00+02:00",
            "2023-01-01T00:00:00.000Z",
            "2023-01-01T00:00:00.5-07:30",
        ] {
            let value: FilterValue = serde_json::from_value(json!(text)).unwrap();
            assert!(matches!(value, FilterValue::Scalar(ScalarValue::Date(_))));
            assert_eq!(serde_json::to_value(&value).unwrap(), json!(text));
            assert_eq!(Value::from(&value), json!(text));
        }

        let range: RangeValue = serde_json::from_value(
            json!({ "from": "2023-01-01T00:00:00.000Z", "to": "2023-06-30T23:59:59+01:00" }),
        )
        .unwrap();
        assert_eq!(range.domain(), Some(FieldDomain::Date));
        assert_eq!(
            Value::Object((&range).into()),
            json!({ "from": "2023-01-01T00:00:00.000Z", "to": "2023-06-30T23:59:59+01:00" })
        );
    }

    #[test]
    fn offset_dates_keep_their_instant() {
        let date = DateValue::parse("2024-01-01T10:00:00+02:00").unwrap();
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        assert_eq!(date.instant(), utc);
        assert_ne!(date, DateValue::from(utc));
        assert!(DateValue::parse("2024-01-01").is_none());
    }
}
