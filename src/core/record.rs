use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value used to seed a throwaway record set before a mock delete.
pub const PLACEHOLDER_VALUE: &str = "1.2.3.4";

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DNSRecordType {
    A,
    AAAA,
    CAA,
    CNAME,
    DS,
    MX,
    NAPTR,
    NS,
    PTR,
    SOA,
    SPF,
    SRV,
    TXT,
    Other(String),
}

impl DNSRecordType {
    pub fn as_str(&self) -> &str {
        match self {
            DNSRecordType::A => "A",
            DNSRecordType::AAAA => "AAAA",
            DNSRecordType::CAA => "CAA",
            DNSRecordType::CNAME => "CNAME",
            DNSRecordType::DS => "DS",
            DNSRecordType::MX => "MX",
            DNSRecordType::NAPTR => "NAPTR",
            DNSRecordType::NS => "NS",
            DNSRecordType::PTR => "PTR",
            DNSRecordType::SOA => "SOA",
            DNSRecordType::SPF => "SPF",
            DNSRecordType::SRV => "SRV",
            DNSRecordType::TXT => "TXT",
            DNSRecordType::Other(other) => other,
        }
    }
}

// Unknown types are kept as-is; the API decides whether they are valid.
impl From<&str> for DNSRecordType {
    fn from(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "A" => DNSRecordType::A,
            "AAAA" => DNSRecordType::AAAA,
            "CAA" => DNSRecordType::CAA,
            "CNAME" => DNSRecordType::CNAME,
            "DS" => DNSRecordType::DS,
            "MX" => DNSRecordType::MX,
            "NAPTR" => DNSRecordType::NAPTR,
            "NS" => DNSRecordType::NS,
            "PTR" => DNSRecordType::PTR,
            "SOA" => DNSRecordType::SOA,
            "SPF" => DNSRecordType::SPF,
            "SRV" => DNSRecordType::SRV,
            "TXT" => DNSRecordType::TXT,
            _ => DNSRecordType::Other(s.to_string()),
        }
    }
}

impl FromStr for DNSRecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DNSRecordType::from(s))
    }
}

impl fmt::Display for DNSRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DNSRecordType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DNSRecordType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DNSRecordType::from(s.as_str()))
    }
}

/// A record value as it may be written in a resource file: one string or many.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ValueInput {
    One(String),
    Many(Vec<String>),
}

impl Default for ValueInput {
    fn default() -> Self {
        ValueInput::Many(Vec::new())
    }
}

impl ValueInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ValueInput::One(value) => vec![value],
            ValueInput::Many(values) => values,
        }
    }
}

/// Declarative attributes of the record to reconcile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RecordInput {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub ttl: Option<u32>,
    pub value: ValueInput,
    pub overwrite: bool,
    pub mock: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DNSRecordType,
    pub ttl: Option<u32>,
    pub resource_records: Vec<ResourceRecord>,
}

impl ResourceRecordSet {
    pub fn new(
        name: impl Into<String>,
        record_type: DNSRecordType,
        ttl: Option<u32>,
        values: &[String],
    ) -> Self {
        let mut values = values.to_vec();
        values.sort();
        Self {
            name: name.into(),
            record_type,
            ttl,
            resource_records: values
                .into_iter()
                .map(|value| ResourceRecord { value })
                .collect(),
        }
    }

    /// Copy with the resource records in lexical order.
    pub fn normalized(&self) -> Self {
        let mut records = self.resource_records.clone();
        records.sort_by(|a, b| a.value.cmp(&b.value));
        Self {
            resource_records: records,
            ..self.clone()
        }
    }
}

/// Ensures a record name ends with the root label delimiter.
pub fn canonicalize_name(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Desired state of one record set, normalized once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub name: String,
    pub record_type: DNSRecordType,
    pub ttl: Option<u32>,
    pub values: Vec<String>,
    pub overwrite: bool,
    pub mock: bool,
}

impl RecordDescriptor {
    pub fn from_input(input: RecordInput) -> Self {
        let mut values = input.value.into_vec();
        values.sort();
        Self {
            name: canonicalize_name(&input.name),
            record_type: DNSRecordType::from(input.record_type.as_deref().unwrap_or("A")),
            ttl: input.ttl,
            values,
            overwrite: input.overwrite,
            mock: input.mock,
        }
    }

    pub fn resource_record_set(&self) -> ResourceRecordSet {
        ResourceRecordSet::new(&self.name, self.record_type.clone(), self.ttl, &self.values)
    }

    pub fn placeholder_record_set(&self) -> ResourceRecordSet {
        ResourceRecordSet::new(
            &self.name,
            self.record_type.clone(),
            self.ttl,
            &[PLACEHOLDER_VALUE.to_string()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, value: ValueInput) -> RecordInput {
        RecordInput {
            name: name.into(),
            record_type: Some("A".into()),
            ttl: Some(300),
            value,
            overwrite: false,
            mock: false,
        }
    }

    #[test]
    fn test_canonicalize_name_appends_delimiter() {
        assert_eq!(canonicalize_name("example.com"), "example.com.");
        assert_eq!(canonicalize_name("example.com."), "example.com.");
    }

    #[test]
    fn test_canonicalize_name_is_idempotent() {
        for name in ["", ".", "a", "a.b.com", "a.b.com.", "trailing.."] {
            let once = canonicalize_name(name);
            assert_eq!(canonicalize_name(&once), once);
            assert!(once.ends_with('.'));
        }
    }

    #[test]
    fn test_scalar_and_singleton_values_match() {
        let scalar = RecordDescriptor::from_input(input("a.com", ValueInput::One("1.2.3.4".into())));
        let list =
            RecordDescriptor::from_input(input("a.com", ValueInput::Many(vec!["1.2.3.4".into()])));
        assert_eq!(scalar.values, list.values);
        assert_eq!(scalar.resource_record_set(), list.resource_record_set());
    }

    #[test]
    fn test_empty_values_are_allowed() {
        let desc = RecordDescriptor::from_input(input("a.com", ValueInput::default()));
        assert!(desc.values.is_empty());
        assert!(desc.resource_record_set().resource_records.is_empty());
    }

    #[test]
    fn test_payload_is_independent_of_value_order() {
        let values = ["10.0.0.3", "10.0.0.1", "10.0.0.2"];
        let permutations = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        let expected = vec![
            ResourceRecord { value: "10.0.0.1".into() },
            ResourceRecord { value: "10.0.0.2".into() },
            ResourceRecord { value: "10.0.0.3".into() },
        ];
        for order in permutations {
            let value = order.iter().map(|&i| values[i].to_string()).collect();
            let desc = RecordDescriptor::from_input(input("a.com", ValueInput::Many(value)));
            assert_eq!(desc.resource_record_set().resource_records, expected);
        }
    }

    #[test]
    fn test_placeholder_keeps_name_type_ttl() {
        let desc = RecordDescriptor::from_input(input(
            "a.b.com",
            ValueInput::Many(vec!["10.0.0.1".into(), "10.0.0.2".into()]),
        ));
        let placeholder = desc.placeholder_record_set();
        assert_eq!(placeholder.name, "a.b.com.");
        assert_eq!(placeholder.record_type, DNSRecordType::A);
        assert_eq!(placeholder.ttl, Some(300));
        assert_eq!(
            placeholder.resource_records,
            vec![ResourceRecord { value: PLACEHOLDER_VALUE.into() }]
        );
    }

    #[test]
    fn test_record_type_parsing() {
        assert_eq!(DNSRecordType::from("cname"), DNSRecordType::CNAME);
        assert_eq!(DNSRecordType::from("TXT"), DNSRecordType::TXT);
        assert_eq!(
            DNSRecordType::from("BOGUS"),
            DNSRecordType::Other("BOGUS".into())
        );
        assert_eq!(DNSRecordType::Other("BOGUS".into()).to_string(), "BOGUS");
    }

    #[test]
    fn test_input_from_json_scalar_and_list() {
        let scalar: RecordInput =
            serde_json::from_str(r#"{"name":"a.com","type":"A","ttl":60,"value":"1.2.3.4"}"#)
                .unwrap();
        let list: RecordInput =
            serde_json::from_str(r#"{"name":"a.com","type":"A","ttl":60,"value":["1.2.3.4"]}"#)
                .unwrap();
        assert_eq!(
            RecordDescriptor::from_input(scalar),
            RecordDescriptor::from_input(list)
        );
    }

    #[test]
    fn test_input_defaults() {
        let input: RecordInput = serde_json::from_str(r#"{"name":"a.com"}"#).unwrap();
        assert!(!input.overwrite);
        assert!(!input.mock);
        assert_eq!(input.value, ValueInput::Many(vec![]));
    }
}
