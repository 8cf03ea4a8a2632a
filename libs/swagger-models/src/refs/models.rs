//! Reference-typed models
//!
//! Models, parameters, properties, paths and responses that are nothing but a `$ref`
//! (plus a few descriptive fields). Each one embeds a [`ReferenceDescriptor`] of a
//! fixed kind and delegates reference handling to it.

use super::descriptor::ReferenceDescriptor;
use super::error::Result;
use super::format::ReferenceFormat;
use super::kind::ReferenceKind;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

/// Shared behavior of every model that is expressed as a `$ref`
pub trait ReferenceTyped {
    /// Kind used when (re)building the embedded descriptor
    const KIND: ReferenceKind;

    fn descriptor(&self) -> &ReferenceDescriptor;

    fn replace_descriptor(&mut self, descriptor: ReferenceDescriptor);

    fn format(&self) -> ReferenceFormat {
        self.descriptor().format()
    }

    /// The `$ref` value as written to JSON
    fn reference(&self) -> &str {
        self.descriptor().raw_reference()
    }

    fn simple_reference(&self) -> &str {
        self.descriptor().simple_reference()
    }

    /// Point at a new reference; on error the current one is kept
    fn set_reference(&mut self, reference: impl Into<String>) -> Result<()>
    where
        Self: Sized,
    {
        let descriptor = ReferenceDescriptor::create(Self::KIND, reference)?;
        self.replace_descriptor(descriptor);
        Ok(())
    }

    fn from_value(value: Value) -> Result<Self>
    where
        Self: DeserializeOwned + Sized,
    {
        Ok(serde_json::from_value(value)?)
    }

    fn to_value(&self) -> Result<Value>
    where
        Self: Serialize,
    {
        Ok(serde_json::to_value(self)?)
    }
}

/// Reference to a schema under `definitions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefModel {
    #[serde(
        rename = "$ref",
        serialize_with = "serialize_descriptor",
        deserialize_with = "deserialize_definition"
    )]
    descriptor: ReferenceDescriptor,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Vendor extensions and any other unrecognized content
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl RefModel {
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        Ok(Self {
            descriptor: ReferenceDescriptor::create(Self::KIND, reference)?,
            title: None,
            description: None,
            extensions: HashMap::new(),
        })
    }
}

impl ReferenceTyped for RefModel {
    const KIND: ReferenceKind = ReferenceKind::Definition;

    fn descriptor(&self) -> &ReferenceDescriptor {
        &self.descriptor
    }

    fn replace_descriptor(&mut self, descriptor: ReferenceDescriptor) {
        self.descriptor = descriptor;
    }
}

/// Property whose schema is a `$ref` to a definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefProperty {
    #[serde(
        rename = "$ref",
        serialize_with = "serialize_descriptor",
        deserialize_with = "deserialize_definition"
    )]
    descriptor: ReferenceDescriptor,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Set by the owning model's `required` list, never written inline
    #[serde(skip)]
    pub required: bool,

    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl RefProperty {
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        Ok(Self {
            descriptor: ReferenceDescriptor::create(Self::KIND, reference)?,
            title: None,
            description: None,
            required: false,
            extensions: HashMap::new(),
        })
    }
}

impl ReferenceTyped for RefProperty {
    const KIND: ReferenceKind = ReferenceKind::Definition;

    fn descriptor(&self) -> &ReferenceDescriptor {
        &self.descriptor
    }

    fn replace_descriptor(&mut self, descriptor: ReferenceDescriptor) {
        self.descriptor = descriptor;
    }
}

/// Reference to a shared parameter under `parameters`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefParameter {
    #[serde(
        rename = "$ref",
        serialize_with = "serialize_descriptor",
        deserialize_with = "deserialize_parameter"
    )]
    descriptor: ReferenceDescriptor,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl RefParameter {
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        Ok(Self {
            descriptor: ReferenceDescriptor::create(Self::KIND, reference)?,
            description: None,
            extensions: HashMap::new(),
        })
    }
}

impl ReferenceTyped for RefParameter {
    const KIND: ReferenceKind = ReferenceKind::Parameter;

    fn descriptor(&self) -> &ReferenceDescriptor {
        &self.descriptor
    }

    fn replace_descriptor(&mut self, descriptor: ReferenceDescriptor) {
        self.descriptor = descriptor;
    }
}

/// Path item kept in an external file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefPath {
    #[serde(
        rename = "$ref",
        serialize_with = "serialize_descriptor",
        deserialize_with = "deserialize_path"
    )]
    descriptor: ReferenceDescriptor,

    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl RefPath {
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        Ok(Self {
            descriptor: ReferenceDescriptor::create(Self::KIND, reference)?,
            extensions: HashMap::new(),
        })
    }
}

impl ReferenceTyped for RefPath {
    const KIND: ReferenceKind = ReferenceKind::Path;

    fn descriptor(&self) -> &ReferenceDescriptor {
        &self.descriptor
    }

    fn replace_descriptor(&mut self, descriptor: ReferenceDescriptor) {
        self.descriptor = descriptor;
    }
}

/// Response kept in an external file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefResponse {
    #[serde(
        rename = "$ref",
        serialize_with = "serialize_descriptor",
        deserialize_with = "deserialize_response"
    )]
    descriptor: ReferenceDescriptor,

    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl RefResponse {
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        Ok(Self {
            descriptor: ReferenceDescriptor::create(Self::KIND, reference)?,
            extensions: HashMap::new(),
        })
    }
}

impl ReferenceTyped for RefResponse {
    const KIND: ReferenceKind = ReferenceKind::Response;

    fn descriptor(&self) -> &ReferenceDescriptor {
        &self.descriptor
    }

    fn replace_descriptor(&mut self, descriptor: ReferenceDescriptor) {
        self.descriptor = descriptor;
    }
}

fn serialize_descriptor<S>(
    descriptor: &ReferenceDescriptor,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(descriptor.raw_reference())
}

fn deserialize_kind<'de, D>(
    kind: ReferenceKind,
    deserializer: D,
) -> std::result::Result<ReferenceDescriptor, D::Error>
where
    D: Deserializer<'de>,
{
    let reference = String::deserialize(deserializer)?;
    ReferenceDescriptor::create(kind, reference).map_err(D::Error::custom)
}

fn deserialize_definition<'de, D>(
    deserializer: D,
) -> std::result::Result<ReferenceDescriptor, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_kind(ReferenceKind::Definition, deserializer)
}

fn deserialize_parameter<'de, D>(
    deserializer: D,
) -> std::result::Result<ReferenceDescriptor, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_kind(ReferenceKind::Parameter, deserializer)
}

fn deserialize_path<'de, D>(deserializer: D) -> std::result::Result<ReferenceDescriptor, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_kind(ReferenceKind::Path, deserializer)
}

fn deserialize_response<'de, D>(
    deserializer: D,
) -> std::result::Result<ReferenceDescriptor, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_kind(ReferenceKind::Response, deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refs::error::RefError;
    use serde_json::json;

    #[test]
    fn test_ref_model_from_bare_name() {
        let model: RefModel = serde_json::from_value(json!({ "$ref": "Animal" })).unwrap();
        assert_eq!(model.reference(), "#/definitions/Animal");
        assert_eq!(model.simple_reference(), "Animal");
        assert_eq!(model.format(), ReferenceFormat::Internal);
        assert_eq!(model.descriptor().kind(), ReferenceKind::Definition);
    }

    #[test]
    fn test_ref_model_serializes_raw_reference() {
        let mut model = RefModel::new("Pet").unwrap();
        model.description = Some("A pet".to_string());
        model
            .extensions
            .insert("x-internal".to_string(), json!(true));

        assert_eq!(
            model.to_value().unwrap(),
            json!({
                "$ref": "#/definitions/Pet",
                "description": "A pet",
                "x-internal": true
            })
        );
    }

    #[test]
    fn test_ref_model_captures_extensions() {
        let model = RefModel::from_value(json!({
            "$ref": "#/definitions/Pet",
            "title": "Pet",
            "x-owner": "store"
        }))
        .unwrap();

        assert_eq!(model.title.as_deref(), Some("Pet"));
        assert_eq!(model.extensions.get("x-owner"), Some(&json!("store")));
        assert!(!model.extensions.contains_key("$ref"));
    }

    #[test]
    fn test_set_reference_keeps_old_value_on_error() {
        let mut model = RefModel::new("Pet").unwrap();
        let err = model.set_reference("#/parameters/limit").unwrap_err();
        assert!(matches!(err, RefError::PrefixMismatch { .. }));
        assert_eq!(model.reference(), "#/definitions/Pet");

        model.set_reference("http://example.com/dog.json").unwrap();
        assert_eq!(model.format(), ReferenceFormat::Url);
        assert_eq!(model.simple_reference(), "http://example.com/dog.json");
    }

    #[test]
    fn test_ref_property_required_not_serialized() {
        let mut property = RefProperty::new("Category").unwrap();
        property.required = true;

        let value = property.to_value().unwrap();
        assert_eq!(value, json!({ "$ref": "#/definitions/Category" }));

        let back = RefProperty::from_value(value).unwrap();
        assert!(!back.required);
        assert_eq!(back.simple_reference(), "Category");
    }

    #[test]
    fn test_ref_parameter() {
        let parameter = RefParameter::from_value(json!({ "$ref": "#/parameters/limitParam" })).unwrap();
        assert_eq!(parameter.simple_reference(), "limitParam");
        assert_eq!(parameter.descriptor().kind(), ReferenceKind::Parameter);

        let bare = RefParameter::new("offset").unwrap();
        assert_eq!(bare.reference(), "#/parameters/offset");
    }

    #[test]
    fn test_ref_path_rejects_internal() {
        let err = RefPath::from_value(json!({ "$ref": "#/paths/pets" })).unwrap_err();
        assert!(matches!(err, RefError::Serialization(_)));
        assert!(err
            .to_string()
            .contains("path refs can not be internal references"));

        assert!(matches!(
            RefPath::new("pets"),
            Err(RefError::InvalidKindForInternalFormat {
                kind: ReferenceKind::Path
            })
        ));
    }

    #[test]
    fn test_ref_path_relative() {
        let path = RefPath::from_value(json!({ "$ref": "./paths/pets.json" })).unwrap();
        assert_eq!(path.format(), ReferenceFormat::Relative);
        assert_eq!(path.simple_reference(), "./paths/pets.json");
    }

    #[test]
    fn test_ref_response_url() {
        let response =
            RefResponse::new("http://example.com/responses.json#/NotFound").unwrap();
        assert_eq!(response.format(), ReferenceFormat::Url);
        assert_eq!(
            response.to_value().unwrap(),
            json!({ "$ref": "http://example.com/responses.json#/NotFound" })
        );
    }

    #[test]
    fn test_missing_ref_fails() {
        assert!(RefModel::from_value(json!({ "title": "Pet" })).is_err());
    }
}
