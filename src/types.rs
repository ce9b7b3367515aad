//! Core data model types.
//!
//! A survey export is ingested into a `Vec<`[`Response`]`>`, one typed record per row, using the
//! fixed ordered [`Schema::survey`] to decide how each raw field is coerced.

use std::collections::BTreeSet;

use serde::Serialize;

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// Yes/no answer.
    Bool,
    /// UTF-8 string.
    Utf8,
    /// `;`-separated multi-value answer.
    Set,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Column order of the survey export.
const SURVEY_FIELDS: [(&str, DataType); 27] = [
    ("timestamp", DataType::Utf8),
    ("username", DataType::Utf8),
    ("contact_name", DataType::Utf8),
    ("company_name", DataType::Utf8),
    ("project_size", DataType::Utf8),
    ("usage_description", DataType::Utf8),
    ("experience", DataType::Utf8),
    ("public_reference", DataType::Bool),
    ("features", DataType::Set),
    ("app_security", DataType::Set),
    ("lightweight_proxy", DataType::Bool),
    ("themes", DataType::Set),
    ("spis", DataType::Set),
    ("significant_changes", DataType::Utf8),
    ("customizations", DataType::Utf8),
    ("num_users", DataType::Int64),
    ("num_active_users", DataType::Int64),
    ("num_logins_per_hour", DataType::Int64),
    ("num_clients", DataType::Int64),
    ("num_realms", DataType::Int64),
    ("clustering", DataType::Utf8),
    ("db", DataType::Utf8),
    ("hardware", DataType::Utf8),
    ("deployment_method", DataType::Utf8),
    ("additional_comments", DataType::Utf8),
    ("missing_features", DataType::Utf8),
    ("last_comments", DataType::Utf8),
];

/// A list of fields describing the expected shape of incoming rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// The fixed 27-column survey schema, in export order.
    pub fn survey() -> Self {
        Self::new(
            SURVEY_FIELDS
                .iter()
                .map(|(name, data_type)| Field::new(*name, *data_type))
                .collect(),
        )
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single typed field value of a [`Response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Multi-value answer. Never `Null`; an empty field is an empty (or `{""}`) set.
    Set(BTreeSet<String>),
}

impl Value {
    /// Re-derive the raw export token for this value.
    ///
    /// Booleans come back as `Yes`/`No` and sets are joined with `;` in sorted order, so the
    /// text is equivalent to, not necessarily identical with, what was ingested.
    pub fn to_raw(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Int64(v) => v.to_string(),
            Value::Bool(true) => "Yes".to_string(),
            Value::Bool(false) => "No".to_string(),
            Value::Utf8(s) => s.clone(),
            Value::Set(items) => items.iter().map(String::as_str).collect::<Vec<_>>().join(";"),
        }
    }
}

/// One parsed survey response.
///
/// Fields follow [`Schema::survey`] order. Anything the source row did not supply stays `None`
/// (or an empty set). Responses are read-only once parsed; use the accessors.
///
/// ```rust
/// use survey_report::ingestion::parse_responses;
///
/// let doc = "\"Timestamp\",\"Username\"\n\"2017/05/01\",\"jdoe\",\"Jane\",\"\",\"\",\"\",\"\",\"Yes\",\"SSO;SAML\"";
/// let jane = &parse_responses(doc).unwrap()[0];
///
/// assert_eq!(jane.contact_name(), Some("Jane"));
/// assert_eq!(jane.company_name(), None);
/// assert_eq!(jane.public_reference(), Some(true));
/// assert_eq!(jane.features().len(), 2);
/// assert_eq!(jane.num_users(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub(crate) timestamp: Option<String>,
    pub(crate) username: Option<String>,
    pub(crate) contact_name: Option<String>,
    pub(crate) company_name: Option<String>,
    pub(crate) project_size: Option<String>,
    pub(crate) usage_description: Option<String>,
    pub(crate) experience: Option<String>,
    pub(crate) public_reference: Option<bool>,
    pub(crate) features: BTreeSet<String>,
    pub(crate) app_security: BTreeSet<String>,
    pub(crate) lightweight_proxy: Option<bool>,
    pub(crate) themes: BTreeSet<String>,
    pub(crate) spis: BTreeSet<String>,
    pub(crate) significant_changes: Option<String>,
    pub(crate) customizations: Option<String>,
    pub(crate) num_users: Option<i64>,
    pub(crate) num_active_users: Option<i64>,
    pub(crate) num_logins_per_hour: Option<i64>,
    pub(crate) num_clients: Option<i64>,
    pub(crate) num_realms: Option<i64>,
    pub(crate) clustering: Option<String>,
    pub(crate) db: Option<String>,
    pub(crate) hardware: Option<String>,
    pub(crate) deployment_method: Option<String>,
    pub(crate) additional_comments: Option<String>,
    pub(crate) missing_features: Option<String>,
    pub(crate) last_comments: Option<String>,
}

impl Response {
    /// When the response was submitted, as exported.
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Account the response was submitted from.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Name the respondent gave for contact.
    pub fn contact_name(&self) -> Option<&str> {
        self.contact_name.as_deref()
    }

    /// Respondent's company, if given.
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// "How do you use it" answer, reported as the project size.
    pub fn project_size(&self) -> Option<&str> {
        self.project_size.as_deref()
    }

    /// Free-text description of how the product is used.
    pub fn usage_description(&self) -> Option<&str> {
        self.usage_description.as_deref()
    }

    /// Free-text account of the respondent's experience.
    pub fn experience(&self) -> Option<&str> {
        self.experience.as_deref()
    }

    /// Whether the respondent agreed to be listed as a public reference.
    pub fn public_reference(&self) -> Option<bool> {
        self.public_reference
    }

    /// Features in use.
    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// How the respondent secures applications.
    pub fn app_security(&self) -> &BTreeSet<String> {
        &self.app_security
    }

    /// Whether a lightweight proxy is wanted.
    pub fn lightweight_proxy(&self) -> Option<bool> {
        self.lightweight_proxy
    }

    /// Themes that were customized.
    pub fn themes(&self) -> &BTreeSet<String> {
        &self.themes
    }

    /// Service provider interfaces the respondent implemented.
    pub fn spis(&self) -> &BTreeSet<String> {
        &self.spis
    }

    /// Significant changes made to the product.
    pub fn significant_changes(&self) -> Option<&str> {
        self.significant_changes.as_deref()
    }

    /// Other customizations.
    pub fn customizations(&self) -> Option<&str> {
        self.customizations.as_deref()
    }

    /// Total users.
    pub fn num_users(&self) -> Option<i64> {
        self.num_users
    }

    /// Active users.
    pub fn num_active_users(&self) -> Option<i64> {
        self.num_active_users
    }

    /// Peak logins per hour.
    pub fn num_logins_per_hour(&self) -> Option<i64> {
        self.num_logins_per_hour
    }

    /// Registered client applications.
    pub fn num_clients(&self) -> Option<i64> {
        self.num_clients
    }

    /// Configured realms.
    pub fn num_realms(&self) -> Option<i64> {
        self.num_realms
    }

    /// Clustering setup.
    pub fn clustering(&self) -> Option<&str> {
        self.clustering.as_deref()
    }

    /// Backing database.
    pub fn db(&self) -> Option<&str> {
        self.db.as_deref()
    }

    /// Hardware description.
    pub fn hardware(&self) -> Option<&str> {
        self.hardware.as_deref()
    }

    /// How the product is deployed.
    pub fn deployment_method(&self) -> Option<&str> {
        self.deployment_method.as_deref()
    }

    /// Additional comments.
    pub fn additional_comments(&self) -> Option<&str> {
        self.additional_comments.as_deref()
    }

    /// Features the respondent misses.
    pub fn missing_features(&self) -> Option<&str> {
        self.missing_features.as_deref()
    }

    /// Closing comments.
    pub fn last_comments(&self) -> Option<&str> {
        self.last_comments.as_deref()
    }

    /// All fields as [`Value`]s, in [`Schema::survey`] order.
    pub fn values(&self) -> Vec<Value> {
        fn text(v: &Option<String>) -> Value {
            v.clone().map(Value::Utf8).unwrap_or(Value::Null)
        }
        fn int(v: Option<i64>) -> Value {
            v.map(Value::Int64).unwrap_or(Value::Null)
        }
        fn flag(v: Option<bool>) -> Value {
            v.map(Value::Bool).unwrap_or(Value::Null)
        }
        fn set(v: &BTreeSet<String>) -> Value {
            Value::Set(v.clone())
        }

        vec![
            text(&self.timestamp),
            text(&self.username),
            text(&self.contact_name),
            text(&self.company_name),
            text(&self.project_size),
            text(&self.usage_description),
            text(&self.experience),
            flag(self.public_reference),
            set(&self.features),
            set(&self.app_security),
            flag(self.lightweight_proxy),
            set(&self.themes),
            set(&self.spis),
            text(&self.significant_changes),
            text(&self.customizations),
            int(self.num_users),
            int(self.num_active_users),
            int(self.num_logins_per_hour),
            int(self.num_clients),
            int(self.num_realms),
            text(&self.clustering),
            text(&self.db),
            text(&self.hardware),
            text(&self.deployment_method),
            text(&self.additional_comments),
            text(&self.missing_features),
            text(&self.last_comments),
        ]
    }
}
