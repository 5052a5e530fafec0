//! Update protocol between the client session and the binding dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `(component id, property)` pair naming one input or output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropRef {
    pub id: String,
    pub property: String,
}

impl PropRef {
    pub fn new(id: &str, property: &str) -> Self {
        Self {
            id: id.to_string(),
            property: property.to_string(),
        }
    }
}

impl std::fmt::Display for PropRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.id, self.property)
    }
}

/// Where a binding is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingLocation {
    Server,
    /// Runs in the browser only; the server never evaluates it.
    Client,
}

/// Public description of a registered binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingDescriptor {
    pub name: String,
    pub inputs: Vec<PropRef>,
    pub outputs: Vec<PropRef>,
    pub location: BindingLocation,
}

/// Current value of one input in the session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValue {
    pub id: String,
    pub property: String,
    #[serde(default)]
    pub value: Value,
}

impl InputValue {
    pub fn new(id: &str, property: &str, value: impl Into<Value>) -> Self {
        Self {
            id: id.to_string(),
            property: property.to_string(),
            value: value.into(),
        }
    }

    pub fn prop_ref(&self) -> PropRef {
        PropRef::new(&self.id, &self.property)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Input that changed; `None` on initial page load fires every server binding.
    #[serde(default)]
    pub changed: Option<PropRef>,
    /// Full snapshot of the session's input values, not a delta.
    #[serde(default)]
    pub inputs: Vec<InputValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValue {
    pub id: String,
    pub property: String,
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub outputs: Vec<OutputValue>,
}
