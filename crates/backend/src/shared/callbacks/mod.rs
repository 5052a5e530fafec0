//! Binding table and dispatcher.
//!
//! Each binding maps the current values of its declared inputs to new values
//! for its declared outputs. Handlers are plain functions: they see only the
//! input snapshot and the immutable dock, never another session's values.

use std::collections::{HashMap, HashSet};

use contracts::shared::callbacks::{
    BindingDescriptor, BindingLocation, OutputValue, PropRef, UpdateRequest, UpdateResponse,
};
use serde_json::Value;
use thiserror::Error;

use crate::shared::dock::DockApp;

/// Server-side handler: input values in declaration order → output values in
/// declaration order.
pub type Handler = fn(&DockApp, &[Value]) -> Vec<Value>;

#[derive(Debug, Clone, Copy)]
pub enum BindingKind {
    Server(Handler),
    /// Evaluated in the browser; listed so the client knows about it.
    Client,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub name: &'static str,
    pub inputs: Vec<PropRef>,
    pub outputs: Vec<PropRef>,
    pub kind: BindingKind,
}

impl Binding {
    pub fn server(
        name: &'static str,
        inputs: &[(&str, &str)],
        outputs: &[(&str, &str)],
        handler: Handler,
    ) -> Self {
        Self {
            name,
            inputs: to_refs(inputs),
            outputs: to_refs(outputs),
            kind: BindingKind::Server(handler),
        }
    }

    pub fn client(name: &'static str, inputs: &[(&str, &str)], outputs: &[(&str, &str)]) -> Self {
        Self {
            name,
            inputs: to_refs(inputs),
            outputs: to_refs(outputs),
            kind: BindingKind::Client,
        }
    }

    pub fn location(&self) -> BindingLocation {
        match self.kind {
            BindingKind::Server(_) => BindingLocation::Server,
            BindingKind::Client => BindingLocation::Client,
        }
    }

    pub fn descriptor(&self) -> BindingDescriptor {
        BindingDescriptor {
            name: self.name.to_string(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            location: self.location(),
        }
    }
}

fn to_refs(pairs: &[(&str, &str)]) -> Vec<PropRef> {
    pairs
        .iter()
        .map(|(id, property)| PropRef::new(id, property))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    #[error("binding '{0}' is registered twice")]
    DuplicateName(&'static str),

    #[error("binding '{0}' declares no inputs")]
    NoInputs(&'static str),

    #[error("output {0} is written by more than one binding")]
    DuplicateOutput(PropRef),
}

/// Bindings indexed by the inputs they declare. Built once at startup.
#[derive(Debug)]
pub struct BindingTable {
    bindings: Vec<Binding>,
    by_input: HashMap<PropRef, Vec<usize>>,
}

impl BindingTable {
    pub fn new(bindings: Vec<Binding>) -> Result<Self, BindingError> {
        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        let mut by_input: HashMap<PropRef, Vec<usize>> = HashMap::new();

        for (index, binding) in bindings.iter().enumerate() {
            if !names.insert(binding.name) {
                return Err(BindingError::DuplicateName(binding.name));
            }
            if binding.inputs.is_empty() {
                return Err(BindingError::NoInputs(binding.name));
            }
            for output in &binding.outputs {
                if !outputs.insert(output.clone()) {
                    return Err(BindingError::DuplicateOutput(output.clone()));
                }
            }
            for input in &binding.inputs {
                by_input.entry(input.clone()).or_default().push(index);
            }
        }

        Ok(Self { bindings, by_input })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn descriptors(&self) -> Vec<BindingDescriptor> {
        self.bindings.iter().map(Binding::descriptor).collect()
    }

    /// Bindings declaring `input`, client bindings included.
    pub fn triggered_by<'a>(&'a self, input: &PropRef) -> impl Iterator<Item = &'a Binding> + 'a {
        self.by_input
            .get(input)
            .into_iter()
            .flatten()
            .map(move |&index| &self.bindings[index])
    }

    /// Runs every server binding affected by the request.
    ///
    /// With no `changed` input (initial load) every server binding runs once.
    /// Inputs missing from the snapshot are passed as `null`.
    pub fn dispatch(&self, dock: &DockApp, request: &UpdateRequest) -> UpdateResponse {
        let snapshot: HashMap<PropRef, &Value> = request
            .inputs
            .iter()
            .map(|input| (input.prop_ref(), &input.value))
            .collect();

        let selected: Vec<&Binding> = match &request.changed {
            Some(changed) => self.triggered_by(changed).collect(),
            None => self.bindings.iter().collect(),
        };

        let mut outputs = Vec::new();
        for binding in selected {
            let BindingKind::Server(handler) = binding.kind else {
                continue;
            };

            let args: Vec<Value> = binding
                .inputs
                .iter()
                .map(|input| snapshot.get(input).map(|v| (*v).clone()).unwrap_or(Value::Null))
                .collect();

            let values = handler(dock, &args);
            if values.len() != binding.outputs.len() {
                tracing::error!(
                    "binding '{}' returned {} value(s) for {} output(s), update dropped",
                    binding.name,
                    values.len(),
                    binding.outputs.len()
                );
                continue;
            }

            tracing::debug!("binding '{}' evaluated", binding.name);
            outputs.extend(
                binding
                    .outputs
                    .iter()
                    .zip(values)
                    .map(|(target, value)| OutputValue {
                        id: target.id.clone(),
                        property: target.property.clone(),
                        value,
                    }),
            );
        }

        UpdateResponse { outputs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DockConfig;
    use crate::shared::dock::TabRegistryBuilder;
    use contracts::shared::callbacks::InputValue;
    use contracts::shared::dock::DockModel;
    use serde_json::json;

    fn dock() -> DockApp {
        let model = DockModel::from_value(json!({
            "layout": { "type": "row", "children": [] }
        }))
        .unwrap();
        DockApp::new(model, TabRegistryBuilder::new().build(), &DockConfig::default()).unwrap()
    }

    fn echo(_: &DockApp, inputs: &[Value]) -> Vec<Value> {
        vec![inputs[0].clone()]
    }

    fn pair(_: &DockApp, inputs: &[Value]) -> Vec<Value> {
        vec![json!(inputs.len()), inputs[1].clone()]
    }

    fn broken(_: &DockApp, _: &[Value]) -> Vec<Value> {
        Vec::new()
    }

    fn table() -> BindingTable {
        BindingTable::new(vec![
            Binding::server("echo", &[("a", "value")], &[("out-a", "children")], echo),
            Binding::server(
                "pair",
                &[("a", "value"), ("b", "value")],
                &[("out-n", "children"), ("out-b", "children")],
                pair,
            ),
            Binding::client("theme", &[("switch", "checked")], &[("switch", "id")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_changed_input_runs_only_dependent_bindings() {
        let request = UpdateRequest {
            changed: Some(PropRef::new("b", "value")),
            inputs: vec![InputValue::new("a", "value", 1), InputValue::new("b", "value", "x")],
        };
        let response = table().dispatch(&dock(), &request);
        assert_eq!(
            response.outputs,
            vec![
                OutputValue { id: "out-n".into(), property: "children".into(), value: json!(2) },
                OutputValue { id: "out-b".into(), property: "children".into(), value: json!("x") },
            ]
        );
    }

    #[test]
    fn test_shared_input_triggers_every_dependent() {
        let request = UpdateRequest {
            changed: Some(PropRef::new("a", "value")),
            inputs: vec![InputValue::new("a", "value", 7)],
        };
        let response = table().dispatch(&dock(), &request);
        let ids: Vec<&str> = response.outputs.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["out-a", "out-n", "out-b"]);
        // b is missing from the snapshot and arrives as null
        assert_eq!(response.outputs[2].value, Value::Null);
    }

    #[test]
    fn test_client_binding_never_runs_on_server() {
        let request = UpdateRequest {
            changed: Some(PropRef::new("switch", "checked")),
            inputs: vec![InputValue::new("switch", "checked", true)],
        };
        let t = table();
        assert_eq!(t.triggered_by(&PropRef::new("switch", "checked")).count(), 1);
        assert!(t.dispatch(&dock(), &request).outputs.is_empty());
    }

    #[test]
    fn test_initial_load_runs_all_server_bindings() {
        let request = UpdateRequest { changed: None, inputs: vec![] };
        let response = table().dispatch(&dock(), &request);
        assert_eq!(response.outputs.len(), 3);
    }

    #[test]
    fn test_unknown_input_produces_nothing() {
        let request = UpdateRequest {
            changed: Some(PropRef::new("nope", "value")),
            inputs: vec![],
        };
        assert!(table().dispatch(&dock(), &request).outputs.is_empty());
    }

    #[test]
    fn test_wrong_arity_is_dropped() {
        let t = BindingTable::new(vec![Binding::server(
            "broken",
            &[("a", "value")],
            &[("out", "children")],
            broken,
        )])
        .unwrap();
        let request = UpdateRequest { changed: None, inputs: vec![] };
        assert!(t.dispatch(&dock(), &request).outputs.is_empty());
    }

    #[test]
    fn test_duplicate_output_rejected() {
        let err = BindingTable::new(vec![
            Binding::server("one", &[("a", "value")], &[("out", "children")], echo),
            Binding::server("two", &[("b", "value")], &[("out", "children")], echo),
        ])
        .unwrap_err();
        assert_eq!(err, BindingError::DuplicateOutput(PropRef::new("out", "children")));
    }

    #[test]
    fn test_duplicate_name_and_missing_inputs_rejected() {
        let err = BindingTable::new(vec![
            Binding::server("same", &[("a", "value")], &[("x", "children")], echo),
            Binding::server("same", &[("b", "value")], &[("y", "children")], echo),
        ])
        .unwrap_err();
        assert_eq!(err, BindingError::DuplicateName("same"));

        let err = BindingTable::new(vec![Binding::server("lonely", &[], &[("z", "children")], echo)])
            .unwrap_err();
        assert_eq!(err, BindingError::NoInputs("lonely"));
    }

    #[test]
    fn test_descriptors_mark_location() {
        let descriptors = table().descriptors();
        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].location, BindingLocation::Server);
        assert_eq!(descriptors[2].location, BindingLocation::Client);
    }
}
