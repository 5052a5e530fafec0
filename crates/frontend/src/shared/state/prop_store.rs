use contracts::shared::callbacks::{
    BindingDescriptor, BindingLocation, InputValue, PropRef, UpdateResponse,
};
use contracts::shared::component::Component;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// Current value of every component property known to this browser session.
///
/// Holds both what the user typed and what the server answered; the input
/// snapshot of an update is read from here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropStore {
    values: HashMap<PropRef, Value>,
}

impl PropStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &PropRef) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns `false` when the stored value was already equal.
    pub fn set(&mut self, key: PropRef, value: Value) -> bool {
        if self.values.get(&key) == Some(&value) {
            return false;
        }
        self.values.insert(key, value);
        true
    }

    /// Stores `value` only when nothing is known for `key` yet.
    pub fn seed(&mut self, key: PropRef, value: Value) -> bool {
        if self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key, value);
        true
    }

    /// Walks a component tree and seeds the initial values of the properties
    /// listed in `watched`. Returns the properties seen for the first time.
    pub fn seed_from_component(
        &mut self,
        component: &Component,
        watched: &BTreeSet<PropRef>,
    ) -> Vec<PropRef> {
        let mut seeded = Vec::new();
        self.seed_walk(component, watched, &mut seeded);
        seeded
    }

    fn seed_walk(
        &mut self,
        component: &Component,
        watched: &BTreeSet<PropRef>,
        seeded: &mut Vec<PropRef>,
    ) {
        let Component::Element(element) = component else {
            return;
        };
        if let Some(id) = element.id.as_deref() {
            for (property, value) in &element.props {
                let key = PropRef::new(id, property);
                if watched.contains(&key) && self.seed(key.clone(), value.clone()) {
                    seeded.push(key);
                }
            }
        }
        for child in &element.children {
            self.seed_walk(child, watched, seeded);
        }
    }

    /// Input values for every server binding, deduplicated, missing ones as null.
    pub fn snapshot(&self, bindings: &[BindingDescriptor]) -> Vec<InputValue> {
        server_inputs(bindings)
            .into_iter()
            .map(|key| {
                let value = self.values.get(&key).cloned().unwrap_or(Value::Null);
                InputValue::new(&key.id, &key.property, value)
            })
            .collect()
    }

    pub fn apply(&mut self, response: &UpdateResponse) {
        for output in &response.outputs {
            self.values
                .insert(PropRef::new(&output.id, &output.property), output.value.clone());
        }
    }
}

/// Inputs of server bindings, in first-seen order.
pub fn server_inputs(bindings: &[BindingDescriptor]) -> Vec<PropRef> {
    let mut seen = BTreeSet::new();
    bindings
        .iter()
        .filter(|b| b.location == BindingLocation::Server)
        .flat_map(|b| b.inputs.iter())
        .filter(|key| seen.insert((*key).clone()))
        .cloned()
        .collect()
}

pub fn is_input_of(
    bindings: &[BindingDescriptor],
    key: &PropRef,
    location: BindingLocation,
) -> bool {
    bindings
        .iter()
        .any(|b| b.location == location && b.inputs.contains(key))
}
