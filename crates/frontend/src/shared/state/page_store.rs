use contracts::shared::callbacks::{BindingDescriptor, BindingLocation, PropRef, UpdateRequest};
use contracts::shared::component::Component;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use std::collections::{BTreeSet, VecDeque};

use super::api;
use super::prop_store::{is_input_of, server_inputs, PropStore};

/// Per-session page state: property values, the binding table and the
/// queue of pending updates.
///
/// Updates are sent one at a time; each one carries the snapshot taken when
/// it leaves the queue.
#[derive(Clone, Copy)]
pub struct PageStore {
    session_id: StoredValue<String>,
    props: RwSignal<PropStore>,
    bindings: StoredValue<Vec<BindingDescriptor>>,
    pending: StoredValue<VecDeque<Option<PropRef>>>,
    in_flight: StoredValue<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PageStore {
    pub fn new() -> Self {
        let session_id = uuid::Uuid::new_v4().to_string();
        log::debug!("page session {}", session_id);
        Self {
            session_id: StoredValue::new(session_id),
            props: RwSignal::new(PropStore::new()),
            bindings: StoredValue::new(Vec::new()),
            pending: StoredValue::new(VecDeque::new()),
            in_flight: StoredValue::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn set_bindings(&self, bindings: Vec<BindingDescriptor>) {
        self.bindings.set_value(bindings);
    }

    /// Reactive view of one property; only notifies when that value changes.
    pub fn watch(&self, key: PropRef) -> Memo<Option<Value>> {
        let props = self.props;
        Memo::new(move |_| props.with(|p| p.get(&key).cloned()))
    }

    pub fn value_untracked(&self, key: &PropRef) -> Option<Value> {
        self.props.with_untracked(|p| p.get(key).cloned())
    }

    /// True when the property only drives a browser-side binding.
    pub fn is_client_input(&self, key: &PropRef) -> bool {
        self.bindings
            .with_value(|b| is_input_of(b, key, BindingLocation::Client))
    }

    /// Records a user edit and, when a server binding listens to it, queues
    /// an update.
    pub fn set_input(&self, key: PropRef, value: Value) {
        let mut changed = false;
        self.props.update(|p| changed = p.set(key.clone(), value));
        if !changed {
            return;
        }
        let listened = self
            .bindings
            .with_value(|b| is_input_of(b, &key, BindingLocation::Server));
        if listened {
            self.dispatch(Some(key));
        }
    }

    /// Seeds initial values declared in a component tree and queues an
    /// update for each server input seen for the first time.
    pub fn seed(&self, component: &Component) {
        let watched: BTreeSet<PropRef> = self
            .bindings
            .with_value(|b| server_inputs(b))
            .into_iter()
            .collect();
        let mut seeded = Vec::new();
        self.props
            .update(|p| seeded = p.seed_from_component(component, &watched));
        for key in seeded {
            self.dispatch(Some(key));
        }
    }

    /// Queues an update; `None` fires every server binding (page load).
    pub fn dispatch(&self, changed: Option<PropRef>) {
        self.pending.update_value(|q| q.push_back(changed));
        if self.in_flight.get_value() {
            return;
        }
        self.in_flight.set_value(true);

        let store = *self;
        spawn_local(async move {
            loop {
                let mut next = None;
                store.pending.update_value(|q| next = q.pop_front());
                let Some(changed) = next else { break };
                store.send(changed).await;
            }
            store.in_flight.set_value(false);
        });
    }

    async fn send(&self, changed: Option<PropRef>) {
        let request = UpdateRequest {
            changed,
            inputs: self
                .bindings
                .with_value(|b| self.props.with_untracked(|p| p.snapshot(b))),
        };
        let session_id = self.session_id.get_value();

        match api::post_update(&session_id, &request).await {
            Ok(Some(response)) => {
                self.error.set(None);
                self.props.update(|p| p.apply(&response));
                // Outputs may carry new components with their own inputs
                for output in &response.outputs {
                    if let Ok(component) = serde_json::from_value::<Component>(output.value.clone())
                    {
                        self.seed(&component);
                    }
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("update failed: {}", e);
                self.error.set(Some(e));
            }
        }
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}
