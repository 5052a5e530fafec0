use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Renderable tree sent to the client.
///
/// The server only builds, stores and forwards these; the client decides how
/// each `kind` is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    pub fn text(text: impl Into<String>) -> Self {
        Component::Text(text.into())
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Element(el) => el.id.as_deref(),
            Component::Text(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Component::Element(el) => Some(el),
            Component::Text(_) => None,
        }
    }

    /// Depth-first search for the element carrying `id`.
    pub fn find(&self, id: &str) -> Option<&Element> {
        let el = self.as_element()?;
        if el.id.as_deref() == Some(id) {
            return Some(el);
        }
        el.children.iter().find_map(|child| child.find(id))
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            props: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn get_prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }
}

impl From<Element> for Component {
    fn from(el: Element) -> Self {
        Component::Element(el)
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::Text(text.to_string())
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::Text(text)
    }
}

impl From<Component> for Value {
    fn from(component: Component) -> Self {
        component.to_value()
    }
}
