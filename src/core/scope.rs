use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Global style scope of the rendering root: a property bag keyed by
/// variable name. Rendering components read these keys from their style
/// declarations; the applier is the only writer.
pub trait StyleScope {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

/// Lets a scope be shared with a spawned applier task while tests or the
/// host keep a handle for reads.
impl<S: StyleScope> StyleScope for Arc<Mutex<S>> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.lock().expect("style scope lock poisoned").set_property(name, value)
    }

    fn remove_property(&mut self, name: &str) {
        self.lock().expect("style scope lock poisoned").remove_property(name)
    }
}

/// In-process scope used by the demo binary and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryScope {
    props: BTreeMap<String, String>,
}

impl MemoryScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl StyleScope for MemoryScope {
    fn set_property(&mut self, name: &str, value: &str) {
        self.props.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.props.remove(name);
    }
}
