use std::collections::HashMap;
use std::sync::RwLock;

/// Element IDs of the scheduling form.
pub mod element {
    pub const TOPIC: &str = "topic";
    pub const START_TIME: &str = "start_time";
    pub const DURATION: &str = "duration";
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const RESPONSE: &str = "response";
    pub const SCHEDULE_BUTTON: &str = "schedule_button";

    pub const INPUTS: [&str; 4] = [TOPIC, START_TIME, DURATION, ACCESS_TOKEN];
}

/// The page a dispatcher reads its inputs from and writes its status to.
pub trait Page: Send + Sync {
    /// Current value of an input element, or `None` if the page has no such
    /// element.
    fn field_value(&self, id: &str) -> Option<String>;

    /// Replaces the text content of an element.
    fn set_text(&self, id: &str, text: &str);
}

/// In-memory page holding the scheduling form.
#[derive(Debug, Default)]
pub struct FormPage {
    fields: RwLock<HashMap<String, String>>,
    texts: RwLock<HashMap<String, String>>,
}

impl FormPage {
    /// A page with every form input present and empty.
    pub fn new() -> Self {
        let fields = element::INPUTS
            .iter()
            .map(|id| (id.to_string(), String::new()))
            .collect();
        Self {
            fields: RwLock::new(fields),
            texts: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_field(&self, id: &str, value: &str) {
        self.fields
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.to_string(), value.to_string());
    }

    pub fn remove_field(&self, id: &str) {
        self.fields
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(id);
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.texts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
    }
}

impl Page for FormPage {
    fn field_value(&self, id: &str) -> Option<String> {
        self.fields
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
    }

    fn set_text(&self, id: &str, text: &str) {
        self.texts
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.to_string(), text.to_string());
    }
}
