use liquid::model::Value;
use liquid::Object;

/// A standalone document rendered from its own template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub template: String,
    pub url: String,
}

impl Page {
    /// A page whose output URL is its template name
    pub fn new(template: &str) -> Self {
        Page {
            template: template.to_string(),
            url: template.to_string(),
        }
    }

    /// Override the output URL
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn to_liquid(&self) -> Value {
        let mut obj = Object::new();
        obj.insert("template".into(), Value::scalar(self.template.clone()));
        obj.insert("url".into(), Value::scalar(format!("/{}", crate::utils::path::normalize_url(&self.url))));
        Value::Object(obj)
    }
}
