use std::path::{Path, PathBuf};

use liquid::model::Value;
use liquid::Object;

use crate::utils::error::PixifyResult;
use crate::utils::fs;

/// A blog post listed in the descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    root_directory: PathBuf,
    pub path: String,
    pub title: String,
    /// Display only; posts are never sorted by it.
    pub date: String,
}

impl BlogPost {
    pub fn new<P: AsRef<Path>>(root_directory: P, path: &str, title: &str, date: &str) -> Self {
        BlogPost {
            root_directory: root_directory.as_ref().to_path_buf(),
            path: path.to_string(),
            title: title.to_string(),
            date: date.to_string(),
        }
    }

    /// Site URL of the post, always starting with `/`
    pub fn url(&self) -> String {
        format!("/{}", self.path)
    }

    /// Location of the post body in the source tree
    pub fn source_path(&self) -> PathBuf {
        self.root_directory.join(&self.path)
    }

    /// Raw post body, read from disk on every call.
    ///
    /// There is deliberately no memoization here: the development server
    /// rebuilds on each request and must pick up edits to the file.
    pub fn content(&self) -> PixifyResult<String> {
        fs::read_file(self.source_path())
    }

    /// Liquid view of the post without its body
    pub fn summary_to_liquid(&self) -> Value {
        let mut obj = Object::new();
        obj.insert("path".into(), Value::scalar(self.path.clone()));
        obj.insert("title".into(), Value::scalar(self.title.clone()));
        obj.insert("date".into(), Value::scalar(self.date.clone()));
        obj.insert("url".into(), Value::scalar(self.url()));
        Value::Object(obj)
    }

    /// Liquid view of the post including a fresh read of its body
    pub fn to_liquid(&self) -> PixifyResult<Value> {
        let mut value = self.summary_to_liquid();
        if let Value::Object(obj) = &mut value {
            obj.insert("content".into(), Value::scalar(self.content()?));
        }
        Ok(value)
    }
}
