use liquid::model::Value;
use liquid::Object;

use crate::content::PaginationStyle;

/// Position of one listing page within the whole listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    /// 0-based
    pub index: usize,
    pub total_pages: usize,
    pub style: PaginationStyle,
}

impl Paginator {
    pub fn new(index: usize, total_pages: usize, style: PaginationStyle) -> Self {
        Paginator { index, total_pages, style }
    }

    /// Output URL of this listing page
    pub fn url(&self) -> String {
        self.style.listing_url(self.index)
    }

    pub fn previous_link(&self) -> Option<String> {
        if self.index == 0 {
            None
        } else {
            Some(self.style.listing_link(self.index - 1))
        }
    }

    pub fn next_link(&self) -> Option<String> {
        if self.index + 1 >= self.total_pages {
            None
        } else {
            Some(self.style.listing_link(self.index + 1))
        }
    }

    /// The `paginator` object bound in listing templates
    pub fn to_liquid(&self) -> Value {
        let link = |l: Option<String>| l.map(Value::scalar).unwrap_or(Value::Nil);

        let mut obj = Object::new();
        obj.insert("page".into(), Value::scalar((self.index + 1) as i64));
        obj.insert("total_pages".into(), Value::scalar(self.total_pages as i64));
        obj.insert("previous_url".into(), link(self.previous_link()));
        obj.insert("next_url".into(), link(self.next_link()));
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_no_previous() {
        let p = Paginator::new(0, 3, PaginationStyle::Path);
        assert_eq!(p.url(), "index.html");
        assert_eq!(p.previous_link(), None);
        assert_eq!(p.next_link().as_deref(), Some("/page/2/"));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let p = Paginator::new(2, 3, PaginationStyle::Query);
        assert_eq!(p.url(), "?page=3");
        assert_eq!(p.previous_link().as_deref(), Some("/?page=2"));
        assert_eq!(p.next_link(), None);
    }

    #[test]
    fn test_liquid_object() {
        let p = Paginator::new(1, 2, PaginationStyle::Path);
        match p.to_liquid() {
            Value::Object(obj) => {
                assert_eq!(obj.get("page"), Some(&Value::scalar(2i64)));
                assert_eq!(obj.get("total_pages"), Some(&Value::scalar(2i64)));
                assert_eq!(obj.get("previous_url"), Some(&Value::scalar("/")));
                assert_eq!(obj.get("next_url"), Some(&Value::Nil));
            }
            other => panic!("expected object, got {:?}", other),
        }
    }
}
