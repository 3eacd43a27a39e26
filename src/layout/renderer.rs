use std::path::{Path, PathBuf};

use liquid::model::Value;
use liquid::{Object, Parser};
use log::debug;

use crate::layout::front_matter::{extract_front_matter, FrontMatter};
use crate::liquid::{create_parser, parse_liquid};
use crate::utils::error::{PixifyError, PixifyResult};
use crate::utils::fs;
use crate::utils::path::uri_to_path;

/// Longest allowed chain of `layout:` references
const MAX_LAYOUT_DEPTH: usize = 16;

/// Renders named templates from the source tree into the destination tree
pub struct TemplateRenderer {
    source: PathBuf,
    destination: PathBuf,
    parser: Parser,
    /// Bound as `site` in every render
    site: Object,
}

impl TemplateRenderer {
    /// Create a new renderer with a fresh Liquid parser
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q, site: Object) -> PixifyResult<Self> {
        let source = source.as_ref().to_path_buf();
        let parser = create_parser(&source)?;

        Ok(TemplateRenderer {
            source,
            destination: destination.as_ref().to_path_buf(),
            parser,
            site,
        })
    }

    /// Where a URL lands in the destination tree
    pub fn destination_path(&self, url: &str) -> PathBuf {
        uri_to_path(&self.destination, url)
    }

    /// Render `template_name` with `bindings` and write it at `url`.
    ///
    /// Returns the path of the written file.
    pub fn render(&self, template_name: &str, url: &str, bindings: Object) -> PixifyResult<PathBuf> {
        let dst_path = self.destination_path(url);
        fs::ensure_dirname_exists(&dst_path)?;

        let output = self.render_to_string(template_name, bindings)?;
        fs::write_file(&dst_path, &output)?;

        debug!("Rendered {} -> {}", template_name, dst_path.display());
        Ok(dst_path)
    }

    /// Render a template and its layout chain without touching the destination.
    ///
    /// The template's own front matter is bound as `page`; while a layout
    /// renders, its front matter is bound as `layout`.
    pub fn render_to_string(&self, template_name: &str, bindings: Object) -> PixifyResult<String> {
        let mut globals = bindings;
        globals.insert("site".into(), Value::Object(self.site.clone()));

        let (front_matter, body) = self.load_template(template_name)?;
        globals.insert("page".into(), Value::Object(front_matter.variables));

        let mut output = parse_liquid(template_name, &body, &self.parser, &globals)?;

        let mut chain = vec![template_name.to_string()];
        let mut next_layout = front_matter.layout;
        while let Some(layout_name) = next_layout {
            if chain.contains(&layout_name) {
                return Err(PixifyError::render(
                    template_name,
                    format!("layout cycle: {} -> {}", chain.join(" -> "), layout_name),
                ));
            }
            if chain.len() > MAX_LAYOUT_DEPTH {
                return Err(PixifyError::render(
                    template_name,
                    format!("layout chain deeper than {}", MAX_LAYOUT_DEPTH),
                ));
            }

            let (layout_front_matter, layout_body) = self.load_template(&layout_name)?;
            globals.insert("content".into(), Value::scalar(output));
            globals.insert("layout".into(), Value::Object(layout_front_matter.variables));
            output = parse_liquid(&layout_name, &layout_body, &self.parser, &globals)?;

            chain.push(layout_name);
            next_layout = layout_front_matter.layout;
        }

        Ok(output)
    }

    /// Find a template by name and split off its front matter
    fn load_template(&self, name: &str) -> PixifyResult<(FrontMatter, String)> {
        let path = self.source.join(name);
        if !path.is_file() {
            return Err(PixifyError::TemplateNotFound(name.to_string()));
        }

        let content = fs::read_file(&path)?;
        extract_front_matter(&content).map_err(|e| PixifyError::render(name, e))
    }
}
