mod filters;
mod partials;

use std::path::Path;

use liquid::partials::LazyCompiler;
use liquid::{Object, Parser, ParserBuilder};
use log::debug;

use crate::utils::error::{PixifyError, PixifyResult};

use self::partials::SourceTreePartials;

/// Create a Liquid parser whose `include` tag resolves names under `source`
pub fn create_parser(source: &Path) -> PixifyResult<Parser> {
    let parser_builder = filters::register_filters(ParserBuilder::with_stdlib());

    parser_builder
        .partials(LazyCompiler::new(SourceTreePartials::new(source)))
        .build()
        .map_err(|e| PixifyError::render("<parser>", e))
}

/// Parse and render one template body
pub fn parse_liquid(
    template_name: &str,
    content: &str,
    parser: &Parser,
    globals: &Object,
) -> PixifyResult<String> {
    let template = parser
        .parse(content)
        .map_err(|e| PixifyError::render(template_name, e))?;

    template.render(globals).map_err(|e| {
        debug!("Error rendering {}: {}", template_name, e);
        debug!("Available globals: {:?}", globals.keys().collect::<Vec<_>>());
        PixifyError::render(template_name, e)
    })
}
