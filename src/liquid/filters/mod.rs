mod date_to_string;

use liquid::ParserBuilder;

/// Register custom filters for use in Liquid templates
pub fn register_filters(parser_builder: ParserBuilder) -> ParserBuilder {
    parser_builder.filter(date_to_string::DateToStringFilterParser)
}
