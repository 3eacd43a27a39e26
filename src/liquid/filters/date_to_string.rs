use std::fmt;
use liquid_core::{Runtime, ValueView, Value, Result as LiquidResult};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::FilterReflection;
use chrono::{NaiveDate, NaiveDateTime};

/// Render a post date as `30 Jan 2015`
#[derive(Debug, Clone)]
pub struct DateToStringFilter;

impl fmt::Display for DateToStringFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "date_to_string")
    }
}

/// Format a descriptor date string, or hand it back untouched
pub fn format_display_date(date_str: &str) -> String {
    let trimmed = date_str.trim();

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        });

    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => date_str.to_string(),
    }
}

impl liquid_core::Filter for DateToStringFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let date_str = input.to_kstr().to_string();
        Ok(Value::scalar(format_display_date(&date_str)))
    }
}

/// Parse filter factory for date_to_string
#[derive(Debug, Clone)]
pub struct DateToStringFilterParser;

impl FilterReflection for DateToStringFilterParser {
    fn name(&self) -> &str {
        "date_to_string"
    }

    fn description(&self) -> &str {
        "Formats a YYYY-MM-DD date as %d %b %Y"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for DateToStringFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(DateToStringFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(format_display_date("2015-01-30"), "30 Jan 2015");
    }

    #[test]
    fn test_date_with_time() {
        assert_eq!(format_display_date("2015-02-15 10:30:00"), "15 Feb 2015");
    }

    #[test]
    fn test_unparsable_passes_through() {
        assert_eq!(format_display_date("last tuesday"), "last tuesday");
    }
}
