use liquid::model::Value as LiquidValue;
use liquid::Object;
use serde_yaml::Value as YamlValue;

const DELIMITER: &str = "---";

/// Header block at the top of a template
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    /// Template the rendered body is wrapped in
    pub layout: Option<String>,
    /// Every other key, exposed to templates as `page`
    pub variables: Object,
}

/// Split a template into its front matter and body.
///
/// A template without a leading `---` line has empty front matter and is
/// returned unchanged.
pub fn extract_front_matter(content: &str) -> Result<(FrontMatter, String), String> {
    let Some(rest) = strip_opening_delimiter(content) else {
        return Ok((FrontMatter::default(), content.to_string()));
    };

    let (yaml, body) = split_at_closing_delimiter(rest)
        .ok_or_else(|| "front matter is not closed by a '---' line".to_string())?;

    let front_matter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        let value: YamlValue =
            serde_yaml::from_str(yaml).map_err(|e| format!("Error parsing front matter: {}", e))?;
        front_matter_from_yaml(value)?
    };

    Ok((front_matter, body.to_string()))
}

fn strip_opening_delimiter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn split_at_closing_delimiter(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn front_matter_from_yaml(value: YamlValue) -> Result<FrontMatter, String> {
    let map = match value {
        YamlValue::Mapping(map) => map,
        _ => return Err("front matter must be a mapping".to_string()),
    };

    let mut front_matter = FrontMatter::default();
    for (key, value) in map {
        let key = match key {
            YamlValue::String(key) => key,
            other => format!("{:?}", other),
        };
        if key == "layout" {
            match value {
                YamlValue::String(name) => front_matter.layout = Some(name),
                YamlValue::Null => {}
                _ => return Err("'layout' must be a template name".to_string()),
            }
        } else {
            front_matter.variables.insert(key.into(), yaml_to_liquid(value));
        }
    }
    Ok(front_matter)
}

/// Convert YAML value to Liquid value
pub fn yaml_to_liquid(yaml: YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                LiquidValue::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => LiquidValue::scalar(s),
        YamlValue::Sequence(seq) => LiquidValue::Array(seq.into_iter().map(yaml_to_liquid).collect()),
        YamlValue::Mapping(map) => {
            let mut obj = Object::new();
            for (k, v) in map {
                let key = match k {
                    YamlValue::String(key) => key,
                    other => format!("{:?}", other),
                };
                obj.insert(key.into(), yaml_to_liquid(v));
            }
            LiquidValue::Object(obj)
        }
        YamlValue::Tagged(tagged) => yaml_to_liquid(tagged.value),
    }
}
