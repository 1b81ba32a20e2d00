//! Parsing of form fields given on the command line

use anyhow::{Context, bail};
use serde_json::{Map, Value};
use validation::{Field, InputKind};

/// Parse `name[:type]=value|rules`
///
/// The rule list follows the last `|`; without one the field has no rules.
/// A field named `password` defaults to the password input type.
pub fn parse_field(arg: &str) -> anyhow::Result<Field> {
    let (head, rest) = arg
        .split_once('=')
        .with_context(|| format!("Field `{arg}` must look like name[:type]=value|rules"))?;

    let (name, kind) = match head.split_once(':') {
        Some((name, kind)) => (name, kind.parse::<InputKind>()?),
        None if head == validation::rules::PASSWORD_FIELD => (head, InputKind::Password),
        None => (head, InputKind::Text),
    };
    if name.is_empty() {
        bail!("Field `{arg}` has no name");
    }

    let (value, rules) = rest.rsplit_once('|').unwrap_or((rest, ""));
    Ok(Field::new(name, kind).with_value(value).with_rules(rules))
}

/// Parse `key=value` pairs into a JSON object
pub fn parse_pairs(pairs: &[String]) -> anyhow::Result<Map<String, Value>> {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .with_context(|| format!("Expected key=value, got `{pair}`"))?;
            Ok((key.to_string(), Value::String(value.to_string())))
        })
        .collect()
}
