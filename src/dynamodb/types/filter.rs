use itertools::Itertools;
use std::collections::HashMap;

const KEY_PLACEHOLDER: &str = "#key";

/// Scan filter expression with its placeholder bindings.
///
/// The expression string only ever contains placeholders. Attribute names are
/// bound through `names` and compared values through `values`, so request
/// input never reaches the expression text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    expression: String,
    names: HashMap<String, String>,
    values: HashMap<String, String>,
}

impl Filter {
    /// `#key IN (:v0, :v1, ...)` with one value placeholder per entry of
    /// `values`. Duplicates are kept as separate placeholders.
    pub fn any_of(attribute: &str, values: &[String]) -> Self {
        let placeholders: Vec<String> = (0..values.len()).map(|i| format!(":v{i}")).collect();
        let expression = format!("{KEY_PLACEHOLDER} IN ({})", placeholders.iter().join(", "));

        let names = HashMap::from([(KEY_PLACEHOLDER.to_string(), attribute.to_string())]);
        let values = placeholders.into_iter().zip(values.iter().cloned()).collect();

        Self {
            expression,
            names,
            values,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn names(&self) -> &HashMap<String, String> {
        &self.names
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}
