//! Lookup rows used to fill report forms.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A monitored location. Attributes other than the id are kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "idLocal", default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A sensor installed at a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "idSensor", default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Location {
    /// A human label: `nome`, then `descricao`, then the id.
    pub fn label(&self) -> String {
        label_of(&self.attributes, self.id)
    }
}

impl Sensor {
    pub fn label(&self) -> String {
        label_of(&self.attributes, self.id)
    }
}

fn label_of(attributes: &Map<String, Value>, id: Option<i64>) -> String {
    ["nome", "descricao", "tipoSensor"]
        .iter()
        .find_map(|key| attributes.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| id.map(|id| format!("#{id}")))
        .unwrap_or_default()
}
