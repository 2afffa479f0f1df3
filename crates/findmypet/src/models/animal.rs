//! Animal records.

use serde::{Deserialize, Serialize};

/// Fields sent when creating or updating an animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalInput {
    #[serde(rename = "nomeAnimal")]
    pub name: String,
    #[serde(rename = "especieAnimal")]
    pub species: String,
    /// Size class, e.g. `pequeno`, `médio`, `grande`.
    #[serde(rename = "porte")]
    pub size: String,
    /// Estimated age in years.
    #[serde(rename = "idadeEstimada", skip_serializing_if = "Option::is_none", default)]
    pub estimated_age: Option<u32>,
    /// Kind of animal, e.g. `cachorro` or `gato`.
    #[serde(rename = "tipoAnimal")]
    pub kind: String,
}

/// An animal as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    #[serde(rename = "idAnimal", default)]
    pub id: Option<i64>,
    #[serde(rename = "nomeAnimal", default)]
    pub name: Option<String>,
    #[serde(rename = "especieAnimal", default)]
    pub species: Option<String>,
    #[serde(rename = "porte", default)]
    pub size: Option<String>,
    #[serde(rename = "idadeEstimada", default)]
    pub estimated_age: Option<u32>,
    #[serde(rename = "tipoAnimal", default)]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_uses_wire_names() {
        let input = AnimalInput {
            name: "Thor".to_string(),
            species: "Canis familiaris".to_string(),
            size: "médio".to_string(),
            estimated_age: Some(3),
            kind: "cachorro".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "nomeAnimal": "Thor",
                "especieAnimal": "Canis familiaris",
                "porte": "médio",
                "idadeEstimada": 3,
                "tipoAnimal": "cachorro"
            })
        );
    }

    #[test]
    fn unknown_age_is_omitted() {
        let input = AnimalInput {
            name: "Luna".to_string(),
            species: "Felis catus".to_string(),
            size: "pequeno".to_string(),
            estimated_age: None,
            kind: "gato".to_string(),
        };
        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("idadeEstimada").is_none());
    }
}
