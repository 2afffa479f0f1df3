//! People registered with the service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};
use crate::types::{Cpf, Email, Phone};

/// How a person takes part in rescues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonKind {
    /// Rescues animals in the field.
    #[serde(rename = "Resgatante")]
    Rescuer,
    /// Reports incidents.
    #[serde(rename = "Denunciante")]
    Reporter,
    /// Adopts animals.
    #[serde(rename = "Adotante")]
    Adopter,
}

impl PersonKind {
    /// Wire name used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::Rescuer => "Resgatante",
            PersonKind::Reporter => "Denunciante",
            PersonKind::Adopter => "Adotante",
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonKind {
    type Err = Error;

    /// Accepts the wire names and the English names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resgatante" | "rescuer" => Ok(PersonKind::Rescuer),
            "denunciante" | "reporter" => Ok(PersonKind::Reporter),
            "adotante" | "adopter" => Ok(PersonKind::Adopter),
            _ => Err(InvalidInputError::Other {
                message: format!("unknown person kind '{s}'"),
            }
            .into()),
        }
    }
}

/// Access role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            _ => Err(InvalidInputError::Other {
                message: format!("unknown role '{s}'"),
            }
            .into()),
        }
    }
}

/// Registration payload for `POST /pessoa`.
#[derive(Clone, Serialize)]
pub struct NewPerson {
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: Cpf,
    #[serde(rename = "telefone")]
    pub phone: Phone,
    #[serde(rename = "tipoPessoa")]
    pub kind: PersonKind,
    pub email: Email,
    #[serde(rename = "senha")]
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for NewPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPerson")
            .field("name", &self.name)
            .field("cpf", &self.cpf)
            .field("phone", &self.phone)
            .field("kind", &self.kind)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// A person as returned by the backend.
///
/// Fields are optional because list endpoints return partial projections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "idPessoa", default)]
    pub id: Option<i64>,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "tipoPessoa", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}
