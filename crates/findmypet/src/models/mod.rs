//! Resource payloads exchanged with the backend.
//!
//! Rust field names are English; the wire names are the backend's
//! Portuguese keys.

mod animal;
mod lookup;
mod page;
mod person;
mod report;

pub use animal::{Animal, AnimalInput};
pub use lookup::{Location, Sensor};
pub(crate) use page::ListBody;
pub use page::{Page, PageRequest};
pub use person::{NewPerson, Person, PersonKind, Role};
pub use report::{Report, ReportInput};
