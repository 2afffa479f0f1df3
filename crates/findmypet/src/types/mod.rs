//! Validated value types.
//!
//! Each type checks its input on construction, so a value in hand is known
//! to be well formed.

mod api_url;
pub mod cpf;
mod email;
mod phone;

pub use api_url::ApiUrl;
pub use cpf::Cpf;
pub use email::Email;
pub use phone::Phone;
