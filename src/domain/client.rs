use serde::{Deserialize, Serialize};

use crate::domain::types::ClientId;

/// Client as stored. Contact fields are carried verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    /// National identification number, unique across clients.
    pub pesel: String,
}
