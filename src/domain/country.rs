use serde::{Deserialize, Serialize};

use crate::domain::types::CountryId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}
