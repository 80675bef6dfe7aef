use crate::shared::entity::{Entity, UserId};
use serde::{Deserialize, Serialize};

/// One persisted row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nombre: String,
    pub apellido: String,
    pub edad: i32,
}

impl User {
    /// A user without an id yet. The store assigns one on insert.
    pub fn new(nombre: String, apellido: String, edad: i32) -> Self {
        Self {
            id: Default::default(),
            nombre,
            apellido,
            edad,
        }
    }
}

impl Entity for User {
    fn id(&self) -> UserId {
        self.id
    }
}
