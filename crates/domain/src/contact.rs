use serde::{Deserialize, Serialize};

/// A contact as entered in the session form. Contacts are never persisted,
/// they only live in the [`ContactList`] of the session that created them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub nombre: String,
    pub apellido: String,
    pub alias: String,
    pub telefono: String,
    pub hobbie: String,
}

/// Ordered session list of contacts. There is no identity column here:
/// edits locate their target by `telefono` equality.
#[derive(Debug, Default)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Replaces the first contact with the same `telefono`. Contacts sharing
    /// a telefono collide here and only the first one is touched. Returns
    /// whether anything was replaced.
    pub fn save(&mut self, contact: Contact) -> bool {
        match self
            .contacts
            .iter()
            .position(|c| c.telefono == contact.telefono)
        {
            Some(index) => {
                self.contacts[index] = contact;
                true
            }
            None => false,
        }
    }

    /// Removes the first contact equal to `contact` in every field. Returns
    /// whether anything was removed.
    pub fn remove(&mut self, contact: &Contact) -> bool {
        match self.contacts.iter().position(|c| c == contact) {
            Some(index) => {
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
