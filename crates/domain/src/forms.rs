use crate::shared::entity::{InvalidIDError, UserId};
use crate::{Contact, User};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Allowed `edad` values at submit time. The store itself accepts any
/// integer, so this is the only place the range is enforced.
pub const EDAD_RANGE: RangeInclusive<i32> = 0..=105;

#[derive(Error, Debug, PartialEq)]
pub enum FormError {
    #[error("field `{0}` must not be blank")]
    Blank(&'static str),
    #[error("edad: {0} must be a whole number between 0 and 105")]
    InvalidEdad(String),
    #[error(transparent)]
    InvalidId(#[from] InvalidIDError),
}

/// Raw text of the user form, validated when the caller submits it.
#[derive(Debug, Default, Clone)]
pub struct UserForm {
    pub nombre: String,
    pub apellido: String,
    pub edad: String,
}

impl UserForm {
    /// Register path: every field is required.
    pub fn validate(&self) -> Result<User, FormError> {
        if self.nombre.trim().is_empty() {
            return Err(FormError::Blank("nombre"));
        }
        if self.apellido.trim().is_empty() {
            return Err(FormError::Blank("apellido"));
        }
        let edad = self.parse_edad()?;
        Ok(User::new(self.nombre.clone(), self.apellido.clone(), edad))
    }

    /// Update path: the target row id comes from its own input field, and
    /// `nombre`/`apellido` are taken as typed, blanks included.
    pub fn validate_update(&self, id: &str) -> Result<User, FormError> {
        let id = id.parse::<UserId>()?;
        let edad = self.parse_edad()?;
        Ok(User {
            id,
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            edad,
        })
    }

    fn parse_edad(&self) -> Result<i32, FormError> {
        self.edad
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|edad| EDAD_RANGE.contains(edad))
            .ok_or_else(|| FormError::InvalidEdad(self.edad.clone()))
    }
}

/// Raw text of the contact form. Only `nombre` and `telefono` are required.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub nombre: String,
    pub apellido: String,
    pub alias: String,
    pub telefono: String,
    pub hobbie: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<Contact, FormError> {
        if self.nombre.trim().is_empty() {
            return Err(FormError::Blank("nombre"));
        }
        if self.telefono.trim().is_empty() {
            return Err(FormError::Blank("telefono"));
        }
        Ok(Contact {
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            alias: self.alias.clone(),
            telefono: self.telefono.clone(),
            hobbie: self.hobbie.clone(),
        })
    }
}
