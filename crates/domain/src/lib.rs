mod contact;
mod forms;
mod shared;
mod user;

pub use contact::{Contact, ContactList};
pub use forms::{ContactForm, FormError, UserForm, EDAD_RANGE};
pub use shared::entity::{Entity, InvalidIDError, UserId};
pub use user::User;
