//! Movement domain model and the references it carries.

pub mod common;
pub mod movement;

pub use common::{BankAccountId, ClientId};
pub use movement::{Movement, MovementRequest, DEFAULT_MOVEMENT_TYPE};
