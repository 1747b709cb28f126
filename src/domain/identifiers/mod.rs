pub mod action_id;
pub mod resource_name;
pub mod validation;

pub use action_id::{ActionId, DEFAULT_ACTIONS};
pub use resource_name::ResourceName;
