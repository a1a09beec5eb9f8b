// Resume store: per-user CRUD, publishing, and the public portfolio lookup.
// Documents are stored whole as JSONB; rendering reads them back unchanged.

pub mod handlers;
pub mod slug;
pub mod store;
pub mod validation;
