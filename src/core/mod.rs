pub mod paths;
pub mod slug;
pub mod store;
