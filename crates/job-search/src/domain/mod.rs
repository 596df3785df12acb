pub mod builders;
pub mod entities;
pub mod repositories;
pub mod search;
pub mod value_objects;
