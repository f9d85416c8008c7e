mod constants;
pub mod applier;
pub mod engine;
pub mod error;
pub mod record;
pub mod resolver;
pub mod roles;
pub mod scope;
pub mod source;
pub mod variables;
