//! JavaScript (CommonJS) syntax builders.
//!
//! Each builder implements [`Renderable`](crudgen_codegen::builder::Renderable)
//! and is laid out by a [`CodeBuilder`](crudgen_codegen::builder::CodeBuilder).

mod fns;
mod handlers;
mod literals;
mod objects;
mod requires;

pub use fns::{AsyncIife, Fn};
pub use handlers::RouteHandler;
pub use literals::{string_literal, template_text};
pub use objects::JsObject;
pub use requires::Require;
