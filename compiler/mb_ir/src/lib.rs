//! Shared vocabulary of the models generator.
//!
//! - [`TypeModelGraph`]: the content types of one run, in an arena
//! - [`ContentTypeModel`] / [`PropertyModel`]: graph nodes, annotated in
//!   place by the builder
//! - [`ClrType`]: property value types, including forward references to
//!   model types by [`ContentTypeId`]
//! - [`Config`]: the explicit configuration threaded through build and write

mod clr_type;
mod config;
mod graph;
mod id;
mod kind;
mod model;
mod pattern;
pub mod testing;
mod variations;

pub use clr_type::{split_full_name, strip_arity, ClrType, ClrTypeParseError};
pub use config::{
    BaseClassRule, Config, NamingStrategy, PropertyNameMode, DEFAULT_MODEL_INFOS_CLASS,
    DEFAULT_NAMESPACE,
};
pub use graph::{Ancestors, TypeModelGraph};
pub use id::{ContentTypeId, PropertyRef};
pub use kind::ContentKind;
pub use model::{ContentTypeDescriptor, ContentTypeModel, PropertyDescriptor, PropertyModel};
pub use pattern::AliasPattern;
pub use variations::Variations;
