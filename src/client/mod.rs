//! Client entry point and builder.

mod builder;
mod core;

pub use builder::CatchAllClientBuilder;
pub use core::CatchAllClient;
