mod static_context;
mod static_context_builder;

pub use static_context::StaticContext;
pub use static_context_builder::StaticContextBuilder;
