//! Registries - tag-indexed behaviour and presentation tables.
//!
//! Both are built once from a fixed list and injected where needed; the
//! shared `TagTable` keeps their construction rules identical.

mod handler_registry;
mod renderer_registry;

pub use handler_registry::{HandledAnswer, HandlerRegistry};
pub use renderer_registry::{ComponentName, RenderProps, RendererEntry, RendererRegistry};
