mod front_matter;
mod renderer;

pub use renderer::TemplateRenderer;
