pub mod output_path;
pub mod preprocess;
pub mod renderer;

pub use output_path::{default_output_path, resolve_output_path};
pub use preprocess::{median_blur, posterize, preprocess, to_luma};
pub use renderer::{RenderOutcome, RenderService};
