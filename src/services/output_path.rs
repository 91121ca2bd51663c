use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "_obamafied";

/// `<dir>/<stem>_obamafied.png` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{OUTPUT_SUFFIX}.png");
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input),
    }
}
