pub mod png;

pub use self::png::encode_rgb_png;
