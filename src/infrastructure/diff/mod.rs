mod word_diff_renderer;

pub use word_diff_renderer::WordDiffRenderer;
