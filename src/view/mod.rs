pub mod report;

pub use report::render_text;
