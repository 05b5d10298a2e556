pub mod console;
pub mod cucumber;
pub mod html;
pub mod markup;
pub mod output;
pub mod report_model;
pub mod template;
