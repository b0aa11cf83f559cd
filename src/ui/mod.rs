pub mod ddl_pane;
pub mod highlight;
pub mod theme;

pub use ddl_pane::DdlPane;
pub use highlight::SqlHighlighter;
