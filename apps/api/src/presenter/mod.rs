// Presenter: read-only views of the current Plan.
// Tab views, the print document and the JSON export all render from the same Plan.

pub mod export;
pub mod handlers;
pub mod print;
pub mod view;
