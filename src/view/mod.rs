//! Browsing state and the view-model handed to presentation layers.

pub mod coordinator;
pub mod memo;
pub mod view_model;

pub use coordinator::{ViewCoordinator, DEFAULT_PAGE_SIZE};
pub use memo::Memo;
pub use view_model::{
    build_rows, format_discount, format_page_window, format_price, CellView, OfferView, RowView,
    ViewModel,
};
