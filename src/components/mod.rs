//! Catalog surfaces.
//!
//! Each component here is one view of the shared controller: it reads the
//! current frame through props and sends interactions back to the
//! controller in context.

mod card_list;
mod category_drawer;
mod category_sidebar;
mod header;

pub use card_list::CardList;
pub use category_drawer::CategoryDrawer;
pub use category_sidebar::CategorySidebar;
pub use header::CatalogHeader;
