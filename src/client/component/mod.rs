pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod searchable_dropdown;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::{RequiresAdmin, RequiresLoggedIn};
pub use searchable_dropdown::{DropdownItem, SearchableDropdown};
