pub mod modal;
pub mod pagination;
pub mod toast;

pub use modal::{Modal, ModalWidth};
pub use pagination::Pagination;
pub use toast::{Toast, ToastAction, ToastItem, ToastKind, ToastQueue};
