//! Service layer for ShareIt.
//!
//! Business rules over the database layer:
//! - User (user directory)
//! - Item (item catalog and comments)
//! - ItemRequest (item-request board)
//! - Booking (booking ledger)

mod booking;
mod item;
mod item_request;
mod user;

pub use booking::BookingService;
pub use item::ItemService;
pub use item_request::ItemRequestService;
pub use user::UserService;
