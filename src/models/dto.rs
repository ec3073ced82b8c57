use shareit_models::{
    BookingDto, CommentDto, ItemDto, ItemRequestDto, LongItemDto, ShortBookingDto, UserDto,
};

use crate::db::{Booking, BookingDetails, Comment, Item, ItemRequest, User};

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
        }
    }
}

impl From<Booking> for ShortBookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            start: booking.start_at,
            end: booking.end_at,
            status: booking.status,
            booker_id: booking.booker_id,
        }
    }
}

impl From<BookingDetails> for BookingDto {
    fn from(details: BookingDetails) -> Self {
        Self {
            id: details.booking.id,
            start: details.booking.start_at,
            end: details.booking.end_at,
            status: details.booking.status,
            item: details.item.into(),
            booker: details.booker.into(),
        }
    }
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            author_name: comment.author_name,
            created: comment.created_at,
        }
    }
}

/// Item request with the items created against it.
pub fn item_request_dto(request: ItemRequest, items: Vec<Item>) -> ItemRequestDto {
    ItemRequestDto {
        id: request.id,
        description: request.description,
        items: items.into_iter().map(ItemDto::from).collect(),
        created: request.created_at,
    }
}

/// Item page view. Pass `None` bookings for anyone but the owner.
pub fn long_item_dto(
    item: Item,
    last_booking: Option<Booking>,
    next_booking: Option<Booking>,
    comments: Vec<Comment>,
) -> LongItemDto {
    LongItemDto {
        id: item.id,
        name: item.name,
        description: item.description,
        available: item.available,
        request_id: item.request_id,
        last_booking: last_booking.map(ShortBookingDto::from),
        next_booking: next_booking.map(ShortBookingDto::from),
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }
}
