//! Shared type definitions.

pub mod cart;
pub mod id;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem};
pub use id::{ProductId, UserId};
pub use product::Product;
pub use user::{User, UserProfile};
