pub mod album;
pub mod event;
pub mod image;
pub mod order;
pub mod product;
pub mod profile;
pub mod tenant;

pub use album::{Album, AlbumStatus};
pub use event::Event;
pub use image::Image;
pub use order::{Order, OrderStatus};
pub use product::{Product, ProductType};
pub use profile::{Profile, UserRole};
pub use tenant::{SubscriptionPlan, SubscriptionStatus, Tenant};
