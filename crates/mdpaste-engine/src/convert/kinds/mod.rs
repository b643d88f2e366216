pub mod code_fence;
pub mod heading;
pub mod list;

pub use code_fence::{CodeFence, FenceLang};
pub use heading::Heading;
pub use list::ListItem;
