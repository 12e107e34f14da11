//! Content editing core: the bundled default document, the pure mutators,
//! display views and the canonical/working document store.

mod defaults;
mod mutators;
mod stamp;
mod store;
mod text;
mod view;

pub use defaults::*;
pub use mutators::*;
pub use stamp::*;
pub use store::*;
pub use text::*;
pub use view::*;
