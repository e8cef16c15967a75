pub mod card;
pub mod page;

pub use card::*;
pub use page::*;
