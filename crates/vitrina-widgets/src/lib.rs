//! Widget implementations for the Vitrina catalog UI.

pub mod card_list;
pub mod column;
pub mod select;
pub mod text;
pub mod toggle;

pub use card_list::{truncate_description, CardItem, CardList, MAX_DESCRIPTION_CHARS};
pub use column::Column;
pub use select::{Select, SelectOption, Selection, SelectionChanged};
pub use text::Text;
pub use toggle::{Toggle, ToggleChanged};
