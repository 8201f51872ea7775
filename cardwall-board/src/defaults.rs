//! Default values for entities created from the board page

/// Title given to a list created with the "Add list" action
pub const NEW_LIST_TITLE: &str = "New list";

/// Title given to a card created with the "Add card" action
pub const NEW_CARD_TITLE: &str = "New card";

/// Content given to a card created with the "Add card" action
pub const NEW_CARD_CONTENT: &str = "Some content";
