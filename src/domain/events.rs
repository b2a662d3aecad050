use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ItemId, MemberId};

/// イベント：資料が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBorrowed {
    pub item_id: ItemId,
    pub title: String,
    pub member_id: MemberId,
    pub member_name: String,
}

impl fmt::Display for ItemBorrowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has been added to {}'s list of borrowed books.",
            self.title, self.member_name
        )
    }
}

/// イベント：資料が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReturned {
    pub item_id: ItemId,
    pub title: String,
    pub member_id: MemberId,
}

impl fmt::Display for ItemReturned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has been successfully returned.", self.title)
    }
}
