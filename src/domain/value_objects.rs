use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 資料ID - カタログ内で資料を識別する
///
/// 呼び出し側が採番する。カタログへの追加時に一意性は検証しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 会員ID - 会員集約の内部ID
///
/// 会員名は重複し得るため、管理者が会員を特定するときはこのIDを使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 資料の種別
///
/// 資料の生成時に決まり、以後変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Novel,
    Magazine,
    TextBook,
}

impl ItemType {
    /// 表示用のラベル
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Novel => "Novel",
            ItemType::Magazine => "Magazine",
            ItemType::TextBook => "TextBook",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_value() {
        let id = ItemId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(ItemId::from(42), id);
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new(7).to_string(), "7");
    }

    // ID value objects のテスト
    #[test]
    fn test_member_id_creation() {
        let id1 = MemberId::new();
        let id2 = MemberId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_member_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = MemberId::from_uuid(uuid);
        assert_eq!(id.value(), uuid);
    }

    #[test]
    fn test_item_type_label() {
        assert_eq!(ItemType::Novel.to_string(), "Novel");
        assert_eq!(ItemType::Magazine.to_string(), "Magazine");
        assert_eq!(ItemType::TextBook.to_string(), "TextBook");
    }
}
