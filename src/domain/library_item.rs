use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ItemId, ItemType};

/// カタログと貸出リストで共有される資料のハンドル
///
/// 資料の同一性はハンドルの同一性（`Arc::ptr_eq`）で判定する。
/// 同じ内容の資料でも別に生成されたものは別の資料として扱う。
pub type CatalogItem = Arc<LibraryItem>;

/// 種別ごとの固有情報
///
/// 閉じた直和型。種別の追加は`describe`のmatchで網羅性がチェックされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemDetails {
    Novel { author: String },
    Magazine { issue_number: u32 },
    TextBook { publisher: String },
}

impl ItemDetails {
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemDetails::Novel { .. } => ItemType::Novel,
            ItemDetails::Magazine { .. } => ItemType::Magazine,
            ItemDetails::TextBook { .. } => ItemType::TextBook,
        }
    }
}

/// 資料 - カタログの1エントリ
///
/// 不変条件：生成後はID、タイトル、固有情報のいずれも変わらない。
/// フィールドは非公開で、読み取り用のアクセサのみを提供する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    id: ItemId,
    title: String,
    #[serde(flatten)]
    details: ItemDetails,
}

impl LibraryItem {
    /// IDの一意性やタイトルの空チェックは行わない（呼び出し側の責務）
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, details: ItemDetails) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            details,
        }
    }

    pub fn novel(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            title,
            ItemDetails::Novel {
                author: author.into(),
            },
        )
    }

    pub fn magazine(id: impl Into<ItemId>, title: impl Into<String>, issue_number: u32) -> Self {
        Self::new(id, title, ItemDetails::Magazine { issue_number })
    }

    pub fn text_book(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            title,
            ItemDetails::TextBook {
                publisher: publisher.into(),
            },
        )
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn item_type(&self) -> ItemType {
        self.details.item_type()
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn author(&self) -> Option<&str> {
        match &self.details {
            ItemDetails::Novel { author } => Some(author.as_str()),
            _ => None,
        }
    }

    pub fn issue_number(&self) -> Option<u32> {
        match self.details {
            ItemDetails::Magazine { issue_number } => Some(issue_number),
            _ => None,
        }
    }

    pub fn publisher(&self) -> Option<&str> {
        match &self.details {
            ItemDetails::TextBook { publisher } => Some(publisher.as_str()),
            _ => None,
        }
    }

    /// 純粋関数：種別タグ付きの概要を返す
    ///
    /// - Novel: `[Novel] {title} by {author}`
    /// - Magazine: `[Magazine] {title}, Issue #{issue_number}`
    /// - TextBook: `[TextBook] {title} published by {publisher}`
    pub fn describe(&self) -> String {
        let tag = self.item_type();
        match &self.details {
            ItemDetails::Novel { author } => format!("[{tag}] {} by {author}", self.title),
            ItemDetails::Magazine { issue_number } => {
                format!("[{tag}] {}, Issue #{issue_number}", self.title)
            }
            ItemDetails::TextBook { publisher } => {
                format!("[{tag}] {} published by {publisher}", self.title)
            }
        }
    }
}

impl fmt::Display for LibraryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
