use std::sync::Arc;

use super::{BorrowError, CatalogItem, ItemBorrowed, ItemReturned, MemberId, ReturnError};

/// 会員1人あたりの最大貸出冊数
pub const BORROW_LIMIT: usize = 3;

/// 会員集約
///
/// 不変条件：`borrowed_items.len() <= BORROW_LIMIT`
///
/// 貸出リストは`borrow_item`/`return_item`でのみ変更される。
/// 外部には読み取り専用のスライスとしてだけ公開する。
#[derive(Debug)]
pub struct Member {
    id: MemberId,
    name: String,
    // 貸出順。資料の所有者はカタログで、ここはハンドルを持つだけ
    borrowed_items: Vec<CatalogItem>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            borrowed_items: Vec::new(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 現在の貸出リスト（貸出順）
    pub fn borrowed_items(&self) -> &[CatalogItem] {
        &self.borrowed_items
    }

    /// まだ借りられるか
    pub fn can_borrow(&self) -> bool {
        self.borrowed_items.len() < BORROW_LIMIT
    }

    /// この資料（同一のハンドル）を借りているか
    pub fn has_borrowed(&self, item: &CatalogItem) -> bool {
        self.borrowed_items
            .iter()
            .any(|borrowed| Arc::ptr_eq(borrowed, item))
    }

    /// 資料を借りる
    ///
    /// ビジネスルール：
    /// - 貸出上限（3冊）に達していたら拒否し、リストは変更しない
    /// - 同じ資料の重複や他の会員の貸出状況はチェックしない
    pub fn borrow_item(&mut self, item: CatalogItem) -> Result<ItemBorrowed, BorrowError> {
        if !self.can_borrow() {
            return Err(BorrowError::LimitReached);
        }

        let event = ItemBorrowed {
            item_id: item.id(),
            title: item.title().to_string(),
            member_id: self.id,
            member_name: self.name.clone(),
        };
        self.borrowed_items.push(item);

        Ok(event)
    }

    /// 資料を返却する
    ///
    /// 同一のハンドルのうち最初のものを取り除く。
    /// 借りていない資料の場合はリストを変更せずに拒否する。
    pub fn return_item(&mut self, item: &CatalogItem) -> Result<ItemReturned, ReturnError> {
        let Some(position) = self
            .borrowed_items
            .iter()
            .position(|borrowed| Arc::ptr_eq(borrowed, item))
        else {
            return Err(ReturnError::NotBorrowed {
                title: item.title().to_string(),
            });
        };

        let returned = self.borrowed_items.remove(position);

        Ok(ItemReturned {
            item_id: returned.id(),
            title: returned.title().to_string(),
            member_id: self.id,
        })
    }
}
