use std::sync::Arc;

use crate::domain::{CatalogItem, ItemId, LibraryItem, Member, MemberId};

/// カタログ一覧の見出し
pub const CATALOG_HEADER: &str = "--- Library Catalog ---";

/// 図書館の管理者
///
/// カタログ（資料）と登録会員を所有する。どちらも追加のみで削除操作はない。
/// 会員の貸出リストはカタログの資料を指すハンドルを持つだけで、
/// 資料の寿命はカタログに紐づく。
///
/// 検索はすべて線形探索で、見つからない場合は`None`を返す。
#[derive(Debug, Default)]
pub struct LibraryManager {
    catalog: Vec<CatalogItem>,
    members: Vec<Member>,
}

impl LibraryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 資料をカタログに追加する
    ///
    /// IDの重複チェックは行わない。追加した資料のハンドルを返す。
    pub fn add_item(&mut self, item: LibraryItem) -> CatalogItem {
        tracing::debug!(
            item_id = %item.id(),
            item_type = %item.item_type(),
            title = item.title(),
            "item added to catalog"
        );

        let item = Arc::new(item);
        self.catalog.push(Arc::clone(&item));
        item
    }

    /// 会員を登録する
    ///
    /// 名前の重複チェックは行わない。
    pub fn register_member(&mut self, member: Member) -> MemberId {
        let member_id = member.id();
        tracing::debug!(%member_id, name = member.name(), "member registered");

        self.members.push(member);
        member_id
    }

    /// カタログの全資料の概要（追加順）
    pub fn show_catalog(&self) -> Vec<String> {
        self.catalog.iter().map(|item| item.describe()).collect()
    }

    /// IDで資料を探す（最初に一致したもの）
    pub fn find_item_by_id(&self, id: ItemId) -> Option<CatalogItem> {
        let found = self.catalog.iter().find(|item| item.id() == id).cloned();
        if found.is_none() {
            tracing::debug!(item_id = %id, "item not found in catalog");
        }
        found
    }

    /// 名前で会員を探す（完全一致、大文字小文字を区別）
    pub fn find_member_by_name(&self, name: &str) -> Option<&Member> {
        let found = self.members.iter().find(|member| member.name() == name);
        if found.is_none() {
            tracing::debug!(name, "member not found");
        }
        found
    }

    pub fn find_member_by_name_mut(&mut self, name: &str) -> Option<&mut Member> {
        let found = self.members.iter_mut().find(|member| member.name() == name);
        if found.is_none() {
            tracing::debug!(name, "member not found");
        }
        found
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id() == id)
    }

    pub fn member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.id() == id)
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}
