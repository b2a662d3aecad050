use thiserror::Error;

use super::member::BORROW_LIMIT;

/// 貸出のエラー
///
/// 例外ではなく、利用者へそのまま表示できる拒否メッセージとして扱う。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorrowError {
    /// 貸出上限（3冊）に達している
    #[error("You cannot borrow more than {} items.", BORROW_LIMIT)]
    LimitReached,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnError {
    /// 会員が借りていない資料
    #[error("{title} was not in the list of borrowed items.")]
    NotBorrowed { title: String },
}
