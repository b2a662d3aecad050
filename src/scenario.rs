//! 貸出シナリオ
//!
//! カタログと会員を用意し、決められた順序で貸出・返却を行って結果を書き出す。

use std::fmt::Display;
use std::io::Write;

use thiserror::Error;

use crate::application::catalog::{CATALOG_HEADER, LibraryManager};
use crate::domain::{ItemId, LibraryItem, Member, MemberId};

/// シナリオ実行のエラー
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// 出力先への書き込みに失敗した
    #[error("Failed to write scenario output")]
    Io(#[from] std::io::Error),

    /// シナリオで操作する会員が登録されていない
    #[error("Member not registered: {0}")]
    MemberNotRegistered(String),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// 成功・拒否のどちらもメッセージとして表示する
fn message<T: Display, E: Display>(outcome: std::result::Result<T, E>) -> String {
    match outcome {
        Ok(done) => done.to_string(),
        Err(rejected) => {
            tracing::debug!(reason = %rejected, "request rejected");
            rejected.to_string()
        }
    }
}

fn member_mut<'a>(
    library: &'a mut LibraryManager,
    id: MemberId,
    name: &str,
) -> Result<&'a mut Member> {
    library
        .member_mut(id)
        .ok_or_else(|| ScenarioError::MemberNotRegistered(name.to_string()))
}

/// シナリオを実行し、結果を`out`に1行ずつ書き出す
///
/// 処理フロー：
/// 1. 資料3件を追加し、AliceとBobを登録
/// 2. カタログを表示
/// 3. AliceがID 1〜3を順に借りる（見つからないIDは飛ばす）
/// 4. 新しい資料（Dune）を追加し、Aliceが借りようとする（上限で拒否）
/// 5. Aliceの貸出リストを表示
/// 6. Dune（借りていない）とID 2を返却
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    tracing::info!("library scenario started");

    let mut library = LibraryManager::new();

    library.add_item(LibraryItem::novel(1, "The Hobbit", "J.R.R. Tolkien"));
    library.add_item(LibraryItem::magazine(2, "National Geographic", 202));
    library.add_item(LibraryItem::text_book(
        3,
        "Introduction to Algorithms",
        "MIT Press",
    ));

    let alice = Member::new("Alice");
    let alice_name = alice.name().to_string();
    let alice_id = library.register_member(alice);
    library.register_member(Member::new("Bob"));

    writeln!(out, "{CATALOG_HEADER}")?;
    for line in library.show_catalog() {
        writeln!(out, "{line}")?;
    }

    for id in 1..=3 {
        if let Some(item) = library.find_item_by_id(ItemId::new(id)) {
            let outcome = member_mut(&mut library, alice_id, &alice_name)?.borrow_item(item);
            writeln!(out, "{}", message(outcome))?;
        }
    }

    let dune = library.add_item(LibraryItem::novel(4, "Dune", "Frank Herbert"));
    let outcome = member_mut(&mut library, alice_id, &alice_name)?.borrow_item(dune.clone());
    writeln!(out, "{}", message(outcome))?;

    let alice = library
        .member(alice_id)
        .ok_or_else(|| ScenarioError::MemberNotRegistered(alice_name.clone()))?;
    writeln!(out)?;
    writeln!(out, "{} currently borrowed:", alice.name())?;
    for item in alice.borrowed_items() {
        writeln!(out, " {}", item.describe())?;
    }

    let outcome = member_mut(&mut library, alice_id, &alice_name)?.return_item(&dune);
    writeln!(out, "{}", message(outcome))?;
    if let Some(returned) = library.find_item_by_id(ItemId::new(2)) {
        let outcome = member_mut(&mut library, alice_id, &alice_name)?.return_item(&returned);
        writeln!(out, "{}", message(outcome))?;
    }

    tracing::info!("library scenario finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_renders_both_outcomes() {
        let ok: std::result::Result<&str, &str> = Ok("done");
        let err: std::result::Result<&str, &str> = Err("rejected");
        assert_eq!(message(ok), "done");
        assert_eq!(message(err), "rejected");
    }

    #[test]
    fn test_member_mut_reports_unregistered_member() {
        let mut library = LibraryManager::new();
        let result = member_mut(&mut library, MemberId::new(), "Carol");
        assert!(matches!(
            result,
            Err(ScenarioError::MemberNotRegistered(name)) if name == "Carol"
        ));
    }

    /// 書き込みが常に失敗する出力先
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "output closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_reports_write_failure_as_io_error() {
        let result = run(&mut FailingWriter);

        match result {
            Err(ScenarioError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_run_writes_catalog_header_first() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(), Some(CATALOG_HEADER));
    }
}
