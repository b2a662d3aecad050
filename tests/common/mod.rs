#![allow(dead_code)]

use library_catalog::application::catalog::LibraryManager;
use library_catalog::domain::{LibraryItem, Member, MemberId};

/// シナリオと同じ3冊を登録したカタログを作成
///
/// 1: The Hobbit（Novel）、2: National Geographic（Magazine）、
/// 3: Introduction to Algorithms（TextBook）
pub fn seeded_library() -> LibraryManager {
    let mut library = LibraryManager::new();
    library.add_item(LibraryItem::novel(1, "The Hobbit", "J.R.R. Tolkien"));
    library.add_item(LibraryItem::magazine(2, "National Geographic", 202));
    library.add_item(LibraryItem::text_book(
        3,
        "Introduction to Algorithms",
        "MIT Press",
    ));
    library
}

/// AliceとBobを登録し、(Alice, Bob)のIDを返す
pub fn register_alice_and_bob(library: &mut LibraryManager) -> (MemberId, MemberId) {
    let alice = library.register_member(Member::new("Alice"));
    let bob = library.register_member(Member::new("Bob"));
    (alice, bob)
}
