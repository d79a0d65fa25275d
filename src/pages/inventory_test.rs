use super::*;

#[test]
fn outgoing_book_leaves_isdn_assignment_to_the_backend() {
    let book = outgoing_book("X", "Y");
    assert_eq!(book.isdn, "");
    assert_eq!(book.title, "X");
    assert_eq!(book.author, "Y");
}
