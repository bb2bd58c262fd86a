/// Red or black, per the usual invariants (RB1-RB5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// An arena-resident tree node. `left`/`right`/`parent` are arena indices;
/// `None` plays the sentinel's role (the "nil child"/"nil parent of root")
/// rather than a real allocated slot — see `RbTree::color_of`.
pub struct Node<T> {
    pub payload: T,
    pub color: Color,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl<T> Node<T> {
    pub fn new(payload: T) -> Self {
        Node {
            payload,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }
}
