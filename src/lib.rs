/*!
A small toolbox of generic in-memory containers: a fixed-capacity array of
primitives, an amortised growable sequence, a sorted singly linked list, a
self-balancing red-black tree, and a LIFO stack façade.

* Safe: `#![forbid(unsafe_code)]`.
* Generic: every container works over any `T`, given an explicit comparator
  (or `T: Ord` via the `new_ord` convenience constructors).
* Recursion-free where it matters: traversal and teardown are iterative, so
  a large tree or list can't blow the call stack tearing itself down.

### About

Five containers, each a thin, independent module:

* [`array`] - functions over plain slices: binary search variants, linear
  search variants, positional insert/delete, in-place sort.
* [`vector`] - [`vector::Vector`], a growable sequence with an explicit
  doubling/quartering capacity policy.
* [`list`] - [`list::SortedList`], a singly linked list kept in
  non-decreasing order.
* [`tree`] - [`tree::RbTree`], a red-black tree (RB1-RB5 invariants,
  arena-indexed nodes, iterative fixups and traversal).
* [`stack`] - [`stack::Stack`], a LIFO façade over [`vector::Vector`].

### Collaborator interface

Every container that needs to compare elements takes an explicit comparator
closure at construction (`new(cmp)`), plus a `new_ord()` convenience
constructor when `T: Ord`. A container that owns elements past its own
lifetime (destruction, not just drop) can be given a destructor closure via
`with_destructor(..)`, invoked only by the `*_with_entries`/`*_with_entry`
operations that document it - plain `destroy`/`Drop` never call it.

### Error handling

All fallible operations return [`error::ContainerError`], a single
crate-wide enum rather than a per-container error type, since the failure
modes (bad argument, allocation failure, empty, duplicate, absent) are
shared across containers.
*/

#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod list;
pub mod stack;
pub mod tree;
pub mod vector;

pub use crate::error::ContainerError;
pub use crate::list::SortedList;
pub use crate::stack::Stack;
pub use crate::tree::RbTree;
pub use crate::vector::{Variant, Vector};
