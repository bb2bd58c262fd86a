//! A sorted singly linked list.
//!
//! The source's guard-node technique (splice a transient node carrying the
//! search key at the tail so the traversal loop never has to null-check)
//! is replaced by the idiomatic ownership-typed equivalent Design Note 9
//! sanctions: a `&mut Option<Box<Node<T>>>` cursor with one boundary
//! predicate, where `None` plays the guard's role. No transient node is
//! ever spliced into owned storage, and no explicit `tail` pointer is kept
//! — insertion position and list end are both discovered by the same
//! traversal, so a separate tail link would only duplicate state.

use core::cmp::Ordering;

use crate::error::ContainerError;

struct Node<T> {
    payload: T,
    next: Option<Box<Node<T>>>,
}

/// An ordered singly linked list, non-decreasing by `cmp`.
pub struct SortedList<T> {
    head: Option<Box<Node<T>>>,
    length: usize,
    cmp: Box<dyn Fn(&T, &T) -> Ordering>,
    destroy: Option<Box<dyn FnMut(T)>>,
}

impl<T> SortedList<T> {
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        SortedList {
            head: None,
            length: 0,
            cmp: Box::new(cmp),
            destroy: None,
        }
    }

    pub fn with_destructor(mut self, destroy: impl FnMut(T) + 'static) -> Self {
        self.destroy = Some(Box::new(destroy));
        self
    }

    pub fn num_entries(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn data_size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    /// Inserts `entry` after any existing equal keys (stable w.r.t. ties):
    /// walks past everything `< entry`, then everything `== entry`, and
    /// splices before the first node `> entry` (or at the end).
    pub fn insert(&mut self, entry: T) {
        let cmp = &self.cmp;
        let mut cursor = &mut self.head;
        loop {
            let advance = match cursor.as_deref() {
                Some(node) => cmp(&node.payload, &entry) != Ordering::Greater,
                None => false,
            };
            if !advance {
                break;
            }
            cursor = match cursor {
                Some(node) => &mut node.next,
                None => unreachable!("checked Some above"),
            };
        }
        let tail = cursor.take();
        *cursor = Some(Box::new(Node { payload: entry, next: tail }));
        self.length += 1;
    }

    /// Deletes the first node equal to `entry`. `Absent` if none found.
    pub fn delete(&mut self, entry: &T) -> Result<(), ContainerError> {
        self.delete_first_impl(entry, false)
    }

    /// As [`SortedList::delete`], but runs the destructor on the removed payload.
    pub fn delete_with_entry(&mut self, entry: &T) -> Result<(), ContainerError> {
        self.delete_first_impl(entry, true)
    }

    fn delete_first_impl(&mut self, entry: &T, call_destroy: bool) -> Result<(), ContainerError> {
        let mut destroy = self.destroy.take();
        let result = {
            let cmp = &self.cmp;
            let mut cursor = &mut self.head;
            loop {
                let action = match cursor.as_deref() {
                    Some(node) => cmp(&node.payload, entry),
                    None => break Err(ContainerError::Absent),
                };
                match action {
                    Ordering::Less => {
                        cursor = match cursor {
                            Some(node) => &mut node.next,
                            None => unreachable!("checked Some above"),
                        };
                    }
                    Ordering::Equal => {
                        let mut node = cursor.take().expect("checked Some above");
                        *cursor = node.next.take();
                        if call_destroy {
                            if let Some(d) = destroy.as_mut() {
                                d(node.payload);
                            }
                        }
                        break Ok(());
                    }
                    Ordering::Greater => break Err(ContainerError::Absent),
                }
            }
        };
        if result.is_ok() {
            self.length -= 1;
        }
        self.destroy = destroy;
        result
    }

    /// Deletes every node equal to `entry`. Returns the count deleted;
    /// `Empty` if the list was already empty.
    pub fn delete_all(&mut self, entry: &T) -> Result<usize, ContainerError> {
        self.delete_all_impl(entry, false)
    }

    /// As [`SortedList::delete_all`], but runs the destructor on each removed payload.
    pub fn delete_all_with_entry(&mut self, entry: &T) -> Result<usize, ContainerError> {
        self.delete_all_impl(entry, true)
    }

    fn delete_all_impl(&mut self, entry: &T, call_destroy: bool) -> Result<usize, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        let mut destroy = self.destroy.take();
        let mut removed = 0usize;
        {
            let cmp = &self.cmp;
            let mut cursor = &mut self.head;
            loop {
                let action = match cursor.as_deref() {
                    Some(node) => cmp(&node.payload, entry),
                    None => break,
                };
                match action {
                    Ordering::Less => {
                        cursor = match cursor {
                            Some(node) => &mut node.next,
                            None => unreachable!("checked Some above"),
                        };
                    }
                    Ordering::Equal => {
                        let mut node = cursor.take().expect("checked Some above");
                        *cursor = node.next.take();
                        removed += 1;
                        if call_destroy {
                            if let Some(d) = destroy.as_mut() {
                                d(node.payload);
                            }
                        }
                    }
                    Ordering::Greater => break,
                }
            }
        }
        self.length -= removed;
        self.destroy = destroy;
        Ok(removed)
    }

    /// Returns the payload of the first node equal to `entry`.
    pub fn search(&self, entry: &T) -> Option<&T> {
        let mut node_ref = self.head.as_deref();
        while let Some(node) = node_ref {
            match (self.cmp)(&node.payload, entry) {
                Ordering::Less => node_ref = node.next.as_deref(),
                Ordering::Equal => return Some(&node.payload),
                Ordering::Greater => return None,
            }
        }
        None
    }
}

impl<T: Clone> SortedList<T> {
    /// Materialises the list's payloads, in order, into a `Vec`.
    pub fn to_array(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.length);
        let mut node_ref = self.head.as_deref();
        while let Some(node) = node_ref {
            out.push(node.payload.clone());
            node_ref = node.next.as_deref();
        }
        out
    }
}

impl<T: Ord> SortedList<T> {
    pub fn new_ord() -> Self {
        SortedList::new(|a: &T, b: &T| a.cmp(b))
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_insert_order_and_to_array() {
        // spec.md 8.3.2
        let mut list: SortedList<i32> = SortedList::new_ord();
        for x in [7, 2, 1, 1, 4, 3, 3, 5, 9, 0] {
            list.insert(x);
        }
        assert_eq!(list.to_array(), vec![0, 1, 1, 2, 3, 3, 4, 5, 7, 9]);

        let deleted = list.delete_all(&1).unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(list.to_array(), vec![0, 2, 3, 3, 4, 5, 7, 9]);
    }

    #[test]
    fn test_delete_absent() {
        let mut list: SortedList<i32> = SortedList::new_ord();
        list.insert(1);
        assert_eq!(list.delete(&2).unwrap_err(), ContainerError::Absent);
    }

    #[test]
    fn test_delete_all_on_empty_is_empty_error() {
        let mut list: SortedList<i32> = SortedList::new_ord();
        assert_eq!(list.delete_all(&1).unwrap_err(), ContainerError::Empty);
    }

    #[test]
    fn test_search() {
        let mut list: SortedList<i32> = SortedList::new_ord();
        for x in [3, 1, 2] {
            list.insert(x);
        }
        assert_eq!(list.search(&2), Some(&2));
        assert_eq!(list.search(&5), None);
    }

    #[test]
    fn test_delete_with_entry_invokes_destructor_once() {
        let destroyed = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = destroyed.clone();
        let mut list: SortedList<i32> = SortedList::new_ord().with_destructor(move |v| sink.borrow_mut().push(v));
        list.insert(5);
        list.insert(6);
        list.delete_with_entry(&5).unwrap();
        assert_eq!(*destroyed.borrow(), vec![5]);
        assert_eq!(list.num_entries(), 1);
    }

    #[test]
    fn test_array_round_trip() {
        let mut list: SortedList<i32> = SortedList::new_ord();
        for x in [5, 1, 3, 2, 4] {
            list.insert(x);
        }
        let arr = list.to_array();
        let mut rebuilt: SortedList<i32> = SortedList::new_ord();
        for x in arr {
            rebuilt.insert(x);
        }
        assert_eq!(rebuilt.to_array(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_length_consistency() {
        let mut list: SortedList<i32> = SortedList::new_ord();
        for x in [3, 1, 4, 1, 5, 9, 2, 6] {
            list.insert(x);
        }
        assert_eq!(list.num_entries(), list.to_array().len());
    }
}
