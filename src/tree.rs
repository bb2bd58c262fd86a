//! A memory-efficient red-black tree: self-balancing, arena-indexed,
//! recursion-free.
//!
//! Nodes live in a [`NodeArena`], addressed by index rather than pointer —
//! same memory-efficiency goal as a scapegoat tree's arena, but this
//! balancing scheme needs an upward-walking fixup after delete, so each
//! node also carries an explicit `parent` index. The sentinel (the
//! universal "nil child", colored black by definition) is never allocated:
//! `None` plays its role everywhere a nil child or nil parent would appear,
//! and `delete_fixup`'s "double-black" position is tracked via two local
//! variables (`x`, `x_parent`) instead of a transient write through a
//! shared sentinel's parent pointer.

use core::cmp::Ordering;

use smallvec::SmallVec;

mod arena;
pub use arena::NodeArena;

mod node;
pub use node::{Color, Node};


use crate::error::ContainerError;

/// Scratch stack size before an in-order traversal spills from the stack
/// to the heap; any balanced tree of reasonable size never gets close.
type IdxVec = SmallVec<[usize; 64]>;

/// A self-balancing ordered search tree over opaque elements.
pub struct RbTree<T> {
    arena: NodeArena<T>,
    root: Option<usize>,
    size: usize,
    cmp: Box<dyn Fn(&T, &T) -> Ordering>,
    destroy: Option<Box<dyn FnMut(T)>>,
}

impl<T> RbTree<T> {
    /// Constructor, taking an explicit comparator.
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        RbTree {
            arena: NodeArena::new(),
            root: None,
            size: 0,
            cmp: Box::new(cmp),
            destroy: None,
        }
    }

    /// Attaches a destructor, invoked only by [`RbTree::destroy_with_entries`].
    pub fn with_destructor(mut self, destroy: impl FnMut(T) + 'static) -> Self {
        self.destroy = Some(Box::new(destroy));
        self
    }

    pub fn num_entries(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn data_size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    fn color_of(&self, idx: Option<usize>) -> Color {
        match idx {
            Some(i) => self.arena.hard_get(i).color,
            None => Color::Black,
        }
    }

    fn set_color(&mut self, idx: usize, color: Color) {
        self.arena.hard_get_mut(idx).color = color;
    }

    fn find_index(&self, key: &T) -> Option<usize> {
        let mut cur = self.root;
        while let Some(idx) = cur {
            match (self.cmp)(key, &self.arena.hard_get(idx).payload) {
                Ordering::Less => cur = self.arena.hard_get(idx).left,
                Ordering::Greater => cur = self.arena.hard_get(idx).right,
                Ordering::Equal => return Some(idx),
            }
        }
        None
    }

    /// BST search by key.
    pub fn search(&self, key: &T) -> Option<&T> {
        self.find_index(key).map(|idx| &self.arena.hard_get(idx).payload)
    }

    pub fn key_exists(&self, key: &T) -> bool {
        self.find_index(key).is_some()
    }

    /// Inserts `payload`, rejecting exact (`cmp == Equal`) duplicates.
    pub fn insert(&mut self, payload: T) -> Result<(), ContainerError> {
        let mut parent = None;
        let mut cur = self.root;
        let mut insert_right = false;

        while let Some(idx) = cur {
            parent = Some(idx);
            match (self.cmp)(&payload, &self.arena.hard_get(idx).payload) {
                Ordering::Less => {
                    cur = self.arena.hard_get(idx).left;
                    insert_right = false;
                }
                Ordering::Greater => {
                    cur = self.arena.hard_get(idx).right;
                    insert_right = true;
                }
                Ordering::Equal => return Err(ContainerError::Duplicate),
            }
        }

        let mut node = Node::new(payload);
        node.parent = parent;
        let z = self.arena.add(node);

        match parent {
            Some(p) => {
                if insert_right {
                    self.arena.hard_get_mut(p).right = Some(z);
                } else {
                    self.arena.hard_get_mut(p).left = Some(z);
                }
            }
            None => self.root = Some(z),
        }

        self.size += 1;
        self.insert_fixup(z);
        Ok(())
    }

    fn rotate_left(&mut self, x: usize) {
        let y = self
            .arena
            .hard_get(x)
            .right
            .expect("Internal invariant failed: left-rotate requires a right child!");
        let y_left = self.arena.hard_get(y).left;

        self.arena.hard_get_mut(x).right = y_left;
        if let Some(yl) = y_left {
            self.arena.hard_get_mut(yl).parent = Some(x);
        }

        let x_parent = self.arena.hard_get(x).parent;
        self.arena.hard_get_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) => {
                if self.arena.hard_get(p).left == Some(x) {
                    self.arena.hard_get_mut(p).left = Some(y);
                } else {
                    self.arena.hard_get_mut(p).right = Some(y);
                }
            }
        }

        self.arena.hard_get_mut(y).left = Some(x);
        self.arena.hard_get_mut(x).parent = Some(y);
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self
            .arena
            .hard_get(x)
            .left
            .expect("Internal invariant failed: right-rotate requires a left child!");
        let y_right = self.arena.hard_get(y).right;

        self.arena.hard_get_mut(x).left = y_right;
        if let Some(yr) = y_right {
            self.arena.hard_get_mut(yr).parent = Some(x);
        }

        let x_parent = self.arena.hard_get(x).parent;
        self.arena.hard_get_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) => {
                if self.arena.hard_get(p).right == Some(x) {
                    self.arena.hard_get_mut(p).right = Some(y);
                } else {
                    self.arena.hard_get_mut(p).left = Some(y);
                }
            }
        }

        self.arena.hard_get_mut(y).right = Some(x);
        self.arena.hard_get_mut(x).parent = Some(y);
    }

    fn insert_fixup(&mut self, mut z: usize) {
        while let Some(zp) = self.arena.hard_get(z).parent {
            if self.color_of(Some(zp)) != Color::Red {
                break;
            }
            let zpp = self
                .arena
                .hard_get(zp)
                .parent
                .expect("Internal invariant failed: a red node's parent can't be the (black) root!");

            if Some(zp) == self.arena.hard_get(zpp).left {
                let y = self.arena.hard_get(zpp).right;
                if self.color_of(y) == Color::Red {
                    self.set_color(zp, Color::Black);
                    self.set_color(y.expect("red implies allocated"), Color::Black);
                    self.set_color(zpp, Color::Red);
                    z = zpp;
                } else {
                    let mut z_local = z;
                    if Some(z_local) == self.arena.hard_get(zp).right {
                        z_local = zp;
                        self.rotate_left(z_local);
                    }
                    let p = self.arena.hard_get(z_local).parent.unwrap();
                    self.set_color(p, Color::Black);
                    let gp = self.arena.hard_get(p).parent.unwrap();
                    self.set_color(gp, Color::Red);
                    self.rotate_right(gp);
                    z = z_local;
                }
            } else {
                let y = self.arena.hard_get(zpp).left;
                if self.color_of(y) == Color::Red {
                    self.set_color(zp, Color::Black);
                    self.set_color(y.expect("red implies allocated"), Color::Black);
                    self.set_color(zpp, Color::Red);
                    z = zpp;
                } else {
                    let mut z_local = z;
                    if Some(z_local) == self.arena.hard_get(zp).left {
                        z_local = zp;
                        self.rotate_right(z_local);
                    }
                    let p = self.arena.hard_get(z_local).parent.unwrap();
                    self.set_color(p, Color::Black);
                    let gp = self.arena.hard_get(p).parent.unwrap();
                    self.set_color(gp, Color::Red);
                    self.rotate_left(gp);
                    z = z_local;
                }
            }
        }
        self.set_color(self.root.expect("just inserted a node"), Color::Black);
    }

    fn transplant(&mut self, u: usize, v: Option<usize>) {
        let u_parent = self.arena.hard_get(u).parent;
        match u_parent {
            None => self.root = v,
            Some(p) => {
                if self.arena.hard_get(p).left == Some(u) {
                    self.arena.hard_get_mut(p).left = v;
                } else {
                    self.arena.hard_get_mut(p).right = v;
                }
            }
        }
        if let Some(vi) = v {
            self.arena.hard_get_mut(vi).parent = u_parent;
        }
    }

    /// Removes the node equal to `key`. `Absent` if none found.
    pub fn delete(&mut self, key: &T) -> Result<T, ContainerError> {
        match self.find_index(key) {
            Some(idx) => Ok(self.delete_index(idx, false).expect("key located above")),
            None => Err(ContainerError::Absent),
        }
    }

    /// As [`RbTree::delete`], but runs the destructor on the removed payload
    /// (in addition to returning it).
    pub fn delete_with_entry(&mut self, key: &T) -> Result<(), ContainerError> {
        match self.find_index(key) {
            Some(idx) => {
                self.delete_index(idx, true);
                Ok(())
            }
            None => Err(ContainerError::Absent),
        }
    }

    fn delete_index(&mut self, z: usize, call_destroy: bool) -> Option<T> {
        let mut y = z;
        let mut y_original_color = self.arena.hard_get(y).color;
        let x: Option<usize>;
        let x_parent: Option<usize>;

        let z_left = self.arena.hard_get(z).left;
        let z_right = self.arena.hard_get(z).right;

        match (z_left, z_right) {
            (None, _) => {
                x = z_right;
                x_parent = self.arena.hard_get(z).parent;
                self.transplant(z, z_right);
            }
            (Some(_), None) => {
                x = z_left;
                x_parent = self.arena.hard_get(z).parent;
                self.transplant(z, z_left);
            }
            (Some(_), Some(zr)) => {
                let mut min_idx = zr;
                while let Some(l) = self.arena.hard_get(min_idx).left {
                    min_idx = l;
                }
                y = min_idx;
                y_original_color = self.arena.hard_get(y).color;
                x = self.arena.hard_get(y).right;

                if self.arena.hard_get(y).parent == Some(z) {
                    x_parent = Some(y);
                } else {
                    x_parent = self.arena.hard_get(y).parent;
                    let y_right = self.arena.hard_get(y).right;
                    self.transplant(y, y_right);
                    let zr2 = self.arena.hard_get(z).right;
                    self.arena.hard_get_mut(y).right = zr2;
                    if let Some(zr2i) = zr2 {
                        self.arena.hard_get_mut(zr2i).parent = Some(y);
                    }
                }

                self.transplant(z, Some(y));
                let zl = self.arena.hard_get(z).left;
                self.arena.hard_get_mut(y).left = zl;
                if let Some(zli) = zl {
                    self.arena.hard_get_mut(zli).parent = Some(y);
                }
                let z_color = self.arena.hard_get(z).color;
                self.arena.hard_get_mut(y).color = z_color;
            }
        }

        if y_original_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }

        let removed = self.arena.hard_remove(z);
        self.size -= 1;

        if call_destroy {
            if let Some(d) = self.destroy.as_mut() {
                d(removed.payload);
            }
            None
        } else {
            Some(removed.payload)
        }
    }

    fn delete_fixup(&mut self, mut x: Option<usize>, mut x_parent: Option<usize>) {
        while x != self.root && self.color_of(x) == Color::Black {
            let xp = match x_parent {
                Some(p) => p,
                None => break,
            };

            if x == self.arena.hard_get(xp).left {
                let mut w = self.arena.hard_get(xp).right;
                if self.color_of(w) == Color::Red {
                    self.set_color(w.expect("red implies allocated"), Color::Black);
                    self.set_color(xp, Color::Red);
                    self.rotate_left(xp);
                    w = self.arena.hard_get(xp).right;
                }

                let (wl, wr) = match w {
                    Some(wi) => (self.arena.hard_get(wi).left, self.arena.hard_get(wi).right),
                    None => (None, None),
                };

                if self.color_of(wl) == Color::Black && self.color_of(wr) == Color::Black {
                    if let Some(wi) = w {
                        self.set_color(wi, Color::Red);
                    }
                    x = Some(xp);
                    x_parent = self.arena.hard_get(xp).parent;
                } else {
                    if self.color_of(wr) == Color::Black {
                        if let Some(wli) = wl {
                            self.set_color(wli, Color::Black);
                        }
                        if let Some(wi) = w {
                            self.set_color(wi, Color::Red);
                            self.rotate_right(wi);
                        }
                        w = self.arena.hard_get(xp).right;
                    }
                    let xp_color = self.arena.hard_get(xp).color;
                    if let Some(wi) = w {
                        self.set_color(wi, xp_color);
                        if let Some(wri) = self.arena.hard_get(wi).right {
                            self.set_color(wri, Color::Black);
                        }
                    }
                    self.set_color(xp, Color::Black);
                    self.rotate_left(xp);
                    x = self.root;
                    x_parent = None;
                }
            } else {
                let mut w = self.arena.hard_get(xp).left;
                if self.color_of(w) == Color::Red {
                    self.set_color(w.expect("red implies allocated"), Color::Black);
                    self.set_color(xp, Color::Red);
                    self.rotate_right(xp);
                    w = self.arena.hard_get(xp).left;
                }

                let (wl, wr) = match w {
                    Some(wi) => (self.arena.hard_get(wi).left, self.arena.hard_get(wi).right),
                    None => (None, None),
                };

                if self.color_of(wl) == Color::Black && self.color_of(wr) == Color::Black {
                    if let Some(wi) = w {
                        self.set_color(wi, Color::Red);
                    }
                    x = Some(xp);
                    x_parent = self.arena.hard_get(xp).parent;
                } else {
                    if self.color_of(wl) == Color::Black {
                        if let Some(wri) = wr {
                            self.set_color(wri, Color::Black);
                        }
                        if let Some(wi) = w {
                            self.set_color(wi, Color::Red);
                            self.rotate_left(wi);
                        }
                        w = self.arena.hard_get(xp).left;
                    }
                    let xp_color = self.arena.hard_get(xp).color;
                    if let Some(wi) = w {
                        self.set_color(wi, xp_color);
                        if let Some(wli) = self.arena.hard_get(wi).left {
                            self.set_color(wli, Color::Black);
                        }
                    }
                    self.set_color(xp, Color::Black);
                    self.rotate_right(xp);
                    x = self.root;
                    x_parent = None;
                }
            }
        }

        if let Some(xi) = x {
            self.set_color(xi, Color::Black);
        }
    }

    pub fn min(&self) -> Result<&T, ContainerError> {
        let mut cur = self.root.ok_or(ContainerError::Empty)?;
        while let Some(l) = self.arena.hard_get(cur).left {
            cur = l;
        }
        Ok(&self.arena.hard_get(cur).payload)
    }

    pub fn max(&self) -> Result<&T, ContainerError> {
        let mut cur = self.root.ok_or(ContainerError::Empty)?;
        while let Some(r) = self.arena.hard_get(cur).right {
            cur = r;
        }
        Ok(&self.arena.hard_get(cur).payload)
    }

    fn in_order_indices(&self) -> IdxVec {
        let mut out = IdxVec::new();
        let mut stack = IdxVec::new();
        let mut cur = self.root;
        loop {
            while let Some(idx) = cur {
                stack.push(idx);
                cur = self.arena.hard_get(idx).left;
            }
            match stack.pop() {
                Some(idx) => {
                    out.push(idx);
                    cur = self.arena.hard_get(idx).right;
                }
                None => break,
            }
        }
        out
    }

    /// Longest root-to-leaf path, counted in nodes; `0` when empty.
    pub fn height(&self) -> usize {
        let mut stack: SmallVec<[(usize, usize); 64]> = SmallVec::new();
        if let Some(r) = self.root {
            stack.push((r, 1));
        }
        let mut max_height = 0;
        while let Some((idx, depth)) = stack.pop() {
            if depth > max_height {
                max_height = depth;
            }
            let node = self.arena.hard_get(idx);
            if let Some(l) = node.left {
                stack.push((l, depth + 1));
            }
            if let Some(r) = node.right {
                stack.push((r, depth + 1));
            }
        }
        max_height
    }

    /// In-order dump via `printer`, one call per element.
    pub fn print_with(&self, mut printer: impl FnMut(&T)) {
        for idx in self.in_order_indices() {
            printer(&self.arena.hard_get(idx).payload);
        }
    }

    /// Drops every node without invoking a destructor.
    pub fn destroy(self) {}

    /// Invokes the destructor on every live element, in-order, before
    /// releasing the tree. Materialises the visit order up front (an
    /// explicit, bounded-size traversal) rather than recursing, so teardown
    /// of a very large tree can't exhaust the call stack.
    pub fn destroy_with_entries(mut self, mut destroy: impl FnMut(T)) {
        let indices = self.in_order_indices();
        for idx in indices {
            if let Some(node) = self.arena.remove(idx) {
                destroy(node.payload);
            }
        }
    }
}

impl<T: Clone> RbTree<T> {
    /// Materialises the tree's payloads, in-order, into a `Vec`.
    pub fn to_array(&self) -> Vec<T> {
        self.in_order_indices()
            .into_iter()
            .map(|idx| self.arena.hard_get(idx).payload.clone())
            .collect()
    }
}

impl<T: Ord> RbTree<T> {
    pub fn new_ord() -> Self {
        RbTree::new(|a: &T, b: &T| a.cmp(b))
    }
}
