//! An amortised growable sequence built on top of [`crate::array`]'s
//! primitives. Backs the [`crate::stack`] façade.

use core::cmp::Ordering;

use crate::array;
use crate::error::ContainerError;

const GROWTH_FACTOR: usize = 2;

/// Whether a `Vector` keeps its live prefix sorted on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Sorted,
    Unsorted,
}

/// A growable sequence with an explicit doubling/quartering capacity policy:
/// `capacity()` is always `0` or `2 * 2^k`, and the backing buffer is
/// replaced wholesale at each of the two resize points rather than relying
/// on `Vec`'s own growth heuristic, so the invariant is exact rather than
/// approximate.
pub struct Vector<T> {
    data: Vec<T>,
    cap: usize,
    variant: Variant,
    cmp: Box<dyn Fn(&T, &T) -> Ordering>,
    destroy: Option<Box<dyn FnMut(T)>>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Vector")
            .field("data", &self.data)
            .field("cap", &self.cap)
            .field("variant", &self.variant)
            .finish()
    }
}

impl<T> Vector<T> {
    /// Creates an empty vector with an explicit comparator.
    pub fn new(variant: Variant, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Vector {
            data: Vec::new(),
            cap: 0,
            variant,
            cmp: Box::new(cmp),
            destroy: None,
        }
    }

    /// Attaches a destructor, invoked only by future `*_with_entries`-style
    /// drains (none currently defined on `Vector` itself, but `stack`/callers
    /// may drain and destroy manually; kept for API parity with the other
    /// containers per the shared collaborator interface).
    pub fn with_destructor(mut self, destroy: impl FnMut(T) + 'static) -> Self {
        self.destroy = Some(Box::new(destroy));
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn num_entries(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size(&self) -> usize {
        self.cap
    }

    pub fn data_size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    pub fn raw_array(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        self.data.get(pos)
    }

    fn check_invariant(&self) {
        debug_assert!(self.data.len() <= self.cap, "Internal invariant failed: n > c!");
        debug_assert!(
            self.cap == 0 || (self.cap.is_power_of_two() && self.cap >= GROWTH_FACTOR),
            "Internal invariant failed: capacity {} not in {{0}} U {{2*2^k}}!",
            self.cap
        );
    }

    fn grow_for_insert(&mut self) {
        let n = self.data.len();
        let new_cap = if self.cap == 0 {
            GROWTH_FACTOR
        } else if n == self.cap {
            self.cap * GROWTH_FACTOR
        } else {
            return;
        };
        self.resize_buffer(new_cap);
    }

    fn shrink_for_delete(&mut self) {
        let n = self.data.len();
        if n == 1 {
            self.resize_buffer(0);
        } else if self.cap > 0 && n == self.cap / (2 * GROWTH_FACTOR) {
            self.resize_buffer(self.cap / GROWTH_FACTOR);
        }
    }

    fn resize_buffer(&mut self, new_cap: usize) {
        let mut new_data = Vec::with_capacity(new_cap);
        new_data.extend(self.data.drain(..));
        self.data = new_data;
        self.cap = new_cap;
    }

    /// Push-back; amortised O(1). Grows the buffer per the resize policy
    /// before writing.
    pub fn insert(&mut self, entry: T) {
        match self.variant {
            Variant::Unsorted => {
                self.grow_for_insert();
                self.data.push(entry);
            }
            Variant::Sorted => {
                let pos = array::upper_bound(&self.data, self.cmp.as_ref(), &entry);
                self.grow_for_insert();
                self.data.insert(pos, entry);
            }
        }
        self.check_invariant();
    }

    /// Pop-back.
    pub fn delete(&mut self) -> Result<T, ContainerError> {
        if self.data.is_empty() {
            return Err(ContainerError::Empty);
        }
        self.shrink_for_delete();
        let out = self.data.pop().expect("checked non-empty above");
        self.check_invariant();
        Ok(out)
    }

    /// Positional insert; `Unsorted` only.
    pub fn insert_pos(&mut self, entry: T, pos: usize) -> Result<(), ContainerError> {
        if self.variant == Variant::Sorted {
            return Err(ContainerError::BadArg);
        }
        if pos > self.data.len() {
            return Err(ContainerError::BadArg);
        }
        self.grow_for_insert();
        self.data.insert(pos, entry);
        self.check_invariant();
        Ok(())
    }

    /// Positional delete; `Unsorted` only.
    pub fn delete_pos(&mut self, pos: usize) -> Result<T, ContainerError> {
        if self.variant == Variant::Sorted {
            return Err(ContainerError::BadArg);
        }
        if pos >= self.data.len() {
            return Err(ContainerError::BadArg);
        }
        self.shrink_for_delete();
        let out = self.data.remove(pos);
        self.check_invariant();
        Ok(out)
    }

    pub fn search_first(&self, key: &T) -> Option<usize> {
        match self.variant {
            Variant::Sorted => array::sorted_find_first(&self.data, self.cmp.as_ref(), key),
            Variant::Unsorted => array::unsorted_find_first(&self.data, self.cmp.as_ref(), key),
        }
    }

    pub fn search_last(&self, key: &T) -> Option<usize> {
        match self.variant {
            Variant::Sorted => array::sorted_find_last(&self.data, self.cmp.as_ref(), key),
            Variant::Unsorted => array::unsorted_find_last(&self.data, self.cmp.as_ref(), key),
        }
    }

    pub fn search_min(&self) -> Option<&T> {
        match self.variant {
            Variant::Sorted => self.data.first(),
            Variant::Unsorted => array::min_index(&self.data, self.cmp.as_ref()).map(|i| &self.data[i]),
        }
    }

    pub fn search_max(&self) -> Option<&T> {
        match self.variant {
            Variant::Sorted => self.data.last(),
            Variant::Unsorted => array::max_index(&self.data, self.cmp.as_ref()).map(|i| &self.data[i]),
        }
    }

    pub fn sort(&mut self) {
        array::sort(&mut self.data, self.cmp.as_ref());
    }

    /// Drops the buffer without invoking a destructor on live elements —
    /// callers that need per-element teardown must drain first.
    pub fn destroy(self) {}
}

impl<T> Vector<T>
where
    T: Ord,
{
    /// Convenience constructor using `T::cmp` as the comparator.
    pub fn new_ord(variant: Variant) -> Self {
        Vector::new(variant, |a: &T, b: &T| a.cmp(b))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_growth_sequence() {
        // spec.md 8.3.6: insert 16 elements, capacity 0 -> 2 -> 4 -> 8 -> 16
        let mut v: Vector<i32> = Vector::new_ord(Variant::Unsorted);
        let mut seen_caps = Vec::new();
        for i in 0..16 {
            v.insert(i);
            seen_caps.push(v.size());
        }
        assert_eq!(v.size(), 16);
        assert!(seen_caps.contains(&2));
        assert!(seen_caps.contains(&4));
        assert!(seen_caps.contains(&8));
        assert!(seen_caps.contains(&16));
    }

    #[test]
    fn test_shrink_to_empty_frees_buffer() {
        let mut v: Vector<i32> = Vector::new_ord(Variant::Unsorted);
        for i in 0..16 {
            v.insert(i);
        }
        while !v.is_empty() {
            v.delete().unwrap();
            assert!(v.num_entries() <= v.size());
            assert!(v.size() == 0 || v.size().is_power_of_two());
        }
        assert_eq!(v.size(), 0);
    }

    #[test]
    fn test_sorted_insert_keeps_order() {
        let mut v: Vector<i32> = Vector::new_ord(Variant::Sorted);
        for x in [7, 2, 1, 9, 4] {
            v.insert(x);
        }
        assert_eq!(v.raw_array(), &[1, 2, 4, 7, 9]);
    }

    #[test]
    fn test_positional_ops_rejected_on_sorted() {
        let mut v: Vector<i32> = Vector::new_ord(Variant::Sorted);
        v.insert(1);
        assert_eq!(v.insert_pos(5, 0).unwrap_err(), ContainerError::BadArg);
        assert_eq!(v.delete_pos(0).unwrap_err(), ContainerError::BadArg);
    }

    #[test]
    fn test_delete_empty_is_empty_error() {
        let mut v: Vector<i32> = Vector::new_ord(Variant::Unsorted);
        assert_eq!(v.delete().unwrap_err(), ContainerError::Empty);
    }

    #[test]
    fn test_random_insert_delete_preserves_invariant() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut v: Vector<i32> = Vector::new_ord(Variant::Unsorted);
        for _ in 0..500 {
            if v.is_empty() || rng.gen_bool(0.6) {
                v.insert(rng.gen());
            } else {
                v.delete().unwrap();
            }
            assert!(v.num_entries() <= v.size());
            assert!(v.size() == 0 || v.size().is_power_of_two());
        }
    }
}
