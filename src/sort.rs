//! The sort side of the harness: the three-way comparator probe handed to
//! a sort routine, the routine interface itself, and the default merge
//! implementation that relinks list nodes in place.

use std::cmp::Ordering;

use crate::list::{Key, NodeList};

/// Three-way ordering over node keys.
pub trait Comparator {
    fn compare(&mut self, a: Key, b: Key) -> Ordering;
}

/// The probe: an ordering test plus a call counter, handed to the sort as
/// one object so every comparison the algorithm performs is observed
/// exactly once.
///
/// The counter starts at zero; the driver creates a fresh probe immediately
/// before each timed sort and reads [`calls`](Self::calls) immediately
/// after. The increment is the only overhead inside the timed window.
#[derive(Debug, Clone)]
pub struct CountingComparator<F> {
    order: F,
    calls: u64,
}

impl<F: FnMut(Key, Key) -> Ordering> CountingComparator<F> {
    pub fn new(order: F) -> Self {
        Self { order, calls: 0 }
    }

    /// Number of comparisons observed so far.
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl<F: FnMut(Key, Key) -> Ordering> Comparator for CountingComparator<F> {
    fn compare(&mut self, a: Key, b: Key) -> Ordering {
        self.calls += 1;
        (self.order)(a, b)
    }
}

/// A routine that reorders a doubly linked list in place given a three-way
/// comparator.
///
/// Contract: on return the list is non-decreasing per `cmp`, circular and
/// complete again, and made of exactly the nodes it was given, relinked
/// rather than reallocated.
pub trait SortRoutine {
    /// Short name for logs and bench labels.
    fn name(&self) -> &'static str;

    fn sort(&self, list: &mut NodeList, cmp: &mut dyn Comparator);
}

/// Default sort routine: top-down merge over the forward links.
///
/// The circular list already reads as a sentinel-terminated chain when
/// walked via `next` from the head, so the merge works on forward links
/// alone; the backward links and the cycle are rebuilt in one final pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortRoutine for MergeSort {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn sort(&self, list: &mut NodeList, cmp: &mut dyn Comparator) {
        let head = list.head();
        if head == NodeList::SENTINEL || list.next(head) == NodeList::SENTINEL {
            return;
        }
        let sorted = merge_sort(list, head, cmp);
        close_cycle(list, sorted);
    }
}

/// Sorts the chain starting at `head` (a real node) and returns the new
/// first node. Chains are terminated by the sentinel id.
fn merge_sort(list: &mut NodeList, head: usize, cmp: &mut dyn Comparator) -> usize {
    if list.next(head) == NodeList::SENTINEL {
        return head;
    }
    let second = split(list, head);
    let a = merge_sort(list, head, cmp);
    let b = merge_sort(list, second, cmp);
    merge(list, a, b, cmp)
}

/// Cuts the chain after its midpoint and returns the second half's head.
fn split(list: &mut NodeList, head: usize) -> usize {
    let mut slow = head;
    let mut fast = list.next(head);
    while fast != NodeList::SENTINEL {
        fast = list.next(fast);
        if fast != NodeList::SENTINEL {
            slow = list.next(slow);
            fast = list.next(fast);
        }
    }
    let second = list.next(slow);
    list.set_next(slow, NodeList::SENTINEL);
    second
}

/// Merges two non-empty sorted chains; ties take from `a`, keeping the
/// merge stable.
fn merge(list: &mut NodeList, mut a: usize, mut b: usize, cmp: &mut dyn Comparator) -> usize {
    let mut head = NodeList::SENTINEL;
    let mut tail = NodeList::SENTINEL;
    while a != NodeList::SENTINEL && b != NodeList::SENTINEL {
        let pick = if cmp.compare(list.key(a), list.key(b)) != Ordering::Greater {
            let id = a;
            a = list.next(a);
            id
        } else {
            let id = b;
            b = list.next(b);
            id
        };
        if tail == NodeList::SENTINEL {
            head = pick;
        } else {
            list.set_next(tail, pick);
        }
        tail = pick;
    }
    let rest = if a != NodeList::SENTINEL { a } else { b };
    list.set_next(tail, rest);
    head
}

/// Rebuilds every backward link along the sorted chain and closes the
/// circle through the sentinel.
fn close_cycle(list: &mut NodeList, head: usize) {
    list.set_next(NodeList::SENTINEL, head);
    let mut prev = NodeList::SENTINEL;
    let mut at = head;
    while at != NodeList::SENTINEL {
        list.set_prev(at, prev);
        prev = at;
        at = list.next(at);
    }
    list.set_prev(NodeList::SENTINEL, prev);
}
