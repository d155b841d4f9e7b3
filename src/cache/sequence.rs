//! Sequence Module
//!
//! Doubly-linked list of owned values for O(1) push-front and pop-back.
//!
//! Nodes live in a slot arena and link to each other by slot index, so no
//! handle ever points at memory the sequence does not own.

// == Node ==
/// A slot-resident list node.
#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Sequence ==
/// Ordered list of values where:
/// - Front (head) = most recently pushed
/// - Back (tail) = least recently pushed
#[derive(Debug)]
pub struct Sequence<T> {
    /// Slot arena; `None` marks a free slot
    nodes: Vec<Option<Node<T>>>,
    /// Newest node
    head: Option<usize>,
    /// Oldest node
    tail: Option<usize>,
    /// Slots available for reuse
    free_list: Vec<usize>,
    /// Number of live nodes
    len: usize,
}

impl<T> Sequence<T> {
    // == Constructor ==
    /// Creates an empty sequence with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    // == Push Front ==
    /// Links `value` in as the newest node and returns its slot index.
    pub fn push_front(&mut self, value: T) -> usize {
        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.len += 1;
        idx
    }

    // == Pop Back ==
    /// Unlinks and returns the oldest value, or None if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail_idx = self.tail?;
        let node = self.nodes[tail_idx].take()?;

        self.tail = node.prev;
        match node.prev {
            Some(prev_idx) => {
                if let Some(prev) = &mut self.nodes[prev_idx] {
                    prev.next = None;
                }
            }
            None => self.head = None,
        }

        self.free_list.push(tail_idx);
        self.len -= 1;
        Some(node.value)
    }

    // == Accessors ==
    /// Slot index of the newest node.
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Slot index of the oldest node.
    #[allow(dead_code)]
    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Value stored at `idx`, if that slot is live.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.nodes.get(idx)?.as_ref().map(|node| &node.value)
    }

    /// Slot index following `idx` towards the back.
    pub fn next_of(&self, idx: usize) -> Option<usize> {
        self.nodes.get(idx)?.as_ref()?.next
    }

    /// Oldest value without removing it.
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail?)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Values ==
    /// Walks values from front to back.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let idx = cursor?;
            let node = self.nodes[idx].as_ref()?;
            cursor = node.next;
            Some(&node.value)
        })
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}
