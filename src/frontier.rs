//! Pending-work containers for iterative traversal.
//!
//! A [`Frontier`] holds vertices that have been discovered but not yet
//! expanded. The removal discipline is the only thing that differs between
//! depth-first ([`Stack`], LIFO) and breadth-first ([`Queue`], FIFO) search.

use std::collections::VecDeque;

pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    /// The item the next [`Frontier::pop`] would return.
    fn peek(&self) -> Option<&T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pops everything, top first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..).rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            items: VecDeque::with_capacity(capacity),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drain_all<F: Frontier<u32>>(mut frontier: F, input: &[u32]) -> Vec<u32> {
        for i in input {
            frontier.push(*i);
        }
        assert_eq!(frontier.len(), input.len());
        let mut out = Vec::new();
        while let Some(x) = frontier.pop() {
            out.push(x);
        }
        assert!(frontier.is_empty());
        out
    }

    #[test]
    fn stack_is_lifo() {
        assert_eq!(drain_all(Stack::new(), &[1, 2, 3]), vec![3, 2, 1]);
    }

    #[test]
    fn queue_is_fifo() {
        assert_eq!(drain_all(Queue::new(), &[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn peek_matches_next_pop() {
        let mut stack = Stack::with_capacity(2);
        let mut queue = Queue::with_capacity(2);
        assert_eq!(stack.peek(), None);
        for i in [7, 8] {
            stack.push(i);
            queue.push(i);
        }
        assert_eq!(stack.peek(), Some(&8));
        assert_eq!(queue.peek(), Some(&7));
        assert_eq!(stack.drain().collect::<Vec<_>>(), vec![8, 7]);
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut queue: Queue<u8> = Queue::default();
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
