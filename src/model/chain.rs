// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Singly-linked chain of tokens.
//!
//! Each node is owned by its predecessor through a `Box`; the chain owns the
//! head. Relinking moves boxes between owners, so no node is ever aliased.
//! Nodes are released by an explicit loop in `Drop`, which keeps long chains
//! from recursing once per node.

use super::Token;
use std::fmt;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) token: Token,
    pub(crate) next: Link,
}

impl Node {
    pub(crate) fn new(token: Token) -> Box<Self> {
        Box::new(Node { token, next: None })
    }
}

pub struct LinkedChain {
    head: Link,
    len: usize,
}

impl LinkedChain {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Build a chain holding `words` in order.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        words.iter().map(|w| Token::new(w.as_ref())).collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, token: Token) {
        let mut node = Node::new(token);
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, token: Token) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Node::new(token));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<Token> {
        self.head.take().map(|node| {
            let Node { token, next } = *node;
            self.head = next;
            self.len -= 1;
            token
        })
    }

    pub fn front(&self) -> Option<&Token> {
        self.head.as_ref().map(|node| &node.token)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<Token> {
        self.iter().cloned().collect()
    }

    /// Detach every node, leaving the chain empty. Used by the relinking sorts.
    pub(crate) fn take_head(&mut self) -> Link {
        self.head.take()
    }

    pub(crate) fn head_mut(&mut self) -> Option<&mut Node> {
        self.head.as_deref_mut()
    }

    /// Install a relinked list of `len` nodes as the chain's contents.
    pub(crate) fn set_head(&mut self, head: Link, len: usize) {
        debug_assert!(self.head.is_none());
        self.head = head;
        self.len = len;
    }
}

impl Default for LinkedChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedChain {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Clone for LinkedChain {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl PartialEq for LinkedChain {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedChain {}

impl fmt::Debug for LinkedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Token> for LinkedChain {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let tokens: Vec<Token> = iter.into_iter().collect();
        let mut chain = LinkedChain::new();
        for token in tokens.into_iter().rev() {
            chain.push_front(token);
        }
        chain
    }
}

impl<'a> IntoIterator for &'a LinkedChain {
    type Item = &'a Token;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the tokens of a chain, head first.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.token
        })
    }
}
