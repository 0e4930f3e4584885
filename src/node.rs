//! # Node and Tree
//!
//! A [`Node`] is one point in the assembled metadata tree. Ownership runs
//! top-down from the tree root: children are owned (`Rc`), the parent
//! back-reference is a non-owning [`Weak`] handle, matching the "back
//! references from child to parent are weak, ownership is top-down" design
//! note. Interior mutability (`RefCell`) is used because the Assembler and
//! Adjuster both need to mutate a node's `data` after other nodes already
//! hold a clone of the `Node` handle (e.g. when a child was created before
//! its parent finished accumulating data from a later file) — the pipeline
//! itself stays single-threaded and synchronous (see `SPEC_FULL.md` §5), so
//! this never needs to be `Sync`.

use crate::directive::Directive;
use crate::value::Map;
use std::cell::{Ref, RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};

struct Inner {
    name: String,
    data: Map,
    sources: Vec<PathBuf>,
    original_data: Map,
    parent: Option<Weak<RefCell<Inner>>>,
    children: Vec<(String, Node)>,
    root: PathBuf,
    adjusted: bool,
    directive: Directive,
}

/// A handle to one node in the tree. Cloning a `Node` is cheap and shares
/// the same underlying data (`Rc` clone); use [`Node::deep_copy`] for an
/// independent clone.
#[derive(Clone)]
pub struct Node(Rc<RefCell<Inner>>);

impl Node {
    /// Creates a fresh root node rooted at `root_path`.
    pub fn new_root(root_path: &Path) -> Node {
        Node(Rc::new(RefCell::new(Inner {
            name: "/".to_string(),
            data: Map::new(),
            sources: Vec::new(),
            original_data: Map::new(),
            parent: None,
            children: Vec::new(),
            root: root_path.to_path_buf(),
            adjusted: false,
            directive: Directive::default(),
        })))
    }

    /// Absolute, `/`-separated name of this node (`/` for the root).
    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    /// Last path segment of this node's name (its key under its parent).
    pub fn segment(&self) -> String {
        let name = self.0.borrow().name.clone();
        name.rsplit('/').next().unwrap_or_default().to_string()
    }

    pub fn data(&self) -> Ref<'_, Map> {
        Ref::map(self.0.borrow(), |i| &i.data)
    }

    pub fn data_mut(&self) -> RefMut<'_, Map> {
        RefMut::map(self.0.borrow_mut(), |i| &mut i.data)
    }

    pub fn set_data(&self, data: Map) {
        self.0.borrow_mut().data = data;
    }

    pub fn original_data(&self) -> Ref<'_, Map> {
        Ref::map(self.0.borrow(), |i| &i.original_data)
    }

    pub fn original_data_mut(&self) -> RefMut<'_, Map> {
        RefMut::map(self.0.borrow_mut(), |i| &mut i.original_data)
    }

    pub fn set_original_data(&self, data: Map) {
        self.0.borrow_mut().original_data = data;
    }

    pub fn sources(&self) -> Vec<PathBuf> {
        self.0.borrow().sources.clone()
    }

    pub fn push_source(&self, path: PathBuf) {
        let mut inner = self.0.borrow_mut();
        if !inner.sources.contains(&path) {
            inner.sources.push(path);
        }
    }

    pub fn root(&self) -> PathBuf {
        self.0.borrow().root.clone()
    }

    pub fn adjusted(&self) -> bool {
        self.0.borrow().adjusted
    }

    pub fn mark_adjusted(&self) {
        self.0.borrow_mut().adjusted = true;
    }

    pub fn directive(&self) -> Directive {
        self.0.borrow().directive
    }

    pub fn set_directive(&self, directive: Directive) {
        self.0.borrow_mut().directive = directive;
    }

    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.as_ref().and_then(|w| w.upgrade()).map(Node)
    }

    pub fn is_leaf(&self) -> bool {
        self.0.borrow().children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Children in insertion (discovery) order.
    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.iter().map(|(_, n)| n.clone()).collect()
    }

    /// Children sorted lexicographically by segment name.
    pub fn children_sorted(&self) -> Vec<Node> {
        let mut children = self.children();
        children.sort_by(|a, b| a.segment().cmp(&b.segment()));
        children
    }

    pub fn child(&self, segment: &str) -> Option<Node> {
        self.0
            .borrow()
            .children
            .iter()
            .find(|(s, _)| s == segment)
            .map(|(_, n)| n.clone())
    }

    /// Gets the existing child named `segment`, or creates it (inheriting
    /// this node's data unless `inherit: false` is set on the new child
    /// once its own directive is parsed — callers apply that afterward).
    pub fn child_or_create(&self, segment: &str) -> Node {
        if let Some(existing) = self.child(segment) {
            return existing;
        }
        let child_name = if self.name() == "/" {
            format!("/{segment}")
        } else {
            format!("{}/{segment}", self.name())
        };
        let child = Node(Rc::new(RefCell::new(Inner {
            name: child_name,
            data: self.data().clone(),
            sources: Vec::new(),
            original_data: Map::new(),
            parent: Some(Rc::downgrade(&self.0)),
            children: Vec::new(),
            root: self.root(),
            adjusted: false,
            directive: Directive::default(),
        })));
        self.0.borrow_mut().children.push((segment.to_string(), child.clone()));
        child
    }

    /// Resets this node's data to empty, used when its own `/: {inherit:
    /// false}` directive is discovered after the child was already created
    /// (and had inherited its parent's data by default).
    pub fn clear_inherited_data(&self) {
        self.0.borrow_mut().data = Map::new();
    }

    /// Every node in this subtree, pre-order, insertion order.
    pub fn walk(&self) -> Vec<Node> {
        let mut out = vec![self.clone()];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }

    /// Deep, independent clone of this node and its whole subtree: a fresh
    /// `Rc`/`Weak` graph sharing no mutable state with the original.
    pub fn deep_copy(&self) -> Node {
        self.deep_copy_with_parent(None)
    }

    fn deep_copy_with_parent(&self, parent: Option<&Node>) -> Node {
        let inner = self.0.borrow();
        let new_inner = Inner {
            name: inner.name.clone(),
            data: inner.data.clone(),
            sources: inner.sources.clone(),
            original_data: inner.original_data.clone(),
            parent: parent.map(|p| Rc::downgrade(&p.0)),
            children: Vec::new(),
            root: inner.root.clone(),
            adjusted: inner.adjusted,
            directive: inner.directive,
        };
        let children = inner.children.clone();
        drop(inner);
        let new_node = Node(Rc::new(RefCell::new(new_inner)));
        let new_children: Vec<(String, Node)> = children
            .iter()
            .map(|(seg, child)| (seg.clone(), child.deep_copy_with_parent(Some(&new_node))))
            .collect();
        new_node.0.borrow_mut().children = new_children;
        new_node
    }

    /// Finds a descendant (or self) by absolute name, e.g. `/a/b`.
    pub fn find(&self, name: &str) -> Option<Node> {
        if name == self.name() {
            return Some(self.clone());
        }
        let self_name = self.name();
        let rest = if self_name == "/" {
            name.strip_prefix('/')?
        } else {
            name.strip_prefix(&self_name)?.strip_prefix('/')?
        };
        if rest.is_empty() {
            return Some(self.clone());
        }
        let mut current = self.clone();
        for segment in rest.split('/') {
            current = current.child(segment)?;
        }
        Some(current)
    }
}

/// Owns the root [`Node`] of an assembled tree plus the filesystem path it
/// was discovered from.
#[derive(Clone)]
pub struct Tree {
    pub root: Node,
    pub root_path: PathBuf,
}

impl Tree {
    pub fn new(root_path: PathBuf) -> Tree {
        Tree {
            root: Node::new_root(&root_path),
            root_path,
        }
    }

    /// Independent deep clone of the whole tree.
    pub fn deep_copy(&self) -> Tree {
        Tree {
            root: self.root.deep_copy(),
            root_path: self.root_path.clone(),
        }
    }
}
