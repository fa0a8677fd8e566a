//! The numbered graph store.

use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{BTreeSet, HashMap};
use std::mem;
use std::rc::Rc;

/// Stable integer identifier assigned to a node on first insertion.
///
/// Numbers are handed out in insertion order and are never reassigned to a
/// different node while the original node remains present. A removed node's
/// number is not reused, so the number space may be sparse.
pub type NodeNumber = u32;

/// Arena slot for a present node: the node handle plus its adjacency sets.
struct Slot<N> {
    node: Rc<N>,
    succ: BTreeSet<NodeNumber>,
    pred: BTreeSet<NodeNumber>,
}

impl<N> Slot<N> {
    fn new(node: Rc<N>) -> Self {
        Self {
            node,
            succ: BTreeSet::new(),
            pred: BTreeSet::new(),
        }
    }
}

/// An in-memory directed graph over caller-owned node objects.
///
/// Every node receives a stable [`NodeNumber`] on insertion, and adjacency is
/// kept in both directions (successors and predecessors) as sorted integer
/// sets indexed by that number. Node identity is *reference* identity: two
/// nodes are the same only if they are the identical `Rc` allocation, never
/// merely equal by value.
///
/// All operations that take a node argument validate its presence and fail
/// with [`GraphError::UnknownNode`] before mutating anything, so a failed
/// operation leaves the graph untouched.
///
/// Store identity is also reference identity: the type deliberately has no
/// `PartialEq`, and two stores with identical contents are distinct values.
///
/// # Example
///
/// ```
/// use objgraph::NumberedGraph;
/// use std::rc::Rc;
///
/// # fn example() -> objgraph::Result<()> {
/// let mut graph = NumberedGraph::new();
/// let a = Rc::new("a");
/// let b = Rc::new("b");
///
/// graph.add_node(a.clone());
/// graph.add_node(b.clone());
/// graph.add_edge(&a, &b)?;
///
/// assert!(graph.has_edge(&a, &b)?);
/// assert_eq!(graph.succ_node_count(&a)?, 1);
/// # Ok(())
/// # }
/// ```
pub struct NumberedGraph<N> {
    // Arena indexed by node number. Removal clears the slot; the arena never
    // shrinks, so slots.len() is the watermark + 1.
    slots: Vec<Option<Slot<N>>>,
    // Identity map from node allocation address to assigned number. Entries
    // exist exactly for present nodes, so the keyed pointers stay valid.
    numbers: HashMap<*const N, NodeNumber>,
    edge_count: usize,
}

impl<N> Default for NumberedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NumberedGraph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            numbers: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Add a node to the graph.
    ///
    /// Assigns the next number on first insertion; calling again with the
    /// identical object is a no-op that returns the already-assigned number.
    pub fn add_node(&mut self, node: Rc<N>) -> NodeNumber {
        let key = Rc::as_ptr(&node);
        if let Some(&number) = self.numbers.get(&key) {
            return number;
        }

        let number = self.slots.len() as NodeNumber;
        debug!("Adding node: number={number}, addr={key:p}");
        self.slots.push(Some(Slot::new(node)));
        self.numbers.insert(key, number);
        number
    }

    /// Whether the identical node object is currently present.
    pub fn contains_node(&self, node: &Rc<N>) -> bool {
        self.numbers.contains_key(&Rc::as_ptr(node))
    }

    /// Get the number assigned to a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn get_number(&self, node: &Rc<N>) -> Result<NodeNumber> {
        self.numbers
            .get(&Rc::as_ptr(node))
            .copied()
            .ok_or_else(|| GraphError::unknown_node(format!("{:p}", Rc::as_ptr(node))))
    }

    /// Reverse lookup: the node currently holding the given number.
    ///
    /// Returns `None` for numbers never assigned or whose node was removed.
    pub fn get_node(&self, number: NodeNumber) -> Option<&Rc<N>> {
        self.slots
            .get(number as usize)?
            .as_ref()
            .map(|slot| &slot.node)
    }

    /// Add a directed edge.
    ///
    /// Idempotent: adding an edge that already exists changes nothing.
    /// Self-loops are permitted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is absent; no
    /// adjacency is touched in that case.
    pub fn add_edge(&mut self, src: &Rc<N>, dst: &Rc<N>) -> Result<()> {
        let s = self.get_number(src)?;
        let d = self.get_number(dst)?;

        debug!("Adding edge: {s} -> {d}");
        if self.slot_mut(s).succ.insert(d) {
            self.slot_mut(d).pred.insert(s);
            self.edge_count += 1;
        }

        Ok(())
    }

    /// Remove a directed edge.
    ///
    /// Removing a non-existent edge between two present nodes is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is absent.
    pub fn remove_edge(&mut self, src: &Rc<N>, dst: &Rc<N>) -> Result<()> {
        let s = self.get_number(src)?;
        let d = self.get_number(dst)?;

        debug!("Removing edge: {s} -> {d}");
        if self.slot_mut(s).succ.remove(&d) {
            self.slot_mut(d).pred.remove(&s);
            self.edge_count -= 1;
        }

        Ok(())
    }

    /// Whether the edge (src, dst) is present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is absent,
    /// distinguishing "no such edge" from "no such node".
    pub fn has_edge(&self, src: &Rc<N>, dst: &Rc<N>) -> Result<bool> {
        let s = self.get_number(src)?;
        let d = self.get_number(dst)?;
        Ok(self.slot(s).succ.contains(&d))
    }

    /// Remove a node and all edges incident to it.
    ///
    /// The node is stripped from every neighbor's adjacency set, so no
    /// dangling adjacency survives. The node's number is retired and never
    /// handed out again.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn remove_node(&mut self, node: &Rc<N>) -> Result<()> {
        let number = self.get_number(node)?;
        debug!("Removing node: number={number}");

        let slot = self.slots[number as usize]
            .take()
            .expect("assigned number has a live slot");
        self.numbers.remove(&Rc::as_ptr(&slot.node));

        // A self-loop sits in both sets but is a single edge.
        let self_loop = usize::from(slot.succ.contains(&number));
        let incident = slot.succ.len() + slot.pred.len() - self_loop;
        self.edge_count -= incident;

        for &p in &slot.pred {
            if p != number {
                self.slot_mut(p).succ.remove(&number);
            }
        }
        for &s in &slot.succ {
            if s != number {
                self.slot_mut(s).pred.remove(&number);
            }
        }

        trace!("Node {number} removed, {incident} incident edges dropped");
        Ok(())
    }

    /// Remove a node together with its incident edges.
    ///
    /// Behaviorally identical to [`remove_node`](Self::remove_node), which
    /// always strips incident edges; provided for callers that want the
    /// intent spelled out.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn remove_node_and_edges(&mut self, node: &Rc<N>) -> Result<()> {
        self.remove_node(node)
    }

    /// Remove every edge ending at this node, keeping the node itself.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn remove_incoming_edges(&mut self, node: &Rc<N>) -> Result<()> {
        let number = self.get_number(node)?;
        debug!("Removing incoming edges of node {number}");

        let preds = mem::take(&mut self.slot_mut(number).pred);
        for &p in &preds {
            self.slot_mut(p).succ.remove(&number);
        }
        self.edge_count -= preds.len();

        Ok(())
    }

    /// Remove every edge starting at this node, keeping the node itself.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn remove_outgoing_edges(&mut self, node: &Rc<N>) -> Result<()> {
        let number = self.get_number(node)?;
        debug!("Removing outgoing edges of node {number}");

        let succs = mem::take(&mut self.slot_mut(number).succ);
        for &s in &succs {
            self.slot_mut(s).pred.remove(&number);
        }
        self.edge_count -= succs.len();

        Ok(())
    }

    /// Remove every edge incident to this node, keeping the node itself.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn remove_all_incident_edges(&mut self, node: &Rc<N>) -> Result<()> {
        self.remove_incoming_edges(node)?;
        self.remove_outgoing_edges(node)
    }

    /// Number of predecessors of a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn pred_node_count(&self, node: &Rc<N>) -> Result<usize> {
        Ok(self.slot(self.get_number(node)?).pred.len())
    }

    /// Number of successors of a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn succ_node_count(&self, node: &Rc<N>) -> Result<usize> {
        Ok(self.slot(self.get_number(node)?).succ.len())
    }

    /// Lazy iterator over the predecessor nodes of a node, in number order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn pred_nodes(&self, node: &Rc<N>) -> Result<impl Iterator<Item = &Rc<N>>> {
        let number = self.get_number(node)?;
        Ok(self
            .slot(number)
            .pred
            .iter()
            .filter_map(move |&p| self.get_node(p)))
    }

    /// Lazy iterator over the successor nodes of a node, in number order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn succ_nodes(&self, node: &Rc<N>) -> Result<impl Iterator<Item = &Rc<N>>> {
        let number = self.get_number(node)?;
        Ok(self
            .slot(number)
            .succ
            .iter()
            .filter_map(move |&s| self.get_node(s)))
    }

    /// Raw integer-set view of a node's predecessors, for set algebra.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn pred_node_numbers(&self, node: &Rc<N>) -> Result<&BTreeSet<NodeNumber>> {
        Ok(&self.slot(self.get_number(node)?).pred)
    }

    /// Raw integer-set view of a node's successors, for set algebra.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is not present.
    pub fn succ_node_numbers(&self, node: &Rc<N>) -> Result<&BTreeSet<NodeNumber>> {
        Ok(&self.slot(self.get_number(node)?).succ)
    }

    /// Iterate the nodes whose numbers are members of the given set.
    ///
    /// Numbers with no currently-present node are skipped.
    pub fn iterate_nodes<'a>(
        &'a self,
        numbers: &'a BTreeSet<NodeNumber>,
    ) -> impl Iterator<Item = &'a Rc<N>> + 'a {
        numbers.iter().filter_map(move |&n| self.get_node(n))
    }

    /// Number of nodes currently present.
    pub fn node_count(&self) -> usize {
        self.numbers.len()
    }

    /// Number of edges currently present.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The highest node number ever assigned, or `None` if no node was ever
    /// inserted.
    ///
    /// A watermark, not a count: removals leave gaps, so this may exceed
    /// `node_count() - 1`.
    pub fn max_number(&self) -> Option<NodeNumber> {
        (self.slots.len() as NodeNumber).checked_sub(1)
    }

    /// Iterate every present node exactly once, in number order.
    ///
    /// The order is stable as long as the graph is not mutated.
    pub fn iter(&self) -> Nodes<'_, N> {
        Nodes {
            slots: self.slots.iter(),
        }
    }

    /// Iterate every present edge as a (src, dst) node pair, in node default
    /// order crossed with successor number order.
    pub fn edges(&self) -> impl Iterator<Item = (&Rc<N>, &Rc<N>)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref())
            .flat_map(move |slot| {
                slot.succ
                    .iter()
                    .filter_map(move |&d| self.get_node(d).map(|dst| (&slot.node, dst)))
            })
    }

    fn slot(&self, number: NodeNumber) -> &Slot<N> {
        self.slots[number as usize]
            .as_ref()
            .expect("assigned number has a live slot")
    }

    fn slot_mut(&mut self, number: NodeNumber) -> &mut Slot<N> {
        self.slots[number as usize]
            .as_mut()
            .expect("assigned number has a live slot")
    }
}

impl<'a, N> IntoIterator for &'a NumberedGraph<N> {
    type Item = &'a Rc<N>;
    type IntoIter = Nodes<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the present nodes of a [`NumberedGraph`], in number order.
pub struct Nodes<'a, N> {
    slots: std::slice::Iter<'a, Option<Slot<N>>>,
}

impl<'a, N> Iterator for Nodes<'a, N> {
    type Item = &'a Rc<N>;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Some(slot) = slot {
                return Some(&slot.node);
            }
        }
        None
    }
}
