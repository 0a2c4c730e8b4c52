/// ID generator handing out node ids in strictly increasing creation order.
///
/// Ids of nodes removed by compression are never handed out again, so an id
/// identifies one node for the whole lifetime of a graph.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    /// Creates a new ID generator starting from ID 0.
    pub(crate) fn new() -> Self {
        Self { next: 0 }
    }

    /// Gets the next unused ID.
    pub(crate) fn get(&mut self) -> u32 {
        let id = self.next;
        self.next = self
            .next
            .checked_add(1)
            .expect("node id space exhausted");
        id
    }
}
