/// Number of symbols lexed from an input before the symbol buffer moves to the heap.
pub const N_SYMBOLS_ON_STACK: usize = 32;

/// Number of nodes pending during a tree traversal before the traversal stack moves to the heap.
pub const N_NODES_ON_STACK: usize = 32;
