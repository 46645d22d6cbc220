use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

const MAX_PREALLOCATED: usize = 4096;

/// Examples collected since the last selection event, all sharing one schema.
#[derive(Debug, Clone)]
pub struct ChunkBuffer {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
    capacity: usize,
}

impl ChunkBuffer {
    pub fn new(header: Arc<InstanceHeader>, capacity: usize) -> Self {
        Self {
            header,
            instances: Vec::with_capacity(capacity.min(MAX_PREALLOCATED)),
            capacity,
        }
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.instances.len() == self.capacity
    }

    pub(crate) fn push(&mut self, instance: DenseInstance) {
        debug_assert!(!self.is_full(), "chunk buffer overflow");
        debug_assert_eq!(
            instance.values().len(),
            self.header.number_of_attributes(),
            "instance width does not match the chunk schema"
        );
        self.instances.push(instance);
    }

    /// Hands out the collected chunk and leaves an empty buffer with the same
    /// schema and capacity in its place.
    pub(crate) fn take_chunk(&mut self) -> ChunkBuffer {
        let fresh = ChunkBuffer::new(Arc::clone(&self.header), self.capacity);
        std::mem::replace(self, fresh)
    }
}
