use anyhow::*;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Block, DocumentSink};

#[derive(Clone, Default)]
pub struct MockDocument {
    blocks: Arc<RwLock<Vec<Block>>>,
    finished: Arc<RwLock<bool>>,
}

impl MockDocument {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn blocks(&self) -> Vec<Block> {
        self.blocks.read().clone()
    }

    pub fn contains(&self, block: &Block) -> bool {
        self.blocks.read().iter().any(|appended| appended == block)
    }

    pub fn is_finished(&self) -> bool {
        *self.finished.read()
    }
}

impl DocumentSink for MockDocument {
    fn append(&mut self, block: Block) -> Result<()> {
        self.blocks.write().push(block);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        *self.finished.write() = true;
        Ok(())
    }
}
