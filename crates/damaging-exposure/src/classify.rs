//! Block classification and the head-level exemption.

use damaging_core::enums::Block;

/// Whether standing in `block` injures an entity.
// TODO: read a per-block damaging property once `Block` carries one; lava is the only hazard today.
pub fn block_is_damaging(block: Block) -> bool {
    block.is_lava()
}

/// Whether body row `relative_y` is the topmost row of an entity `height` tall.
///
/// A block that only grazes the head row does not count as immersion.
pub fn is_at_head_level(height: f32, relative_y: i32) -> bool {
    height.ceil() as i32 - 1 == relative_y
}
