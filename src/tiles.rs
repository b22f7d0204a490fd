use crate::dom::ElementHandle;

pub const TILE_SELECTOR: &str = ".tile";
const LIFTED: &str = "translateY(-10px) scale(1.02)";
const RESTING: &str = "translateY(0) scale(1)";

pub fn lift<E: ElementHandle>(tile: &E) {
    tile.set_style("transform", LIFTED);
}

pub fn settle<E: ElementHandle>(tile: &E) {
    tile.set_style("transform", RESTING);
}
