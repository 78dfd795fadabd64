//! Export pagination: fixed-size pages of frames and the grid layout
//! parameter derived per page.

use storymark_core::Frame;

/// Frames per export page.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Chunk frames into pages of at most `page_size`. The final page may
/// be shorter; an empty frame list yields no pages.
pub fn paginate(frames: &[Frame], page_size: usize) -> Vec<&[Frame]> {
    if page_size == 0 {
        return Vec::new();
    }
    frames.chunks(page_size).collect()
}

/// Grid column count for a page with the given number of items: two
/// columns up to four items, three beyond.
pub fn grid_columns(page_item_count: usize) -> usize {
    if page_item_count <= 4 { 2 } else { 3 }
}
