/// Advance the catalog cursor, wrapping from the last song back to the first.
pub fn next_song(index: usize, song_count: usize) -> usize {
    if song_count == 0 {
        return 0;
    }
    (index + 1) % song_count
}

/// 1-based number shown in front of the title.
pub fn display_number(index: usize) -> usize {
    index + 1
}
