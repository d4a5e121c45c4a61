/// Document scroll position that puts a target just below the fixed header.
///
/// `target_viewport_top` is the target's `getBoundingClientRect().top` and
/// `page_y_offset` the current vertical scroll. A header height that is missing
/// or not positive counts as unmeasured and `fallback_height` is used instead.
pub fn scroll_top(
    target_viewport_top: f64,
    page_y_offset: f64,
    header_height: Option<f64>,
    fallback_height: f64,
) -> f64 {
    let header = header_height
        .filter(|height| *height > 0.0)
        .unwrap_or(fallback_height);

    target_viewport_top + page_y_offset - header
}
