use super::types::Mask;

/// Minimum over a `size` x `size` neighborhood. Out-of-bounds pixels are skipped.
pub fn erode(mask: &Mask, size: usize) -> Mask {
    filter(mask, size, u8::min)
}

/// Maximum over a `size` x `size` neighborhood. Out-of-bounds pixels are skipped.
pub fn dilate(mask: &Mask, size: usize) -> Mask {
    filter(mask, size, u8::max)
}

/// Erosion followed by dilation with a square structuring element.
///
/// Removes foreground specks narrower than the element while leaving larger
/// regions at their original extent.
pub fn open(mask: &Mask, size: usize) -> Mask {
    let _span = tracing::debug_span!("morphology_open", size).entered();
    dilate(&erode(mask, size), size)
}

fn filter(mask: &Mask, size: usize, reduce: fn(u8, u8) -> u8) -> Mask {
    let (height, width) = mask.dim();
    let radius = size / 2;

    Mask::from_shape_fn((height, width), |(y, x)| {
        let rows = y.saturating_sub(radius)..(y + radius + 1).min(height);
        let cols = x.saturating_sub(radius)..(x + radius + 1).min(width);
        rows.flat_map(|ny| cols.clone().map(move |nx| mask[[ny, nx]]))
            .fold(mask[[y, x]], reduce)
    })
}
