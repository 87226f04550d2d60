use image::imageops::FilterType;
use image::RgbaImage;

/// Number of mip levels for a `width` × `height` base image, down to 1×1.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let largest = width.max(height).max(1);
    u32::BITS - largest.leading_zeros()
}

/// Builds the full mip chain on the CPU, level 0 first.
///
/// Each level halves both dimensions (rounding down, never below 1) and is
/// resampled from the previous level with a triangle filter.
pub fn mip_chain(base: RgbaImage) -> Vec<RgbaImage> {
    let levels = mip_level_count(base.width(), base.height()) as usize;
    let mut chain = Vec::with_capacity(levels);
    chain.push(base);

    while chain.len() < levels {
        let Some(prev) = chain.last() else { break };
        let w = (prev.width() / 2).max(1);
        let h = (prev.height() / 2).max(1);
        let next = image::imageops::resize(prev, w, h, FilterType::Triangle);
        chain.push(next);
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_count_for_power_of_two() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(2, 2), 2);
        assert_eq!(mip_level_count(512, 512), 10);
    }

    #[test]
    fn level_count_uses_largest_side() {
        assert_eq!(mip_level_count(640, 480), 10);
        assert_eq!(mip_level_count(1, 300), 9);
    }

    #[test]
    fn chain_halves_down_to_one_pixel() {
        let base = RgbaImage::from_pixel(8, 2, image::Rgba([10, 20, 30, 255]));
        let chain = mip_chain(base);

        let sizes: Vec<(u32, u32)> = chain.iter().map(|l| l.dimensions()).collect();
        assert_eq!(sizes, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let px = image::Rgba([200, 100, 50, 255]);
        let chain = mip_chain(RgbaImage::from_pixel(16, 16, px));
        let last = chain.last().unwrap().get_pixel(0, 0);
        for (got, want) in last.0.iter().zip(px.0.iter()) {
            assert!(got.abs_diff(*want) <= 1, "{got} vs {want}");
        }
    }
}
