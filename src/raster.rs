use image::{Rgba, RgbaImage};

/// Rotates `src` by `angle` radians about its center, clockwise on screen
/// (x right, y down). The result is grown to the rotated bounding box, and
/// anything outside the source is left transparent. Sampling is
/// nearest-neighbor.
pub fn rotate_surface(src: &RgbaImage, angle: f32) -> RgbaImage {
    let (w, h) = (src.width() as f32, src.height() as f32);
    let (sin, cos) = angle.sin_cos();

    // Shave off float noise so a quarter turn of 4x2 is 2x4, not 3x5.
    let fit = |extent: f32| (extent - 1e-3).ceil().max(1.0) as u32;
    let out_w = fit(w * cos.abs() + h * sin.abs());
    let out_h = fit(w * sin.abs() + h * cos.abs());
    let mut out = RgbaImage::new(out_w, out_h);

    let (src_cx, src_cy) = (w / 2.0, h / 2.0);
    let (out_cx, out_cy) = (out_w as f32 / 2.0, out_h as f32 / 2.0);

    for (x, y, pixel) in out.enumerate_pixels_mut() {
        // Walk backwards from each output pixel center to the source.
        let dx = x as f32 + 0.5 - out_cx;
        let dy = y as f32 + 0.5 - out_cy;
        let sx = (cos * dx + sin * dy + src_cx).floor();
        let sy = (-sin * dx + cos * dy + src_cy).floor();

        if sx >= 0.0 && sy >= 0.0 && sx < w && sy < h {
            *pixel = *src.get_pixel(sx as u32, sy as u32);
        }
    }

    out
}

/// Alpha-composites `src` onto `dst` with its top-left corner at `(x, y)`.
/// Pixels that land outside `dst` are dropped.
pub fn blit(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dst_w, dst_h) = (dst.width() as i64, dst.height() as i64);

    for (sx, sy, pixel) in src.enumerate_pixels() {
        let dx = x + sx as i64;
        let dy = y + sy as i64;
        if dx < 0 || dy < 0 || dx >= dst_w || dy >= dst_h {
            continue;
        }
        let under = dst.get_pixel_mut(dx as u32, dy as u32);
        *under = blend_over(*pixel, *under);
    }
}

fn blend_over(top: Rgba<u8>, bottom: Rgba<u8>) -> Rgba<u8> {
    let alpha = top[3] as u32;
    match alpha {
        0 => bottom,
        255 => top,
        _ => {
            let mix = |t: u8, b: u8| ((t as u32 * alpha + b as u32 * (255 - alpha)) / 255) as u8;
            let out_alpha = alpha + bottom[3] as u32 * (255 - alpha) / 255;
            Rgba([
                mix(top[0], bottom[0]),
                mix(top[1], bottom[1]),
                mix(top[2], bottom[2]),
                out_alpha as u8,
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_zero_rotation_is_identity() {
        let mut src = RgbaImage::new(4, 2);
        src.put_pixel(0, 0, RED);
        let out = rotate_surface(&src, 0.0);
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(out, src);
    }

    #[test]
    fn test_quarter_turn_swaps_dimensions() {
        let mut src = RgbaImage::new(4, 2);
        src.put_pixel(0, 0, RED);
        let out = rotate_surface(&src, PI / 2.0);
        assert_eq!(out.dimensions(), (2, 4));
        // Clockwise on screen: the top-left corner ends up top-right.
        assert_eq!(*out.get_pixel(1, 0), RED);
    }

    #[test]
    fn test_diagonal_rotation_grows_bounding_box() {
        let src = RgbaImage::from_pixel(10, 10, RED);
        let out = rotate_surface(&src, PI / 4.0);
        assert_eq!(out.dimensions(), (15, 15));
        // Corners of the bounding box fall outside the source square.
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(*out.get_pixel(7, 7), RED);
    }

    #[test]
    fn test_blit_clips_and_blends() {
        let mut dst = RgbaImage::from_pixel(4, 4, BLACK);
        let mut src = RgbaImage::from_pixel(2, 2, RED);
        src.put_pixel(1, 1, Rgba([0, 0, 0, 0]));

        blit(&mut dst, &src, -1, 3);
        // Only src (1, 0) lands, at dst (0, 3).
        assert_eq!(*dst.get_pixel(0, 3), RED);
        assert_eq!(*dst.get_pixel(1, 3), BLACK);

        blit(&mut dst, &src, 2, 0);
        assert_eq!(*dst.get_pixel(2, 0), RED);
        assert_eq!(*dst.get_pixel(3, 1), BLACK, "transparent pixel must not overwrite");
    }

    #[test]
    fn test_half_alpha_blend() {
        let top = Rgba([255, 255, 255, 128]);
        let out = blend_over(top, BLACK);
        assert_eq!(out[0], 128);
        assert_eq!(out[3], 255);
    }
}
