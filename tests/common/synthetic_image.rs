/// Generates an interleaved RGBA buffer filled with a single color.
pub fn uniform_rgba(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        img.extend_from_slice(&rgba);
    }
    img
}

/// Generates a black RGBA image with a one-pixel-wide white vertical line.
pub fn vertical_line_rgba(width: usize, height: usize, line_x: usize) -> Vec<u8> {
    assert!(line_x < width, "line column must lie inside the image");

    let mut img = uniform_rgba(width, height, [0, 0, 0, 255]);
    for y in 0..height {
        let i = (y * width + line_x) * 4;
        img[i] = 255;
        img[i + 1] = 255;
        img[i + 2] = 255;
    }
    img
}

/// Generates an RGBA image that is black left of `step_x` and white from
/// `step_x` onward (a hard vertical step edge).
pub fn vertical_step_rgba(width: usize, height: usize, step_x: usize) -> Vec<u8> {
    assert!(step_x <= width, "step column must not exceed the width");

    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..height {
        for x in 0..width {
            let v = if x < step_x { 0u8 } else { 255u8 };
            img.extend_from_slice(&[v, v, v, 255]);
        }
    }
    img
}
