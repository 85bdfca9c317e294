//! Tests for page rasterization

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use mazepages::maze::carver::generate;
    use mazepages::maze::{Grid, Position, Side};
    use mazepages::render::layout::{PageLayout, Rect};
    use mazepages::render::page::{BACKGROUND, INK, fill_rect, render_page};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const LAYOUT: PageLayout = PageLayout {
        canvas_width: 794,
        canvas_height: 1123,
        maze_width_px: 750,
        line_width: 6,
    };

    fn ink_count(img: &RgbaImage) -> usize {
        img.pixels().filter(|&&p| p == INK).count()
    }

    // Tests a fully open grid renders a blank page of the configured size
    // Verified by filling the canvas with ink
    #[test]
    fn test_open_grid_is_blank() {
        let Ok(mut grid) = Grid::new(2, 2) else {
            unreachable!("2x2 grid is valid");
        };
        for y in 0..2 {
            for x in 0..2 {
                if let Ok(tile) = grid.tile_mut(Position::new(x, y)) {
                    tile.walls = [false; 4];
                }
            }
        }

        let img = render_page(&grid, &LAYOUT);

        assert_eq!(img.dimensions(), (794, 1123));
        assert_eq!(ink_count(&img), 0);
        assert!(img.pixels().all(|&p| p == BACKGROUND));
    }

    // Tests a single top wall fills exactly its rectangle
    // Verified by rounding the rectangle edges inwards
    #[test]
    fn test_single_top_wall_pixels() {
        let Ok(mut grid) = Grid::new(3, 2) else {
            unreachable!("3x2 grid is valid");
        };
        for y in 0..2 {
            for x in 0..3 {
                if let Ok(tile) = grid.tile_mut(Position::new(x, y)) {
                    tile.walls = [false; 4];
                }
            }
        }
        if let Ok(tile) = grid.tile_mut(Position::new(1, 1)) {
            tile.add_wall(Side::Top);
        }

        let img = render_page(&grid, &LAYOUT);

        // Rectangle (269, 558.5) - (519, 564.5) covers columns 269..519, rows 558..565
        assert_eq!(ink_count(&img), 250 * 7);
        assert_eq!(*img.get_pixel(269, 558), INK);
        assert_eq!(*img.get_pixel(518, 564), INK);
        assert_eq!(*img.get_pixel(268, 560), BACKGROUND);
        assert_eq!(*img.get_pixel(519, 560), BACKGROUND);
        assert_eq!(*img.get_pixel(300, 565), BACKGROUND);
    }

    // Tests rectangles hanging off the page are clipped
    // Verified by removing the clamp in the pixel span
    #[test]
    fn test_fill_rect_clips_to_image() {
        let mut img = RgbaImage::from_pixel(10, 10, BACKGROUND);
        let rect = Rect {
            x0: -5.0,
            y0: 8.2,
            x1: 3.0,
            y1: 20.0,
        };

        fill_rect(&mut img, &rect, INK);

        assert_eq!(ink_count(&img), 3 * 2);
        assert_eq!(*img.get_pixel(0, 9), INK);
        assert_eq!(*img.get_pixel(3, 9), BACKGROUND);
    }

    // Tests the entrance gap is left unpainted on a carved maze
    // Verified by drawing every wall regardless of state
    #[test]
    fn test_entrance_gap_is_white() {
        let Ok(grid) = generate(22, 24, &mut StdRng::seed_from_u64(4)) else {
            unreachable!("default maze is valid");
        };
        let img = render_page(&grid, &LAYOUT);

        let top = LAYOUT.wall_rect(22, 24, Position::new(0, 0), Side::Top);
        let mid_x = ((top.x0 + top.x1) / 2.0) as u32;
        let mid_y = ((top.y0 + top.y1) / 2.0) as u32;
        assert_eq!(*img.get_pixel(mid_x, mid_y), BACKGROUND);

        let left = LAYOUT.wall_rect(22, 24, Position::new(0, 0), Side::Left);
        let mid_x = ((left.x0 + left.x1) / 2.0) as u32;
        let mid_y = ((left.y0 + left.y1) / 2.0) as u32;
        assert_eq!(*img.get_pixel(mid_x, mid_y), INK);
    }
}
