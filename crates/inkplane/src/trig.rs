//! Table-driven fixed-point trigonometry used by the rasterizer.
//!
//! Sine values are scaled by 1024; results renormalize with `>> 10`.

/// sin(0..=90 degrees) scaled by 1024.
static SIN_TABLE: [i32; 91] = [
    0, 18, 36, 54, 71, 89, 107, 125, 143, 160, //
    178, 195, 213, 230, 248, 265, 282, 299, 316, 333, //
    350, 367, 384, 400, 416, 433, 449, 465, 481, 496, //
    512, 527, 543, 558, 573, 587, 602, 616, 630, 644, //
    658, 672, 685, 698, 711, 724, 737, 749, 761, 773, //
    784, 796, 807, 818, 828, 839, 849, 859, 868, 878, //
    887, 896, 904, 912, 920, 928, 935, 943, 949, 956, //
    962, 968, 974, 979, 984, 989, 994, 998, 1002, 1005, //
    1008, 1011, 1014, 1016, 1018, 1020, 1022, 1023, 1023, 1024, //
    1024,
];

/// An integer point on the canvas.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// sin(angle degrees) scaled by 1024, folded by quadrant symmetry.
pub fn sin(angle: i32) -> i32 {
    let angle = angle.rem_euclid(360);

    if angle <= 90 {
        SIN_TABLE[angle as usize]
    } else if angle <= 180 {
        SIN_TABLE[(180 - angle) as usize]
    } else if angle <= 270 {
        -SIN_TABLE[(angle - 180) as usize]
    } else {
        -SIN_TABLE[(360 - angle) as usize]
    }
}

/// cos(angle degrees) scaled by 1024.
pub fn cos(angle: i32) -> i32 {
    sin(angle + 90)
}

/// Rotates `point` around `center` by `angle` degrees.
pub fn rotate_point(center: Point, point: Point, angle: i32) -> Point {
    let x = point.x - center.x;
    let y = point.y - center.y;

    let s = sin(angle);
    let c = cos(angle);

    Point {
        x: center.x + ((x * c - y * s) >> 10),
        y: center.y + ((x * s + y * c) >> 10),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_endpoints() {
        assert_eq!(sin(0), 0);
        assert_eq!(sin(90), 1024);
        assert_eq!(cos(0), 1024);
        assert_eq!(cos(90), 0);
    }

    #[test]
    fn quadrant_folding() {
        assert_eq!(sin(150), sin(30));
        assert_eq!(sin(210), -sin(30));
        assert_eq!(sin(330), -sin(30));
        assert_eq!(sin(180), 0);
        assert_eq!(sin(270), -1024);
    }

    #[test]
    fn periodic_over_full_turns() {
        for k in [-3i32, -1, 1, 2, 10] {
            for a in [0i32, 17, 90, 181, 359] {
                assert_eq!(sin(a), sin(a + 360 * k), "a={a} k={k}");
            }
        }
    }

    #[test]
    fn zero_angle_rotation_is_identity() {
        let centers = [Point::new(0, 0), Point::new(50, 20), Point::new(-7, 3)];
        let points = [Point::new(10, 10), Point::new(-4, 90), Point::new(0, 0)];

        for c in centers {
            for p in points {
                assert_eq!(rotate_point(c, p, 0), p);
            }
        }
    }

    #[test]
    fn quarter_turn_about_origin() {
        let p = rotate_point(Point::new(0, 0), Point::new(100, 0), 90);
        assert_eq!(p, Point::new(0, 100));

        let p = rotate_point(Point::new(0, 0), Point::new(100, 0), 180);
        assert_eq!(p, Point::new(-100, 0));
    }
}
