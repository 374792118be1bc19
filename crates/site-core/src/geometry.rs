use glam::Vec2;

/// Axis-aligned rectangle in client-pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            left: min.x,
            top: min.y,
            right: min.x + size.x,
            bottom: min.y + size.y,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Nearest point inside the rectangle to `p`.
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left, self.right),
            p.y.clamp(self.top, self.bottom),
        )
    }

    /// Euclidean distance from `p` to the nearest point of the rectangle;
    /// zero when `p` is inside.
    #[inline]
    pub fn distance_to_point(&self, p: Vec2) -> f32 {
        (p - self.clamp_point(p)).length()
    }
}

/// True when a circle at `center` overlaps `rect`. The comparison is
/// strict, so a circle exactly tangent to the rectangle does not count.
/// Non-finite centers never overlap anything.
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    if !center.is_finite() {
        return false;
    }
    rect.distance_to_point(center) < radius
}

#[inline]
pub fn circle_contains_point(center: Vec2, radius: f32, p: Vec2) -> bool {
    if !center.is_finite() || !p.is_finite() {
        return false;
    }
    (p - center).length() < radius
}

/// Placement of an image scaled with "contain" semantics: preserve the
/// aspect ratio, fit entirely within the viewport, center the slack axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainFit {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub fn contain_fit(image: Vec2, viewport: Vec2) -> ContainFit {
    if image.x <= 0.0 || image.y <= 0.0 || viewport.x <= 0.0 || viewport.y <= 0.0 {
        return ContainFit::default();
    }
    let image_aspect = image.x / image.y;
    let viewport_aspect = viewport.x / viewport.y;
    if image_aspect > viewport_aspect {
        // Image is wider: fit to width, center vertically.
        let height = viewport.x / image_aspect;
        ContainFit {
            x: 0.0,
            y: (viewport.y - height) / 2.0,
            width: viewport.x,
            height,
        }
    } else {
        // Image is taller: fit to height, center horizontally.
        let width = viewport.y * image_aspect;
        ContainFit {
            x: (viewport.x - width) / 2.0,
            y: 0.0,
            width,
            height: viewport.y,
        }
    }
}
