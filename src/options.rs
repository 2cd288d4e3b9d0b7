//! Transformation options and their canonical path grammar.
//!
//! [`TransformOptions`] describes what the imaging proxy should do to a
//! source image. [`TransformOptions::to_path`] renders the options as the
//! slash-delimited path prefix the proxy parses, in the proxy's fixed
//! segment order.

use std::fmt::Write;

/// Horizontal crop/resize alignment.
///
/// [`Center`](HorizontalAlign::Center) is the proxy's default and never
/// appears in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Align to the left edge.
    Left,
    /// Align to the horizontal center (default, not serialized).
    #[default]
    Center,
    /// Align to the right edge.
    Right,
}

/// Vertical crop/resize alignment.
///
/// [`Middle`](VerticalAlign::Middle) is the proxy's default and never
/// appears in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    /// Align to the top edge.
    Top,
    /// Align to the vertical middle (default, not serialized).
    #[default]
    Middle,
    /// Align to the bottom edge.
    Bottom,
}

/// Transformation options for a thumbnail request.
///
/// Options are configured with a consuming builder and are immutable once
/// built. The serialized path is a pure function of the final state: the
/// order in which builder methods are called never shows in the output.
///
/// # Defaults
///
/// The default value requests no transformation at all and serializes to
/// the empty string: no meta, no crop, no resize, no flips, alignment
/// center/middle, smart detection off.
///
/// # Example
///
/// ```
/// use thumbor_url::{HorizontalAlign, TransformOptions};
///
/// let options = TransformOptions::new()
///     .crop(20, 30, 40, 50)
///     .resize(300, 200)
///     .halign(HorizontalAlign::Right)
///     .smart();
///
/// assert_eq!(options.to_path(), "20x30:40x50/300x200/right/smart/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformOptions {
    /// Request transformation metadata instead of the image itself.
    pub meta: bool,

    /// Left edge of the manual crop window.
    pub crop_left: i32,
    /// Top edge of the manual crop window.
    pub crop_top: i32,
    /// Right edge of the manual crop window.
    pub crop_right: i32,
    /// Bottom edge of the manual crop window.
    pub crop_bottom: i32,

    /// Target width (0 = derive from height / original).
    pub width: i32,
    /// Target height (0 = derive from width / original).
    pub height: i32,

    /// Mirror the image horizontally.
    pub flip_horizontal: bool,
    /// Mirror the image vertically.
    pub flip_vertical: bool,

    /// Fit the image inside the target box instead of cropping to fill it.
    pub fit_in: bool,

    /// Horizontal alignment of the crop window.
    pub halign: HorizontalAlign,
    /// Vertical alignment of the crop window.
    pub valign: VerticalAlign,

    /// Use the proxy's smart feature detection when cropping.
    pub smart: bool,
}

impl TransformOptions {
    /// Create options with default values (no transformation).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request transformation metadata instead of the image.
    #[inline]
    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Set the manual crop window.
    ///
    /// A crop is considered "set" when any of the four values is greater
    /// than zero; all-zero crops are omitted from the path. Values are not
    /// range-checked, matching what the proxy accepts.
    #[inline]
    pub fn crop(mut self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        self.crop_left = left;
        self.crop_top = top;
        self.crop_right = right;
        self.crop_bottom = bottom;
        self
    }

    /// Set target dimensions. Either dimension may be 0 to let the proxy
    /// derive it.
    #[inline]
    pub fn resize(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Mirror the image horizontally.
    #[inline]
    pub fn flip_horizontal(mut self) -> Self {
        self.flip_horizontal = true;
        self
    }

    /// Mirror the image vertically.
    #[inline]
    pub fn flip_vertical(mut self) -> Self {
        self.flip_vertical = true;
        self
    }

    /// Fit the image inside the target box instead of cropping to fill it.
    #[inline]
    pub fn fit_in(mut self) -> Self {
        self.fit_in = true;
        self
    }

    /// Set horizontal alignment.
    #[inline]
    pub fn halign(mut self, align: HorizontalAlign) -> Self {
        self.halign = align;
        self
    }

    /// Set vertical alignment.
    #[inline]
    pub fn valign(mut self, align: VerticalAlign) -> Self {
        self.valign = align;
        self
    }

    /// Use smart feature detection when cropping.
    #[inline]
    pub fn smart(mut self) -> Self {
        self.smart = true;
        self
    }

    /// Render the options as the proxy's path prefix.
    ///
    /// Each applicable segment is emitted slash-terminated, in the proxy's
    /// fixed order: meta, crop, fit-in, resize, horizontal alignment,
    /// vertical alignment, smart. Options left at their defaults produce
    /// the empty string.
    ///
    /// The resize segment is emitted whenever a dimension is positive or a
    /// flip flag is set; a flip renders as a `-` prefix on its dimension
    /// even when that dimension is 0, so a bare horizontal flip serializes
    /// as `-0x0/`.
    pub fn to_path(&self) -> String {
        let mut path = String::new();

        if self.meta {
            path.push_str("meta/");
        }

        if self.crop_left > 0 || self.crop_top > 0 || self.crop_right > 0 || self.crop_bottom > 0 {
            let _ = write!(
                path,
                "{}x{}:{}x{}/",
                self.crop_left, self.crop_top, self.crop_right, self.crop_bottom
            );
        }

        if self.fit_in {
            path.push_str("fit-in/");
        }

        if self.width > 0 || self.height > 0 || self.flip_horizontal || self.flip_vertical {
            if self.flip_horizontal {
                path.push('-');
            }
            let _ = write!(path, "{}x", self.width);
            if self.flip_vertical {
                path.push('-');
            }
            let _ = write!(path, "{}/", self.height);
        }

        match self.halign {
            HorizontalAlign::Left => path.push_str("left/"),
            HorizontalAlign::Right => path.push_str("right/"),
            HorizontalAlign::Center => {}
        }
        match self.valign {
            VerticalAlign::Top => path.push_str("top/"),
            VerticalAlign::Bottom => path.push_str("bottom/"),
            VerticalAlign::Middle => {}
        }

        if self.smart {
            path.push_str("smart/");
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_to_empty() {
        assert_eq!(TransformOptions::new().to_path(), "");
        assert_eq!(TransformOptions::default().to_path(), "");
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(TransformOptions::new(), TransformOptions::default());
    }

    #[test]
    fn test_crop_set_iff_any_value_positive() {
        assert_eq!(TransformOptions::new().crop(5, 3, 2, 1).to_path(), "5x3:2x1/");
        assert_eq!(TransformOptions::new().crop(0, 0, 0, 0).to_path(), "");
        assert_eq!(TransformOptions::new().crop(0, 0, 0, 1).to_path(), "0x0:0x1/");
        assert_eq!(TransformOptions::new().crop(1, 0, 0, 0).to_path(), "1x0:0x0/");
    }

    #[test]
    fn test_negative_crop_values_pass_through() {
        // Negative values are not validated; all-negative counts as unset
        assert_eq!(TransformOptions::new().crop(-1, -2, -3, -4).to_path(), "");
        assert_eq!(
            TransformOptions::new().crop(-1, 0, 0, 5).to_path(),
            "-1x0:0x5/"
        );
    }

    #[test]
    fn test_resize_segment() {
        assert_eq!(TransformOptions::new().resize(0, 0).to_path(), "");
        assert_eq!(TransformOptions::new().resize(27, 953).to_path(), "27x953/");
        assert_eq!(TransformOptions::new().resize(0, 56).to_path(), "0x56/");
        assert_eq!(TransformOptions::new().resize(43, 0).to_path(), "43x0/");
    }

    #[test]
    fn test_flips_render_as_dimension_prefix() {
        assert_eq!(
            TransformOptions::new().resize(27, 953).flip_horizontal().to_path(),
            "-27x953/"
        );
        assert_eq!(
            TransformOptions::new().resize(27, 953).flip_vertical().to_path(),
            "27x-953/"
        );
        assert_eq!(
            TransformOptions::new()
                .resize(27, 953)
                .flip_vertical()
                .flip_horizontal()
                .to_path(),
            "-27x-953/"
        );
    }

    #[test]
    fn test_flip_alone_forces_resize_segment() {
        assert_eq!(TransformOptions::new().flip_horizontal().to_path(), "-0x0/");
        assert_eq!(TransformOptions::new().flip_vertical().to_path(), "0x-0/");
        assert_eq!(
            TransformOptions::new().flip_vertical().flip_horizontal().to_path(),
            "-0x-0/"
        );
    }

    #[test]
    fn test_alignment_defaults_never_serialize() {
        assert_eq!(
            TransformOptions::new().halign(HorizontalAlign::Left).to_path(),
            "left/"
        );
        assert_eq!(
            TransformOptions::new().halign(HorizontalAlign::Center).to_path(),
            ""
        );
        assert_eq!(
            TransformOptions::new().halign(HorizontalAlign::Right).to_path(),
            "right/"
        );

        assert_eq!(
            TransformOptions::new().valign(VerticalAlign::Top).to_path(),
            "top/"
        );
        assert_eq!(
            TransformOptions::new().valign(VerticalAlign::Middle).to_path(),
            ""
        );
        assert_eq!(
            TransformOptions::new().valign(VerticalAlign::Bottom).to_path(),
            "bottom/"
        );
    }

    #[test]
    fn test_alignment_order_fixed_regardless_of_call_order() {
        assert_eq!(
            TransformOptions::new()
                .halign(HorizontalAlign::Left)
                .valign(VerticalAlign::Bottom)
                .to_path(),
            "left/bottom/"
        );
        assert_eq!(
            TransformOptions::new()
                .valign(VerticalAlign::Top)
                .halign(HorizontalAlign::Right)
                .to_path(),
            "right/top/"
        );
    }

    #[test]
    fn test_meta_and_fit_in() {
        assert_eq!(TransformOptions::new().meta().to_path(), "meta/");
        assert_eq!(TransformOptions::new().fit_in().to_path(), "fit-in/");
        assert_eq!(
            TransformOptions::new().fit_in().resize(2, 2).to_path(),
            "fit-in/2x2/"
        );
    }

    #[test]
    fn test_segment_order_is_canonical() {
        // Builder call order is scrambled on purpose; the output order is
        // always meta, crop, fit-in, resize, halign, valign, smart.
        assert_eq!(
            TransformOptions::new().meta().crop(5, 3, 2, 1).to_path(),
            "meta/5x3:2x1/"
        );
        assert_eq!(
            TransformOptions::new().crop(5, 3, 2, 1).meta().to_path(),
            "meta/5x3:2x1/"
        );
        assert_eq!(
            TransformOptions::new().fit_in().crop(5, 3, 2, 1).to_path(),
            "5x3:2x1/fit-in/"
        );
        assert_eq!(
            TransformOptions::new()
                .crop(20, 30, 40, 50)
                .valign(VerticalAlign::Top)
                .resize(20, 20)
                .smart()
                .halign(HorizontalAlign::Right)
                .fit_in()
                .meta()
                .to_path(),
            "meta/20x30:40x50/fit-in/20x20/right/top/smart/"
        );
    }
}
