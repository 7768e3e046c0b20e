//! Rendering options and configuration.
//!
//! All lengths are in millimetres; font sizes are in points.

/// A4 portrait width.
pub const A4_WIDTH: f32 = 210.0;
/// A4 portrait height.
pub const A4_HEIGHT: f32 = 297.0;

/// Options for rendering a resume to PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Page width
    pub page_width: f32,

    /// Page height
    pub page_height: f32,

    /// Margin applied on all four sides
    pub margin: f32,

    /// Font size of the name header
    pub name_size: f32,

    /// Font size of section headings
    pub heading_size: f32,

    /// Font size of bullets and body text
    pub body_size: f32,

    /// Line advance per point of font size
    pub line_height_factor: f32,

    /// Horizontal indent of list entries and career text
    pub bullet_indent: f32,

    /// Flate-compress page content streams
    pub compress: bool,

    /// Document title metadata (defaults to the resume name)
    pub title: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size. Non-positive dimensions are ignored.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        if width > 0.0 && height > 0.0 {
            self.page_width = width;
            self.page_height = height;
        }
        self
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Set the name, heading and body font sizes.
    pub fn with_font_sizes(mut self, name: f32, heading: f32, body: f32) -> Self {
        self.name_size = name;
        self.heading_size = heading;
        self.body_size = body;
        self
    }

    /// Set the line-height factor.
    pub fn with_line_height_factor(mut self, factor: f32) -> Self {
        self.line_height_factor = factor;
        self
    }

    /// Set the bullet indent.
    pub fn with_bullet_indent(mut self, indent: f32) -> Self {
        self.bullet_indent = indent.max(0.0);
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the document title metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Width available between the left and right margins.
    pub fn content_width(&self) -> f32 {
        (self.page_width - 2.0 * self.margin).max(0.0)
    }

    /// Lowest baseline allowed before a page break.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Cursor advance for one wrapped line at `font_size`.
    pub fn line_step(&self, font_size: f32) -> f32 {
        font_size * self.line_height_factor
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margin: 20.0,
            name_size: 28.0,
            heading_size: 13.0,
            body_size: 10.0,
            line_height_factor: 0.35,
            bullet_indent: 3.0,
            compress: true,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let options = RenderOptions::default();
        assert_eq!(options.content_width(), 170.0);
        assert_eq!(options.bottom_limit(), 277.0);
        assert!((options.line_step(10.0) - 3.5).abs() < 1e-6);
        assert!(options.compress);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_page_size(215.9, 279.4)
            .with_margin(25.4)
            .with_font_sizes(24.0, 12.0, 9.0)
            .with_bullet_indent(5.0)
            .with_compression(false)
            .with_title("CV");

        assert_eq!(options.page_width, 215.9);
        assert_eq!(options.margin, 25.4);
        assert_eq!(options.body_size, 9.0);
        assert_eq!(options.bullet_indent, 5.0);
        assert!(!options.compress);
        assert_eq!(options.title.as_deref(), Some("CV"));
    }

    #[test]
    fn test_invalid_page_size_ignored() {
        let options = RenderOptions::new().with_page_size(0.0, 100.0);
        assert_eq!(options.page_width, A4_WIDTH);
        assert_eq!(options.page_height, A4_HEIGHT);
    }
}
