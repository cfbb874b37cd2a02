//! `htmlmin_opts` table.
//!
//! Fine-tunes page minification. Every key is optional; unknown keys are
//! reported as warnings when the config is loaded and otherwise ignored.
//!
//! # Example
//!
//! ```toml
//! [htmlmin_opts]
//! remove_comments = false        # keep comments in rendered pages
//! minify_inline_js = true        # also minify inline <script>
//! ```

use serde::{Deserialize, Serialize};

/// HTML minifier options.
///
/// Defaults are aggressive but keep markup that some themes or browsers
/// depend on. Whitespace inside `<pre>` and `<textarea>` is always kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlMinifyOptions {
    /// Strip `<!-- ... -->` comments.
    pub remove_comments: bool,

    /// Keep server-side include comments (`<!--# ... -->`) when stripping.
    pub keep_ssi_comments: bool,

    /// Only unquote attribute values when the result is spec compliant.
    pub spec_compliant_attribute_values: bool,

    /// Keep optional closing tags such as `</p>` and `</li>`.
    pub keep_closing_tags: bool,

    /// Keep optional `<html>` and `<head>` opening tags.
    pub keep_html_and_head_opening_tags: bool,

    /// Keep spaces between attributes where they could be dropped.
    pub keep_spaces_between_attributes: bool,

    /// Keep `type="text"` on `<input>`.
    pub keep_input_type_text_attr: bool,

    /// Minify `<style>` contents and `style` attributes.
    pub minify_inline_css: bool,

    /// Minify inline `<script>` contents.
    pub minify_inline_js: bool,

    /// Remove `<!...>` bangs.
    pub remove_bangs: bool,

    /// Remove `<?...?>` processing instructions.
    pub remove_processing_instructions: bool,

    /// Leave the doctype as written.
    pub keep_doctype: bool,

    /// Keep `{{ }}`, `{% %}` and `<% %>` template syntax intact.
    pub preserve_template_syntax: bool,
}

impl Default for HtmlMinifyOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            keep_ssi_comments: false,
            spec_compliant_attribute_values: true,
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            keep_spaces_between_attributes: false,
            keep_input_type_text_attr: false,
            minify_inline_css: true,
            minify_inline_js: false,
            remove_bangs: false,
            remove_processing_instructions: false,
            keep_doctype: false,
            preserve_template_syntax: false,
        }
    }
}
