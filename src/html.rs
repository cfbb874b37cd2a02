//! HTML page minification.
//!
//! Applied to every rendered page and to `.html` template outputs (e.g. the
//! 404 page). Uses the `minify_html` crate; [`HtmlMinifyOptions`] maps onto
//! its `Cfg`.

use minify_html::Cfg;

use crate::asset::minify::MinifyError;
use crate::config::HtmlMinifyOptions;

/// Translate plugin options into a `minify_html` configuration.
fn build_cfg(opts: &HtmlMinifyOptions) -> Cfg {
    let mut cfg = Cfg::new();
    cfg.keep_comments = !opts.remove_comments;
    cfg.keep_ssi_comments = opts.keep_ssi_comments;
    cfg.ensure_spec_compliant_unquoted_attribute_values = opts.spec_compliant_attribute_values;
    cfg.keep_closing_tags = opts.keep_closing_tags;
    cfg.keep_html_and_head_opening_tags = opts.keep_html_and_head_opening_tags;
    cfg.keep_spaces_between_attributes = opts.keep_spaces_between_attributes;
    cfg.keep_input_type_text_attr = opts.keep_input_type_text_attr;
    cfg.minify_css = opts.minify_inline_css;
    cfg.minify_js = opts.minify_inline_js;
    cfg.remove_bangs = opts.remove_bangs;
    cfg.remove_processing_instructions = opts.remove_processing_instructions;
    cfg.do_not_minify_doctype = opts.keep_doctype;
    cfg.preserve_brace_template_syntax = opts.preserve_template_syntax;
    cfg.preserve_chevron_percent_template_syntax = opts.preserve_template_syntax;
    cfg
}

/// Minify a rendered page.
pub fn minify_page(html: &str, opts: &HtmlMinifyOptions) -> Result<String, MinifyError> {
    let cfg = build_cfg(opts);
    let output = minify_html::minify(html.as_bytes(), &cfg);
    String::from_utf8(output).map_err(|e| MinifyError(e.to_string()))
}

/// Whether a template output should go through the page minifier.
#[inline]
pub fn is_html_template(template_name: &str) -> bool {
    template_name.ends_with(".html")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<!DOCTYPE html>\n<html>\n  <head>\n    <title>Docs</title>\n  </head>\n  <body>\n    <!-- nav -->\n    <p>Hello   World</p>\n    <pre>  keep\n    this  </pre>\n  </body>\n</html>\n";

    #[test]
    fn test_minify_page_shrinks() {
        let out = minify_page(PAGE, &HtmlMinifyOptions::default()).unwrap();
        assert!(out.len() < PAGE.len());
        assert!(!out.contains("\n  <body>"));
        assert!(out.contains("Hello"));
    }

    #[test]
    fn test_comments_toggle() {
        let stripped = minify_page(PAGE, &HtmlMinifyOptions::default()).unwrap();
        assert!(!stripped.contains("nav"));

        let opts = HtmlMinifyOptions {
            remove_comments: false,
            ..HtmlMinifyOptions::default()
        };
        let kept = minify_page(PAGE, &opts).unwrap();
        assert!(kept.contains("<!-- nav -->"));
    }

    #[test]
    fn test_pre_preserved() {
        let out = minify_page(PAGE, &HtmlMinifyOptions::default()).unwrap();
        assert!(out.contains("<pre>  keep\n    this  </pre>"));
    }

    #[test]
    fn test_is_html_template() {
        assert!(is_html_template("404.html"));
        assert!(!is_html_template("sitemap.xml"));
        assert!(!is_html_template("robots.txt"));
    }
}
