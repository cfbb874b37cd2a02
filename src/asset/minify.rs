//! Asset minification for JS and CSS files.
//!
//! Uses oxc for JavaScript and lightningcss for CSS. Both are treated as
//! opaque string transforms; a parse failure is reported, never papered over
//! with the unminified source. Input that is already minimal comes back
//! byte-for-byte, so its digest is the digest of the source.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use thiserror::Error;

/// Minifier rejected its input.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct MinifyError(pub String);

/// Minify JavaScript source code.
///
/// Extra scripts are classic scripts, not modules: top-level names are
/// globals other scripts may rely on, so they are never mangled.
pub fn minify_js(source: &str) -> Result<String, MinifyError> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(false);
    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(err) = ret.errors.first() {
        return Err(MinifyError(err.to_string()));
    }
    if ret.panicked {
        return Err(MinifyError("parser aborted".into()));
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(smaller_of(source, code))
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Result<String, MinifyError> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| MinifyError(e.to_string()))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| MinifyError(e.to_string()))?;
    Ok(smaller_of(source, result.code))
}

/// Keep the source unless minification actually shortened it.
///
/// Codegen may respell literals (quote style, template strings) without
/// saving a byte; such output is discarded.
fn smaller_of(source: &str, minified: String) -> String {
    if minified.len() < source.len() {
        minified
    } else {
        source.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css() {
        let css = minify_css(".ui-hidden {\n    display: none;\n}\n").unwrap();
        assert_eq!(css, ".ui-hidden{display:none}");
    }

    #[test]
    fn test_minify_js_shrinks() {
        let source = "function greet(name) {\n    // say hi\n    console.log('Hello ' + name);\n}\n";
        let minified = minify_js(source).unwrap();
        assert!(minified.len() < source.len());
        assert!(!minified.contains("say hi"));
        assert!(minified.contains("console.log"));
    }

    #[test]
    fn test_minify_js_already_minimal_unchanged() {
        let source = "console.log('Hello World');";
        assert_eq!(minify_js(source).unwrap(), source);
    }

    #[test]
    fn test_minify_css_already_minimal_unchanged() {
        let source = ".ui-hidden{display:none}";
        assert_eq!(minify_css(source).unwrap(), source);
    }

    #[test]
    fn test_smaller_of() {
        assert_eq!(smaller_of("a = 1;", "a=1".into()), "a=1");
        assert_eq!(smaller_of("f('x');", "f(`x`);".into()), "f('x');");
    }

    #[test]
    fn test_minify_js_syntax_error() {
        let err = minify_js("function (").unwrap_err();
        assert!(!err.0.is_empty());
    }
}
