//! Preprocessor macro definitions injected into vendored C files.

use std::fmt;

use crate::domain::CodeUnitWidth;

/// A single `#define NAME VALUE` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition {
    pub name: String,
    pub value: String,
}

impl MacroDefinition {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// Render as a newline-terminated directive.
    pub fn line(&self) -> String {
        format!("#define {} {}\n", self.name, self.value)
    }
}

impl fmt::Display for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#define {} {}", self.name, self.value)
    }
}

/// Macros prepended to every compiled translation unit.
pub fn translation_unit_macros(width: CodeUnitWidth) -> Vec<MacroDefinition> {
    vec![
        MacroDefinition::new("HAVE_CONFIG_H", "1"),
        MacroDefinition::new("PCRE2_CODE_UNIT_WIDTH", width.to_string()),
    ]
}

/// Feature block appended to `config.h.generic`.
pub fn config_header_macros(width: CodeUnitWidth) -> Vec<MacroDefinition> {
    vec![
        MacroDefinition::new("HAVE_MEMMOVE", "1"),
        MacroDefinition::new("HAVE_STRERROR", "1"),
        MacroDefinition::new(width.support_macro(), "1"),
        MacroDefinition::new("SUPPORT_UNICODE", "1"),
        MacroDefinition::new("SUPPORT_JIT", "1"),
    ]
}

/// Append the feature block to the generic config header template.
///
/// The block is separated from the template by a blank line.
pub fn render_config_header(template: &str, width: CodeUnitWidth) -> String {
    let mut content = String::with_capacity(template.len() + 160);
    content.push_str(template);
    content.push('\n');
    for definition in config_header_macros(width) {
        content.push_str(&definition.line());
    }
    content
}

/// Prepend each macro in turn to `content`.
///
/// Every definition is pushed above the ones before it, so the last macro
/// of `macros` ends up on the first line.
pub fn prepend_macros(content: &[u8], macros: &[MacroDefinition]) -> Vec<u8> {
    let header: String = macros.iter().rev().map(MacroDefinition::line).collect();
    let mut patched = Vec::with_capacity(header.len() + content.len());
    patched.extend_from_slice(header.as_bytes());
    patched.extend_from_slice(content);
    patched
}
