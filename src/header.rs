use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::table::TableGenerator;

/// Tokens used when rendering the table as a C header. None of these
/// affect the table values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderLayout {
    #[serde(default = "default_guard")]
    pub guard: String,
    #[serde(default = "default_array_name")]
    pub array_name: String,
    #[serde(default = "default_element_type")]
    pub element_type: String,
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            guard: default_guard(),
            array_name: default_array_name(),
            element_type: default_element_type(),
            indent: default_indent(),
        }
    }
}

fn default_guard() -> String {
    "LEDGamma_h".to_string()
}

fn default_array_name() -> String {
    "led_gamma".to_string()
}

fn default_element_type() -> String {
    "uint16_t".to_string()
}

fn default_indent() -> String {
    "\t".to_string()
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl HeaderLayout {
    pub fn validate(&self) -> Result<(), GenerateError> {
        let invalid = |field, value: &str| GenerateError::InvalidIdentifier {
            field,
            value: value.to_string(),
        };

        if !is_c_identifier(&self.guard) {
            return Err(invalid("guard", &self.guard));
        }
        if !is_c_identifier(&self.array_name) || C_KEYWORDS.contains(&self.array_name.as_str()) {
            return Err(invalid("array_name", &self.array_name));
        }
        // Multi-word types such as `unsigned short` are allowed.
        let mut words = self.element_type.split_whitespace().peekable();
        if words.peek().is_none() || !words.all(is_c_identifier) {
            return Err(invalid("element_type", &self.element_type));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(invalid("indent", &self.indent));
        }
        Ok(())
    }
}

/// A lookup table rendered as an include-guarded C array declaration.
#[derive(Debug)]
pub struct CHeader<'a> {
    layout: &'a HeaderLayout,
    table: &'a TableGenerator,
}

impl<'a> CHeader<'a> {
    pub fn new(layout: &'a HeaderLayout, table: &'a TableGenerator) -> Result<Self, GenerateError> {
        layout.validate()?;
        tracing::debug!(
            "Rendering {}[{}] from {} curve, scale {}: {} ..= {}",
            layout.array_name,
            table.iter().len(),
            table.curve_name(),
            table.scale(),
            table.value(0),
            table.value(u8::MAX)
        );
        Ok(Self { layout, table })
    }

    pub fn generate(&self) -> String {
        self.to_string()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), GenerateError> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for CHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout;
        let values = self.table.iter();

        writeln!(f, "#ifndef {}", layout.guard)?;
        writeln!(f, "#define {}", layout.guard)?;
        writeln!(
            f,
            "const {} {}[{}] =",
            layout.element_type,
            layout.array_name,
            values.len()
        )?;
        writeln!(f, "{{")?;
        for value in values {
            writeln!(f, "{}{},", layout.indent, value)?;
        }
        writeln!(f, "}};")?;
        writeln!(f, "#endif")
    }
}
