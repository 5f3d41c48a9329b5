//! Canonical Java type names.
//!
//! Hosts describe field types with their canonical text, e.g.
//! `java.util.List<com.example.Item>` or `int[]`. [`TypeName`] splits that text
//! into a base name, type arguments and an array depth so the serializer
//! strategies can match on structure instead of raw strings.
//!
//! Simple names of well-known types (`String`, `Date`, `List`, `Bundle`, ...)
//! are expanded to their qualified form while parsing.

use std::fmt;
use std::str::FromStr;

use crate::catalog::canonical_simple_name;
use crate::error::ModelError;

/// Fallback for unbounded wildcards and raw containers.
pub const OBJECT_TYPE: &str = "java.lang.Object";

/// A parsed type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    base: String,
    arguments: Vec<TypeName>,
    array_depth: usize,
}

impl TypeName {
    /// Parse canonical type text.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let mut parser = Parser { raw, pos: 0 };
        let parsed = parser
            .parse_type()
            .and_then(|ty| parser.finish().map(|()| ty))
            .map_err(|message| ModelError::InvalidTypeName {
                type_name: raw.to_string(),
                message,
            })?;
        Ok(parsed)
    }

    /// Build a non-generic, non-array type name.
    pub fn simple(base: &str) -> Self {
        Self {
            base: canonical_simple_name(base).unwrap_or(base).to_string(),
            arguments: Vec::new(),
            array_depth: 0,
        }
    }

    /// Base name without type arguments or array suffixes.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn arguments(&self) -> &[TypeName] {
        &self.arguments
    }

    pub fn argument(&self, index: usize) -> Option<&TypeName> {
        self.arguments.get(index)
    }

    pub fn array_depth(&self) -> usize {
        self.array_depth
    }

    pub fn is_array(&self) -> bool {
        self.array_depth > 0
    }

    /// True when the type is exactly `base` with no arguments and no array suffix.
    pub fn is(&self, base: &str) -> bool {
        self.array_depth == 0 && self.arguments.is_empty() && self.base == base
    }

    /// True when the base matches one of `bases`, ignoring type arguments.
    pub fn is_one_of(&self, bases: &[&str]) -> bool {
        self.array_depth == 0 && bases.contains(&self.base.as_str())
    }

    /// Erased form usable in a class literal (`java.util.List`, `int[]`).
    pub fn erasure(&self) -> String {
        let mut out = self.base.clone();
        for _ in 0..self.array_depth {
            out.push_str("[]");
        }
        out
    }

    /// First type argument, or `java.lang.Object` for raw containers.
    pub fn element_or_object(&self) -> TypeName {
        self.arguments
            .first()
            .cloned()
            .unwrap_or_else(|| Self::simple(OBJECT_TYPE))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (idx, arg) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        for _ in 0..self.array_depth {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

impl FromStr for TypeName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct Parser<'a> {
    raw: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn rest(&self) -> &str {
        &self.raw[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        if let Some(after) = rest.strip_prefix(keyword)
            && after.starts_with(char::is_whitespace)
        {
            self.pos += keyword.len();
            return true;
        }
        false
    }

    fn parse_type(&mut self) -> Result<TypeName, String> {
        self.skip_ws();

        // Wildcards: `?` erases to Object, bounded wildcards keep their bound.
        if self.peek() == Some('?') {
            self.pos += 1;
            self.skip_ws();
            if !(self.eat_keyword("extends") || self.eat_keyword("super")) {
                return Ok(TypeName::simple(OBJECT_TYPE));
            }
            return self.parse_type();
        }

        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '.' {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        let base = &self.raw[start..self.pos];
        if base.is_empty() {
            return Err(format!("expected a type name at offset {start}"));
        }
        if base.starts_with('.') || base.ends_with('.') || base.contains("..") {
            return Err(format!("malformed qualified name '{base}'"));
        }

        self.skip_ws();
        let mut arguments = Vec::new();
        if self.peek() == Some('<') {
            self.pos += 1;
            loop {
                arguments.push(self.parse_type()?);
                self.skip_ws();
                match self.peek() {
                    Some(',') => self.pos += 1,
                    Some('>') => {
                        self.pos += 1;
                        break;
                    }
                    _ => return Err("unterminated type argument list".to_string()),
                }
            }
        }

        let mut array_depth = 0;
        loop {
            self.skip_ws();
            if self.rest().starts_with("[]") {
                self.pos += 2;
                array_depth += 1;
            } else {
                break;
            }
        }

        Ok(TypeName {
            base: canonical_simple_name(base).unwrap_or(base).to_string(),
            arguments,
            array_depth,
        })
    }

    fn finish(&mut self) -> Result<(), String> {
        self.skip_ws();
        if self.pos == self.raw.len() {
            Ok(())
        } else {
            Err(format!("unexpected trailing input '{}'", self.rest()))
        }
    }
}
