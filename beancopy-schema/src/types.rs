//! Declared Java types and method signatures as written in schema descriptions.
//!
//! Both types parse from plain strings (`"java.util.List<com.acme.Line>"`,
//! `"setQuantity(int)"`) so schema files stay close to Java source.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Java primitive type names.
pub const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// Raw name of the only list type the generator converts element-wise.
pub const LIST_TYPE: &str = "java.util.List";

/// A declared (possibly generic) Java type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct DeclaredType {
    raw: String,
    args: Vec<DeclaredType>,
    dims: usize,
}

impl DeclaredType {
    /// A non-generic type such as `int` or `com.acme.Order`.
    pub fn named(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            args: Vec::new(),
            dims: 0,
        }
    }

    /// The erased type name, without generic arguments or array brackets.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Generic type arguments in declaration order.
    pub fn args(&self) -> &[DeclaredType] {
        &self.args
    }

    /// Number of array dimensions (`byte[]` has one).
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Exactly the `boolean` primitive (not `java.lang.Boolean`).
    pub fn is_boolean(&self) -> bool {
        self.dims == 0 && self.raw == "boolean"
    }

    /// Raw type is `java.util.List`, whatever its arguments.
    pub fn is_list(&self) -> bool {
        self.dims == 0 && self.raw == LIST_TYPE
    }

    pub fn is_array(&self) -> bool {
        self.dims > 0
    }

    pub fn is_parameterized(&self) -> bool {
        !self.args.is_empty()
    }

    /// Whether two types erase to the same runtime class, as Java method lookup does.
    pub fn same_erasure(&self, other: &DeclaredType) -> bool {
        self.raw == other.raw && self.dims == other.dims
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        for _ in 0..self.dims {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

impl FromStr for DeclaredType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let ty = parser.declared_type()?;
        parser.end()?;
        Ok(ty)
    }
}

impl TryFrom<String> for DeclaredType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for DeclaredType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A declared method: name plus parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct MethodSignature {
    name: String,
    params: Vec<DeclaredType>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, params: Vec<DeclaredType>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[DeclaredType] {
        &self.params
    }

    /// Zero-argument method with the given name.
    pub fn is_getter_named(&self, name: &str) -> bool {
        self.name == name && self.params.is_empty()
    }

    /// Single-argument method with the given name whose parameter erases to `param`.
    pub fn is_setter_named(&self, name: &str, param: &DeclaredType) -> bool {
        self.name == name && self.params.len() == 1 && self.params[0].same_erasure(param)
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")
    }
}

impl FromStr for MethodSignature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let name = parser.identifier()?;
        parser.expect('(')?;
        let mut params = Vec::new();
        if !parser.eat(')') {
            loop {
                params.push(parser.declared_type()?);
                if parser.eat(')') {
                    break;
                }
                parser.expect(',')?;
            }
        }
        parser.end()?;
        Ok(Self { name, params })
    }
}

impl TryFrom<String> for MethodSignature {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for MethodSignature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Recursive-descent parser over a type or signature string.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<(), String> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", c)))
        }
    }

    fn end(&mut self) -> Result<(), String> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(self.unexpected("end of input")),
        }
    }

    fn unexpected(&mut self, expected: &str) -> String {
        match self.peek() {
            Some(c) => format!(
                "expected {} at offset {} in '{}', found '{}'",
                expected, self.pos, self.input, c
            ),
            None => format!(
                "expected {} at end of '{}'",
                expected, self.input
            ),
        }
    }

    /// A dotted/`$`-separated name; validity of each segment is checked later.
    fn identifier(&mut self) -> Result<String, String> {
        self.skip_whitespace();
        let len = self
            .rest()
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$' || c == '.'))
            .unwrap_or(self.rest().len());
        if len == 0 {
            return Err(self.unexpected("a type name"));
        }
        let name = self.rest()[..len].to_string();
        self.pos += len;
        Ok(name)
    }

    fn declared_type(&mut self) -> Result<DeclaredType, String> {
        if self.peek() == Some('?') {
            return Err(format!("wildcard types are not supported in '{}'", self.input));
        }
        let raw = self.identifier()?;
        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.declared_type()?);
                if self.eat('>') {
                    break;
                }
                self.expect(',')?;
            }
        }
        let mut dims = 0;
        while self.eat('[') {
            self.expect(']')?;
            dims += 1;
        }
        Ok(DeclaredType { raw, args, dims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_type() {
        let ty: DeclaredType = "com.acme.Order".parse().unwrap();
        assert_eq!(ty.raw(), "com.acme.Order");
        assert!(!ty.is_parameterized());
        assert!(!ty.is_list());
    }

    #[test]
    fn test_parse_list_type() {
        let ty: DeclaredType = "java.util.List<com.acme.Line>".parse().unwrap();
        assert!(ty.is_list());
        assert_eq!(ty.args(), &[DeclaredType::named("com.acme.Line")]);
        assert_eq!(ty.to_string(), "java.util.List<com.acme.Line>");
    }

    #[test]
    fn test_parse_nested_generics_and_whitespace() {
        let ty: DeclaredType = " java.util.Map< java.lang.String , java.util.List<int[]> > "
            .parse()
            .unwrap();
        assert_eq!(ty.args().len(), 2);
        assert_eq!(ty.args()[1].args()[0].dims(), 1);
        assert_eq!(
            ty.to_string(),
            "java.util.Map<java.lang.String, java.util.List<int[]>>"
        );
    }

    #[test]
    fn test_parse_array() {
        let ty: DeclaredType = "byte[]".parse().unwrap();
        assert!(ty.is_array());
        assert!(!ty.is_list());
        assert_eq!(ty.raw(), "byte");
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<DeclaredType>().is_err());
        assert!("java.util.List<".parse::<DeclaredType>().is_err());
        assert!("java.util.List<?>".parse::<DeclaredType>().is_err());
        assert!("a b".parse::<DeclaredType>().is_err());
        assert!("int[".parse::<DeclaredType>().is_err());
    }

    #[test]
    fn test_boolean_is_only_the_primitive() {
        assert!(DeclaredType::named("boolean").is_boolean());
        assert!(!DeclaredType::named("java.lang.Boolean").is_boolean());
    }

    #[test]
    fn test_same_erasure_ignores_arguments() {
        let a: DeclaredType = "java.util.List<com.acme.A>".parse().unwrap();
        let b: DeclaredType = "java.util.List<com.acme.B>".parse().unwrap();
        assert!(a.same_erasure(&b));
        assert!(!a.same_erasure(&DeclaredType::named("java.util.Set")));
    }

    #[test]
    fn test_parse_method_signature() {
        let m: MethodSignature = "setLines(java.util.List<com.acme.Line>)".parse().unwrap();
        assert_eq!(m.name(), "setLines");
        assert_eq!(m.params().len(), 1);
        assert!(m.is_setter_named("setLines", &DeclaredType::named("java.util.List")));

        let getter: MethodSignature = "getId()".parse().unwrap();
        assert!(getter.is_getter_named("getId"));
        assert!(!getter.is_getter_named("getName"));

        let two: MethodSignature = "put(java.lang.String, java.util.Map<int, long>)"
            .parse()
            .unwrap();
        assert_eq!(two.params().len(), 2);
        assert_eq!(two.to_string(), "put(java.lang.String, java.util.Map<int, long>)");
    }

    #[test]
    fn test_parse_method_signature_errors() {
        assert!("getId".parse::<MethodSignature>().is_err());
        assert!("getId(".parse::<MethodSignature>().is_err());
        assert!("setId(int,)".parse::<MethodSignature>().is_err());
        assert!("setId(int) extra".parse::<MethodSignature>().is_err());
    }
}
