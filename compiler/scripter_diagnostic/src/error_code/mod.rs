use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Runtime errors, one per category
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Integer literal out of range
    E0003,
    /// Unterminated block comment
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Source exceeds the addressable span range
    E0006,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Invalid assignment target
    E1005,
    /// `static` outside program or function top level
    E1006,
    /// `export` outside program top level
    E1007,
    /// `break`/`continue` outside a loop
    E1008,
    /// Expected module name string
    E1009,

    // Runtime Errors (E2xxx)
    /// Undeclared variable or assignment into the global context
    E2001,
    /// Undeclared module, missing export or cyclic import
    E2002,
    /// Unknown property or index
    E2003,
    /// Operand, callee or arity mismatch
    E2004,
    /// Script `throw` or interpreter runtime fault
    E2005,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            // Runtime
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser/syntax error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// The category a host sees for this code.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::E2001 => ErrorCategory::Reference,
            ErrorCode::E2002 => ErrorCategory::Module,
            ErrorCode::E2003 => ErrorCategory::Property,
            ErrorCode::E2004 => ErrorCategory::Type,
            ErrorCode::E2005 => ErrorCategory::Runtime,
            _ => ErrorCategory::Syntax,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure taxonomy exposed to embedding hosts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    /// Malformed source; raised by the lexer or parser.
    Syntax,
    /// Undeclared variable, or assignment into the global context.
    Reference,
    /// Undeclared module, missing export, cyclic import.
    Module,
    /// Unknown property or index on an object.
    Property,
    /// Non-callable callee, arity mismatch, unsupported operand shapes.
    Type,
    /// Script `throw`, or a runtime fault raised by the interpreter.
    Runtime,
}

impl ErrorCategory {
    /// Conventional script-facing name, e.g. `ReferenceError`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Syntax => "SyntaxError",
            ErrorCategory::Reference => "ReferenceError",
            ErrorCategory::Module => "ModuleError",
            ErrorCategory::Property => "PropertyError",
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Runtime => "ScriptRuntimeError",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
