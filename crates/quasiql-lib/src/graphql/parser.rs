//! Recursive-descent parser for executable GraphQL documents.

use rowan::{TextRange, TextSize};

use super::ast::*;
use super::lexer::{Token, TokenKind, token_text};
use super::strings::{block_string_value, unescape};

/// Error before it is attached to a [`Source`](super::Source).
#[derive(Debug)]
pub(super) struct ParseError {
    pub message: String,
    pub range: TextRange,
}

type PResult<T> = Result<T, ParseError>;

pub(super) struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    max_depth: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>, max_depth: u32) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    pub fn parse_document(mut self) -> PResult<Document> {
        let mut definitions = Vec::new();
        while !self.eof() {
            definitions.push(self.parse_definition()?);
        }
        Ok(Document::new(definitions))
    }

    // --- Token access ---

    fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn current(&self) -> TokenKind {
        self.tokens.get(self.pos).map_or(TokenKind::Eof, |t| t.kind)
    }

    fn current_span(&self) -> TextRange {
        self.tokens.get(self.pos).map_or_else(
            || TextRange::empty(TextSize::from(self.source.len() as u32)),
            |t| t.span,
        )
    }

    fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    fn currently_is_keyword(&self, keyword: &str) -> bool {
        self.currently_is(TokenKind::Name) && self.current_text() == keyword
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.currently_is(kind) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, kind: TokenKind) -> PResult<Token> {
        if self.currently_is(kind) {
            return Ok(self.bump());
        }
        Err(self.unexpected_with(&format!("Expected {}", kind.describe())))
    }

    fn expect_keyword(&mut self, keyword: &str) -> PResult<Token> {
        if self.currently_is_keyword(keyword) {
            return Ok(self.bump());
        }
        Err(self.unexpected_with(&format!("Expected \"{keyword}\"")))
    }

    /// Range from `start` to the end of the last consumed token.
    fn span_from(&self, start: TextSize) -> TextRange {
        let end = self
            .pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(start, |t| t.span.end());
        TextRange::new(start, end.max(start))
    }

    // --- Errors ---

    fn describe_current(&self) -> String {
        match self.current() {
            TokenKind::Eof => "<EOF>".to_string(),
            kind @ (TokenKind::Name
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::BlockString) => {
                format!("{} \"{}\"", kind.describe(), self.current_text())
            }
            kind => kind.describe().to_string(),
        }
    }

    fn unexpected(&self) -> ParseError {
        if self.currently_is(TokenKind::Garbage) {
            return self.garbage_error();
        }
        self.error(format!("Unexpected {}.", self.describe_current()))
    }

    fn unexpected_with(&self, expected: &str) -> ParseError {
        if self.currently_is(TokenKind::Garbage) {
            return self.garbage_error();
        }
        self.error(format!("{expected}, found {}.", self.describe_current()))
    }

    fn garbage_error(&self) -> ParseError {
        let text = self.current_text();
        if text.starts_with('"') {
            return self.error("Unterminated string.");
        }
        let ch = text.chars().next().unwrap_or('?');
        self.error(format!("Unexpected character: \"{ch}\"."))
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            range: self.current_span(),
        }
    }

    fn enter(&mut self) -> PResult<()> {
        if self.depth >= self.max_depth {
            return Err(self.error("Document is nested too deeply."));
        }
        self.depth += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }

    // --- Definitions ---

    fn parse_definition(&mut self) -> PResult<Definition> {
        if self.currently_is(TokenKind::BraceL) {
            return self.parse_operation_definition().map(Definition::Operation);
        }
        if !self.currently_is(TokenKind::Name) {
            return Err(self.unexpected());
        }
        match self.current_text() {
            "query" | "mutation" | "subscription" => {
                self.parse_operation_definition().map(Definition::Operation)
            }
            "fragment" => self.parse_fragment_definition().map(Definition::Fragment),
            "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
            | "directive" | "extend" => Err(self.error(format!(
                "Unexpected Name \"{}\": type system definitions are not allowed in executable documents.",
                self.current_text()
            ))),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_operation_definition(&mut self) -> PResult<OperationDefinition> {
        let start = self.current_span().start();

        if self.currently_is(TokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                span: self.span_from(start),
                selection_set,
            });
        }

        let keyword = self.expect(TokenKind::Name)?;
        let operation = OperationType::from_keyword(token_text(self.source, &keyword))
            .ok_or_else(|| ParseError {
                message: "Expected an operation type.".to_string(),
                range: keyword.span,
            })?;
        let name = if self.currently_is(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_fragment_definition(&mut self) -> PResult<FragmentDefinition> {
        let start = self.current_span().start();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_fragment_name(&mut self) -> PResult<Name> {
        if self.currently_is_keyword("on") {
            return Err(self.unexpected());
        }
        self.parse_name()
    }

    fn parse_variable_definitions(&mut self) -> PResult<Vec<VariableDefinition>> {
        if !self.eat(TokenKind::ParenL) {
            return Ok(Vec::new());
        }
        let mut definitions = vec![self.parse_variable_definition()?];
        while !self.eat(TokenKind::ParenR) {
            definitions.push(self.parse_variable_definition()?);
        }
        Ok(definitions)
    }

    fn parse_variable_definition(&mut self) -> PResult<VariableDefinition> {
        let start = self.current_span().start();
        let variable = self.parse_variable()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let default_value = if self.eat(TokenKind::Equals) {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;

        Ok(VariableDefinition {
            variable,
            ty,
            default_value,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_variable(&mut self) -> PResult<Variable> {
        self.expect(TokenKind::Dollar)?;
        Ok(Variable {
            name: self.parse_name()?,
        })
    }

    // --- Selections ---

    fn parse_selection_set(&mut self) -> PResult<SelectionSet> {
        let start = self.current_span().start();
        self.expect(TokenKind::BraceL)?;
        self.enter()?;
        let mut selections = vec![self.parse_selection()?];
        while !self.eat(TokenKind::BraceR) {
            selections.push(self.parse_selection()?);
        }
        self.exit();

        Ok(SelectionSet {
            selections,
            span: self.span_from(start),
        })
    }

    fn parse_selection(&mut self) -> PResult<Selection> {
        if self.currently_is(TokenKind::Spread) {
            return self.parse_fragment();
        }
        self.parse_field().map(Selection::Field)
    }

    fn parse_field(&mut self) -> PResult<Field> {
        let start = self.current_span().start();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.eat(TokenKind::Colon) {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.currently_is(TokenKind::BraceL) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_fragment(&mut self) -> PResult<Selection> {
        let start = self.current_span().start();
        self.expect(TokenKind::Spread)?;

        let has_type_condition = self.currently_is_keyword("on");
        if !has_type_condition && self.currently_is(TokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                span: self.span_from(start),
            }));
        }

        let type_condition = if has_type_condition {
            self.bump();
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        }))
    }

    // --- Arguments and directives ---

    fn parse_arguments(&mut self, is_const: bool) -> PResult<Vec<Argument>> {
        if !self.eat(TokenKind::ParenL) {
            return Ok(Vec::new());
        }
        let mut arguments = vec![self.parse_argument(is_const)?];
        while !self.eat(TokenKind::ParenR) {
            arguments.push(self.parse_argument(is_const)?);
        }
        Ok(arguments)
    }

    fn parse_argument(&mut self, is_const: bool) -> PResult<Argument> {
        let start = self.current_span().start();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(is_const)?;

        Ok(Argument {
            name,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_directives(&mut self, is_const: bool) -> PResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.currently_is(TokenKind::At) {
            let start = self.current_span().start();
            self.bump();
            let name = self.parse_name()?;
            let arguments = self.parse_arguments(is_const)?;
            directives.push(Directive {
                name,
                arguments,
                span: self.span_from(start),
            });
        }
        Ok(directives)
    }

    // --- Values ---

    fn parse_value(&mut self, is_const: bool) -> PResult<Value> {
        match self.current() {
            TokenKind::BracketL => self.parse_list(is_const),
            TokenKind::BraceL => self.parse_object(is_const),
            TokenKind::Int => Ok(Value::Int {
                value: self.bump_text(),
            }),
            TokenKind::Float => Ok(Value::Float {
                value: self.bump_text(),
            }),
            TokenKind::String => self.parse_string(),
            TokenKind::BlockString => {
                let raw = self.bump_text();
                let body = &raw[3..raw.len() - 3];
                Ok(Value::String {
                    value: block_string_value(body),
                    block: true,
                })
            }
            TokenKind::Name => {
                let value = match self.current_text() {
                    "true" => Value::Boolean { value: true },
                    "false" => Value::Boolean { value: false },
                    "null" => Value::Null,
                    text => Value::Enum {
                        value: text.to_string(),
                    },
                };
                self.bump();
                Ok(value)
            }
            TokenKind::Dollar if !is_const => Ok(Value::Variable {
                name: self.parse_variable()?.name,
            }),
            TokenKind::Dollar => {
                let start = self.current_span().start();
                self.bump();
                let name = self.parse_name()?;
                Err(ParseError {
                    message: format!("Unexpected variable \"${}\" in constant value.", name.value),
                    range: TextRange::new(start, name.span.end()),
                })
            }
            _ => Err(self.unexpected()),
        }
    }

    fn bump_text(&mut self) -> String {
        let token = self.bump();
        token_text(self.source, &token).to_string()
    }

    fn parse_string(&mut self) -> PResult<Value> {
        let token = self.bump();
        let raw = token_text(self.source, &token);
        let body = &raw[1..raw.len() - 1];
        let value = unescape(body).map_err(|(offset, message)| {
            let at = token.span.start() + TextSize::from(offset as u32 + 1);
            ParseError {
                message,
                range: TextRange::new(at, token.span.end()),
            }
        })?;
        Ok(Value::String {
            value,
            block: false,
        })
    }

    fn parse_list(&mut self, is_const: bool) -> PResult<Value> {
        self.expect(TokenKind::BracketL)?;
        self.enter()?;
        let mut values = Vec::new();
        while !self.eat(TokenKind::BracketR) {
            values.push(self.parse_value(is_const)?);
        }
        self.exit();
        Ok(Value::List { values })
    }

    fn parse_object(&mut self, is_const: bool) -> PResult<Value> {
        self.expect(TokenKind::BraceL)?;
        self.enter()?;
        let mut fields = Vec::new();
        while !self.eat(TokenKind::BraceR) {
            let name = self.parse_name()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value(is_const)?;
            fields.push(ObjectField { name, value });
        }
        self.exit();
        Ok(Value::Object { fields })
    }

    // --- Types and names ---

    fn parse_type(&mut self) -> PResult<Type> {
        let ty = if self.eat(TokenKind::BracketL) {
            self.enter()?;
            let inner = self.parse_type()?;
            self.expect(TokenKind::BracketR)?;
            self.exit();
            Type::List {
                ty: Box::new(inner),
            }
        } else {
            Type::Named {
                name: self.parse_name()?,
            }
        };

        if self.eat(TokenKind::Bang) {
            return Ok(Type::NonNull { ty: Box::new(ty) });
        }
        Ok(ty)
    }

    fn parse_named_type(&mut self) -> PResult<NamedType> {
        Ok(NamedType {
            name: self.parse_name()?,
        })
    }

    fn parse_name(&mut self) -> PResult<Name> {
        let token = self.expect(TokenKind::Name)?;
        Ok(Name::new(token_text(self.source, &token), token.span))
    }
}
