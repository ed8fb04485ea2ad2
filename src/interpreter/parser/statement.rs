use logos::Logos;

use crate::{
    ast::{Fragment, FunctionDef, Statement},
    error::{Error, ParseError},
    interpreter::lexer::Token,
};

/// Classifies a single line into one of the fixed statement forms.
///
/// The forms are tried in this order; the first structural match wins:
/// 1. `var <name> = <expr>`
/// 2. `print <expr>`
/// 3. `input <name>[, <expr>]`
/// 4. `if <condition> then <statement>`
/// 5. `calc <expr>`
/// 6. `function <name>(<params>) = <expr>`
///
/// Anything else becomes [`Statement::Command`] carrying the line exactly as
/// given, surrounding whitespace included. A keyword only counts when
/// it is followed by whitespace and the required parts are present, so
/// `print` alone or `var = 1` fall through to the command form.
///
/// Only the statement header is examined here; embedded expressions stay as
/// [`Fragment`]s until the statement runs.
///
/// An `if` line without a `then` is a command too, even when its text does
/// not tokenize; lexing errors in a real condition surface when it runs.
///
/// # Errors
/// Returns `ParseError::DuplicateParameter` for a function header naming a
/// parameter twice.
///
/// # Example
/// ```
/// use jpp::{
///     ast::{Fragment, Statement},
///     interpreter::parser::statement::parse_statement,
/// };
///
/// let statement = parse_statement(Fragment::new("var x = 1 + 2")).unwrap();
/// match statement {
///     Statement::Var { name, value } => {
///         assert_eq!(name, "x");
///         assert_eq!(value.text.trim(), "1 + 2");
///         assert_eq!(value.offset, 7);
///     },
///     other => panic!("unexpected statement {other:?}"),
/// }
/// ```
pub fn parse_statement(raw: Fragment<'_>) -> Result<Statement<'_>, Error> {
    let line = trim(raw);

    if let Some(rest) = keyword(line, "var")
       && let Some(statement) = parse_var(rest)
    {
        return Ok(statement);
    }
    if let Some(rest) = keyword(line, "print") {
        return Ok(Statement::Print { value: rest });
    }
    if let Some(rest) = keyword(line, "input")
       && let Some(statement) = parse_input(rest)
    {
        return Ok(statement);
    }
    if let Some(rest) = keyword(line, "if")
       && let Some(statement) = parse_if(rest)
    {
        return Ok(statement);
    }
    if let Some(rest) = keyword(line, "calc") {
        return Ok(Statement::Calc { value: rest });
    }
    if let Some(rest) = keyword(line, "function")
       && let Some(statement) = parse_function(rest)?
    {
        return Ok(statement);
    }

    Ok(Statement::Command(raw.text))
}

/// Strips surrounding whitespace, keeping offsets aligned with the line.
fn trim(fragment: Fragment<'_>) -> Fragment<'_> {
    let leading = fragment.text.len() - fragment.text.trim_start().len();
    let fragment = fragment.tail(leading);
    fragment.head(fragment.text.trim_end().len())
}

/// Matches `word` at the start of `line` followed by whitespace and some
/// non-blank remainder, which is returned.
fn keyword<'a>(line: Fragment<'a>, word: &str) -> Option<Fragment<'a>> {
    let rest = line.text.strip_prefix(word)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = line.tail(word.len());
    if rest.is_blank() {
        return None;
    }
    Some(rest)
}

/// `<name> = <expr>`
fn parse_var(rest: Fragment<'_>) -> Option<Statement<'_>> {
    let mut lexer = Token::lexer(rest.text).spanned();

    let Some((Ok(Token::Identifier(name)), _)) = lexer.next() else {
        return None;
    };
    let Some((Ok(Token::Equals), span)) = lexer.next() else {
        return None;
    };

    let value = rest.tail(span.end);
    if value.is_blank() {
        return None;
    }
    Some(Statement::Var { name, value })
}

/// `<name>` or `<name>, <prompt expr>`
fn parse_input(rest: Fragment<'_>) -> Option<Statement<'_>> {
    let mut lexer = Token::lexer(rest.text).spanned();

    let Some((Ok(Token::Identifier(name)), _)) = lexer.next() else {
        return None;
    };

    match lexer.next() {
        None => Some(Statement::Input { name,
                                        prompt: None }),
        Some((Ok(Token::Comma), span)) => {
            let prompt = rest.tail(span.end);
            if prompt.is_blank() {
                return None;
            }
            Some(Statement::Input { name,
                                    prompt: Some(prompt) })
        },
        Some(_) => None,
    }
}

/// `<condition> then <statement>`, split at the first `then` token.
///
/// String literals are skipped as whole tokens, so a `then` inside quotes
/// never splits the line.
fn parse_if(rest: Fragment<'_>) -> Option<Statement<'_>> {
    let mut lexer = Token::lexer(rest.text).spanned();

    // Untokenizable text is skipped; the condition is lexed again when it runs.
    while let Some((token, span)) = lexer.next() {
        if let Ok(Token::Identifier(word)) = token
           && word == "then"
        {
            let condition = rest.head(span.start);
            let action = trim(rest.tail(span.end));
            if condition.is_blank() || action.is_blank() {
                return None;
            }
            return Some(Statement::If { condition, action });
        }
    }

    None
}

/// `<name>(<params>) = <expr>`
///
/// The body is kept as text; it is parsed each time the function is called.
fn parse_function(rest: Fragment<'_>) -> Result<Option<Statement<'_>>, Error> {
    let mut lexer = Token::lexer(rest.text).spanned();

    let Some((Ok(Token::Identifier(name)), _)) = lexer.next() else {
        return Ok(None);
    };
    let Some((Ok(Token::LParen), _)) = lexer.next() else {
        return Ok(None);
    };

    let mut params: Vec<String> = Vec::new();
    let mut expect_param = true;
    loop {
        match lexer.next() {
            Some((Ok(Token::RParen), _)) if !expect_param || params.is_empty() => break,
            Some((Ok(Token::Identifier(param)), span)) if expect_param => {
                if params.contains(&param) {
                    return Err(ParseError::DuplicateParameter { name:   param,
                                                                offset: rest.offset + span.start, }.into());
                }
                params.push(param);
                expect_param = false;
            },
            Some((Ok(Token::Comma), _)) if !expect_param => expect_param = true,
            _ => return Ok(None),
        }
    }

    let Some((Ok(Token::Equals), span)) = lexer.next() else {
        return Ok(None);
    };

    let body = rest.tail(span.end);
    if body.is_blank() {
        return Ok(None);
    }

    Ok(Some(Statement::Function(FunctionDef { name,
                                              params,
                                              body: body.text.trim().to_string() })))
}
