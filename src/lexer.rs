use std::iter::{Fuse, Peekable};
use std::str::Chars;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    LeftParen,
    RightParen,
    Operator(Op),
    Int(i64),
    Float(f64),
    Var,
    End,
}

/// Raised on the first character the scanner cannot classify. The whole
/// token sequence is abandoned, not just the offending suffix.
struct ScanError;

struct CharStream<'a> {
    iterator: Peekable<Fuse<Chars<'a>>>,
}

impl<'a> CharStream<'a> {
    fn new(text: &'a str) -> CharStream<'a> {
        Self {
            iterator: text.chars().fuse().peekable(),
        }
    }

    fn next(&mut self) -> Option<char> {
        self.iterator.next()
    }

    fn peek(&mut self) -> Option<char> {
        self.iterator.peek().copied()
    }

    /// One character past `peek`, needed for the `1.5` vs `1.` decision.
    fn peek_next(&self) -> Option<char> {
        let mut ahead = self.iterator.clone();
        ahead.next();
        ahead.next()
    }
}

fn scan_number(first: char, stream: &mut CharStream) -> Result<Token, ScanError> {
    let mut buffer = String::new();
    buffer.push(first);

    while matches!(stream.peek(), Some(c) if c.is_ascii_digit()) {
        buffer.push(stream.next().ok_or(ScanError)?);
    }

    // A dot only belongs to the number when a digit follows it; "1." is
    // an integer and the dot is left for the next scan step.
    let is_float = stream.peek() == Some('.')
        && matches!(stream.peek_next(), Some(c) if c.is_ascii_digit());

    if is_float {
        buffer.push(stream.next().ok_or(ScanError)?);
        while matches!(stream.peek(), Some(c) if c.is_ascii_digit()) {
            buffer.push(stream.next().ok_or(ScanError)?);
        }
        buffer.parse().map(Token::Float).map_err(|_| ScanError)
    } else {
        // A digit run too long for i64 fails the scan rather than wrapping.
        buffer.parse().map(Token::Int).map_err(|_| ScanError)
    }
}

fn scan_token(stream: &mut CharStream) -> Result<Token, ScanError> {
    let c = stream.next().ok_or(ScanError)?;

    if c.is_ascii_digit() {
        return scan_number(c, stream);
    }

    match c {
        // 'x' is only a variable when an operator, ')' or end-of-input
        // follows; "x1", "xy" and the like are malformed.
        'x' => match stream.peek() {
            Some(')' | '/' | '*' | '+' | '-') | None => Ok(Token::Var),
            Some(_) => Err(ScanError),
        },
        '(' => Ok(Token::LeftParen),
        ')' => Ok(Token::RightParen),
        '+' => Ok(Token::Operator(Op::Add)),
        '-' => Ok(Token::Operator(Op::Sub)),
        '*' => Ok(Token::Operator(Op::Mul)),
        '/' => Ok(Token::Operator(Op::Div)),
        _ => Err(ScanError),
    }
}

pub struct Lexer {
    tokens: Vec<Token>,
    index: usize,
}

impl Lexer {
    fn new(line: &str) -> Lexer {
        // Whitespace is stripped up front, so "x 1" scans like "x1".
        let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        let mut stream = CharStream::new(&stripped);
        let mut tokens = vec![];

        while stream.peek().is_some() {
            match scan_token(&mut stream) {
                Ok(token) => tokens.push(token),
                Err(ScanError) => {
                    tokens.clear();
                    break;
                }
            }
        }

        tokens.push(Token::End);

        Lexer { tokens, index: 0 }
    }

    /// True when scanning produced no tokens at all, either because the
    /// input was empty or because a scan failure dropped the sequence.
    pub fn is_empty(&self) -> bool {
        self.tokens.len() == 1
    }

    pub fn peek(&self) -> Token {
        self.tokens.get(self.index).copied().unwrap_or(Token::End)
    }

    pub fn next(&mut self) -> Token {
        let tok = self.peek();
        self.index += 1;
        tok
    }
}

pub fn tokenize(line: &str) -> Lexer {
    Lexer::new(line)
}

#[cfg(test)]
mod test {
    use super::{tokenize, Op, Token};

    fn test_match(string: &str, tokens: impl IntoIterator<Item = Token>) {
        let mut lexer = tokenize(string);

        for tok in tokens {
            assert_eq!(lexer.next(), tok);
        }

        assert_eq!(lexer.next(), Token::End);
    }

    fn test_failure(string: &str) {
        let lexer = tokenize(string);
        assert!(lexer.is_empty(), "expected scan failure for {:?}", string);
    }

    #[test]
    fn test_operators() {
        let string = "+ - * /";
        let tokens = vec![Op::Add, Op::Sub, Op::Mul, Op::Div]
            .into_iter()
            .map(Token::Operator);

        test_match(string, tokens);
    }

    #[test]
    fn test_parens() {
        test_match("()", vec![Token::LeftParen, Token::RightParen]);
    }

    #[test]
    fn test_numbers() {
        // literals separated by operators, since spaces never separate
        // anything here
        let tokens = vec![
            Token::Int(1),
            Token::Operator(Op::Add),
            Token::Int(23),
            Token::Operator(Op::Add),
            Token::Float(4.5),
            Token::Operator(Op::Add),
            Token::Float(6.75),
        ];

        test_match("1+23+4.5+6.75", tokens);
    }

    #[test]
    fn test_dot_needs_following_digit() {
        // "1." scans the integer, then fails on the dangling dot, which
        // drops the whole sequence.
        test_failure("1.");
        test_failure(".5");
    }

    #[test]
    fn test_variable_followers() {
        test_match("x", vec![Token::Var]);
        test_match(
            "x+1",
            vec![Token::Var, Token::Operator(Op::Add), Token::Int(1)],
        );
        test_match("(x)", vec![Token::LeftParen, Token::Var, Token::RightParen]);
        test_match("x*x", vec![Token::Var, Token::Operator(Op::Mul), Token::Var]);
    }

    #[test]
    fn test_variable_bad_followers() {
        test_failure("x1");
        test_failure("xy");
        test_failure("x(");
        test_failure("x.5");
    }

    #[test]
    fn test_whitespace_stripped_before_scanning() {
        test_match(
            " 1 +\t2 ",
            vec![Token::Int(1), Token::Operator(Op::Add), Token::Int(2)],
        );
        test_match("  x ", vec![Token::Var]);
        // stripping joins "x" and "1", which is malformed
        test_failure("x 1");
        // ...and joins digit runs
        test_match("1 2", vec![Token::Int(12)]);
    }

    #[test]
    fn test_failure_drops_whole_sequence() {
        let lexer = tokenize("1+2#3");
        assert!(lexer.is_empty());
    }

    #[test]
    fn test_empty() {
        let mut lexer = tokenize("");
        assert!(lexer.is_empty());
        assert_eq!(lexer.next(), Token::End);
        assert_eq!(lexer.next(), Token::End);
    }

    #[test]
    fn test_int_literal_overflow_is_scan_failure() {
        test_failure("99999999999999999999");
    }
}
