//! Boolean tag queries
//!
//! Filters registry sites by the tags they carry. Supports AND, OR, and
//! NOT with precedence NOT > AND > OR.
//!
//! # Examples
//!
//! ```
//! use semtag::domain::tags::TagQuery;
//!
//! let query = TagQuery::parse("current_time_millis AND NOT audit_millis").unwrap();
//! assert!(query.matches(&["current_time_millis".to_string()]));
//! ```

use crate::domain::tags::definition::is_valid_tag_name;
use crate::error::{Result, SemtagError};
use std::collections::HashSet;

/// Tag query abstract syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagQuery {
    /// Single tag name
    Single(String),

    /// Both sides must match
    And(Box<TagQuery>, Box<TagQuery>),

    /// Either side must match
    Or(Box<TagQuery>, Box<TagQuery>),

    /// Excludes matches
    Not(Box<TagQuery>),
}

impl TagQuery {
    /// Parse a query string into a TagQuery AST
    ///
    /// Operator keywords are case-insensitive; tag names are lowercased.
    pub fn parse(query: &str) -> Result<Self> {
        let tokens = tokenize(query)?;
        let mut pos = 0;
        let result = parse_or(&tokens, &mut pos)?;

        if pos != tokens.len() {
            return Err(SemtagError::InvalidQuery(format!(
                "unexpected token after position {} in '{}'",
                pos, query
            )));
        }

        Ok(result)
    }

    /// Evaluate this query against the tags of one site
    pub fn matches(&self, tags: &[String]) -> bool {
        let tag_set: HashSet<&str> = tags.iter().map(|s| s.as_str()).collect();
        self.matches_set(&tag_set)
    }

    fn matches_set(&self, tags: &HashSet<&str>) -> bool {
        match self {
            TagQuery::Single(tag) => tags.contains(tag.as_str()),
            TagQuery::And(left, right) => left.matches_set(tags) && right.matches_set(tags),
            TagQuery::Or(left, right) => left.matches_set(tags) || right.matches_set(tags),
            TagQuery::Not(inner) => !inner.matches_set(tags),
        }
    }
}

impl std::fmt::Display for TagQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagQuery::Single(tag) => write!(f, "{}", tag),
            TagQuery::And(left, right) => write!(f, "{} AND {}", left, right),
            TagQuery::Or(left, right) => write!(f, "({} OR {})", left, right),
            TagQuery::Not(inner) => write!(f, "NOT {}", inner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Tag(String),
    And,
    Or,
    Not,
}

fn tokenize(query: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    for word in query.split_whitespace() {
        match word.to_uppercase().as_str() {
            "AND" => tokens.push(Token::And),
            "OR" => tokens.push(Token::Or),
            "NOT" => tokens.push(Token::Not),
            _ => {
                let tag = word.to_lowercase();
                if !is_valid_tag_name(&tag) {
                    return Err(SemtagError::InvalidQuery(format!(
                        "invalid tag name '{}'",
                        word
                    )));
                }
                tokens.push(Token::Tag(tag));
            }
        }
    }

    if tokens.is_empty() {
        return Err(SemtagError::InvalidQuery("empty query".to_string()));
    }

    Ok(tokens)
}

/// OR expressions (lowest precedence)
fn parse_or(tokens: &[Token], pos: &mut usize) -> Result<TagQuery> {
    let mut left = parse_and(tokens, pos)?;

    while *pos < tokens.len() && matches!(tokens[*pos], Token::Or) {
        *pos += 1;
        let right = parse_and(tokens, pos)?;
        left = TagQuery::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// AND expressions (medium precedence)
fn parse_and(tokens: &[Token], pos: &mut usize) -> Result<TagQuery> {
    let mut left = parse_not(tokens, pos)?;

    while *pos < tokens.len() && matches!(tokens[*pos], Token::And) {
        *pos += 1;
        let right = parse_not(tokens, pos)?;
        left = TagQuery::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// NOT expressions (highest precedence, right-associative)
fn parse_not(tokens: &[Token], pos: &mut usize) -> Result<TagQuery> {
    if *pos >= tokens.len() {
        return Err(SemtagError::InvalidQuery(
            "unexpected end of query".to_string(),
        ));
    }

    if matches!(tokens[*pos], Token::Not) {
        *pos += 1;
        let inner = parse_not(tokens, pos)?;
        Ok(TagQuery::Not(Box::new(inner)))
    } else {
        parse_primary(tokens, pos)
    }
}

fn parse_primary(tokens: &[Token], pos: &mut usize) -> Result<TagQuery> {
    match tokens.get(*pos) {
        Some(Token::Tag(tag)) => {
            *pos += 1;
            Ok(TagQuery::Single(tag.clone()))
        }
        Some(other) => Err(SemtagError::InvalidQuery(format!(
            "expected tag name, found {:?}",
            other
        ))),
        None => Err(SemtagError::InvalidQuery(
            "unexpected end of query".to_string(),
        )),
    }
}
