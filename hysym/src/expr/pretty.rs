//! RcDoc-based renderer with termcolor annotations for [`Expr`].
//!
//! Role
//! - Produce the infix form of an expression (`(x + 1) * 3`), inserting parentheses exactly on
//!   the operand edges flagged at construction.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//! - Provide the canonical prefix form (`Mul(Add('x', 1), 3)`) through `Debug`, for diagnostics.
//!
//! Performance
//! - Documents are built bottom-up through [`postorder_apply`](crate::walker::postorder_apply);
//!   a shared sub-expression is laid out once and its document reused (it still prints at
//!   every occurrence).

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};

use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use smallvec::{SmallVec, smallvec};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::config::RenderConfig;
use crate::expr::{Expr, variant::BinaryOp, view::ExprView};
use crate::scalar::Scalar;
use crate::walker::postorder_apply_no_input;

/// Styles used to annotate parts of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Parentheses are colored by nesting level so matching pairs share a color.
    Paren(u8),
    Operator, // +, -, *, /, ^
    Number,
    Ident, // symbols
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    5 => Color::Magenta,
                    _ => unreachable!(),
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Number => {
                s.set_fg(Some(Color::Cyan));
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green)).set_bold(true);
            }
        }
        s
    }
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

fn op(s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(Style::Operator)
}

fn number(value: Scalar) -> RcDoc<'static, Style> {
    RcDoc::as_string(value).annotate(Style::Number)
}

fn ident(name: &str) -> RcDoc<'static, Style> {
    RcDoc::as_string(name).annotate(Style::Ident)
}

/// Document of one node, with the number of parenthesis levels nested inside it.
struct Rendered {
    doc: RcDoc<'static, Style>,
    nesting: u8,
}

impl Rendered {
    fn leaf(doc: RcDoc<'static, Style>) -> Self {
        Rendered { doc, nesting: 0 }
    }

    /// This document as an operand, wrapped when the edge asks for it.
    fn as_operand(&self, parenthesized: bool) -> (RcDoc<'static, Style>, u8) {
        if parenthesized {
            let doc = lparen(self.nesting)
                .append(self.doc.clone())
                .append(rparen(self.nesting));
            (doc, self.nesting.saturating_add(1))
        } else {
            (self.doc.clone(), self.nesting)
        }
    }
}

fn infix(expr: &Expr, operator: BinaryOp, operands: &[&Rendered]) -> Rendered {
    let &[lhs, rhs] = operands else {
        unreachable!("{operator} nodes always have two operands");
    };
    let (lhs_doc, lhs_nesting) = lhs.as_operand(expr.needs_parentheses(0));
    let (rhs_doc, rhs_nesting) = rhs.as_operand(expr.needs_parentheses(1));

    Rendered {
        doc: lhs_doc
            .append(RcDoc::space())
            .append(op(operator.symbol()))
            .append(RcDoc::space())
            .append(rhs_doc),
        nesting: lhs_nesting.max(rhs_nesting),
    }
}

fn render_node(expr: &Expr, operands: &[&Rendered]) -> Rendered {
    match expr.view() {
        ExprView::Number(value) => Rendered::leaf(number(*value)),
        ExprView::Symbol(name) => Rendered::leaf(ident(name)),
        ExprView::Add(_) => infix(expr, BinaryOp::Add, operands),
        ExprView::Sub(_) => infix(expr, BinaryOp::Sub, operands),
        ExprView::Mul(_) => infix(expr, BinaryOp::Mul, operands),
        ExprView::Div(_) => infix(expr, BinaryOp::Div, operands),
        ExprView::Pow(_) => infix(expr, BinaryOp::Pow, operands),
    }
}

fn to_doc(expr: &Expr) -> RcDoc<'static, Style> {
    let Ok(rendered) = postorder_apply_no_input(expr, |node, operands: &[&Rendered]| {
        Ok::<_, Infallible>(render_node(node, operands))
    });
    rendered.doc
}

// Forwards text to a termcolor sink, switching colors as annotations open and close.
struct StyledSink<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for StyledSink<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for StyledSink<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("expression layout failed")
    }
}

/// Lay `doc` out within `width` columns and write it, colors included, to `out`.
fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut sink = StyledSink { out };
    doc.render_raw(width, &mut sink)
}

fn print_colored(e: &Expr, config: &RenderConfig) -> io::Result<()> {
    let stdout = StandardStream::stdout(config.color);
    let mut stdout = stdout.lock();
    render_to(&to_doc(e), config.width, &mut stdout)
}

fn to_plain_string(e: &Expr, width: usize) -> String {
    let mut buf = String::new();
    to_doc(e)
        .render_fmt(width, &mut buf)
        .expect("writing into a String cannot fail");
    buf
}

/// Infix text of `expr`, e.g. `(1 + 2) * 3`.
///
/// Same text as the `Display` implementation.
pub fn render(expr: &Expr) -> String {
    to_plain_string(expr, RenderConfig::DEFAULT_WIDTH)
}

// ======================== Trait impls =========================
/// Pretty-printing conveniences for [`Expr`].
pub trait PrettyExpr {
    /// Styled document for this expression, for composing into larger documents.
    /// Shared sub-expressions reuse the same document.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render this expression with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print this expression to stdout with colors (TTY-aware), at auto-detected width.
    fn pretty_print(&self) -> io::Result<()> {
        self.pretty_print_with(&RenderConfig::default())
    }

    /// Print this expression to stdout following `config`.
    fn pretty_print_with(&self, config: &RenderConfig) -> io::Result<()>;

    /// Format this expression into a plain string (no colors).
    fn pretty_string(&self) -> String;
}

impl PrettyExpr for Expr {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        to_doc(self)
    }

    #[inline]
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        render_to(&self.pretty_doc(), width, out)
    }

    #[inline]
    fn pretty_print_with(&self, config: &RenderConfig) -> io::Result<()> {
        print_colored(self, config)
    }

    #[inline]
    fn pretty_string(&self) -> String {
        render(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FmtWrite::new(f);
        self.pretty_doc()
            .render_raw(RenderConfig::DEFAULT_WIDTH, &mut w)
    }
}

impl fmt::Debug for Expr {
    /// Canonical prefix form: `Kind(lhs, rhs)` for operators, the literal for numbers and the
    /// quoted name for symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Frame<'a> {
            Enter(&'a Expr),
            Text(&'static str),
        }

        let mut stack: SmallVec<[Frame<'_>; 16]> = smallvec![Frame::Enter(self)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Text(text) => f.write_str(text)?,
                Frame::Enter(e) => match e.view() {
                    ExprView::Number(value) => write!(f, "{value}")?,
                    ExprView::Symbol(name) => write!(f, "'{name}'")?,
                    ExprView::Add([lhs, rhs])
                    | ExprView::Sub([lhs, rhs])
                    | ExprView::Mul([lhs, rhs])
                    | ExprView::Div([lhs, rhs])
                    | ExprView::Pow([lhs, rhs]) => {
                        write!(f, "{}(", e.kind())?;
                        stack.push(Frame::Text(")"));
                        stack.push(Frame::Enter(rhs));
                        stack.push(Frame::Text(", "));
                        stack.push(Frame::Enter(lhs));
                    }
                },
            }
        }

        Ok(())
    }
}
