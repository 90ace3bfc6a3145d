//! Tracing for the evaluator.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so an
//! untraced evaluator carries no tracing cost. `PrintTracer` collects one
//! line per event for the CLI and for tests.

use simplevm_bytecode::Colors;

use crate::operators::OperatorKind;
use crate::type_system::TypeCategory;

use super::error::FoldError;
use super::value::TypedValue;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Operator applications and failures only.
    #[default]
    Default,
    /// Also operator entry and every leaf.
    Verbose,
}

/// Evaluator instrumentation.
///
/// Events arrive in evaluation order: `trace_enter` before an operator's
/// operands are evaluated, then either `trace_apply` or `trace_failure`.
pub trait Tracer {
    /// Called before an operator's operands are evaluated.
    fn trace_enter(&mut self, kind: OperatorKind);

    /// Called when a leaf yields its value.
    fn trace_leaf(&mut self, value: &TypedValue);

    /// Called after both rules ran.
    fn trace_apply(
        &mut self,
        kind: OperatorKind,
        operands: &[TypedValue],
        verdict: TypeCategory,
        result: &TypedValue,
    );

    /// Called when an entered operator fails.
    fn trace_failure(&mut self, kind: OperatorKind, err: &FoldError);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _kind: OperatorKind) {}

    #[inline(always)]
    fn trace_leaf(&mut self, _value: &TypedValue) {}

    #[inline(always)]
    fn trace_apply(
        &mut self,
        _kind: OperatorKind,
        _operands: &[TypedValue],
        _verdict: TypeCategory,
        _result: &TypedValue,
    ) {
    }

    #[inline(always)]
    fn trace_failure(&mut self, _kind: OperatorKind, _err: &FoldError) {}
}

/// Tracer that collects an indented evaluation log.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    /// Operators entered but not yet applied.
    depth: usize,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            depth: 0,
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, newline-terminated.
    pub fn into_output(self) -> String {
        let mut out = String::new();
        for line in self.lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Print all trace lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{}", line);
        }
    }

    fn push(&mut self, text: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{text}"));
    }

    fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, kind: OperatorKind) {
        if self.is_verbose() {
            let c = self.colors;
            self.push(format!("{}{}{} ...", c.kind(), kind.name(), c.reset()));
        }
        self.depth += 1;
    }

    fn trace_leaf(&mut self, value: &TypedValue) {
        if self.is_verbose() {
            let c = self.colors;
            self.push(format!("{}{value}{}", c.muted(), c.reset()));
        }
    }

    fn trace_apply(
        &mut self,
        kind: OperatorKind,
        operands: &[TypedValue],
        verdict: TypeCategory,
        result: &TypedValue,
    ) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        let args = operands
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut line = format!(
            "{}{}{} ({args}) -> {}{result}{}",
            c.kind(),
            kind.name(),
            c.reset(),
            c.value(),
            c.reset()
        );
        if verdict != result.category() {
            line.push_str(&format!(" {}(type rule: {verdict}){}", c.muted(), c.reset()));
        }
        self.push(line);
    }

    fn trace_failure(&mut self, kind: OperatorKind, err: &FoldError) {
        self.depth = self.depth.saturating_sub(1);
        self.push(format!("{} failed: {err}", kind.name()));
    }
}
