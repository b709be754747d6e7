//! Rule arena and the evaluator that walks expressions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::expr::Expr;
use crate::matches::Matches;

/// Identifier of a named rule in a [`Grammar`].
///
/// Rule ids index into the grammar's arena, so `index` must be dense and
/// unique across the rule set.
pub trait RuleId: Copy + Eq + fmt::Debug {
    /// Position of the rule in the arena.
    fn index(self) -> usize;

    /// The rule name as written in ABNF.
    fn name(self) -> &'static str;
}

/// Rule id type for grammars without named rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoRule {}

impl RuleId for NoRule {
    fn index(self) -> usize {
        match self {}
    }

    fn name(self) -> &'static str {
        match self {}
    }
}

/// An immutable table of named rules.
///
/// Rules refer to each other through [`Expr::Rule`] ids that are resolved
/// by lookup at match time. The table holds no per-call state and can be
/// shared freely across threads.
///
/// # Examples
///
/// ```
/// use abnf_match::{alt, byte, concat, many, rule, Grammar, RuleId};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum R { List, Item }
///
/// impl RuleId for R {
///     fn index(self) -> usize { self as usize }
///     fn name(self) -> &'static str {
///         match self { R::List => "list", R::Item => "item" }
///     }
/// }
///
/// let grammar = Grammar::build([R::List, R::Item], |r| match r {
///     R::List => concat([rule(R::Item), many(concat([byte(b','), rule(R::Item)]))]),
///     R::Item => alt([byte(b'a'), byte(b'b')]),
/// });
///
/// assert_eq!(grammar.find(R::List, b"a,b,x"), [1, 3]);
/// assert!(grammar.is_match(R::List, b"a,b"));
/// ```
#[derive(Debug, Clone)]
pub struct Grammar<R> {
    rules: Vec<Option<Expr<R>>>,
}

impl<R: RuleId> Grammar<R> {
    /// Builds the arena by asking `definition` for every rule in `rules`.
    pub fn build<I, F>(rules: I, mut definition: F) -> Self
    where
        I: IntoIterator<Item = R>,
        F: FnMut(R) -> Expr<R>,
    {
        let mut table: Vec<Option<Expr<R>>> = Vec::new();
        for id in rules {
            let idx = id.index();
            if table.len() <= idx {
                table.resize_with(idx + 1, || None);
            }
            table[idx] = Some(definition(id));
        }
        Self { rules: table }
    }

    /// Returns the expression defining `rule`, if it is part of the grammar.
    #[must_use]
    pub fn definition(&self, rule: R) -> Option<&Expr<R>> {
        self.rules.get(rule.index()).and_then(Option::as_ref)
    }

    /// Returns every valid match length of `rule` at the start of `input`.
    #[must_use]
    pub fn find(&self, rule: R, input: &[u8]) -> Matches {
        self.find_at(rule, input, 0)
    }

    /// Returns every valid match length of `rule` starting at `pos`.
    ///
    /// Lengths are relative to `pos`. Positions past the end of `input`
    /// produce no matches.
    #[must_use]
    pub fn find_at(&self, rule: R, input: &[u8], pos: usize) -> Matches {
        if pos > input.len() {
            return Matches::new();
        }
        Evaluator::new(self, input)
            .eval_rule(rule, pos)
            .relative_to(pos)
    }

    /// Evaluates an arbitrary expression whose rule references resolve
    /// against this grammar.
    #[must_use]
    pub fn find_expr(&self, expr: &Expr<R>, input: &[u8]) -> Matches {
        Evaluator::new(self, input).eval(expr, 0)
    }

    /// Returns true if `rule` matches the whole of `input`.
    #[must_use]
    pub fn is_match(&self, rule: R, input: &[u8]) -> bool {
        self.find(rule, input).contains(input.len())
    }
}

/// Walks expressions over one input, memoizing rule results by offset.
///
/// The memo lives only as long as a single top-level call.
pub(crate) struct Evaluator<'g, 'i, R> {
    grammar: Option<&'g Grammar<R>>,
    input: &'i [u8],
    memo: HashMap<(usize, usize), Matches>,
}

impl<'g, 'i, R: RuleId> Evaluator<'g, 'i, R> {
    fn new(grammar: &'g Grammar<R>, input: &'i [u8]) -> Self {
        Self {
            grammar: Some(grammar),
            input,
            memo: HashMap::new(),
        }
    }

    pub(crate) fn detached(input: &'i [u8]) -> Self {
        Self {
            grammar: None,
            input,
            memo: HashMap::new(),
        }
    }

    /// Returns absolute end offsets of `expr` started at `pos`.
    pub(crate) fn eval(&mut self, expr: &Expr<R>, pos: usize) -> Matches {
        match expr {
            Expr::Empty => Matches::single(pos),
            Expr::Literal(bytes) => {
                if self.input[pos..].starts_with(bytes) {
                    Matches::single(pos + bytes.len())
                } else {
                    Matches::new()
                }
            }
            Expr::Caseless(bytes) => {
                let end = pos + bytes.len();
                match self.input.get(pos..end) {
                    Some(window) if window.eq_ignore_ascii_case(bytes) => Matches::single(end),
                    _ => Matches::new(),
                }
            }
            Expr::Class(class) => self.eval_byte(pos, |b| class.contains(b)),
            Expr::Range(lo, hi) => self.eval_byte(pos, |b| (*lo..=*hi).contains(&b)),
            Expr::Concat(parts) => self.eval_concat(parts, pos),
            Expr::Alt(choices) => {
                let mut result = Matches::new();
                for choice in choices {
                    result.union_with(&self.eval(choice, pos));
                }
                result
            }
            Expr::Optional(inner) => {
                let mut result = self.eval(inner, pos);
                result.insert(pos);
                result
            }
            Expr::Repeat { inner, min, max } => self.eval_repeat(inner, *min, *max, pos),
            Expr::Rule(id) => self.eval_rule(*id, pos),
        }
    }

    fn eval_byte(&self, pos: usize, accept: impl Fn(u8) -> bool) -> Matches {
        match self.input.get(pos) {
            Some(&b) if accept(b) => Matches::single(pos + 1),
            _ => Matches::new(),
        }
    }

    fn eval_concat(&mut self, parts: &[Expr<R>], pos: usize) -> Matches {
        let mut frontier = Matches::single(pos);
        for part in parts {
            let next = self.step(part, &frontier);
            if next.is_empty() {
                return next;
            }
            frontier = next;
        }
        frontier
    }

    /// Evaluates `expr` from every offset in `frontier` and unions the
    /// results in one sort, keeping wide frontiers linear.
    fn step(&mut self, expr: &Expr<R>, frontier: &Matches) -> Matches {
        let mut ends = Vec::new();
        for offset in frontier {
            ends.extend(self.eval(expr, offset));
        }
        ends.into_iter().collect()
    }

    // Offsets are expanded level by level. Once `min` repetitions are
    // reached, an offset is expanded only the first time it is seen: that
    // visit has the lowest count and therefore the most remaining budget.
    fn eval_repeat(
        &mut self,
        inner: &Expr<R>,
        min: usize,
        max: Option<usize>,
        pos: usize,
    ) -> Matches {
        let mut seen = HashSet::new();
        let mut reached = Vec::new();
        let mut frontier = Matches::single(pos);
        let mut count = 0usize;

        loop {
            if count >= min {
                frontier = frontier.iter().filter(|&o| seen.insert(o)).collect();
                reached.extend(frontier.iter());
            }
            if frontier.is_empty() || max.is_some_and(|m| count >= m) {
                break;
            }

            frontier = self.step(inner, &frontier);
            count += 1;
        }

        reached.into_iter().collect()
    }

    pub(crate) fn eval_rule(&mut self, id: R, pos: usize) -> Matches {
        let key = (id.index(), pos);
        if let Some(hit) = self.memo.get(&key) {
            return hit.clone();
        }

        let Some(definition) = self.grammar.and_then(|g| g.definition(id)) else {
            return Matches::new();
        };
        let result = self.eval(definition, pos);
        self.memo.insert(key, result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::CharClass;
    use crate::expr::{alt, byte, class, concat, lit, many, many1, opt, rule};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Arith {
        Expr,
        Term,
        Number,
        Unused,
    }

    impl RuleId for Arith {
        fn index(self) -> usize {
            self as usize
        }

        fn name(self) -> &'static str {
            match self {
                Self::Expr => "expr",
                Self::Term => "term",
                Self::Number => "number",
                Self::Unused => "unused",
            }
        }
    }

    fn arith() -> Grammar<Arith> {
        Grammar::build([Arith::Expr, Arith::Term, Arith::Number], |r| match r {
            Arith::Expr => concat([rule(Arith::Term), many(concat([byte(b'+'), rule(Arith::Term)]))]),
            Arith::Term => alt([
                rule(Arith::Number),
                concat([byte(b'('), rule(Arith::Expr), byte(b')')]),
            ]),
            Arith::Number => many1(class(CharClass::Digit)),
            Arith::Unused => lit(b"never"),
        })
    }

    #[test]
    fn resolves_mutual_references() {
        let g = arith();
        assert!(g.is_match(Arith::Expr, b"(1+2)+34"));
        assert!(g.is_match(Arith::Expr, b"((7))"));
        assert!(!g.is_match(Arith::Expr, b"(1+2"));
    }

    #[test]
    fn reports_every_prefix_length() {
        let g = arith();
        // "12+3": number gives 1 or 2, then "+3" only after the full 12.
        assert_eq!(g.find(Arith::Expr, b"12+3"), [1, 2, 4]);
    }

    #[test]
    fn find_at_is_relative_to_offset() {
        let g = arith();
        assert_eq!(g.find_at(Arith::Number, b"ab123", 2), [1, 2, 3]);
        assert!(g.find_at(Arith::Number, b"ab", 5).is_empty());
        assert!(g.find_at(Arith::Number, b"ab", 2).is_empty());
    }

    #[test]
    fn undefined_rule_matches_nothing() {
        let g = arith();
        assert!(g.definition(Arith::Unused).is_none());
        assert!(g.find(Arith::Unused, b"never").is_empty());
    }

    #[test]
    fn find_expr_resolves_rules() {
        let g = arith();
        let e = concat([rule(Arith::Number), opt(byte(b'!'))]);
        assert_eq!(g.find_expr(&e, b"5!"), [1, 2]);
    }

    #[test]
    fn wide_frontier_stays_linear() {
        // Every prefix of the run survives into the second part.
        let input = vec![b'7'; 50_000];
        let e: Expr<NoRule> = concat([many(class(CharClass::Digit)), opt(byte(b'!'))]);
        let start = std::time::Instant::now();
        let result = e.find(&input);
        assert_eq!(result.len(), input.len() + 1);
        assert_eq!(result.longest(), Some(input.len()));
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn detached_evaluation_ignores_rules() {
        let e = concat([byte(b'a'), rule(Arith::Number)]);
        assert!(e.find(b"a1").is_empty());
    }

    #[test]
    fn grammar_is_shareable_across_threads() {
        let g = std::sync::Arc::new(arith());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let g = std::sync::Arc::clone(&g);
                std::thread::spawn(move || {
                    let input = format!("{i}+{i}");
                    g.is_match(Arith::Expr, input.as_bytes())
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    }
}
