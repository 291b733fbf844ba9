use crate::evaluator::EvalError;

/// A runtime value.
///
/// Values form an owned tree: an [`ExprList`] owns its children outright, so
/// dropping a value releases everything below it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    /// A failed computation. Errors are terminal: they are reported, never
    /// combined with other values.
    Error(EvalError),
    /// An operator name such as `+`.
    Symbol(String),
    Expr(ExprList),
}

/// Discriminant of a [`Value`], handy for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Error,
    Symbol,
    Expr,
}

impl Value {
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn empty_list() -> Self {
        Value::Expr(ExprList::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Error(_) => ValueKind::Error,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Expr(_) => ValueKind::Expr,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ExprList> {
        match self {
            Value::Expr(list) => Some(list),
            _ => None,
        }
    }
}

impl From<ExprList> for Value {
    fn from(list: ExprList) -> Self {
        Value::Expr(list)
    }
}

/// An ordered list of child values, exclusively owned.
///
/// Position 0 is the operator slot once the list is evaluated; the rest are
/// operands, consumed left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprList {
    children: Vec<Value>,
}

impl ExprList {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.children.iter()
    }

    pub fn first(&self) -> Option<&Value> {
        self.children.first()
    }

    /// Appends `child` as the new last element.
    pub fn push(&mut self, child: Value) {
        self.children.push(child);
    }

    /// Removes the child at `index`, shifting the following children down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn pop_at(&mut self, index: usize) -> Value {
        assert!(
            index < self.children.len(),
            "pop_at index {} out of bounds (length: {})",
            index,
            self.children.len()
        );
        self.children.remove(index)
    }

    /// Removes the child at `index` and drops the rest of the list.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn take_at(mut self, index: usize) -> Value {
        self.pop_at(index)
    }
}

impl FromIterator<Value> for ExprList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ExprList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExprList {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
