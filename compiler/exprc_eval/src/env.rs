// Variable bindings for expression evaluation.
// Names are single characters; a fallback value, when set, answers for every
// name without an explicit binding.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: BTreeMap<char, f64>,
    fallback: Option<f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment that binds every variable to `value`.
    pub fn uniform(value: f64) -> Self {
        Self {
            bindings: BTreeMap::new(),
            fallback: Some(value),
        }
    }

    /// Builder-style variant of [`Environment::bind`].
    pub fn with(mut self, name: char, value: f64) -> Self {
        self.bind(name, value);
        self
    }

    /// Binds `name`, returning the value it previously had, if any.
    pub fn bind(&mut self, name: char, value: f64) -> Option<f64> {
        self.bindings.insert(name, value)
    }

    pub fn unbind(&mut self, name: char) -> Option<f64> {
        self.bindings.remove(&name)
    }

    pub fn set_fallback(&mut self, value: Option<f64>) {
        self.fallback = value;
    }

    pub fn get(&self, name: char) -> Option<f64> {
        self.bindings.get(&name).copied().or(self.fallback)
    }

    pub fn is_bound(&self, name: char) -> bool {
        self.get(name).is_some()
    }

    /// Explicit bindings in name order.
    pub fn bindings(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.bindings.iter().map(|(name, value)| (*name, *value))
    }
}

impl FromIterator<(char, f64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
            fallback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_bindings_win_over_fallback() {
        let mut env = Environment::uniform(1.0).with('a', 5.0);
        assert_eq!(env.get('a'), Some(5.0));
        assert_eq!(env.get('z'), Some(1.0));

        assert_eq!(env.unbind('a'), Some(5.0));
        assert_eq!(env.get('a'), Some(1.0));

        env.set_fallback(None);
        assert!(!env.is_bound('a'));
    }

    #[test]
    fn rebinding_returns_previous_value() {
        let mut env = Environment::new();
        assert_eq!(env.bind('x', 2.0), None);
        assert_eq!(env.bind('x', 3.0), Some(2.0));
        assert_eq!(env.get('x'), Some(3.0));
    }

    #[test]
    fn collects_from_pairs() {
        let env: Environment = [('b', 2.0), ('a', 1.0)].into_iter().collect();
        let pairs: Vec<_> = env.bindings().collect();
        assert_eq!(pairs, vec![('a', 1.0), ('b', 2.0)]);
        assert_eq!(env.get('c'), None);
    }
}
