use proptest::prelude::*;
use stackeval::evaluate;

/// A well-formed expression together with the value it must produce.
#[derive(Debug, Clone)]
enum Tree {
    Number(u32),
    X,
    Binary(Box<Tree>, char, Box<Tree>),
    Sin(Box<Tree>),
    Pow(Box<Tree>, Box<Tree>),
}

impl Tree {
    /// Renders the tree with every binary operand grouped, so the evaluation
    /// order is fixed by the parentheses alone.
    fn grouped(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::X => "x".to_string(),
            Self::Binary(left, op, right) => {
                format!("({}) {op} ({})", left.grouped(), right.grouped())
            },
            Self::Sin(arg) => format!("sin({})", arg.grouped()),
            Self::Pow(base, degree) => format!("pow({}, {})", base.grouped(), degree.grouped()),
        }
    }

    /// Renders the tree without any grouping around binary operands. The
    /// result is still well-formed, only its meaning may change.
    fn flat(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::X => "x".to_string(),
            Self::Binary(left, op, right) => format!("{} {op} {}", left.flat(), right.flat()),
            Self::Sin(arg) => format!("sin({})", arg.flat()),
            Self::Pow(base, degree) => format!("pow({}, {})", base.flat(), degree.flat()),
        }
    }

    fn value(&self) -> f64 {
        match self {
            Self::Number(n) => f64::from(*n),
            Self::X => 10.0,
            Self::Binary(left, op, right) => {
                let (left, right) = (left.value(), right.value());
                match op {
                    '+' => left + right,
                    '-' => left - right,
                    '*' => left * right,
                    _ => left / right,
                }
            },
            Self::Sin(arg) => arg.value().sin(),
            Self::Pow(base, degree) => base.value().powf(degree.value()),
        }
    }
}

fn tree() -> impl Strategy<Value = Tree> {
    let leaf = prop_oneof![(0u32..1000).prop_map(Tree::Number), Just(Tree::X)];

    leaf.prop_recursive(5, 48, 2, |inner| {
            prop_oneof![
                (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner.clone())
                    .prop_map(|(left, op, right)| Tree::Binary(Box::new(left), op, Box::new(right))),
                inner.clone().prop_map(|arg| Tree::Sin(Box::new(arg))),
                (inner.clone(), inner).prop_map(|(base, degree)| {
                                          Tree::Pow(Box::new(base), Box::new(degree))
                                      }),
            ]
        })
}

fn same(left: f64, right: f64) -> bool {
    left == right || (left.is_nan() && right.is_nan())
}

proptest! {
    #[test]
    fn well_formed_expressions_always_reduce(tree in tree()) {
        prop_assert!(evaluate(&tree.flat()).is_ok());
    }

    #[test]
    fn grouped_expressions_match_direct_computation(tree in tree()) {
        let value = evaluate(&tree.grouped()).unwrap();
        prop_assert!(same(value, tree.value()), "{} = {value}, expected {}", tree.grouped(), tree.value());
    }

    #[test]
    fn evaluation_is_deterministic(tree in tree()) {
        let src = tree.flat();
        let first = evaluate(&src).unwrap();
        let second = evaluate(&src).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
