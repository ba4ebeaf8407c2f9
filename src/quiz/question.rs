use rand::Rng;

/// The hidden data a question is rendered from.
///
/// Keeping the operands around (instead of just the rendered strings) lets
/// callers and tests check the answer against the numbers that were shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Multiplication { a: u32, b: u32 },
    Sorting { values: Vec<u32> },
    WordAddition { have: u32, more: u32 },
    WordSubtraction { have: u32, given: u32 },
    /// `a(x + b) = c`, where `c` is derived from the hidden `x`.
    LinearEquation { a: u32, b: u32, c: u32, x: u32 },
}

impl Problem {
    /// Pick one of the four variants uniformly and roll its operands.
    ///
    /// `level` only affects sorting, which asks for `3 + level` numbers.
    pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        match rng.random_range(0..4) {
            0 => Self::Multiplication {
                a: rng.random_range(1..=12),
                b: rng.random_range(1..=12),
            },
            1 => {
                let count = 3 + level as usize;
                let values = (0..count).map(|_| rng.random_range(1..=50)).collect();
                Self::Sorting { values }
            }
            2 => {
                if rng.random_bool(0.5) {
                    Self::WordAddition {
                        have: rng.random_range(1..=20),
                        more: rng.random_range(1..=20),
                    }
                } else {
                    let have = rng.random_range(10..=30);
                    let given = rng.random_range(1..=have);
                    Self::WordSubtraction { have, given }
                }
            }
            _ => {
                let a = rng.random_range(1..=5);
                let b = rng.random_range(1..=10);
                let x = rng.random_range(1..=10);
                Self::LinearEquation { a, b, c: a * (x + b), x }
            }
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Self::Multiplication { a, b } => format!("What is {a} x {b}?"),
            Self::Sorting { values } => format!("Sort these numbers: {}", join(values)),
            Self::WordAddition { have, more } => {
                format!("If you have {have} candies and get {more} more, how many?")
            }
            Self::WordSubtraction { have, given } => {
                format!("If you have {have} candies and give away {given}, how many left?")
            }
            Self::LinearEquation { a, b, c, .. } => format!("Solve for x: {a}(x + {b}) = {c}"),
        }
    }

    pub fn answer(&self) -> String {
        match self {
            Self::Multiplication { a, b } => (a * b).to_string(),
            Self::Sorting { values } => {
                let mut sorted = values.clone();
                sorted.sort_unstable();
                join(&sorted)
            }
            Self::WordAddition { have, more } => (have + more).to_string(),
            // `given` is drawn from 1..=have, so this never underflows
            Self::WordSubtraction { have, given } => (have - given).to_string(),
            Self::LinearEquation { x, .. } => x.to_string(),
        }
    }
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A rendered question. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answer: String,
    problem: Problem,
}

impl Question {
    pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        Self::from_problem(Problem::generate(level, rng))
    }

    pub fn from_problem(problem: Problem) -> Self {
        Self {
            prompt: problem.prompt(),
            answer: problem.answer(),
            problem,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Canonical decimal string(s): no leading zeros, no surrounding whitespace.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn sample(level: u32, seeds: u64) -> Vec<Question> {
        (0..seeds)
            .map(|seed| Question::generate(level, &mut Pcg32::seed_from_u64(seed)))
            .collect()
    }

    #[test]
    fn test_all_variants_show_up() {
        let questions = sample(1, 400);
        let mut seen = [false; 5];
        for q in &questions {
            let idx = match q.problem() {
                Problem::Multiplication { .. } => 0,
                Problem::Sorting { .. } => 1,
                Problem::WordAddition { .. } => 2,
                Problem::WordSubtraction { .. } => 3,
                Problem::LinearEquation { .. } => 4,
            };
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 5]);
    }

    #[test]
    fn test_multiplication_answer_matches_operands() {
        for q in sample(2, 500) {
            if let Problem::Multiplication { a, b } = *q.problem() {
                assert!((1..=12).contains(&a) && (1..=12).contains(&b));
                assert_eq!(q.prompt(), format!("What is {a} x {b}?"));
                assert_eq!(q.answer(), (a * b).to_string());
            }
        }
    }

    #[test]
    fn test_sorting_answer_is_full_ascending_sort() {
        for level in 1..=5 {
            for q in sample(level, 300) {
                if let Problem::Sorting { values } = q.problem() {
                    assert_eq!(values.len(), 3 + level as usize);
                    assert!(values.iter().all(|v| (1..=50).contains(v)));

                    let answer: Vec<u32> = q
                        .answer()
                        .split(' ')
                        .map(|s| s.parse().unwrap())
                        .collect();
                    assert_eq!(answer.len(), values.len());
                    assert!(answer.windows(2).all(|w| w[0] <= w[1]));

                    let mut expected = values.clone();
                    expected.sort();
                    assert_eq!(answer, expected);
                }
            }
        }
    }

    #[test]
    fn test_sorting_keeps_duplicates() {
        let q = Question::from_problem(Problem::Sorting {
            values: vec![7, 3, 7, 1],
        });
        assert_eq!(q.prompt(), "Sort these numbers: 7 3 7 1");
        assert_eq!(q.answer(), "1 3 7 7");
    }

    #[test]
    fn test_word_problems_stay_in_range() {
        for q in sample(1, 800) {
            match *q.problem() {
                Problem::WordAddition { have, more } => {
                    assert!((1..=20).contains(&have) && (1..=20).contains(&more));
                    assert_eq!(q.answer(), (have + more).to_string());
                }
                Problem::WordSubtraction { have, given } => {
                    assert!((10..=30).contains(&have));
                    assert!(given >= 1 && given <= have);
                    assert_eq!(q.answer(), (have - given).to_string());
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_linear_equation_solution_reproduces_c() {
        for q in sample(3, 500) {
            if let Problem::LinearEquation { a, b, c, x } = *q.problem() {
                assert!((1..=5).contains(&a));
                assert!((1..=10).contains(&b));
                assert!((1..=10).contains(&x));
                assert_eq!(a * (x + b), c);
                assert_eq!(q.prompt(), format!("Solve for x: {a}(x + {b}) = {c}"));
                assert_eq!(q.answer(), x.to_string());
            }
        }
    }

    #[test]
    fn test_answers_are_canonical() {
        for q in sample(4, 300) {
            assert_eq!(q.answer(), q.answer().trim());
            for token in q.answer().split(' ') {
                assert!(!token.is_empty());
                assert!(token == "0" || !token.starts_with('0'));
            }
        }
    }

    #[test]
    fn test_same_seed_same_question() {
        let a = Question::generate(2, &mut Pcg32::seed_from_u64(42));
        let b = Question::generate(2, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
